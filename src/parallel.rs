use crate::classify::Classifier;
use crate::data_models::{ClassifiedSpace, SpaceRecord};
use crate::metrics::METRICS;
use crate::processor;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use std::sync::Arc;

/// Parallel record processor using Rayon. Records carry no cross-record
/// state, so they process in whatever order the pool picks.
pub struct ParallelProcessor {
    #[allow(dead_code)]
    num_workers: usize,
}

impl ParallelProcessor {
    pub fn new() -> Self {
        let num_workers = num_cpus::get();
        info!("Initializing ParallelProcessor with {} workers", num_workers);
        Self { num_workers }
    }

    /// Classify and geocode every record in parallel.
    pub fn process_records(
        &self,
        classifier: &Classifier,
        records: Vec<SpaceRecord>,
    ) -> Vec<ClassifiedSpace> {
        let total_records = records.len();
        info!("Starting parallel processing of {} records", total_records);

        let progress = Arc::new(ProgressBar::new(total_records as u64));
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );

        let results: Vec<ClassifiedSpace> = records
            .into_par_iter()
            .map(|record| {
                let space = processor::process_record(classifier, record);
                METRICS
                    .lock()
                    .record_classification(space.category.label(), space.coordinate.is_some());
                progress.inc(1);
                space
            })
            .collect();

        progress.finish_with_message("Record processing completed");
        results
    }
}

impl Default for ParallelProcessor {
    fn default() -> Self {
        Self::new()
    }
}
