use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Global metrics instance
pub static METRICS: Lazy<Mutex<Metrics>> = Lazy::new(|| Mutex::new(Metrics::new()));

/// Pipeline metrics tracker
#[derive(Debug, Default)]
pub struct Metrics {
    pub records_read: u64,
    pub records_classified: u64,
    pub coords_invalid: u64,
    pub features_exported: u64,
    pub category_counts: HashMap<&'static str, u64>,
    pub processing_times: HashMap<String, Duration>,
    pub start_time: Option<Instant>,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    pub fn record_rows_read(&mut self, count: u64) {
        self.records_read += count;
    }

    pub fn record_classification(&mut self, category_label: &'static str, has_coordinate: bool) {
        self.records_classified += 1;
        if !has_coordinate {
            self.coords_invalid += 1;
        }
        *self.category_counts.entry(category_label).or_insert(0) += 1;
    }

    pub fn record_features_exported(&mut self, count: u64) {
        self.features_exported += count;
    }

    pub fn record_processing_time(&mut self, operation: String, duration: Duration) {
        self.processing_times.insert(operation, duration);
    }

    pub fn get_total_duration(&self) -> Duration {
        self.start_time
            .map(|start| start.elapsed())
            .unwrap_or_default()
    }

    pub fn get_throughput(&self) -> f64 {
        let duration_secs = self.get_total_duration().as_secs_f64();
        if duration_secs > 0.0 {
            self.records_classified as f64 / duration_secs
        } else {
            0.0
        }
    }

    pub fn print_summary(&self) {
        let duration = self.get_total_duration();
        println!("\n========== Pipeline Metrics Summary ==========");
        println!("Total Duration: {:.2?}", duration);
        println!("Records Read: {}", self.records_read);
        println!("Records Classified: {}", self.records_classified);
        println!("Invalid Coordinates: {}", self.coords_invalid);
        println!("Features Exported: {}", self.features_exported);
        println!("Throughput: {:.2} records/sec", self.get_throughput());

        if !self.category_counts.is_empty() {
            println!("\nCategory Counts:");
            let mut counts: Vec<_> = self.category_counts.iter().collect();
            counts.sort_by_key(|(label, _)| *label);
            for (label, count) in counts {
                println!("  {}: {}", label, count);
            }
        }

        if !self.processing_times.is_empty() {
            println!("\nProcessing Times:");
            for (op, duration) in &self.processing_times {
                println!("  {}: {:.2?}", op, duration);
            }
        }
        println!("=============================================\n");
    }
}

/// Helper macro to time an operation
#[macro_export]
macro_rules! time_operation {
    ($name:expr, $op:expr) => {{
        let start = std::time::Instant::now();
        let result = $op;
        let duration = start.elapsed();
        crate::metrics::METRICS
            .lock()
            .record_processing_time($name.to_string(), duration);
        result
    }};
}
