mod classify;
mod config;
mod coords;
mod data_models;
mod errors;
mod metrics;
mod output;
mod parallel;
mod parsers;
mod processor;
mod style;

use clap::Parser;
use log::info;
use std::path::PathBuf;

use crate::classify::{Classifier, NightlifeGranularity};
use crate::config::PipelineConfig;
use crate::errors::PipelineError;
use crate::metrics::METRICS;
use crate::parallel::ParallelProcessor;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Classifies and geocodes a spaces dataset for map rendering", long_about = None)]
struct Cli {
    /// Source CSV dataset
    #[clap(long, value_parser)]
    input: PathBuf,
    /// GeoJSON output for the map layer
    #[clap(long, default_value = "spaces.geojson")]
    output: PathBuf,
    /// Optional JSON pipeline configuration
    #[clap(long)]
    config: Option<PathBuf>,
    /// Collapse Bar/Club/Restaurant into the single merged bucket
    #[clap(long)]
    merged_nightlife: bool,
}

fn main() -> Result<(), PipelineError> {
    env_logger::init();
    let cli = Cli::parse();

    let mut pipeline_config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => PipelineConfig::default(),
    };
    if cli.merged_nightlife {
        pipeline_config.nightlife_granularity = NightlifeGranularity::Merged;
    }

    info!("Reading spaces dataset from {}", cli.input.display());
    let records = time_operation!(
        "csv_read",
        parsers::csv_parser::read_spaces_csv(&pipeline_config, &cli.input)
    )
    .map_err(|e| PipelineError::Parse(e, cli.input.clone()))?;
    METRICS.lock().record_rows_read(records.len() as u64);
    info!("Read {} records", records.len());

    let classifier = Classifier::new(pipeline_config.nightlife_granularity);
    let record_processor = ParallelProcessor::new();
    let spaces = time_operation!(
        "classification",
        record_processor.process_records(&classifier, records)
    );

    info!("Writing GeoJSON to {}", cli.output.display());
    time_operation!("geojson_write", output::write_geojson(&cli.output, &spaces))?;

    METRICS.lock().print_summary();
    Ok(())
}
