use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading config file {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse JSON configuration in {}: {source}", .path.display())]
    JsonParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Configuration file not found at {}", .path.display())]
    NotFound { path: PathBuf },
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error reading data file {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error reading CSV headers in {}: {source}", .path.display())]
    HeaderReadError {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Configuration error in {} for field '{field}': {message}", .path.display())]
    ConfigError {
        path: PathBuf,
        field: String,
        message: String,
    },
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration parsing failed: {0}")]
    ConfigParse(#[from] ConfigError),
    #[error("Parsing failed for {}: {}", .1.display(), .0)]
    Parse(ParseError, PathBuf),
    #[error("Failed to write output file {}: {source}", .path.display())]
    OutputIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to serialize GeoJSON output: {0}")]
    OutputSerialize(#[from] serde_json::Error),
}
