use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::classify::NightlifeGranularity;
use crate::errors::ConfigError;

/// Column names as they appear in the source CSV header. The defaults
/// match the dataset's human-authored headers.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ColumnMap {
    #[serde(default = "default_name_col")]
    pub name: String,
    #[serde(default = "default_type_col")]
    pub type_label: String,
    #[serde(default = "default_status_col")]
    pub status: String,
    #[serde(default = "default_description_col")]
    pub description: String,
    #[serde(default = "default_coordinates_col")]
    pub coordinates: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            name: default_name_col(),
            type_label: default_type_col(),
            status: default_status_col(),
            description: default_description_col(),
            coordinates: default_coordinates_col(),
        }
    }
}

fn default_name_col() -> String {
    "Space".to_string()
}
fn default_type_col() -> String {
    "Type of Space".to_string()
}
fn default_status_col() -> String {
    "Active, closed or moved?".to_string()
}
fn default_description_col() -> String {
    "Short Description / History".to_string()
}
fn default_coordinates_col() -> String {
    "Coordinates".to_string()
}

fn default_delimiter() -> String {
    ",".to_string()
}

/// Pipeline configuration, loaded from a JSON file. Every field is
/// defaulted so an empty object (or no file at all) is a valid config.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PipelineConfig {
    #[serde(default)]
    pub columns: ColumnMap,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default)]
    pub nightlife_granularity: NightlifeGranularity,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            columns: ColumnMap::default(),
            delimiter: default_delimiter(),
            nightlife_granularity: NightlifeGranularity::default(),
        }
    }
}

impl PipelineConfig {
    /// First byte of the configured delimiter; an empty string falls back
    /// to a comma.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter.bytes().next().unwrap_or(b',')
    }
}

/// Load the pipeline configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<PipelineConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|e| ConfigError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = BufReader::new(file);

    let config: PipelineConfig =
        serde_json::from_reader(reader).map_err(|e| ConfigError::JsonParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(config)
}
