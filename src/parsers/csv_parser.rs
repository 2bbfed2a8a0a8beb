use crate::config::PipelineConfig;
use crate::data_models::SpaceRecord;
use crate::errors::ParseError;
use csv::{ReaderBuilder, StringRecord};
use log::warn;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Header-resolved positions of the five configured columns.
#[derive(Debug)]
struct ColumnIndices {
    name: usize,
    type_label: usize,
    status: usize,
    description: usize,
    coordinates: usize,
}

/// Read the spaces dataset from a CSV file into raw records.
pub fn read_spaces_csv(
    config: &PipelineConfig,
    file_path: &Path,
) -> Result<Vec<SpaceRecord>, ParseError> {
    let file = File::open(file_path).map_err(|e| ParseError::IoError {
        path: file_path.to_path_buf(),
        source: e,
    })?;
    read_spaces_from_reader(config, file_path, file)
}

/// Reader-generic body so tests can feed CSV text without touching disk.
pub fn read_spaces_from_reader<R: Read>(
    config: &PipelineConfig,
    file_path: &Path,
    input: R,
) -> Result<Vec<SpaceRecord>, ParseError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(config.delimiter_byte())
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| ParseError::HeaderReadError {
            path: file_path.to_path_buf(),
            source: e,
        })?
        .clone();
    let indices = resolve_columns(&headers, config, file_path)?;

    let mut records = Vec::new();
    for (row_index, result) in reader.records().enumerate() {
        match result {
            Ok(row) => records.push(record_from_row(&row, &indices)),
            Err(e) => {
                // Row 1 is the header; data rows start at 2.
                warn!(
                    "Skipping unreadable row {} in {}: {}",
                    row_index + 2,
                    file_path.display(),
                    e
                );
            }
        }
    }

    Ok(records)
}

/// Map configured column names onto header positions. A configured column
/// missing from the header is a configuration error, not a data error.
fn resolve_columns(
    headers: &StringRecord,
    config: &PipelineConfig,
    file_path: &Path,
) -> Result<ColumnIndices, ParseError> {
    let find = |name: &str, field: &str| {
        headers
            .iter()
            .position(|header| header.trim() == name.trim())
            .ok_or_else(|| ParseError::ConfigError {
                path: file_path.to_path_buf(),
                field: format!("columns.{} / '{}'", field, name),
                message: "Column name not found in headers.".to_string(),
            })
    };

    Ok(ColumnIndices {
        name: find(&config.columns.name, "name")?,
        type_label: find(&config.columns.type_label, "type_label")?,
        status: find(&config.columns.status, "status")?,
        description: find(&config.columns.description, "description")?,
        coordinates: find(&config.columns.coordinates, "coordinates")?,
    })
}

fn record_from_row(row: &StringRecord, indices: &ColumnIndices) -> SpaceRecord {
    // Short rows yield empty strings for the missing cells.
    let field = |index: usize| row.get(index).unwrap_or("").trim().to_string();

    SpaceRecord {
        name: field(indices.name),
        type_label: field(indices.type_label),
        status_raw: field(indices.status),
        description: field(indices.description),
        coordinates_raw: field(indices.coordinates),
    }
}
