//! GeoJSON export for the map-rendering collaborator.
//!
//! One Point feature per record with a valid coordinate; records whose
//! coordinate failed to parse are excluded from placement here (the core
//! only reports validity, the exporter decides exclusion). Properties
//! carry the category, status bucket, and marker style hints; visual
//! presentation stays on the rendering side.

use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::data_models::{ClassifiedSpace, Status};
use crate::errors::PipelineError;
use crate::metrics::METRICS;
use crate::style;

#[derive(Serialize, Debug)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    kind: &'static str,
    features: Vec<Feature>,
}

#[derive(Serialize, Debug)]
pub struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    geometry: Geometry,
    properties: Properties,
}

#[derive(Serialize, Debug)]
struct Geometry {
    #[serde(rename = "type")]
    kind: &'static str,
    /// GeoJSON order: [longitude, latitude].
    coordinates: [f64; 2],
}

#[derive(Serialize, Debug)]
struct Properties {
    name: String,
    category: &'static str,
    status: Status,
    description: String,
    directions_url: String,
    icon: &'static str,
    color: &'static str,
}

/// Build the exportable feature set from the classified records.
pub fn build_feature_collection(spaces: &[ClassifiedSpace]) -> FeatureCollection {
    let features = spaces
        .iter()
        .filter_map(|space| {
            let coord = space.coordinate?;
            let marker = match space.status {
                Status::Active => style::style_for(space.category),
                Status::Closed => style::CLOSED_STYLE,
            };
            Some(Feature {
                kind: "Feature",
                geometry: Geometry {
                    kind: "Point",
                    coordinates: [coord.lon, coord.lat],
                },
                properties: Properties {
                    name: space.record.name.clone(),
                    category: space.category.label(),
                    status: space.status,
                    description: space.record.description.clone(),
                    directions_url: format!(
                        "https://www.google.com/maps/dir/?api=1&destination={},{}",
                        coord.lat, coord.lon
                    ),
                    icon: marker.icon,
                    color: marker.color,
                },
            })
        })
        .collect();

    FeatureCollection {
        kind: "FeatureCollection",
        features,
    }
}

/// Serialize the feature collection to a GeoJSON file.
pub fn write_geojson(output_path: &Path, spaces: &[ClassifiedSpace]) -> Result<(), PipelineError> {
    let collection = build_feature_collection(spaces);
    METRICS
        .lock()
        .record_features_exported(collection.features.len() as u64);

    let file = File::create(output_path).map_err(|e| PipelineError::OutputIo {
        path: output_path.to_path_buf(),
        source: e,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), &collection)?;

    Ok(())
}
