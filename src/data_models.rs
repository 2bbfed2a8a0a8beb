use serde::Serialize;

use crate::classify::Category;

/// Represents a single row of the source dataset, exactly as entered.
/// Missing cells come through as empty strings so downstream text matching
/// never sees a null.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpaceRecord {
    pub name: String,
    pub type_label: String,
    pub status_raw: String,
    pub description: String,
    pub coordinates_raw: String,
}

/// A validated latitude/longitude pair. Both components are finite; no
/// range check is applied (out-of-range values pass through unchanged).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// Active-vs-closed bucket derived from the free-text status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Closed,
}

impl Status {
    /// Anything other than a trimmed, lowercased "active" counts as closed.
    /// The dataset also uses "moved", which renders with the closed layer.
    pub fn from_raw(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("active") {
            Status::Active
        } else {
            Status::Closed
        }
    }
}

/// A source record plus everything the pipeline derives from it. Built once
/// per load cycle and never mutated; a reload rebuilds the whole set.
#[derive(Debug, Clone)]
pub struct ClassifiedSpace {
    pub record: SpaceRecord,
    pub coordinate: Option<Coordinate>,
    pub category: Category,
    pub status: Status,
}
