//! Permissive parser for the dataset's informally encoded coordinate column.

use crate::data_models::Coordinate;

/// Parse a latitude/longitude pair out of a loosely formatted string.
///
/// Accepts both "43.6532,-79.3832" and "43.6532 -79.3832" encodings by
/// unifying commas into whitespace before tokenizing. Tokens beyond the
/// second are ignored. Returns `None` unless both components parse as
/// finite floats; a half-valid pair is no pair.
pub fn parse_latlon(raw: &str) -> Option<Coordinate> {
    let cleaned = raw.trim().replace(',', " ");
    let mut tokens = cleaned.split_whitespace();
    let lat = parse_finite(tokens.next()?)?;
    let lon = parse_finite(tokens.next()?)?;
    Some(Coordinate { lat, lon })
}

fn parse_finite(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}
