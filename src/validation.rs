//! Boundary checks for geohash operations.
//!
//! Every public operation validates its input here before doing any work, so
//! a bad symbol or malformed coordinate is reported before computation starts.

use crate::base32::decode_symbol;
use crate::error::{GeohashError, Result};
use geocell_types::coordinate::Coordinate;

/// Validates a coordinate has finite longitude and latitude.
///
/// Out-of-range finite values are allowed; bisection clamps them into the
/// edge cells.
///
/// # Examples
///
/// ```
/// use geocell::validation::validate_coordinate;
/// use geocell::Coordinate;
///
/// assert!(validate_coordinate(&Coordinate::new(-74.0060, 40.7128)).is_ok());
/// assert!(validate_coordinate(&Coordinate::new(f64::NAN, 40.7128)).is_err());
/// ```
pub fn validate_coordinate(coord: &Coordinate) -> Result<()> {
    if !coord.is_finite() {
        return Err(GeohashError::InvalidInput(format!(
            "Coordinate must be finite, got: {}",
            coord
        )));
    }

    Ok(())
}

/// Validates multiple coordinates, reporting the index of the first bad one.
pub fn validate_coordinates(coords: &[Coordinate]) -> Result<()> {
    for (idx, coord) in coords.iter().enumerate() {
        validate_coordinate(coord).map_err(|e| {
            GeohashError::InvalidInput(format!("Coordinate at index {}: {}", idx, e))
        })?;
    }
    Ok(())
}

/// Builds a coordinate from a `[lon, lat]` slice.
///
/// # Examples
///
/// ```
/// use geocell::validation::coordinate_from_slice;
///
/// let coord = coordinate_from_slice(&[-122.419, 37.774]).unwrap();
/// assert_eq!(coord.lat, 37.774);
///
/// assert!(coordinate_from_slice(&[-122.419]).is_err());
/// assert!(coordinate_from_slice(&[-122.419, 37.774, 10.0]).is_err());
/// ```
pub fn coordinate_from_slice(values: &[f64]) -> Result<Coordinate> {
    match values {
        [lon, lat] => Ok(Coordinate::new(*lon, *lat)),
        _ => Err(GeohashError::InvalidInput(format!(
            "Coordinate must have exactly 2 values (lon, lat), got: {}",
            values.len()
        ))),
    }
}

/// Validates a geohash is non-empty and uses only alphabet symbols.
pub fn validate_geohash(geohash: &str) -> Result<()> {
    if geohash.is_empty() {
        return Err(GeohashError::InvalidInput(
            "Geohash must not be empty".to_string(),
        ));
    }

    for symbol in geohash.chars() {
        decode_symbol(symbol)?;
    }

    Ok(())
}
