//! Geohash encoding and decoding.
//!
//! A geohash interleaves two bisection streams, longitude first: even bit
//! positions refine longitude, odd positions refine latitude. The interleaved
//! bits are then packed five at a time into base-32 symbols.

use crate::base32::{BITS_PER_SYMBOL, Bits, bits_to_geohash, geohash_to_bits};
use crate::bisect::{
    LATITUDE_BOUNDS, LONGITUDE_BOUNDS, bits_to_float, bits_to_interval, float_to_bits,
};
use crate::error::Result;
use crate::validation::{coordinate_from_slice, validate_coordinate, validate_geohash};
use geocell_types::bbox::BoundingBox2D;
use geocell_types::coordinate::Coordinate;

/// Geohash length used when none is requested: 12 symbols, 30 bits per axis.
pub const DEFAULT_LENGTH: usize = 12;

/// Encode a coordinate as a geohash of `length` symbols.
///
/// The length is halved with integer division and each axis gets
/// `(length / 2) * 5` bits, so an odd `length` produces one symbol fewer than
/// requested and anything below 2 produces an empty string.
///
/// # Examples
///
/// ```
/// use geocell::{encode, Coordinate};
///
/// let sf = Coordinate::new(-122.419, 37.774);
/// assert_eq!(encode(sf, 12).unwrap(), "9q8yyk91qxcw");
/// assert_eq!(encode(sf, 5).unwrap(), "9q8y");
/// ```
pub fn encode(coord: impl Into<Coordinate>, length: usize) -> Result<String> {
    let coord = coord.into();
    validate_coordinate(&coord)?;

    if length % 2 == 1 {
        log::warn!(
            "Odd geohash length {} truncated to {} symbols",
            length,
            length - 1
        );
    }

    let axis_bits = (length / 2) * BITS_PER_SYMBOL;
    let lon = float_to_bits(coord.lon, LONGITUDE_BOUNDS.0, LONGITUDE_BOUNDS.1, axis_bits);
    let lat = float_to_bits(coord.lat, LATITUDE_BOUNDS.0, LATITUDE_BOUNDS.1, axis_bits);

    let interleaved: Bits = lon
        .iter()
        .zip(lat.iter())
        .flat_map(|(&lon_bit, &lat_bit)| [lon_bit, lat_bit])
        .collect();

    bits_to_geohash(&interleaved)
}

/// Encode a `[lon, lat]` slice. Anything but exactly two values is rejected.
pub fn encode_slice(values: &[f64], length: usize) -> Result<String> {
    encode(coordinate_from_slice(values)?, length)
}

/// Split a geohash into its longitude and latitude bit streams.
fn deinterleave(geohash: &str) -> Result<(Bits, Bits)> {
    validate_geohash(geohash)?;
    let bits = geohash_to_bits(geohash)?;

    let lon = bits.iter().step_by(2).copied().collect();
    let lat = bits.iter().skip(1).step_by(2).copied().collect();
    Ok((lon, lat))
}

/// Decode a geohash to the center of its cell.
///
/// # Examples
///
/// ```
/// use geocell::decode;
///
/// let coord = decode("9q8yyk8ytpxr").unwrap();
/// assert!((coord.lon - -122.419).abs() < 0.001);
/// assert!((coord.lat - 37.774).abs() < 0.001);
///
/// assert!(decode("").is_err());
/// ```
pub fn decode(geohash: &str) -> Result<Coordinate> {
    let (lon, lat) = deinterleave(geohash)?;
    Ok(Coordinate::new(
        bits_to_float(&lon, LONGITUDE_BOUNDS.0, LONGITUDE_BOUNDS.1),
        bits_to_float(&lat, LATITUDE_BOUNDS.0, LATITUDE_BOUNDS.1),
    ))
}

/// Decode a geohash to the rectangle its cell covers.
///
/// # Examples
///
/// ```
/// use geocell::decode_bbox;
///
/// let cell = decode_bbox("u").unwrap();
/// assert_eq!((cell.min_lon(), cell.max_lon()), (0.0, 45.0));
/// assert_eq!((cell.min_lat(), cell.max_lat()), (45.0, 90.0));
/// ```
pub fn decode_bbox(geohash: &str) -> Result<BoundingBox2D> {
    let (lon, lat) = deinterleave(geohash)?;
    let (min_lon, max_lon) = bits_to_interval(&lon, LONGITUDE_BOUNDS.0, LONGITUDE_BOUNDS.1);
    let (min_lat, max_lat) = bits_to_interval(&lat, LATITUDE_BOUNDS.0, LATITUDE_BOUNDS.1);
    Ok(BoundingBox2D::new(min_lon, min_lat, max_lon, max_lat))
}
