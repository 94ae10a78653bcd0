//! A configured entry point over the free geohash functions.

use crate::adjacency::{self, Direction};
use crate::codec;
use crate::config::GeohashConfig;
use crate::error::Result;
use crate::fit;
use geocell_types::bbox::BoundingBox2D;
use geocell_types::coordinate::Coordinate;
use geocell_types::neighbors::Neighbors;

/// Geohash operations using lengths from a validated [`GeohashConfig`].
///
/// # Examples
///
/// ```
/// use geocell::{Coordinate, GeohashConfig, Geohasher};
///
/// let hasher = Geohasher::new(GeohashConfig::default().with_encode_length(6))?;
/// let cell = hasher.encode(Coordinate::new(-74.0060, 40.7128))?;
/// assert_eq!(cell, "dr5reg");
/// # Ok::<(), geocell::GeohashError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Geohasher {
    config: GeohashConfig,
}

impl Geohasher {
    pub fn new(config: GeohashConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeohashConfig {
        &self.config
    }

    /// Encode at the configured length.
    pub fn encode(&self, coord: impl Into<Coordinate>) -> Result<String> {
        codec::encode(coord, self.config.encode_length)
    }

    pub fn decode(&self, geohash: &str) -> Result<Coordinate> {
        codec::decode(geohash)
    }

    pub fn decode_bbox(&self, geohash: &str) -> Result<BoundingBox2D> {
        codec::decode_bbox(geohash)
    }

    pub fn adjacent(&self, geohash: &str, direction: Direction) -> Result<String> {
        adjacency::adjacent(geohash, direction)
    }

    pub fn neighbors(&self, geohash: &str) -> Result<Neighbors> {
        adjacency::neighbors(geohash)
    }

    /// Neighbor fit at the configured fit length.
    pub fn neighbors_fit<I>(&self, centroid: impl Into<Coordinate>, points: I) -> Result<String>
    where
        I: IntoIterator,
        I::Item: Into<Coordinate>,
    {
        fit::neighbors_fit_with_length(centroid, points, self.config.fit_length)
    }
}
