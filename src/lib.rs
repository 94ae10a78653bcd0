//! GeoHash encoding for geographic coordinates.
//!
//! A geohash maps a (longitude, latitude) pair to a base-32 string; strings
//! sharing a prefix lie in the same cell, and longer strings describe smaller
//! cells. Besides encoding and decoding, the crate finds adjacent cells
//! directly on the string and fits the smallest 3x3 block of cells around a
//! centroid that holds a set of points.
//!
//! ```rust
//! use geocell::{Coordinate, Direction, adjacent, decode, encode, neighbors};
//!
//! let sf = Coordinate::new(-122.419, 37.774);
//! let cell = encode(sf, 12)?;
//! assert!(cell.starts_with("9q8yy"));
//!
//! let center = decode(&cell)?;
//! assert!((center.lon - sf.lon).abs() < 1e-5);
//!
//! assert_eq!(adjacent("u000", Direction::North)?, "u001");
//! assert_eq!(neighbors("9q8yy")?.c, "9q8yy");
//! # Ok::<(), geocell::GeohashError>(())
//! ```

pub mod adjacency;
pub mod base32;
pub mod bisect;
pub mod codec;
pub mod config;
pub mod error;
pub mod fit;
pub mod geohasher;
pub mod validation;

pub use adjacency::{Direction, adjacent, adjacent_named, neighbors};
pub use codec::{DEFAULT_LENGTH, decode, decode_bbox, encode, encode_slice};
pub use config::GeohashConfig;
pub use error::{GeohashError, Result};
pub use fit::{neighbors_fit, neighbors_fit_with_length};
pub use geohasher::Geohasher;

pub use geo::{Coord, Point, Rect};

pub use geocell_types::bbox::BoundingBox2D;
pub use geocell_types::coordinate::Coordinate;
pub use geocell_types::neighbors::Neighbors;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{Coordinate, Direction, GeohashConfig, GeohashError, Geohasher, Result};

    pub use crate::{adjacent, decode, encode, neighbors, neighbors_fit};

    pub use crate::{BoundingBox2D, Neighbors};
}
