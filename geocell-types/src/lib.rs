//! # geocell-types
//!
//! Value types shared by the geocell GeoHash library:
//!
//! - **Coordinate**: a longitude/latitude pair
//! - **Cell bounds**: `BoundingBox2D`, the rectangle covered by a geohash cell
//! - **Neighbors**: the 3x3 block of cells around a geohash
//!
//! All types are serializable with Serde and convert to and from the `geo`
//! crate's geometric primitives.
//!
//! ## Examples
//!
//! ```rust
//! use geocell_types::bbox::BoundingBox2D;
//! use geocell_types::coordinate::Coordinate;
//!
//! let sf = Coordinate::new(-122.419, 37.774);
//! let bay_area = BoundingBox2D::new(-123.0, 37.0, -121.5, 38.5);
//! assert!(bay_area.contains_point(&sf));
//! ```

pub mod bbox;
pub mod coordinate;
pub mod neighbors;
