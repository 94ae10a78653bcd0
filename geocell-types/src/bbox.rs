use crate::coordinate::Coordinate;
use geo::Rect;
use serde::{Deserialize, Serialize};

/// Error type for GeoJSON conversions.
#[cfg(feature = "geojson")]
#[derive(Debug)]
pub enum GeoJsonError {
    /// Serialization failed
    Serialization(String),
}

#[cfg(feature = "geojson")]
impl std::fmt::Display for GeoJsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialization(msg) => write!(f, "GeoJSON serialization error: {}", msg),
        }
    }
}

#[cfg(feature = "geojson")]
impl std::error::Error for GeoJsonError {}

/// A 2D axis-aligned bounding box.
///
/// Describes the rectangle covered by a geohash cell. This is a wrapper
/// around `geo::Rect` with longitude on x and latitude on y.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox2D {
    /// The underlying geometric rectangle
    pub rect: Rect,
}

impl BoundingBox2D {
    /// Create a new bounding box from minimum and maximum coordinates.
    ///
    /// # Arguments
    ///
    /// * `min_lon` - Western boundary
    /// * `min_lat` - Southern boundary
    /// * `max_lon` - Eastern boundary
    /// * `max_lat` - Northern boundary
    ///
    /// # Examples
    ///
    /// ```
    /// use geocell_types::bbox::BoundingBox2D;
    ///
    /// let bbox = BoundingBox2D::new(0.0, 45.0, 45.0, 90.0);
    /// assert_eq!(bbox.width(), 45.0);
    /// ```
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            rect: Rect::new(
                geo::coord! { x: min_lon, y: min_lat },
                geo::coord! { x: max_lon, y: max_lat },
            ),
        }
    }

    /// Create a bounding box from a `geo::Rect`.
    pub fn from_rect(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn min_lon(&self) -> f64 {
        self.rect.min().x
    }

    pub fn min_lat(&self) -> f64 {
        self.rect.min().y
    }

    pub fn max_lon(&self) -> f64 {
        self.rect.max().x
    }

    pub fn max_lat(&self) -> f64 {
        self.rect.max().y
    }

    /// Get the center of the bounding box.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.min_lon() + self.max_lon()) / 2.0,
            (self.min_lat() + self.max_lat()) / 2.0,
        )
    }

    /// Longitude span in degrees.
    pub fn width(&self) -> f64 {
        self.max_lon() - self.min_lon()
    }

    /// Latitude span in degrees.
    pub fn height(&self) -> f64 {
        self.max_lat() - self.min_lat()
    }

    /// Check if a coordinate lies within this bounding box (edges inclusive).
    pub fn contains_point(&self, coord: &Coordinate) -> bool {
        coord.lon >= self.min_lon()
            && coord.lon <= self.max_lon()
            && coord.lat >= self.min_lat()
            && coord.lat <= self.max_lat()
    }

    /// Check if this bounding box intersects with another.
    pub fn intersects(&self, other: &BoundingBox2D) -> bool {
        !(self.max_lon() < other.min_lon()
            || self.min_lon() > other.max_lon()
            || self.max_lat() < other.min_lat()
            || self.min_lat() > other.max_lat())
    }

    /// Convert to a GeoJSON polygon string (closed exterior ring, counter-clockwise).
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "geojson")]
    /// # {
    /// use geocell_types::bbox::BoundingBox2D;
    ///
    /// let bbox = BoundingBox2D::new(0.0, 45.0, 45.0, 90.0);
    /// let json = bbox.to_geojson().unwrap();
    /// assert!(json.contains("Polygon"));
    /// # }
    /// ```
    #[cfg(feature = "geojson")]
    pub fn to_geojson(&self) -> Result<String, GeoJsonError> {
        use geojson::{Geometry, Value};

        let ring = vec![
            vec![self.min_lon(), self.min_lat()],
            vec![self.max_lon(), self.min_lat()],
            vec![self.max_lon(), self.max_lat()],
            vec![self.min_lon(), self.max_lat()],
            vec![self.min_lon(), self.min_lat()],
        ];
        let geom = Geometry::new(Value::Polygon(vec![ring]));
        serde_json::to_string(&geom).map_err(|e| {
            GeoJsonError::Serialization(format!("Failed to serialize bounding box: {}", e))
        })
    }
}
