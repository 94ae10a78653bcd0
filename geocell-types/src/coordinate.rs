use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

/// A geographic coordinate as a (longitude, latitude) pair in degrees.
///
/// Longitude is expected in [-180, 180] and latitude in [-90, 90]. Nothing is
/// enforced at construction; range and finiteness checks belong to the
/// operations that consume coordinates.
///
/// # Examples
///
/// ```
/// use geocell_types::coordinate::Coordinate;
///
/// let nyc = Coordinate::new(-74.0060, 40.7128);
/// assert_eq!(nyc.lon(), -74.0060);
/// assert_eq!(nyc.lat(), 40.7128);
///
/// let from_tuple: Coordinate = (-74.0060, 40.7128).into();
/// assert_eq!(nyc, from_tuple);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Longitude in degrees
    pub lon: f64,
    /// Latitude in degrees
    pub lat: f64,
}

impl Coordinate {
    /// Create a coordinate from longitude and latitude.
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Get the longitude.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Get the latitude.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Whether both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }

    /// Largest absolute per-axis difference to another coordinate, in degrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use geocell_types::coordinate::Coordinate;
    ///
    /// let a = Coordinate::new(10.0, 20.0);
    /// let b = Coordinate::new(10.5, 19.0);
    /// assert_eq!(a.max_delta(&b), 1.0);
    /// ```
    pub fn max_delta(&self, other: &Coordinate) -> f64 {
        (self.lon - other.lon).abs().max((self.lat - other.lat).abs())
    }

    /// Convert to a `geo::Point` (x = longitude, y = latitude).
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self::new(lon, lat)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coord: Coordinate) -> Self {
        (coord.lon, coord.lat)
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(point: Point<f64>) -> Self {
        Self::new(point.x(), point.y())
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(coord: Coordinate) -> Self {
        coord.to_point()
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.x, coord.y)
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(coord: Coordinate) -> Self {
        geo::coord! { x: coord.lon, y: coord.lat }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lon, self.lat)
    }
}
