//! Shortest geohash prefix whose 3x3 neighbor block bounds a point set.

use crate::adjacency::neighbors;
use crate::codec::{DEFAULT_LENGTH, encode};
use crate::error::{GeohashError, Result};
use crate::validation::validate_coordinates;
use geocell_types::coordinate::Coordinate;
use rustc_hash::FxHashSet;

/// Find the geohash prefix around `centroid` whose 3x3 block holds every point.
///
/// Centroid and points are encoded at full precision. Prefixes of the centroid
/// are tried from one symbol upwards; the first prefix whose block misses a
/// point ends the search and the prefix one symbol shorter is returned. That
/// result is empty when even the one-symbol block misses a point.
///
/// The search stops one symbol short of the full hash, so when every prefix
/// bounds the points the answer is the centroid hash minus its last two
/// symbols.
///
/// # Examples
///
/// ```
/// use geocell::{neighbors_fit, Coordinate};
///
/// let sf = Coordinate::new(-122.419, 37.774);
/// let nearby = [Coordinate::new(-122.40, 37.78), Coordinate::new(-122.43, 37.76)];
/// assert_eq!(neighbors_fit(sf, nearby).unwrap(), "9q8yy");
/// ```
pub fn neighbors_fit<I>(centroid: impl Into<Coordinate>, points: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: Into<Coordinate>,
{
    neighbors_fit_with_length(centroid, points, DEFAULT_LENGTH)
}

/// [`neighbors_fit`] with an explicit encoding length (at least 2).
pub fn neighbors_fit_with_length<I>(
    centroid: impl Into<Coordinate>,
    points: I,
    length: usize,
) -> Result<String>
where
    I: IntoIterator,
    I::Item: Into<Coordinate>,
{
    if length < 2 {
        return Err(GeohashError::InvalidInput(format!(
            "Neighbor fit needs an encoding length of at least 2, got: {}",
            length
        )));
    }

    let points: Vec<Coordinate> = points.into_iter().map(Into::into).collect();
    validate_coordinates(&points)?;

    let centroid = encode(centroid, length)?;
    let points = points
        .into_iter()
        .map(|point| encode(point, length))
        .collect::<Result<Vec<_>>>()?;

    for i in 1..centroid.len() {
        let block = neighbors(&centroid[..i])?;
        let cells: FxHashSet<&str> = block.values().collect();

        let unbounded = points
            .iter()
            .filter(|point| !cells.contains(&point[..i]))
            .count();

        if unbounded > 0 {
            log::debug!(
                "{} of {} points fall outside the block of {}; fit is {:?}",
                unbounded,
                points.len(),
                &centroid[..i],
                &centroid[..i - 1]
            );
            return Ok(centroid[..i - 1].to_string());
        }
    }

    let fitted = &centroid[..centroid.len() - 2];
    log::debug!("All points bounded at every prefix; fit is {:?}", fitted);
    Ok(fitted.to_string())
}
