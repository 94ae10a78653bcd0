//! Interval bisection between a float and a sequence of binary decisions.
//!
//! Every round halves the current interval: a set bit keeps the upper half,
//! a cleared bit keeps the lower half. Decoding replays the decisions and
//! lands on the midpoint of the final interval, so it approximates rather
//! than inverts the encoding.

use crate::base32::Bits;

/// Longitude range covered by the root cell.
pub const LONGITUDE_BOUNDS: (f64, f64) = (-180.0, 180.0);

/// Latitude range covered by the root cell.
pub const LATITUDE_BOUNDS: (f64, f64) = (-90.0, 90.0);

/// Standalone bisection depth. Decoding ignores it and consumes exactly the
/// bits it is given.
pub const DEFAULT_BITS: usize = 15;

/// Run `length` bisection rounds of `[lower, upper]` around `value`.
///
/// # Examples
///
/// ```
/// use geocell::bisect::{float_to_bits, LONGITUDE_BOUNDS};
///
/// let (lower, upper) = LONGITUDE_BOUNDS;
/// let bits = float_to_bits(-122.419, lower, upper, 5);
/// assert_eq!(bits.as_slice(), &[false, false, true, false, true]);
/// ```
pub fn float_to_bits(value: f64, mut lower: f64, mut upper: f64, length: usize) -> Bits {
    let mut bits = Bits::with_capacity(length);
    for _ in 0..length {
        let middle = (lower + upper) / 2.0;
        if value >= middle {
            bits.push(true);
            lower = middle;
        } else {
            bits.push(false);
            upper = middle;
        }
    }
    bits
}

/// Replay bisection decisions and return the final interval.
pub fn bits_to_interval(bits: &[bool], mut lower: f64, mut upper: f64) -> (f64, f64) {
    for &bit in bits {
        let middle = (lower + upper) / 2.0;
        if bit {
            lower = middle;
        } else {
            upper = middle;
        }
    }
    (lower, upper)
}

/// Replay bisection decisions and return the midpoint of the final interval.
///
/// # Examples
///
/// ```
/// use geocell::bisect::{bits_to_float, LATITUDE_BOUNDS};
///
/// let (lower, upper) = LATITUDE_BOUNDS;
/// assert_eq!(bits_to_float(&[true, false, true], lower, upper), 33.75);
/// assert_eq!(bits_to_float(&[], lower, upper), 0.0);
/// ```
pub fn bits_to_float(bits: &[bool], lower: f64, upper: f64) -> f64 {
    let (lower, upper) = bits_to_interval(bits, lower, upper);
    (lower + upper) / 2.0
}
