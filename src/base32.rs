//! Conversion between the geohash base-32 alphabet and bit sequences.
//!
//! Each symbol carries 5 bits, most significant first. Bits are plain `bool`s
//! held in a `SmallVec` sized for a 12-character geohash.

use crate::error::{GeohashError, Result};
use smallvec::SmallVec;

/// The 32 geohash symbols; a symbol's index is its 5-bit value.
pub const ALPHABET: &str = "0123456789bcdefghjkmnpqrstuvwxyz";

const SYMBOLS: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Bits per base-32 symbol.
pub const BITS_PER_SYMBOL: usize = 5;

/// A sequence of bisection decisions, most significant first.
pub type Bits = SmallVec<[bool; 64]>;

/// Map a geohash symbol to its value in `0..32`.
///
/// # Examples
///
/// ```
/// use geocell::base32::decode_symbol;
///
/// assert_eq!(decode_symbol('0').unwrap(), 0);
/// assert_eq!(decode_symbol('z').unwrap(), 31);
/// assert!(decode_symbol('a').is_err());
/// ```
pub fn decode_symbol(symbol: char) -> Result<u8> {
    if !symbol.is_ascii() {
        return Err(GeohashError::InvalidSymbol(symbol));
    }
    SYMBOLS
        .iter()
        .position(|&s| s == symbol as u8)
        .map(|idx| idx as u8)
        .ok_or(GeohashError::InvalidSymbol(symbol))
}

/// Map a 5-bit value to its geohash symbol. Higher bits are ignored.
pub fn encode_symbol(value: u8) -> char {
    SYMBOLS[(value & 0b1_1111) as usize] as char
}

/// Expand a geohash into `5 * len` bits, symbol by symbol in string order.
///
/// # Examples
///
/// ```
/// use geocell::base32::geohash_to_bits;
///
/// let bits = geohash_to_bits("9q").unwrap();
/// let expected = [false, true, false, false, true, true, false, true, true, false];
/// assert_eq!(bits.as_slice(), &expected);
/// ```
pub fn geohash_to_bits(geohash: &str) -> Result<Bits> {
    let mut bits = Bits::with_capacity(geohash.len() * BITS_PER_SYMBOL);
    for symbol in geohash.chars() {
        let value = decode_symbol(symbol)?;
        for shift in (0..BITS_PER_SYMBOL).rev() {
            bits.push((value >> shift) & 1 == 1);
        }
    }
    Ok(bits)
}

/// Pack bits into a geohash, 5 bits per symbol, left to right.
///
/// The length must be a multiple of 5.
pub fn bits_to_geohash(bits: &[bool]) -> Result<String> {
    if bits.len() % BITS_PER_SYMBOL != 0 {
        return Err(GeohashError::InvalidInput(format!(
            "Bit length must be a multiple of {}, got: {}",
            BITS_PER_SYMBOL,
            bits.len()
        )));
    }

    Ok(bits
        .chunks_exact(BITS_PER_SYMBOL)
        .map(|group| {
            let value = group
                .iter()
                .fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit));
            encode_symbol(value)
        })
        .collect())
}
