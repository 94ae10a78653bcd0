//! Neighbor lookup between geohash cells.
//!
//! Moving one cell in a direction only changes the last symbol, unless that
//! symbol sits on the border of its parent cell, in which case the parent
//! moves first. Which symbols are neighbors depends on whether the geohash
//! length is even or odd, because odd lengths give longitude the extra bit of
//! the last symbol and even lengths give it to latitude.

use crate::base32::{ALPHABET, decode_symbol, encode_symbol};
use crate::error::{GeohashError, Result};
use crate::validation::validate_geohash;
use geocell_types::neighbors::Neighbors;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compass direction for [`adjacent`]. Diagonals are built by composing two
/// cardinal moves, see [`neighbors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = GeohashError;

    fn from_str(s: &str) -> Result<Self> {
        Direction::ALL
            .into_iter()
            .find(|direction| direction.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| GeohashError::InvalidInput(format!("Unknown direction: {:?}", s)))
    }
}

/// Whether a geohash has an even or odd number of symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of(geohash: &str) -> Self {
        if geohash.len() % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

/// Lookup data for one direction at one parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacencyTable {
    /// `neighbor[i]` is the symbol whose neighbor is `ALPHABET[i]`.
    pub neighbor: &'static str,
    /// Symbols on the edge of their parent cell in this direction.
    pub border: &'static str,
    /// Inverse of `neighbor`, indexed by symbol value.
    positions: [u8; 32],
}

impl AdjacencyTable {
    /// Build a table. Panics (at compile time for the built-in tables) unless
    /// `neighbor` is a permutation of the alphabet.
    pub const fn new(neighbor: &'static str, border: &'static str) -> Self {
        let bytes = neighbor.as_bytes();
        assert!(bytes.len() == 32, "neighbor table must hold 32 symbols");

        let mut positions = [0u8; 32];
        let mut seen = 0u32;
        let mut i = 0;
        while i < 32 {
            let value = symbol_value(bytes[i]);
            assert!(seen & (1 << value) == 0, "neighbor table repeats a symbol");
            seen |= 1 << value;
            positions[value as usize] = i as u8;
            i += 1;
        }

        Self {
            neighbor,
            border,
            positions,
        }
    }

    /// Value of the symbol next to the symbol with value `value`.
    pub const fn neighbor_of(&self, value: u8) -> u8 {
        self.positions[(value & 0b1_1111) as usize]
    }
}

const fn symbol_value(byte: u8) -> u8 {
    let symbols = ALPHABET.as_bytes();
    let mut value = 0;
    while value < symbols.len() {
        if symbols[value] == byte {
            return value as u8;
        }
        value += 1;
    }
    panic!("symbol outside the geohash alphabet")
}

const NORTH_EVEN: AdjacencyTable =
    AdjacencyTable::new("p0r21436x8zb9dcf5h7kjnmqesgutwvy", "prxz");
const NORTH_ODD: AdjacencyTable =
    AdjacencyTable::new("bc01fg45238967deuvhjyznpkmstqrwx", "bcfguvyz");
const SOUTH_EVEN: AdjacencyTable =
    AdjacencyTable::new("14365h7k9dcfesgujnmqp0r2twvyx8zb", "028b");
const SOUTH_ODD: AdjacencyTable =
    AdjacencyTable::new("238967debc01fg45kmstqrwxuvhjyznp", "0145hjnp");

/// The adjacency table for a direction and parity.
///
/// East/west at one parity mirror north/south at the other.
pub const fn table(direction: Direction, parity: Parity) -> AdjacencyTable {
    match (direction, parity) {
        (Direction::North, Parity::Even) | (Direction::East, Parity::Odd) => NORTH_EVEN,
        (Direction::North, Parity::Odd) | (Direction::East, Parity::Even) => NORTH_ODD,
        (Direction::South, Parity::Even) | (Direction::West, Parity::Odd) => SOUTH_EVEN,
        (Direction::South, Parity::Odd) | (Direction::West, Parity::Even) => SOUTH_ODD,
    }
}

/// Find the cell next to `geohash` in `direction`, at the same precision.
///
/// There is no special handling at the poles or the antimeridian beyond what
/// the tables produce: a one-symbol geohash on the border simply maps through
/// its table.
///
/// # Examples
///
/// ```
/// use geocell::{adjacent, Direction};
///
/// assert_eq!(adjacent("u000", Direction::North).unwrap(), "u001");
/// assert_eq!(adjacent("u000", Direction::South).unwrap(), "spbp");
/// ```
pub fn adjacent(geohash: &str, direction: Direction) -> Result<String> {
    validate_geohash(geohash)?;
    step(geohash, direction)
}

/// [`adjacent`] with the direction given by name (`"north"`, `"south"`,
/// `"east"` or `"west"`).
pub fn adjacent_named(geohash: &str, direction: &str) -> Result<String> {
    let direction: Direction = direction.parse()?;
    adjacent(geohash, direction)
}

// `geohash` is non-empty and validated, so it is ASCII and splits on bytes.
fn step(geohash: &str, direction: Direction) -> Result<String> {
    let (parent, last) = geohash.split_at(geohash.len() - 1);
    let value = decode_symbol(char::from(last.as_bytes()[0]))?;
    let table = table(direction, Parity::of(geohash));

    let mut cell = if !parent.is_empty() && table.border.contains(last) {
        log::trace!("{} rolls over into parent {} ({})", geohash, parent, direction);
        step(parent, direction)?
    } else {
        parent.to_string()
    };

    cell.push(encode_symbol(table.neighbor_of(value)));
    Ok(cell)
}

/// The 3x3 block of cells around `geohash`, the cell itself under `c`.
///
/// Diagonals move north/south first and then east/west.
///
/// # Examples
///
/// ```
/// use geocell::neighbors;
///
/// let block = neighbors("9q8yy").unwrap();
/// assert_eq!(block.n, "9q8zn");
/// assert_eq!(block.ne, "9q8zp");
/// assert_eq!(block.c, "9q8yy");
/// ```
pub fn neighbors(geohash: &str) -> Result<Neighbors> {
    validate_geohash(geohash)?;

    let n = step(geohash, Direction::North)?;
    let s = step(geohash, Direction::South)?;

    Ok(Neighbors {
        ne: step(&n, Direction::East)?,
        nw: step(&n, Direction::West)?,
        se: step(&s, Direction::East)?,
        sw: step(&s, Direction::West)?,
        e: step(geohash, Direction::East)?,
        w: step(geohash, Direction::West)?,
        n,
        s,
        c: geohash.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_permutations() {
        for direction in Direction::ALL {
            for parity in [Parity::Even, Parity::Odd] {
                let t = table(direction, parity);
                let mut symbols: Vec<char> = t.neighbor.chars().collect();
                symbols.sort_by_key(|&c| decode_symbol(c).unwrap());
                assert_eq!(symbols.into_iter().collect::<String>(), ALPHABET);
                assert!(t.border.chars().all(|c| ALPHABET.contains(c)));
            }
        }
    }

    #[test]
    fn test_neighbor_of_inverts_table() {
        for direction in Direction::ALL {
            for parity in [Parity::Even, Parity::Odd] {
                let t = table(direction, parity);
                for (i, symbol) in ALPHABET.chars().enumerate() {
                    let value = decode_symbol(symbol).unwrap();
                    let expected = t.neighbor.find(symbol).unwrap();
                    assert_eq!(t.neighbor_of(value) as usize, expected);
                    // Every alphabet slot is reachable from exactly one symbol.
                    let from = t.neighbor.as_bytes()[i];
                    assert_eq!(
                        t.neighbor_of(decode_symbol(char::from(from)).unwrap()) as usize,
                        i
                    );
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "repeats a symbol")]
    fn test_table_rejects_repeated_symbol() {
        AdjacencyTable::new("00r21436x8zb9dcf5h7kjnmqesgutwvy", "prxz");
    }

    #[test]
    #[should_panic(expected = "outside the geohash alphabet")]
    fn test_table_rejects_foreign_symbol() {
        AdjacencyTable::new("a0r21436x8zb9dcf5h7kjnmqesgutwvy", "prxz");
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("north".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!("West".parse::<Direction>().unwrap(), Direction::West);
        assert_eq!(Direction::East.to_string(), "east");
        assert!(matches!(
            "up".parse::<Direction>(),
            Err(GeohashError::InvalidInput(_))
        ));
        assert!("nort".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn test_opposite() {
        for direction in Direction::ALL {
            assert_ne!(direction, direction.opposite());
            assert_eq!(direction, direction.opposite().opposite());
        }
    }

    #[test]
    fn test_parity() {
        assert_eq!(Parity::of("u"), Parity::Odd);
        assert_eq!(Parity::of("u0"), Parity::Even);
        assert_eq!(Parity::of("9q8yyk91qxcw"), Parity::Even);
    }

    #[test]
    fn test_adjacent_u000() {
        assert_eq!(adjacent("u000", Direction::North).unwrap(), "u001");
        assert_eq!(adjacent("u000", Direction::South).unwrap(), "spbp");
        assert_eq!(adjacent("u000", Direction::East).unwrap(), "u002");
        assert_eq!(adjacent("u000", Direction::West).unwrap(), "gbpb");
    }

    #[test]
    fn test_adjacent_with_rollover() {
        assert_eq!(adjacent("9q8yyk", Direction::East).unwrap(), "9q8yys");
        assert_eq!(adjacent("gcpvj0", Direction::West).unwrap(), "gcpvhb");
        assert_eq!(adjacent("s0", Direction::West).unwrap(), "eb");
        assert_eq!(adjacent("ezs42", Direction::West).unwrap(), "ezefr");
    }

    #[test]
    fn test_adjacent_top_level_has_no_parent() {
        assert_eq!(adjacent("z", Direction::North).unwrap(), "p");
        assert_eq!(adjacent("b", Direction::North).unwrap(), "0");
        assert_eq!(adjacent("0", Direction::South).unwrap(), "b");
        assert_eq!(adjacent("0", Direction::West).unwrap(), "p");
    }

    #[test]
    fn test_adjacent_errors() {
        assert!(matches!(
            adjacent("", Direction::North),
            Err(GeohashError::InvalidInput(_))
        ));
        assert_eq!(
            adjacent("u0a0", Direction::North),
            Err(GeohashError::InvalidSymbol('a'))
        );
        assert!(matches!(
            adjacent_named("u000", "up"),
            Err(GeohashError::InvalidInput(_))
        ));
        assert_eq!(adjacent_named("u000", "north").unwrap(), "u001");
    }

    #[test]
    fn test_adjacent_symmetry() {
        for geohash in ["9q8yyk", "u4pruydqqv", "dr5reg", "gcpvj0", "s0", "9q8yy", "ezs42"] {
            for direction in Direction::ALL {
                let there = adjacent(geohash, direction).unwrap();
                assert_eq!(there.len(), geohash.len());
                assert_eq!(
                    adjacent(&there, direction.opposite()).unwrap(),
                    geohash,
                    "{} {}",
                    geohash,
                    direction
                );
            }
        }
    }

    #[test]
    fn test_neighbors_reference_block() {
        let block = neighbors("dr5reg").unwrap();
        assert_eq!(block.n, "dr5reu");
        assert_eq!(block.ne, "dr5rsh");
        assert_eq!(block.e, "dr5rs5");
        assert_eq!(block.se, "dr5rs4");
        assert_eq!(block.s, "dr5ref");
        assert_eq!(block.sw, "dr5red");
        assert_eq!(block.w, "dr5ree");
        assert_eq!(block.nw, "dr5res");
        assert_eq!(block.c, "dr5reg");
    }

    #[test]
    fn test_neighbors_across_parent_borders() {
        let block = neighbors("s00").unwrap();
        let expected = [
            ("n", "s02"),
            ("ne", "s03"),
            ("e", "s01"),
            ("se", "kpc"),
            ("s", "kpb"),
            ("sw", "7zz"),
            ("w", "ebp"),
            ("nw", "ebr"),
            ("c", "s00"),
        ];
        for (key, cell) in expected {
            assert_eq!(block.get(key), Some(cell), "{}", key);
        }
    }

    #[test]
    fn test_neighbors_single_symbol() {
        let block = neighbors("u").unwrap();
        assert_eq!(block.n, "h");
        assert_eq!(block.ne, "j");
        assert_eq!(block.e, "v");
        assert_eq!(block.se, "t");
        assert_eq!(block.s, "s");
        assert_eq!(block.sw, "e");
        assert_eq!(block.w, "g");
        assert_eq!(block.nw, "5");
    }

    #[test]
    fn test_neighbors_errors() {
        assert!(matches!(neighbors(""), Err(GeohashError::InvalidInput(_))));
        assert_eq!(neighbors("9qi"), Err(GeohashError::InvalidSymbol('i')));
    }
}
