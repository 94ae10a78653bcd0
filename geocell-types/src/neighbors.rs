use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Keys of the 3x3 block, compass order starting at north, center last.
pub const NEIGHBOR_KEYS: [&str; 9] = ["n", "ne", "e", "se", "s", "sw", "w", "nw", "c"];

/// The eight cells surrounding a geohash plus the cell itself.
///
/// Field names follow the compass abbreviations used as map keys, with `c`
/// holding the center cell unchanged.
///
/// # Examples
///
/// ```
/// use geocell_types::neighbors::Neighbors;
///
/// let block = Neighbors {
///     n: "9q8zn".into(),
///     ne: "9q8zp".into(),
///     e: "9q8yz".into(),
///     se: "9q8yx".into(),
///     s: "9q8yw".into(),
///     sw: "9q8yt".into(),
///     w: "9q8yv".into(),
///     nw: "9q8zj".into(),
///     c: "9q8yy".into(),
/// };
/// assert_eq!(block.len(), 9);
/// assert_eq!(block.get("c"), Some("9q8yy"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Neighbors {
    pub n: String,
    pub ne: String,
    pub e: String,
    pub se: String,
    pub s: String,
    pub sw: String,
    pub w: String,
    pub nw: String,
    /// The center cell
    pub c: String,
}

impl Neighbors {
    /// Look up a cell by its key (`"n"`, `"ne"`, ..., `"c"`).
    pub fn get(&self, key: &str) -> Option<&str> {
        let cell = match key {
            "n" => &self.n,
            "ne" => &self.ne,
            "e" => &self.e,
            "se" => &self.se,
            "s" => &self.s,
            "sw" => &self.sw,
            "w" => &self.w,
            "nw" => &self.nw,
            "c" => &self.c,
            _ => return None,
        };
        Some(cell.as_str())
    }

    /// The center cell.
    pub fn center(&self) -> &str {
        &self.c
    }

    /// Iterate `(key, cell)` pairs in `NEIGHBOR_KEYS` order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            &self.n, &self.ne, &self.e, &self.se, &self.s, &self.sw, &self.w, &self.nw, &self.c,
        ]
        .into_iter()
        .zip(NEIGHBOR_KEYS)
        .map(|(cell, key)| (key, cell.as_str()))
    }

    /// Iterate the nine cells, center included.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(_, cell)| cell)
    }

    /// Always nine.
    pub fn len(&self) -> usize {
        NEIGHBOR_KEYS.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Collect into a key -> cell map.
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        self.iter()
            .map(|(key, cell)| (key, cell.to_string()))
            .collect()
    }
}
