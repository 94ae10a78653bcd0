//! Error types for geohash operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeohashError {
    /// A character outside the base-32 geohash alphabet.
    #[error("Invalid geohash symbol: {0:?}")]
    InvalidSymbol(char),
    /// Empty geohash, malformed coordinate pair, unknown direction or a bit
    /// sequence that does not split into 5-bit groups.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GeohashError>;
