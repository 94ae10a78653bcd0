//! Configuration for geohash precision.
//!
//! Loaded from JSON (or TOML with the `toml` feature) and validated on load.

use crate::codec::DEFAULT_LENGTH;
use crate::error::{GeohashError, Result};
use serde::de::Error;

/// Longest supported geohash: 50 bits per axis, within an `f64` mantissa.
pub const MAX_LENGTH: usize = 20;

/// Geohash precision settings
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeohashConfig {
    /// Symbols produced by `encode` when no length is given
    #[serde(default = "GeohashConfig::default_length")]
    pub encode_length: usize,

    /// Symbols used to encode centroid and points in `neighbors_fit`
    #[serde(default = "GeohashConfig::default_length")]
    pub fit_length: usize,
}

impl GeohashConfig {
    const fn default_length() -> usize {
        DEFAULT_LENGTH
    }

    pub fn with_encode_length(mut self, length: usize) -> Self {
        assert!(
            (2..=MAX_LENGTH).contains(&length),
            "Encode length must be between 2 and {}",
            MAX_LENGTH
        );

        if length % 2 == 1 {
            log::warn!(
                "Encode length {} is odd; geohashes will be {} symbols long",
                length,
                length - 1
            );
        }

        self.encode_length = length;
        self
    }

    pub fn with_fit_length(mut self, length: usize) -> Self {
        assert!(
            (2..=MAX_LENGTH).contains(&length),
            "Fit length must be between 2 and {}",
            MAX_LENGTH
        );
        self.fit_length = length;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(2..=MAX_LENGTH).contains(&self.encode_length) {
            return Err(GeohashError::Config(format!(
                "Encode length must be between 2 and {}, got: {}",
                MAX_LENGTH, self.encode_length
            )));
        }

        if !(2..=MAX_LENGTH).contains(&self.fit_length) {
            return Err(GeohashError::Config(format!(
                "Fit length must be between 2 and {}, got: {}",
                MAX_LENGTH, self.fit_length
            )));
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let config: GeohashConfig = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        let config: GeohashConfig = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for GeohashConfig {
    fn default() -> Self {
        Self {
            encode_length: Self::default_length(),
            fit_length: Self::default_length(),
        }
    }
}
