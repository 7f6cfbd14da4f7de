//! Converter configuration

use super::error::{CaptureError, Result};
use serde::{Deserialize, Serialize};

/// Default limit on nested destructuring
pub const DEFAULT_MAXIMUM_DESTRUCTURING_DEPTH: i32 = 10;

/// Limits applied while converting values
///
/// # Example
///
/// ```
/// use rust_log_capture::ConverterConfig;
///
/// let config = ConverterConfig {
///     maximum_destructuring_depth: 5,
///     maximum_string_length: Some(256),
///     maximum_collection_count: Some(100),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Nested levels destructured before values are flattened to text
    ///
    /// Must not be negative.
    pub maximum_destructuring_depth: i32,

    /// Strings longer than this are cut and end with `…`
    ///
    /// Applies to strings captured while destructuring and to every
    /// stringified value. Must be at least 2 when set.
    pub maximum_string_length: Option<usize>,

    /// Sequences and dictionaries keep at most this many entries
    ///
    /// Must be at least 1 when set.
    pub maximum_collection_count: Option<usize>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            maximum_destructuring_depth: DEFAULT_MAXIMUM_DESTRUCTURING_DEPTH,
            maximum_string_length: None,
            maximum_collection_count: None,
        }
    }
}

impl ConverterConfig {
    pub fn new(maximum_destructuring_depth: i32) -> Self {
        Self {
            maximum_destructuring_depth,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_maximum_string_length(mut self, length: usize) -> Self {
        self.maximum_string_length = Some(length);
        self
    }

    #[must_use]
    pub fn with_maximum_collection_count(mut self, count: usize) -> Self {
        self.maximum_collection_count = Some(count);
        self
    }

    /// Check every limit, failing on the first invalid one
    pub fn validate(&self) -> Result<()> {
        if self.maximum_destructuring_depth < 0 {
            return Err(CaptureError::config(
                "ConverterConfig",
                format!(
                    "maximum_destructuring_depth must not be negative, got {}",
                    self.maximum_destructuring_depth
                ),
            ));
        }
        if let Some(length) = self.maximum_string_length {
            if length < 2 {
                return Err(CaptureError::config(
                    "ConverterConfig",
                    format!("maximum_string_length must be at least 2, got {}", length),
                ));
            }
        }
        if self.maximum_collection_count == Some(0) {
            return Err(CaptureError::config(
                "ConverterConfig",
                "maximum_collection_count must be at least 1",
            ));
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
