//! Submission Client Configuration
//!
//! Quota configuration for the submission client: how many requests may
//! be admitted per window, and how long a window lasts.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default request limit per window
pub const DEFAULT_REQUEST_LIMIT: u32 = 10;

/// Default window duration in seconds
pub const DEFAULT_WINDOW_SECS: u64 = 60;

/// Configuration errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Capacity must admit at least one request per window
    #[error("request limit must be at least 1, got {0}")]
    ZeroCapacity(u32),

    /// Window duration must be non-zero
    #[error("window duration must be non-zero")]
    ZeroWindow,
}

/// Quota configuration for a submission client
///
/// Immutable once constructed: `capacity` admissions per `window`.
/// A capacity of zero would make every `submit()` block forever, and a
/// zero window cannot drive the reset scheduler, so both are rejected.
/// The fields are private; `new`, `from_env`, and deserialization are
/// the only ways in, and deserialized values are re-checked by
/// [`validate()`](Self::validate) at client construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// Maximum admissions per window
    capacity: u32,

    /// Window duration (full precision, sub-millisecond included)
    window: Duration,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_REQUEST_LIMIT,
            window: Duration::from_secs(DEFAULT_WINDOW_SECS),
        }
    }
}

impl SubmissionConfig {
    /// Create a validated configuration
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum admissions per window (must be >= 1)
    /// * `window` - Window duration (must be non-zero)
    pub fn new(capacity: u32, window: Duration) -> Result<Self, ConfigError> {
        let config = Self { capacity, window };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    ///
    /// Recognized variables: `CRPT_REQUEST_LIMIT`, `CRPT_WINDOW_SECS`.
    /// Unset or unparseable values fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("CRPT_REQUEST_LIMIT") {
            if let Ok(limit) = val.parse() {
                config.capacity = limit;
            }
        }

        if let Ok(val) = std::env::var("CRPT_WINDOW_SECS") {
            if let Ok(secs) = val.parse() {
                config.window = Duration::from_secs(secs);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Re-check the invariants on an already-built configuration
    ///
    /// Deserialization bypasses `new()`, so the client runs this again
    /// before starting its scheduler.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity(self.capacity));
        }
        if self.window.is_zero() {
            return Err(ConfigError::ZeroWindow);
        }
        Ok(())
    }

    /// Maximum admissions per window
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Get the window duration
    pub fn window(&self) -> Duration {
        self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SubmissionConfig::default();
        assert_eq!(config.capacity(), DEFAULT_REQUEST_LIMIT);
        assert_eq!(config.window(), Duration::from_secs(DEFAULT_WINDOW_SECS));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_valid() {
        let config = SubmissionConfig::new(5, Duration::from_millis(1500)).unwrap();
        assert_eq!(config.capacity(), 5);
        assert_eq!(config.window(), Duration::from_millis(1500));
    }

    #[test]
    fn test_submillisecond_window_preserved() {
        // A positive window below 1ms must survive construction at full
        // precision, not collapse to zero.
        let config = SubmissionConfig::new(5, Duration::from_micros(100)).unwrap();
        assert_eq!(config.window(), Duration::from_micros(100));
        assert!(!config.window().is_zero());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = SubmissionConfig::new(0, Duration::from_secs(60)).unwrap_err();
        assert_eq!(err, ConfigError::ZeroCapacity(0));
    }

    #[test]
    fn test_zero_window_rejected() {
        let err = SubmissionConfig::new(10, Duration::ZERO).unwrap_err();
        assert_eq!(err, ConfigError::ZeroWindow);
    }

    #[test]
    fn test_config_serialization() {
        let config = SubmissionConfig::new(3, Duration::from_micros(1500)).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SubmissionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.capacity(), parsed.capacity());
        assert_eq!(config.window(), parsed.window());
    }

    #[test]
    fn test_deserialized_invalid_config_fails_validate() {
        // Deserialization does not go through new(); validate() is the
        // backstop for configs arriving over the wire or from files.
        let parsed: SubmissionConfig =
            serde_json::from_str(r#"{"capacity":0,"window":{"secs":60,"nanos":0}}"#).unwrap();
        assert_eq!(parsed.validate(), Err(ConfigError::ZeroCapacity(0)));

        let parsed: SubmissionConfig =
            serde_json::from_str(r#"{"capacity":5,"window":{"secs":0,"nanos":0}}"#).unwrap();
        assert_eq!(parsed.validate(), Err(ConfigError::ZeroWindow));
    }
}
