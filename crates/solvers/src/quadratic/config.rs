use thiserror::Error;

/// Default tolerance on the series roots.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default cap on the number of series terms.
pub const DEFAULT_MAX_TERMS: usize = 100;

/// Configuration for the quadratic solver.
///
/// Only the Catalan-series path reads these values. The linear and formula
/// paths are exact up to floating-point rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawConfig")
)]
pub struct Config {
    tolerance: f64,
    max_terms: usize,
}

/// Errors that can occur when validating a quadratic solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("max_terms must be at least 1")]
    MaxTerms,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_terms: DEFAULT_MAX_TERMS,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance and term cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive, or if
    /// `max_terms` is zero.
    pub fn new(tolerance: f64, max_terms: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if max_terms == 0 {
            return Err(ConfigError::MaxTerms);
        }

        Ok(Self {
            tolerance,
            max_terms,
        })
    }

    /// Creates a config with the given tolerance and the default term cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive.
    pub fn with_tolerance(tolerance: f64) -> Result<Self, ConfigError> {
        Self::new(tolerance, DEFAULT_MAX_TERMS)
    }

    /// Returns the series convergence tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of series terms.
    #[must_use]
    pub fn max_terms(&self) -> usize {
        self.max_terms
    }
}

/// Unvalidated config as read from a serialized source.
///
/// Missing fields fall back to the defaults.
#[cfg(feature = "serde-derive")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct RawConfig {
    tolerance: f64,
    max_terms: usize,
}

#[cfg(feature = "serde-derive")]
impl Default for RawConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_terms: DEFAULT_MAX_TERMS,
        }
    }
}

#[cfg(feature = "serde-derive")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.tolerance, raw.max_terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(config.tolerance(), 1e-10);
        assert_eq!(config.max_terms(), 100);
        assert_eq!(Config::new(1e-10, 100), Ok(config));
    }

    #[test]
    fn rejects_bad_tolerance() {
        assert_eq!(Config::new(0.0, 10), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(-1e-6, 10), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(f64::NAN, 10), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(f64::INFINITY, 10), Err(ConfigError::Tolerance));
    }

    #[test]
    fn rejects_zero_term_cap() {
        assert_eq!(Config::new(1e-8, 0), Err(ConfigError::MaxTerms));
    }

    #[test]
    fn with_tolerance_keeps_default_cap() {
        let config = Config::with_tolerance(1e-6).unwrap();
        assert_eq!(config.tolerance(), 1e-6);
        assert_eq!(config.max_terms(), DEFAULT_MAX_TERMS);
    }

    #[cfg(feature = "serde-derive")]
    #[test]
    fn deserializes_with_validation() {
        let config: Config = serde_json::from_str(r#"{"tolerance":1e-12}"#).unwrap();
        assert_eq!(config, Config::new(1e-12, DEFAULT_MAX_TERMS).unwrap());

        let result = serde_json::from_str::<Config>(r#"{"tolerance":-1.0,"max_terms":5}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<Config>(r#"{"max_terms":0}"#);
        assert!(result.is_err());
    }
}
