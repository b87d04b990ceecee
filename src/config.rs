//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;

use crate::error::{CacheError, Result};

/// Environment variable holding the cache capacity.
pub const CAPACITY_ENV_VAR: &str = "CACHE_CAPACITY";

/// Capacity used when nothing is configured.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Cache configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 1000)
    ///
    /// A missing variable falls back to the default. A negative or
    /// unparsable value is an error rather than being clamped.
    pub fn from_env() -> Result<Self> {
        match env::var(CAPACITY_ENV_VAR) {
            Ok(raw) => Ok(Self {
                capacity: Self::parse_capacity(&raw)?,
            }),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => Err(CacheError::InvalidConfig(format!(
                "{} is not valid unicode",
                CAPACITY_ENV_VAR
            ))),
        }
    }

    /// Parses a capacity value, rejecting negatives and garbage.
    pub fn parse_capacity(raw: &str) -> Result<usize> {
        let trimmed = raw.trim();
        let value: i64 = trimmed.parse().map_err(|_| {
            CacheError::InvalidConfig(format!(
                "{}={:?} is not an integer",
                CAPACITY_ENV_VAR, raw
            ))
        })?;

        usize::try_from(value).map_err(|_| CacheError::InvalidCapacity(value))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.capacity, 1000);
    }

    #[test]
    fn test_parse_capacity_valid() {
        assert_eq!(Config::parse_capacity("3").unwrap(), 3);
        assert_eq!(Config::parse_capacity(" 42 ").unwrap(), 42);
        assert_eq!(Config::parse_capacity("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_capacity_negative() {
        assert_eq!(
            Config::parse_capacity("-1"),
            Err(CacheError::InvalidCapacity(-1))
        );
    }

    #[test]
    fn test_parse_capacity_garbage() {
        assert!(matches!(
            Config::parse_capacity("lots"),
            Err(CacheError::InvalidConfig(_))
        ));
        assert!(matches!(
            Config::parse_capacity(""),
            Err(CacheError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the variable so parallel tests don't race on it
        env::remove_var(CAPACITY_ENV_VAR);
        assert_eq!(Config::from_env().unwrap(), Config::default());

        env::set_var(CAPACITY_ENV_VAR, "16");
        assert_eq!(Config::from_env().unwrap().capacity, 16);

        env::set_var(CAPACITY_ENV_VAR, "-5");
        assert_eq!(Config::from_env(), Err(CacheError::InvalidCapacity(-5)));

        env::set_var(CAPACITY_ENV_VAR, "many");
        assert!(matches!(
            Config::from_env(),
            Err(CacheError::InvalidConfig(_))
        ));

        #[cfg(unix)]
        {
            use std::ffi::OsStr;
            use std::os::unix::ffi::OsStrExt;

            env::set_var(CAPACITY_ENV_VAR, OsStr::from_bytes(&[0xff]));
            let err = Config::from_env().unwrap_err();
            assert!(matches!(err, CacheError::InvalidConfig(_)));
            assert!(err.to_string().contains("not valid unicode"));
        }

        env::remove_var(CAPACITY_ENV_VAR);
    }
}
