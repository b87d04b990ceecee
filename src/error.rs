//! Error types for the cache
//!
//! Provides unified error handling using thiserror. Normal cache operations
//! never fail; errors only arise while constructing or configuring a cache.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache construction and configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity below zero was requested
    #[error("Invalid capacity: {0} (capacity must be non-negative)")]
    InvalidCapacity(i64),

    /// Configuration value could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
