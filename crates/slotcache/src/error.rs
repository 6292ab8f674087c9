//! Error types for slotcache

use thiserror::Error;

/// Result type alias for slotcache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache configuration
///
/// The cache operations themselves are total: duplicate inserts and absent
/// keys are signaled through return values, never through errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Capacity of zero would evict every entry it admits
    #[error("cache capacity must be greater than zero")]
    ZeroCapacity,
}
