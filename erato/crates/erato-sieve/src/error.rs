//! Error Module - Sieve Error Types
//!
//! Defines all error types used by the sieve.
//!
//! # Error Categories
//!
//! ## Resource Errors
//! - `ResourceExhausted` - Mark buffer could not be allocated
//! - `WorkerPool` - Worker threads could not be spawned
//!
//! ## Configuration Errors
//! - `InvalidConfig` - Invalid worker count or partition length
//!
//! Marking and extraction never fail once the buffer exists, so there are
//! no error variants for them.

use thiserror::Error;

/// Main error type for all sieve operations
///
/// # Examples
///
/// ```rust
/// use erato_sieve::SieveError;
///
/// fn handle_error(err: SieveError) {
///     match err {
///         SieveError::ResourceExhausted { requested, .. } => {
///             eprintln!("cannot allocate {} cells", requested);
///         }
///         _ => eprintln!("sieve failed: {}", err),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum SieveError {
    /// Mark buffer allocation failed
    ///
    /// **When returned:** The allocator refuses a buffer of `requested` cells,
    /// or the request overflows the address space.
    ///
    /// **Recovery strategy:** None. The computation is aborted before any
    /// marking happens.
    #[error("Failed to allocate mark buffer of {requested} cells: {reason}")]
    ResourceExhausted { requested: usize, reason: String },

    /// Worker pool construction failed
    ///
    /// **When returned:** The operating system refuses to spawn worker threads.
    #[error("Failed to build worker pool: {0}")]
    WorkerPool(String),

    /// Invalid configuration
    ///
    /// **When returned:** `SieveConfig::validate` rejects a parameter.
    #[error("Invalid sieve configuration: {0}")]
    InvalidConfig(String),
}

impl SieveError {
    /// Check if this error comes from an exhausted resource
    pub fn is_resource_exhausted(&self) -> bool {
        matches!(self, SieveError::ResourceExhausted { .. })
    }
}

/// Result type alias for sieve operations
pub type Result<T> = std::result::Result<T, SieveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_exhausted_display() {
        let err = SieveError::ResourceExhausted {
            requested: 42,
            reason: "capacity overflow".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to allocate mark buffer of 42 cells: capacity overflow"
        );
        assert!(err.is_resource_exhausted());
    }

    #[test]
    fn test_invalid_config_display() {
        let err = SieveError::InvalidConfig("workers must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid sieve configuration: workers must be > 0"
        );
        assert!(!err.is_resource_exhausted());
    }

    #[test]
    fn test_worker_pool_display() {
        let err = SieveError::WorkerPool("spawn failed".to_string());
        assert_eq!(err.to_string(), "Failed to build worker pool: spawn failed");
    }
}
