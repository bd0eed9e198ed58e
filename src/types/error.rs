//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Propagation policy
//!
//! - Input-contract violations (`InvalidInput`) propagate to the caller
//!   immediately and are never coerced into a degraded success.
//! - Enrichment failures (`Oracle`) are recoverable: team formation absorbs
//!   them and substitutes fallback values. Only operations whose sole purpose
//!   is enrichment surface them.
//! - No panic/unwrap on the deterministic path.

use thiserror::Error;

/// Result alias using the unified error type
pub type Result<T> = std::result::Result<T, ForgeError>;

/// Unified application error
#[derive(Debug, Error)]
pub enum ForgeError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    /// Caller passed input that violates a component contract
    /// (empty candidate pool, empty required-skill list, team size < 2).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Enrichment oracle failed: network, timeout, error marker, or
    /// malformed output. Recoverable inside team formation.
    #[error("Enrichment oracle error: {0}")]
    Oracle(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ForgeError {
    /// Whether team formation may proceed with fallback values after this
    /// error. Only oracle failures are recoverable there.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ForgeError::Oracle(_))
    }
}

/// Extension trait for adding context to results
pub trait ResultExt<T> {
    /// Attach a context message, preserving the original error text.
    fn context(self, msg: &str) -> Result<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| ForgeError::Storage(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oracle_errors_are_recoverable() {
        assert!(ForgeError::Oracle("timeout".into()).is_recoverable());
        assert!(!ForgeError::InvalidInput("empty pool".into()).is_recoverable());
        assert!(!ForgeError::NotFound("handle".into()).is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = ForgeError::InvalidInput("team size must be at least 2".into());
        assert_eq!(
            err.to_string(),
            "Invalid input: team size must be at least 2"
        );
    }
}
