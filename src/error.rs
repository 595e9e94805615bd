//! Error types for inistore
//!
//! Provides a unified error type for all operations.

use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using IniError
pub type Result<T> = std::result::Result<T, IniError>;

/// Unified error type for inistore operations
#[derive(Debug, Error)]
pub enum IniError {
    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("Invalid entry (key {key:?}): {reason}")]
    InvalidEntry { key: String, reason: &'static str },

    #[error("Allocation failed: {0}")]
    Alloc(#[from] TryReserveError),

    // -------------------------------------------------------------------------
    // Resource Errors
    // -------------------------------------------------------------------------
    #[error("Resource not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to stat {}: {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input too large: {size} bytes (max {max})")]
    TooLarge { size: u64, max: u64 },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Short read from {}: expected {expected} bytes, got {actual}", path.display())]
    ShortRead {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
