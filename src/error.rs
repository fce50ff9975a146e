//! Error types for symlib
//!
//! Provides a unified error type for all library operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using SymlibError
pub type Result<T> = std::result::Result<T, SymlibError>;

/// Unified error type for symlib operations
#[derive(Debug, Error)]
pub enum SymlibError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    #[error("Symbol already exists: {0}")]
    AlreadyExists(String),

    #[error("Symbol not found: {0}")]
    NotFound(String),

    #[error("Invalid symbol payload: {0}")]
    InvalidPayload(String),

    // -------------------------------------------------------------------------
    // Container Errors
    // -------------------------------------------------------------------------
    #[error("Library file does not end with the expected footer: {}", .0.display())]
    MissingFooter(PathBuf),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
