//! Error types for Chirpy
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using ChirpyError
pub type Result<T> = std::result::Result<T, ChirpyError>;

/// Unified error type for Chirpy operations
#[derive(Debug, Error)]
pub enum ChirpyError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Database Errors
    // -------------------------------------------------------------------------
    /// The empty document could not be written when the database was opened
    #[error("Database initialization failed: {0}")]
    Initialization(String),

    /// The backing file could not be read or is not a valid document
    #[error("Database load failed: {0}")]
    Load(String),

    /// The full-document rewrite could not be completed
    #[error("Database write failed: {0}")]
    Write(String),

    // -------------------------------------------------------------------------
    // Moderation Errors
    // -------------------------------------------------------------------------
    #[error("Chirp is too long")]
    ChirpTooLong { length: usize, max: usize },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),
}

impl From<serde_json::Error> for ChirpyError {
    fn from(err: serde_json::Error) -> Self {
        ChirpyError::Serialization(err.to_string())
    }
}
