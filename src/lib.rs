//! # Chirpy
//!
//! A small chirp service with:
//! - A single-file JSON database (whole-document rewrite per insert)
//! - Exclusive-writer / shared-reader locking around the backing file
//! - Hit metrics for the static file server
//! - Length validation and profanity masking
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HTTP Server                             │
//! │                 (axum, CORS, tracing)                        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼─────────────────┐
//!          │            │                 │
//!          ▼            ▼                 ▼
//!   ┌─────────────┐ ┌─────────────┐ ┌─────────────┐
//!   │ HitCounter  │ │ContentFilter│ │  Database   │
//!   │  (Atomic)   │ │ (validate,  │ │  (RwLock)   │
//!   └─────────────┘ │   clean)    │ └──────┬──────┘
//!                   └─────────────┘        │
//!                                          ▼
//!                                  ┌───────────────┐
//!                                  │ database.json │
//!                                  └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod database;
pub mod metrics;
pub mod moderation;
pub mod api;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ChirpyError, Result};
pub use config::Config;
pub use database::{Chirp, Database};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Chirpy
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
