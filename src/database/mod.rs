//! Database Module
//!
//! Single-file JSON store holding every chirp.
//!
//! ## Responsibilities
//! - Create the backing file with an empty document on first open
//! - Load the whole document on every call (no cross-call cache)
//! - Assign ids (max + 1) and rewrite the whole document on insert
//! - Serialize access: inserts exclusive, listings shared
//!
//! ## File Format
//! ```text
//! {
//!   "chirps": {
//!     "1": { "Id": 1, "body": "first" },
//!     "2": { "Id": 2, "body": "second" }
//!   }
//! }
//! ```
//! A zero-length file is read as the empty document.

mod chirp;
mod db;

pub use chirp::{Chirp, Document};
pub use db::Database;
