//! API Module
//!
//! HTTP surface of the service.
//!
//! ## Routes
//! - `/app/*`              static files, counted by the hit counter
//! - `/assets/*`           static files
//! - `GET /admin/metrics`  hit count as HTML
//! - `/api/reset`          reset the hit count
//! - `GET /api/healthz`    liveness
//! - `POST /api/validate_chirp`
//! - `GET|POST /api/chirps`
//!
//! ## Architecture
//! - axum router on a tokio runtime
//! - Database calls run on the blocking pool (file I/O is synchronous)
//! - Permissive CORS on every route

mod error;
mod handler;
mod router;
mod server;
mod state;

pub use error::ApiError;
pub use router::build_router;
pub use server::Server;
pub use state::AppState;
