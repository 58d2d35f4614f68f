//! Route table

use axum::http::Method;
use axum::routing::{any, get, post};
use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;

use super::{handler, AppState};

/// Build the router with every Chirpy endpoint
pub fn build_router(state: AppState, config: &Config) -> Router {
    // Only the app file server feeds the hit counter
    let app_files: Router<AppState> = Router::new()
        .nest_service("/app", ServeDir::new(&config.app_dir))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            handler::count_hits,
        ));

    Router::new()
        .merge(app_files)
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .route("/admin/metrics", get(handler::metrics))
        .route("/api/reset", any(handler::reset))
        .route("/api/healthz", get(handler::healthz))
        .route("/api/validate_chirp", post(handler::validate_chirp))
        .route(
            "/api/chirps",
            get(handler::list_chirps).post(handler::create_chirp),
        )
        .with_state(state)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Allow any origin and header
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}
