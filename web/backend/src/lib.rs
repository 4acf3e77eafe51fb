pub mod config;
pub mod curation;
pub mod error;
pub mod gemini;
pub mod generation;
pub mod handlers;
pub mod ingestion;
pub mod jamendo;
pub mod models;
pub mod state;
pub mod store;

use axum::{
    Router,
    routing::{get, post},
};
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/brands",
            get(handlers::get_brands)
                .post(handlers::create_brand)
                .put(handlers::update_brand)
                .delete(handlers::delete_brand),
        )
        .route("/curate", post(handlers::curate))
        .route("/playlists", get(handlers::get_playlists))
        .route("/playlists/generate", post(handlers::generate))
        .route("/tracks", get(handlers::get_tracks))
        .route("/playlog", post(handlers::play_log))
        .route("/music", get(handlers::search_music))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
