//! Notepad library - router, state and re-exports for testing.
//!
//! The binary in `main.rs` loads [`Config`], opens the [`NoteStore`] and
//! serves [`build_router`]. Integration tests build the same router over a
//! temporary store.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod i18n;
pub mod models;
pub mod notes;
pub mod store;
pub mod templates;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: NoteStore,
}

impl AppState {
    pub fn new(config: Config, store: NoteStore) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn build_router(state: AppState) -> Router {
    let assets = state.config.assets_dir.clone();

    Router::new()
        .route("/", get(handlers::index))
        .route("/share/{hash}", get(handlers::share_page))
        .route("/auth/app", post(handlers::app_auth))
        .route("/{path}", get(handlers::note_page).post(handlers::save_note))
        .route("/{path}/auth", post(handlers::note_auth))
        .route("/{path}/pw", post(handlers::set_password))
        .route("/{path}/setting", post(handlers::update_setting))
        // Static assets bypass the note routes
        .nest_service("/static", ServeDir::new(&assets))
        .nest_service("/css", ServeDir::new(assets.join("css")))
        .nest_service("/js", ServeDir::new(assets.join("js")))
        .nest_service("/img", ServeDir::new(assets.join("img")))
        .route_service("/favicon.ico", ServeFile::new(assets.join("favicon.ico")))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Re-export commonly used types
pub use auth::{check_app_auth, check_auth, salted_hash, sign, verify, Claim};
pub use config::{Config, ConfigError};
pub use error::{ApiError, ErrorCode, StoreError};
pub use i18n::Lang;
pub use models::{ApiResponse, Mode, Note, NoteLookup, NoteMeta};
pub use store::{share_hash, NoteStore};
