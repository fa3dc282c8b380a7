pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::review::handlers as review;
use crate::screening::handlers as screening;
use crate::state::AppState;
use crate::translation::handlers as translation;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Customer Review Analyzer
        .route(
            "/api/v1/reviews/analyze",
            post(review::handle_analyze_review),
        )
        // Language Translator
        .route("/api/v1/languages", get(translation::handle_list_languages))
        .route("/api/v1/translate", post(translation::handle_translate))
        // Résumé Screener
        .route(
            "/api/v1/screening",
            post(screening::handle_screen_resumes),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
