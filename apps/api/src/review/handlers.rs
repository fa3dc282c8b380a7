//! Axum route handlers for the Review API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::llm_client::Backend;
use crate::review::analyzer::{analyze_review, ReviewAnalysis, ReviewForm};
use crate::state::AppState;

/// POST /api/v1/reviews/analyze
///
/// Always calls OpenAI, whatever the key shape.
pub async fn handle_analyze_review(
    State(state): State<AppState>,
    Json(form): Json<ReviewForm>,
) -> Result<Json<ReviewAnalysis>, AppError> {
    let request = form.validate()?;
    let llm = state.llm(Backend::OpenAi, &request.api_key);
    let analysis = analyze_review(request, &llm).await?;
    Ok(Json(analysis))
}
