//! Axum route handlers for the Translation API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::llm_client::Backend;
use crate::state::AppState;
use crate::translation::languages::{default_language, Language, LANGUAGES};
use crate::translation::translator::{translate, TranslateForm, Translation};

#[derive(Debug, Serialize)]
pub struct LanguageListResponse {
    pub default: &'static Language,
    pub languages: &'static [Language],
}

/// GET /api/v1/languages
pub async fn handle_list_languages() -> Json<LanguageListResponse> {
    Json(LanguageListResponse {
        default: default_language(),
        languages: LANGUAGES,
    })
}

/// POST /api/v1/translate
///
/// Always calls OpenAI, whatever the key shape.
pub async fn handle_translate(
    State(state): State<AppState>,
    Json(form): Json<TranslateForm>,
) -> Result<Json<Translation>, AppError> {
    let request = form.validate()?;
    let llm = state.llm(Backend::OpenAi, &request.api_key);
    let translation = translate(request, &llm).await?;
    Ok(Json(translation))
}
