//! Axum route handlers for the Screening API.

use axum::{
    extract::{multipart::Field, Multipart, State},
    Json,
};
use tracing::debug;

use crate::errors::AppError;
use crate::screening::screener::{screen_resumes, ResumeUpload, ScreeningForm, ScreeningReport};
use crate::state::AppState;

/// POST /api/v1/screening
///
/// Multipart form: `api_key`, `job_requirements`, and one or more `resumes` PDF parts.
/// The vendor is chosen from the key shape.
pub async fn handle_screen_resumes(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ScreeningReport>, AppError> {
    let request = read_screening_form(multipart).await?.validate()?;
    let llm = state.llm_for_key(&request.api_key);
    let report = screen_resumes(request, &llm).await?;
    Ok(Json(report))
}

async fn read_screening_form(mut multipart: Multipart) -> Result<ScreeningForm, AppError> {
    let mut form = ScreeningForm::default();

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "api_key" => form.api_key = Some(field.text().await.map_err(bad_multipart)?),
            "job_requirements" => {
                form.job_requirements = Some(field.text().await.map_err(bad_multipart)?)
            }
            "resumes" | "resumes[]" => {
                if let Some(upload) = read_resume(field).await? {
                    form.resumes.push(upload);
                }
            }
            other => debug!("Ignoring unexpected form field '{other}'"),
        }
    }

    Ok(form)
}

/// Reads one résumé part. A file input left empty by the browser arrives as a part with
/// a blank filename and no content; that yields `None`.
async fn read_resume(field: Field<'_>) -> Result<Option<ResumeUpload>, AppError> {
    let filename = field.file_name().map(str::to_string);
    let declared_pdf = field.content_type() == Some("application/pdf");
    let bytes = field.bytes().await.map_err(bad_multipart)?;

    if bytes.is_empty() && filename.as_deref().map_or(true, str::is_empty) {
        debug!("Skipping empty resume part");
        return Ok(None);
    }

    let filename = filename.unwrap_or_else(|| "resume.pdf".to_string());
    if !(declared_pdf || filename.to_lowercase().ends_with(".pdf")) {
        return Err(AppError::Validation(format!(
            "'{filename}' is not a PDF. Only PDF resumes are supported."
        )));
    }

    Ok(Some(ResumeUpload { filename, bytes }))
}

fn bad_multipart(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("Invalid multipart form: {e}"))
}
