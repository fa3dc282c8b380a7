//! Résumé Screener — summarises each uploaded résumé, asks the model for an eligibility
//! verdict, and partitions candidates into eligible / ineligible.
//!
//! Files are processed one at a time, in upload order. A failed model call is recorded
//! against its file and the run continues; anything else aborts the run.

use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::{Backend, ChatMessage, GenerationParams, TextGenerator};
use crate::models::candidate::Candidate;
use crate::prompt::PromptTemplate;
use crate::screening::classifier::Eligibility;
use crate::screening::pdf;
use crate::screening::prompts::{ELIGIBILITY_TEMPLATE, RESUME_SUMMARY_TEMPLATE};

pub const MISSING_INPUT_MESSAGE: &str =
    "Please enter your API key, upload at least one resume, and provide job requirements.";

#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub filename: String,
    pub bytes: Bytes,
}

/// Raw screening input as collected from the form.
#[derive(Debug, Default)]
pub struct ScreeningForm {
    pub api_key: Option<String>,
    pub job_requirements: Option<String>,
    pub resumes: Vec<ResumeUpload>,
}

/// Validated screening input.
#[derive(Debug)]
pub struct ScreeningRequest {
    pub api_key: String,
    pub job_requirements: String,
    pub resumes: Vec<ResumeUpload>,
}

impl ScreeningForm {
    pub fn validate(self) -> Result<ScreeningRequest, AppError> {
        let api_key = non_blank(self.api_key);
        let job_requirements = non_blank(self.job_requirements);
        match (api_key, job_requirements) {
            (Some(api_key), Some(job_requirements)) if !self.resumes.is_empty() => {
                Ok(ScreeningRequest {
                    api_key,
                    job_requirements,
                    resumes: self.resumes,
                })
            }
            _ => Err(AppError::Validation(MISSING_INPUT_MESSAGE.to_string())),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, Serialize)]
pub struct ScreeningFailure {
    pub filename: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ScreeningReport {
    pub backend: Backend,
    pub eligible: Vec<Candidate>,
    pub ineligible: Vec<Candidate>,
    pub errors: Vec<ScreeningFailure>,
}

pub async fn screen_resumes(
    request: ScreeningRequest,
    llm: &dyn TextGenerator,
) -> Result<ScreeningReport, AppError> {
    let backend = llm.backend();
    let params = GenerationParams::screening(backend);
    let summary_template = PromptTemplate::new(RESUME_SUMMARY_TEMPLATE)?;
    let eligibility_template = PromptTemplate::new(ELIGIBILITY_TEMPLATE)?;

    info!(
        "Using {} API for processing {} resume(s)",
        backend.display_name(),
        request.resumes.len()
    );

    let mut report = ScreeningReport {
        backend,
        eligible: Vec::new(),
        ineligible: Vec::new(),
        errors: Vec::new(),
    };

    for upload in request.resumes {
        let resume_text = pdf::extract_text(&upload.filename, upload.bytes).await?;

        let outcome = screen_one(
            llm,
            &params,
            &summary_template,
            &eligibility_template,
            &request.job_requirements,
            &upload.filename,
            &resume_text,
        )
        .await;

        match outcome {
            Ok(candidate) => match candidate.eligibility {
                Eligibility::Eligible => report.eligible.push(candidate),
                Eligibility::Ineligible => report.ineligible.push(candidate),
            },
            Err(AppError::Llm(e)) => {
                warn!("Error processing resume {}: {e}", upload.filename);
                report.errors.push(ScreeningFailure {
                    message: format!("Error processing resume {}: {e}", upload.filename),
                    filename: upload.filename,
                });
            }
            Err(other) => return Err(other),
        }
    }

    info!(
        "Screening finished: {} eligible, {} ineligible, {} failed",
        report.eligible.len(),
        report.ineligible.len(),
        report.errors.len()
    );

    Ok(report)
}

async fn screen_one(
    llm: &dyn TextGenerator,
    params: &GenerationParams,
    summary_template: &PromptTemplate,
    eligibility_template: &PromptTemplate,
    job_requirements: &str,
    filename: &str,
    resume_text: &str,
) -> Result<Candidate, AppError> {
    let summary_prompt = summary_template.render([("resume_text", resume_text)])?;
    let resume_output = llm
        .generate(&[ChatMessage::user(summary_prompt)], params)
        .await?;

    let match_prompt = eligibility_template.render([
        ("job_requirements", job_requirements),
        ("resume_summary", resume_output.as_str()),
    ])?;
    let verdict = llm
        .generate(&[ChatMessage::user(match_prompt)], params)
        .await?;

    Ok(Candidate::new(filename.to_string(), resume_output, verdict))
}
