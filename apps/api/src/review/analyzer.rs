//! Customer Review Analyzer — extracts gift / delivery / price information from a review.
//!
//! Two modes:
//! - `FreeForm`: the output format is described in prose and the reply is returned as-is,
//!   with a lenient, non-failing attempt to read it as a `ReviewRecord`.
//! - `Structured`: the response schema is compiled into format instructions and the reply
//!   must parse against it. A non-conforming reply fails the request.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::llm_client::{ChatMessage, GenerationParams, TextGenerator};
use crate::models::review::ReviewRecord;
use crate::prompt::{PromptTemplate, StructuredOutputParser};
use crate::review::prompts::{review_schemas, REVIEW_TEMPLATE, REVIEW_TEMPLATE_STRUCTURED};

pub const MISSING_KEY_MESSAGE: &str = "Please enter your OpenAI API key.";
pub const MISSING_REVIEW_MESSAGE: &str = "Please enter a customer review.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    #[default]
    FreeForm,
    Structured,
}

/// Raw analyze form as posted by the client.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewForm {
    pub api_key: Option<String>,
    pub review_text: Option<String>,
    #[serde(default)]
    pub mode: AnalysisMode,
}

/// Validated analyze request.
#[derive(Debug, Clone)]
pub struct ReviewRequest {
    pub api_key: String,
    pub review_text: String,
    pub mode: AnalysisMode,
}

impl ReviewForm {
    pub fn validate(self) -> Result<ReviewRequest, AppError> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| AppError::Validation(MISSING_KEY_MESSAGE.to_string()))?;
        let review_text = self
            .review_text
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AppError::Validation(MISSING_REVIEW_MESSAGE.to_string()))?;

        Ok(ReviewRequest {
            api_key,
            review_text,
            mode: self.mode,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ReviewAnalysis {
    pub mode: AnalysisMode,
    /// The model's reply, verbatim.
    pub raw_output: String,
    /// Schema-parsed fields (structured mode only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Map<String, Value>>,
    pub record: Option<ReviewRecord>,
}

pub async fn analyze_review(
    request: ReviewRequest,
    llm: &dyn TextGenerator,
) -> Result<ReviewAnalysis, AppError> {
    let params = GenerationParams::extraction();
    info!("Analyzing review ({:?} mode)", request.mode);

    match request.mode {
        AnalysisMode::FreeForm => {
            let prompt =
                PromptTemplate::new(REVIEW_TEMPLATE)?.render([("text", request.review_text.as_str())])?;
            let raw_output = llm.generate(&[ChatMessage::user(prompt)], &params).await?;
            let record = ReviewRecord::from_reply(&raw_output);
            if record.is_none() {
                debug!("Free-form reply is not JSON; returning it verbatim");
            }

            Ok(ReviewAnalysis {
                mode: request.mode,
                raw_output,
                fields: None,
                record,
            })
        }
        AnalysisMode::Structured => {
            let parser = StructuredOutputParser::new(review_schemas());
            let format_instructions = parser.format_instructions();
            let prompt = PromptTemplate::new(REVIEW_TEMPLATE_STRUCTURED)?.render([
                ("text", request.review_text.as_str()),
                ("format_instructions", format_instructions.as_str()),
            ])?;
            let raw_output = llm.generate(&[ChatMessage::user(prompt)], &params).await?;
            let fields = parser.parse(&raw_output)?;
            let record = ReviewRecord::from_fields(&fields);

            Ok(ReviewAnalysis {
                mode: request.mode,
                raw_output,
                fields: Some(fields),
                record: Some(record),
            })
        }
    }
}
