//! Language Translator — renders the translation prompt for a chosen language and returns
//! the model's reply verbatim.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::{ChatMessage, GenerationParams, TextGenerator};
use crate::prompt::PromptTemplate;
use crate::translation::languages::{default_language, resolve, Language};
use crate::translation::prompts::TRANSLATION_TEMPLATE;

pub const MISSING_KEY_MESSAGE: &str = "Please enter your OpenAI API key.";
pub const MISSING_TEXT_MESSAGE: &str = "Please enter text to translate.";

#[derive(Debug, Default, Deserialize)]
pub struct TranslateForm {
    pub api_key: Option<String>,
    pub text: Option<String>,
    /// Language name or two-letter code. Defaults to English.
    pub language: Option<String>,
}

/// Validated translation input.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub api_key: String,
    pub text: String,
    pub language: &'static Language,
}

impl TranslateForm {
    pub fn validate(self) -> Result<TranslationRequest, AppError> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| AppError::Validation(MISSING_KEY_MESSAGE.to_string()))?;
        let text = self
            .text
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AppError::Validation(MISSING_TEXT_MESSAGE.to_string()))?;
        let language = match self.language.as_deref().map(str::trim) {
            None | Some("") => default_language(),
            Some(input) => resolve(input)
                .ok_or_else(|| AppError::Validation(format!("Unknown language '{input}'.")))?,
        };

        Ok(TranslationRequest {
            api_key,
            text,
            language,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct Translation {
    pub language: &'static str,
    pub code: &'static str,
    pub translation: String,
}

pub async fn translate(
    request: TranslationRequest,
    llm: &dyn TextGenerator,
) -> Result<Translation, AppError> {
    let language = request.language;
    info!("Translating into {} ({})", language.name, language.code);

    let prompt = PromptTemplate::new(TRANSLATION_TEMPLATE)?
        .render([("language", language.name), ("text", request.text.as_str())])?;
    let translation = llm
        .generate(&[ChatMessage::user(prompt)], &GenerationParams::extraction())
        .await?;

    Ok(Translation {
        language: language.name,
        code: language.code,
        translation,
    })
}
