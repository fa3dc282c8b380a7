/// LLM Client — the single point of entry for all chat-completion calls in textlens.
///
/// ARCHITECTURAL RULE: No other module may call a vendor API directly.
/// All LLM interactions MUST go through `LlmClient` (or a `TextGenerator` test double).
///
/// Both vendors speak the OpenAI-compatible chat-completions wire format. The vendor is
/// chosen once from the shape of the caller's API key, see `Backend::from_api_key`.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod stream;

use stream::{collect_fragments, FragmentStream};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Model used for review extraction and translation.
pub const EXTRACTION_MODEL: &str = "gpt-4o-mini";
/// OpenAI model used for résumé screening.
pub const OPENAI_SCREENING_MODEL: &str = "gpt-4";
/// Groq model used for résumé screening.
pub const GROQ_SCREENING_MODEL: &str = "llama3-groq-70b-8192-tool-use-preview";

const OPENAI_KEY_PREFIX: &str = "sk-";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Malformed response stream: {0}")]
    Stream(String),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// The vendor behind an API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    OpenAi,
    Groq,
}

impl Backend {
    /// `sk-` keys belong to OpenAI; every other key is treated as a Groq key.
    pub fn from_api_key(api_key: &str) -> Self {
        if api_key.starts_with(OPENAI_KEY_PREFIX) {
            Backend::OpenAi
        } else {
            Backend::Groq
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Backend::OpenAi => "OpenAI",
            Backend::Groq => "Groq",
        }
    }
}

/// Base URLs for each vendor. Overridable so tests can point at a mock server.
#[derive(Debug, Clone)]
pub struct LlmEndpoints {
    pub openai_base_url: String,
    pub groq_base_url: String,
}

impl LlmEndpoints {
    fn chat_completions_url(&self, backend: Backend) -> String {
        let base = match backend {
            Backend::OpenAi => &self.openai_base_url,
            Backend::Groq => &self.groq_base_url,
        };
        format!("{}/chat/completions", base.trim_end_matches('/'))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Sampling configuration for one generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    pub top_p: Option<f32>,
    pub stream: bool,
}

impl GenerationParams {
    /// Deterministic settings for extraction and translation.
    pub fn extraction() -> Self {
        Self {
            model: EXTRACTION_MODEL.to_string(),
            temperature: 0.0,
            max_tokens: None,
            top_p: None,
            stream: false,
        }
    }

    /// Résumé analysis settings. The Groq path streams its output.
    pub fn screening(backend: Backend) -> Self {
        match backend {
            Backend::OpenAi => Self {
                model: OPENAI_SCREENING_MODEL.to_string(),
                temperature: 0.0,
                max_tokens: None,
                top_p: None,
                stream: false,
            },
            Backend::Groq => Self {
                model: GROQ_SCREENING_MODEL.to_string(),
                temperature: 0.5,
                max_tokens: Some(1024),
                top_p: Some(0.65),
                stream: true,
            },
        }
    }
}

/// Anything that can turn a message list into generated text.
///
/// `LlmClient` is the production implementation; pipelines take `&dyn TextGenerator`
/// so they can be exercised without a network.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn backend(&self) -> Backend;

    async fn generate(
        &self,
        messages: &[ChatMessage],
        params: &GenerationParams,
    ) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// A chat-completions client bound to one vendor and one API key.
/// Built per request, since the key arrives with the request.
#[derive(Clone)]
pub struct LlmClient {
    http: Client,
    backend: Backend,
    url: String,
    api_key: String,
}

impl LlmClient {
    pub fn new(http: Client, endpoints: &LlmEndpoints, backend: Backend, api_key: String) -> Self {
        Self {
            http,
            backend,
            url: endpoints.chat_completions_url(backend),
            api_key,
        }
    }

    /// Resolves the backend from the key itself.
    pub fn for_api_key(http: Client, endpoints: &LlmEndpoints, api_key: String) -> Self {
        let backend = Backend::from_api_key(&api_key);
        Self::new(http, endpoints, backend, api_key)
    }

    async fn send(
        &self,
        messages: &[ChatMessage],
        params: &GenerationParams,
    ) -> Result<reqwest::Response, LlmError> {
        let request_body = ChatRequest {
            model: &params.model,
            messages,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            top_p: params.top_p,
            stream: params.stream,
        };

        debug!(
            "Calling {} model {} (stream={})",
            self.backend.display_name(),
            params.model,
            params.stream
        );

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &GenerationParams,
    ) -> Result<String, LlmError> {
        let response: ChatResponse = self.send(messages, params).await?.json().await?;

        if let Some(usage) = &response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(LlmError::EmptyContent)
    }

    /// Opens a streaming completion. The returned stream is one-shot.
    pub async fn stream(
        &self,
        messages: &[ChatMessage],
        params: &GenerationParams,
    ) -> Result<FragmentStream, LlmError> {
        let params = GenerationParams {
            stream: true,
            ..params.clone()
        };
        let response = self.send(messages, &params).await?;
        Ok(FragmentStream::from_sse(response.bytes_stream()))
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    fn backend(&self) -> Backend {
        self.backend
    }

    async fn generate(
        &self,
        messages: &[ChatMessage],
        params: &GenerationParams,
    ) -> Result<String, LlmError> {
        if params.stream {
            let fragments = self.stream(messages, params).await?;
            collect_fragments(fragments).await
        } else {
            self.complete(messages, params).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn endpoints_for(server: &MockServer) -> LlmEndpoints {
        LlmEndpoints {
            openai_base_url: format!("{}/openai", server.uri()),
            groq_base_url: format!("{}/groq", server.uri()),
        }
    }

    #[test]
    fn test_openai_key_routes_to_openai() {
        assert_eq!(Backend::from_api_key("sk-abc123"), Backend::OpenAi);
    }

    #[test]
    fn test_other_key_routes_to_groq() {
        assert_eq!(Backend::from_api_key("gsk_xyz"), Backend::Groq);
        assert_eq!(Backend::from_api_key(""), Backend::Groq);
        assert_eq!(Backend::from_api_key("SK-upper"), Backend::Groq);
    }

    #[test]
    fn test_screening_params_per_backend() {
        let openai = GenerationParams::screening(Backend::OpenAi);
        assert_eq!(openai.model, OPENAI_SCREENING_MODEL);
        assert!(!openai.stream);

        let groq = GenerationParams::screening(Backend::Groq);
        assert_eq!(groq.model, GROQ_SCREENING_MODEL);
        assert!(groq.stream);
        assert_eq!(groq.max_tokens, Some(1024));
        assert!((groq.temperature - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_chat_request_skips_unset_sampling_fields() {
        let messages = vec![ChatMessage::user("hi")];
        let params = GenerationParams::extraction();
        let body = ChatRequest {
            model: &params.model,
            messages: &messages,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            top_p: params.top_p,
            stream: params.stream,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("max_tokens").is_none());
        assert!(json.get("top_p").is_none());
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[tokio::test]
    async fn test_openai_completion_returns_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/openai/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-4o-mini",
                "stream": false
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": "Bonjour"}}],
                "usage": {"prompt_tokens": 10, "completion_tokens": 2}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = LlmClient::for_api_key(
            Client::new(),
            &endpoints_for(&server),
            "sk-test".to_string(),
        );
        let text = client
            .generate(&[ChatMessage::user("Hello")], &GenerationParams::extraction())
            .await
            .unwrap();
        assert_eq!(text, "Bonjour");
    }

    #[tokio::test]
    async fn test_groq_streaming_concatenates_fragments() {
        let server = MockServer::start().await;
        let body = concat!(
            "data: {\"choices\":[{\"delta\":{\"role\":\"assistant\"}}]}\n\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"Hel\"}}]}\n\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"lo, \"}}]}\n\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"world\"}}]}\n\n",
            "data: [DONE]\n\n",
        );
        Mock::given(method("POST"))
            .and(path("/groq/chat/completions"))
            .and(body_partial_json(serde_json::json!({"stream": true, "max_tokens": 1024})))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
            .expect(1)
            .mount(&server)
            .await;

        let client = LlmClient::for_api_key(
            Client::new(),
            &endpoints_for(&server),
            "gsk_test".to_string(),
        );
        assert_eq!(client.backend(), Backend::Groq);
        let text = client
            .generate(
                &[ChatMessage::user("Hello")],
                &GenerationParams::screening(Backend::Groq),
            )
            .await
            .unwrap();
        assert_eq!(text, "Hello, world");
    }

    #[tokio::test]
    async fn test_api_error_message_is_extracted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/openai/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": {"message": "Incorrect API key provided"}
            })))
            .mount(&server)
            .await;

        let client =
            LlmClient::for_api_key(Client::new(), &endpoints_for(&server), "sk-bad".to_string());
        let err = client
            .generate(&[ChatMessage::user("Hello")], &GenerationParams::extraction())
            .await
            .unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Incorrect API key provided");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_choices_is_empty_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/openai/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let client =
            LlmClient::for_api_key(Client::new(), &endpoints_for(&server), "sk-x".to_string());
        let err = client
            .generate(&[ChatMessage::user("Hello")], &GenerationParams::extraction())
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }
}
