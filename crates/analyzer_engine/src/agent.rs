//! Client for the hosted generative model that answers questions.
//!
//! One request per analysis: no retry, no streaming, and no timeout unless
//! configured. Every failure is surfaced to the caller as [`AgentError`].

use std::time::Duration;

use analyzer_logging::{analyzer_debug, analyzer_warn};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

const API_KEY_HEADER: &str = "x-goog-api-key";
const MARKDOWN_INSTRUCTION: &str = "Use markdown to format your answers.";

#[derive(Debug, Clone)]
pub struct AgentSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    /// Let the model ground answers with its web search tool.
    pub web_search: bool,
    pub request_timeout: Option<Duration>,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            web_search: true,
            request_timeout: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("agent request failed: {0}")]
    Network(String),
    #[error("agent returned http status {status}: {message}")]
    HttpStatus { status: u16, message: String },
    #[error("agent response could not be parsed: {0}")]
    MalformedResponse(String),
    #[error("agent returned no answer{}", reason_suffix(.reason))]
    EmptyResponse { reason: Option<String> },
}

fn reason_suffix(reason: &Option<String>) -> String {
    reason
        .as_deref()
        .map(|reason| format!(" ({reason})"))
        .unwrap_or_default()
}

#[async_trait::async_trait]
pub trait AnalysisAgent: Send + Sync {
    async fn analyze(&self, prompt: &str) -> Result<String, AgentError>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Serialize)]
struct GoogleSearch {}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Gemini `generateContent` client.
pub struct GeminiAgent {
    client: reqwest::Client,
    settings: AgentSettings,
}

impl GeminiAgent {
    pub fn new(settings: AgentSettings) -> Result<Self, AgentError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| AgentError::Network(err.to_string()))?;
        if settings.api_key.is_none() {
            analyzer_warn!("no API key configured; agent requests will be unauthenticated");
        }
        Ok(Self { client, settings })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.api_base.trim_end_matches('/'),
            self.settings.model
        )
    }

    fn build_request<'a>(&self, prompt: &'a str) -> GenerateRequest<'a> {
        let tools = if self.settings.web_search {
            vec![Tool {
                google_search: GoogleSearch {},
            }]
        } else {
            Vec::new()
        };
        GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: MARKDOWN_INSTRUCTION,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
            tools,
        }
    }
}

#[async_trait::async_trait]
impl AnalysisAgent for GeminiAgent {
    async fn analyze(&self, prompt: &str) -> Result<String, AgentError> {
        let endpoint = self.endpoint();
        analyzer_debug!("POST {} ({} prompt chars)", endpoint, prompt.chars().count());

        let mut request = self.client.post(&endpoint).json(&self.build_request(prompt));
        if let Some(key) = self.settings.api_key.as_deref() {
            request = request.header(API_KEY_HEADER, key);
        }
        let response = request
            .send()
            .await
            .map_err(|err| AgentError::Network(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| AgentError::Network(err.to_string()))?;
        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or(body);
            return Err(AgentError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = serde_json::from_str(&body)
            .map_err(|err| AgentError::MalformedResponse(err.to_string()))?;
        answer_text(parsed)
    }
}

fn answer_text(response: GenerateResponse) -> Result<String, AgentError> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(AgentError::EmptyResponse {
            reason: response.prompt_feedback.and_then(|f| f.block_reason),
        });
    };
    let text: String = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| part.text)
        .collect();
    if text.is_empty() {
        return Err(AgentError::EmptyResponse {
            reason: candidate.finish_reason,
        });
    }
    Ok(text)
}
