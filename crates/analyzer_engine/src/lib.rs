//! Analyzer engine: content extraction, prompt composition and the agent client.
mod agent;
mod decode;
mod engine;
mod extract;
mod fetch;
mod html;
mod pdf;
mod prompt;
mod tabular;
mod types;

pub use agent::{
    AgentError, AgentSettings, AnalysisAgent, GeminiAgent, DEFAULT_API_BASE,
    DEFAULT_MODEL,
};
pub use decode::{decode_html, decode_utf8_strict, DecodeError, DecodedText};
pub use engine::EngineHandle;
pub use extract::{extract_upload, ContentExtractor};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, BROWSER_USER_AGENT};
pub use html::html_to_text;
pub use pdf::pdf_to_text;
pub use prompt::{compose_prompt, truncate_chars, MAX_PROMPT_CONTENT_CHARS};
pub use tabular::{csv_to_text, workbook_to_text, TabularError};
pub use types::{
    ContentSource, ExtractError, FailureKind, FetchError, FetchMetadata, FetchOutput, MediaType,
};
