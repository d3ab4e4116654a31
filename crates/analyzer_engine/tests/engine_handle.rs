use std::sync::{Arc, Mutex};

use analyzer_engine::{
    AgentError, AnalysisAgent, ContentSource, EngineHandle, FailureKind, FetchError,
    FetchMetadata, FetchOutput, Fetcher, MediaType, MAX_PROMPT_CONTENT_CHARS,
};

struct StaticFetcher {
    body: &'static str,
}

#[async_trait::async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError> {
        if url.contains("offline") {
            return Err(FetchError {
                kind: FailureKind::Network,
                message: "connection refused".to_string(),
            });
        }
        Ok(FetchOutput {
            bytes: self.body.as_bytes().to_vec(),
            metadata: FetchMetadata {
                original_url: url.to_string(),
                final_url: url.to_string(),
                redirect_count: 0,
                content_type: Some("text/html".to_string()),
                byte_len: self.body.len() as u64,
            },
        })
    }
}

#[derive(Default)]
struct RecordingAgent {
    prompts: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl AnalysisAgent for RecordingAgent {
    async fn analyze(&self, prompt: &str) -> Result<String, AgentError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok("**answer**".to_string())
    }
}

fn engine(agent: Arc<RecordingAgent>) -> EngineHandle {
    let fetcher = Arc::new(StaticFetcher {
        body: "<html><body><p>Hello <b>there</b></p><script>x()</script></body></html>",
    });
    EngineHandle::with_fetcher(fetcher, agent).expect("engine")
}

#[test]
fn extract_blocks_until_web_text_is_ready() {
    let engine = engine(Arc::default());
    let text = engine
        .extract(&ContentSource::WebUrl("https://example.com".to_string()))
        .unwrap();
    assert_eq!(text, "Hello there");
}

#[test]
fn fetch_failure_is_returned_not_raised() {
    let engine = engine(Arc::default());
    let err = engine
        .extract(&ContentSource::WebUrl("https://offline.example".to_string()))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error fetching content: network error (connection refused)"
    );
}

#[test]
fn uploads_do_not_touch_the_fetcher() {
    let engine = engine(Arc::default());
    let text = engine
        .extract(&ContentSource::Upload {
            file_name: "notes.txt".to_string(),
            media_type: MediaType::PlainText,
            bytes: b"plain notes".to_vec(),
        })
        .unwrap();
    assert_eq!(text, "plain notes");
}

#[test]
fn analyze_sends_one_truncated_prompt() {
    let agent = Arc::new(RecordingAgent::default());
    let engine = engine(agent.clone());
    let content = format!("{}{}", "x".repeat(MAX_PROMPT_CONTENT_CHARS), "overflow");

    let answer = engine.analyze("What is x?", &content).unwrap();

    assert_eq!(answer, "**answer**");
    let prompts = agent.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("User Query: What is x?"));
    assert!(prompts[0].contains(&"x".repeat(MAX_PROMPT_CONTENT_CHARS)));
    assert!(!prompts[0].contains("overflow"));
}
