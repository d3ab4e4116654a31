use std::sync::Arc;

use analyzer_logging::{analyzer_error, analyzer_info};

use crate::agent::{AgentError, AnalysisAgent};
use crate::extract::ContentExtractor;
use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::prompt::compose_prompt;
use crate::{ContentSource, ExtractError};

/// Synchronous front door to the engine.
///
/// Owns a current-thread runtime; every call blocks until its single request
/// completes. The agent is created once by the caller and injected here.
pub struct EngineHandle {
    runtime: tokio::runtime::Runtime,
    extractor: ContentExtractor,
    agent: Arc<dyn AnalysisAgent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings, agent: Arc<dyn AnalysisAgent>) -> std::io::Result<Self> {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)), agent)
    }

    pub fn with_fetcher(
        fetcher: Arc<dyn Fetcher>,
        agent: Arc<dyn AnalysisAgent>,
    ) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self {
            runtime,
            extractor: ContentExtractor::new(fetcher),
            agent,
        })
    }

    pub fn extract(&self, source: &ContentSource) -> Result<String, ExtractError> {
        self.runtime.block_on(self.extractor.extract(source))
    }

    /// Composes the prompt and asks the agent once.
    pub fn analyze(&self, query: &str, content: &str) -> Result<String, AgentError> {
        let prompt = compose_prompt(query, content);
        analyzer_info!("analyzing: {} prompt chars", prompt.chars().count());
        let result = self.runtime.block_on(self.agent.analyze(&prompt));
        if let Err(err) = &result {
            analyzer_error!("analysis failed: {}", err);
        }
        result
    }
}
