use analyzer_core::{Effect, Msg};
use analyzer_engine::{ContentSource, EngineHandle, MediaType};
use analyzer_logging::{analyzer_info, analyzer_warn};

/// Executes core effects against the engine, one at a time, and turns each
/// outcome into the message that completes it.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, effect: Effect) -> Msg {
        match effect {
            Effect::FetchUrl { url } => {
                analyzer_info!("FetchUrl url_len={} url={}", url.len(), url);
                let result = self.engine.extract(&ContentSource::WebUrl(url));
                Msg::ExtractionFinished(result.map_err(|err| err.to_string()))
            }
            Effect::ExtractUpload {
                file_name,
                media_type,
                bytes,
            } => {
                let Some(parsed) = MediaType::from_mime(&media_type) else {
                    analyzer_warn!("refusing {} with media type {}", file_name, media_type);
                    return Msg::ExtractionFinished(Err(format!(
                        "Unsupported file type: {media_type}"
                    )));
                };
                let source = ContentSource::Upload {
                    file_name,
                    media_type: parsed,
                    bytes,
                };
                Msg::ExtractionFinished(self.engine.extract(&source).map_err(|err| err.to_string()))
            }
            Effect::Analyze { query, content } => {
                analyzer_info!(
                    "Analyze query_len={} content_len={}",
                    query.len(),
                    content.len()
                );
                let result = self.engine.analyze(&query, &content);
                Msg::AnalysisFinished(result.map_err(|err| err.to_string()))
            }
        }
    }
}
