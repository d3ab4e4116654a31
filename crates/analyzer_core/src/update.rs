use crate::state::AnalysisState;
use crate::{AppState, ContentState, Effect, Msg, SourceKind};

pub const EMPTY_QUERY_WARNING: &str = "Please enter a question about the content.";
pub const EMPTY_CONTENT_MESSAGE: &str = "No text content could be extracted";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SourceKindSelected(kind) => {
            state.select_source_kind(kind);
            Vec::new()
        }
        Msg::UrlEntered(raw) => {
            if state.source_kind() != Some(SourceKind::WebUrl) {
                return (state, Vec::new());
            }
            let url = raw.trim();
            if url.is_empty() {
                state.clear_source();
                return (state, Vec::new());
            }
            let url = url.to_string();
            state.begin_extraction(url.clone());
            vec![Effect::FetchUrl { url }]
        }
        Msg::FileUploaded {
            file_name,
            media_type,
            bytes,
        } => {
            if state.source_kind() != Some(SourceKind::UploadFile) {
                return (state, Vec::new());
            }
            state.begin_extraction(file_name.clone());
            vec![Effect::ExtractUpload {
                file_name,
                media_type,
                bytes,
            }]
        }
        Msg::ExtractionFinished(result) => {
            // Stale completions (source changed meanwhile) are dropped.
            if !state.is_extracting() {
                return (state, Vec::new());
            }
            let content = match result {
                Ok(text) if text.is_empty() => {
                    ContentState::Failed(EMPTY_CONTENT_MESSAGE.to_string())
                }
                Ok(text) => ContentState::Loaded(text),
                Err(message) => ContentState::Failed(message),
            };
            state.finish_extraction(content);
            Vec::new()
        }
        Msg::QueryChanged(query) => {
            if state.loaded_content().is_none() || state.query() == query {
                return (state, Vec::new());
            }
            state.set_query(query);
            Vec::new()
        }
        Msg::AnalyzeClicked => {
            let Some(content) = state.loaded_content().map(ToOwned::to_owned) else {
                return (state, Vec::new());
            };
            if state.is_analyzing() {
                return (state, Vec::new());
            }
            if state.query().trim().is_empty() {
                state.set_warning(EMPTY_QUERY_WARNING);
                return (state, Vec::new());
            }
            let query = state.query().to_string();
            state.set_analysis(AnalysisState::Analyzing);
            vec![Effect::Analyze { query, content }]
        }
        Msg::AnalysisFinished(result) => {
            if !state.is_analyzing() {
                return (state, Vec::new());
            }
            state.set_analysis(match result {
                Ok(answer) => AnalysisState::Shown(answer),
                Err(message) => AnalysisState::Failed(message),
            });
            Vec::new()
        }
    };

    (state, effects)
}
