use crate::view_model::{AppViewModel, StatusLine};

/// The two mutually exclusive inputs the user can choose between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    WebUrl,
    UploadFile,
}

/// Where the interaction currently is, derived from [`AppState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Idle,
    SourceSelected,
    Extracting,
    ContentLoaded,
    ContentFailed,
    QueryEntered,
    Analyzing,
    ResultShown,
    AnalysisFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContentState {
    #[default]
    Empty,
    Extracting,
    Loaded(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum AnalysisState {
    #[default]
    Idle,
    Analyzing,
    Shown(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    source_kind: Option<SourceKind>,
    source_label: Option<String>,
    content: ContentState,
    query: String,
    analysis: AnalysisState,
    warning: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_kind(&self) -> Option<SourceKind> {
        self.source_kind
    }

    pub fn content(&self) -> &ContentState {
        &self.content
    }

    pub fn loaded_content(&self) -> Option<&str> {
        match &self.content {
            ContentState::Loaded(text) => Some(text),
            _ => None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn stage(&self) -> Stage {
        if self.source_kind.is_none() {
            return Stage::Idle;
        }
        match &self.content {
            ContentState::Empty => Stage::SourceSelected,
            ContentState::Extracting => Stage::Extracting,
            ContentState::Failed(_) => Stage::ContentFailed,
            ContentState::Loaded(_) => match &self.analysis {
                AnalysisState::Analyzing => Stage::Analyzing,
                AnalysisState::Shown(_) => Stage::ResultShown,
                AnalysisState::Failed(_) => Stage::AnalysisFailed,
                AnalysisState::Idle if self.query.is_empty() => Stage::ContentLoaded,
                AnalysisState::Idle => Stage::QueryEntered,
            },
        }
    }

    pub fn view(&self) -> AppViewModel {
        let status = match (&self.content, &self.analysis) {
            (ContentState::Empty, _) => None,
            (ContentState::Extracting, _) => Some(StatusLine::Loading(
                match self.source_kind {
                    Some(SourceKind::UploadFile) => "Processing uploaded file...",
                    _ => "Fetching webpage content...",
                }
                .to_string(),
            )),
            (ContentState::Failed(message), _) => Some(StatusLine::Error(message.clone())),
            (ContentState::Loaded(_), AnalysisState::Analyzing) => Some(StatusLine::Loading(
                "AI is analyzing your content...".to_string(),
            )),
            (ContentState::Loaded(_), AnalysisState::Failed(message)) => {
                Some(StatusLine::Error(message.clone()))
            }
            (ContentState::Loaded(_), _) => Some(StatusLine::Success(
                "Content loaded successfully!".to_string(),
            )),
        };
        let answer = match &self.analysis {
            AnalysisState::Shown(answer) => Some(answer.clone()),
            _ => None,
        };

        AppViewModel {
            stage: self.stage(),
            source_kind: self.source_kind,
            source_label: self.source_label.clone(),
            status,
            query_enabled: self.loaded_content().is_some(),
            query: self.query.clone(),
            warning: self.warning.clone(),
            answer,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn select_source_kind(&mut self, kind: SourceKind) {
        self.source_kind = Some(kind);
        self.source_label = None;
        self.content = ContentState::Empty;
        self.query.clear();
        self.analysis = AnalysisState::Idle;
        self.warning = None;
        self.mark_dirty();
    }

    pub(crate) fn begin_extraction(&mut self, label: String) {
        self.source_label = Some(label);
        self.content = ContentState::Extracting;
        self.query.clear();
        self.analysis = AnalysisState::Idle;
        self.warning = None;
        self.mark_dirty();
    }

    pub(crate) fn clear_source(&mut self) {
        self.source_label = None;
        self.content = ContentState::Empty;
        self.query.clear();
        self.analysis = AnalysisState::Idle;
        self.warning = None;
        self.mark_dirty();
    }

    pub(crate) fn finish_extraction(&mut self, content: ContentState) {
        self.content = content;
        self.mark_dirty();
    }

    pub(crate) fn set_query(&mut self, query: String) {
        self.query = query;
        self.analysis = AnalysisState::Idle;
        self.warning = None;
        self.mark_dirty();
    }

    pub(crate) fn set_warning(&mut self, warning: &str) {
        self.warning = Some(warning.to_string());
        self.mark_dirty();
    }

    pub(crate) fn set_analysis(&mut self, analysis: AnalysisState) {
        self.analysis = analysis;
        self.warning = None;
        self.mark_dirty();
    }

    pub(crate) fn is_extracting(&self) -> bool {
        self.content == ContentState::Extracting
    }

    pub(crate) fn is_analyzing(&self) -> bool {
        self.analysis == AnalysisState::Analyzing
    }
}
