use crate::{SourceKind, Stage};

/// One status banner per render; error and success never show together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    Loading(String),
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub stage: Stage,
    pub source_kind: Option<SourceKind>,
    pub source_label: Option<String>,
    pub status: Option<StatusLine>,
    /// Query input and Analyze trigger are only reachable with loaded content.
    pub query_enabled: bool,
    pub query: String,
    pub warning: Option<String>,
    pub answer: Option<String>,
}
