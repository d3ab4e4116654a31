//! Analyzer core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, ContentState, SourceKind, Stage};
pub use update::{update, EMPTY_CONTENT_MESSAGE, EMPTY_QUERY_WARNING};
pub use view_model::{AppViewModel, StatusLine};
