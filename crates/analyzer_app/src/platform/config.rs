//! Runtime configuration, read once at startup from the environment
//! (after loading `.env` if present).

use std::path::PathBuf;

use analyzer_engine::{AgentSettings, FetchSettings, DEFAULT_API_BASE, DEFAULT_MODEL};
use analyzer_logging::{LogDestination, DEFAULT_LOG_FILE};
use log::LevelFilter;

pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
pub const MODEL_VAR: &str = "ANALYZER_MODEL";
pub const API_BASE_VAR: &str = "ANALYZER_API_BASE";
pub const WEB_SEARCH_VAR: &str = "ANALYZER_WEB_SEARCH";
pub const LOG_VAR: &str = "ANALYZER_LOG";
pub const LOG_LEVEL_VAR: &str = "ANALYZER_LOG_LEVEL";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub agent: AgentSettings,
    pub fetch: FetchSettings,
    pub log_destination: LogDestination,
    pub log_level: LevelFilter,
    pub log_path: PathBuf,
    /// Problems found while reading the environment; logged once the logger is up.
    pub warnings: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut warnings = Vec::new();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let web_search = match non_empty(WEB_SEARCH_VAR) {
            None => true,
            Some(raw) => parse_bool(&raw).unwrap_or_else(|| {
                warnings.push(format!("{WEB_SEARCH_VAR}={raw} is not a boolean; using true"));
                true
            }),
        };

        let log_destination = match non_empty(LOG_VAR) {
            None => LogDestination::default(),
            Some(raw) => LogDestination::parse(&raw).unwrap_or_else(|| {
                warnings.push(format!("{LOG_VAR}={raw} is not file|terminal|both; using terminal"));
                LogDestination::default()
            }),
        };

        let log_level = match non_empty(LOG_LEVEL_VAR) {
            None => LevelFilter::Info,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warnings.push(format!("{LOG_LEVEL_VAR}={raw} is not a log level; using info"));
                LevelFilter::Info
            }),
        };

        let agent = AgentSettings {
            api_key: non_empty(API_KEY_VAR),
            model: non_empty(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: non_empty(API_BASE_VAR).unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            web_search,
            ..AgentSettings::default()
        };

        Self {
            agent,
            fetch: FetchSettings::default(),
            log_destination,
            log_level,
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
            warnings,
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
