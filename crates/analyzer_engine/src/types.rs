use std::fmt;

/// The four upload formats accepted by the file picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    PlainText,
    Csv,
    Excel,
}

impl MediaType {
    pub const PDF_MIME: &'static str = "application/pdf";
    pub const TEXT_MIME: &'static str = "text/plain";
    pub const CSV_MIME: &'static str = "text/csv";
    pub const XLS_MIME: &'static str = "application/vnd.ms-excel";
    pub const XLSX_MIME: &'static str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

    /// Extensions offered by the file picker.
    pub const ACCEPTED_EXTENSIONS: [&'static str; 4] = ["pdf", "txt", "csv", "xlsx"];

    /// Maps a declared MIME type (parameters ignored) to a media type.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or(mime).trim();
        [
            (Self::PDF_MIME, Self::Pdf),
            (Self::TEXT_MIME, Self::PlainText),
            (Self::CSV_MIME, Self::Csv),
            (Self::XLS_MIME, Self::Excel),
            (Self::XLSX_MIME, Self::Excel),
        ]
        .into_iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(essence))
        .map(|(_, media_type)| media_type)
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" => Some(Self::PlainText),
            "csv" => Some(Self::Csv),
            "xlsx" => Some(Self::Excel),
            _ => None,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Pdf => Self::PDF_MIME,
            Self::PlainText => Self::TEXT_MIME,
            Self::Csv => Self::CSV_MIME,
            Self::Excel => Self::XLSX_MIME,
        }
    }

    /// Name used in user-facing error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::PlainText => "text file",
            Self::Csv => "CSV file",
            Self::Excel => "Excel file",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    WebUrl(String),
    Upload {
        file_name: String,
        media_type: MediaType,
        bytes: Vec<u8>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("Error fetching content: {0}")]
    Fetch(#[from] FetchError),
    #[error("Error fetching content: {0}")]
    Decode(#[from] crate::DecodeError),
    #[error("Error processing {}: {message}", .media_type.label())]
    Format {
        media_type: MediaType,
        message: String,
    },
}

impl ExtractError {
    pub(crate) fn format(media_type: MediaType, message: impl Into<String>) -> Self {
        Self::Format {
            media_type,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub original_url: String,
    pub final_url: String,
    pub redirect_count: usize,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} ({message})")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
