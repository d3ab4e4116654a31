use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use analyzer_logging::{analyzer_info, analyzer_warn};

use crate::decode::{decode_html, decode_utf8_strict};
use crate::fetch::Fetcher;
use crate::html::html_to_text;
use crate::pdf::pdf_to_text;
use crate::tabular::{csv_to_text, workbook_to_text};
use crate::{ContentSource, ExtractError, MediaType};

/// Turns a [`ContentSource`] into plain text.
///
/// Web sources go through the injected [`Fetcher`]; uploads are pure
/// transforms over the provided bytes.
pub struct ContentExtractor {
    fetcher: Arc<dyn Fetcher>,
}

impl ContentExtractor {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    pub async fn extract(&self, source: &ContentSource) -> Result<String, ExtractError> {
        let result = match source {
            ContentSource::WebUrl(url) => self.extract_web(url).await,
            ContentSource::Upload {
                file_name,
                media_type,
                bytes,
            } => {
                analyzer_info!(
                    "extracting upload {} as {} ({} bytes)",
                    file_name,
                    media_type.mime(),
                    bytes.len()
                );
                extract_upload(*media_type, bytes)
            }
        };
        if let Err(err) = &result {
            analyzer_warn!("extraction failed: {}", err);
        }
        result
    }

    async fn extract_web(&self, url: &str) -> Result<String, ExtractError> {
        analyzer_info!("fetching {}", url);
        let output = self.fetcher.fetch(url).await?;
        let decoded = decode_html(&output.bytes, output.metadata.content_type.as_deref())?;
        Ok(html_to_text(&decoded.text))
    }
}

/// Dispatches uploaded bytes to the strategy for their media type.
///
/// Parser panics on hostile input are reported as format errors.
pub fn extract_upload(media_type: MediaType, bytes: &[u8]) -> Result<String, ExtractError> {
    panic::catch_unwind(AssertUnwindSafe(|| run_strategy(media_type, bytes))).unwrap_or_else(
        |_| {
            Err(ExtractError::format(
                media_type,
                "parser aborted on malformed input",
            ))
        },
    )
}

fn run_strategy(media_type: MediaType, bytes: &[u8]) -> Result<String, ExtractError> {
    let fail = |err: &dyn std::fmt::Display| ExtractError::format(media_type, err.to_string());
    match media_type {
        MediaType::Pdf => pdf_to_text(bytes).map_err(|err| fail(&err)),
        MediaType::PlainText => decode_utf8_strict(bytes).map_err(|err| fail(&err)),
        MediaType::Csv => csv_to_text(bytes).map_err(|err| fail(&err)),
        MediaType::Excel => workbook_to_text(bytes).map_err(|err| fail(&err)),
    }
}
