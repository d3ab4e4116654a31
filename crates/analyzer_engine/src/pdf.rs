//! PDF page-text extraction on top of `lopdf`.

use analyzer_logging::analyzer_debug;
use lopdf::Document;

/// Extracts the text of every page in page order, one newline after each page.
pub fn pdf_to_text(bytes: &[u8]) -> Result<String, lopdf::Error> {
    let document = Document::load_mem(bytes)?;
    let pages = document.get_pages();
    analyzer_debug!("pdf has {} pages", pages.len());

    let mut text = String::new();
    for page_number in pages.keys() {
        let page_text = document.extract_text(&[*page_number])?;
        text.push_str(page_text.trim_end_matches('\n'));
        text.push('\n');
    }
    Ok(text)
}
