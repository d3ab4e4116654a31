use analyzer_core::{AppViewModel, SourceKind, Stage, StatusLine};

use super::constants::RESULTS_HEADING;

pub fn render(view: &AppViewModel) -> String {
    let mut lines = Vec::new();

    if let Some(kind) = view.source_kind {
        let kind_label = match kind {
            SourceKind::WebUrl => "Website URL",
            SourceKind::UploadFile => "Upload File",
        };
        match &view.source_label {
            Some(label) => lines.push(format!("[{kind_label}] {label}")),
            None => lines.push(format!("[{kind_label}] {}", source_hint(kind))),
        }
    }

    match &view.status {
        Some(StatusLine::Loading(text)) => lines.push(format!("... {text}")),
        Some(StatusLine::Success(text)) => lines.push(format!("[ok] {text}")),
        Some(StatusLine::Error(text)) => lines.push(format!("[error] {text}")),
        None => {}
    }

    if let Some(warning) = &view.warning {
        lines.push(format!("[warning] {warning}"));
    }

    if view.stage == Stage::ContentLoaded {
        lines.push("What would you like to know about the content? (ask <question>)".to_string());
    }

    if let Some(answer) = &view.answer {
        lines.push(String::new());
        lines.push(RESULTS_HEADING.to_string());
        lines.push("---".to_string());
        lines.push(answer.trim_end().to_string());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn source_hint(kind: SourceKind) -> &'static str {
    match kind {
        SourceKind::WebUrl => "enter a website URL (url https://example.com)",
        SourceKind::UploadFile => "choose a PDF, TXT, CSV or XLSX file (file <PATH>)",
    }
}
