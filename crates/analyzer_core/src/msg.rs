#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked "Website URL" or "Upload File".
    SourceKindSelected(crate::SourceKind),
    /// User entered a URL in the URL field.
    UrlEntered(String),
    /// User picked a file in the file picker.
    FileUploaded {
        file_name: String,
        media_type: String,
        bytes: Vec<u8>,
    },
    /// Extraction effect finished: text or a user-facing error message.
    ExtractionFinished(Result<String, String>),
    /// User edited the question field.
    QueryChanged(String),
    /// User clicked Analyze.
    AnalyzeClicked,
    /// Analysis effect finished: answer or a user-facing error message.
    AnalysisFinished(Result<String, String>),
}
