/// Side effects requested by [`crate::update`]; executed by the platform layer,
/// which reports back through [`crate::Msg::ExtractionFinished`] or
/// [`crate::Msg::AnalysisFinished`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchUrl {
        url: String,
    },
    ExtractUpload {
        file_name: String,
        media_type: String,
        bytes: Vec<u8>,
    },
    Analyze {
        query: String,
        content: String,
    },
}
