pub const APP_TITLE: &str = "Enterprise Content Analyzer";
pub const APP_VERSION: &str = "1.0.0";
pub const PROMPT: &str = "> ";
pub const RESULTS_HEADING: &str = "### Analysis Results";

pub const ABOUT: &str = "\
Extract insights from multiple data sources using AI-powered analysis.

Supported formats:
  - Website URLs
  - PDF Documents (.pdf)
  - Text Files (.txt)
  - CSV Files (.csv)
  - Excel Spreadsheets (.xlsx)";

pub const HELP: &str = "\
Commands:
  source url | source file   choose the input source
  url <URL>                  fetch a web page
  file <PATH>                upload a document
  query <TEXT>               set the question
  analyze                    ask the agent about the loaded content
  ask <TEXT>                 set the question and analyze
  help                       show this text
  quit                       leave";
