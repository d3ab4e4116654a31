use std::path::PathBuf;

use analyzer_core::SourceKind;

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Source(SourceKind),
    Url(String),
    File(PathBuf),
    Query(String),
    Analyze,
    Ask(String),
    Help,
    Quit,
    Blank,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Blank);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "source" => match rest.to_ascii_lowercase().as_str() {
            "url" | "web" => Ok(Command::Source(SourceKind::WebUrl)),
            "file" | "upload" => Ok(Command::Source(SourceKind::UploadFile)),
            _ => Err("usage: source url | source file".to_string()),
        },
        "url" => Ok(Command::Url(rest.to_string())),
        "file" if rest.is_empty() => Err("usage: file <PATH>".to_string()),
        "file" => Ok(Command::File(PathBuf::from(rest))),
        "query" => Ok(Command::Query(rest.to_string())),
        "analyze" | "analyse" => Ok(Command::Analyze),
        "ask" => Ok(Command::Ask(rest.to_string())),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command '{other}'; type 'help'")),
    }
}
