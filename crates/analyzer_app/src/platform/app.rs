use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use analyzer_core::{update, AppState, Msg, SourceKind};
use analyzer_engine::{EngineHandle, GeminiAgent, MediaType};
use analyzer_logging::{analyzer_info, analyzer_warn};
use anyhow::Context;

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::ui::constants::{ABOUT, APP_TITLE, APP_VERSION, HELP, PROMPT};
use super::ui::input::{parse_command, Command};
use super::ui::render::render;

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    analyzer_logging::initialize(config.log_destination, config.log_level, &config.log_path);
    for warning in &config.warnings {
        analyzer_warn!("{}", warning);
    }
    analyzer_info!(
        "starting {} {} with model {}",
        APP_TITLE,
        APP_VERSION,
        config.agent.model
    );

    // Created once; every analysis reuses it.
    let agent = Arc::new(GeminiAgent::new(config.agent.clone()).context("creating agent client")?);
    let engine = EngineHandle::new(config.fetch.clone(), agent).context("starting engine runtime")?;
    let mut app = App::new(EffectRunner::new(engine));

    let stdin = io::stdin();
    let stdout = io::stdout();
    app.run(stdin.lock(), stdout.lock())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub(crate) struct App {
    state: AppState,
    runner: EffectRunner,
}

impl App {
    pub(crate) fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
        }
    }

    pub(crate) fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> anyhow::Result<()> {
        writeln!(out, "{APP_TITLE} v{APP_VERSION}\n\n{ABOUT}\n\nType 'help' for commands.")?;
        write!(out, "{PROMPT}")?;
        out.flush()?;

        for line in input.lines() {
            let line = line.context("reading input")?;
            if self.handle_line(&line, &mut out)? == Flow::Quit {
                return Ok(());
            }
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(usage) => {
                writeln!(out, "{usage}")?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Blank => {}
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => writeln!(out, "{ABOUT}\n\n{HELP}")?,
            Command::Source(kind) => self.dispatch(Msg::SourceKindSelected(kind), out)?,
            Command::Url(url) => {
                self.ensure_source_kind(SourceKind::WebUrl, out)?;
                self.dispatch(Msg::UrlEntered(url), out)?;
            }
            Command::File(path) => self.upload(&path, out)?,
            Command::Query(query) => self.submit_query(query, out)?,
            Command::Analyze => self.dispatch(Msg::AnalyzeClicked, out)?,
            Command::Ask(query) => {
                self.submit_query(query, out)?;
                self.dispatch(Msg::AnalyzeClicked, out)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn submit_query<W: Write>(&mut self, query: String, out: &mut W) -> io::Result<()> {
        if self.state.loaded_content().is_none() {
            writeln!(out, "Load a website or a file before asking a question.")?;
            return Ok(());
        }
        self.dispatch(Msg::QueryChanged(query), out)
    }

    fn ensure_source_kind<W: Write>(&mut self, kind: SourceKind, out: &mut W) -> io::Result<()> {
        if self.state.source_kind() != Some(kind) {
            self.dispatch(Msg::SourceKindSelected(kind), out)?;
        }
        Ok(())
    }

    /// Stand-in for the file picker: only the four accepted extensions get through.
    fn upload<W: Write>(&mut self, path: &Path, out: &mut W) -> io::Result<()> {
        let media_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(MediaType::from_extension);
        let Some(media_type) = media_type else {
            writeln!(
                out,
                "[warning] Unsupported file type. Supported formats: {}",
                MediaType::ACCEPTED_EXTENSIONS.join(", ").to_uppercase()
            )?;
            return Ok(());
        };

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                analyzer_warn!("could not read {:?}: {}", path, err);
                writeln!(out, "[error] Could not read {}: {}", path.display(), err)?;
                return Ok(());
            }
        };
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        self.ensure_source_kind(SourceKind::UploadFile, out)?;
        self.dispatch(
            Msg::FileUploaded {
                file_name,
                media_type: media_type.mime().to_string(),
                bytes,
            },
            out,
        )
    }

    fn dispatch<W: Write>(&mut self, msg: Msg, out: &mut W) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;

        if was_dirty {
            write!(out, "{}", render(&view))?;
            out.flush()?;
        }

        for effect in effects {
            let reply = self.runner.run(effect);
            self.dispatch(reply, out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use analyzer_core::Stage;
    use analyzer_engine::{
        AgentError, AnalysisAgent, EngineHandle, FailureKind, FetchError, FetchMetadata,
        FetchOutput, Fetcher,
    };

    use super::{App, EffectRunner, Flow};

    struct PageFetcher;

    #[async_trait::async_trait]
    impl Fetcher for PageFetcher {
        async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError> {
            if url.ends_with("/missing") {
                return Err(FetchError {
                    kind: FailureKind::HttpStatus(404),
                    message: "404 Not Found".to_string(),
                });
            }
            let body = b"<html><body><p>hello</p></body></html>".to_vec();
            Ok(FetchOutput {
                metadata: FetchMetadata {
                    original_url: url.to_string(),
                    final_url: url.to_string(),
                    redirect_count: 0,
                    content_type: Some("text/html".to_string()),
                    byte_len: body.len() as u64,
                },
                bytes: body,
            })
        }
    }

    #[derive(Default)]
    struct CountingAgent {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl AnalysisAgent for CountingAgent {
        async fn analyze(&self, _prompt: &str) -> Result<String, AgentError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("The page says hello.".to_string())
        }
    }

    fn app(agent: Arc<CountingAgent>) -> App {
        let engine = EngineHandle::with_fetcher(Arc::new(PageFetcher), agent).expect("engine");
        App::new(EffectRunner::new(engine))
    }

    fn send(app: &mut App, line: &str) -> String {
        let mut out = Vec::new();
        let flow = app.handle_line(line, &mut out).expect("write to buffer");
        assert_eq!(flow, Flow::Continue);
        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn empty_question_warns_without_calling_agent() {
        let agent = Arc::new(CountingAgent::default());
        let mut app = app(agent.clone());

        let out = send(&mut app, "url https://example.com");
        assert!(out.contains("[ok] Content loaded successfully!"));

        let out = send(&mut app, "analyze");
        assert!(out.contains("[warning] Please enter a question about the content."));
        assert_eq!(agent.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn question_is_answered_once() {
        let agent = Arc::new(CountingAgent::default());
        let mut app = app(agent.clone());

        send(&mut app, "url https://example.com");
        let out = send(&mut app, "ask What does it say?");

        assert!(out.contains("### Analysis Results"));
        assert!(out.contains("The page says hello."));
        assert_eq!(agent.calls.load(Ordering::SeqCst), 1);
        assert_eq!(app.state.stage(), Stage::ResultShown);
    }

    #[test]
    fn failed_fetch_blocks_analysis() {
        let agent = Arc::new(CountingAgent::default());
        let mut app = app(agent.clone());

        let out = send(&mut app, "url https://example.com/missing");
        assert!(out.contains("[error] Error fetching content: http status 404"));
        assert!(!out.contains("[ok]"));

        let out = send(&mut app, "ask anything?");
        assert!(out.contains("Load a website or a file"));
        send(&mut app, "analyze");
        assert_eq!(agent.calls.load(Ordering::SeqCst), 0);
        assert_eq!(app.state.stage(), Stage::ContentFailed);
    }

    #[test]
    fn uploaded_csv_is_loaded() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(b"a,b\n1,2\n").unwrap();
        let mut app = app(Arc::default());

        let out = send(&mut app, &format!("file {}", file.path().display()));

        assert!(out.contains("[Upload File]"));
        assert!(out.contains("[ok] Content loaded successfully!"));
        let content = app.state.loaded_content().expect("content");
        assert!(content.contains('a') && content.contains('2'));
    }

    #[test]
    fn unsupported_extension_is_refused() {
        let file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        let mut app = app(Arc::default());

        let out = send(&mut app, &format!("file {}", file.path().display()));

        assert!(out.contains("Unsupported file type"));
        assert_eq!(app.state.stage(), Stage::Idle);
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut app = app(Arc::default());
        let mut out = Vec::new();
        app.run("help\nquit\nurl https://example.com\n".as_bytes(), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Commands:"));
        assert!(!text.contains("[Website URL]"));
    }
}
