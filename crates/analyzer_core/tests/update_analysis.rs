use analyzer_core::{update, AppState, Effect, Msg, SourceKind, Stage, StatusLine, EMPTY_QUERY_WARNING};

fn loaded(content: &str) -> AppState {
    let (state, _) = update(AppState::new(), Msg::SourceKindSelected(SourceKind::WebUrl));
    let (state, _) = update(state, Msg::UrlEntered("https://example.com".to_string()));
    let (mut state, _) = update(state, Msg::ExtractionFinished(Ok(content.to_string())));
    state.consume_dirty();
    state
}

fn failed() -> AppState {
    let (state, _) = update(AppState::new(), Msg::SourceKindSelected(SourceKind::UploadFile));
    let (state, _) = update(
        state,
        Msg::FileUploaded {
            file_name: "broken.pdf".to_string(),
            media_type: "application/pdf".to_string(),
            bytes: b"not a pdf".to_vec(),
        },
    );
    let (state, _) = update(
        state,
        Msg::ExtractionFinished(Err("Error processing PDF: invalid file header".to_string())),
    );
    state
}

#[test]
fn empty_query_warns_without_analyze_effect() {
    let state = loaded("hello");
    let (mut state, effects) = update(state, Msg::AnalyzeClicked);

    assert!(effects.is_empty());
    assert_eq!(state.stage(), Stage::ContentLoaded);
    assert_eq!(state.view().warning.as_deref(), Some(EMPTY_QUERY_WARNING));
    assert!(state.consume_dirty());
}

#[test]
fn blank_query_is_treated_as_empty() {
    let state = loaded("hello");
    let (state, _) = update(state, Msg::QueryChanged("   \n".to_string()));
    let (state, effects) = update(state, Msg::AnalyzeClicked);

    assert!(effects.is_empty());
    assert_eq!(state.view().warning.as_deref(), Some(EMPTY_QUERY_WARNING));
}

#[test]
fn query_then_analyze_emits_effect_with_literal_query_and_content() {
    let state = loaded("hello world");
    let (state, _) = update(state, Msg::QueryChanged("What is this?".to_string()));
    assert_eq!(state.stage(), Stage::QueryEntered);

    let (state, effects) = update(state, Msg::AnalyzeClicked);

    assert_eq!(state.stage(), Stage::Analyzing);
    assert_eq!(
        effects,
        vec![Effect::Analyze {
            query: "What is this?".to_string(),
            content: "hello world".to_string(),
        }]
    );
    assert_eq!(
        state.view().status,
        Some(StatusLine::Loading("AI is analyzing your content...".to_string()))
    );
}

#[test]
fn analysis_result_is_shown() {
    let state = loaded("hello");
    let (state, _) = update(state, Msg::QueryChanged("Summarize".to_string()));
    let (state, _) = update(state, Msg::AnalyzeClicked);
    let (state, effects) = update(state, Msg::AnalysisFinished(Ok("## Summary".to_string())));

    assert!(effects.is_empty());
    assert_eq!(state.stage(), Stage::ResultShown);
    let view = state.view();
    assert_eq!(view.answer.as_deref(), Some("## Summary"));
    assert_eq!(
        view.status,
        Some(StatusLine::Success("Content loaded successfully!".to_string()))
    );
}

#[test]
fn analysis_failure_replaces_success_banner() {
    let state = loaded("hello");
    let (state, _) = update(state, Msg::QueryChanged("Summarize".to_string()));
    let (state, _) = update(state, Msg::AnalyzeClicked);
    let (state, _) = update(
        state,
        Msg::AnalysisFinished(Err("agent returned http status 429".to_string())),
    );

    assert_eq!(state.stage(), Stage::AnalysisFailed);
    let view = state.view();
    assert_eq!(view.answer, None);
    assert_eq!(
        view.status,
        Some(StatusLine::Error("agent returned http status 429".to_string()))
    );
}

#[test]
fn editing_query_hides_previous_answer() {
    let state = loaded("hello");
    let (state, _) = update(state, Msg::QueryChanged("first".to_string()));
    let (state, _) = update(state, Msg::AnalyzeClicked);
    let (state, _) = update(state, Msg::AnalysisFinished(Ok("answer".to_string())));

    let (state, _) = update(state, Msg::QueryChanged("second".to_string()));

    assert_eq!(state.stage(), Stage::QueryEntered);
    assert_eq!(state.view().answer, None);
}

#[test]
fn failed_extraction_blocks_query_and_analyze() {
    let state = failed();
    assert_eq!(state.stage(), Stage::ContentFailed);

    let (state, effects) = update(state, Msg::QueryChanged("anything".to_string()));
    assert!(effects.is_empty());
    assert!(state.query().is_empty());

    let (state, effects) = update(state, Msg::AnalyzeClicked);
    assert!(effects.is_empty());
    assert_eq!(state.stage(), Stage::ContentFailed);
    assert_eq!(state.view().warning, None);
}

#[test]
fn analyze_before_any_content_is_ignored() {
    let (state, effects) = update(AppState::new(), Msg::AnalyzeClicked);
    assert!(effects.is_empty());
    assert_eq!(state.stage(), Stage::Idle);
}

#[test]
fn late_analysis_result_is_dropped() {
    let state = loaded("hello");
    let (state, effects) = update(state, Msg::AnalysisFinished(Ok("unexpected".to_string())));

    assert!(effects.is_empty());
    assert_eq!(state.stage(), Stage::ContentLoaded);
    assert_eq!(state.view().answer, None);
}
