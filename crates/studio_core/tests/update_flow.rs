use std::sync::Once;

use serde_json::json;

use studio_core::{
    decode_frame, update, AppState, Category, CloseNote, Effect, FrameEvent, JobParams, JobPhase,
    Msg, RegionBlock, ToolKind, ToolOptions, DONE_RESET_TICKS,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(studio_logging::initialize_for_tests);
}

fn submit(state: AppState, prompt: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(prompt.to_string()));
    update(state, Msg::Submitted)
}

fn streaming_state(kind: ToolKind, prompt: &str) -> AppState {
    let state = AppState::new(kind, ToolOptions::default());
    let (state, _) = submit(state, prompt);
    let (state, _) = update(
        state,
        Msg::JobAccepted {
            job_id: "stream-1".to_string(),
        },
    );
    state
}

fn frame(state: AppState, event: FrameEvent) -> AppState {
    let (state, _) = update(
        state,
        Msg::FrameReceived {
            job_id: "stream-1".to_string(),
            event,
        },
    );
    state
}

fn close(state: AppState, reason: CloseNote) -> AppState {
    let (state, _) = update(
        state,
        Msg::StreamClosed {
            job_id: "stream-1".to_string(),
            reason,
        },
    );
    state
}

#[test]
fn submit_requests_a_job_and_disables_submit() {
    init_logging();
    let state = AppState::new(ToolKind::VibeCoding, ToolOptions::default());
    let (mut state, effects) = submit(state, "Todo app");

    assert_eq!(state.phase(), JobPhase::Requesting);
    assert_eq!(
        effects,
        vec![Effect::StartJob {
            params: JobParams::Vibe {
                idea: "Todo app".to_string(),
            },
        }]
    );
    assert!(!state.view().submit_enabled);
    assert!(state.consume_dirty());
}

#[test]
fn empty_input_is_ignored() {
    init_logging();
    let state = AppState::new(ToolKind::VibeCoding, ToolOptions::default());
    let (state, effects) = submit(state, "   ");

    assert_eq!(state.phase(), JobPhase::Idle);
    assert!(effects.is_empty());
}

#[test]
fn submission_blocked_while_job_active() {
    init_logging();
    let state = streaming_state(ToolKind::BusinessAnalyzer, "food delivery");

    let (state, effects) = submit(state, "another idea");
    assert_eq!(state.phase(), JobPhase::Streaming);
    assert!(effects.is_empty());

    // Blocked in the requesting window too.
    let fresh = AppState::new(ToolKind::BusinessAnalyzer, ToolOptions::default());
    let (fresh, _) = submit(fresh, "first");
    let (fresh, effects) = update(fresh, Msg::Submitted);
    assert_eq!(fresh.phase(), JobPhase::Requesting);
    assert!(effects.is_empty());
}

#[test]
fn rejected_start_returns_to_idle_with_inline_error() {
    init_logging();
    let state = AppState::new(ToolKind::VibeCoding, ToolOptions::default());
    let (state, _) = submit(state, "Todo app");
    let (state, _) = update(
        state,
        Msg::JobRejected {
            job_id: "stream-1".to_string(),
            error: "request not accepted".to_string(),
        },
    );

    let view = state.view();
    assert_eq!(state.phase(), JobPhase::Idle);
    assert!(view.submit_enabled);
    assert_eq!(view.error.as_deref(), Some("request not accepted"));
}

#[test]
fn error_frame_then_close_returns_to_idle() {
    init_logging();
    let state = streaming_state(ToolKind::BusinessAnalyzer, "food delivery");
    let state = frame(
        state,
        FrameEvent::Error {
            text: "model overloaded".to_string(),
        },
    );
    let state = close(state, CloseNote::ErrorFrame("model overloaded".to_string()));

    let view = state.view();
    assert_eq!(state.phase(), JobPhase::Idle);
    assert!(view.submit_enabled);
    assert_eq!(view.error.as_deref(), Some("model overloaded"));
    assert_eq!(view.progress.percent, 0.0);
}

#[test]
fn transport_drop_surfaces_connection_error() {
    init_logging();
    let state = streaming_state(ToolKind::YoutubeOptimizer, "rust tutorial");
    let state = close(
        state,
        CloseNote::Transport("connection reset".to_string()),
    );

    let view = state.view();
    assert_eq!(state.phase(), JobPhase::Idle);
    assert!(view.error.unwrap().contains("Connection error"));
    assert!(view.submit_enabled);
}

#[test]
fn frames_from_stale_jobs_are_ignored() {
    init_logging();
    let mut state = streaming_state(ToolKind::VibeCoding, "Todo app");
    state.consume_dirty();
    let before = state.view();

    let (mut state, _) = update(
        state,
        Msg::FrameReceived {
            job_id: "stream-0".to_string(),
            event: FrameEvent::Status {
                label: "stale".to_string(),
                progress: Some(90.0),
            },
        },
    );

    assert_eq!(state.view(), before);
    assert!(!state.consume_dirty());
}

#[test]
fn status_frames_move_the_bar_without_monotonicity() {
    init_logging();
    let state = streaming_state(ToolKind::BusinessAnalyzer, "food delivery");
    let state = frame(
        state,
        FrameEvent::Status {
            label: "Analyzing market...".to_string(),
            progress: Some(80.0),
        },
    );
    assert_eq!(state.view().progress.percent, 80.0);

    // A later, lower value visually regresses the bar.
    let state = frame(
        state,
        FrameEvent::Status {
            label: "Analyzing competitors...".to_string(),
            progress: Some(30.0),
        },
    );
    let view = state.view();
    assert_eq!(view.progress.percent, 30.0);
    assert_eq!(view.progress.label, "Analyzing competitors...");
}

#[test]
fn vibe_job_end_to_end() {
    init_logging();
    let state = streaming_state(ToolKind::VibeCoding, "Todo app");

    let state = frame(
        state,
        decode_frame(
            ToolKind::VibeCoding,
            "status",
            None,
            Some("Designing UI..."),
            Some(50.0),
            None,
        ),
    );
    assert_eq!(state.view().progress.percent, 50.0);

    let html = "<html><body>todo</body></html>";
    let state = frame(
        state,
        decode_frame(
            ToolKind::VibeCoding,
            "frontend_code",
            Some("Frontend"),
            Some(html),
            None,
            None,
        ),
    );
    let view = state.view();
    let region = view
        .regions
        .iter()
        .find(|r| r.category == Category::FrontendCode)
        .expect("frontend region");
    assert_eq!(region.blocks, vec![RegionBlock::Text(html.to_string())]);

    let mut state = close(state, CloseNote::Done);
    let view = state.view();
    assert_eq!(state.phase(), JobPhase::Completed);
    assert_eq!(view.progress.percent, 100.0);
    assert!(view.submit_enabled);
    assert!(view.input.is_empty());

    // Progress resets to zero once the display delay has elapsed.
    for _ in 0..DONE_RESET_TICKS {
        let (next, _) = update(state, Msg::Tick);
        state = next;
    }
    assert_eq!(state.view().progress.percent, 0.0);
    // The recorded result survives the reset.
    assert_eq!(state.view().regions.len(), 1);
}

#[test]
fn done_computes_scores_for_the_analyzer() {
    init_logging();
    let state = streaming_state(ToolKind::BusinessAnalyzer, "food delivery");
    let state = frame(
        state,
        decode_frame(
            ToolKind::BusinessAnalyzer,
            "idea_analysis",
            None,
            None,
            None,
            Some(&json!({ "overall_rating": 8, "value_proposition": "fast" })),
        ),
    );
    let state = frame(
        state,
        decode_frame(
            ToolKind::BusinessAnalyzer,
            "market_analysis",
            None,
            None,
            None,
            Some(&json!({ "market_score": 6, "tam": "$12B" })),
        ),
    );
    let state = close(state, CloseNote::Done);

    let scores = state.view().scores.expect("score board");
    let idea = scores.gauges.iter().find(|g| g.label == "Idea").unwrap();
    assert_eq!(idea.value, 8.0);
    assert_eq!(idea.degrees(), 288.0);
    // Absent categories gauge at zero instead of failing.
    let financial = scores
        .gauges
        .iter()
        .find(|g| g.label == "Financial")
        .unwrap();
    assert_eq!(financial.value, 0.0);
    assert!(scores
        .metrics
        .contains(&("TAM".to_string(), "$12B".to_string())));
    assert!(scores
        .metrics
        .contains(&("Market Cap Potential".to_string(), "-".to_string())));
}
