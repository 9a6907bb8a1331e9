use crate::{
    artifact_plans, copy_text_for, AppState, Category, ChatLine, CloseNote, Effect, FrameEvent,
    JobParams, JobPhase, Msg, Notice, OverallScores, SessionResults, ToolKind, ToolOptions,
};

/// Ticks a copy/export notice stays visible (~2 s at the app cadence).
pub const NOTICE_TICKS: u64 = 20;
/// Ticks the progress bar holds 100% after `done` before resetting.
pub const DONE_RESET_TICKS: u64 = 20;

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.input = text;
            state.mark_dirty();
            Vec::new()
        }
        Msg::Submitted => {
            // A prior job still requesting or streaming blocks new intake.
            if !matches!(state.phase, JobPhase::Idle | JobPhase::Completed) {
                return (state, Vec::new());
            }
            let prompt = state.input.trim().to_string();
            if prompt.is_empty() {
                return (state, Vec::new());
            }

            let params = build_params(state.kind, &state.options, prompt.clone());
            state.phase = JobPhase::Requesting;
            state.job_id = None;
            state.results = SessionResults::new();
            state.scores = None;
            state.error = None;
            state.progress.percent = 0.0;
            state.progress.label = "Starting...".to_string();
            state.done_reset_at = None;
            if state.kind == ToolKind::VibeCoding {
                state.transcript.push(ChatLine {
                    agent: "You".to_string(),
                    text: prompt,
                });
            }
            state.mark_dirty();
            vec![Effect::StartJob { params }]
        }
        Msg::JobAccepted { job_id } => {
            if state.phase == JobPhase::Requesting {
                state.job_id = Some(job_id);
                state.phase = JobPhase::Streaming;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::JobRejected { job_id: _, error } => {
            if state.phase == JobPhase::Requesting {
                state.phase = JobPhase::Idle;
                state.job_id = None;
                state.transcript.push(system_line(format!("Error: {error}")));
                state.error = Some(error);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FrameReceived { job_id, event } => {
            if state.phase == JobPhase::Streaming && state.is_active_job(&job_id) {
                apply_frame(&mut state, event);
            }
            Vec::new()
        }
        Msg::StreamClosed { job_id, reason } => {
            if state.phase == JobPhase::Streaming && state.is_active_job(&job_id) {
                apply_close(&mut state, reason);
            }
            Vec::new()
        }
        Msg::CopyRequested(target) => match copy_text_for(target, &state.results) {
            Some(text) => vec![Effect::CopyText { text }],
            None => Vec::new(),
        },
        Msg::CopyFinished { ok } => {
            if ok {
                state.notice = Some(Notice {
                    text: "Copied to clipboard".to_string(),
                    expires_at: state.tick + NOTICE_TICKS,
                });
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ExportRequested => {
            let artifacts = artifact_plans(&state.results);
            if artifacts.is_empty() {
                Vec::new()
            } else {
                vec![Effect::WriteArtifacts { artifacts }]
            }
        }
        Msg::ExportFinished { written, error } => {
            match error {
                None => {
                    state.notice = Some(Notice {
                        text: format!("Saved {written} file(s)"),
                        expires_at: state.tick + NOTICE_TICKS,
                    });
                }
                Some(error) => {
                    state
                        .transcript
                        .push(system_line(format!("Export failed: {error}")));
                }
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::Tick => {
            state.tick += 1;
            if let Some(notice) = &state.notice {
                if state.tick >= notice.expires_at {
                    state.notice = None;
                    state.mark_dirty();
                }
            }
            if state.done_reset_at.is_some_and(|at| state.tick >= at) {
                state.done_reset_at = None;
                state.progress.percent = 0.0;
                state.progress.label.clear();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn apply_frame(state: &mut AppState, event: FrameEvent) {
    match event {
        FrameEvent::Status { label, progress } => {
            state.progress.label = label;
            if let Some(percent) = progress {
                // No smoothing or monotonicity: a lower value regresses the bar.
                state.progress.percent = percent;
            }
            state.mark_dirty();
        }
        FrameEvent::Chat { agent, text } => {
            state.transcript.push(ChatLine { agent, text });
            state.mark_dirty();
        }
        FrameEvent::Result { category, payload } => {
            match category {
                Category::FrontendCode => {
                    state
                        .transcript
                        .push(system_line("Frontend code generated.".to_string()));
                }
                Category::BackendCode => {
                    state
                        .transcript
                        .push(system_line("Backend code generated.".to_string()));
                }
                _ => {}
            }
            state.results.record(category, *payload);
            state.mark_dirty();
        }
        FrameEvent::Error { text } => {
            state.transcript.push(system_line(format!("Error: {text}")));
            state.error = Some(text);
            state.mark_dirty();
        }
        // The phase transition happens on the StreamClosed that follows.
        FrameEvent::Done => {}
        FrameEvent::Unknown => {}
    }
}

fn apply_close(state: &mut AppState, reason: CloseNote) {
    match reason {
        CloseNote::Done => {
            state.phase = JobPhase::Completed;
            state.progress.percent = 100.0;
            state.progress.label = "Complete".to_string();
            state.done_reset_at = Some(state.tick + DONE_RESET_TICKS);
            if state.kind == ToolKind::BusinessAnalyzer {
                state.scores = Some(OverallScores::from_results(&state.results));
            }
            state
                .transcript
                .push(system_line("Generation complete.".to_string()));
            state.input.clear();
        }
        CloseNote::ErrorFrame(text) => {
            state.phase = JobPhase::Idle;
            state.progress = Default::default();
            // The error frame itself usually arrived first; keep its message.
            if state.error.is_none() {
                state.error = Some(text);
            }
        }
        CloseNote::Transport(message) => {
            state.phase = JobPhase::Idle;
            state.progress = Default::default();
            state
                .transcript
                .push(system_line("Connection error".to_string()));
            state.error = Some(format!("Connection error: {message}"));
        }
        CloseNote::Cancelled => {
            state.phase = JobPhase::Idle;
            state.progress = Default::default();
        }
    }
    state.mark_dirty();
}

fn system_line(text: String) -> ChatLine {
    ChatLine {
        agent: "System".to_string(),
        text,
    }
}

fn build_params(kind: ToolKind, options: &ToolOptions, prompt: String) -> JobParams {
    let pick = |value: &Option<String>| value.clone().unwrap_or_default();
    match kind {
        ToolKind::VibeCoding => JobParams::Vibe { idea: prompt },
        ToolKind::BusinessAnalyzer => JobParams::Analyze { idea: prompt },
        ToolKind::InstagramContent => JobParams::Instagram {
            topic: prompt,
            niche: pick(&options.niche),
            post_type: pick(&options.post_type),
            tone: pick(&options.tone),
        },
        ToolKind::YoutubeOptimizer => JobParams::Youtube {
            concept: prompt,
            niche: pick(&options.niche),
            audience: pick(&options.audience),
            video_type: pick(&options.video_type),
        },
    }
}
