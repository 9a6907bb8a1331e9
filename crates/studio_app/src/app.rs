use std::process::ExitCode;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use studio_core::{update, AppState, JobPhase, Msg};
use studio_engine::{StreamSettings, SystemClipboard};
use studio_logging::studio_info;

use crate::cli::Cli;
use crate::effects::{msg_for_event, EffectRunner};
use crate::render::Renderer;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub fn run(cli: Cli) -> ExitCode {
    let kind = cli.tool.kind();
    let mut state = AppState::new(kind, cli.tool.options());
    let mut renderer = Renderer::new();

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(
        StreamSettings {
            base_url: cli.base_url.clone(),
            ..StreamSettings::default()
        },
        Box::new(SystemClipboard),
        cli.output_dir.clone(),
        msg_tx,
    );

    studio_info!("starting {} job", kind.label());
    state = dispatch(state, &runner, Msg::InputChanged(cli.tool.prompt().to_string()));
    state = dispatch(state, &runner, Msg::Submitted);

    // Completion actions fire once, when the stream reports done.
    let mut finalized = false;

    loop {
        while let Some(event) = runner.poll_event() {
            state = dispatch(state, &runner, msg_for_event(kind, event));
        }
        while let Ok(msg) = msg_rx.try_recv() {
            state = dispatch(state, &runner, msg);
        }
        state = dispatch(state, &runner, Msg::Tick);

        if state.phase() == JobPhase::Completed && !finalized {
            finalized = true;
            if let Some(copy) = cli.copy {
                state = dispatch(state, &runner, Msg::CopyRequested(copy.target()));
            }
            if cli.export {
                state = dispatch(state, &runner, Msg::ExportRequested);
            }
        }

        if state.consume_dirty() {
            renderer.render(&state.view());
        }

        match state.phase() {
            JobPhase::Idle => {
                // Rejected start, error frame or dropped connection.
                runner.shutdown();
                return ExitCode::FAILURE;
            }
            JobPhase::Completed => {
                let view = state.view();
                // Leave once the display delay ran out and notices cleared.
                if finalized && view.progress.percent == 0.0 && view.notice.is_none() {
                    return ExitCode::SUCCESS;
                }
            }
            JobPhase::Requesting | JobPhase::Streaming => {}
        }

        thread::sleep(TICK_INTERVAL);
    }
}

fn dispatch(state: AppState, runner: &EffectRunner, msg: Msg) -> AppState {
    let (state, effects) = update(state, msg);
    runner.run(effects);
    state
}
