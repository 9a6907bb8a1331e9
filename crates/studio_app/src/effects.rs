use std::path::PathBuf;
use std::sync::mpsc;

use chrono::Utc;

use studio_core::{decode_frame, CloseNote, Effect, Msg, ToolKind};
use studio_engine::{
    write_artifacts, Artifact, ClientEvent, ClientHandle, Clipboard, CloseReason, StartRequest,
    StreamSettings,
};
use studio_logging::{studio_error, studio_info, studio_warn};

/// Executes core effects against the engine, clipboard and filesystem, and
/// feeds completion messages back into the update loop.
pub struct EffectRunner {
    engine: ClientHandle,
    clipboard: Box<dyn Clipboard>,
    output_dir: PathBuf,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(
        settings: StreamSettings,
        clipboard: Box<dyn Clipboard>,
        output_dir: PathBuf,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Self {
        Self {
            engine: ClientHandle::new(settings),
            clipboard,
            output_dir,
            msg_tx,
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartJob { params } => {
                    let job_id = format!("stream-{}", Utc::now().timestamp_millis());
                    studio_info!(
                        "StartJob tool={} stream_id={}",
                        params.kind().label(),
                        job_id
                    );
                    let start = StartRequest {
                        path: params.kind().start_path().to_string(),
                        body: params.start_body(&job_id),
                    };
                    self.engine.start_job(job_id, start);
                }
                Effect::CopyText { text } => {
                    let ok = match self.clipboard.copy(&text) {
                        Ok(()) => true,
                        Err(err) => {
                            studio_warn!("clipboard copy failed: {err}");
                            false
                        }
                    };
                    let _ = self.msg_tx.send(Msg::CopyFinished { ok });
                }
                Effect::WriteArtifacts { artifacts } => {
                    let artifacts: Vec<Artifact> = artifacts
                        .into_iter()
                        .map(|plan| Artifact {
                            filename: plan.filename,
                            mime: plan.mime,
                            content: plan.content,
                        })
                        .collect();
                    let stamp = Utc::now().to_rfc3339();
                    let msg = match write_artifacts(&self.output_dir, &artifacts, &stamp) {
                        Ok(summary) => {
                            studio_info!(
                                "exported {} file(s) to {:?}",
                                summary.written.len(),
                                self.output_dir
                            );
                            Msg::ExportFinished {
                                written: summary.written.len(),
                                error: None,
                            }
                        }
                        Err(err) => {
                            studio_error!("export failed: {err}");
                            Msg::ExportFinished {
                                written: 0,
                                error: Some(err.to_string()),
                            }
                        }
                    };
                    let _ = self.msg_tx.send(msg);
                }
            }
        }
    }

    pub fn poll_event(&self) -> Option<ClientEvent> {
        self.engine.try_recv()
    }

    pub fn shutdown(&self) {
        self.engine.shutdown();
    }
}

/// Map an engine event into a core message, normalizing frames for the tool.
pub fn msg_for_event(kind: ToolKind, event: ClientEvent) -> Msg {
    match event {
        ClientEvent::JobAccepted { job_id } => Msg::JobAccepted { job_id },
        ClientEvent::JobRejected { job_id, error } => Msg::JobRejected {
            job_id,
            error: error.to_string(),
        },
        ClientEvent::Frame { job_id, frame } => Msg::FrameReceived {
            job_id,
            event: decode_frame(
                kind,
                &frame.frame_type,
                frame.agent.as_deref(),
                frame.text.as_deref(),
                frame.progress,
                frame.data.as_ref(),
            ),
        },
        ClientEvent::Closed { job_id, reason } => Msg::StreamClosed {
            job_id,
            reason: close_note(reason),
        },
    }
}

fn close_note(reason: CloseReason) -> CloseNote {
    match reason {
        CloseReason::Done => CloseNote::Done,
        CloseReason::ErrorFrame { text } => CloseNote::ErrorFrame(text),
        CloseReason::Transport { message } => CloseNote::Transport(message),
        CloseReason::Cancelled => CloseNote::Cancelled,
    }
}
