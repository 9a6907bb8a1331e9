use crate::{CopyTarget, FrameEvent, JobId};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the prompt input.
    InputChanged(String),
    /// User submitted the form.
    Submitted,
    /// Backend accepted the start request; the stream is open.
    JobAccepted { job_id: JobId },
    /// Start request failed before any stream was opened.
    JobRejected { job_id: JobId, error: String },
    /// One normalized frame from the active job's stream.
    FrameReceived { job_id: JobId, event: FrameEvent },
    /// The stream closed; carries the terminal reason.
    StreamClosed { job_id: JobId, reason: CloseNote },
    /// User asked to copy a derived text to the clipboard.
    CopyRequested(CopyTarget),
    /// Clipboard write finished.
    CopyFinished { ok: bool },
    /// User asked to export result artifacts.
    ExportRequested,
    /// Artifact export finished.
    ExportFinished {
        written: usize,
        error: Option<String>,
    },
    /// UI tick to expire notices and coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// Why a stream closed. `Done` and `ErrorFrame` come from terminal frames;
/// `Transport` covers connection drops and premature EOF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseNote {
    Done,
    ErrorFrame(String),
    Transport(String),
    Cancelled,
}
