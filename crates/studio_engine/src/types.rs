use std::fmt;

use crate::RawFrame;

/// Caller-generated stream id identifying one job.
pub type JobId = String;

/// Events emitted to the platform while a job runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// The backend accepted the start request; the stream is being opened.
    JobAccepted { job_id: JobId },
    /// The start request failed; no stream was opened.
    JobRejected { job_id: JobId, error: StartError },
    /// One frame received on the job's stream.
    Frame { job_id: JobId, frame: RawFrame },
    /// The stream closed. Emitted exactly once per accepted job.
    Closed { job_id: JobId, reason: CloseReason },
}

/// Why an accepted job's stream closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseReason {
    /// Terminal `done` frame.
    Done,
    /// Terminal `error` frame reported by the backend.
    ErrorFrame { text: String },
    /// Connection drop, read failure or EOF before a terminal frame.
    Transport { message: String },
    /// The consumer cancelled the subscription.
    Cancelled,
}

/// Failure before any stream was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartError {
    pub kind: StartFailure,
    pub message: String,
}

impl StartError {
    pub(crate) fn new(kind: StartFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for StartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartFailure {
    HttpStatus(u16),
    /// The backend answered `success: false`.
    NotAccepted,
    Timeout,
    Network,
    InvalidResponse,
}

impl fmt::Display for StartFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartFailure::HttpStatus(code) => write!(f, "http status {code}"),
            StartFailure::NotAccepted => write!(f, "request not accepted"),
            StartFailure::Timeout => write!(f, "timeout"),
            StartFailure::Network => write!(f, "network error"),
            StartFailure::InvalidResponse => write!(f, "invalid response"),
        }
    }
}
