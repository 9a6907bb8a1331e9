//! Studio engine: job transport and effect execution.
mod client;
mod clipboard;
mod engine;
mod export;
mod frame;
mod sse;
mod types;

pub use client::{
    ChannelEventSink, EventSink, HttpJobStream, JobStream, StartRequest, StreamSettings,
};
pub use clipboard::{Clipboard, ClipboardError, NullClipboard, SystemClipboard};
pub use engine::ClientHandle;
pub use export::{
    ensure_output_dir, write_artifacts, Artifact, AtomicFileWriter, ExportError, ExportSummary,
};
pub use frame::RawFrame;
pub use sse::SseDecoder;
pub use types::{ClientEvent, CloseReason, JobId, StartError, StartFailure};
