use std::io::Write;
use std::process::{Command, Stdio};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard tool available")]
    NoBackend,
    #[error("clipboard tool {tool} failed: {message}")]
    Tool { tool: String, message: String },
}

/// Writes text to the system clipboard.
pub trait Clipboard: Send + Sync {
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Platform clipboard tools, tried in order.
const CLIPBOARD_TOOLS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Pipes text through the first clipboard tool found on this machine.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        for (program, args) in CLIPBOARD_TOOLS {
            match pipe_through(program, args, text) {
                // Tool not installed; try the next candidate.
                None => continue,
                Some(result) => return result,
            }
        }
        Err(ClipboardError::NoBackend)
    }
}

fn pipe_through(program: &str, args: &[&str], text: &str) -> Option<Result<(), ClipboardError>> {
    let tool_error = |message: String| ClipboardError::Tool {
        tool: program.to_string(),
        message,
    };

    let mut child = match Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => child,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
        Err(err) => return Some(Err(tool_error(err.to_string()))),
    };

    if let Some(mut stdin) = child.stdin.take() {
        if let Err(err) = stdin.write_all(text.as_bytes()) {
            return Some(Err(tool_error(err.to_string())));
        }
    }

    match child.wait() {
        Ok(status) if status.success() => Some(Ok(())),
        Ok(status) => Some(Err(tool_error(format!("exited with {status}")))),
        Err(err) => Some(Err(tool_error(err.to_string()))),
    }
}

/// Discards writes; used in tests and headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullClipboard;

impl Clipboard for NullClipboard {
    fn copy(&self, _text: &str) -> Result<(), ClipboardError> {
        Ok(())
    }
}
