use serde::Deserialize;
use serde_json::Value;

/// One JSON frame as delivered over the event stream.
///
/// Only `type` is required; everything else depends on the frame type and
/// the tool, and is normalized downstream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawFrame {
    #[serde(rename = "type")]
    pub frame_type: String,
    #[serde(default)]
    pub agent: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl RawFrame {
    pub fn parse(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }

    /// `done` and `error` end the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self.frame_type.as_str(), "done" | "error")
    }
}
