use std::sync::mpsc;
use std::time::Duration;

use futures_util::StreamExt;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use studio_logging::{studio_debug, studio_warn};

use crate::{ClientEvent, CloseReason, RawFrame, SseDecoder, StartError, StartFailure};

#[derive(Debug, Clone)]
pub struct StreamSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Applies to the start request only; the stream itself carries no
    /// read timeout (a silent backend leaves the job streaming).
    pub start_timeout: Duration,
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            connect_timeout: Duration::from_secs(10),
            start_timeout: Duration::from_secs(30),
        }
    }
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: ClientEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<ClientEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<ClientEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: ClientEvent) {
        let _ = self.tx.send(event);
    }
}

/// The start request: endpoint path plus the JSON body to post, including
/// the caller-generated stream id.
#[derive(Debug, Clone, PartialEq)]
pub struct StartRequest {
    pub path: String,
    pub body: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct StartAck {
    #[serde(default)]
    success: bool,
}

#[async_trait::async_trait]
pub trait JobStream: Send + Sync {
    /// Start the job and pump its event stream into `sink`.
    ///
    /// Emits `JobAccepted` and one `Frame` per received frame. Returns the
    /// close reason for every accepted job; `Err` means the job never
    /// started and no stream was opened.
    async fn run(
        &self,
        job_id: &str,
        start: &StartRequest,
        sink: &dyn EventSink,
        cancel: &CancellationToken,
    ) -> Result<CloseReason, StartError>;
}

#[derive(Debug, Clone)]
pub struct HttpJobStream {
    settings: StreamSettings,
}

impl HttpJobStream {
    pub fn new(settings: StreamSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, StartError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .build()
            .map_err(|err| StartError::new(StartFailure::Network, err.to_string()))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.settings.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait::async_trait]
impl JobStream for HttpJobStream {
    async fn run(
        &self,
        job_id: &str,
        start: &StartRequest,
        sink: &dyn EventSink,
        cancel: &CancellationToken,
    ) -> Result<CloseReason, StartError> {
        let client = self.build_client()?;

        let response = client
            .post(self.url(&start.path))
            .json(&start.body)
            .timeout(self.settings.start_timeout)
            .send()
            .await
            .map_err(map_start_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(StartError::new(
                StartFailure::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let ack: StartAck = response
            .json()
            .await
            .map_err(|err| StartError::new(StartFailure::InvalidResponse, err.to_string()))?;
        if !ack.success {
            return Err(StartError::new(
                StartFailure::NotAccepted,
                "backend did not accept the job",
            ));
        }

        sink.emit(ClientEvent::JobAccepted {
            job_id: job_id.to_string(),
        });

        // From here on every outcome is a close reason: the job was accepted,
        // so the caller is owed exactly one Closed event.
        let response = match client
            .get(self.url(&format!("/stream/{job_id}")))
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                return Ok(CloseReason::Transport {
                    message: format!("stream endpoint answered {}", response.status()),
                })
            }
            Err(err) => {
                return Ok(CloseReason::Transport {
                    message: err.to_string(),
                })
            }
        };

        let mut stream = response.bytes_stream();
        let mut decoder = SseDecoder::new();
        loop {
            let chunk = tokio::select! {
                _ = cancel.cancelled() => return Ok(CloseReason::Cancelled),
                chunk = stream.next() => chunk,
            };
            match chunk {
                Some(Ok(chunk)) => {
                    for payload in decoder.feed(&chunk) {
                        let frame = match RawFrame::parse(&payload) {
                            Ok(frame) => frame,
                            Err(err) => {
                                studio_warn!("job {job_id}: skipping malformed frame: {err}");
                                continue;
                            }
                        };
                        studio_debug!("job {job_id}: frame type={}", frame.frame_type);
                        let terminal = terminal_reason(&frame);
                        sink.emit(ClientEvent::Frame {
                            job_id: job_id.to_string(),
                            frame,
                        });
                        if let Some(reason) = terminal {
                            return Ok(reason);
                        }
                    }
                }
                Some(Err(err)) => {
                    return Ok(CloseReason::Transport {
                        message: err.to_string(),
                    })
                }
                None => {
                    return Ok(CloseReason::Transport {
                        message: "stream ended before done".to_string(),
                    })
                }
            }
        }
    }
}

fn terminal_reason(frame: &RawFrame) -> Option<CloseReason> {
    match frame.frame_type.as_str() {
        "done" => Some(CloseReason::Done),
        "error" => Some(CloseReason::ErrorFrame {
            text: frame
                .text
                .clone()
                .unwrap_or_else(|| "Unknown error".to_string()),
        }),
        _ => None,
    }
}

fn map_start_error(err: reqwest::Error) -> StartError {
    if err.is_timeout() {
        return StartError::new(StartFailure::Timeout, err.to_string());
    }
    StartError::new(StartFailure::Network, err.to_string())
}
