use std::sync::{mpsc, Arc};
use std::thread;

use tokio_util::sync::CancellationToken;

use crate::client::{ChannelEventSink, HttpJobStream, JobStream, StartRequest, StreamSettings};
use crate::{ClientEvent, JobId};

enum ClientCommand {
    StartJob { job_id: JobId, start: StartRequest },
}

/// Handle to the background transport thread.
///
/// Commands cross over a channel to a thread owning a tokio runtime; events
/// come back over a second channel and are polled with `try_recv`.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
    cancel: CancellationToken,
}

impl ClientHandle {
    pub fn new(settings: StreamSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let stream = Arc::new(HttpJobStream::new(settings));

        let job_cancel = cancel.clone();
        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let stream = stream.clone();
                let event_tx = event_tx.clone();
                let cancel = job_cancel.clone();
                runtime.spawn(async move {
                    handle_command(stream.as_ref(), command, event_tx, cancel).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx,
            cancel,
        }
    }

    pub fn start_job(&self, job_id: impl Into<JobId>, start: StartRequest) {
        let _ = self.cmd_tx.send(ClientCommand::StartJob {
            job_id: job_id.into(),
            start,
        });
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Abort any in-flight stream; the affected job reports `Cancelled`.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

async fn handle_command(
    stream: &dyn JobStream,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
    cancel: CancellationToken,
) {
    match command {
        ClientCommand::StartJob { job_id, start } => {
            let sink = ChannelEventSink::new(event_tx.clone());
            let event = match stream.run(&job_id, &start, &sink, &cancel).await {
                Ok(reason) => ClientEvent::Closed { job_id, reason },
                Err(error) => ClientEvent::JobRejected { job_id, error },
            };
            let _ = event_tx.send(event);
        }
    }
}
