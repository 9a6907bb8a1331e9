use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use studio_engine::{
    ClientEvent, ClientHandle, CloseReason, EventSink, HttpJobStream, JobStream, StartFailure,
    StartRequest, StreamSettings,
};

#[derive(Default)]
struct TestSink {
    events: Arc<Mutex<Vec<ClientEvent>>>,
}

impl TestSink {
    fn new() -> Self {
        Self::default()
    }

    fn take(&self) -> Vec<ClientEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl EventSink for TestSink {
    fn emit(&self, event: ClientEvent) {
        self.events.lock().unwrap().push(event);
    }
}

fn settings_for(server: &MockServer) -> StreamSettings {
    StreamSettings {
        base_url: server.uri(),
        ..StreamSettings::default()
    }
}

fn start_request(stream_id: &str) -> StartRequest {
    StartRequest {
        path: "/generate".to_string(),
        body: json!({ "idea": "Todo app", "stream_id": stream_id }),
    }
}

fn sse_body(frames: &[&str]) -> String {
    frames
        .iter()
        .map(|frame| format!("data: {frame}\n\n"))
        .collect()
}

fn frame_types(events: &[ClientEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match event {
            ClientEvent::Frame { frame, .. } => Some(frame.frame_type.clone()),
            _ => None,
        })
        .collect()
}

async fn mount_start(server: &MockServer, stream_id: &str) {
    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(body_partial_json(json!({ "stream_id": stream_id })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(server)
        .await;
}

async fn mount_stream(server: &MockServer, stream_id: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(format!("/stream/{stream_id}")))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn accepted_job_streams_frames_to_done() {
    let server = MockServer::start().await;
    mount_start(&server, "stream-1").await;
    mount_stream(
        &server,
        "stream-1",
        sse_body(&[
            r#"{"type":"status","text":"Designing UI...","progress":50}"#,
            r#"{"type":"msg","agent":"Frontend","text":"working"}"#,
            r#"{"type":"frontend_code","agent":"Frontend","text":"<html></html>"}"#,
            r#"{"type":"done"}"#,
        ]),
    )
    .await;

    let stream = HttpJobStream::new(settings_for(&server));
    let sink = TestSink::new();
    let reason = stream
        .run(
            "stream-1",
            &start_request("stream-1"),
            &sink,
            &CancellationToken::new(),
        )
        .await
        .expect("accepted job");

    assert_eq!(reason, CloseReason::Done);
    let events = sink.take();
    assert!(matches!(events[0], ClientEvent::JobAccepted { ref job_id } if job_id == "stream-1"));
    assert_eq!(
        frame_types(&events),
        vec!["status", "msg", "frontend_code", "done"]
    );
}

#[tokio::test]
async fn rejected_start_opens_no_stream() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": false })))
        .mount(&server)
        .await;

    let stream = HttpJobStream::new(settings_for(&server));
    let sink = TestSink::new();
    let err = stream
        .run(
            "stream-2",
            &start_request("stream-2"),
            &sink,
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind, StartFailure::NotAccepted);
    assert!(sink.take().is_empty());
}

#[tokio::test]
async fn start_http_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let stream = HttpJobStream::new(settings_for(&server));
    let sink = TestSink::new();
    let err = stream
        .run(
            "stream-3",
            &start_request("stream-3"),
            &sink,
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind, StartFailure::HttpStatus(500));
}

#[tokio::test]
async fn unparseable_ack_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let stream = HttpJobStream::new(settings_for(&server));
    let sink = TestSink::new();
    let err = stream
        .run(
            "stream-4",
            &start_request("stream-4"),
            &sink,
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind, StartFailure::InvalidResponse);
}

#[tokio::test]
async fn error_frame_is_terminal() {
    let server = MockServer::start().await;
    mount_start(&server, "stream-5").await;
    // The backend sends done after error; the client must already be gone.
    mount_stream(
        &server,
        "stream-5",
        sse_body(&[
            r#"{"type":"status","text":"Analyzing...","progress":20}"#,
            r#"{"type":"error","text":"model overloaded"}"#,
            r#"{"type":"done"}"#,
        ]),
    )
    .await;

    let stream = HttpJobStream::new(settings_for(&server));
    let sink = TestSink::new();
    let reason = stream
        .run(
            "stream-5",
            &start_request("stream-5"),
            &sink,
            &CancellationToken::new(),
        )
        .await
        .expect("accepted job");

    assert_eq!(
        reason,
        CloseReason::ErrorFrame {
            text: "model overloaded".to_string(),
        }
    );
    assert_eq!(frame_types(&sink.take()), vec!["status", "error"]);
}

#[tokio::test]
async fn eof_before_terminal_frame_is_transport_failure() {
    let server = MockServer::start().await;
    mount_start(&server, "stream-6").await;
    mount_stream(
        &server,
        "stream-6",
        sse_body(&[r#"{"type":"status","text":"Working...","progress":10}"#]),
    )
    .await;

    let stream = HttpJobStream::new(settings_for(&server));
    let sink = TestSink::new();
    let reason = stream
        .run(
            "stream-6",
            &start_request("stream-6"),
            &sink,
            &CancellationToken::new(),
        )
        .await
        .expect("accepted job");

    assert!(matches!(reason, CloseReason::Transport { .. }));
}

#[tokio::test]
async fn malformed_frames_are_skipped() {
    let server = MockServer::start().await;
    mount_start(&server, "stream-7").await;
    mount_stream(
        &server,
        "stream-7",
        sse_body(&["{not json at all", r#"{"type":"done"}"#]),
    )
    .await;

    let stream = HttpJobStream::new(settings_for(&server));
    let sink = TestSink::new();
    let reason = stream
        .run(
            "stream-7",
            &start_request("stream-7"),
            &sink,
            &CancellationToken::new(),
        )
        .await
        .expect("accepted job");

    assert_eq!(reason, CloseReason::Done);
    assert_eq!(frame_types(&sink.take()), vec!["done"]);
}

#[tokio::test]
async fn unknown_frame_types_are_forwarded() {
    let server = MockServer::start().await;
    mount_start(&server, "stream-8").await;
    mount_stream(
        &server,
        "stream-8",
        sse_body(&[
            r#"{"type":"sentiment_analysis","data":{}}"#,
            r#"{"type":"done"}"#,
        ]),
    )
    .await;

    let stream = HttpJobStream::new(settings_for(&server));
    let sink = TestSink::new();
    let reason = stream
        .run(
            "stream-8",
            &start_request("stream-8"),
            &sink,
            &CancellationToken::new(),
        )
        .await
        .expect("accepted job");

    assert_eq!(reason, CloseReason::Done);
    assert_eq!(frame_types(&sink.take()), vec!["sentiment_analysis", "done"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn client_handle_reports_exactly_one_close() {
    let server = MockServer::start().await;
    mount_start(&server, "stream-9").await;
    mount_stream(
        &server,
        "stream-9",
        sse_body(&[
            r#"{"type":"status","text":"Working...","progress":30}"#,
            r#"{"type":"done"}"#,
        ]),
    )
    .await;

    let handle = ClientHandle::new(settings_for(&server));
    handle.start_job("stream-9", start_request("stream-9"));

    let mut events = Vec::new();
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    loop {
        match handle.try_recv() {
            Some(event) => {
                let closed = matches!(event, ClientEvent::Closed { .. });
                events.push(event);
                if closed {
                    break;
                }
            }
            None if tokio::time::Instant::now() > deadline => panic!("timed out"),
            None => tokio::time::sleep(Duration::from_millis(20)).await,
        }
    }

    assert!(matches!(events[0], ClientEvent::JobAccepted { .. }));
    assert_eq!(
        events
            .iter()
            .filter(|event| matches!(event, ClientEvent::Closed { .. }))
            .count(),
        1
    );
    assert!(matches!(
        events.last(),
        Some(ClientEvent::Closed {
            reason: CloseReason::Done,
            ..
        })
    ));
}
