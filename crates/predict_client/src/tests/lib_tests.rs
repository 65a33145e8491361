use super::*;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    routing::post,
    Router,
};
use shared::domain::Verdict;
use std::sync::Arc;
use tokio::{net::TcpListener, sync::Mutex};

#[derive(Debug)]
struct ReceivedUpload {
    field_name: String,
    filename: String,
    content_type: String,
    bytes: Vec<u8>,
}

#[derive(Clone)]
struct PredictServerState {
    status: StatusCode,
    body: String,
    received: Arc<Mutex<Option<ReceivedUpload>>>,
}

async fn handle_predict(
    State(state): State<PredictServerState>,
    mut multipart: Multipart,
) -> (StatusCode, String) {
    while let Some(field) = multipart.next_field().await.expect("readable multipart") {
        let field_name = field.name().unwrap_or_default().to_string();
        let filename = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await.expect("field bytes").to_vec();
        *state.received.lock().await = Some(ReceivedUpload {
            field_name,
            filename,
            content_type,
            bytes,
        });
    }
    (state.status, state.body.clone())
}

async fn spawn_predict_server(
    status: StatusCode,
    body: &str,
) -> (String, Arc<Mutex<Option<ReceivedUpload>>>) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock service");
    let addr = listener.local_addr().expect("mock service addr");
    let received = Arc::new(Mutex::new(None));
    let state = PredictServerState {
        status,
        body: body.to_string(),
        received: received.clone(),
    };
    let app = Router::new()
        .route("/predict", post(handle_predict))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}"), received)
}

fn sample_upload() -> PaperUpload {
    PaperUpload {
        filename: "draft-v3.pdf".to_string(),
        bytes: b"%PDF-1.7 sample".to_vec(),
    }
}

#[tokio::test]
async fn posts_single_pdf_field_and_decodes_acceptance() {
    let body = r#"{"verdict":"ACCEPTED","feedback":["clear motivation","strong results"]}"#;
    let (base_url, received) = spawn_predict_server(StatusCode::OK, body).await;

    let client = PredictClient::new(base_url);
    let prediction = client.predict(sample_upload()).await.expect("prediction");

    assert_eq!(prediction.verdict, Verdict::Accepted);
    assert_eq!(
        prediction.feedback,
        vec!["clear motivation".to_string(), "strong results".to_string()]
    );

    let upload = received.lock().await.take().expect("recorded upload");
    assert_eq!(upload.field_name, "pdf");
    assert_eq!(upload.filename, "draft-v3.pdf");
    assert_eq!(upload.content_type, "application/pdf");
    assert_eq!(upload.bytes, b"%PDF-1.7 sample");
}

#[tokio::test]
async fn rejection_without_feedback_decodes_as_empty_list() {
    let (base_url, _received) = spawn_predict_server(StatusCode::OK, r#"{"verdict":"REJECTED"}"#).await;

    let client = PredictClient::new(base_url);
    let prediction = client.predict(sample_upload()).await.expect("prediction");

    assert_eq!(prediction.verdict, Verdict::Rejected);
    assert!(prediction.feedback.is_empty());
}

#[tokio::test]
async fn non_success_status_maps_to_generic_server_error() {
    let (base_url, _received) =
        spawn_predict_server(StatusCode::INTERNAL_SERVER_ERROR, "stack trace goes here").await;

    let client = PredictClient::new(base_url);
    let err = client.predict(sample_upload()).await.expect_err("failure");

    // The body must not leak into the user-visible line.
    assert!(matches!(err, PredictError::Status(StatusCode::INTERNAL_SERVER_ERROR)));
    assert_eq!(err.to_string(), "Server error while predicting.");
}

#[tokio::test]
async fn malformed_body_maps_to_decode_error() {
    let (base_url, _received) = spawn_predict_server(StatusCode::OK, "<html>not json</html>").await;

    let client = PredictClient::new(base_url);
    let err = client.predict(sample_upload()).await.expect_err("failure");

    assert!(matches!(err, PredictError::Decode(_)));
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn unreachable_service_maps_to_transport_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind throwaway listener");
    let addr = listener.local_addr().expect("throwaway addr");
    drop(listener);

    let client = PredictClient::new(format!("http://{addr}"));
    let err = client.predict(sample_upload()).await.expect_err("failure");

    assert!(matches!(err, PredictError::Transport(_)));
    assert!(!err.to_string().is_empty());
}

#[test]
fn base_url_trailing_slash_is_normalized() {
    let client = PredictClient::new("http://localhost:8000/");
    assert_eq!(client.base_url(), "http://localhost:8000");
}
