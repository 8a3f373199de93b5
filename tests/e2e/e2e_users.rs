use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::post;
use tokio::net::TcpListener;
use users_smoke::{Client, Outcome, SmokeConfig};

const WIRE: &str = r#"{"phone": "13800138000", "name": "张三", "avatar": 1}"#;

#[derive(Clone, Default)]
struct AppState {
    seen: Arc<Mutex<Vec<(Option<String>, Bytes)>>>,
}

#[tokio::test]
async fn e2e_create_user_success_roundtrip() {
    let server = TestServer::start().await;
    let config = SmokeConfig::new(server.url("/users"));
    let mut out = Vec::new();

    let report = users_smoke::run(&Client::new(), &config, &mut out)
        .await
        .expect("run should complete");

    assert_eq!(report.outcome, Outcome::Delivered { status: 200 });
    let text = String::from_utf8(out).expect("report should be utf-8");
    assert!(text.starts_with("Status code: 200\nResponse body:\n"));
    assert!(text.contains("User created successfully"));
    assert!(!report.payload_path.exists());

    let seen = server.state.seen.lock().expect("state lock").clone();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0.as_deref(), Some("application/json; charset=utf-8"));
    assert_eq!(seen[0].1.as_ref(), WIRE.as_bytes());
}

#[tokio::test]
async fn e2e_rejected_request_prints_error_and_body() {
    let server = TestServer::start().await;
    let config = SmokeConfig::new(server.url("/users-conflict"));
    let mut out = Vec::new();

    let report = users_smoke::run(&Client::new(), &config, &mut out)
        .await
        .expect("run should complete");

    assert_eq!(report.outcome, Outcome::Failed { status: Some(409) });
    let text = String::from_utf8(out).expect("report should be utf-8");
    assert!(text.contains("(409) Conflict"));
    assert!(text.contains("Error response body:\n{\"message\":\"手机号已存在\""));
    assert!(!report.payload_path.exists());
}

#[tokio::test]
async fn e2e_unknown_route_reports_not_found() {
    let server = TestServer::start().await;
    let config = SmokeConfig::new(server.url("/missing"));
    let mut out = Vec::new();

    let report = users_smoke::run(&Client::new(), &config, &mut out)
        .await
        .expect("run should complete");

    assert_eq!(report.outcome, Outcome::Failed { status: Some(404) });
    let text = String::from_utf8(out).expect("report should be utf-8");
    assert!(text.contains("(404) Not Found"));
}

struct TestServer {
    base_url: String,
    state: AppState,
    task: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn start() -> Self {
        let state = AppState::default();
        let app = Router::new()
            .route("/users", post(create_user_handler))
            .route("/users-conflict", post(conflict_handler))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");
        let base_url = format!("http://{}", addr);

        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url,
            state,
            task,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn create_user_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, &'static str) {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    state
        .seen
        .lock()
        .expect("state lock")
        .push((content_type, body));
    (
        StatusCode::OK,
        r#"{"message":"User created successfully","status":"success","data":null}"#,
    )
}

async fn conflict_handler() -> (StatusCode, &'static str) {
    (
        StatusCode::CONFLICT,
        r#"{"message":"手机号已存在","status":"error","data":null}"#,
    )
}
