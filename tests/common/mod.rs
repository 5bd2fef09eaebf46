#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::{oneshot, watch};
use url_shortener_client::prelude::*;

pub const SHORT_URL: &str = "http://h/abc123";

/// Records what the stub backend received.
#[derive(Clone, Default)]
pub struct Recorder {
    hits: Arc<AtomicUsize>,
    content_types: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    fn hit(&self) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }
}

/// In-process stand-in for the shortening service, bound to an ephemeral port.
///
/// `POST /shorten` keys its behaviour on `long_url`:
/// - `https://quota.example.com` → 429 `{"detail": "quota exceeded"}`
/// - `https://broken.example.com` → 500 without `detail`
/// - `https://html.example.com` → 502 with a non-JSON body
/// - anything else → 200 `{"short_url": SHORT_URL}`
///
/// `GET /stats/{code}` answers `abc123` and `broken`; `GET /{code}` answers
/// `abc123`, `expired` and `plain`. Everything else is 404 `{"detail": ...}`.
///
/// Like a backend that canonicalises trailing slashes, `GET /stats/` answers an
/// empty 307 to `/stats`, which is then rejected as an unknown short URL.
/// `POST /legacy/shorten` answers a 308 to `/shorten`.
pub struct StubBackend {
    pub base_url: String,
    recorder: Recorder,
}

impl StubBackend {
    /// Number of requests that reached a handler.
    pub fn hits(&self) -> usize {
        self.recorder.hits.load(Ordering::SeqCst)
    }

    pub fn content_types(&self) -> Vec<String> {
        self.recorder.content_types.lock().unwrap().clone()
    }

    pub fn gateway(&self) -> Arc<HttpShortenerGateway> {
        self.gateway_at("")
    }

    /// Gateway rooted at `prefix` below the backend root, e.g. `/legacy`.
    pub fn gateway_at(&self, prefix: &str) -> Arc<HttpShortenerGateway> {
        let base_url = format!("{}{prefix}", self.base_url);
        Arc::new(HttpShortenerGateway::new(base_url).unwrap())
    }
}

pub async fn spawn_stub_backend() -> StubBackend {
    let recorder = Recorder::default();

    let app = Router::new()
        .route("/shorten", post(shorten))
        .route("/legacy/shorten", post(moved_shorten))
        .route("/stats/", get(trailing_slash))
        .route("/stats", get(unknown_short_url))
        .route("/stats/{code}", get(stats))
        .route("/{code}", get(redirect))
        .fallback(not_found)
        .with_state(recorder.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubBackend {
        base_url: format!("http://{addr}"),
        recorder,
    }
}

/// Base URL nothing listens on.
pub fn unreachable_gateway() -> Arc<HttpShortenerGateway> {
    Arc::new(HttpShortenerGateway::new("http://127.0.0.1:1").unwrap())
}

async fn shorten(
    State(recorder): State<Recorder>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    recorder.hit();
    if let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    {
        recorder
            .content_types
            .lock()
            .unwrap()
            .push(content_type.to_string());
    }

    match body["long_url"].as_str() {
        Some("https://quota.example.com") => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "detail": "quota exceeded" })),
        )
            .into_response(),
        Some("https://broken.example.com") => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "boom" })),
        )
            .into_response(),
        Some("https://html.example.com") => {
            (StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>").into_response()
        }
        _ => Json(json!({ "short_url": SHORT_URL })).into_response(),
    }
}

async fn stats(State(recorder): State<Recorder>, Path(code): Path<String>) -> Response {
    recorder.hit();

    match code.as_str() {
        "abc123" => Json(json!({
            "long_url": "http://x",
            "click_count": 5,
            "expiry_date": "2030-01-01"
        }))
        .into_response(),
        "broken" => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))).into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "Short URL not found" })),
        )
            .into_response(),
    }
}

async fn redirect(State(recorder): State<Recorder>, Path(code): Path<String>) -> Response {
    recorder.hit();

    match code.as_str() {
        "abc123" => Redirect::temporary("http://x").into_response(),
        "expired" => (
            StatusCode::GONE,
            Json(json!({ "detail": "Short URL has expired" })),
        )
            .into_response(),
        "plain" => Json(json!({ "ok": true })).into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "Short URL not found" })),
        )
            .into_response(),
    }
}

async fn moved_shorten(State(recorder): State<Recorder>) -> Response {
    recorder.hit();
    Redirect::permanent("/shorten").into_response()
}

async fn trailing_slash(State(recorder): State<Recorder>) -> Response {
    recorder.hit();
    Redirect::temporary("/stats").into_response()
}

async fn unknown_short_url(State(recorder): State<Recorder>) -> Response {
    recorder.hit();
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "detail": "Short URL not found" })),
    )
        .into_response()
}

async fn not_found(State(recorder): State<Recorder>) -> Response {
    recorder.hit();
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" }))).into_response()
}

type Gate<T> = oneshot::Receiver<Result<T, GatewayError>>;

/// Gateway whose calls stay pending until the test releases them.
///
/// Shorten calls are keyed by `long_url`, stats calls by code.
pub struct GatedGateway {
    shorten_gates: Mutex<HashMap<String, Gate<ShortenResult>>>,
    stats_gates: Mutex<HashMap<String, Gate<StatsResult>>>,
    issued: watch::Sender<usize>,
}

impl GatedGateway {
    pub fn new() -> Self {
        Self {
            shorten_gates: Mutex::new(HashMap::new()),
            stats_gates: Mutex::new(HashMap::new()),
            issued: watch::Sender::new(0),
        }
    }

    pub fn gate_shorten(
        &self,
        long_url: &str,
    ) -> oneshot::Sender<Result<ShortenResult, GatewayError>> {
        let (tx, rx) = oneshot::channel();
        self.shorten_gates
            .lock()
            .unwrap()
            .insert(long_url.to_string(), rx);
        tx
    }

    pub fn gate_stats(&self, code: &str) -> oneshot::Sender<Result<StatsResult, GatewayError>> {
        let (tx, rx) = oneshot::channel();
        self.stats_gates.lock().unwrap().insert(code.to_string(), rx);
        tx
    }

    /// Number of calls that reached the gateway so far.
    pub fn issued(&self) -> usize {
        *self.issued.borrow()
    }

    /// Waits until `count` calls have reached the gateway.
    pub async fn wait_issued(&self, count: usize) {
        self.issued
            .subscribe()
            .wait_for(|issued| *issued >= count)
            .await
            .unwrap();
    }

    fn mark_issued(&self) {
        self.issued.send_modify(|issued| *issued += 1);
    }
}

async fn released<T>(gate: Option<Gate<T>>) -> Result<T, GatewayError> {
    match gate {
        Some(rx) => rx
            .await
            .unwrap_or_else(|_| Err(GatewayError::transport("gate dropped"))),
        None => Err(GatewayError::transport("no gate registered")),
    }
}

#[async_trait]
impl ShortenerGateway for GatedGateway {
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResult, GatewayError> {
        let gate = self.shorten_gates.lock().unwrap().remove(&request.long_url);
        self.mark_issued();
        released(gate).await
    }

    async fn stats(&self, query: &StatsQuery) -> Result<StatsResult, GatewayError> {
        let gate = self.stats_gates.lock().unwrap().remove(&query.code);
        self.mark_issued();
        released(gate).await
    }

    async fn resolve(&self, _query: &StatsQuery) -> Result<ResolveResult, GatewayError> {
        self.mark_issued();
        Err(GatewayError::transport("resolve is not gated"))
    }
}

pub fn short(url: &str) -> ShortenResult {
    ShortenResult {
        short_url: url.to_string(),
    }
}
