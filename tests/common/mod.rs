use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use axum::extract::{Form, Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

pub const STUB_PASSWORD: &str = "hunter2";

/// What the stub's `POST /refresh` should do next.
#[derive(Clone)]
pub enum RefreshOutcome {
    Token(String),
    Status(u16),
}

pub struct StubState {
    pub refresh_calls: AtomicUsize,
    pub guard_calls: AtomicUsize,
    pub refresh_outcome: Mutex<RefreshOutcome>,
    pub accepted_tokens: Mutex<Vec<String>>,
    pub reject_status: Mutex<u16>,
}

pub struct StubServer {
    pub base_url: String,
    pub state: Arc<StubState>,
}

impl StubServer {
    pub fn accept_token(&self, token: &str) {
        self.state
            .accepted_tokens
            .lock()
            .unwrap()
            .push(token.to_string());
    }

    pub fn set_refresh_token(&self, token: &str) {
        *self.state.refresh_outcome.lock().unwrap() = RefreshOutcome::Token(token.to_string());
    }

    pub fn set_refresh_status(&self, code: u16) {
        *self.state.refresh_outcome.lock().unwrap() = RefreshOutcome::Status(code);
    }

    pub fn set_reject_status(&self, code: u16) {
        *self.state.reject_status.lock().unwrap() = code;
    }

    pub fn refresh_calls(&self) -> usize {
        self.state.refresh_calls.load(Ordering::SeqCst)
    }

    pub fn guard_calls(&self) -> usize {
        self.state.guard_calls.load(Ordering::SeqCst)
    }
}

/// Mint a JWT-shaped token the client can decode. The signature is not
/// checked client-side, so any filler works.
pub fn mint_token(id: &str, username: &str) -> String {
    mint_token_with_claims(serde_json::json!({"id": id, "username": username}))
}

pub fn mint_token_with_claims(payload: serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{}.{}.signature", header, payload)
}

pub fn profile(dir: &tempfile::TempDir) -> rline::store::ProfileStore {
    rline::store::ProfileStore::open(dir.path().join("profile")).expect("open profile store")
}

pub fn client(server: &StubServer) -> rline::remote::RemoteClient {
    rline::remote::RemoteClient::new(rline::model::ApiConfig {
        base_url: server.base_url.clone(),
    })
    .expect("build remote client")
}

/// Serve the stub API on an OS-assigned port from a background thread. The
/// thread is detached; it ends with the test process.
pub fn spawn() -> StubServer {
    let state = Arc::new(StubState {
        refresh_calls: AtomicUsize::new(0),
        guard_calls: AtomicUsize::new(0),
        refresh_outcome: Mutex::new(RefreshOutcome::Status(500)),
        accepted_tokens: Mutex::new(Vec::new()),
        reject_status: Mutex::new(401),
    });
    let app = router(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
    let addr = listener.local_addr().expect("stub addr");
    listener.set_nonblocking(true).expect("nonblocking listener");

    thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("stub runtime");
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).expect("adopt listener");
            axum::serve(listener, app).await.expect("serve stub");
        });
    });

    StubServer {
        base_url: format!("http://{}", addr),
        state,
    }
}

fn router(state: Arc<StubState>) -> Router {
    Router::new()
        .route("/guard", get(guard))
        .route("/refresh", post(refresh))
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/posts", get(list_posts).post(guarded_ok))
        .route("/post", post(show_post))
        .route("/posts/like", post(guarded_ok))
        .route("/posts/dislike", post(guarded_ok))
        .route("/comment", post(guarded_ok))
        .route("/follow", post(guarded_ok))
        .route("/unfollow", post(guarded_ok))
        .route("/follow/status/:user_id", get(follow_status))
        .route("/follow/counts/:user_id", get(follow_counts))
        .route("/users/username/:username", get(user_by_username))
        .route("/boom", get(boom))
        .with_state(state)
}

fn bearer_accepted(state: &StubState, headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let Some(token) = value.strip_prefix("Bearer ") else {
        return false;
    };
    state
        .accepted_tokens
        .lock()
        .unwrap()
        .iter()
        .any(|t| t == token)
}

fn reject(state: &StubState) -> Response {
    let code = *state.reject_status.lock().unwrap();
    StatusCode::from_u16(code).unwrap().into_response()
}

async fn guard(State(state): State<Arc<StubState>>, headers: HeaderMap) -> Response {
    state.guard_calls.fetch_add(1, Ordering::SeqCst);
    if bearer_accepted(&state, &headers) {
        Json(serde_json::json!({"ok": true})).into_response()
    } else {
        reject(&state)
    }
}

async fn guarded_ok(State(state): State<Arc<StubState>>, headers: HeaderMap) -> Response {
    if bearer_accepted(&state, &headers) {
        Json(serde_json::json!({"message": "ok"})).into_response()
    } else {
        reject(&state)
    }
}

async fn refresh(State(state): State<Arc<StubState>>) -> Response {
    state.refresh_calls.fetch_add(1, Ordering::SeqCst);
    let outcome = state.refresh_outcome.lock().unwrap().clone();
    match outcome {
        RefreshOutcome::Token(token) => Json(serde_json::json!({"token": token})).into_response(),
        RefreshOutcome::Status(code) => StatusCode::from_u16(code).unwrap().into_response(),
    }
}

async fn login(
    State(state): State<Arc<StubState>>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    if fields.get("password").map(String::as_str) != Some(STUB_PASSWORD) {
        return Json(serde_json::json!({"message": "wrong username or password"})).into_response();
    }
    let username = fields.get("username").cloned().unwrap_or_default();
    let token = mint_token("u-login", &username);
    state.accepted_tokens.lock().unwrap().push(token.clone());
    Json(serde_json::json!({"token": token})).into_response()
}

async fn register(Form(fields): Form<HashMap<String, String>>) -> Response {
    if fields.get("password") != fields.get("confirmedPassword") {
        return Json(serde_json::json!({"pass": false, "message": "passwords do not match"}))
            .into_response();
    }
    Json(serde_json::json!({"pass": true})).into_response()
}

fn post_fixture() -> serde_json::Value {
    serde_json::json!({
        "id": "p1",
        "title": "hello",
        "content": "first post",
        "author": {"username": "alice", "id": "u1"},
        "createdAt": "2024-01-15T10:00:00Z",
        "postStatus": "published",
        "likes": 2,
        "comments": [{
            "id": "c1",
            "content": "welcome",
            "createdAt": "2024-01-15T11:00:00Z",
            "author": {"username": "bob"}
        }]
    })
}

async fn list_posts() -> Json<serde_json::Value> {
    Json(serde_json::json!([post_fixture()]))
}

async fn show_post(Form(fields): Form<HashMap<String, String>>) -> Response {
    if fields.get("postId").map(String::as_str) == Some("p1") {
        Json(serde_json::json!({"post": post_fixture()})).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

async fn follow_status(
    State(state): State<Arc<StubState>>,
    Path(user_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if !bearer_accepted(&state, &headers) {
        return reject(&state);
    }
    Json(serde_json::json!({"isFollowing": user_id == "u-followed"})).into_response()
}

async fn follow_counts(Path(_user_id): Path<String>) -> Json<serde_json::Value> {
    Json(serde_json::json!({"followersCount": 3, "followingCount": 5}))
}

async fn user_by_username(Path(username): Path<String>) -> Response {
    if username == "alice" {
        Json(serde_json::json!({
            "user": {"id": "u1", "username": "alice", "email": "alice@example.com"}
        }))
        .into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"message": "user not found"})),
        )
            .into_response()
    }
}

async fn boom() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({"error": "boom"})),
    )
        .into_response()
}
