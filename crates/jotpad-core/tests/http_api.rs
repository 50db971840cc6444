//! `HttpNotesApi` against an in-process notes service.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use jotpad_core::api::{ApiError, Credentials, FailureKind, HttpNotesApi, NotesApi};
use jotpad_core::models::{NoteId, NotePayload};
use jotpad_core::view::{NotesController, Route};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

const SESSION_COOKIE: &str = "sid=secret-session";
const BEARER_TOKEN: &str = "service-token";

#[derive(Default)]
struct BackendState {
    notes: Vec<Value>,
    requests: Vec<String>,
    next_id: u32,
    open: bool,
    malformed_list: bool,
}

impl BackendState {
    fn authorized(&self, headers: &HeaderMap) -> bool {
        if self.open {
            return true;
        }
        let has_cookie = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .any(|value| value.split("; ").any(|pair| pair == SESSION_COOKIE));
        let has_bearer = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value == format!("Bearer {BEARER_TOKEN}"));
        has_cookie || has_bearer
    }
}

#[derive(Clone, Default)]
struct Backend(Arc<Mutex<BackendState>>);

impl Backend {
    fn open() -> Self {
        let backend = Self::default();
        backend.lock().open = true;
        backend
    }

    fn lock(&self) -> MutexGuard<'_, BackendState> {
        self.0.lock().unwrap()
    }

    fn requests(&self) -> Vec<String> {
        self.lock().requests.clone()
    }

    fn seed(&self, id: &str, title: &str) {
        self.lock().notes.push(json!({
            "_id": id,
            "title": title,
            "content": "",
            "createdAt": "2025-03-14T09:26:53.589Z",
            "updatedAt": "2025-03-14T09:26:53.589Z",
        }));
    }
}

async fn list_notes(State(backend): State<Backend>, headers: HeaderMap) -> Response {
    let mut state = backend.lock();
    state.requests.push("GET /notes".to_string());
    if !state.authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if state.malformed_list {
        return (StatusCode::OK, "<html>not json</html>").into_response();
    }
    Json(state.notes.clone()).into_response()
}

async fn create_note(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut state = backend.lock();
    state.requests.push(format!(
        "POST /notes title={} content={}",
        body["title"], body["content"]
    ));
    if !state.authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    state.next_id += 1;
    let note = json!({
        "_id": format!("n{}", state.next_id),
        "title": body["title"],
        "content": body["content"],
        "createdAt": "2025-03-14T09:26:53.589Z",
    });
    state.notes.push(note.clone());
    (StatusCode::CREATED, Json(note)).into_response()
}

async fn update_note(
    State(backend): State<Backend>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut state = backend.lock();
    state.requests.push(format!(
        "PATCH /notes/{id} title={} content={}",
        body["title"], body["content"]
    ));
    if !state.authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let Some(note) = state.notes.iter_mut().find(|note| note["_id"] == id.as_str()) else {
        return (StatusCode::NOT_FOUND, Json(json!({"message": "Note not found"})))
            .into_response();
    };
    note["title"] = body["title"].clone();
    note["content"] = body["content"].clone();
    Json(note.clone()).into_response()
}

async fn delete_note(
    State(backend): State<Backend>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let mut state = backend.lock();
    state.requests.push(format!("DELETE /notes/{id}"));
    if !state.authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let before = state.notes.len();
    state.notes.retain(|note| note["_id"] != id.as_str());
    if state.notes.len() == before {
        return (StatusCode::NOT_FOUND, Json(json!({"message": "Note not found"})))
            .into_response();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn login(State(backend): State<Backend>, Json(body): Json<Value>) -> Response {
    backend
        .lock()
        .requests
        .push(format!("POST /auth/login email={}", body["email"]));
    if body["password"] != "hunter2" {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Invalid credentials"})),
        )
            .into_response();
    }
    (
        [(header::SET_COOKIE, format!("{SESSION_COOKIE}; Path=/; HttpOnly"))],
        Json(json!({"message": "Logged in"})),
    )
        .into_response()
}

async fn logout(State(backend): State<Backend>, headers: HeaderMap) -> Response {
    let mut state = backend.lock();
    state.requests.push("POST /auth/logout".to_string());
    if !state.authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!({"message": "Logged out"})).into_response()
}

async fn spawn_backend(backend: Backend) -> String {
    let routes = Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/{id}", patch(update_note).delete(delete_note))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .with_state(backend);
    let app = Router::new().nest("/api", routes);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api/")
}

#[tokio::test]
async fn create_posts_body_then_refetches() {
    let backend = Backend::open();
    let base_url = spawn_backend(backend.clone()).await;
    let mut controller = NotesController::new(HttpNotesApi::new(&base_url).unwrap());

    controller.load().await;
    controller.view_mut().open_new();
    controller.view_mut().set_title("Groceries");
    controller.view_mut().set_content("Milk, eggs");
    controller.save().await;

    assert_eq!(
        backend.requests(),
        vec![
            "GET /notes".to_string(),
            r#"POST /notes title="Groceries" content="Milk, eggs""#.to_string(),
            "GET /notes".to_string(),
        ]
    );
    assert!(!controller.view().is_dialog_open());
    let notes = controller.view().notes();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Groceries");
    assert_eq!(notes[0].content, "Milk, eggs");
}

#[tokio::test]
async fn list_without_session_redirects_to_login() {
    let backend = Backend::default();
    backend.seed("n1", "Hidden");
    let base_url = spawn_backend(backend.clone()).await;
    let mut controller = NotesController::new(HttpNotesApi::new(&base_url).unwrap());

    controller.load().await;

    assert_eq!(controller.route(), Route::Login);
    assert!(controller.view().notes().is_empty());
}

#[tokio::test]
async fn login_cookie_authenticates_later_requests() {
    let backend = Backend::default();
    backend.seed("n1", "Private");
    let base_url = spawn_backend(backend.clone()).await;
    let api = HttpNotesApi::new(&base_url).unwrap();

    let session = api
        .login(&Credentials::new("user@example.com", "hunter2"))
        .await
        .unwrap();
    assert_eq!(session.cookies, vec![SESSION_COOKIE.to_string()]);
    assert_eq!(session.token, None);

    let notes = api.list_notes().await.unwrap();
    assert_eq!(notes[0].title, "Private");

    let restored = HttpNotesApi::new(&base_url).unwrap().with_session(&session);
    assert_eq!(restored.list_notes().await.unwrap().len(), 1);
}

#[tokio::test]
async fn rejected_login_is_unauthorized() {
    let base_url = spawn_backend(Backend::default()).await;
    let api = HttpNotesApi::new(&base_url).unwrap();

    let error = api
        .login(&Credentials::new("user@example.com", "wrong"))
        .await
        .unwrap_err();
    assert!(matches!(error, ApiError::Unauthorized));
}

#[tokio::test]
async fn bearer_token_is_sent_when_configured() {
    let backend = Backend::default();
    backend.seed("n1", "Token note");
    let base_url = spawn_backend(backend).await;

    let api = HttpNotesApi::new(&base_url)
        .unwrap()
        .with_access_token(Some(BEARER_TOKEN.to_string()));
    assert_eq!(api.list_notes().await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_targets_percent_encoded_id() {
    let backend = Backend::open();
    backend.seed("note 1", "Before");
    let base_url = spawn_backend(backend.clone()).await;
    let api = HttpNotesApi::new(&base_url).unwrap();

    api.update_note(&NoteId::new("note 1"), &NotePayload::new("After", "body"))
        .await
        .unwrap();

    assert_eq!(
        backend.requests(),
        vec![r#"PATCH /notes/note 1 title="After" content="body""#.to_string()]
    );
    assert_eq!(api.list_notes().await.unwrap()[0].title, "After");
}

#[tokio::test]
async fn missing_note_maps_to_operation_failure() {
    let backend = Backend::open();
    let base_url = spawn_backend(backend.clone()).await;
    let mut controller = NotesController::new(HttpNotesApi::new(&base_url).unwrap());

    controller.remove(&NoteId::new("ghost")).await;

    assert_eq!(controller.route(), Route::Notes);
    assert_eq!(backend.requests(), vec!["DELETE /notes/ghost".to_string()]);
    assert!(controller
        .view()
        .notice()
        .unwrap()
        .contains("Note not found (404)"));

    let error = controller
        .api()
        .delete_note(&NoteId::new("ghost"))
        .await
        .unwrap_err();
    assert_eq!(error.kind(), FailureKind::OperationFailed);
}

#[tokio::test]
async fn malformed_list_is_an_operation_failure() {
    let backend = Backend::open();
    backend.lock().malformed_list = true;
    let base_url = spawn_backend(backend).await;
    let api = HttpNotesApi::new(&base_url).unwrap();

    let error = api.list_notes().await.unwrap_err();
    assert!(matches!(error, ApiError::Json(_)));
    assert_eq!(error.kind(), FailureKind::OperationFailed);
}

#[tokio::test]
async fn logout_requires_session() {
    let backend = Backend::default();
    let base_url = spawn_backend(backend.clone()).await;
    let api = HttpNotesApi::new(&base_url).unwrap();

    assert!(api.logout().await.unwrap_err().is_auth_expired());

    api.login(&Credentials::new("user@example.com", "hunter2"))
        .await
        .unwrap();
    let mut controller = NotesController::new(api);
    controller.logout().await;

    assert_eq!(controller.route(), Route::Login);
    assert_eq!(
        backend.requests().last().map(String::as_str),
        Some("POST /auth/logout")
    );
}
