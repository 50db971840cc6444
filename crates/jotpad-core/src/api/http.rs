//! reqwest-backed notes client with a per-client cookie jar.

use std::fmt;
use std::sync::Arc;

use reqwest::cookie::Jar;
use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::{Deserialize, Serialize};

use super::{normalize_api_url, parse_api_error, ApiError, ApiResult, NotesApi};
use crate::models::{Note, NoteId, NotePayload};
use crate::session::StoredSession;

/// Body of `POST /auth/login`
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: Option<String>,
    #[serde(rename = "accessToken")]
    access_token: Option<String>,
}

/// HTTP client for the notes service.
///
/// Session cookies set by the service are kept in a jar shared by all clones
/// of the client, so a login through one clone authenticates the others.
#[derive(Clone)]
pub struct HttpNotesApi {
    base_url: String,
    client: Client,
    jar: Arc<Jar>,
    access_token: Option<String>,
}

impl fmt::Debug for HttpNotesApi {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("HttpNotesApi")
            .field("base_url", &self.base_url)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish_non_exhaustive()
    }
}

impl HttpNotesApi {
    pub fn new(base_url: impl AsRef<str>) -> ApiResult<Self> {
        let base_url = normalize_api_url(base_url.as_ref())?;
        Url::parse(&base_url)
            .map_err(|_| ApiError::InvalidConfiguration("API base URL is not a valid URL"))?;

        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .build()?;

        Ok(Self {
            base_url,
            client,
            jar,
            access_token: None,
        })
    }

    /// Sends `Authorization: Bearer <token>` on every request when set.
    #[must_use]
    pub fn with_access_token(mut self, token: Option<String>) -> Self {
        self.access_token = token.filter(|token| !token.trim().is_empty());
        self
    }

    /// Seeds the cookie jar (and bearer token, if any) from a persisted session.
    #[must_use]
    pub fn with_session(mut self, session: &StoredSession) -> Self {
        if let Ok(url) = Url::parse(&self.base_url) {
            for cookie in &session.cookies {
                self.jar.add_cookie_str(&format!("{cookie}; Path=/"), &url);
            }
        }
        if session.token.is_some() {
            self.access_token.clone_from(&session.token);
        }
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /auth/login`.
    ///
    /// Returns the cookies and optional token the service handed out so the
    /// caller can persist them.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<StoredSession> {
        let request = self
            .request(Method::POST, self.endpoint("/auth/login"))
            .json(credentials);
        let response = self.send(request).await?;

        let cookies = response
            .cookies()
            .map(|cookie| format!("{}={}", cookie.name(), cookie.value()))
            .collect::<Vec<_>>();
        let body = response.text().await?;
        let token = serde_json::from_str::<LoginResponse>(&body)
            .ok()
            .and_then(|payload| payload.token.or(payload.access_token))
            .filter(|token| !token.trim().is_empty());

        tracing::info!(
            "Signed in as {} ({} session cookie(s))",
            credentials.email,
            cookies.len()
        );
        Ok(StoredSession { cookies, token })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn note_endpoint(&self, id: &NoteId) -> String {
        format!(
            "{}/notes/{}",
            self.base_url,
            urlencoding::encode(id.as_str())
        )
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        tracing::debug!("{} {}", method, url);
        let request = self
            .client
            .request(method, url)
            .header(header::ACCEPT, "application/json");
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api(parse_api_error(status, &body)));
        }
        Ok(response)
    }
}

impl NotesApi for HttpNotesApi {
    async fn list_notes(&self) -> ApiResult<Vec<Note>> {
        let response = self
            .send(self.request(Method::GET, self.endpoint("/notes")))
            .await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn create_note(&self, payload: &NotePayload) -> ApiResult<()> {
        let request = self
            .request(Method::POST, self.endpoint("/notes"))
            .json(payload);
        self.send(request).await?;
        Ok(())
    }

    async fn update_note(&self, id: &NoteId, payload: &NotePayload) -> ApiResult<()> {
        let request = self
            .request(Method::PATCH, self.note_endpoint(id))
            .json(payload);
        self.send(request).await?;
        Ok(())
    }

    async fn delete_note(&self, id: &NoteId) -> ApiResult<()> {
        self.send(self.request(Method::DELETE, self.note_endpoint(id)))
            .await?;
        Ok(())
    }

    async fn logout(&self) -> ApiResult<()> {
        self.send(self.request(Method::POST, self.endpoint("/auth/logout")))
            .await?;
        Ok(())
    }
}
