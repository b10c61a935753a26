use async_trait::async_trait;

use crate::models::event::{Event, EventInput};
use crate::models::user::CurrentUser;

pub type ApiError = Box<dyn std::error::Error + Send + Sync>;

/// The REST surface the pages talk to. Implemented over HTTP for real use
/// and by fakes in tests.
#[async_trait]
pub trait EventsApi: Send + Sync {
    /// `GET /api/auth/current`; `None` when nobody is signed in.
    async fn current_user(&self) -> Result<Option<CurrentUser>, ApiError>;

    /// `GET /api/events/:uid`.
    async fn event(&self, uid: &str) -> Result<Event, ApiError>;

    /// `POST /api/events`; the server answers with the created event.
    async fn create_event(&self, input: &EventInput) -> Result<Event, ApiError>;
}

/// OAuth entry points. The flows themselves are redirects handled by the
/// server; the client only knows where they start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthProvider {
    Facebook,
    Google,
}

impl AuthProvider {
    pub fn login_route(&self) -> &'static str {
        match self {
            AuthProvider::Facebook => "/api/auth/facebook",
            AuthProvider::Google => "/api/auth/google",
        }
    }
}

pub const LOGOUT_ROUTE: &str = "/api/auth/logout";

pub struct HttpEventsApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpEventsApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        // The cookie store stands in for the browser's same-origin
        // credentials on every request.
        let http = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl EventsApi for HttpEventsApi {
    async fn current_user(&self) -> Result<Option<CurrentUser>, ApiError> {
        let response = self.http.get(self.url("/api/auth/current")).send().await?;
        if !response.status().is_success() {
            return Err(format!("request failed with status {}", response.status()).into());
        }
        let user: Option<CurrentUser> = response.json().await?;
        Ok(user)
    }

    async fn event(&self, uid: &str) -> Result<Event, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/api/events/{}", uid)))
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(format!("request failed with status {}: {}", status, text).into());
        }
        let event: Event = serde_json::from_str(&text)
            .map_err(|e| format!("failed to parse event: {}\nraw body: {}", e, text))?;
        Ok(event)
    }

    async fn create_event(&self, input: &EventInput) -> Result<Event, ApiError> {
        let response = self
            .http
            .post(self.url("/api/events"))
            .json(input)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(format!("request failed with status {}: {}", status, text).into());
        }
        let event: Event = serde_json::from_str(&text)
            .map_err(|e| format!("failed to parse created event: {}\nraw body: {}", e, text))?;
        Ok(event)
    }
}
