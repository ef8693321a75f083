//! HTTP client for the remote positions API.
//!
//! Every call attaches the bearer token from the injected session. A 401 from
//! any call clears the session and requests a login redirect before the error
//! is returned.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Method, RequestBuilder, Response, StatusCode};

use crate::auth::{bearer_header, Navigator, SessionStore};
use crate::errors::{DashboardError, Operation};
use crate::models::{Position, PositionList, PositionPayload};

/// Client for `{base}/positions`.
#[derive(Clone)]
pub struct ResourceClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl ResourceClient {
    pub fn new(
        base_url: impl Into<String>,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_url, session, navigator)
    }

    /// Build a client whose requests give up after `timeout`.
    pub fn with_timeout(
        timeout: Duration,
        base_url: impl Into<String>,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, DashboardError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_http_client(http, base_url, session, navigator))
    }

    pub fn with_http_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            session,
            navigator,
        }
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    /// GET /positions - List all positions.
    pub async fn list(&self) -> Result<Vec<Position>, DashboardError> {
        let response = self
            .send(Operation::List, self.request(Method::GET, "/positions"))
            .await?;

        let body = response.bytes().await?;
        let list: PositionList = serde_json::from_slice(&body)?;
        let positions = list.into_vec();

        tracing::debug!("Fetched {} positions", positions.len());
        Ok(positions)
    }

    /// POST /positions - Create a position.
    pub async fn create(&self, payload: &PositionPayload) -> Result<(), DashboardError> {
        let request = self.request(Method::POST, "/positions").json(payload);
        self.send(Operation::Create, request).await?;
        Ok(())
    }

    /// PUT /positions/:id - Update a position.
    pub async fn update(&self, id: i64, payload: &PositionPayload) -> Result<(), DashboardError> {
        let path = format!("/positions/{}", id);
        let request = self.request(Method::PUT, &path).json(payload);
        self.send(Operation::Update, request).await?;
        Ok(())
    }

    /// DELETE /positions/:id - Delete a position.
    pub async fn delete(&self, id: i64) -> Result<(), DashboardError> {
        let path = format!("/positions/{}", id);
        self.send(Operation::Delete, self.request(Method::DELETE, &path))
            .await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("{} {}", method, url);

        self.http
            .request(method, url)
            .header(header::AUTHORIZATION, bearer_header(self.session.as_ref()))
            .header(header::CONTENT_TYPE, "application/json")
    }

    /// Send a request and map its status onto the error taxonomy.
    async fn send(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> Result<Response, DashboardError> {
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("{} rejected with 401, ending session", operation.describe());
            self.session.clear();
            self.navigator.redirect_to_login();
            return Err(DashboardError::AuthExpired);
        }

        if !status.is_success() {
            tracing::warn!("{} failed with status {}", operation.describe(), status);
            return Err(DashboardError::RequestFailed {
                operation,
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}
