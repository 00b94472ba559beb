//! HTTP client for the disaster-management backend.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::{error_message, paths, Payload};
use crate::config::Config;
use crate::errors::ConsoleError;
use crate::models::{
    CollectionType, CreateDisasterRequest, DashboardStats, Disaster, LoginRequest, LoginResponse,
    SystemStats,
};

/// API client. Each call is one-shot: no retries.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for the configured backend.
    pub fn new(config: &Config) -> Result<Self, ConsoleError> {
        let client = Client::builder().timeout(config.http_timeout).build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
            token: None,
        })
    }

    /// Set the bearer token sent with authenticated requests.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, method: Method, path: &str) -> Result<RequestBuilder, ConsoleError> {
        let token = self.token.as_deref().ok_or_else(|| {
            ConsoleError::Unauthorized("Not logged in. Run `relief-console login` first.".to_string())
        })?;
        Ok(self.client.request(method, self.url(path)).bearer_auth(token))
    }

    /// Send a request and turn non-2xx statuses into errors.
    async fn send(&self, request: RequestBuilder) -> Result<Response, ConsoleError> {
        let response = request
            .send()
            .await
            .map_err(|e| ConsoleError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!("Backend returned {}: {}", status, body);
        Err(ConsoleError::from_status(status.as_u16(), error_message(&body)))
    }

    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ConsoleError> {
        let body = response.text().await?;
        let payload: Payload<T> = serde_json::from_str(&body)?;
        Ok(payload.into_inner())
    }

    /// POST /api/admin/login
    ///
    /// A 401 is reported as [`ConsoleError::InvalidCredentials`].
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ConsoleError> {
        let builder = self.client.post(self.url(paths::LOGIN)).json(request);

        match self.send(builder).await {
            Ok(response) => Self::read(response).await,
            Err(ConsoleError::Unauthorized(_)) => Err(ConsoleError::InvalidCredentials),
            Err(e) => Err(e),
        }
    }

    /// GET /api/dashboard/stats
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ConsoleError> {
        let request = self.authorized(Method::GET, paths::DASHBOARD_STATS)?;
        Self::read(self.send(request).await?).await
    }

    /// GET /api/disasters
    pub async fn list_disasters(&self) -> Result<Vec<Disaster>, ConsoleError> {
        let request = self.authorized(Method::GET, paths::DISASTERS)?;
        Self::read(self.send(request).await?).await
    }

    /// GET /api/disasters/:id
    pub async fn get_disaster(&self, id: &str) -> Result<Disaster, ConsoleError> {
        let path = format!("{}/{}", paths::DISASTERS, id);
        let request = self.authorized(Method::GET, &path)?;
        Self::read(self.send(request).await?).await
    }

    /// POST /api/disasters
    pub async fn create_disaster(
        &self,
        disaster: &CreateDisasterRequest,
    ) -> Result<Disaster, ConsoleError> {
        let request = self.authorized(Method::POST, paths::DISASTERS)?.json(disaster);
        Self::read(self.send(request).await?).await
    }

    /// DELETE /api/disasters/:id
    pub async fn delete_disaster(&self, id: &str) -> Result<(), ConsoleError> {
        let path = format!("{}/{}", paths::DISASTERS, id);
        let request = self.authorized(Method::DELETE, &path)?;
        self.send(request).await?;
        Ok(())
    }

    /// GET /api/danger-zone/stats
    pub async fn system_stats(&self) -> Result<SystemStats, ConsoleError> {
        let request = self.authorized(Method::GET, paths::DANGER_ZONE_STATS)?;
        Self::read(self.send(request).await?).await
    }

    /// GET /api/danger-zone/export
    ///
    /// The body is returned untouched so it can be written out as-is.
    pub async fn export_system(&self) -> Result<serde_json::Value, ConsoleError> {
        let request = self.authorized(Method::GET, paths::DANGER_ZONE_EXPORT)?;
        let response = self.send(request).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// DELETE /api/danger-zone/collection/:type
    pub async fn delete_collection(&self, collection: CollectionType) -> Result<(), ConsoleError> {
        let path = format!("{}/{}", paths::DANGER_ZONE_COLLECTION, collection.as_str());
        let request = self.authorized(Method::DELETE, &path)?;
        self.send(request).await?;
        Ok(())
    }

    /// DELETE /api/danger-zone/reset
    pub async fn reset_system(&self) -> Result<(), ConsoleError> {
        let request = self.authorized(Method::DELETE, paths::DANGER_ZONE_RESET)?;
        self.send(request).await?;
        Ok(())
    }
}
