//! PagerTree v4 API client.
//!
//! [`PagerTreeClient`] exposes one method per resource and action. Single
//! resource calls return the response body untouched; list calls return a
//! [`PagedResult`]. Every failure surfaces as a typed [`ApiError`]; nothing
//! is retried and nothing is swallowed here.

use crate::configuration::Configuration;
use crate::http_utils::{HttpClient, HttpRequestConfig};
use crate::model::{
    AlertCreateRequest, AlertUpdateRequest, BroadcastCreateRequest, CommentCreateRequest,
    IntegrationUpdateRequest, ListQuery, TeamRequest, UserCreateRequest, UserUpdateRequest,
};
use crate::pagination::PagedResult;
use serde_json::{json, Value};
use tracing::debug;

/// Error emitted by the PagerTree API client
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Connection, DNS, TLS or timeout failure
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-2xx status
    #[error("{status} - {reason}")]
    RequestFailed {
        status: u16,
        reason: String,
        /// Raw response body, kept for error detail extraction
        body: String,
    },
    /// Bad input detected before any request was sent
    #[error("{0}")]
    Validation(String),
    /// A lookup that a dependent action relies on matched nothing
    #[error("{0}")]
    NotFound(String),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status of a failed request, if this error came from one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PagerTreeClient {
    http: HttpClient,
}

fn body_or_null(body: Option<Value>) -> Value {
    body.unwrap_or(Value::Null)
}

fn body_or_confirmation(body: Option<Value>, confirmation: Value) -> Value {
    match body {
        Some(Value::Null) | None => confirmation,
        Some(value) => value,
    }
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        Err(ApiError::Validation(format!("{field} must not be empty")))
    } else {
        Ok(())
    }
}

impl PagerTreeClient {
    pub fn new(configuration: &Configuration) -> Result<Self, ApiError> {
        let http = HttpClient::new(HttpRequestConfig::from_configuration(configuration))?;
        Ok(Self { http })
    }

    pub fn base_url(&self) -> &str {
        &self.http.config().base_url
    }

    async fn list(&self, path: &str, query: &ListQuery) -> Result<PagedResult, ApiError> {
        debug!("Listing {} with {:?}", path, query);
        let body = self.http.get(path, Some(query)).await?;
        Ok(PagedResult::from_response(body, query.limit, query.offset))
    }

    async fn show(&self, path: &str) -> Result<Value, ApiError> {
        Ok(body_or_null(self.http.get::<()>(path, None).await?))
    }

    async fn delete(&self, path: &str, id: &str) -> Result<Value, ApiError> {
        let body = self.http.delete(path).await?;
        Ok(body_or_confirmation(body, json!({"id": id, "deleted": true})))
    }

    async fn transition(&self, id: &str, action: &str) -> Result<Value, ApiError> {
        let body = self
            .http
            .put::<()>(&format!("/alerts/{id}/{action}"), None)
            .await?;
        Ok(body_or_confirmation(body, json!({"id": id})))
    }

    // Alerts

    pub async fn create_alert(&self, request: &AlertCreateRequest) -> Result<Value, ApiError> {
        require_non_empty(&request.title, "title")?;
        Ok(body_or_null(self.http.post("/alerts", request).await?))
    }

    pub async fn list_alerts(&self, query: &ListQuery) -> Result<PagedResult, ApiError> {
        self.list("/alerts", query).await
    }

    pub async fn show_alert(&self, alert_id: &str) -> Result<Value, ApiError> {
        self.show(&format!("/alerts/{alert_id}")).await
    }

    pub async fn update_alert(
        &self,
        alert_id: &str,
        request: &AlertUpdateRequest,
    ) -> Result<Value, ApiError> {
        let body = self
            .http
            .put(&format!("/alerts/{alert_id}"), Some(request))
            .await?;
        Ok(body_or_confirmation(body, json!({"id": alert_id})))
    }

    pub async fn delete_alert(&self, alert_id: &str) -> Result<Value, ApiError> {
        self.delete(&format!("/alerts/{alert_id}"), alert_id).await
    }

    pub async fn acknowledge_alert(&self, alert_id: &str) -> Result<Value, ApiError> {
        self.transition(alert_id, "acknowledge").await
    }

    pub async fn reject_alert(&self, alert_id: &str) -> Result<Value, ApiError> {
        self.transition(alert_id, "reject").await
    }

    pub async fn resolve_alert(&self, alert_id: &str) -> Result<Value, ApiError> {
        self.transition(alert_id, "resolve").await
    }

    // Comments

    pub async fn create_comment(
        &self,
        alert_id: &str,
        request: &CommentCreateRequest,
    ) -> Result<Value, ApiError> {
        require_non_empty(&request.body, "comment")?;
        Ok(body_or_null(
            self.http
                .post(&format!("/alerts/{alert_id}/comments"), request)
                .await?,
        ))
    }

    pub async fn list_comments(
        &self,
        alert_id: &str,
        query: &ListQuery,
    ) -> Result<PagedResult, ApiError> {
        self.list(&format!("/alerts/{alert_id}/comments"), query).await
    }

    // Broadcasts

    pub async fn create_broadcast(&self, request: &BroadcastCreateRequest) -> Result<Value, ApiError> {
        require_non_empty(&request.title, "title")?;
        Ok(body_or_null(self.http.post("/broadcasts", request).await?))
    }

    pub async fn list_broadcasts(&self, query: &ListQuery) -> Result<PagedResult, ApiError> {
        self.list("/broadcasts", query).await
    }

    pub async fn show_broadcast(&self, broadcast_id: &str) -> Result<Value, ApiError> {
        self.show(&format!("/broadcasts/{broadcast_id}")).await
    }

    pub async fn delete_broadcast(&self, broadcast_id: &str) -> Result<Value, ApiError> {
        self.delete(&format!("/broadcasts/{broadcast_id}"), broadcast_id)
            .await
    }

    // Teams

    pub async fn create_team(&self, request: &TeamRequest) -> Result<Value, ApiError> {
        require_non_empty(request.name.as_deref().unwrap_or_default(), "name")?;
        Ok(body_or_null(self.http.post("/teams", request).await?))
    }

    pub async fn list_teams(&self, query: &ListQuery) -> Result<PagedResult, ApiError> {
        self.list("/teams", query).await
    }

    pub async fn show_team(&self, team_id: &str) -> Result<Value, ApiError> {
        self.show(&format!("/teams/{team_id}")).await
    }

    pub async fn update_team(&self, team_id: &str, request: &TeamRequest) -> Result<Value, ApiError> {
        let body = self
            .http
            .put(&format!("/teams/{team_id}"), Some(request))
            .await?;
        Ok(body_or_confirmation(body, json!({"id": team_id})))
    }

    pub async fn delete_team(&self, team_id: &str) -> Result<Value, ApiError> {
        self.delete(&format!("/teams/{team_id}"), team_id).await
    }

    /// On-call schedule layers currently active for the team
    pub async fn team_current_oncall(&self, team_id: &str) -> Result<Vec<Value>, ApiError> {
        let body = self
            .http
            .get::<()>(&format!("/teams/{team_id}/current_oncall"), None)
            .await?;
        Ok(match body {
            Some(Value::Array(layers)) => layers,
            _ => Vec::new(),
        })
    }

    pub async fn team_alerts(&self, team_id: &str, query: &ListQuery) -> Result<PagedResult, ApiError> {
        self.list(&format!("/teams/{team_id}/alerts"), query).await
    }

    // Account users

    pub async fn create_user(&self, request: &UserCreateRequest) -> Result<Value, ApiError> {
        require_non_empty(&request.name, "name")?;
        require_non_empty(&request.email, "email")?;
        Ok(body_or_null(self.http.post("/account_users", request).await?))
    }

    pub async fn list_users(&self, query: &ListQuery) -> Result<PagedResult, ApiError> {
        self.list("/account_users", query).await
    }

    pub async fn show_user(&self, user_id: &str) -> Result<Value, ApiError> {
        self.show(&format!("/account_users/{user_id}")).await
    }

    pub async fn update_user(&self, user_id: &str, request: &UserUpdateRequest) -> Result<Value, ApiError> {
        let body = self
            .http
            .put(&format!("/account_users/{user_id}"), Some(request))
            .await?;
        Ok(body_or_confirmation(body, json!({"id": user_id})))
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<Value, ApiError> {
        self.delete(&format!("/account_users/{user_id}"), user_id).await
    }

    // Integrations

    pub async fn list_integrations(&self, query: &ListQuery) -> Result<PagedResult, ApiError> {
        self.list("/integrations", query).await
    }

    pub async fn show_integration(&self, integration_id: &str) -> Result<Value, ApiError> {
        self.show(&format!("/integrations/{integration_id}")).await
    }

    pub async fn update_integration(
        &self,
        integration_id: &str,
        request: &IntegrationUpdateRequest,
    ) -> Result<Value, ApiError> {
        let body = self
            .http
            .put(&format!("/integrations/{integration_id}"), Some(request))
            .await?;
        Ok(body_or_confirmation(body, json!({"id": integration_id})))
    }
}
