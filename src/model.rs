//! Request payloads and query parameters for the PagerTree API.
//!
//! Responses are kept as raw JSON trees; only outgoing data is typed. Every
//! optional field is skipped during serialization when it is absent, so the
//! API never receives explicit `null`s for parameters the user did not give.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Alert urgency accepted by the API
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Urgency {
    Silent,
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Urgency {
    pub fn names() -> Vec<String> {
        Urgency::iter().map(|u| u.to_string()).collect()
    }
}

/// Account user role
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserRole {
    Admin,
    Billing,
    Broadcaster,
    Communicator,
}

impl UserRole {
    pub fn names() -> Vec<String> {
        UserRole::iter().map(|r| r.to_string()).collect()
    }
}

/// Incident metadata attached to an alert
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AlertMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_message: Option<String>,
}

impl AlertMeta {
    pub fn is_empty(&self) -> bool {
        self.incident.is_none() && self.incident_severity.is_none() && self.incident_message.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AlertCreateRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub urgency: Urgency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_team_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_account_user_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thirdparty_id: Option<String>,
    #[serde(skip_serializing_if = "meta_is_absent")]
    pub meta: Option<AlertMeta>,
}

fn meta_is_absent(meta: &Option<AlertMeta>) -> bool {
    meta.as_ref().map_or(true, AlertMeta::is_empty)
}

impl AlertCreateRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AlertUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentCreateRequest {
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BroadcastCreateRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_account_user_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_team_ids: Option<Vec<String>>,
}

/// Body for both team creation and team updates
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_account_user_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_account_user_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserCreateRequest {
    pub name: String,
    pub email: String,
    pub roles: BTreeMap<UserRole, bool>,
    pub team_ids: Vec<String>,
}

impl UserCreateRequest {
    pub fn with_roles(mut self, roles: impl IntoIterator<Item = UserRole>) -> Self {
        self.roles = roles.into_iter().map(|role| (role, true)).collect();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IntegrationUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// Pagination and filter parameters shared by every list endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListQuery {
    pub limit: u32,
    pub offset: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thirdparty_id: Option<String>,
    /// Sent as `1`/`0`, which is what the API expects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<u8>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
            status: None,
            q: None,
            thirdparty_id: None,
            enabled: None,
        }
    }
}

impl ListQuery {
    pub fn page(limit: u32, offset: u32) -> Self {
        Self {
            limit: limit.clamp(1, MAX_LIMIT),
            offset,
            ..Default::default()
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn search(mut self, q: Option<String>) -> Self {
        self.q = q.filter(|q| !q.is_empty());
        self
    }

    pub fn alias(mut self, thirdparty_id: impl Into<String>) -> Self {
        self.thirdparty_id = Some(thirdparty_id.into());
        self
    }

    pub fn enabled(mut self, enabled: Option<bool>) -> Self {
        self.enabled = enabled.map(u8::from);
        self
    }
}
