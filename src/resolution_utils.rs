//! Resolution of alert identifiers given on the command line.
//!
//! Alert actions accept either the alert's ID or its alias (the
//! `thirdparty_id` it was created with). Aliases are looked up through the
//! alert list endpoint before the action itself is sent.

use crate::model::ListQuery;
use crate::pagertree::{ApiError, PagerTreeClient};
use serde_json::Value;
use tracing::debug;

/// Extract the `id` of a list item, accepting both string and numeric ids
pub fn item_id(item: &Value) -> Option<String> {
    match item.get("id")? {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

/// Resolve an alert ID from either an explicit ID or an alias.
///
/// When an alias is given, only the first matching alert is used. `status`
/// narrows the alias search, e.g. to `open` alerts for a rejection.
///
/// # Errors
///
/// * `ApiError::Validation` if neither an ID nor an alias is given
/// * `ApiError::NotFound` if no alert carries the alias; no further request
///   is made in that case
pub async fn resolve_alert_id(
    client: &PagerTreeClient,
    id: Option<&String>,
    alias: Option<&String>,
    status: Option<&str>,
) -> Result<String, ApiError> {
    if let Some(id) = id {
        return Ok(id.clone());
    }

    let alias = alias.ok_or_else(|| {
        ApiError::Validation("either an alert ID or an alias must be provided".to_string())
    })?;

    let mut query = ListQuery::page(1, 0).alias(alias.as_str());
    if let Some(status) = status {
        query = query.status(status);
    }

    let page = client.list_alerts(&query).await?;
    let id = page
        .data
        .first()
        .and_then(item_id)
        .ok_or_else(|| ApiError::NotFound(format!("no alert found with alias \"{alias}\"")))?;

    debug!("Alias \"{}\" resolved to alert {}", alias, id);
    Ok(id)
}
