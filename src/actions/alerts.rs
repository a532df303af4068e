//! Alert action handlers.

use crate::{
    actions::{
        utils::{
            confirm_deletion, list_query, optional_string, optional_strings, print_confirmation,
            print_detail, print_list, required_string, response_id,
        },
        ActionContext, CliActionError,
    },
    commands::params::{
        PARAMETER_ALIAS, PARAMETER_BODY, PARAMETER_DESCRIPTION, PARAMETER_ID, PARAMETER_INCIDENT,
        PARAMETER_INCIDENT_MESSAGE, PARAMETER_INCIDENT_SEVERITY, PARAMETER_SEARCH,
        PARAMETER_STATUS, PARAMETER_TAG, PARAMETER_TEAM_ID, PARAMETER_TITLE, PARAMETER_URGENCY,
        PARAMETER_USER_ID,
    },
    context::ExecutionContext,
    fields::FieldMap,
    model::{AlertCreateRequest, AlertMeta, AlertUpdateRequest, CommentCreateRequest, Urgency},
    resolution_utils::resolve_alert_id,
};
use clap::ArgMatches;
use std::str::FromStr;
use tracing::trace;

/// Status an alert must have to be rejected
pub const REJECTABLE_STATUS: &str = "open";

fn alert_list_columns() -> FieldMap {
    FieldMap::new()
        .field("tiny_id", "ID")
        .field("title", "Title")
        .field("status", "Status")
}

fn alert_detail_fields() -> FieldMap {
    FieldMap::new()
        .field("id", "Alert ID")
        .field("tiny_id", "Number")
        .field("title", "Title")
        .field("description", "Description")
        .field("status", "Status")
        .field("urgency", "Urgency")
        .field("tags", "Tags")
        .field("thirdparty_id", "Alias")
        .field("created_at", "Created At")
}

fn comment_columns() -> FieldMap {
    FieldMap::new()
        .field("id", "ID")
        .field("body", "Comment")
        .field("created_at", "Created At")
}

fn urgency(sub_matches: &ArgMatches) -> Option<Urgency> {
    sub_matches
        .get_one::<String>(PARAMETER_URGENCY)
        .and_then(|u| Urgency::from_str(u).ok())
}

fn alert_meta(sub_matches: &ArgMatches) -> Option<AlertMeta> {
    let meta = AlertMeta {
        incident: sub_matches.get_flag(PARAMETER_INCIDENT).then_some(true),
        incident_severity: optional_string(sub_matches, PARAMETER_INCIDENT_SEVERITY),
        incident_message: optional_string(sub_matches, PARAMETER_INCIDENT_MESSAGE),
    };
    (!meta.is_empty()).then_some(meta)
}

pub async fn create_alert(ctx: &ExecutionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let request = AlertCreateRequest {
        description: optional_string(sub_matches, PARAMETER_DESCRIPTION),
        urgency: urgency(sub_matches).unwrap_or_default(),
        destination_team_ids: optional_strings(sub_matches, PARAMETER_TEAM_ID),
        destination_account_user_ids: optional_strings(sub_matches, PARAMETER_USER_ID),
        tags: optional_strings(sub_matches, PARAMETER_TAG),
        thirdparty_id: optional_string(sub_matches, PARAMETER_ALIAS),
        meta: alert_meta(sub_matches),
        ..AlertCreateRequest::new(required_string(sub_matches, PARAMETER_TITLE)?)
    };
    trace!("Creating alert {:?}", request);

    let alert = ctx.client.create_alert(&request).await.action("creating alert")?;
    print_confirmation(
        &format!("Alert created successfully: {}", response_id(&alert, "id")),
        &alert,
        &ctx.format,
    )
}

pub async fn list_alerts(ctx: &ExecutionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let mut query = list_query(sub_matches).search(optional_string(sub_matches, PARAMETER_SEARCH));
    if let Some(status) = optional_string(sub_matches, PARAMETER_STATUS) {
        query = query.status(status);
    }
    if let Some(alias) = optional_string(sub_matches, PARAMETER_ALIAS) {
        query = query.alias(alias);
    }

    let page = ctx.client.list_alerts(&query).await.action("listing alerts")?;
    print_list(&page, &alert_list_columns(), "alert", &ctx.format)
}

pub async fn show_alert(ctx: &ExecutionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let alert_id = required_string(sub_matches, PARAMETER_ID)?;
    let alert = ctx.client.show_alert(&alert_id).await.action("showing alert")?;
    print_detail(&alert_detail_fields(), &alert, &ctx.format)
}

pub async fn update_alert(ctx: &ExecutionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let alert_id = required_string(sub_matches, PARAMETER_ID)?;
    let request = AlertUpdateRequest {
        title: optional_string(sub_matches, PARAMETER_TITLE),
        description: optional_string(sub_matches, PARAMETER_DESCRIPTION),
        urgency: urgency(sub_matches),
        tags: optional_strings(sub_matches, PARAMETER_TAG),
    };

    let alert = ctx
        .client
        .update_alert(&alert_id, &request)
        .await
        .action("updating alert")?;
    print_confirmation(
        &format!("Alert updated successfully: {alert_id}"),
        &alert,
        &ctx.format,
    )
}

pub async fn delete_alert(ctx: &ExecutionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let alert_id = required_string(sub_matches, PARAMETER_ID)?;
    if !confirm_deletion(sub_matches, "alert", &alert_id)? {
        return Ok(());
    }

    let body = ctx.client.delete_alert(&alert_id).await.action("deleting alert")?;
    print_confirmation(
        &format!("Alert deleted successfully: {alert_id}"),
        &body,
        &ctx.format,
    )
}

/// Alert state changes reachable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Acknowledge,
    Reject,
    Resolve,
}

impl Transition {
    fn gerund(self) -> &'static str {
        match self {
            Transition::Acknowledge => "acknowledging",
            Transition::Reject => "rejecting",
            Transition::Resolve => "resolving",
        }
    }

    fn past(self) -> &'static str {
        match self {
            Transition::Acknowledge => "acknowledged",
            Transition::Reject => "rejected",
            Transition::Resolve => "resolved",
        }
    }

    /// Status filter applied when the alert is given by alias
    pub fn alias_status(self) -> Option<&'static str> {
        match self {
            Transition::Reject => Some(REJECTABLE_STATUS),
            Transition::Acknowledge | Transition::Resolve => None,
        }
    }
}

pub async fn transition_alert(
    ctx: &ExecutionContext,
    sub_matches: &ArgMatches,
    transition: Transition,
) -> Result<(), CliActionError> {
    let action = format!("{} alert", transition.gerund());
    let alert_id = resolve_alert_id(
        &ctx.client,
        sub_matches.get_one::<String>(PARAMETER_ID),
        sub_matches.get_one::<String>(PARAMETER_ALIAS),
        transition.alias_status(),
    )
    .await
    .action(&action)?;

    let body = match transition {
        Transition::Acknowledge => ctx.client.acknowledge_alert(&alert_id).await,
        Transition::Reject => ctx.client.reject_alert(&alert_id).await,
        Transition::Resolve => ctx.client.resolve_alert(&alert_id).await,
    }
    .action(&action)?;

    print_confirmation(
        &format!("Alert {} successfully: {alert_id}", transition.past()),
        &body,
        &ctx.format,
    )
}

pub async fn comment_on_alert(ctx: &ExecutionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let alert_id = resolve_alert_id(
        &ctx.client,
        sub_matches.get_one::<String>(PARAMETER_ID),
        sub_matches.get_one::<String>(PARAMETER_ALIAS),
        None,
    )
    .await
    .action("adding comment")?;

    let request = CommentCreateRequest {
        body: required_string(sub_matches, PARAMETER_BODY)?,
    };
    let comment = ctx
        .client
        .create_comment(&alert_id, &request)
        .await
        .action("adding comment")?;
    print_confirmation(
        &format!("Comment added successfully to alert {alert_id}"),
        &comment,
        &ctx.format,
    )
}

pub async fn list_comments(ctx: &ExecutionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let alert_id = required_string(sub_matches, PARAMETER_ID)?;
    let page = ctx
        .client
        .list_comments(&alert_id, &list_query(sub_matches))
        .await
        .action("listing comments")?;
    print_list(&page, &comment_columns(), "comment", &ctx.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cli_command;
    use serde_json::json;

    fn alert_matches(args: &[&str]) -> ArgMatches {
        let matches = cli_command()
            .try_get_matches_from(["pagertree", "alerts"].iter().chain(args.iter()).copied())
            .unwrap();
        let (_, alerts) = matches.subcommand().unwrap();
        alerts.subcommand().unwrap().1.clone()
    }

    #[test]
    fn test_only_reject_filters_alias_lookup_by_status() {
        assert_eq!(Transition::Reject.alias_status(), Some("open"));
        assert_eq!(Transition::Acknowledge.alias_status(), None);
        assert_eq!(Transition::Resolve.alias_status(), None);
    }

    #[test]
    fn test_alert_meta_only_when_given() {
        let plain = alert_matches(&["create", "--title", "Disk full"]);
        assert_eq!(alert_meta(&plain), None);

        let incident = alert_matches(&["create", "--title", "Disk full", "--incident", "--incident-severity", "SEV-1"]);
        assert_eq!(
            alert_meta(&incident),
            Some(AlertMeta {
                incident: Some(true),
                incident_severity: Some("SEV-1".to_string()),
                incident_message: None,
            })
        );
    }

    #[test]
    fn test_default_urgency_is_medium() {
        let matches = alert_matches(&["create", "--title", "Disk full"]);
        assert_eq!(urgency(&matches), Some(Urgency::Medium));
        let matches = alert_matches(&["update", "01ABC"]);
        assert_eq!(urgency(&matches), None);
    }

    #[test]
    fn test_alert_list_columns() {
        let alert = json!({"id": "01ABC", "tiny_id": 7, "title": "Disk full", "status": "open"});
        assert_eq!(alert_list_columns().values(&alert), vec!["7", "Disk full", "open"]);
    }
}
