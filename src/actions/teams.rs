//! Team action handlers.
//!
//! `teams show` and `teams current-oncall` look up every referenced account
//! user. Lookups that fail are reported as warnings and left out of the
//! tables; the command itself still succeeds.

use crate::{
    actions::{
        utils::{
            confirm_deletion, fetch_account_users, id_list, list_query, member_columns,
            optional_string, optional_strings, print_confirmation, print_list, required_string,
            response_id, MemberRole,
        },
        ActionContext, CliActionError,
    },
    commands::params::{
        PARAMETER_ADMIN_ID, PARAMETER_ID, PARAMETER_MEMBER_ID, PARAMETER_NAME, PARAMETER_NOTES,
        PARAMETER_SEARCH,
    },
    context::ExecutionContext,
    fields::{format_value, FieldMap},
    format::{render_table, DetailView, Formattable, FormattingError, OutputFormat},
    model::TeamRequest,
};
use clap::ArgMatches;
use serde_json::{json, Value};

fn team_list_columns() -> FieldMap {
    FieldMap::new().field("id", "ID").field("name", "Name")
}

fn team_detail_fields() -> FieldMap {
    FieldMap::new()
        .field("id", "Team ID")
        .field("name", "Name")
        .field("notes", "Notes")
        .field("created_at", "Created At")
        .field("updated_at", "Updated At")
}

fn team_alert_columns() -> FieldMap {
    FieldMap::new()
        .field("id", "ID")
        .field("title", "Title")
        .field("status", "Status")
}

fn team_request(sub_matches: &ArgMatches) -> TeamRequest {
    TeamRequest {
        name: optional_string(sub_matches, PARAMETER_NAME),
        notes: optional_string(sub_matches, PARAMETER_NOTES),
        member_account_user_ids: optional_strings(sub_matches, PARAMETER_MEMBER_ID),
        admin_account_user_ids: optional_strings(sub_matches, PARAMETER_ADMIN_ID),
    }
}

fn member_section(title: &str, users: &[Value]) -> String {
    if users.is_empty() {
        return format!("{title}: None");
    }
    let columns = member_columns();
    let rows: Vec<Vec<String>> = users.iter().map(|user| columns.values(user)).collect();
    format!("{title}:\n{}", render_table(&columns.labels(), &rows))
}

/// A team with its resolved members and admins
#[derive(Debug, Clone)]
pub struct TeamView {
    pub team: Value,
    pub members: Vec<Value>,
    pub admins: Vec<Value>,
}

impl Formattable for TeamView {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError> {
        match f {
            OutputFormat::Table => Ok([
                format!(
                    "Team Details:\n{}",
                    DetailView::new(&team_detail_fields(), &self.team).format(f)?
                ),
                member_section("Team Members", &self.members),
                member_section("Team Admins", &self.admins),
            ]
            .join("\n\n")),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "team": self.team,
                "members": self.members,
                "admins": self.admins,
            }))?),
            OutputFormat::Csv => {
                let columns = member_columns();
                let mut headers = vec!["Role".to_string()];
                headers.extend(columns.labels());

                let mut wtr = csv::Writer::from_writer(vec![]);
                wtr.write_record(&headers)?;
                for (role, users) in [("member", &self.members), ("admin", &self.admins)] {
                    for user in users {
                        let mut record = vec![role.to_string()];
                        record.extend(columns.values(user));
                        wtr.write_record(&record)?;
                    }
                }
                Ok(String::from_utf8(wtr.into_inner()?)?)
            }
        }
    }
}

/// One active on-call schedule layer with its resolved attendees
#[derive(Debug, Clone)]
pub struct OncallLayer {
    pub layer: String,
    pub start_time: String,
    pub end_time: String,
    pub attendees: Vec<Value>,
}

impl OncallLayer {
    fn render_table(&self) -> String {
        let heading = format!("LAYER {} ({} to {})", self.layer, self.start_time, self.end_time);
        if self.attendees.is_empty() {
            return format!("*** {heading}: No users on-call ***");
        }
        let columns = member_columns();
        let rows: Vec<Vec<String>> = self.attendees.iter().map(|user| columns.values(user)).collect();
        format!(
            "*** {heading}: ***\n{}\n*** End of layer {} ***",
            render_table(&columns.labels(), &rows),
            self.layer
        )
    }
}

/// Current on-call layers of a team
#[derive(Debug, Clone)]
pub struct OncallView {
    pub team_id: String,
    pub layers: Vec<OncallLayer>,
}

impl Formattable for OncallView {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError> {
        match f {
            OutputFormat::Table => {
                if self.layers.is_empty() {
                    return Ok(format!("No one is scheduled on call for team {}", self.team_id));
                }
                Ok(self
                    .layers
                    .iter()
                    .map(OncallLayer::render_table)
                    .collect::<Vec<_>>()
                    .join("\n\n"))
            }
            OutputFormat::Json => {
                let layers: Vec<Value> = self
                    .layers
                    .iter()
                    .map(|layer| {
                        json!({
                            "layer": layer.layer,
                            "start_time": layer.start_time,
                            "end_time": layer.end_time,
                            "attendees": layer.attendees,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&layers)?)
            }
            OutputFormat::Csv => {
                let columns = member_columns();
                let mut headers = vec!["Layer".to_string(), "Start".to_string(), "End".to_string()];
                headers.extend(columns.labels());

                let mut wtr = csv::Writer::from_writer(vec![]);
                wtr.write_record(&headers)?;
                for layer in &self.layers {
                    for user in &layer.attendees {
                        let mut record = vec![
                            layer.layer.clone(),
                            layer.start_time.clone(),
                            layer.end_time.clone(),
                        ];
                        record.extend(columns.values(user));
                        wtr.write_record(&record)?;
                    }
                }
                Ok(String::from_utf8(wtr.into_inner()?)?)
            }
        }
    }
}

/// Attendee ids of a schedule layer, in order
fn attendee_ids(layer: &Value) -> Vec<String> {
    match layer.get("attendees") {
        Some(Value::Array(attendees)) => attendees
            .iter()
            .filter_map(|attendee| match attendee.get("attendee_id") {
                Some(Value::String(id)) if !id.is_empty() => Some(id.clone()),
                Some(Value::Number(id)) => Some(id.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

pub async fn create_team(ctx: &ExecutionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let request = team_request(sub_matches);
    let team = ctx.client.create_team(&request).await.action("creating team")?;
    print_confirmation(
        &format!("Team created successfully: {}", response_id(&team, "id")),
        &team,
        &ctx.format,
    )
}

pub async fn list_teams(ctx: &ExecutionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let query = list_query(sub_matches).search(optional_string(sub_matches, PARAMETER_SEARCH));
    let page = ctx.client.list_teams(&query).await.action("listing teams")?;
    print_list(&page, &team_list_columns(), "team", &ctx.format)
}

pub async fn show_team(ctx: &ExecutionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let team_id = required_string(sub_matches, PARAMETER_ID)?;
    let team = ctx.client.show_team(&team_id).await.action("showing team")?;

    let member_ids = id_list(&team, "member_account_user_ids");
    let members = fetch_account_users(&ctx.client, &member_ids, MemberRole::Member).await;
    members.report_failures();
    let admin_ids = id_list(&team, "admin_account_user_ids");
    let admins = fetch_account_users(&ctx.client, &admin_ids, MemberRole::Admin).await;
    admins.report_failures();

    let view = TeamView {
        team,
        members: members.rows,
        admins: admins.rows,
    };
    println!("{}", view.format(&ctx.format)?);
    Ok(())
}

pub async fn update_team(ctx: &ExecutionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let team_id = required_string(sub_matches, PARAMETER_ID)?;
    let team = ctx
        .client
        .update_team(&team_id, &team_request(sub_matches))
        .await
        .action("updating team")?;
    print_confirmation(
        &format!("Team updated successfully: {team_id}"),
        &team,
        &ctx.format,
    )
}

pub async fn delete_team(ctx: &ExecutionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let team_id = required_string(sub_matches, PARAMETER_ID)?;
    if !confirm_deletion(sub_matches, "team", &team_id)? {
        return Ok(());
    }

    let body = ctx.client.delete_team(&team_id).await.action("deleting team")?;
    print_confirmation(
        &format!("Team deleted successfully: {team_id}"),
        &body,
        &ctx.format,
    )
}

pub async fn current_oncall(ctx: &ExecutionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let team_id = required_string(sub_matches, PARAMETER_ID)?;
    let schedules = ctx
        .client
        .team_current_oncall(&team_id)
        .await
        .action("showing current on-call users")?;

    let mut layers = Vec::with_capacity(schedules.len());
    for schedule in &schedules {
        let attendees = fetch_account_users(&ctx.client, &attendee_ids(schedule), MemberRole::User).await;
        attendees.report_failures();
        layers.push(OncallLayer {
            layer: format_value(schedule.get("layer")),
            start_time: format_value(schedule.get("start_time")),
            end_time: format_value(schedule.get("end_time")),
            attendees: attendees.rows,
        });
    }

    let view = OncallView { team_id, layers };
    println!("{}", view.format(&ctx.format)?);
    Ok(())
}

pub async fn team_alerts(ctx: &ExecutionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let team_id = required_string(sub_matches, PARAMETER_ID)?;
    let page = ctx
        .client
        .team_alerts(&team_id, &list_query(sub_matches))
        .await
        .action("listing team alerts")?;
    print_list(&page, &team_alert_columns(), "alert", &ctx.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str) -> Value {
        json!({
            "id": id,
            "user": {"name": name, "emails": [{"email": format!("{id}@x.io"), "primary": true}]}
        })
    }

    #[test]
    fn test_attendee_ids() {
        let layer = json!({"layer": 1, "attendees": [{"attendee_id": "u1"}, {"attendee_type": "Team"}, {"attendee_id": "u3"}]});
        assert_eq!(attendee_ids(&layer), vec!["u1", "u3"]);
        assert!(attendee_ids(&json!({"layer": 2})).is_empty());
    }

    #[test]
    fn test_team_view_table_sections() {
        let view = TeamView {
            team: json!({"id": "t1", "name": "Ops"}),
            members: vec![user("u1", "Ada")],
            admins: vec![],
        };
        let output = view.format(&OutputFormat::Table).unwrap();

        assert!(output.starts_with("Team Details:\n"));
        assert!(output.contains("| Notes      | N/A"));
        assert!(output.contains("Team Members:\n| User ID | Name | Primary Email | Primary Phone |"));
        assert!(output.contains("| u1      | Ada  | u1@x.io       | N/A           |"));
        assert!(output.ends_with("Team Admins: None"));
    }

    #[test]
    fn test_oncall_view_layers() {
        let view = OncallView {
            team_id: "t1".to_string(),
            layers: vec![
                OncallLayer {
                    layer: "1".to_string(),
                    start_time: "08:00".to_string(),
                    end_time: "16:00".to_string(),
                    attendees: vec![user("u1", "Ada")],
                },
                OncallLayer {
                    layer: "2".to_string(),
                    start_time: "16:00".to_string(),
                    end_time: "00:00".to_string(),
                    attendees: vec![],
                },
            ],
        };
        let output = view.format(&OutputFormat::Table).unwrap();
        assert!(output.contains("*** LAYER 1 (08:00 to 16:00): ***"));
        assert!(output.contains("*** End of layer 1 ***"));
        assert!(output.contains("*** LAYER 2 (16:00 to 00:00): No users on-call ***"));

        let empty = OncallView {
            team_id: "t1".to_string(),
            layers: vec![],
        };
        assert_eq!(
            empty.format(&OutputFormat::Table).unwrap(),
            "No one is scheduled on call for team t1"
        );
    }
}
