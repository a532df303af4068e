//! Helpers shared by the action handlers.

use crate::{
    actions::CliActionError,
    commands::params::{PARAMETER_FORCE, PARAMETER_LIMIT, PARAMETER_OFFSET},
    error_utils,
    fields::FieldMap,
    format::{DetailView, Formattable, ListView, OutputFormat},
    model::{ListQuery, DEFAULT_LIMIT},
    pagertree::{ApiError, PagerTreeClient},
    pagination::PagedResult,
};
use clap::ArgMatches;
use futures::{stream, StreamExt};
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// Bound on concurrent account user lookups
pub const MEMBER_FETCH_CONCURRENCY: usize = 4;

/// Columns used wherever account users are listed next to another resource
pub fn member_columns() -> FieldMap {
    FieldMap::new()
        .field("id", "User ID")
        .field("user.name", "Name")
        .field("user.emails[primary=true].email", "Primary Email")
        .field("user.phones[primary=true].phone", "Primary Phone")
}

/// Pagination parameters of a list command
pub fn list_query(sub_matches: &ArgMatches) -> ListQuery {
    let limit = sub_matches
        .get_one::<u32>(PARAMETER_LIMIT)
        .copied()
        .unwrap_or(DEFAULT_LIMIT);
    let offset = sub_matches
        .get_one::<u32>(PARAMETER_OFFSET)
        .copied()
        .unwrap_or_default();
    ListQuery::page(limit, offset)
}

pub fn optional_string(sub_matches: &ArgMatches, name: &str) -> Option<String> {
    sub_matches.get_one::<String>(name).cloned()
}

/// All values of a repeatable option, or `None` when it was not given
pub fn optional_strings(sub_matches: &ArgMatches, name: &str) -> Option<Vec<String>> {
    sub_matches
        .get_many::<String>(name)
        .map(|values| values.cloned().collect())
}

pub fn required_string(sub_matches: &ArgMatches, name: &str) -> Result<String, CliActionError> {
    optional_string(sub_matches, name)
        .ok_or_else(|| CliActionError::MissingRequiredArgument(name.to_string()))
}

pub fn print_list(
    page: &PagedResult,
    columns: &FieldMap,
    kind: &str,
    format: &OutputFormat,
) -> Result<(), CliActionError> {
    let view = ListView {
        page,
        columns,
        kind,
    };
    println!("{}", view.format(format)?);
    Ok(())
}

pub fn print_detail(fields: &FieldMap, item: &Value, format: &OutputFormat) -> Result<(), CliActionError> {
    println!("{}", DetailView::new(fields, item).format(format)?);
    Ok(())
}

/// `id` of a response body as display text
pub fn response_id(body: &Value, key: &str) -> String {
    crate::fields::format_value(body.get(key))
}

/// Print the outcome of a mutating command: the confirmation message, or the
/// response body itself when JSON output was requested.
pub fn print_confirmation(message: &str, body: &Value, format: &OutputFormat) -> Result<(), CliActionError> {
    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(body).map_err(crate::format::FormattingError::from)?
        ),
        OutputFormat::Table | OutputFormat::Csv => println!("{message}"),
    }
    Ok(())
}

/// Ask before deleting unless `--force` was given.
///
/// Returns `false` when the user declined; the caller then does nothing.
pub fn confirm_deletion(sub_matches: &ArgMatches, kind: &str, id: &str) -> Result<bool, CliActionError> {
    if sub_matches.get_flag(PARAMETER_FORCE) {
        return Ok(true);
    }

    let confirmed = inquire::Confirm::new(&format!("Are you sure you want to delete {kind} {id}?"))
        .with_default(false)
        .prompt()?;

    if !confirmed {
        println!("Deletion cancelled.");
    }
    Ok(confirmed)
}

/// What the looked up account users are to the resource being shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum MemberRole {
    Member,
    Admin,
    /// On-call attendee
    User,
}

/// A failed account user lookup
#[derive(Debug)]
pub struct LookupFailure {
    pub id: String,
    pub role: MemberRole,
    pub error: ApiError,
}

impl fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Could not fetch details for {} {}: {}",
            self.role, self.id, self.error
        )
    }
}

/// Account users fetched for a list of ids
#[derive(Debug, Default)]
pub struct MemberLookup {
    /// Successful lookups, in the order of the requested ids
    pub rows: Vec<Value>,
    pub failures: Vec<LookupFailure>,
}

impl MemberLookup {
    pub fn report_failures(&self) {
        for failure in &self.failures {
            error_utils::report_warning(failure);
        }
    }
}

/// Fetch the account users behind `ids`, reported as `role` on failure.
///
/// Up to [`MEMBER_FETCH_CONCURRENCY`] requests are in flight at once. A
/// failed lookup does not fail the whole call; it is recorded in
/// [`MemberLookup::failures`] and the row is left out.
pub async fn fetch_account_users(
    client: &PagerTreeClient,
    ids: &[String],
    role: MemberRole,
) -> MemberLookup {
    debug!("Fetching {} account users ({})", ids.len(), role);

    let results: Vec<(String, Result<Value, ApiError>)> = stream::iter(ids.iter().cloned())
        .map(|id| async move {
            let result = client.show_user(&id).await;
            (id, result)
        })
        .buffered(MEMBER_FETCH_CONCURRENCY)
        .collect()
        .await;

    let mut lookup = MemberLookup::default();
    for (id, result) in results {
        match result {
            Ok(user) => lookup.rows.push(user),
            Err(error) => lookup.failures.push(LookupFailure { id, role, error }),
        }
    }
    lookup
}

/// Id strings of an array member of `item`, e.g. `member_account_user_ids`
pub fn id_list(item: &Value, key: &str) -> Vec<String> {
    match item.get(key) {
        Some(Value::Array(ids)) => ids
            .iter()
            .filter_map(|id| match id {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}
