//! Shared command parameters for all CLI commands.
//!
//! Command and parameter names live here so that the definitions in the
//! sibling modules and the handlers in `actions` agree on them.

use crate::format::OutputFormat;
use crate::model::{DEFAULT_LIMIT, MAX_LIMIT};
use clap::{value_parser, Arg, ArgAction};
use std::path::PathBuf;

// Resource groups
pub const COMMAND_ALERTS: &str = "alerts";
pub const COMMAND_BROADCASTS: &str = "broadcasts";
pub const COMMAND_TEAMS: &str = "teams";
pub const COMMAND_USERS: &str = "users";
pub const COMMAND_INTEGRATIONS: &str = "integrations";
pub const COMMAND_CONFIG: &str = "config";

// CRUD operations
pub const COMMAND_CREATE: &str = "create";
pub const COMMAND_LIST: &str = "list";
pub const COMMAND_SHOW: &str = "show";
pub const COMMAND_UPDATE: &str = "update";
pub const COMMAND_DELETE: &str = "delete";

// Alert actions
pub const COMMAND_ACKNOWLEDGE: &str = "acknowledge";
pub const COMMAND_REJECT: &str = "reject";
pub const COMMAND_RESOLVE: &str = "resolve";
pub const COMMAND_COMMENT: &str = "comment";
pub const COMMAND_COMMENTS: &str = "comments";

// Team actions
pub const COMMAND_CURRENT_ONCALL: &str = "current-oncall";
pub const COMMAND_TEAM_ALERTS: &str = "alerts";

// Integration actions
pub const COMMAND_ENABLE: &str = "enable";
pub const COMMAND_DISABLE: &str = "disable";

// Config actions
pub const COMMAND_PATH: &str = "path";

// Parameter names
pub const PARAMETER_CONFIG: &str = "config";
pub const PARAMETER_VERBOSE: &str = "verbose";
pub const PARAMETER_FORMAT: &str = "format";
pub const PARAMETER_LIMIT: &str = "limit";
pub const PARAMETER_OFFSET: &str = "offset";
pub const PARAMETER_ID: &str = "id";
pub const PARAMETER_ALIAS: &str = "alias";
pub const PARAMETER_FORCE: &str = "force";
pub const PARAMETER_SEARCH: &str = "search";
pub const PARAMETER_STATUS: &str = "status";
pub const PARAMETER_TITLE: &str = "title";
pub const PARAMETER_DESCRIPTION: &str = "description";
pub const PARAMETER_URGENCY: &str = "urgency";
pub const PARAMETER_TAG: &str = "tag";
pub const PARAMETER_TEAM_ID: &str = "team-id";
pub const PARAMETER_USER_ID: &str = "user-id";
pub const PARAMETER_INCIDENT: &str = "incident";
pub const PARAMETER_INCIDENT_SEVERITY: &str = "incident-severity";
pub const PARAMETER_INCIDENT_MESSAGE: &str = "incident-message";
pub const PARAMETER_BODY: &str = "body";
pub const PARAMETER_NAME: &str = "name";
pub const PARAMETER_NOTES: &str = "notes";
pub const PARAMETER_MEMBER_ID: &str = "member-id";
pub const PARAMETER_ADMIN_ID: &str = "admin-id";
pub const PARAMETER_EMAIL: &str = "email";
pub const PARAMETER_ROLE: &str = "role";
pub const PARAMETER_ENABLED: &str = "enabled";
pub const PARAMETER_DISABLED: &str = "disabled";

pub fn config_file_parameter() -> Arg {
    Arg::new(PARAMETER_CONFIG)
        .long(PARAMETER_CONFIG)
        .short('c')
        .num_args(1)
        .global(true)
        .help("Path to a YAML configuration file with api_key and base_url")
        .value_parser(value_parser!(PathBuf))
}

pub fn verbose_parameter() -> Arg {
    Arg::new(PARAMETER_VERBOSE)
        .short('v')
        .long(PARAMETER_VERBOSE)
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Enable verbose output for debugging")
}

/// Output format, shared by every command that prints data.
pub fn format_parameter() -> Arg {
    Arg::new(PARAMETER_FORMAT)
        .short('f')
        .long(PARAMETER_FORMAT)
        .num_args(1)
        .env("PAGERTREE_FORMAT")
        .default_value("table")
        .global(true)
        .help("Output data format")
        .value_parser(OutputFormat::names())
}

pub fn limit_parameter(kind: &str) -> Arg {
    Arg::new(PARAMETER_LIMIT)
        .long(PARAMETER_LIMIT)
        .num_args(1)
        .default_value(DEFAULT_LIMIT.to_string())
        .help(format!("Number of {kind}s per page"))
        .value_parser(value_parser!(u32).range(1..=i64::from(MAX_LIMIT)))
}

pub fn offset_parameter() -> Arg {
    Arg::new(PARAMETER_OFFSET)
        .long(PARAMETER_OFFSET)
        .num_args(1)
        .default_value("0")
        .help("Starting point for pagination")
        .value_parser(value_parser!(u32))
}

pub fn search_parameter(help: &'static str) -> Arg {
    Arg::new(PARAMETER_SEARCH)
        .long(PARAMETER_SEARCH)
        .num_args(1)
        .help(help)
}

/// Positional resource id
pub fn id_parameter(kind: &str) -> Arg {
    Arg::new(PARAMETER_ID)
        .required(true)
        .num_args(1)
        .value_name(format!("{}_ID", kind.to_uppercase()))
        .help(format!("ID of the {kind}"))
}

/// Positional alert id that may be replaced by `--alias`
pub fn alert_id_or_alias_parameters() -> [Arg; 2] {
    [
        Arg::new(PARAMETER_ID)
            .required_unless_present(PARAMETER_ALIAS)
            .num_args(1)
            .value_name("ALERT_ID")
            .help("ID of the alert"),
        Arg::new(PARAMETER_ALIAS)
            .long(PARAMETER_ALIAS)
            .num_args(1)
            .conflicts_with(PARAMETER_ID)
            .help("Look the alert up by its alias (thirdparty_id) instead of its ID"),
    ]
}

pub fn force_parameter(kind: &str) -> Arg {
    Arg::new(PARAMETER_FORCE)
        .long(PARAMETER_FORCE)
        .action(ArgAction::SetTrue)
        .help(format!("Delete the {kind} without confirmation"))
}

/// Repeatable string option, e.g. `--team-id a --team-id b`
pub fn multi_parameter(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .num_args(1)
        .action(ArgAction::Append)
        .help(help)
}

pub fn text_parameter(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).num_args(1).help(help)
}
