//! Alert command definitions.

use crate::commands::params::{
    alert_id_or_alias_parameters, force_parameter, id_parameter, limit_parameter,
    multi_parameter, offset_parameter, search_parameter, text_parameter, COMMAND_ACKNOWLEDGE,
    COMMAND_ALERTS, COMMAND_COMMENT, COMMAND_COMMENTS, COMMAND_CREATE, COMMAND_DELETE,
    COMMAND_LIST, COMMAND_REJECT, COMMAND_RESOLVE, COMMAND_SHOW, COMMAND_UPDATE, PARAMETER_ALIAS,
    PARAMETER_BODY, PARAMETER_DESCRIPTION, PARAMETER_INCIDENT, PARAMETER_INCIDENT_MESSAGE,
    PARAMETER_INCIDENT_SEVERITY, PARAMETER_STATUS, PARAMETER_TAG, PARAMETER_TEAM_ID,
    PARAMETER_TITLE, PARAMETER_URGENCY, PARAMETER_USER_ID,
};
use crate::model::Urgency;
use clap::{Arg, ArgAction, Command};

fn urgency_parameter() -> Arg {
    Arg::new(PARAMETER_URGENCY)
        .long(PARAMETER_URGENCY)
        .num_args(1)
        .help("Urgency of the alert")
        .value_parser(Urgency::names())
}

/// Create the alerts command with all its subcommands.
pub fn alerts_command() -> Command {
    Command::new(COMMAND_ALERTS)
        .about("Commands for managing PagerTree alerts")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_CREATE)
                .about("Create a new alert")
                .arg(text_parameter(PARAMETER_TITLE, "Title of the alert").required(true))
                .arg(text_parameter(PARAMETER_DESCRIPTION, "Description of the alert"))
                .arg(urgency_parameter().default_value("medium"))
                .arg(multi_parameter(PARAMETER_TEAM_ID, "Team IDs to route the alert to"))
                .arg(multi_parameter(PARAMETER_USER_ID, "Account user IDs to route the alert to"))
                .arg(multi_parameter(PARAMETER_TAG, "Tags for the alert"))
                .arg(text_parameter(PARAMETER_ALIAS, "Alias (thirdparty_id) for later lookups"))
                .arg(
                    Arg::new(PARAMETER_INCIDENT)
                        .long(PARAMETER_INCIDENT)
                        .action(ArgAction::SetTrue)
                        .help("Mark the alert as an incident"),
                )
                .arg(text_parameter(PARAMETER_INCIDENT_SEVERITY, "Incident severity, e.g. SEV-1"))
                .arg(text_parameter(PARAMETER_INCIDENT_MESSAGE, "Incident message")),
        )
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List alerts with pagination")
                .visible_alias("ls")
                .arg(limit_parameter("alert"))
                .arg(offset_parameter())
                .arg(text_parameter(PARAMETER_STATUS, "Only alerts with this status"))
                .arg(search_parameter("Search alerts by text"))
                .arg(text_parameter(PARAMETER_ALIAS, "Only alerts with this alias (thirdparty_id)")),
        )
        .subcommand(
            Command::new(COMMAND_SHOW)
                .about("Show details of an alert")
                .arg(id_parameter("alert")),
        )
        .subcommand(
            Command::new(COMMAND_UPDATE)
                .about("Update an alert")
                .arg(id_parameter("alert"))
                .arg(text_parameter(PARAMETER_TITLE, "New title"))
                .arg(text_parameter(PARAMETER_DESCRIPTION, "New description"))
                .arg(urgency_parameter())
                .arg(multi_parameter(PARAMETER_TAG, "Replace the alert's tags")),
        )
        .subcommand(
            Command::new(COMMAND_DELETE)
                .about("Delete an alert")
                .visible_alias("rm")
                .arg(id_parameter("alert"))
                .arg(force_parameter("alert")),
        )
        .subcommand(
            Command::new(COMMAND_ACKNOWLEDGE)
                .about("Acknowledge an alert")
                .visible_alias("ack")
                .args(alert_id_or_alias_parameters()),
        )
        .subcommand(
            Command::new(COMMAND_REJECT)
                .about("Reject an open alert")
                .args(alert_id_or_alias_parameters()),
        )
        .subcommand(
            Command::new(COMMAND_RESOLVE)
                .about("Resolve an alert")
                .args(alert_id_or_alias_parameters()),
        )
        .subcommand(
            Command::new(COMMAND_COMMENT)
                .about("Add a comment to an alert")
                .args(alert_id_or_alias_parameters())
                .arg(text_parameter(PARAMETER_BODY, "Comment text").required(true)),
        )
        .subcommand(
            Command::new(COMMAND_COMMENTS)
                .about("List the comments of an alert")
                .arg(id_parameter("alert"))
                .arg(limit_parameter("comment"))
                .arg(offset_parameter()),
        )
}
