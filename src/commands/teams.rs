//! Team command definitions.

use crate::commands::params::{
    force_parameter, id_parameter, limit_parameter, multi_parameter, offset_parameter,
    search_parameter, text_parameter, COMMAND_CREATE, COMMAND_CURRENT_ONCALL, COMMAND_DELETE,
    COMMAND_LIST, COMMAND_SHOW, COMMAND_TEAMS, COMMAND_TEAM_ALERTS, COMMAND_UPDATE,
    PARAMETER_ADMIN_ID, PARAMETER_MEMBER_ID, PARAMETER_NAME, PARAMETER_NOTES,
};
use clap::Command;

/// Create the teams command with all its subcommands.
pub fn teams_command() -> Command {
    Command::new(COMMAND_TEAMS)
        .about("Commands for managing PagerTree teams")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_CREATE)
                .about("Create a new team")
                .arg(text_parameter(PARAMETER_NAME, "Name of the team").required(true))
                .arg(text_parameter(PARAMETER_NOTES, "Notes for the team"))
                .arg(multi_parameter(PARAMETER_MEMBER_ID, "Account user IDs to add as team members"))
                .arg(multi_parameter(PARAMETER_ADMIN_ID, "Account user IDs to add as team admins")),
        )
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List teams with pagination")
                .visible_alias("ls")
                .arg(limit_parameter("team"))
                .arg(offset_parameter())
                .arg(search_parameter("Search for teams by name")),
        )
        .subcommand(
            Command::new(COMMAND_SHOW)
                .about("Show a team with its members and admins")
                .arg(id_parameter("team")),
        )
        .subcommand(
            Command::new(COMMAND_UPDATE)
                .about("Update a team")
                .arg(id_parameter("team"))
                .arg(text_parameter(PARAMETER_NAME, "New name of the team"))
                .arg(text_parameter(PARAMETER_NOTES, "New notes for the team"))
                .arg(multi_parameter(PARAMETER_MEMBER_ID, "Account user IDs to set as team members"))
                .arg(multi_parameter(PARAMETER_ADMIN_ID, "Account user IDs to set as team admins")),
        )
        .subcommand(
            Command::new(COMMAND_DELETE)
                .about("Delete a team")
                .visible_alias("rm")
                .arg(id_parameter("team"))
                .arg(force_parameter("team")),
        )
        .subcommand(
            Command::new(COMMAND_CURRENT_ONCALL)
                .about("Show who is currently on call for a team")
                .arg(id_parameter("team")),
        )
        .subcommand(
            Command::new(COMMAND_TEAM_ALERTS)
                .about("List alerts routed to a team")
                .arg(id_parameter("team"))
                .arg(limit_parameter("alert"))
                .arg(offset_parameter()),
        )
}
