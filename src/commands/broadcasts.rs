//! Broadcast command definitions.

use crate::commands::params::{
    force_parameter, id_parameter, limit_parameter, multi_parameter, offset_parameter,
    text_parameter, COMMAND_BROADCASTS, COMMAND_CREATE, COMMAND_DELETE, COMMAND_LIST,
    COMMAND_SHOW, PARAMETER_DESCRIPTION, PARAMETER_TEAM_ID, PARAMETER_TITLE, PARAMETER_USER_ID,
};
use clap::Command;

/// Create the broadcasts command with all its subcommands.
pub fn broadcasts_command() -> Command {
    Command::new(COMMAND_BROADCASTS)
        .about("Commands for managing PagerTree broadcasts")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_CREATE)
                .about("Create a new broadcast")
                .arg(text_parameter(PARAMETER_TITLE, "Title of the broadcast").required(true))
                .arg(text_parameter(PARAMETER_DESCRIPTION, "Description of the broadcast"))
                .arg(multi_parameter(PARAMETER_USER_ID, "Account user IDs to receive the broadcast"))
                .arg(multi_parameter(PARAMETER_TEAM_ID, "Team IDs to receive the broadcast")),
        )
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List broadcasts with pagination")
                .visible_alias("ls")
                .arg(limit_parameter("broadcast"))
                .arg(offset_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_SHOW)
                .about("Show details of a broadcast")
                .arg(id_parameter("broadcast")),
        )
        .subcommand(
            Command::new(COMMAND_DELETE)
                .about("Delete a broadcast")
                .visible_alias("rm")
                .arg(id_parameter("broadcast"))
                .arg(force_parameter("broadcast")),
        )
}
