//! Integration command definitions.

use crate::commands::params::{
    id_parameter, limit_parameter, offset_parameter, search_parameter, COMMAND_DISABLE,
    COMMAND_ENABLE, COMMAND_INTEGRATIONS, COMMAND_LIST, COMMAND_SHOW, PARAMETER_DISABLED,
    PARAMETER_ENABLED,
};
use clap::{Arg, ArgAction, Command};

pub fn integrations_command() -> Command {
    Command::new(COMMAND_INTEGRATIONS)
        .about("Commands for managing PagerTree integrations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List integrations with pagination")
                .visible_alias("ls")
                .arg(limit_parameter("integration"))
                .arg(offset_parameter())
                .arg(search_parameter("Search for integrations by name or type"))
                .arg(
                    Arg::new(PARAMETER_ENABLED)
                        .long(PARAMETER_ENABLED)
                        .action(ArgAction::SetTrue)
                        .help("Only enabled integrations"),
                )
                .arg(
                    Arg::new(PARAMETER_DISABLED)
                        .long(PARAMETER_DISABLED)
                        .action(ArgAction::SetTrue)
                        .conflicts_with(PARAMETER_ENABLED)
                        .help("Only disabled integrations"),
                ),
        )
        .subcommand(
            Command::new(COMMAND_SHOW)
                .about("Show details of an integration")
                .arg(id_parameter("integration")),
        )
        .subcommand(
            Command::new(COMMAND_ENABLE)
                .about("Enable an integration")
                .arg(id_parameter("integration")),
        )
        .subcommand(
            Command::new(COMMAND_DISABLE)
                .about("Disable an integration")
                .arg(id_parameter("integration")),
        )
}
