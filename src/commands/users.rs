//! User command definitions.
//!
//! Users are PagerTree account users (`/account_users`), i.e. a person's
//! membership in the account together with its roles.

use crate::commands::params::{
    force_parameter, id_parameter, limit_parameter, multi_parameter, offset_parameter,
    text_parameter, COMMAND_CREATE, COMMAND_DELETE, COMMAND_LIST, COMMAND_SHOW, COMMAND_UPDATE,
    COMMAND_USERS, PARAMETER_EMAIL, PARAMETER_NAME, PARAMETER_ROLE, PARAMETER_TEAM_ID,
};
use crate::model::UserRole;
use clap::Command;

/// Define the users command and its subcommands
pub fn users_command() -> Command {
    Command::new(COMMAND_USERS)
        .about("Commands for managing PagerTree users")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_CREATE)
                .about("Create a new account user")
                .arg(text_parameter(PARAMETER_NAME, "Full name of the user").required(true))
                .arg(text_parameter(PARAMETER_EMAIL, "Email address of the user").required(true))
                .arg(
                    multi_parameter(PARAMETER_ROLE, "Roles for the user (can specify multiple)")
                        .value_parser(UserRole::names()),
                )
                .arg(multi_parameter(PARAMETER_TEAM_ID, "IDs of teams the user should be assigned to")),
        )
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List users with pagination")
                .visible_alias("ls")
                .arg(limit_parameter("user"))
                .arg(offset_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_SHOW)
                .about("Show details of a user")
                .arg(id_parameter("user")),
        )
        .subcommand(
            Command::new(COMMAND_UPDATE)
                .about("Update an account user")
                .arg(id_parameter("user"))
                .arg(text_parameter(PARAMETER_NAME, "New full name of the user")),
        )
        .subcommand(
            Command::new(COMMAND_DELETE)
                .about("Delete a user")
                .visible_alias("rm")
                .arg(id_parameter("user"))
                .arg(force_parameter("user")),
        )
}
