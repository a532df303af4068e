//! CLI command definitions and argument parsing.
//!
//! This module defines all the CLI commands and their arguments using the
//! clap builder API. Each resource group lives in its own file; the handlers
//! that execute them live in `crate::actions`.

use clap::{ArgMatches, Command};

pub mod alerts;
pub mod broadcasts;
pub mod config;
pub mod integrations;
pub mod params;
pub mod teams;
pub mod users;

/// Build the complete command tree.
pub fn cli_command() -> Command {
    Command::new("pagertree")
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about("PagerTree CLI Tool - Manage alerts from the command line.")
        .propagate_version(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(params::config_file_parameter())
        .arg(params::verbose_parameter())
        .arg(params::format_parameter())
        .subcommand(alerts::alerts_command())
        .subcommand(broadcasts::broadcasts_command())
        .subcommand(teams::teams_command())
        .subcommand(users::users_command())
        .subcommand(integrations::integrations_command())
        .subcommand(config::config_command())
}

/// Parse the process arguments, exiting with usage help on error.
pub fn create_cli_commands() -> ArgMatches {
    cli_command().get_matches()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_tree_is_consistent() {
        cli_command().debug_assert();
    }

    #[test]
    fn test_alias_and_id_are_exclusive() {
        let result = cli_command().try_get_matches_from([
            "pagertree", "alerts", "acknowledge", "01ABC", "--alias", "X",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_alias_alone_is_accepted() {
        let matches = cli_command()
            .try_get_matches_from(["pagertree", "alerts", "reject", "--alias", "X"])
            .unwrap();
        let (_, alerts) = matches.subcommand().unwrap();
        let (_, reject) = alerts.subcommand().unwrap();
        assert_eq!(reject.get_one::<String>(params::PARAMETER_ALIAS).unwrap(), "X");
    }

    #[test]
    fn test_limit_is_bounded() {
        let result = cli_command().try_get_matches_from(["pagertree", "alerts", "list", "--limit", "101"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_enabled_and_disabled_conflict() {
        let result = cli_command().try_get_matches_from([
            "pagertree", "integrations", "list", "--enabled", "--disabled",
        ]);
        assert!(result.is_err());
    }
}
