//! Dispatch of parsed command lines to their action handlers.

use crate::actions::{alerts, alerts::Transition, broadcasts, config, integrations, teams, users};
use crate::commands::params::{
    COMMAND_ACKNOWLEDGE, COMMAND_ALERTS, COMMAND_BROADCASTS, COMMAND_COMMENT, COMMAND_COMMENTS,
    COMMAND_CONFIG, COMMAND_CREATE, COMMAND_CURRENT_ONCALL, COMMAND_DELETE, COMMAND_DISABLE,
    COMMAND_ENABLE, COMMAND_INTEGRATIONS, COMMAND_LIST, COMMAND_PATH, COMMAND_REJECT,
    COMMAND_RESOLVE, COMMAND_SHOW, COMMAND_TEAMS, COMMAND_TEAM_ALERTS, COMMAND_UPDATE,
    COMMAND_USERS,
};
use crate::configuration::Configuration;
use crate::context::{config_file, output_format, ExecutionContext};
use crate::error::CliError;
use clap::ArgMatches;
use tracing::trace;

fn extract_subcommand_name(sub_matches: &ArgMatches) -> String {
    let message = match sub_matches.subcommand() {
        Some(m) => m.0,
        None => "unknown",
    };

    message.to_string()
}

fn unsupported(sub_matches: &ArgMatches) -> CliError {
    CliError::UnsupportedSubcommand(extract_subcommand_name(sub_matches))
}

/// Execute the command selected by `commands`.
pub async fn execute_command(commands: ArgMatches) -> Result<(), CliError> {
    match commands.subcommand() {
        Some((COMMAND_ALERTS, sub_matches)) => {
            trace!("Command: {}", COMMAND_ALERTS);
            match sub_matches.subcommand() {
                Some((command, args)) => {
                    let ctx = ExecutionContext::from_args(args)?;
                    match command {
                        COMMAND_CREATE => alerts::create_alert(&ctx, args).await?,
                        COMMAND_LIST => alerts::list_alerts(&ctx, args).await?,
                        COMMAND_SHOW => alerts::show_alert(&ctx, args).await?,
                        COMMAND_UPDATE => alerts::update_alert(&ctx, args).await?,
                        COMMAND_DELETE => alerts::delete_alert(&ctx, args).await?,
                        COMMAND_ACKNOWLEDGE => {
                            alerts::transition_alert(&ctx, args, Transition::Acknowledge).await?
                        }
                        COMMAND_REJECT => alerts::transition_alert(&ctx, args, Transition::Reject).await?,
                        COMMAND_RESOLVE => {
                            alerts::transition_alert(&ctx, args, Transition::Resolve).await?
                        }
                        COMMAND_COMMENT => alerts::comment_on_alert(&ctx, args).await?,
                        COMMAND_COMMENTS => alerts::list_comments(&ctx, args).await?,
                        _ => return Err(unsupported(sub_matches)),
                    }
                    Ok(())
                }
                None => Err(unsupported(sub_matches)),
            }
        }
        Some((COMMAND_BROADCASTS, sub_matches)) => {
            trace!("Command: {}", COMMAND_BROADCASTS);
            match sub_matches.subcommand() {
                Some((command, args)) => {
                    let ctx = ExecutionContext::from_args(args)?;
                    match command {
                        COMMAND_CREATE => broadcasts::create_broadcast(&ctx, args).await?,
                        COMMAND_LIST => broadcasts::list_broadcasts(&ctx, args).await?,
                        COMMAND_SHOW => broadcasts::show_broadcast(&ctx, args).await?,
                        COMMAND_DELETE => broadcasts::delete_broadcast(&ctx, args).await?,
                        _ => return Err(unsupported(sub_matches)),
                    }
                    Ok(())
                }
                None => Err(unsupported(sub_matches)),
            }
        }
        Some((COMMAND_TEAMS, sub_matches)) => {
            trace!("Command: {}", COMMAND_TEAMS);
            match sub_matches.subcommand() {
                Some((command, args)) => {
                    let ctx = ExecutionContext::from_args(args)?;
                    match command {
                        COMMAND_CREATE => teams::create_team(&ctx, args).await?,
                        COMMAND_LIST => teams::list_teams(&ctx, args).await?,
                        COMMAND_SHOW => teams::show_team(&ctx, args).await?,
                        COMMAND_UPDATE => teams::update_team(&ctx, args).await?,
                        COMMAND_DELETE => teams::delete_team(&ctx, args).await?,
                        COMMAND_CURRENT_ONCALL => teams::current_oncall(&ctx, args).await?,
                        COMMAND_TEAM_ALERTS => teams::team_alerts(&ctx, args).await?,
                        _ => return Err(unsupported(sub_matches)),
                    }
                    Ok(())
                }
                None => Err(unsupported(sub_matches)),
            }
        }
        Some((COMMAND_USERS, sub_matches)) => {
            trace!("Command: {}", COMMAND_USERS);
            match sub_matches.subcommand() {
                Some((command, args)) => {
                    let ctx = ExecutionContext::from_args(args)?;
                    match command {
                        COMMAND_CREATE => users::create_user(&ctx, args).await?,
                        COMMAND_LIST => users::list_users(&ctx, args).await?,
                        COMMAND_SHOW => users::show_user(&ctx, args).await?,
                        COMMAND_UPDATE => users::update_user(&ctx, args).await?,
                        COMMAND_DELETE => users::delete_user(&ctx, args).await?,
                        _ => return Err(unsupported(sub_matches)),
                    }
                    Ok(())
                }
                None => Err(unsupported(sub_matches)),
            }
        }
        Some((COMMAND_INTEGRATIONS, sub_matches)) => {
            trace!("Command: {}", COMMAND_INTEGRATIONS);
            match sub_matches.subcommand() {
                Some((command, args)) => {
                    let ctx = ExecutionContext::from_args(args)?;
                    match command {
                        COMMAND_LIST => integrations::list_integrations(&ctx, args).await?,
                        COMMAND_SHOW => integrations::show_integration(&ctx, args).await?,
                        COMMAND_ENABLE => integrations::set_integration_enabled(&ctx, args, true).await?,
                        COMMAND_DISABLE => integrations::set_integration_enabled(&ctx, args, false).await?,
                        _ => return Err(unsupported(sub_matches)),
                    }
                    Ok(())
                }
                None => Err(unsupported(sub_matches)),
            }
        }
        // Configuration commands do not need an API client
        Some((COMMAND_CONFIG, sub_matches)) => {
            trace!("Command: {}", COMMAND_CONFIG);
            match sub_matches.subcommand() {
                Some((COMMAND_SHOW, args)) => {
                    let configuration = Configuration::resolve(config_file(args).as_deref())?;
                    config::show_configuration(&configuration, &output_format(args)?)?;
                    Ok(())
                }
                Some((COMMAND_PATH, _)) => {
                    config::print_configuration_path()?;
                    Ok(())
                }
                _ => Err(unsupported(sub_matches)),
            }
        }
        _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
            &commands,
        ))),
    }
}
