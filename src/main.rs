use pagertree_cli::{
    cli::execute_command,
    commands::{create_cli_commands, params::PARAMETER_VERBOSE},
    error_utils::report_error,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Main entry point for the program
#[tokio::main]
async fn main() {
    let commands = create_cli_commands();

    // Initialize the logging subsystem; RUST_LOG wins over --verbose.
    // Without either, diagnostics reach the user through stderr only.
    let default_level = if commands.get_flag(PARAMETER_VERBOSE) {
        "debug"
    } else {
        "off"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = execute_command(commands).await {
        let exit_code = e.exit_code();
        debug!("Exiting with {} ({})", exit_code.code(), exit_code.message());
        report_error(&e);
        ::std::process::exit(exit_code.code());
    }
}
