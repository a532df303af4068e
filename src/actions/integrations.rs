use crate::{
    actions::{
        utils::{list_query, optional_string, print_confirmation, print_detail, print_list, required_string},
        ActionContext, CliActionError,
    },
    commands::params::{PARAMETER_DISABLED, PARAMETER_ENABLED, PARAMETER_ID, PARAMETER_SEARCH},
    context::ExecutionContext,
    fields::FieldMap,
    model::IntegrationUpdateRequest,
};
use clap::ArgMatches;
use tracing::debug;

fn integration_list_columns() -> FieldMap {
    FieldMap::new()
        .field("id", "ID")
        .field("name", "Name")
        .field("integration_type.name", "Type")
        .field("enabled", "Enabled")
}

fn integration_detail_fields() -> FieldMap {
    FieldMap::new()
        .field("id", "ID")
        .field("name", "Name")
        .field("integration_type.name", "Type")
        .field("enabled", "Enabled")
        .field("created_at", "Created At")
        .field("updated_at", "Updated At")
}

/// `Some(true)` for `--enabled`, `Some(false)` for `--disabled`
fn enabled_filter(sub_matches: &ArgMatches) -> Option<bool> {
    if sub_matches.get_flag(PARAMETER_ENABLED) {
        Some(true)
    } else if sub_matches.get_flag(PARAMETER_DISABLED) {
        Some(false)
    } else {
        None
    }
}

pub async fn list_integrations(ctx: &ExecutionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let query = list_query(sub_matches)
        .search(optional_string(sub_matches, PARAMETER_SEARCH))
        .enabled(enabled_filter(sub_matches));
    debug!("Listing integrations with {:?}", query);

    let page = ctx
        .client
        .list_integrations(&query)
        .await
        .action("listing integrations")?;
    print_list(&page, &integration_list_columns(), "integration", &ctx.format)
}

pub async fn show_integration(ctx: &ExecutionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let integration_id = required_string(sub_matches, PARAMETER_ID)?;
    let integration = ctx
        .client
        .show_integration(&integration_id)
        .await
        .action("showing integration")?;
    print_detail(&integration_detail_fields(), &integration, &ctx.format)
}

/// Enable or disable an integration
pub async fn set_integration_enabled(
    ctx: &ExecutionContext,
    sub_matches: &ArgMatches,
    enabled: bool,
) -> Result<(), CliActionError> {
    let integration_id = required_string(sub_matches, PARAMETER_ID)?;
    let (action, past) = if enabled {
        ("enabling integration", "enabled")
    } else {
        ("disabling integration", "disabled")
    };

    let request = IntegrationUpdateRequest {
        enabled: Some(enabled),
    };
    let integration = ctx
        .client
        .update_integration(&integration_id, &request)
        .await
        .action(action)?;
    print_confirmation(
        &format!("Integration {past} successfully: {integration_id}"),
        &integration,
        &ctx.format,
    )
}
