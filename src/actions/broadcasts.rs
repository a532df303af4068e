use crate::{
    actions::{
        utils::{
            confirm_deletion, list_query, optional_string, optional_strings, print_confirmation,
            print_detail, print_list, required_string, response_id,
        },
        ActionContext, CliActionError,
    },
    commands::params::{
        PARAMETER_DESCRIPTION, PARAMETER_ID, PARAMETER_TEAM_ID, PARAMETER_TITLE, PARAMETER_USER_ID,
    },
    context::ExecutionContext,
    fields::FieldMap,
    model::BroadcastCreateRequest,
};
use clap::ArgMatches;

fn broadcast_list_columns() -> FieldMap {
    FieldMap::new()
        .field("id", "ID")
        .field("title", "Title")
        .field("status", "Status")
        .field("created_at", "Created At")
}

fn broadcast_detail_fields() -> FieldMap {
    FieldMap::new()
        .field("id", "Broadcast ID")
        .field("title", "Title")
        .field("description", "Description")
        .field("status", "Status")
}

pub async fn create_broadcast(ctx: &ExecutionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let request = BroadcastCreateRequest {
        title: required_string(sub_matches, PARAMETER_TITLE)?,
        description: optional_string(sub_matches, PARAMETER_DESCRIPTION),
        destination_account_user_ids: optional_strings(sub_matches, PARAMETER_USER_ID),
        destination_team_ids: optional_strings(sub_matches, PARAMETER_TEAM_ID),
    };

    let broadcast = ctx
        .client
        .create_broadcast(&request)
        .await
        .action("creating broadcast")?;
    print_confirmation(
        &format!("Broadcast created successfully: {}", response_id(&broadcast, "id")),
        &broadcast,
        &ctx.format,
    )
}

pub async fn list_broadcasts(ctx: &ExecutionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let page = ctx
        .client
        .list_broadcasts(&list_query(sub_matches))
        .await
        .action("listing broadcasts")?;
    print_list(&page, &broadcast_list_columns(), "broadcast", &ctx.format)
}

pub async fn show_broadcast(ctx: &ExecutionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let broadcast_id = required_string(sub_matches, PARAMETER_ID)?;
    let broadcast = ctx
        .client
        .show_broadcast(&broadcast_id)
        .await
        .action("showing broadcast")?;
    print_detail(&broadcast_detail_fields(), &broadcast, &ctx.format)
}

pub async fn delete_broadcast(ctx: &ExecutionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let broadcast_id = required_string(sub_matches, PARAMETER_ID)?;
    if !confirm_deletion(sub_matches, "broadcast", &broadcast_id)? {
        return Ok(());
    }

    let body = ctx
        .client
        .delete_broadcast(&broadcast_id)
        .await
        .action("deleting broadcast")?;
    print_confirmation(
        &format!("Broadcast deleted successfully: {broadcast_id}"),
        &body,
        &ctx.format,
    )
}
