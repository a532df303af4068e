//! Account user action handlers.

use crate::{
    actions::{
        utils::{
            confirm_deletion, list_query, optional_string, print_confirmation, print_detail,
            print_list, required_string, response_id,
        },
        ActionContext, CliActionError,
    },
    commands::params::{PARAMETER_EMAIL, PARAMETER_ID, PARAMETER_NAME, PARAMETER_ROLE, PARAMETER_TEAM_ID},
    context::ExecutionContext,
    fields::{format_value, FieldMap},
    model::{UserCreateRequest, UserRole, UserUpdateRequest},
};
use clap::ArgMatches;
use std::str::FromStr;

fn user_list_columns() -> FieldMap {
    FieldMap::new()
        .field("tiny_id", "ID")
        .field("user.name", "Name")
        .field("user.emails[primary=true].email", "Primary Email")
        .field("user.phones[primary=true].phone", "Primary Phone")
        .field("roles", "Roles")
}

fn user_detail_fields() -> FieldMap {
    FieldMap::new()
        .field("id", "User ID")
        .field("tiny_id", "Number")
        .field("user.name", "Name")
        .field("user.emails[primary=true].email", "Primary Email")
        .field("user.phones[primary=true].phone", "Primary Phone")
        .field("roles", "Roles")
        .field("created_at", "Created At")
}

fn roles(sub_matches: &ArgMatches) -> Vec<UserRole> {
    sub_matches
        .get_many::<String>(PARAMETER_ROLE)
        .map(|values| values.filter_map(|role| UserRole::from_str(role).ok()).collect())
        .unwrap_or_default()
}

pub async fn create_user(ctx: &ExecutionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let request = UserCreateRequest {
        name: required_string(sub_matches, PARAMETER_NAME)?,
        email: required_string(sub_matches, PARAMETER_EMAIL)?,
        team_ids: sub_matches
            .get_many::<String>(PARAMETER_TEAM_ID)
            .map(|ids| ids.cloned().collect())
            .unwrap_or_default(),
        ..Default::default()
    }
    .with_roles(roles(sub_matches));

    let user = ctx.client.create_user(&request).await.action("creating user")?;
    print_confirmation(
        &format!("User created successfully: {}", response_id(&user, "tiny_id")),
        &user,
        &ctx.format,
    )
}

pub async fn list_users(ctx: &ExecutionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let page = ctx
        .client
        .list_users(&list_query(sub_matches))
        .await
        .action("listing users")?;
    print_list(&page, &user_list_columns(), "user", &ctx.format)
}

pub async fn show_user(ctx: &ExecutionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let user_id = required_string(sub_matches, PARAMETER_ID)?;
    let user = ctx.client.show_user(&user_id).await.action("showing user")?;
    print_detail(&user_detail_fields(), &user, &ctx.format)
}

pub async fn update_user(ctx: &ExecutionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let user_id = required_string(sub_matches, PARAMETER_ID)?;
    let request = UserUpdateRequest {
        name: optional_string(sub_matches, PARAMETER_NAME),
    };

    let user = ctx
        .client
        .update_user(&user_id, &request)
        .await
        .action("updating user")?;
    let number = match user.get("tiny_id") {
        Some(tiny_id) if !tiny_id.is_null() => format_value(Some(tiny_id)),
        _ => user_id,
    };
    print_confirmation(
        &format!("User updated successfully: {number}"),
        &user,
        &ctx.format,
    )
}

pub async fn delete_user(ctx: &ExecutionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let user_id = required_string(sub_matches, PARAMETER_ID)?;
    if !confirm_deletion(sub_matches, "user", &user_id)? {
        return Ok(());
    }

    let body = ctx.client.delete_user(&user_id).await.action("deleting user")?;
    print_confirmation(
        &format!("User deleted successfully: {user_id}"),
        &body,
        &ctx.format,
    )
}
