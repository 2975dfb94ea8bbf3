use crate::interactions::ids::{ADMIN_COMMAND, VERIFY_PANEL_SUBCOMMAND};
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::http::Http;
use serenity::model::Permissions;
use serenity::model::application::CommandOptionType;
use serenity::model::id::GuildId;
use std::sync::Arc;

// `/admin verify-panel`; hidden from everyone without Administrator by default.
pub fn register() -> CreateCommand {
    CreateCommand::new(ADMIN_COMMAND)
        .description("Admin command for verification.")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            VERIFY_PANEL_SUBCOMMAND,
            "Sends a verify panel message",
        ))
}

/// Create or overwrite the guild command. Outcome is only logged.
pub async fn upsert(http: Arc<Http>, guild_id: GuildId) {
    match guild_id.create_command(&http, register()).await {
        Ok(command) => {
            tracing::info!(target: "commands", guild_id = %guild_id, command_id = %command.id, "command updated successfully");
        }
        Err(e) => {
            tracing::warn!(target: "commands", guild_id = %guild_id, error = ?e, "failed to update command");
        }
    }
}
