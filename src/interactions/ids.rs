//! Centralized command names and component custom_id constants.
//! Everything the gateway matches on by string lives here so registration and dispatch agree.

/// Slash command registered on the configured guild.
pub const ADMIN_COMMAND: &str = "admin";
/// Only subcommand of [`ADMIN_COMMAND`]; posts the verify panel.
pub const VERIFY_PANEL_SUBCOMMAND: &str = "verify-panel";
/// custom_id of the button attached to the verify panel.
pub const VERIFY_BUTTON: &str = "verify_me";

pub fn is_admin_command(name: &str) -> bool {
    name.eq_ignore_ascii_case(ADMIN_COMMAND)
}

// Subcommand names come straight from our own registration, so this one is exact.
pub fn is_verify_panel(subcommand: &str) -> bool {
    subcommand == VERIFY_PANEL_SUBCOMMAND
}

pub fn is_verify_button(custom_id: &str) -> bool {
    custom_id.eq_ignore_ascii_case(VERIFY_BUTTON)
}
