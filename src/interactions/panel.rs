//! The verify panel posted by `/admin verify-panel`.
use super::ids::VERIFY_BUTTON;
use serenity::builder::{CreateActionRow, CreateButton, CreateEmbed, CreateMessage};
use serenity::model::application::ButtonStyle;

pub const PANEL_DESCRIPTION: &str =
    "To get full access to our server click the button below to verify yourself!";
/// Discord blurple.
pub const PANEL_COLOUR: u32 = 0x5865F2;

pub fn verify_button() -> CreateButton {
    CreateButton::new(VERIFY_BUTTON)
        .label("Verify")
        .style(ButtonStyle::Primary)
}

pub fn verify_panel() -> CreateMessage {
    let embed = CreateEmbed::new()
        .description(PANEL_DESCRIPTION)
        .colour(PANEL_COLOUR);
    CreateMessage::new()
        .embed(embed)
        .components(vec![CreateActionRow::Buttons(vec![verify_button()])])
}
