// src/commands/mod.rs
// Slash command definitions registered with Discord.

pub mod admin;
