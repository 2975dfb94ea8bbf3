//! Gateway interactions reduced to the fields the verification flows read.
use serenity::model::application::{CommandDataOptionValue, CommandInteraction, ComponentInteraction};
use serenity::model::id::{ChannelId, GuildId, RoleId, UserId};
use std::collections::HashSet;

/// Who triggered the interaction and where. `member_roles` is the live snapshot
/// shipped with the interaction payload.
#[derive(Debug, Clone)]
pub struct Invoker {
    pub guild_id: Option<GuildId>,
    pub channel_id: ChannelId,
    pub user_id: UserId,
    pub user_name: String,
    pub member_roles: HashSet<RoleId>,
}

#[derive(Debug, Clone)]
pub struct CommandInvocation {
    pub invoker: Invoker,
    pub command_name: String,
    pub subcommand_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ControlActivation {
    pub invoker: Invoker,
    pub control_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    CommandInvocation,
    ControlActivation,
}

#[derive(Debug, Clone)]
pub enum InteractionEvent {
    CommandInvocation(CommandInvocation),
    ControlActivation(ControlActivation),
}

impl InteractionEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            InteractionEvent::CommandInvocation(_) => EventKind::CommandInvocation,
            InteractionEvent::ControlActivation(_) => EventKind::ControlActivation,
        }
    }

    pub fn invoker(&self) -> &Invoker {
        match self {
            InteractionEvent::CommandInvocation(c) => &c.invoker,
            InteractionEvent::ControlActivation(c) => &c.invoker,
        }
    }

    pub fn from_command(interaction: &CommandInteraction) -> Self {
        let member_roles: HashSet<RoleId> = interaction
            .member
            .as_ref()
            .map(|m| m.roles.iter().copied().collect())
            .unwrap_or_default();
        // A subcommand arrives as the first top-level option with a SubCommand value.
        let subcommand_name = interaction.data.options.first().and_then(|opt| match opt.value {
            CommandDataOptionValue::SubCommand(_) => Some(opt.name.clone()),
            _ => None,
        });
        InteractionEvent::CommandInvocation(CommandInvocation {
            invoker: Invoker {
                guild_id: interaction.guild_id,
                channel_id: interaction.channel_id,
                user_id: interaction.user.id,
                user_name: interaction.user.name.clone(),
                member_roles,
            },
            command_name: interaction.data.name.clone(),
            subcommand_name,
        })
    }

    pub fn from_component(interaction: &ComponentInteraction) -> Self {
        let member_roles: HashSet<RoleId> = interaction
            .member
            .as_ref()
            .map(|m| m.roles.iter().copied().collect())
            .unwrap_or_default();
        InteractionEvent::ControlActivation(ControlActivation {
            invoker: Invoker {
                guild_id: interaction.guild_id,
                channel_id: interaction.channel_id,
                user_id: interaction.user.id,
                user_name: interaction.user.name.clone(),
                member_roles,
            },
            control_id: interaction.data.custom_id.clone(),
        })
    }
}
