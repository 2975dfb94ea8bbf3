//! Verification interaction controller.
//!
//! Every interaction runs the same pipeline: acknowledge, scope to the configured guild,
//! route by event kind to the panel or role-grant flow, then hand the resulting
//! [`Outcome`] to the reporter. Flows never reply themselves.
use super::api::GuildApi;
use super::event::{CommandInvocation, ControlActivation, InteractionEvent};
use super::ids::{is_admin_command, is_verify_button, is_verify_panel};
use super::outcome::{Failure, FailureKind, Flow, Outcome, Verified};
use super::panel::verify_panel;
use super::reply::{PendingReply, ReplyTransport};
use super::report;
use crate::config::BotConfig;
use serenity::model::id::{GuildId, RoleId};

pub const PANEL_CREATED: &str = "Verify panel created!";
pub const ALREADY_VERIFIED: &str = "Already verified!";
pub const VERIFIED: &str = "Verified!";

const CTX_GUILD: &str = "Unsupported guild, try it again later";
const CTX_COMMAND: &str = "Unknown command, are the commands up-to-date?";
const CTX_NO_SUBCOMMAND: &str = "Missing subcommand";
const CTX_SUBCOMMAND: &str = "Invalid subcommand";
const CTX_CONTROL: &str = "Invalid button";

/// Stateless apart from the two ids it is scoped to; cheap to share across tasks.
#[derive(Debug, Clone, Copy)]
pub struct VerifyController {
    guild_id: GuildId,
    grant_role_id: RoleId,
}

impl VerifyController {
    pub fn new(guild_id: GuildId, grant_role_id: RoleId) -> Self {
        Self {
            guild_id,
            grant_role_id,
        }
    }

    pub fn from_config(config: &BotConfig) -> Self {
        Self::new(config.guild_id(), config.grant_role_id())
    }

    /// Full pipeline for one interaction. Produces exactly one reply unless the
    /// acknowledgement itself fails, in which case nothing else is attempted.
    pub async fn handle<A, T>(&self, api: &A, event: InteractionEvent, reply: PendingReply<T>)
    where
        A: GuildApi + ?Sized,
        T: ReplyTransport,
    {
        let reply = match reply.defer().await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(target: "ui.reply", kind = ?event.kind(), error = %e, "could not acknowledge interaction");
                return;
            }
        };
        let outcome = self.resolve(api, &event).await;
        report::report(outcome, reply).await;
    }

    /// Compute the outcome for `event`, performing at most one mutation.
    pub async fn resolve<A>(&self, api: &A, event: &InteractionEvent) -> Outcome
    where
        A: GuildApi + ?Sized,
    {
        if event.invoker().guild_id != Some(self.guild_id) {
            return Outcome::failure(FailureKind::UnsupportedGuild, CTX_GUILD);
        }
        match event {
            InteractionEvent::CommandInvocation(command) => self.on_command(api, command).await,
            InteractionEvent::ControlActivation(control) => self.on_control(api, control).await,
        }
    }

    async fn on_command<A>(&self, api: &A, command: &CommandInvocation) -> Outcome
    where
        A: GuildApi + ?Sized,
    {
        if !is_admin_command(&command.command_name) {
            return Outcome::failure(FailureKind::UnknownCommand, CTX_COMMAND);
        }
        let Some(subcommand) = command.subcommand_name.as_deref() else {
            return Outcome::failure(FailureKind::MissingSubcommand, CTX_NO_SUBCOMMAND);
        };
        if !is_verify_panel(subcommand) {
            return Outcome::failure(FailureKind::UnknownSubcommand, CTX_SUBCOMMAND);
        }
        match api
            .send_panel(command.invoker.channel_id, verify_panel())
            .await
        {
            Ok(()) => Outcome::success(PANEL_CREATED),
            Err(fault) => Failure::from_fault(fault, Flow::Panel).into(),
        }
    }

    async fn on_control<A>(&self, api: &A, control: &ControlActivation) -> Outcome
    where
        A: GuildApi + ?Sized,
    {
        if !is_verify_button(&control.control_id) {
            return Outcome::failure(FailureKind::UnknownControl, CTX_CONTROL);
        }
        let invoker = &control.invoker;
        if invoker.member_roles.contains(&self.grant_role_id) {
            return Outcome::success(ALREADY_VERIFIED);
        }
        match api.role_exists(self.guild_id, self.grant_role_id).await {
            Ok(true) => {}
            Ok(false) => return Failure::in_flow(FailureKind::UnknownRole, Flow::Grant).into(),
            Err(fault) => return Failure::from_fault(fault, Flow::Grant).into(),
        }
        match api
            .grant_role(self.guild_id, invoker.user_id, self.grant_role_id)
            .await
        {
            Ok(()) => Outcome::Success {
                message: VERIFIED,
                verified: Some(Verified {
                    user_id: invoker.user_id,
                    user_name: invoker.user_name.clone(),
                    guild_id: self.guild_id,
                }),
            },
            Err(fault) => Failure::from_fault(fault, Flow::Grant).into(),
        }
    }
}
