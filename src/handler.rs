use crate::commands;
use crate::config::BotConfig;
use crate::interactions::api::SerenityApi;
use crate::interactions::controller::VerifyController;
use crate::interactions::event::InteractionEvent;
use crate::interactions::reply::{InteractionReply, PendingReply};
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::{CommandInteraction, ComponentInteraction, Interaction};
use serenity::model::{gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;
use std::sync::atomic::{AtomicBool, Ordering};

pub struct Handler {
    pub allowed_guild_id: GuildId,
    pub controller: VerifyController,
    /// Upsert `/admin` once this process sees its first Ready.
    pub update_command: bool,
    registered: AtomicBool,
}

impl Handler {
    pub fn new(config: &BotConfig, update_command: bool) -> Self {
        Self {
            allowed_guild_id: config.guild_id(),
            controller: VerifyController::from_config(config),
            update_command,
            registered: AtomicBool::new(false),
        }
    }

    async fn on_command(&self, ctx: &Context, command: &CommandInteraction) {
        let api = SerenityApi::new(ctx);
        let event = InteractionEvent::from_command(command);
        let reply = PendingReply::new(InteractionReply::command(&ctx.http, command));
        self.controller.handle(&api, event, reply).await;
    }

    async fn on_component(&self, ctx: &Context, component: &ComponentInteraction) {
        let api = SerenityApi::new(ctx);
        let event = InteractionEvent::from_component(component);
        let reply = PendingReply::new(InteractionReply::component(&ctx.http, component));
        self.controller.handle(&api, event, reply).await;
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match &interaction {
            Interaction::Command(command) => self.on_command(&ctx, command).await,
            Interaction::Component(component) => self.on_component(&ctx, component).await,
            _ => {}
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!(target: "gateway", user = %ready.user.name, guilds = ready.guilds.len(), "connected and ready");
        if !self.update_command || self.registered.swap(true, Ordering::SeqCst) {
            return;
        }
        if !ready.guilds.iter().any(|g| g.id == self.allowed_guild_id) {
            tracing::warn!(target: "commands", guild_id = %self.allowed_guild_id, "could not update commands: bot is not in the configured guild");
            return;
        }
        // Registration must never hold up the gateway.
        tokio::spawn(commands::admin::upsert(
            ctx.http.clone(),
            self.allowed_guild_id,
        ));
    }
}
