//! Single-use ephemeral reply capability.
//!
//! A [`PendingReply`] can only be deferred; deferring yields a [`DeferredReply`] whose
//! `send` consumes it. Sending before the interaction is acknowledged, or twice, does
//! not type-check.
use super::fault::Fault;
use async_trait::async_trait;
use serenity::builder::EditInteractionResponse;
use serenity::http::Http;
use serenity::model::application::{CommandInteraction, ComponentInteraction};
use std::sync::Arc;

/// Wire-level operations behind a reply. Implemented by the live interaction
/// wrapper below and by recording fakes in tests.
#[async_trait]
pub trait ReplyTransport: Send + Sync {
    /// Acknowledge the interaction with an ephemeral "thinking" state.
    async fn acknowledge(&self) -> Result<(), Fault>;
    /// Replace the acknowledged response with `content`.
    async fn deliver(&self, content: &str) -> Result<(), Fault>;
}

pub struct PendingReply<T> {
    transport: T,
}

pub struct DeferredReply<T> {
    transport: T,
}

impl<T: ReplyTransport> PendingReply<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn defer(self) -> Result<DeferredReply<T>, Fault> {
        self.transport.acknowledge().await?;
        Ok(DeferredReply {
            transport: self.transport,
        })
    }
}

impl<T: ReplyTransport> DeferredReply<T> {
    // Only the reporter sends; flows hand back an Outcome instead.
    pub(crate) async fn send(self, content: &str) -> Result<(), Fault> {
        self.transport.deliver(content).await
    }
}

enum Target<'a> {
    Command(&'a CommandInteraction),
    Component(&'a ComponentInteraction),
}

/// Live transport over a slash command or button interaction.
pub struct InteractionReply<'a> {
    http: &'a Arc<Http>,
    target: Target<'a>,
}

impl<'a> InteractionReply<'a> {
    pub fn command(http: &'a Arc<Http>, interaction: &'a CommandInteraction) -> Self {
        Self {
            http,
            target: Target::Command(interaction),
        }
    }

    pub fn component(http: &'a Arc<Http>, interaction: &'a ComponentInteraction) -> Self {
        Self {
            http,
            target: Target::Component(interaction),
        }
    }

    fn id(&self) -> &str {
        match self.target {
            Target::Command(c) => c.data.name.as_str(),
            Target::Component(c) => c.data.custom_id.as_str(),
        }
    }
}

#[async_trait]
impl<'a> ReplyTransport for InteractionReply<'a> {
    async fn acknowledge(&self) -> Result<(), Fault> {
        let result = match self.target {
            Target::Command(c) => c.defer_ephemeral(self.http).await,
            Target::Component(c) => c.defer_ephemeral(self.http).await,
        };
        if let Err(e) = &result {
            tracing::debug!(target: "ui.defer", id = %self.id(), error = ?e, "defer failed (already acknowledged?)");
        }
        result.map_err(Fault::from)
    }

    async fn deliver(&self, content: &str) -> Result<(), Fault> {
        let builder = EditInteractionResponse::new().content(content);
        let result = match self.target {
            Target::Command(c) => c.edit_response(self.http, builder).await,
            Target::Component(c) => c.edit_response(self.http, builder).await,
        };
        result.map(|_| ()).map_err(Fault::from)
    }
}
