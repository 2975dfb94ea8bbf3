//! Outbound Discord calls made by the verification flows.
use super::fault::Fault;
use async_trait::async_trait;
use serenity::builder::CreateMessage;
use serenity::model::Permissions;
use serenity::model::id::{ChannelId, GuildId, RoleId, UserId};
use serenity::prelude::Context;

/// The three calls the controller needs from Discord. The live implementation is
/// [`SerenityApi`]; tests substitute a recording fake.
#[async_trait]
pub trait GuildApi: Send + Sync {
    async fn send_panel(&self, channel: ChannelId, panel: CreateMessage) -> Result<(), Fault>;

    /// Whether `role` still exists in `guild`.
    async fn role_exists(&self, guild: GuildId, role: RoleId) -> Result<bool, Fault>;

    async fn grant_role(&self, guild: GuildId, user: UserId, role: RoleId) -> Result<(), Fault>;
}

/// What the cache knows about the bot's standing in a guild.
#[derive(Debug, Clone, Copy)]
pub struct BotStanding {
    pub is_owner: bool,
    /// Union of @everyone and the bot's role permissions.
    pub permissions: Permissions,
    /// Position of the bot's highest role (0 when it only has @everyone).
    pub top_position: u16,
}

/// Pre-flight check mirroring what Discord enforces on a role grant.
pub fn check_grant(standing: BotStanding, target_position: Option<u16>) -> Result<(), Fault> {
    if standing.is_owner {
        return Ok(());
    }
    if !standing
        .permissions
        .intersects(Permissions::MANAGE_ROLES | Permissions::ADMINISTRATOR)
    {
        return Err(Fault::MissingPermissions);
    }
    match target_position {
        Some(position) if position >= standing.top_position => Err(Fault::Hierarchy),
        _ => Ok(()),
    }
}

pub struct SerenityApi<'a> {
    ctx: &'a Context,
}

impl<'a> SerenityApi<'a> {
    pub fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }

    /// `None` when the guild or the bot member is not cached yet; Discord then has the
    /// final word.
    fn cached_standing(&self, guild_id: GuildId, role: RoleId) -> Option<(BotStanding, Option<u16>)> {
        let bot_id = self.ctx.cache.current_user().id;
        let guild = self.ctx.cache.guild(guild_id)?;
        let member = guild.members.get(&bot_id)?;
        let everyone = guild.roles.get(&RoleId::new(guild_id.get()));
        let bot_roles: Vec<_> = member
            .roles
            .iter()
            .filter_map(|id| guild.roles.get(id))
            .collect();
        let permissions = everyone
            .into_iter()
            .chain(bot_roles.iter().copied())
            .fold(Permissions::empty(), |acc, r| acc | r.permissions);
        let standing = BotStanding {
            is_owner: guild.owner_id == bot_id,
            permissions,
            top_position: bot_roles.iter().map(|r| r.position).max().unwrap_or(0),
        };
        Some((standing, guild.roles.get(&role).map(|r| r.position)))
    }
}

#[async_trait]
impl<'a> GuildApi for SerenityApi<'a> {
    async fn send_panel(&self, channel: ChannelId, panel: CreateMessage) -> Result<(), Fault> {
        channel.send_message(&self.ctx.http, panel).await?;
        Ok(())
    }

    async fn role_exists(&self, guild: GuildId, role: RoleId) -> Result<bool, Fault> {
        let cached = self.ctx.cache.guild(guild).map(|g| g.roles.contains_key(&role));
        if let Some(found) = cached {
            return Ok(found);
        }
        let roles = guild.roles(&self.ctx.http).await?;
        Ok(roles.contains_key(&role))
    }

    async fn grant_role(&self, guild: GuildId, user: UserId, role: RoleId) -> Result<(), Fault> {
        let standing = self.cached_standing(guild, role);
        if let Some((standing, target_position)) = standing {
            check_grant(standing, target_position)?;
        }
        self.ctx
            .http
            .add_member_role(guild, user, role, Some("Member verified"))
            .await?;
        Ok(())
    }
}
