//! Terminal result of handling one interaction.
use super::fault::{ErrorCode, Fault};
use serenity::model::id::{GuildId, UserId};
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    UnsupportedGuild,
    UnknownCommand,
    MissingSubcommand,
    UnknownSubcommand,
    UnknownControl,
    InsufficientPermission,
    HierarchyViolation,
    UnknownRole,
    PlatformError(ErrorCode),
    Unknown,
}

impl FailureKind {
    /// Tag shown in parentheses at the end of an error reply.
    pub fn tag(&self) -> Cow<'static, str> {
        let tag = match self {
            FailureKind::UnsupportedGuild => "UNSUPPORTED_GUILD",
            FailureKind::UnknownCommand => "UNKNOWN_COMMAND",
            FailureKind::MissingSubcommand => "MISSING_SUBCOMMAND",
            FailureKind::UnknownSubcommand => "UNKNOWN_SUBCOMMAND",
            FailureKind::UnknownControl => "UNKNOWN_ID",
            FailureKind::InsufficientPermission => "INSUFFICIENT_PERMISSION",
            FailureKind::HierarchyViolation => "HIERARCHY",
            FailureKind::UnknownRole => "UNKNOWN_ROLE",
            FailureKind::PlatformError(code) => return code.name(),
            FailureKind::Unknown => "UNKNOWN",
        };
        Cow::Borrowed(tag)
    }
}

/// Flow a failure came from; selects the log target operators filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Guard and command/button validation, before any outbound call.
    Dispatch,
    Panel,
    Grant,
}

impl Flow {
    pub fn context(self) -> &'static str {
        match self {
            Flow::Dispatch => "Unable to handle interaction",
            Flow::Panel => "Unable to send verify panel",
            Flow::Grant => "Try verifying again later",
        }
    }
}

#[derive(Debug)]
pub struct Failure {
    pub kind: FailureKind,
    pub flow: Flow,
    /// Short phrase placed before the tag, e.g. "Unable to send verify panel".
    pub context: &'static str,
    /// Detail for the log only; never rendered to the user.
    pub cause: Option<String>,
}

impl Failure {
    pub fn new(kind: FailureKind, context: &'static str) -> Self {
        Self {
            kind,
            flow: Flow::Dispatch,
            context,
            cause: None,
        }
    }

    pub fn in_flow(kind: FailureKind, flow: Flow) -> Self {
        Self {
            kind,
            flow,
            context: flow.context(),
            cause: None,
        }
    }

    /// Map an outbound call fault into the taxonomy, keeping the detail for logging.
    pub fn from_fault(fault: Fault, flow: Flow) -> Self {
        let kind = match &fault {
            Fault::MissingPermissions => FailureKind::InsufficientPermission,
            Fault::Hierarchy => FailureKind::HierarchyViolation,
            Fault::Platform { code, .. } => FailureKind::PlatformError(*code),
            Fault::Other(_) => FailureKind::Unknown,
        };
        Self {
            kind,
            flow,
            context: flow.context(),
            cause: Some(fault.to_string()),
        }
    }
}

/// Identity recorded when a member is granted the role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verified {
    pub user_id: UserId,
    pub user_name: String,
    pub guild_id: GuildId,
}

#[derive(Debug)]
pub enum Outcome {
    Success {
        message: &'static str,
        verified: Option<Verified>,
    },
    Failure(Failure),
}

impl Outcome {
    pub fn success(message: &'static str) -> Self {
        Outcome::Success {
            message,
            verified: None,
        }
    }

    pub fn failure(kind: FailureKind, context: &'static str) -> Self {
        Outcome::Failure(Failure::new(kind, context))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn failure_kind(&self) -> Option<&FailureKind> {
        match self {
            Outcome::Failure(f) => Some(&f.kind),
            Outcome::Success { .. } => None,
        }
    }
}

impl From<Failure> for Outcome {
    fn from(failure: Failure) -> Self {
        Outcome::Failure(failure)
    }
}
