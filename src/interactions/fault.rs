//! Faults returned by the outbound Discord calls and their classification.
use serenity::http::HttpError;
use serenity::model::error::Error as ModelError;
use std::borrow::Cow;
use std::fmt;

/// A Discord JSON error code (`{"code": 50013, "message": ...}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(pub isize);

impl ErrorCode {
    pub const UNKNOWN_CHANNEL: ErrorCode = ErrorCode(10003);
    pub const UNKNOWN_GUILD: ErrorCode = ErrorCode(10004);
    pub const UNKNOWN_MEMBER: ErrorCode = ErrorCode(10007);
    pub const UNKNOWN_MESSAGE: ErrorCode = ErrorCode(10008);
    pub const UNKNOWN_ROLE: ErrorCode = ErrorCode(10011);
    pub const UNKNOWN_USER: ErrorCode = ErrorCode(10013);
    pub const UNKNOWN_INTERACTION: ErrorCode = ErrorCode(10062);
    pub const MAX_ROLES_PER_GUILD: ErrorCode = ErrorCode(30005);
    pub const INTERACTION_ALREADY_ACKNOWLEDGED: ErrorCode = ErrorCode(40060);
    pub const MISSING_ACCESS: ErrorCode = ErrorCode(50001);
    pub const CANNOT_SEND_TO_USER: ErrorCode = ErrorCode(50007);
    pub const MISSING_PERMISSIONS: ErrorCode = ErrorCode(50013);
    pub const INVALID_FORM_BODY: ErrorCode = ErrorCode(50035);

    /// Upper snake case name shown to users; unlisted codes render as `ERROR_<code>`.
    pub fn name(self) -> Cow<'static, str> {
        let known = match self {
            Self::UNKNOWN_CHANNEL => "UNKNOWN_CHANNEL",
            Self::UNKNOWN_GUILD => "UNKNOWN_GUILD",
            Self::UNKNOWN_MEMBER => "UNKNOWN_MEMBER",
            Self::UNKNOWN_MESSAGE => "UNKNOWN_MESSAGE",
            Self::UNKNOWN_ROLE => "UNKNOWN_ROLE",
            Self::UNKNOWN_USER => "UNKNOWN_USER",
            Self::UNKNOWN_INTERACTION => "UNKNOWN_INTERACTION",
            Self::MAX_ROLES_PER_GUILD => "MAX_ROLES_PER_GUILD",
            Self::INTERACTION_ALREADY_ACKNOWLEDGED => "INTERACTION_ALREADY_ACKNOWLEDGED",
            Self::MISSING_ACCESS => "MISSING_ACCESS",
            Self::CANNOT_SEND_TO_USER => "CANNOT_SEND_TO_USER",
            Self::MISSING_PERMISSIONS => "MISSING_PERMISSIONS",
            Self::INVALID_FORM_BODY => "INVALID_FORM_BODY",
            Self(other) => return Cow::Owned(format!("ERROR_{other}")),
        };
        Cow::Borrowed(known)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.0)
    }
}

/// Result of an outbound call that did not succeed.
#[derive(Debug)]
pub enum Fault {
    /// The bot lacks the permission the call needs.
    MissingPermissions,
    /// The target role sits at or above the bot's highest role.
    Hierarchy,
    /// Discord rejected the request with a structured JSON error.
    Platform { code: ErrorCode, message: String },
    /// Anything else: transport, decode, timeouts.
    Other(anyhow::Error),
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::MissingPermissions => f.write_str("missing permissions"),
            Fault::Hierarchy => f.write_str("role hierarchy violation"),
            Fault::Platform { code, message } => write!(f, "discord error {code}: {message}"),
            Fault::Other(e) => write!(f, "{e:#}"),
        }
    }
}

impl From<serenity::Error> for Fault {
    fn from(err: serenity::Error) -> Self {
        match err {
            serenity::Error::Model(ModelError::InvalidPermissions { .. }) => {
                Fault::MissingPermissions
            }
            serenity::Error::Model(ModelError::Hierarchy) => Fault::Hierarchy,
            serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
                Fault::from_code(response.error.code, response.error.message)
            }
            other => Fault::Other(anyhow::Error::from(other)),
        }
    }
}

impl Fault {
    /// Classify a Discord JSON error. A REST-side permission refusal is the same
    /// condition the cache pre-check reports, so both surface as `MissingPermissions`.
    pub fn from_code(code: isize, message: impl Into<String>) -> Self {
        let code = ErrorCode(code);
        if code == ErrorCode::MISSING_PERMISSIONS {
            Fault::MissingPermissions
        } else {
            Fault::Platform {
                code,
                message: message.into(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::model::Permissions;

    #[test]
    fn known_codes_have_names() {
        assert_eq!(ErrorCode(10011).name(), "UNKNOWN_ROLE");
        assert_eq!(ErrorCode::MISSING_ACCESS.name(), "MISSING_ACCESS");
    }

    #[test]
    fn unknown_codes_fall_back_to_numeric_name() {
        assert_eq!(ErrorCode(99999).name(), "ERROR_99999");
    }

    #[test]
    fn rest_permission_refusal_is_missing_permissions() {
        assert!(matches!(
            Fault::from_code(50013, "Missing Permissions"),
            Fault::MissingPermissions
        ));
        assert!(matches!(
            Fault::from_code(10011, "Unknown Role"),
            Fault::Platform { code: ErrorCode::UNKNOWN_ROLE, .. }
        ));
    }

    #[test]
    fn client_side_model_errors_map_to_their_faults() {
        let hierarchy = Fault::from(serenity::Error::Model(ModelError::Hierarchy));
        assert!(matches!(hierarchy, Fault::Hierarchy));

        let refused = Fault::from(serenity::Error::Model(ModelError::InvalidPermissions {
            required: Permissions::MANAGE_ROLES,
            present: Permissions::empty(),
        }));
        assert!(matches!(refused, Fault::MissingPermissions));
    }

    #[test]
    fn other_serenity_errors_are_opaque() {
        let fault = Fault::from(serenity::Error::Other("gateway closed"));
        assert!(matches!(fault, Fault::Other(_)));
        assert!(fault.to_string().contains("gateway closed"));
    }
}
