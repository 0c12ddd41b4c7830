use serde::Deserialize;
use serde::Serialize;

/// Token kind stamped into every issued token.
///
/// Only access tokens exist; anything else is rejected at verification.
pub const TOKEN_KIND_ACCESS: &str = "access";

/// Identity fields supplied by the caller when issuing a token.
///
/// The codec stamps timestamps and the token kind itself, so this is
/// only the subject-describing subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectClaims {
    pub user_id: String,
    pub email: String,
    pub user_type: String,
}

impl SubjectClaims {
    /// Build subject claims for token issuance.
    pub fn new(
        user_id: impl Into<String>,
        email: impl Into<String>,
        user_type: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            user_type: user_type.into(),
        }
    }
}

/// Full claim set carried on the wire.
///
/// The shape is closed: a token carrying any field outside this set
/// fails deserialization and is rejected as malformed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Claims {
    /// Subject identifier
    pub user_id: String,

    /// Subject email at issuance time
    pub email: String,

    /// Subject role at issuance time
    pub user_type: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Token kind, always [`TOKEN_KIND_ACCESS`] for issued tokens
    #[serde(rename = "type")]
    pub kind: String,
}

/// Claims trusted after signature, kind, and expiry verification.
///
/// Distinct from [`Claims`] so an unverified payload cannot be handed
/// to code expecting verified output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedClaims {
    pub user_id: String,
    pub email: String,
    pub user_type: String,
}

impl From<Claims> for VerifiedClaims {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email,
            user_type: claims.user_type,
        }
    }
}
