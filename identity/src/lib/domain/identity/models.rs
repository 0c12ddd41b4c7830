use std::fmt;
use std::str::FromStr;

use auth::SubjectClaims;
use uuid::Uuid;

use crate::identity::errors::EmailError;
use crate::identity::errors::RoleError;
use crate::identity::errors::SubjectIdError;

/// Verified identity of a request's subject.
///
/// Owned by the external store; the core reads the subset needed for
/// token claims and guard resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: SubjectId,
    pub email: EmailAddress,
    pub role: Role,
}

impl Identity {
    /// Project this identity into the claim set carried by access tokens.
    pub fn subject_claims(&self) -> SubjectClaims {
        SubjectClaims::new(self.id.as_str(), self.email.as_str(), self.role.as_str())
    }
}

/// Subject unique identifier type
///
/// Opaque, stable, and immutable once assigned. New ids are UUIDv4
/// strings; anything non-empty parses, since existing records own
/// their id format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubjectId(String);

impl SubjectId {
    /// Mint a new random subject ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Parse a subject ID from string.
    ///
    /// # Errors
    /// * `Empty` - String is empty
    pub fn from_string(s: &str) -> Result<Self, SubjectIdError> {
        if s.is_empty() {
            return Err(SubjectIdError::Empty);
        }
        Ok(Self(s.to_string()))
    }

    /// Get the id as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Subject role tag.
///
/// Closed set; unknown role strings are rejected rather than defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Investor,
    Founder,
    /// Registration started but not yet completed
    Pending,
}

impl Role {
    /// Get the role's wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Investor => "investor",
            Role::Founder => "founder",
            Role::Pending => "pending",
        }
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "investor" => Ok(Role::Investor),
            "founder" => Ok(Role::Founder),
            "pending" => Ok(Role::Pending),
            other => Err(RoleError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
