use std::sync::Arc;

use auth::extract_from_header;
use auth::TokenCodec;
use auth::TokenError;

use crate::identity::errors::AuthFailure;
use crate::identity::models::Identity;
use crate::identity::models::SubjectId;
use crate::identity::ports::IdentityStore;

/// Cookie carrying the access token when no Authorization header is used.
pub const SESSION_COOKIE: &str = "session_token";

/// Credential material presented by a request.
///
/// Handlers fill in whichever carriers the request actually had; the
/// guard decides what to trust. The bearer header takes precedence over
/// the session cookie.
#[derive(Debug, Clone, Default)]
pub struct CredentialSource {
    /// Raw `Authorization` header value, if present
    pub authorization: Option<String>,

    /// Raw `session_token` cookie value, if present
    pub session_cookie: Option<String>,
}

impl CredentialSource {
    /// Source carrying only an Authorization header.
    pub fn from_header(value: impl Into<String>) -> Self {
        Self {
            authorization: Some(value.into()),
            ..Self::default()
        }
    }

    /// Source carrying only a session cookie.
    pub fn from_cookie(value: impl Into<String>) -> Self {
        Self {
            session_cookie: Some(value.into()),
            ..Self::default()
        }
    }

    fn token(&self) -> Option<&str> {
        if let Some(header) = &self.authorization {
            if let Some(token) = extract_from_header(header) {
                return Some(token);
            }
        }

        self.session_cookie.as_deref()
    }
}

/// Resolves a request's presented credential into a verified identity.
///
/// Verifies the token, then looks the subject up in the external store
/// so deleted or deactivated subjects are rejected even while their
/// tokens are still within the validity window. The store lookup is the
/// only await point and performs no writes, so cancelling a pending
/// resolution has no side effects.
pub struct AuthGuard<S>
where
    S: IdentityStore,
{
    codec: TokenCodec,
    store: Arc<S>,
}

impl<S> AuthGuard<S>
where
    S: IdentityStore,
{
    /// Create a new guard with injected dependencies.
    ///
    /// # Arguments
    /// * `codec` - Token codec configured with the process secret
    /// * `store` - Identity lookup implementation
    pub fn new(codec: TokenCodec, store: Arc<S>) -> Self {
        Self { codec, store }
    }

    /// Resolve a credential that the caller requires to be valid.
    ///
    /// # Arguments
    /// * `source` - Credential material extracted from the request
    ///
    /// # Returns
    /// The live identity of the token's subject
    ///
    /// # Errors
    /// * `Missing` - No credential was presented
    /// * `Invalid` - Token verification failed
    /// * `SubjectGone` - Store no longer has the subject
    /// * `Store` - Store lookup failed
    pub async fn resolve_required(
        &self,
        source: &CredentialSource,
    ) -> Result<Identity, AuthFailure> {
        let token = source.token().ok_or(AuthFailure::Missing)?;

        let claims = self.codec.verify(token).map_err(|e| {
            tracing::warn!(error = %e, "token verification failed");
            AuthFailure::Invalid(e)
        })?;

        let subject_id = SubjectId::from_string(&claims.user_id).map_err(|e| {
            tracing::warn!(error = %e, "verified token carries unusable subject id");
            AuthFailure::Invalid(TokenError::Malformed(e.to_string()))
        })?;

        let identity = self
            .store
            .find_by_subject_id(&subject_id)
            .await
            .map_err(|e| {
                tracing::error!(subject_id = %subject_id, error = %e, "identity store lookup failed");
                AuthFailure::Store(e)
            })?;

        identity.ok_or_else(|| {
            tracing::warn!(subject_id = %subject_id, "token subject no longer exists");
            AuthFailure::SubjectGone
        })
    }

    /// Resolve a credential that the caller can do without.
    ///
    /// Identical resolution logic, but an absent or unverifiable
    /// credential yields `None` instead of an error. Never fails.
    ///
    /// # Arguments
    /// * `source` - Credential material extracted from the request
    ///
    /// # Returns
    /// The live identity, or None
    pub async fn resolve_optional(&self, source: &CredentialSource) -> Option<Identity> {
        match self.resolve_required(source).await {
            Ok(identity) => Some(identity),
            Err(AuthFailure::Missing) => None,
            Err(failure) => {
                tracing::debug!(kind = failure.kind(), "optional credential not resolved");
                None
            }
        }
    }
}
