use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::password::PasswordPolicy;
use crate::password::WeakPassword;
use crate::token::SubjectClaims;
use crate::token::TokenCodec;
use crate::token::TokenError;
use crate::token::ValidityWindow;
use crate::token::VerifiedClaims;

/// Authentication coordinator combining the password policy, password
/// hashing, and token issuance.
///
/// Provides the registration and login sequences so handlers do not
/// wire the individual pieces themselves.
pub struct Authenticator {
    policy: PasswordPolicy,
    hasher: PasswordHasher,
    codec: TokenCodec,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{0}")]
    WeakPassword(#[from] WeakPassword),

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `secret` - Secret key for token signing
    /// * `window` - Validity window for issued tokens
    pub fn new(secret: &[u8], window: ValidityWindow) -> Self {
        Self {
            policy: PasswordPolicy::new(),
            hasher: PasswordHasher::new(),
            codec: TokenCodec::new(secret, window),
        }
    }

    /// Produce a storable credential hash for a new registration.
    ///
    /// Enforces the password policy before hashing.
    ///
    /// # Arguments
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Hashed password string, safe to persist
    ///
    /// # Errors
    /// * `WeakPassword` - Password fails the strength policy
    /// * `PasswordError` - Hashing operation failed
    pub fn register_credential(&self, password: &str) -> Result<String, AuthenticationError> {
        self.policy.validate(password)?;
        Ok(self.hasher.hash(password)?)
    }

    /// Verify credentials and generate an access token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identity fields to carry in the token
    ///
    /// # Returns
    /// AuthenticationResult with access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `TokenError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: SubjectClaims,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.codec.issue(subject)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Generate an access token without password verification.
    ///
    /// Useful when authentication has already been established by other
    /// means (e.g. an OAuth session exchange).
    ///
    /// # Errors
    /// * `TokenError` - Token generation failed
    pub fn issue_token(&self, subject: SubjectClaims) -> Result<String, TokenError> {
        self.codec.issue(subject)
    }

    /// Validate an access token and return its trusted claims.
    ///
    /// # Errors
    /// * `TokenError` - Token verification failed
    pub fn validate_token(&self, token: &str) -> Result<VerifiedClaims, TokenError> {
        self.codec.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn authenticator() -> Authenticator {
        Authenticator::new(SECRET, ValidityWindow::default())
    }

    #[test]
    fn test_register_and_authenticate() {
        let auth = authenticator();

        let password = "My_password1";
        let hash = auth
            .register_credential(password)
            .expect("Failed to hash password");

        let subject = SubjectClaims::new("user123", "alice@example.com", "investor");
        let result = auth
            .authenticate(password, &hash, subject)
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let claims = auth
            .validate_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(claims.user_id, "user123");
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.user_type, "investor");
    }

    #[test]
    fn test_register_rejects_weak_password() {
        let auth = authenticator();

        let result = auth.register_credential("weakpass");
        assert!(matches!(
            result,
            Err(AuthenticationError::WeakPassword(
                WeakPassword::MissingUppercase
            ))
        ));
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let auth = authenticator();

        let hash = auth
            .register_credential("My_password1")
            .expect("Failed to hash password");

        let subject = SubjectClaims::new("user123", "alice@example.com", "investor");
        let result = auth.authenticate("Wrong_password1", &hash, subject);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_validate_invalid_token() {
        let auth = authenticator();

        let result = auth.validate_token("invalid.token.here");
        assert!(result.is_err());
    }
}
