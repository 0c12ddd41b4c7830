use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::SubjectClaims;
use super::claims::VerifiedClaims;
use super::claims::TOKEN_KIND_ACCESS;
use super::errors::TokenError;

/// How long an issued token stays valid.
///
/// Parsed from the `"<N>d"` / `"<N>h"` configuration convention;
/// anything else falls back to the 7-day default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidityWindow(Duration);

impl ValidityWindow {
    const DEFAULT_DAYS: i64 = 7;

    /// Parse a validity window from its configuration string.
    ///
    /// # Arguments
    /// * `value` - Window string, e.g. `"7d"` or `"12h"`
    ///
    /// # Returns
    /// Parsed window, or the 7-day default if the string is unrecognized
    pub fn parse(value: &str) -> Self {
        match Self::try_parse(value) {
            Some(window) => window,
            None => {
                tracing::warn!(
                    value,
                    "unrecognized validity window, falling back to 7 days"
                );
                Self::default()
            }
        }
    }

    fn try_parse(value: &str) -> Option<Self> {
        let duration = if let Some(days) = value.strip_suffix('d') {
            Duration::try_days(Self::parse_count(days)?)?
        } else if let Some(hours) = value.strip_suffix('h') {
            Duration::try_hours(Self::parse_count(hours)?)?
        } else {
            return None;
        };
        Some(Self(duration))
    }

    fn parse_count(value: &str) -> Option<i64> {
        value.parse().ok().filter(|count| *count >= 0)
    }

    /// Get the window as a duration.
    pub fn duration(&self) -> Duration {
        self.0
    }
}

impl Default for ValidityWindow {
    fn default() -> Self {
        Self(Duration::days(Self::DEFAULT_DAYS))
    }
}

/// Access-token codec: issues and verifies signed, stateless tokens.
///
/// Uses HS256 (HMAC with SHA-256); the algorithm is pinned for the
/// process lifetime and tokens naming any other algorithm are rejected
/// rather than negotiated. Both the signing secret and the validity
/// window are fixed at construction, so a codec is safe to share across
/// concurrent verifications.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    window: ValidityWindow,
}

impl TokenCodec {
    /// Create a new token codec.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `window` - Validity window applied to issued tokens
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], window: ValidityWindow) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            window,
        }
    }

    /// Issue a signed access token for a subject.
    ///
    /// Stamps `iat` with the current time and `exp` with the configured
    /// validity window.
    ///
    /// # Arguments
    /// * `subject` - Identity fields to carry in the token
    ///
    /// # Returns
    /// Compact JWT string
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing failed; not expected for well-formed
    ///   input and treated as fatal by callers
    pub fn issue(&self, subject: SubjectClaims) -> Result<String, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token as of an explicit instant.
    ///
    /// Clock seam for tests; production callers use [`TokenCodec::issue`].
    pub fn issue_at(
        &self,
        subject: SubjectClaims,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims {
            user_id: subject.user_id,
            email: subject.email,
            user_type: subject.user_type,
            iat: now.timestamp(),
            exp: (now + self.window.duration()).timestamp(),
            kind: TOKEN_KIND_ACCESS.to_string(),
        };

        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and return its trusted claims.
    ///
    /// Checks run in order: signature and claim shape, then token kind,
    /// then expiry. There is no stored token state; validity is re-derived
    /// from the claims and the current time on every call.
    ///
    /// # Arguments
    /// * `token` - Compact JWT string
    ///
    /// # Returns
    /// Verified claims
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature does not match the process secret
    /// * `Malformed` - Token structure, algorithm, or claim shape is wrong
    /// * `WrongKind` - Token is not an access token
    /// * `Expired` - Token expiry has passed
    pub fn verify(&self, token: &str) -> Result<VerifiedClaims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token against an explicit instant.
    ///
    /// Clock seam for tests; production callers use [`TokenCodec::verify`].
    pub fn verify_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<VerifiedClaims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below against the caller's clock
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        let claims = token_data.claims;

        if claims.kind != TOKEN_KIND_ACCESS {
            return Err(TokenError::WrongKind(claims.kind));
        }

        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims.into())
    }
}

/// Extract a bearer token from an `Authorization` header value.
///
/// Accepts exactly the two-token form `Bearer <token>` with a
/// case-insensitive scheme name; any other shape yields `None`.
pub fn extract_from_header(value: &str) -> Option<&str> {
    let mut parts = value.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    scheme.eq_ignore_ascii_case("bearer").then_some(token)
}
