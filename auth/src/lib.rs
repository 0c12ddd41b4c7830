//! Authentication utilities library
//!
//! Provides the authentication core shared by the backend services:
//! - Password hashing and verification (Argon2id)
//! - Password strength policy
//! - Signed access-token issuance and verification (HS256 JWT)
//! - Authentication coordination for registration/login flows
//!
//! The library is storage-agnostic: services own persistence and adapt
//! these implementations behind their own ports.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("My_password1").unwrap();
//! assert!(hasher.verify("My_password1", &hash));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{SubjectClaims, TokenCodec, ValidityWindow};
//!
//! let codec = TokenCodec::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     ValidityWindow::parse("7d"),
//! );
//! let token = codec
//!     .issue(SubjectClaims::new("user123", "alice@example.com", "founder"))
//!     .unwrap();
//! let verified = codec.verify(&token).unwrap();
//! assert_eq!(verified.user_id, "user123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, SubjectClaims, ValidityWindow};
//!
//! let auth = Authenticator::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     ValidityWindow::default(),
//! );
//!
//! // Register: enforce policy, then hash
//! let hash = auth.register_credential("Password123").unwrap();
//!
//! // Login: verify and generate token
//! let subject = SubjectClaims::new("user123", "alice@example.com", "founder");
//! let result = auth.authenticate("Password123", &hash, subject).unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.user_id, "user123");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PasswordPolicy;
pub use password::WeakPassword;
pub use token::extract_from_header;
pub use token::SubjectClaims;
pub use token::TokenCodec;
pub use token::TokenError;
pub use token::ValidityWindow;
pub use token::VerifiedClaims;
