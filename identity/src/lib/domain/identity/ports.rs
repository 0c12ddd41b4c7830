use async_trait::async_trait;

use crate::identity::errors::StoreError;
use crate::identity::models::Identity;
use crate::identity::models::SubjectId;

/// Read-only lookup capability provided by the external document store.
///
/// The core never writes through this port; persistence of identities
/// and credential hashes is owned entirely by the store.
#[async_trait]
pub trait IdentityStore: Send + Sync + 'static {
    /// Retrieve an identity by subject id.
    ///
    /// # Arguments
    /// * `id` - Subject ID carried in a verified token
    ///
    /// # Returns
    /// Optional identity (None if the subject was deleted or deactivated)
    ///
    /// # Errors
    /// * `Unavailable` - Store lookup failed
    async fn find_by_subject_id(&self, id: &SubjectId) -> Result<Option<Identity>, StoreError>;

    /// Retrieve an identity and its stored credential hash by email.
    ///
    /// Used by login handlers to verify a presented password before
    /// issuing a token.
    ///
    /// # Arguments
    /// * `email` - Email address to search for
    ///
    /// # Returns
    /// Optional identity plus PHC-format credential hash
    ///
    /// # Errors
    /// * `Unavailable` - Store lookup failed
    async fn find_by_email(&self, email: &str)
        -> Result<Option<(Identity, String)>, StoreError>;
}
