use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::TokenCodec;
use auth::ValidityWindow;
use identity::identity::errors::StoreError;
use identity::identity::guard::AuthGuard;
use identity::identity::guard::CredentialSource;
use identity::identity::models::EmailAddress;
use identity::identity::models::Identity;
use identity::identity::models::Role;
use identity::identity::models::SubjectId;
use identity::identity::ports::IdentityStore;

const SECRET: &[u8] = b"test-secret-key-for-signing-at-least-32-bytes";

/// In-memory store standing in for the document database.
#[derive(Default)]
struct InMemoryStore {
    records: HashMap<String, (Identity, String)>,
}

impl InMemoryStore {
    fn insert(&mut self, identity: Identity, credential_hash: String) {
        self.records
            .insert(identity.id.as_str().to_string(), (identity, credential_hash));
    }
}

#[async_trait]
impl IdentityStore for InMemoryStore {
    async fn find_by_subject_id(&self, id: &SubjectId) -> Result<Option<Identity>, StoreError> {
        Ok(self
            .records
            .get(id.as_str())
            .map(|(identity, _)| identity.clone()))
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<(Identity, String)>, StoreError> {
        Ok(self
            .records
            .values()
            .find(|(identity, _)| identity.email.as_str() == email)
            .cloned())
    }
}

fn new_identity(email: &str, role: Role) -> Identity {
    Identity {
        id: SubjectId::generate(),
        email: EmailAddress::new(email.to_string()).unwrap(),
        role,
    }
}

#[tokio::test]
async fn register_login_and_resolve() {
    let authenticator = Authenticator::new(SECRET, ValidityWindow::parse("7d"));

    // Registration: policy-checked hash goes into the store
    let hash = authenticator
        .register_credential("Valid123")
        .expect("Registration failed");

    let mut store = InMemoryStore::default();
    let founder = new_identity("a@b.com", Role::Founder);
    store.insert(founder.clone(), hash);
    let store = Arc::new(store);

    // Login: look the subject up by email, verify, issue a token
    let (identity, stored_hash) = store
        .find_by_email("a@b.com")
        .await
        .expect("Store lookup failed")
        .expect("Subject missing");
    let result = authenticator
        .authenticate("Valid123", &stored_hash, identity.subject_claims())
        .expect("Login failed");

    // Protected request: guard resolves the bearer token to the live identity
    let guard = AuthGuard::new(TokenCodec::new(SECRET, ValidityWindow::parse("7d")), store);
    let source = CredentialSource::from_header(format!("Bearer {}", result.access_token));

    let resolved = guard
        .resolve_required(&source)
        .await
        .expect("Guard resolution failed");
    assert_eq!(resolved, founder);
}

#[tokio::test]
async fn login_with_wrong_password_is_rejected() {
    let authenticator = Authenticator::new(SECRET, ValidityWindow::default());
    let hash = authenticator
        .register_credential("Valid123")
        .expect("Registration failed");

    let mut store = InMemoryStore::default();
    store.insert(new_identity("a@b.com", Role::Investor), hash);

    let (identity, stored_hash) = store
        .find_by_email("a@b.com")
        .await
        .unwrap()
        .expect("Subject missing");

    let result =
        authenticator.authenticate("Wrong1234", &stored_hash, identity.subject_claims());
    assert!(result.is_err());
}

#[tokio::test]
async fn deleted_subject_is_rejected_despite_valid_token() {
    let authenticator = Authenticator::new(SECRET, ValidityWindow::default());
    let pending = new_identity("gone@b.com", Role::Pending);
    let token = authenticator
        .issue_token(pending.subject_claims())
        .expect("Failed to issue token");

    // Store never saw (or already deleted) the subject
    let guard = AuthGuard::new(
        TokenCodec::new(SECRET, ValidityWindow::default()),
        Arc::new(InMemoryStore::default()),
    );
    let source = CredentialSource::from_cookie(token);

    assert!(guard.resolve_required(&source).await.is_err());
    assert!(guard.resolve_optional(&source).await.is_none());
}

#[tokio::test]
async fn unknown_email_yields_none() {
    let store = InMemoryStore::default();
    assert!(store
        .find_by_email("nobody@b.com")
        .await
        .expect("Store lookup failed")
        .is_none());
}
