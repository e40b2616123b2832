use crate::auth::generate_token;
use crate::db::models::Profile;
use crate::db::sqlite::PawStore;
use crate::error::PawbookError;
use tracing::{debug, info, warn};

/// Account workflows composed from single-statement [`PawStore`] calls.
///
/// The store reports "nothing matched" as `false`/`None`; this layer turns
/// those outcomes into the matching [`PawbookError`] variant.
#[derive(Clone)]
pub struct AccountService {
    store: PawStore,
}

impl AccountService {
    pub fn new(store: PawStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &PawStore {
        &self.store
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<(), PawbookError> {
        if !self.store.add_credential(email, password).await? {
            debug!(email, "register rejected: credential exists");
            return Err(PawbookError::Conflict(format!("account {email}")));
        }
        info!(email, "account registered");
        Ok(())
    }

    /// Check the password and issue a new session token. Any previous token
    /// for the same email stops resolving.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, PawbookError> {
        if !self.store.validate_credential(email, password).await? {
            warn!(email, "login rejected");
            return Err(PawbookError::InvalidCredentials);
        }
        let token = generate_token();
        self.store.add_token(email, &token).await?;
        info!(email, "session issued");
        Ok(token)
    }

    /// Resolve a session token to the email it belongs to.
    pub async fn authenticate(&self, token: &str) -> Result<String, PawbookError> {
        self.store
            .get_email_by_token(token)
            .await?
            .ok_or(PawbookError::Unauthorized)
    }

    pub async fn logout(&self, email: &str) -> Result<(), PawbookError> {
        let removed = self.store.delete_token(email).await?;
        debug!(email, removed, "logout");
        Ok(())
    }

    /// Delete the session, profile and credential for `email`. These are three
    /// independent statements; a failure part-way leaves the earlier deletes applied.
    pub async fn remove_account(&self, email: &str) -> Result<(), PawbookError> {
        self.store.delete_token(email).await?;
        let had_profile = self.store.delete_profile(email).await?;
        if !self.store.delete_credential(email).await? {
            return Err(PawbookError::NotFound(format!("account {email}")));
        }
        info!(email, had_profile, "account removed");
        Ok(())
    }

    pub async fn create_profile(&self, profile: &Profile) -> Result<(), PawbookError> {
        if !self.store.add_profile(profile).await? {
            return Err(PawbookError::Conflict(format!("profile {}", profile.email)));
        }
        info!(email = %profile.email, "profile created");
        Ok(())
    }

    pub async fn profile(&self, email: &str) -> Result<Profile, PawbookError> {
        self.store
            .get_profile(email)
            .await?
            .ok_or_else(|| PawbookError::NotFound(format!("profile {email}")))
    }

    pub async fn update_profile(&self, profile: &Profile) -> Result<(), PawbookError> {
        if !self.store.update_profile(profile).await? {
            return Err(PawbookError::NotFound(format!("profile {}", profile.email)));
        }
        Ok(())
    }

    pub async fn delete_profile(&self, email: &str) -> Result<(), PawbookError> {
        if !self.store.delete_profile(email).await? {
            return Err(PawbookError::NotFound(format!("profile {email}")));
        }
        info!(email, "profile deleted");
        Ok(())
    }
}
