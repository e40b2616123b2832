use crate::auth::password::{hash_password, verify_password};
use crate::db::models::DbCredential;
use crate::db::sqlite::{PawStore, exactly_one};
use crate::error::PawbookError;

impl PawStore {
    /// Store a salted hash of `password` for `email`. Returns `false` when a
    /// credential for `email` already exists.
    pub async fn add_credential(&self, email: &str, password: &str) -> Result<bool, PawbookError> {
        let hash = hash_password(password).await?;
        let res = self
            .execute(
                "add_credential",
                sqlx::query(
                    "INSERT INTO auth (email, password) VALUES (?, ?) ON CONFLICT(email) DO NOTHING",
                )
                .bind(email)
                .bind(hash),
            )
            .await?;
        Ok(exactly_one(&res))
    }

    /// `true` only when `email` has a credential and `password` matches it.
    pub async fn validate_credential(
        &self,
        email: &str,
        password: &str,
    ) -> Result<bool, PawbookError> {
        let stored = self
            .fetch_optional(
                "validate_credential",
                sqlx::query_as::<_, DbCredential>(
                    "SELECT email, password FROM auth WHERE email = ?",
                )
                .bind(email),
            )
            .await?;
        let Some(cred) = stored else {
            return Ok(false);
        };
        verify_password(password, &cred.password).await
    }

    pub async fn delete_credential(&self, email: &str) -> Result<bool, PawbookError> {
        let res = self
            .execute(
                "delete_credential",
                sqlx::query("DELETE FROM auth WHERE email = ?").bind(email),
            )
            .await?;
        Ok(exactly_one(&res))
    }
}
