use crate::db::models::DbToken;
use crate::db::sqlite::{PawStore, exactly_one};
use crate::error::PawbookError;

impl PawStore {
    /// Make `token` the single active token for `email`, replacing any earlier
    /// one in the same statement.
    pub async fn add_token(&self, email: &str, token: &str) -> Result<bool, PawbookError> {
        let res = self
            .execute(
                "add_token",
                sqlx::query(
                    r#"
                    INSERT INTO token (email, token) VALUES (?, ?)
                    ON CONFLICT(email) DO UPDATE SET token = excluded.token
                    "#,
                )
                .bind(email)
                .bind(token),
            )
            .await?;
        Ok(exactly_one(&res))
    }

    pub async fn get_email_by_token(&self, token: &str) -> Result<Option<String>, PawbookError> {
        let row = self
            .fetch_optional(
                "get_email_by_token",
                sqlx::query_as::<_, (String,)>("SELECT email FROM token WHERE token = ?")
                    .bind(token),
            )
            .await?;
        Ok(row.map(|(email,)| email))
    }

    /// The active token row for `email`, if any.
    pub async fn get_token(&self, email: &str) -> Result<Option<DbToken>, PawbookError> {
        self.fetch_optional(
            "get_token",
            sqlx::query_as::<_, DbToken>("SELECT email, token FROM token WHERE email = ?")
                .bind(email),
        )
        .await
    }

    pub async fn delete_token(&self, email: &str) -> Result<bool, PawbookError> {
        let res = self
            .execute(
                "delete_token",
                sqlx::query("DELETE FROM token WHERE email = ?").bind(email),
            )
            .await?;
        Ok(exactly_one(&res))
    }
}
