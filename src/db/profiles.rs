use crate::db::models::Profile;
use crate::db::sqlite::{PawStore, exactly_one};
use crate::error::PawbookError;

const PROFILE_SELECT_SQL: &str = r#"SELECT email, dogName, breed, description, ownerName, imageLink
    FROM "user" WHERE email = ?"#;

impl PawStore {
    /// Insert a new profile. Returns `false` and leaves the stored row alone
    /// when the email is already taken.
    pub async fn add_profile(&self, profile: &Profile) -> Result<bool, PawbookError> {
        let res = self
            .execute(
                "add_profile",
                sqlx::query(
                    r#"
                    INSERT INTO "user" (email, dogName, breed, description, ownerName, imageLink)
                    VALUES (?, ?, ?, ?, ?, ?)
                    ON CONFLICT(email) DO NOTHING
                    "#,
                )
                .bind(profile.email.as_str())
                .bind(profile.dog_name.as_str())
                .bind(profile.breed.as_str())
                .bind(profile.description.as_str())
                .bind(profile.owner_name.as_str())
                .bind(profile.image_link.as_str()),
            )
            .await?;
        Ok(exactly_one(&res))
    }

    /// Overwrite every field of the profile keyed by `profile.email`.
    pub async fn update_profile(&self, profile: &Profile) -> Result<bool, PawbookError> {
        let res = self
            .execute(
                "update_profile",
                sqlx::query(
                    r#"UPDATE "user" SET
                        dogName = ?,
                        breed = ?,
                        description = ?,
                        ownerName = ?,
                        imageLink = ?
                      WHERE email = ?"#,
                )
                .bind(profile.dog_name.as_str())
                .bind(profile.breed.as_str())
                .bind(profile.description.as_str())
                .bind(profile.owner_name.as_str())
                .bind(profile.image_link.as_str())
                .bind(profile.email.as_str()),
            )
            .await?;
        Ok(exactly_one(&res))
    }

    pub async fn get_profile(&self, email: &str) -> Result<Option<Profile>, PawbookError> {
        self.fetch_optional(
            "get_profile",
            sqlx::query_as::<_, Profile>(PROFILE_SELECT_SQL).bind(email),
        )
        .await
    }

    pub async fn delete_profile(&self, email: &str) -> Result<bool, PawbookError> {
        let res = self
            .execute(
                "delete_profile",
                sqlx::query(r#"DELETE FROM "user" WHERE email = ?"#).bind(email),
            )
            .await?;
        Ok(exactly_one(&res))
    }
}
