use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A dog-owner profile, keyed by `email`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Profile {
    pub email: String,
    pub dog_name: String,
    pub breed: String,
    pub description: String,
    pub owner_name: String,
    pub image_link: String,
}

/// Profile body without the key, as sent by clients updating their own row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFields {
    pub dog_name: String,
    pub breed: String,
    pub description: String,
    pub owner_name: String,
    pub image_link: String,
}

impl ProfileFields {
    pub fn with_email(self, email: impl Into<String>) -> Profile {
        Profile {
            email: email.into(),
            dog_name: self.dog_name,
            breed: self.breed,
            description: self.description,
            owner_name: self.owner_name,
            image_link: self.image_link,
        }
    }
}

impl From<Profile> for ProfileFields {
    fn from(p: Profile) -> Self {
        Self {
            dog_name: p.dog_name,
            breed: p.breed,
            description: p.description,
            owner_name: p.owner_name,
            image_link: p.image_link,
        }
    }
}

/// Row of the `auth` table. `password` is a PHC hash string, never plaintext.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DbCredential {
    pub email: String,
    pub password: String,
}

/// Row of the `token` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DbToken {
    pub email: String,
    pub token: String,
}
