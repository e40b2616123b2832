#![allow(dead_code)]

use pawbook::config::DatabaseConfig;
use pawbook::{PawStore, Profile};

/// Fresh in-memory store with the schema applied. One connection keeps every
/// statement on the same in-memory database.
pub async fn memory_store() -> PawStore {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        connect_timeout_secs: 5,
        max_connections: 1,
    };
    PawStore::open(&cfg).await.expect("open in-memory store")
}

pub fn rex(email: &str) -> Profile {
    Profile {
        email: email.to_string(),
        dog_name: "Rex".to_string(),
        breed: "Lab".to_string(),
        description: "Loves tennis balls".to_string(),
        owner_name: "Sam".to_string(),
        image_link: "https://img.example/rex.png".to_string(),
    }
}

pub async fn token_rows(store: &PawStore, email: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM token WHERE email = ?")
        .bind(email)
        .fetch_one(store.pool())
        .await
        .expect("count token rows")
}
