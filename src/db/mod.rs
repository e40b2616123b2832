//! Database module: connection pool, schema and the per-table CRUD surface.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite)
//! - `sqlite.rs`: connection factory and the query-execution helper
//! - `profiles.rs`, `credentials.rs`, `tokens.rs`: one statement per operation

pub mod credentials;
pub mod models;
pub mod profiles;
pub mod schema;
pub mod sqlite;
pub mod tokens;

pub use models::{DbCredential, DbToken, Profile, ProfileFields};
pub use schema::SQLITE_INIT;
pub use sqlite::{PawStore, SqlitePool, connect};
