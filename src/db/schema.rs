//! SQL DDL for initializing the profile, credential and token tables.

/// SQLite schema with:
/// - `user`: one dog-owner profile per `email` (PRIMARY KEY)
/// - `auth`: one Argon2 PHC hash string per `email`
/// - `token`: one session token per `email`; `token` UNIQUE so lookups by
///   token hit an index and two emails can never share a session
///
/// Column names keep the camelCase spelling the application exposes.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS "user" (
    email TEXT NOT NULL PRIMARY KEY,
    dogName TEXT NOT NULL,
    breed TEXT NOT NULL,
    description TEXT NOT NULL,
    ownerName TEXT NOT NULL,
    imageLink TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS auth (
    email TEXT NOT NULL PRIMARY KEY,
    password TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS token (
    email TEXT NOT NULL PRIMARY KEY,
    token TEXT NOT NULL UNIQUE
);
"#;

/// Split [`SQLITE_INIT`] into individual statements; `sqlx::query` runs one at a time.
pub fn statements() -> impl Iterator<Item = &'static str> {
    SQLITE_INIT
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
