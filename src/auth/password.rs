//! Argon2id password hashing.
//!
//! Hashes are stored as PHC strings (`$argon2id$v=19$...`), which carry the
//! salt and parameters, so verification needs nothing but the stored string.
//! Both operations are CPU-heavy and run on tokio's blocking pool.

use crate::error::PawbookError;
use argon2::Argon2;
use argon2::password_hash::{
    self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};

pub async fn hash_password(password: &str) -> Result<String, PawbookError> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || hash_password_blocking(&password)).await?
}

/// `Ok(false)` on mismatch; `Err` only when `phc` is not a valid hash string.
pub async fn verify_password(password: &str, phc: &str) -> Result<bool, PawbookError> {
    let password = password.to_owned();
    let phc = phc.to_owned();
    tokio::task::spawn_blocking(move || verify_password_blocking(&password, &phc)).await?
}

pub fn hash_password_blocking(password: &str) -> Result<String, PawbookError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify_password_blocking(password: &str, phc: &str) -> Result<bool, PawbookError> {
    let parsed = PasswordHash::new(phc)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e.into()),
    }
}
