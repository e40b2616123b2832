//! Password hashing and session-token generation.

pub mod password;
pub mod token;

pub use password::{hash_password, verify_password};
pub use token::generate_token;
