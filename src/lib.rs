pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod server;
pub mod service;

pub use db::{PawStore, Profile, ProfileFields};
pub use error::PawbookError;
pub use service::AccountService;
