use crate::server::handlers::{
    create_profile, delete_profile, get_profile, health, login, logout, register, remove_account,
    update_profile,
};
use crate::service::AccountService;
use axum::{
    Router,
    routing::{delete, get, post},
};

#[derive(Clone)]
pub struct PawbookState {
    pub accounts: AccountService,
}

impl PawbookState {
    pub fn new(accounts: AccountService) -> Self {
        Self { accounts }
    }
}

pub fn pawbook_router(state: PawbookState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/account", delete(remove_account))
        .route("/profiles", post(create_profile))
        .route(
            "/profiles/{email}",
            get(get_profile).put(update_profile).delete(delete_profile),
        )
        .with_state(state)
}
