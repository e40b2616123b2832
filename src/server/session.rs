use crate::error::PawbookError;
use crate::server::router::PawbookState;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use headers::{Authorization, authorization::Bearer};

/// Caller identity resolved from `Authorization: Bearer <token>`.
#[derive(Debug, Clone)]
pub struct Session {
    pub email: String,
}

impl Session {
    /// Sessions may only modify rows keyed by their own email.
    pub fn ensure_owns(&self, email: &str) -> Result<(), PawbookError> {
        if self.email == email {
            Ok(())
        } else {
            Err(PawbookError::Forbidden(email.to_string()))
        }
    }
}

impl FromRequestParts<PawbookState> for Session {
    type Rejection = PawbookError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &PawbookState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| PawbookError::Unauthorized)?;
        let email = state.accounts.authenticate(bearer.token()).await?;
        Ok(Self { email })
    }
}
