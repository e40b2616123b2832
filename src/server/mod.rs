//! JSON-over-HTTP surface for the account service.

pub mod handlers;
pub mod router;
pub mod session;

pub use router::{PawbookState, pawbook_router};
pub use session::Session;
