//! HTTP API layer

pub mod accounts;
pub mod health;
pub mod middleware;
pub mod router;
pub mod state;
pub mod types;

pub use middleware::RequireAccount;
pub use router::create_router_with_state;
pub use state::AppState;
