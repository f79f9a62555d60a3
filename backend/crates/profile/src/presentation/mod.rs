//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use extract::JsonBody;
pub use handlers::ProfileAppState;
pub use middleware::{AuthUser, require_auth};
pub use router::{profile_router, profile_router_generic};
