//! Infrastructure Layer
//!
//! Database implementations and the connection lifecycle.

pub mod connection;
pub mod memory;
pub mod postgres;

pub use connection::{ConnectError, Database, DatabaseConfig};
pub use memory::InMemoryProfileStore;
pub use postgres::PgProfileRepository;
