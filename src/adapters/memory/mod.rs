//! In-memory adapters.
//!
//! Back the ports with plain process memory. Used by the test suite and by
//! the dev harness when no database is configured.

mod group_repository;
mod request_repository;
mod session_store;
mod user_repository;

pub use group_repository::InMemoryGroupRepository;
pub use request_repository::InMemoryRequestRepository;
pub use session_store::InMemorySessionStore;
pub use user_repository::InMemoryUserRepository;
