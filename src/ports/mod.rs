//! Ports - trait contracts toward external collaborators.
//!
//! Storage and the chat transport live behind these interfaces; the
//! application layer only ever sees the traits.

mod group_repository;
mod request_repository;
mod session_store;
mod transport;
mod user_repository;

pub use group_repository::GroupRepository;
pub use request_repository::RequestRepository;
pub use session_store::SessionStore;
pub use transport::Transport;
pub use user_repository::UserRepository;
