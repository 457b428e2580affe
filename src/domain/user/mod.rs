//! User module - chat users and their roles.

mod user;

pub use user::{Role, User};
