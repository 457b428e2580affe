//! User repository port.

use crate::domain::foundation::{DomainError, GroupId, UserId};
use crate::domain::user::Role;
use async_trait::async_trait;

/// Repository port for chat users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates the user if absent; a no-op otherwise. Called on every start
    /// event so the core can assume the row exists afterwards.
    async fn upsert(&self, id: UserId) -> Result<(), DomainError>;

    /// The user's current role.
    ///
    /// Unknown users resolve to [`Role::Student`]; roles are managed
    /// externally and must be re-read per admin action, never cached.
    async fn role(&self, id: UserId) -> Result<Role, DomainError>;

    /// Sets or replaces the user's group assignment.
    async fn assign_group(&self, id: UserId, group: GroupId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn UserRepository) {}
    }
}
