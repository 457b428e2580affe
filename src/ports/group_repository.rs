//! Group repository port.
//!
//! Contract for the registry of groups owned by the storage collaborator.
//! Every operation sees only active groups unless stated otherwise; name
//! comparison is case-insensitive throughout.

use crate::domain::foundation::{DomainError, Page};
use crate::domain::group::Group;
use async_trait::async_trait;

/// Repository port for the group registry.
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// One page of active groups ordered by name, plus the total count.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on storage failure
    async fn list_active_page(&self, page: u32) -> Result<Page<Group>, DomainError>;

    /// Active groups whose name equals `name` case-insensitively, capped at
    /// [`EXACT_MATCH_CAP`](crate::domain::group::EXACT_MATCH_CAP).
    async fn find_exact(&self, name: &str) -> Result<Vec<Group>, DomainError>;

    /// Active groups whose name contains `name` case-insensitively, ordered
    /// by name and capped at
    /// [`SUBSTRING_MATCH_CAP`](crate::domain::group::SUBSTRING_MATCH_CAP).
    async fn find_substring(&self, name: &str) -> Result<Vec<Group>, DomainError>;

    /// Whether any group (active or not) carries this name.
    async fn exists(&self, name: &str) -> Result<bool, DomainError>;

    /// Inserts a new active group and returns it.
    ///
    /// Callers check [`exists`](Self::exists) first; the check-then-insert
    /// window is accepted and the storage schema should carry a unique
    /// index on the normalized name as the authoritative guard.
    async fn insert(&self, name: &str) -> Result<Group, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn GroupRepository) {}
    }
}
