//! In-memory implementation of UserRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, GroupId, UserId};
use crate::domain::user::{Role, User};
use crate::ports::UserRepository;

/// User rows backed by a HashMap.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a user's role outside the port, mirroring the external role
    /// management the core assumes.
    pub async fn set_role(&self, id: UserId, role: Role) {
        let mut users = self.users.lock().unwrap();
        let user = users.entry(id).or_insert_with(|| User::new(id));
        *user = User::reconstitute(id, role, user.group_id());
    }

    /// Current group assignment, for assertions.
    pub async fn assigned_group(&self, id: UserId) -> Option<GroupId> {
        let users = self.users.lock().unwrap();
        users.get(&id).and_then(|u| u.group_id())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn upsert(&self, id: UserId) -> Result<(), DomainError> {
        let mut users = self.users.lock().unwrap();
        users.entry(id).or_insert_with(|| User::new(id));
        Ok(())
    }

    async fn role(&self, id: UserId) -> Result<Role, DomainError> {
        let users = self.users.lock().unwrap();
        Ok(users.get(&id).map(|u| u.role()).unwrap_or_default())
    }

    async fn assign_group(&self, id: UserId, group: GroupId) -> Result<(), DomainError> {
        let mut users = self.users.lock().unwrap();
        let user = users.entry(id).or_insert_with(|| User::new(id));
        user.assign_group(group);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upsert_is_idempotent_and_keeps_existing_state() {
        let repo = InMemoryUserRepository::new();
        let id = UserId::new(1);
        repo.upsert(id).await.unwrap();
        repo.assign_group(id, GroupId::new(9)).await.unwrap();
        repo.upsert(id).await.unwrap();
        assert_eq!(repo.assigned_group(id).await, Some(GroupId::new(9)));
    }

    #[tokio::test]
    async fn unknown_users_read_as_students() {
        let repo = InMemoryUserRepository::new();
        assert_eq!(repo.role(UserId::new(404)).await.unwrap(), Role::Student);
    }

    #[tokio::test]
    async fn set_role_preserves_group_assignment() {
        let repo = InMemoryUserRepository::new();
        let id = UserId::new(1);
        repo.assign_group(id, GroupId::new(2)).await.unwrap();
        repo.set_role(id, Role::Admin).await;
        assert_eq!(repo.role(id).await.unwrap(), Role::Admin);
        assert_eq!(repo.assigned_group(id).await, Some(GroupId::new(2)));
    }
}
