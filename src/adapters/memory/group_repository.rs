//! In-memory implementation of GroupRepository.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::{page_offset, DomainError, GroupId, Page, PAGE_SIZE};
use crate::domain::group::{normalize_name, Group, EXACT_MATCH_CAP, SUBSTRING_MATCH_CAP};
use crate::ports::GroupRepository;

#[derive(Default)]
struct Table {
    next_id: i64,
    groups: Vec<Group>,
}

/// Group registry backed by a Vec.
#[derive(Default)]
pub struct InMemoryGroupRepository {
    table: Mutex<Table>,
}

impl InMemoryGroupRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an active group outside the port, for fixtures and bootstrap.
    pub fn seed(&self, name: &str) -> Group {
        let mut table = self.table.lock().unwrap();
        table.next_id += 1;
        let group = Group::reconstitute(GroupId::new(table.next_id), name.trim().to_string(), true);
        table.groups.push(group.clone());
        group
    }

    fn active_sorted(table: &Table) -> Vec<Group> {
        let mut groups: Vec<Group> = table
            .groups
            .iter()
            .filter(|g| g.is_active())
            .cloned()
            .collect();
        groups.sort_by_key(|g| g.name_key());
        groups
    }
}

#[async_trait]
impl GroupRepository for InMemoryGroupRepository {
    async fn list_active_page(&self, page: u32) -> Result<Page<Group>, DomainError> {
        let table = self.table.lock().unwrap();
        let groups = Self::active_sorted(&table);
        let total = groups.len() as u64;
        let start = (page_offset(page) as usize).min(groups.len());
        let end = (start + PAGE_SIZE as usize).min(groups.len());
        Ok(Page::new(groups[start..end].to_vec(), page, total))
    }

    async fn find_exact(&self, name: &str) -> Result<Vec<Group>, DomainError> {
        let key = normalize_name(name);
        let table = self.table.lock().unwrap();
        Ok(Self::active_sorted(&table)
            .into_iter()
            .filter(|g| g.name_key() == key)
            .take(EXACT_MATCH_CAP)
            .collect())
    }

    async fn find_substring(&self, name: &str) -> Result<Vec<Group>, DomainError> {
        let key = normalize_name(name);
        let table = self.table.lock().unwrap();
        Ok(Self::active_sorted(&table)
            .into_iter()
            .filter(|g| g.name_key().contains(&key))
            .take(SUBSTRING_MATCH_CAP)
            .collect())
    }

    async fn exists(&self, name: &str) -> Result<bool, DomainError> {
        let key = normalize_name(name);
        let table = self.table.lock().unwrap();
        Ok(table.groups.iter().any(|g| g.name_key() == key))
    }

    async fn insert(&self, name: &str) -> Result<Group, DomainError> {
        Ok(self.seed(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_assigns_sequential_ids() {
        let repo = InMemoryGroupRepository::new();
        let a = repo.seed("Math101");
        let b = repo.seed("Math102");
        assert!(a.id() < b.id());
    }

    #[tokio::test]
    async fn listing_is_ordered_by_name_and_paged() {
        let repo = InMemoryGroupRepository::new();
        // Seed in reverse so ordering is the adapter's doing.
        for i in (0..10).rev() {
            repo.seed(&format!("Group{:02}", i));
        }

        let first = repo.list_active_page(0).await.unwrap();
        assert_eq!(first.total, 10);
        assert_eq!(first.items.len(), PAGE_SIZE as usize);
        assert_eq!(first.items[0].name(), "Group00");

        let second = repo.list_active_page(1).await.unwrap();
        assert_eq!(second.items.len(), 2);
        assert_eq!(second.items[0].name(), "Group08");
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() {
        let repo = InMemoryGroupRepository::new();
        repo.seed("Only");
        let page = repo.list_active_page(5).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn exact_matching_ignores_case() {
        let repo = InMemoryGroupRepository::new();
        repo.seed("CS101");
        assert_eq!(repo.find_exact("cs101").await.unwrap().len(), 1);
        assert!(repo.find_exact("cs10").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn substring_matching_is_capped() {
        let repo = InMemoryGroupRepository::new();
        for i in 0..15 {
            repo.seed(&format!("Math{:02}", i));
        }
        let hits = repo.find_substring("math").await.unwrap();
        assert_eq!(hits.len(), SUBSTRING_MATCH_CAP);
    }
}
