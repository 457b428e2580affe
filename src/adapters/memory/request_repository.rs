//! In-memory implementation of RequestRepository.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::{
    page_offset, DomainError, Page, RequestId, Timestamp, UserId, PAGE_SIZE,
};
use crate::domain::group::normalize_name;
use crate::domain::request::{GroupRequest, RequestStatus};
use crate::ports::RequestRepository;

#[derive(Default)]
struct Table {
    next_id: i64,
    requests: Vec<GroupRequest>,
}

/// Request ledger rows backed by a Vec.
///
/// Requests keep their insertion order, which doubles as creation-time
/// order for the FIFO moderation queue.
#[derive(Default)]
pub struct InMemoryRequestRepository {
    table: Mutex<Table>,
}

impl InMemoryRequestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches any request by id, for assertions.
    pub async fn find(&self, id: RequestId) -> Option<GroupRequest> {
        let table = self.table.lock().unwrap();
        table.requests.iter().find(|r| r.id() == id).cloned()
    }

    /// Number of pending rows, for assertions.
    pub async fn pending_count(&self) -> usize {
        let table = self.table.lock().unwrap();
        table.requests.iter().filter(|r| r.is_pending()).count()
    }
}

#[async_trait]
impl RequestRepository for InMemoryRequestRepository {
    async fn insert(&self, requester: UserId, name: &str) -> Result<GroupRequest, DomainError> {
        let mut table = self.table.lock().unwrap();
        table.next_id += 1;
        let request = GroupRequest::reconstitute(
            RequestId::new(table.next_id),
            name.trim().to_string(),
            requester,
            RequestStatus::Pending,
            None,
            None,
            Timestamp::now(),
        );
        table.requests.push(request.clone());
        Ok(request)
    }

    async fn pending_exists(&self, name: &str) -> Result<bool, DomainError> {
        let key = normalize_name(name);
        let table = self.table.lock().unwrap();
        Ok(table
            .requests
            .iter()
            .any(|r| r.is_pending() && normalize_name(r.requested_name()) == key))
    }

    async fn list_pending_page(&self, page: u32) -> Result<Page<GroupRequest>, DomainError> {
        let table = self.table.lock().unwrap();
        let pending: Vec<GroupRequest> = table
            .requests
            .iter()
            .filter(|r| r.is_pending())
            .cloned()
            .collect();
        let total = pending.len() as u64;
        let start = (page_offset(page) as usize).min(pending.len());
        let end = (start + PAGE_SIZE as usize).min(pending.len());
        Ok(Page::new(pending[start..end].to_vec(), page, total))
    }

    async fn decide(
        &self,
        id: RequestId,
        status: RequestStatus,
        decider: UserId,
        decided_at: Timestamp,
    ) -> Result<Option<GroupRequest>, DomainError> {
        let mut table = self.table.lock().unwrap();
        let request = table
            .requests
            .iter_mut()
            .find(|r| r.id() == id && r.is_pending());
        match request {
            Some(request) => {
                request
                    .decide(status, decider, decided_at)
                    .map_err(|e| DomainError::storage(e.to_string()))?;
                Ok(Some(request.clone()))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pending_listing_is_fifo() {
        let repo = InMemoryRequestRepository::new();
        for name in ["First", "Second", "Third"] {
            repo.insert(UserId::new(1), name).await.unwrap();
        }
        let page = repo.list_pending_page(0).await.unwrap();
        assert_eq!(page.items[0].requested_name(), "First");
        assert_eq!(page.items[2].requested_name(), "Third");
    }

    #[tokio::test]
    async fn decide_moves_a_pending_row_exactly_once() {
        let repo = InMemoryRequestRepository::new();
        let request = repo.insert(UserId::new(1), "Biology").await.unwrap();

        let first = repo
            .decide(
                request.id(),
                RequestStatus::Approved,
                UserId::new(2),
                Timestamp::now(),
            )
            .await
            .unwrap();
        assert!(first.is_some());

        let second = repo
            .decide(
                request.id(),
                RequestStatus::Rejected,
                UserId::new(3),
                Timestamp::now(),
            )
            .await
            .unwrap();
        assert!(second.is_none());

        let stored = repo.find(request.id()).await.unwrap();
        assert_eq!(stored.status(), RequestStatus::Approved);
        assert_eq!(stored.decided_by(), Some(UserId::new(2)));
    }

    #[tokio::test]
    async fn decided_rows_leave_the_pending_listing() {
        let repo = InMemoryRequestRepository::new();
        let request = repo.insert(UserId::new(1), "Biology").await.unwrap();
        repo.decide(
            request.id(),
            RequestStatus::Rejected,
            UserId::new(2),
            Timestamp::now(),
        )
        .await
        .unwrap();

        let page = repo.list_pending_page(0).await.unwrap();
        assert_eq!(page.total, 0);
        assert!(!repo.pending_exists("Biology").await.unwrap());
    }

    #[tokio::test]
    async fn pending_exists_matches_case_insensitively() {
        let repo = InMemoryRequestRepository::new();
        repo.insert(UserId::new(1), "Biology").await.unwrap();
        assert!(repo.pending_exists("BIOLOGY").await.unwrap());
        assert!(!repo.pending_exists("Chemistry").await.unwrap());
    }
}
