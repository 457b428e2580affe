//! RequestLedger - lifecycle of group-addition requests.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Page, RequestId, Timestamp, UserId};
use crate::domain::request::{GroupRequest, RequestStatus};
use crate::ports::{GroupRepository, RequestRepository};

/// Outcome of an approve/reject attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// This call decided the request.
    Decided(GroupRequest),
    /// The request was not pending anymore (or never existed); nothing was
    /// changed. Duplicate button presses land here.
    AlreadyHandled,
}

/// Manages request creation and at-most-once approval/rejection.
pub struct RequestLedger {
    requests: Arc<dyn RequestRepository>,
    groups: Arc<dyn GroupRepository>,
}

impl RequestLedger {
    pub fn new(requests: Arc<dyn RequestRepository>, groups: Arc<dyn GroupRepository>) -> Self {
        Self { requests, groups }
    }

    /// Inserts a pending request.
    ///
    /// Callers are expected to have checked for an existing group and an
    /// existing pending request already; the remaining race window is
    /// accepted and tolerated by the approval path.
    pub async fn create(
        &self,
        requester: UserId,
        name: &str,
    ) -> Result<GroupRequest, DomainError> {
        let request = self.requests.insert(requester, name.trim()).await?;
        tracing::info!(
            request_id = %request.id(),
            requester = %requester,
            name = request.requested_name(),
            "group request created"
        );
        Ok(request)
    }

    /// Whether a pending request with this name already waits for a decision.
    pub async fn pending_exists(&self, name: &str) -> Result<bool, DomainError> {
        self.requests.pending_exists(name.trim()).await
    }

    /// FIFO page of the moderation queue.
    pub async fn list_pending_page(&self, page: u32) -> Result<Page<GroupRequest>, DomainError> {
        self.requests.list_pending_page(page).await
    }

    /// Approves a pending request and ensures the requested group exists.
    ///
    /// The status-guarded update claims the request first, so concurrent
    /// approvals resolve to exactly one `Decided`. Group creation then
    /// checks existence before inserting: a group independently added by
    /// another path is reused, not duplicated.
    pub async fn approve(&self, decider: UserId, id: RequestId) -> Result<Decision, DomainError> {
        let decided = self
            .requests
            .decide(id, RequestStatus::Approved, decider, Timestamp::now())
            .await?;

        let request = match decided {
            Some(request) => request,
            None => {
                tracing::debug!(request_id = %id, "approve on a non-pending request");
                return Ok(Decision::AlreadyHandled);
            }
        };

        if !self.groups.exists(request.requested_name()).await? {
            self.groups.insert(request.requested_name()).await?;
        }
        tracing::info!(
            request_id = %id,
            decider = %decider,
            name = request.requested_name(),
            "group request approved"
        );
        Ok(Decision::Decided(request))
    }

    /// Rejects a pending request. Same idempotency guard, no group creation.
    pub async fn reject(&self, decider: UserId, id: RequestId) -> Result<Decision, DomainError> {
        let decided = self
            .requests
            .decide(id, RequestStatus::Rejected, decider, Timestamp::now())
            .await?;

        match decided {
            Some(request) => {
                tracing::info!(
                    request_id = %id,
                    decider = %decider,
                    name = request.requested_name(),
                    "group request rejected"
                );
                Ok(Decision::Decided(request))
            }
            None => {
                tracing::debug!(request_id = %id, "reject on a non-pending request");
                Ok(Decision::AlreadyHandled)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryGroupRepository, InMemoryRequestRepository};

    fn ledger() -> (
        RequestLedger,
        Arc<InMemoryRequestRepository>,
        Arc<InMemoryGroupRepository>,
    ) {
        let requests = Arc::new(InMemoryRequestRepository::new());
        let groups = Arc::new(InMemoryGroupRepository::new());
        let ledger = RequestLedger::new(requests.clone(), groups.clone());
        (ledger, requests, groups)
    }

    #[tokio::test]
    async fn create_inserts_a_pending_request() {
        let (ledger, _, _) = ledger();
        let request = ledger.create(UserId::new(10), " Biology ").await.unwrap();
        assert!(request.is_pending());
        assert_eq!(request.requested_name(), "Biology");
        assert!(ledger.pending_exists("biology").await.unwrap());
    }

    #[tokio::test]
    async fn approve_decides_and_creates_the_group() {
        let (ledger, _, groups) = ledger();
        let request = ledger.create(UserId::new(10), "Biology").await.unwrap();

        let decision = ledger.approve(UserId::new(1), request.id()).await.unwrap();
        match decision {
            Decision::Decided(req) => {
                assert_eq!(req.requested_name(), "Biology");
            }
            Decision::AlreadyHandled => panic!("first approval must decide"),
        }
        assert!(groups.exists("biology").await.unwrap());
    }

    #[tokio::test]
    async fn approve_reuses_an_independently_created_group() {
        let (ledger, _, groups) = ledger();
        let request = ledger.create(UserId::new(10), "Biology").await.unwrap();

        // Another admin path added the group in the meantime.
        groups.insert("Biology").await.unwrap();

        let decision = ledger.approve(UserId::new(1), request.id()).await.unwrap();
        assert!(matches!(decision, Decision::Decided(_)));

        let page = groups.list_active_page(0).await.unwrap();
        let biology_rows = page
            .items
            .iter()
            .filter(|g| g.name_key() == "biology")
            .count();
        assert_eq!(biology_rows, 1);
    }

    #[tokio::test]
    async fn second_approve_is_already_handled_and_mutates_nothing() {
        let (ledger, requests, _) = ledger();
        let request = ledger.create(UserId::new(10), "Biology").await.unwrap();
        let first_admin = UserId::new(1);

        let first = ledger.approve(first_admin, request.id()).await.unwrap();
        let snapshot = match first {
            Decision::Decided(req) => req,
            Decision::AlreadyHandled => panic!("first approval must decide"),
        };

        let second = ledger.approve(UserId::new(2), request.id()).await.unwrap();
        assert_eq!(second, Decision::AlreadyHandled);

        let stored = requests.find(request.id()).await.unwrap();
        assert_eq!(stored.status(), RequestStatus::Approved);
        assert_eq!(stored.decided_by(), snapshot.decided_by());
        assert_eq!(stored.decided_at(), snapshot.decided_at());
    }

    #[tokio::test]
    async fn reject_decides_without_creating_a_group() {
        let (ledger, _, groups) = ledger();
        let request = ledger.create(UserId::new(10), "Biology").await.unwrap();

        let decision = ledger.reject(UserId::new(1), request.id()).await.unwrap();
        assert!(matches!(decision, Decision::Decided(_)));
        assert!(!groups.exists("Biology").await.unwrap());

        let again = ledger.reject(UserId::new(1), request.id()).await.unwrap();
        assert_eq!(again, Decision::AlreadyHandled);
    }

    #[tokio::test]
    async fn decide_on_unknown_request_is_already_handled() {
        let (ledger, _, _) = ledger();
        let decision = ledger
            .approve(UserId::new(1), RequestId::new(999))
            .await
            .unwrap();
        assert_eq!(decision, Decision::AlreadyHandled);
    }

    #[tokio::test]
    async fn queue_pages_in_creation_order() {
        let (ledger, _, _) = ledger();
        for i in 0..3 {
            ledger
                .create(UserId::new(10), &format!("Group{}", i))
                .await
                .unwrap();
        }
        let page = ledger.list_pending_page(0).await.unwrap();
        assert_eq!(page.total, 3);
        let names: Vec<_> = page
            .items
            .iter()
            .map(|r| r.requested_name().to_string())
            .collect();
        assert_eq!(names, vec!["Group0", "Group1", "Group2"]);
    }
}
