//! Request repository port.
//!
//! Contract for the group-addition request ledger rows. The decisive piece
//! is [`decide`](RequestRepository::decide): a status-guarded update that
//! only ever moves a pending row, which is what gives approval/rejection
//! its at-most-once semantics under concurrent admin clicks.

use crate::domain::foundation::{DomainError, Page, RequestId, Timestamp, UserId};
use crate::domain::request::{GroupRequest, RequestStatus};
use async_trait::async_trait;

/// Repository port for group-addition requests.
#[async_trait]
pub trait RequestRepository: Send + Sync {
    /// Inserts a new pending request and returns it.
    async fn insert(&self, requester: UserId, name: &str) -> Result<GroupRequest, DomainError>;

    /// Whether a pending request with this name (case-insensitive) exists.
    async fn pending_exists(&self, name: &str) -> Result<bool, DomainError>;

    /// One page of pending requests ordered by creation time ascending
    /// (FIFO moderation queue), plus the total pending count.
    async fn list_pending_page(&self, page: u32) -> Result<Page<GroupRequest>, DomainError>;

    /// Status-guarded decision: moves the request to `status` and records
    /// decider and timestamp only if it is still pending.
    ///
    /// Returns the decided request, or `None` when the request does not
    /// exist or was already decided; the first concurrent writer wins and
    /// later writers observe `None`.
    async fn decide(
        &self,
        id: RequestId,
        status: RequestStatus,
        decider: UserId,
        decided_at: Timestamp,
    ) -> Result<Option<GroupRequest>, DomainError>;
}
