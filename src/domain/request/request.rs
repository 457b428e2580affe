//! GroupRequest entity.

use crate::domain::foundation::{RequestId, StateMachine, Timestamp, UserId};
use crate::domain::request::RequestStatus;
use serde::{Deserialize, Serialize};

/// A request to add a group to the registry, decided by an admin.
///
/// # Invariants
///
/// - at most one pending request per case-insensitive name (best-effort,
///   enforced at creation by the dialogue layer)
/// - `decided_by` and `decided_at` are set exactly when status is terminal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRequest {
    id: RequestId,
    requested_name: String,
    requested_by: UserId,
    status: RequestStatus,
    decided_by: Option<UserId>,
    decided_at: Option<Timestamp>,
    created_at: Timestamp,
}

impl GroupRequest {
    /// Reconstitute a request from persistence (no validation).
    pub fn reconstitute(
        id: RequestId,
        requested_name: String,
        requested_by: UserId,
        status: RequestStatus,
        decided_by: Option<UserId>,
        decided_at: Option<Timestamp>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            requested_name,
            requested_by,
            status,
            decided_by,
            decided_at,
            created_at,
        }
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn requested_name(&self) -> &str {
        &self.requested_name
    }

    pub fn requested_by(&self) -> UserId {
        self.requested_by
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn decided_by(&self) -> Option<UserId> {
        self.decided_by
    }

    pub fn decided_at(&self) -> Option<Timestamp> {
        self.decided_at
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    /// Records a decision on this request.
    ///
    /// Fails with `InvalidStateTransition` when the request is not pending,
    /// which is the in-memory counterpart of the status-guarded update the
    /// storage adapters perform.
    pub fn decide(
        &mut self,
        status: RequestStatus,
        decider: UserId,
        at: Timestamp,
    ) -> Result<(), crate::domain::foundation::DomainError> {
        self.status = self.status.transition_to(status)?;
        self.decided_by = Some(decider);
        self.decided_at = Some(at);
        Ok(())
    }
}
