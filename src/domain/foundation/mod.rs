//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, value objects, and error types that form the
//! vocabulary of the groupdesk domain.

mod errors;
mod ids;
mod pagination;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ChatId, GroupId, MessageId, RequestId, UserId};
pub use pagination::{max_page, page_offset, Page, PAGE_SIZE};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
