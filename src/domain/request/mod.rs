//! Request module - group-addition requests awaiting moderation.

mod request;
mod status;

pub use request::GroupRequest;
pub use status::RequestStatus;
