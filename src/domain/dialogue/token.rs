//! Callback-token protocol carried by inline buttons.
//!
//! Tokens double as a lightweight RPC protocol between the rendered
//! keyboard and the engine: `<domain>:<action>:<argument>` with domain
//! `grp` or `req`, plus the sentinel `noop` for non-actionable buttons.
//! They are parsed once at the boundary; nothing deeper in the core ever
//! looks at the raw string.

use crate::domain::foundation::{GroupId, RequestId};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error produced when a callback payload does not parse as a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed callback token: {payload}")]
pub struct TokenParseError {
    pub payload: String,
}

impl TokenParseError {
    fn new(payload: &str) -> Self {
        Self {
            payload: payload.to_string(),
        }
    }
}

/// Closed set of button actions.
///
/// The wire encoding must stay exactly as rendered by [`fmt::Display`] for
/// interoperability with any symmetric client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackToken {
    /// Non-actionable button; acknowledged and otherwise ignored.
    Noop,
    /// Navigate the group picker to the given page.
    GroupPage(u32),
    /// Pick the given group.
    GroupPick(GroupId),
    /// Start the add-group request flow.
    GroupRequestNew,
    /// Navigate the moderation queue to the given page (admin).
    RequestPage(u32),
    /// Approve the given request (admin).
    RequestApprove(RequestId),
    /// Reject the given request (admin).
    RequestReject(RequestId),
}

impl fmt::Display for CallbackToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallbackToken::Noop => write!(f, "noop"),
            CallbackToken::GroupPage(page) => write!(f, "grp:page:{}", page),
            CallbackToken::GroupPick(id) => write!(f, "grp:pick:{}", id),
            CallbackToken::GroupRequestNew => write!(f, "grp:req:new"),
            CallbackToken::RequestPage(page) => write!(f, "req:page:{}", page),
            CallbackToken::RequestApprove(id) => write!(f, "req:approve:{}", id),
            CallbackToken::RequestReject(id) => write!(f, "req:reject:{}", id),
        }
    }
}

impl FromStr for CallbackToken {
    type Err = TokenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "noop" {
            return Ok(CallbackToken::Noop);
        }

        let mut parts = s.splitn(3, ':');
        let domain = parts.next().unwrap_or_default();
        let action = parts.next().unwrap_or_default();
        let argument = parts.next().unwrap_or_default();

        match (domain, action) {
            ("grp", "page") => argument
                .parse()
                .map(CallbackToken::GroupPage)
                .map_err(|_| TokenParseError::new(s)),
            ("grp", "pick") => argument
                .parse()
                .map(CallbackToken::GroupPick)
                .map_err(|_| TokenParseError::new(s)),
            ("grp", "req") if argument == "new" => Ok(CallbackToken::GroupRequestNew),
            ("req", "page") => argument
                .parse()
                .map(CallbackToken::RequestPage)
                .map_err(|_| TokenParseError::new(s)),
            ("req", "approve") => argument
                .parse()
                .map(CallbackToken::RequestApprove)
                .map_err(|_| TokenParseError::new(s)),
            ("req", "reject") => argument
                .parse()
                .map(CallbackToken::RequestReject)
                .map_err(|_| TokenParseError::new(s)),
            _ => Err(TokenParseError::new(s)),
        }
    }
}
