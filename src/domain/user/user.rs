//! User entity and role.

use crate::domain::foundation::{GroupId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a chat user.
///
/// Roles are assigned externally (directly in storage); the core only ever
/// reads them, freshly per admin action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Student,
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// A chat user known to storage.
///
/// Created on first interaction with the default role. The group assignment
/// is the one piece of state the dialogue mutates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    role: Role,
    group_id: Option<GroupId>,
}

impl User {
    /// A fresh user as created on first interaction.
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            role: Role::default(),
            group_id: None,
        }
    }

    /// Reconstitute a user from persistence.
    pub fn reconstitute(id: UserId, role: Role, group_id: Option<GroupId>) -> Self {
        Self { id, role, group_id }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn group_id(&self) -> Option<GroupId> {
        self.group_id
    }

    pub fn assign_group(&mut self, group_id: GroupId) {
        self.group_id = Some(group_id);
    }
}
