//! Groupdesk - group enrollment dialogue with moderated registry growth.
//!
//! Users pick their group from a paged keyboard or by typing its name;
//! names missing from the registry become requests that administrators
//! approve or reject from an inline moderation queue.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
