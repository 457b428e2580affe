//! PostgreSQL adapters.
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE users (
//!     id        BIGINT PRIMARY KEY,
//!     role      TEXT NOT NULL DEFAULT 'student',
//!     group_id  BIGINT REFERENCES groups (id)
//! );
//!
//! CREATE TABLE groups (
//!     id        BIGSERIAL PRIMARY KEY,
//!     name      TEXT NOT NULL,
//!     is_active BOOLEAN NOT NULL DEFAULT TRUE
//! );
//! -- Authoritative duplicate guard; the application-level existence
//! -- checks are only a fast-path hint.
//! CREATE UNIQUE INDEX groups_name_key ON groups (LOWER(name));
//!
//! CREATE TABLE group_requests (
//!     id             BIGSERIAL PRIMARY KEY,
//!     requested_name TEXT NOT NULL,
//!     requested_by   BIGINT NOT NULL,
//!     status         TEXT NOT NULL DEFAULT 'pending',
//!     decided_by     BIGINT,
//!     decided_at     TIMESTAMPTZ,
//!     created_at     TIMESTAMPTZ NOT NULL DEFAULT NOW()
//! );
//! ```

mod group_repository;
mod request_repository;
mod user_repository;

pub use group_repository::PostgresGroupRepository;
pub use request_repository::PostgresRequestRepository;
pub use user_repository::PostgresUserRepository;
