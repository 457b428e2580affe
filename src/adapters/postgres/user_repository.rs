//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, GroupId, UserId};
use crate::domain::user::Role;
use crate::ports::UserRepository;

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn upsert(&self, id: UserId) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO users (id) VALUES ($1) ON CONFLICT (id) DO NOTHING")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to upsert user: {}", e)))?;
        Ok(())
    }

    async fn role(&self, id: UserId) -> Result<Role, DomainError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT role FROM users WHERE id = $1")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to read user role: {}", e)))?;

        match row {
            Some((role,)) => role
                .parse()
                .map_err(|e: String| DomainError::new(ErrorCode::InternalError, e)),
            None => Ok(Role::default()),
        }
    }

    async fn assign_group(&self, id: UserId, group: GroupId) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, group_id) VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET group_id = EXCLUDED.group_id
            "#,
        )
        .bind(id.as_i64())
        .bind(group.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to assign group: {}", e)))?;
        Ok(())
    }
}
