//! PostgreSQL implementation of GroupRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{page_offset, DomainError, GroupId, Page, PAGE_SIZE};
use crate::domain::group::{Group, EXACT_MATCH_CAP, SUBSTRING_MATCH_CAP};
use crate::ports::GroupRepository;

/// PostgreSQL implementation of GroupRepository.
#[derive(Clone)]
pub struct PostgresGroupRepository {
    pool: PgPool,
}

impl PostgresGroupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_group(row: (i64, String, bool)) -> Group {
    Group::reconstitute(GroupId::new(row.0), row.1, row.2)
}

#[async_trait]
impl GroupRepository for PostgresGroupRepository {
    async fn list_active_page(&self, page: u32) -> Result<Page<Group>, DomainError> {
        let rows: Vec<(i64, String, bool)> = sqlx::query_as(
            r#"
            SELECT id, name, is_active FROM groups
            WHERE is_active
            ORDER BY LOWER(name)
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(PAGE_SIZE as i64)
        .bind(page_offset(page) as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list groups: {}", e)))?;

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM groups WHERE is_active")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count groups: {}", e)))?;

        Ok(Page::new(
            rows.into_iter().map(row_to_group).collect(),
            page,
            total.0 as u64,
        ))
    }

    async fn find_exact(&self, name: &str) -> Result<Vec<Group>, DomainError> {
        let rows: Vec<(i64, String, bool)> = sqlx::query_as(
            r#"
            SELECT id, name, is_active FROM groups
            WHERE is_active AND LOWER(name) = LOWER($1)
            LIMIT $2
            "#,
        )
        .bind(name)
        .bind(EXACT_MATCH_CAP as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to match group name: {}", e)))?;

        Ok(rows.into_iter().map(row_to_group).collect())
    }

    async fn find_substring(&self, name: &str) -> Result<Vec<Group>, DomainError> {
        let rows: Vec<(i64, String, bool)> = sqlx::query_as(
            r#"
            SELECT id, name, is_active FROM groups
            WHERE is_active AND name ILIKE '%' || $1 || '%'
            ORDER BY LOWER(name)
            LIMIT $2
            "#,
        )
        .bind(name)
        .bind(SUBSTRING_MATCH_CAP as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to search group names: {}", e)))?;

        Ok(rows.into_iter().map(row_to_group).collect())
    }

    async fn exists(&self, name: &str) -> Result<bool, DomainError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM groups WHERE LOWER(name) = LOWER($1)")
                .bind(name)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::storage(format!("Failed to check group existence: {}", e))
                })?;
        Ok(count.0 > 0)
    }

    async fn insert(&self, name: &str) -> Result<Group, DomainError> {
        let row: (i64, String, bool) = sqlx::query_as(
            r#"
            INSERT INTO groups (name) VALUES ($1)
            RETURNING id, name, is_active
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to insert group: {}", e)))?;

        Ok(row_to_group(row))
    }
}
