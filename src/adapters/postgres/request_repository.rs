//! PostgreSQL implementation of RequestRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::foundation::{
    page_offset, DomainError, ErrorCode, Page, RequestId, Timestamp, UserId, PAGE_SIZE,
};
use crate::domain::request::{GroupRequest, RequestStatus};
use crate::ports::RequestRepository;

type RequestRow = (
    i64,
    String,
    i64,
    String,
    Option<i64>,
    Option<DateTime<Utc>>,
    DateTime<Utc>,
);

const REQUEST_COLUMNS: &str =
    "id, requested_name, requested_by, status, decided_by, decided_at, created_at";

/// PostgreSQL implementation of RequestRepository.
#[derive(Clone)]
pub struct PostgresRequestRepository {
    pool: PgPool,
}

impl PostgresRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_request(row: RequestRow) -> Result<GroupRequest, DomainError> {
    let status: RequestStatus = row
        .3
        .parse()
        .map_err(|e: String| DomainError::new(ErrorCode::InternalError, e))?;
    Ok(GroupRequest::reconstitute(
        RequestId::new(row.0),
        row.1,
        UserId::new(row.2),
        status,
        row.4.map(UserId::new),
        row.5.map(Timestamp::from_datetime),
        Timestamp::from_datetime(row.6),
    ))
}

#[async_trait]
impl RequestRepository for PostgresRequestRepository {
    async fn insert(&self, requester: UserId, name: &str) -> Result<GroupRequest, DomainError> {
        let row: RequestRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO group_requests (requested_name, requested_by)
            VALUES ($1, $2)
            RETURNING {}
            "#,
            REQUEST_COLUMNS
        ))
        .bind(name)
        .bind(requester.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to insert request: {}", e)))?;

        row_to_request(row)
    }

    async fn pending_exists(&self, name: &str) -> Result<bool, DomainError> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM group_requests
            WHERE status = 'pending' AND LOWER(requested_name) = LOWER($1)
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to check pending requests: {}", e)))?;
        Ok(count.0 > 0)
    }

    async fn list_pending_page(&self, page: u32) -> Result<Page<GroupRequest>, DomainError> {
        let rows: Vec<RequestRow> = sqlx::query_as(&format!(
            r#"
            SELECT {} FROM group_requests
            WHERE status = 'pending'
            ORDER BY created_at, id
            LIMIT $1 OFFSET $2
            "#,
            REQUEST_COLUMNS
        ))
        .bind(PAGE_SIZE as i64)
        .bind(page_offset(page) as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list pending requests: {}", e)))?;

        let total: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM group_requests WHERE status = 'pending'")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::storage(format!("Failed to count pending requests: {}", e))
                })?;

        let items = rows
            .into_iter()
            .map(row_to_request)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(items, page, total.0 as u64))
    }

    async fn decide(
        &self,
        id: RequestId,
        status: RequestStatus,
        decider: UserId,
        decided_at: Timestamp,
    ) -> Result<Option<GroupRequest>, DomainError> {
        // Single status-guarded UPDATE; the first concurrent decider wins
        // and everyone else matches zero rows.
        let row: Option<RequestRow> = sqlx::query_as(&format!(
            r#"
            UPDATE group_requests
            SET status = $2, decided_by = $3, decided_at = $4
            WHERE id = $1 AND status = 'pending'
            RETURNING {}
            "#,
            REQUEST_COLUMNS
        ))
        .bind(id.as_i64())
        .bind(status.as_str())
        .bind(decider.as_i64())
        .bind(*decided_at.as_datetime())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to decide request: {}", e)))?;

        row.map(row_to_request).transpose()
    }
}
