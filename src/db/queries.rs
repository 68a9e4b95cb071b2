//! Database queries for booking enquiries

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::{EnquiryStore, StoreError};
use crate::models::{Enquiry, EnquiryId, EnquiryRow, EnquiryStatus, NewEnquiry};

/// Postgres-backed enquiry store
#[derive(Clone)]
pub struct PgEnquiryStore {
    pool: PgPool,
}

impl PgEnquiryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to the database and apply pending migrations
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        tracing::info!(max_connections, "Database connection established");

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");

        Ok(Self::new(pool))
    }
}

fn to_column(field: &str, value: u32) -> Result<i32, StoreError> {
    i32::try_from(value).map_err(|_| StoreError::OutOfRange(format!("{} = {}", field, value)))
}

fn into_enquiry(row: EnquiryRow) -> Result<Enquiry, StoreError> {
    let id = row.id;
    Enquiry::try_from(row).map_err(|message| StoreError::InvalidRecord { id, message })
}

#[async_trait]
impl EnquiryStore for PgEnquiryStore {
    async fn insert(&self, enquiry: NewEnquiry) -> Result<EnquiryId, StoreError> {
        let id: EnquiryId = sqlx::query_scalar(
            r#"
            INSERT INTO enquiries (
                name, phone, booking_date, num_adults, num_children, package,
                status, follow_up_notes, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, 'pending', '', NOW())
            RETURNING id
            "#,
        )
        .bind(&enquiry.name)
        .bind(&enquiry.phone)
        .bind(enquiry.booking_date)
        .bind(to_column("num_adults", enquiry.num_adults)?)
        .bind(to_column("num_children", enquiry.num_children)?)
        .bind(&enquiry.package)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn fetch_all(&self) -> Result<Vec<Enquiry>, StoreError> {
        let rows = sqlx::query_as::<_, EnquiryRow>(
            r#"
            SELECT
                id,
                name,
                phone,
                booking_date,
                num_adults,
                num_children,
                package,
                status,
                follow_up_notes,
                created_at,
                updated_at
            FROM enquiries
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(into_enquiry).collect()
    }

    async fn fetch(&self, id: EnquiryId) -> Result<Enquiry, StoreError> {
        let row = sqlx::query_as::<_, EnquiryRow>(
            r#"
            SELECT
                id,
                name,
                phone,
                booking_date,
                num_adults,
                num_children,
                package,
                status,
                follow_up_notes,
                created_at,
                updated_at
            FROM enquiries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))?;

        into_enquiry(row)
    }

    async fn update_status(&self, id: EnquiryId, status: EnquiryStatus) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE enquiries
            SET status = $1, updated_at = NOW()
            WHERE id = $2
            "#,
        )
        .bind(status.as_str())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn update_notes(&self, id: EnquiryId, notes: &str) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE enquiries
            SET follow_up_notes = $1, updated_at = NOW()
            WHERE id = $2
            "#,
        )
        .bind(notes)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
