//! Enquiry persistence
//!
//! Handlers talk to an [`EnquiryStore`]; the Postgres implementation is used in
//! production and the in-memory one when no database is configured.

pub mod memory;
pub mod queries;

use async_trait::async_trait;

use crate::models::{Enquiry, EnquiryId, EnquiryStatus, NewEnquiry};

pub use memory::MemoryEnquiryStore;
pub use queries::PgEnquiryStore;

/// Failure at the store boundary
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Enquiry {0} not found")]
    NotFound(EnquiryId),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid enquiry record {id}: {message}")]
    InvalidRecord { id: EnquiryId, message: String },

    #[error("Value out of range: {0}")]
    OutOfRange(String),
}

/// Persisted collection of booking enquiries.
///
/// Every operation returns a tagged result; an empty collection is
/// `Ok(vec![])`, never an error.
#[async_trait]
pub trait EnquiryStore: Send + Sync {
    /// Store a validated enquiry as `pending` with empty notes.
    async fn insert(&self, enquiry: NewEnquiry) -> Result<EnquiryId, StoreError>;

    /// All enquiries, newest first.
    async fn fetch_all(&self) -> Result<Vec<Enquiry>, StoreError>;

    async fn fetch(&self, id: EnquiryId) -> Result<Enquiry, StoreError>;

    /// Set the status and touch `updated_at`. Any status may follow any other.
    async fn update_status(&self, id: EnquiryId, status: EnquiryStatus) -> Result<(), StoreError>;

    /// Replace the follow-up notes and touch `updated_at`.
    async fn update_notes(&self, id: EnquiryId, notes: &str) -> Result<(), StoreError>;
}
