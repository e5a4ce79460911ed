pub mod memory;
pub mod submissions;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::{NewSubmission, Submission};
use crate::submission::coerce::CastError;

pub use memory::MemorySubmissionStore;
pub use submissions::MongoSubmissionStore;

#[derive(Debug)]
pub enum StoreError {
    Cast(CastError),
    Database(mongodb::error::Error),
    Unavailable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Cast(err) => write!(f, "Validation failed: {err}"),
            StoreError::Database(err) => write!(f, "Database error: {err}"),
            StoreError::Unavailable(msg) => write!(f, "Store unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Database(err)
    }
}

impl From<CastError> for StoreError {
    fn from(err: CastError) -> Self {
        StoreError::Cast(err)
    }
}

/// Append-only storage for form submissions.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Insert one submission, stamping `created_at` with the current time
    /// when the caller did not supply one.
    async fn create(&self, submission: NewSubmission) -> Result<Submission, StoreError>;

    /// Every stored submission, newest first. Submissions with equal
    /// `created_at` come back in reverse insertion order.
    async fn list_all(&self) -> Result<Vec<Submission>, StoreError>;

    /// Round trip to the backend.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Create whatever indexes back the newest-first listing.
    async fn ensure_indexes(&self) -> Result<(), StoreError>;
}

/// Resolve the creation timestamp, truncated to the millisecond precision
/// documents store.
pub(crate) fn stamp(created_at: Option<DateTime<Utc>>) -> DateTime<Utc> {
    let at = created_at.unwrap_or_else(Utc::now);
    DateTime::from_timestamp_millis(at.timestamp_millis()).unwrap_or(at)
}
