use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::{stamp, StoreError, SubmissionStore};
use crate::models::{NewSubmission, Submission};

/// Process-local store with the same ordering and defaulting rules as the
/// MongoDB store.
#[derive(Default)]
pub struct MemorySubmissionStore {
    submissions: RwLock<Vec<Submission>>,
}

impl MemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.submissions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SubmissionStore for MemorySubmissionStore {
    async fn create(&self, submission: NewSubmission) -> Result<Submission, StoreError> {
        let stored = Submission {
            id: ObjectId::new().to_hex(),
            fields: submission.fields,
            created_at: stamp(submission.created_at),
        };
        self.submissions.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<Submission>, StoreError> {
        let mut all = self.submissions.read().await.clone();
        // Stable sort over reversed insertion order keeps later inserts first on ties
        all.reverse();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn ensure_indexes(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
