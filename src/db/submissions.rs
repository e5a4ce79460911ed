use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::{FindOptions, IndexOptions};
use mongodb::{Client, Collection, IndexModel};
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

use super::{stamp, StoreError, SubmissionStore};
use crate::models::{FormFields, NewSubmission, Submission};

const COLLECTION: &str = "forms";
const DEFAULT_DATABASE: &str = "formdesk";

#[derive(Debug, Serialize, Deserialize)]
struct FormDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    #[serde(flatten)]
    fields: FormFields,
    #[serde(rename = "createdAt", with = "chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
}

impl From<FormDocument> for Submission {
    fn from(doc: FormDocument) -> Self {
        Submission {
            id: doc.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            fields: doc.fields,
            created_at: doc.created_at,
        }
    }
}

struct Connection {
    client: Client,
    forms: Collection<FormDocument>,
}

/// MongoDB-backed store. The client is built on first use, so creating the
/// store does no network I/O; until the client can be built (for example
/// while SRV records fail to resolve) every operation fails with `StoreError`.
pub struct MongoSubmissionStore {
    uri: String,
    database: Option<String>,
    conn: OnceCell<Connection>,
}

impl MongoSubmissionStore {
    pub fn new(uri: impl Into<String>, database: Option<String>) -> Self {
        Self {
            uri: uri.into(),
            database,
            conn: OnceCell::new(),
        }
    }

    async fn connection(&self) -> Result<&Connection, StoreError> {
        self.conn
            .get_or_try_init(|| async {
                let client = Client::with_uri_str(&self.uri).await?;
                let db = match self.database.as_deref() {
                    Some(name) => client.database(name),
                    None => client
                        .default_database()
                        .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
                };
                tracing::info!(database = %db.name(), collection = COLLECTION, "MongoDB client configured");

                Ok::<_, StoreError>(Connection {
                    forms: db.collection(COLLECTION),
                    client,
                })
            })
            .await
    }

    /// Drop the backing database. Used to clean up test databases.
    pub async fn drop_database(&self) -> Result<(), StoreError> {
        let conn = self.connection().await?;
        conn.client
            .database(conn.forms.namespace().db.as_str())
            .drop(None)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl SubmissionStore for MongoSubmissionStore {
    async fn create(&self, submission: NewSubmission) -> Result<Submission, StoreError> {
        let conn = self.connection().await?;
        let mut document = FormDocument {
            id: None,
            fields: submission.fields,
            created_at: stamp(submission.created_at),
        };

        let result = conn.forms.insert_one(&document, None).await?;
        document.id = result.inserted_id.as_object_id();

        Ok(document.into())
    }

    async fn list_all(&self) -> Result<Vec<Submission>, StoreError> {
        let conn = self.connection().await?;
        // ObjectIds grow with insertion, so `_id` breaks createdAt ties newest-first
        let options = FindOptions::builder()
            .sort(doc! { "createdAt": -1, "_id": -1 })
            .build();

        let documents: Vec<FormDocument> = conn
            .forms
            .find(None, options)
            .await?
            .try_collect()
            .await?;

        Ok(documents.into_iter().map(Submission::from).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.connection()
            .await?
            .client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        Ok(())
    }

    async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let created_index = IndexModel::builder()
            .keys(doc! { "createdAt": -1, "_id": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_idx".to_string())
                    .build(),
            )
            .build();

        self.connection()
            .await?
            .forms
            .create_index(created_index, None)
            .await?;
        tracing::info!("MongoDB indexes ensured for {COLLECTION}");
        Ok(())
    }
}
