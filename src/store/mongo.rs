use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{ClientOptions, FindOptions},
    Client, Collection,
};
use tracing::{info, warn};

use crate::config::Config;

use super::{
    id_to_string, truncate_error, DocumentStore, StoreDiagnostics, StoreError, UpsertOutcome,
};

/// MongoDB-backed document store.
///
/// The client is created once at startup and shared across all requests;
/// the driver handles its own pooling and is safe for concurrent use. When
/// the database env vars are missing or the connection string is invalid,
/// the store comes up in a degraded state: writes fail fast with
/// [`StoreError::Unavailable`] and reads return nothing.
pub struct MongoStore {
    db: Option<mongodb::Database>,
    configured: bool,
    init_error: Option<String>,
}

impl MongoStore {
    pub async fn connect(config: &Config) -> Self {
        let (Some(url), Some(name)) = (&config.database_url, &config.database_name) else {
            warn!("DATABASE_URL/DATABASE_NAME not set; store is unavailable");
            return Self {
                db: None,
                configured: false,
                init_error: None,
            };
        };

        match ClientOptions::parse(url).await {
            Ok(options) => match Client::with_options(options) {
                Ok(client) => {
                    info!("Connected store client for database '{}'", name);
                    Self {
                        db: Some(client.database(name)),
                        configured: true,
                        init_error: None,
                    }
                }
                Err(e) => {
                    warn!("Failed to build store client: {}", e);
                    Self {
                        db: None,
                        configured: true,
                        init_error: Some(truncate_error(&e)),
                    }
                }
            },
            Err(e) => {
                warn!("Failed to parse DATABASE_URL: {}", e);
                Self {
                    db: None,
                    configured: true,
                    init_error: Some(truncate_error(&e)),
                }
            }
        }
    }

    fn collection(&self, name: &str) -> Result<Collection<Document>, StoreError> {
        self.db
            .as_ref()
            .map(|db| db.collection::<Document>(name))
            .ok_or(StoreError::Unavailable)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn create_document(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<String, StoreError> {
        let result = self
            .collection(collection)?
            .insert_one(document)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(id_to_string(&result.inserted_id))
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, StoreError> {
        // Read paths degrade gracefully when the store was never configured.
        let coll = match self.collection(collection) {
            Ok(coll) => coll,
            Err(StoreError::Unavailable) => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let mut options = FindOptions::default();
        options.limit = limit;

        coll.find(filter)
            .with_options(options)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .try_collect::<Vec<Document>>()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn upsert_document(
        &self,
        collection: &str,
        filter: Document,
        fields: Document,
    ) -> Result<UpsertOutcome, StoreError> {
        let result = self
            .collection(collection)?
            .update_one(filter, doc! { "$set": fields })
            .upsert(true)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        match result.upserted_id {
            Some(id) => Ok(UpsertOutcome::Created(id_to_string(&id))),
            None => Ok(UpsertOutcome::Updated),
        }
    }

    async fn diagnostics(&self) -> StoreDiagnostics {
        let Some(db) = &self.db else {
            return StoreDiagnostics {
                configured: self.configured,
                connected: false,
                database_name: None,
                collections: Vec::new(),
                error: self.init_error.clone(),
            };
        };

        match db.list_collection_names().await {
            Ok(mut names) => {
                names.truncate(10);
                StoreDiagnostics {
                    configured: true,
                    connected: true,
                    database_name: Some(db.name().to_string()),
                    collections: names,
                    error: None,
                }
            }
            Err(e) => StoreDiagnostics {
                configured: true,
                connected: false,
                database_name: Some(db.name().to_string()),
                collections: Vec::new(),
                error: Some(truncate_error(&e)),
            },
        }
    }
}
