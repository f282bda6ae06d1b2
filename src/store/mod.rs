pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use async_trait::async_trait;
use mongodb::bson::{Bson, Document};
use thiserror::Error;

/// Collection names used by the API.
pub mod collections {
    pub const PROFILE: &str = "profile";
    pub const PROJECT: &str = "project";
    pub const CONTACT_MESSAGE: &str = "contactmessage";
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store is not configured")]
    Unavailable,

    #[error("store operation failed: {0}")]
    Backend(String),
}

/// Result of an atomic upsert keyed by a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created(String),
    Updated,
}

/// Connectivity report for the diagnostics endpoint. Building one never
/// fails; operational faults end up in `error` instead of propagating.
#[derive(Debug, Clone, Default)]
pub struct StoreDiagnostics {
    pub configured: bool,
    pub connected: bool,
    pub database_name: Option<String>,
    pub collections: Vec<String>,
    pub error: Option<String>,
}

/// Thin adapter over a document database. One method call is one store
/// operation; no retries, no cross-call transactions.
///
/// Constructed once at startup and injected into `AppState`, so tests can
/// swap in [`MemoryStore`] for the real [`MongoStore`].
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts one document and returns its store-assigned id as a string.
    async fn create_document(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<String, StoreError>;

    /// Returns documents matching `filter` (empty = match-all) in
    /// store-native order, capped at `limit` when given. An unavailable
    /// store yields an empty list rather than an error.
    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, StoreError>;

    /// Atomically sets `fields` on the document matching `filter`, inserting
    /// a new one when no match exists.
    async fn upsert_document(
        &self,
        collection: &str,
        filter: Document,
        fields: Document,
    ) -> Result<UpsertOutcome, StoreError>;

    async fn diagnostics(&self) -> StoreDiagnostics;
}

/// Renders a store-native id as a plain string for API responses.
pub(crate) fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Caps an error message for inclusion in a diagnostics payload.
pub(crate) fn truncate_error(err: impl ToString) -> String {
    err.to_string().chars().take(50).collect()
}
