use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use tokio::sync::RwLock;

use super::{DocumentStore, StoreDiagnostics, StoreError, UpsertOutcome};

type CollectionMap = HashMap<String, Vec<Document>>;

/// In-process document store over a `HashMap` of collections.
///
/// Queries scan the whole collection and match on top-level field equality,
/// which covers everything the API asks of a store. Used by the test suite;
/// also a reasonable backend for demo deployments without a database.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<CollectionMap>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches_filter(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, value)| document.get(key) == Some(value))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn create_document(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<String, StoreError> {
        let id = ObjectId::new();
        document.insert("_id", id);

        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(id.to_hex())
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        let documents = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| matches_filter(d, &filter))
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        match limit {
            Some(n) => Ok(documents.into_iter().take(n.max(0) as usize).collect()),
            None => Ok(documents),
        }
    }

    async fn upsert_document(
        &self,
        collection: &str,
        filter: Document,
        fields: Document,
    ) -> Result<UpsertOutcome, StoreError> {
        // The write lock is held across match-and-modify, so the upsert is
        // atomic with respect to concurrent callers.
        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection.to_string()).or_default();

        if let Some(existing) = documents.iter_mut().find(|d| matches_filter(d, &filter)) {
            for (key, value) in fields {
                existing.insert(key, value);
            }
            return Ok(UpsertOutcome::Updated);
        }

        let id = ObjectId::new();
        let mut document = Document::new();
        document.insert("_id", id);
        for (key, value) in filter {
            document.insert(key, value);
        }
        for (key, value) in fields {
            document.insert(key, value);
        }
        documents.push(document);

        Ok(UpsertOutcome::Created(id.to_hex()))
    }

    async fn diagnostics(&self) -> StoreDiagnostics {
        let collections = self.collections.read().await;
        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort();
        names.truncate(10);

        StoreDiagnostics {
            configured: true,
            connected: true,
            database_name: Some("memory".to_string()),
            collections: names,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::doc;

    use super::*;

    #[tokio::test]
    async fn create_assigns_distinct_ids() {
        let store = MemoryStore::new();
        let a = store
            .create_document("project", doc! { "title": "a" })
            .await
            .unwrap();
        let b = store
            .create_document("project", doc! { "title": "b" })
            .await
            .unwrap();

        assert_ne!(a, b);
        let docs = store.get_documents("project", doc! {}, None).await.unwrap();
        assert_eq!(docs.len(), 2);
    }

    #[tokio::test]
    async fn filter_matches_on_field_equality() {
        let store = MemoryStore::new();
        store
            .create_document("project", doc! { "title": "a", "kept": true })
            .await
            .unwrap();
        store
            .create_document("project", doc! { "title": "b", "kept": false })
            .await
            .unwrap();

        let docs = store
            .get_documents("project", doc! { "kept": true }, None)
            .await
            .unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].get_str("title").unwrap(), "a");
    }

    #[tokio::test]
    async fn get_respects_limit() {
        let store = MemoryStore::new();
        for i in 0..3 {
            store
                .create_document("project", doc! { "n": i })
                .await
                .unwrap();
        }

        let docs = store
            .get_documents("project", doc! {}, Some(1))
            .await
            .unwrap();
        assert_eq!(docs.len(), 1);
    }

    #[tokio::test]
    async fn upsert_inserts_then_updates_in_place() {
        let store = MemoryStore::new();
        let filter = doc! { "singleton": true };

        let first = store
            .upsert_document("profile", filter.clone(), doc! { "name": "Ada" })
            .await
            .unwrap();
        assert!(matches!(first, UpsertOutcome::Created(_)));

        let second = store
            .upsert_document("profile", filter.clone(), doc! { "name": "Grace" })
            .await
            .unwrap();
        assert_eq!(second, UpsertOutcome::Updated);

        let docs = store.get_documents("profile", doc! {}, None).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].get_str("name").unwrap(), "Grace");
        assert_eq!(docs[0].get_bool("singleton").unwrap(), true);
    }

    #[tokio::test]
    async fn diagnostics_lists_collections() {
        let store = MemoryStore::new();
        store
            .create_document("contactmessage", doc! { "name": "x" })
            .await
            .unwrap();

        let diag = store.diagnostics().await;
        assert!(diag.configured && diag.connected);
        assert_eq!(diag.collections, vec!["contactmessage".to_string()]);
        assert!(diag.error.is_none());
    }
}
