use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::Config;
use crate::store::StoreDiagnostics;

/// Body returned when a document was inserted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    /// Store-assigned id of the new document, as a plain string
    pub id: String,
}

/// Body returned by the profile upsert.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileUpsertResponse {
    /// "created" on first write, "updated" afterwards
    pub status: String,
    /// Present only when a new document was inserted
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
}

/// Body returned after accepting a contact message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactReceivedResponse {
    pub id: String,
    pub status: String,
}

/// Diagnostic payload for GET /test. Every field is a human-readable status
/// string; the endpoint never fails, it reports instead.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TestReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl TestReport {
    pub fn build(config: &Config, diag: StoreDiagnostics) -> Self {
        let database = match (&diag.error, diag.connected) {
            (Some(err), _) => format!("Error: {}", err),
            (None, true) => "Connected & Working".to_string(),
            (None, false) => "Not Available".to_string(),
        };

        TestReport {
            backend: "Running".to_string(),
            database,
            database_url: presence(config.database_url.is_some()),
            database_name: presence(config.database_name.is_some()),
            connection_status: if diag.connected {
                "Connected".to_string()
            } else {
                "Not Connected".to_string()
            },
            collections: diag.collections,
        }
    }
}

fn presence(set: bool) -> String {
    if set { "Set" } else { "Not Set" }.to_string()
}
