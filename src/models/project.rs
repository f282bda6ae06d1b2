use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A portfolio project entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub link: Option<String>,
}
