use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public profile information; one logical record per deployment.
///
/// Optional fields serialize as `null` so an upsert overwrites every field
/// of the stored document, never leaving stale values behind. Store-side
/// extras (`_id`, `singleton`, `updated_at`) are dropped on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    /// Full name
    pub name: String,
    /// Headline/title
    pub title: String,
    /// Short biography
    pub bio: String,
    /// Location
    pub location: Option<String>,
    /// Profile photo URL
    pub photo_url: Option<String>,
    /// Map of social network to URL (e.g., linkedin, github)
    pub socials: Option<HashMap<String, String>>,
}
