use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::email::EmailAddress;

/// A visitor contact message. Write-only; no endpoint reads these back.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactMessage {
    pub name: String,
    pub email: EmailAddress,
    pub message: String,
}
