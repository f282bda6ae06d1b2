use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// An email address checked for basic syntax at deserialization time, so a
/// malformed address is rejected before any handler (or store call) runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[schema(value_type = String, format = Email)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if EMAIL_RE.is_match(&raw) {
            Ok(EmailAddress(raw))
        } else {
            Err(de::Error::custom(format!(
                "value is not a valid email address: {}",
                raw
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<EmailAddress, serde_json::Error> {
        serde_json::from_value(serde_json::Value::String(input.to_string()))
    }

    #[test]
    fn accepts_plain_addresses() {
        assert_eq!(parse("jane@example.com").unwrap().as_str(), "jane@example.com");
        assert!(parse("a.b+tag@sub.domain.org").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(parse("not-an-email").is_err());
        assert!(parse("missing@tld").is_err());
        assert!(parse("two@@example.com").is_err());
        assert!(parse("spaces in@example.com").is_err());
        assert!(parse("").is_err());
    }
}
