//! Shared data shapes for the static catalog document and the signed-in user.
//!
//! DESIGN
//! ======
//! Field names mirror the camelCase keys of `kidsdata.json` so the document
//! deserializes without a translation layer. Secondary display fields default
//! when absent; only `toyId` is required because routing depends on it.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A single toy record from the static catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Numeric identifier used in `/pets-news/:id`.
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub toy_id: u64,
    #[serde(default)]
    pub toy_name: String,
    #[serde(default)]
    pub seller_name: String,
    #[serde(default)]
    pub seller_email: String,
    #[serde(default)]
    pub price: f64,
    /// Rating on a 0 to 5 scale.
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub available_quantity: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "pictureURL")]
    pub picture_url: String,
    #[serde(default)]
    pub sub_category: String,
}

/// Identity record issued by the identity provider.
///
/// The application only ever reads this; it is replaced wholesale whenever the
/// provider publishes a session change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Provider-issued unique identifier.
    pub uid: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    /// Account creation time in milliseconds since the Unix epoch.
    pub created_at_ms: Option<i64>,
}

impl User {
    /// Display name, or `"User"` when the provider has none.
    pub fn name_or_default(&self) -> &str {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or("User")
    }

    /// Upper-cased first letter of the display name, or `'U'`.
    pub fn initial(&self) -> char {
        self.display_name
            .as_deref()
            .and_then(|name| name.trim().chars().next())
            .map_or('U', |c| c.to_uppercase().next().unwrap_or(c))
    }

    /// Human-readable account creation date, e.g. `"March 4, 2024"`.
    pub fn member_since(&self) -> Option<String> {
        let ms = self.created_at_ms?;
        let at = chrono::DateTime::from_timestamp_millis(ms)?;
        Some(at.format("%B %-d, %Y").to_string())
    }
}

/// Accepts integral JSON numbers and numeric strings (`3`, `3.0`, `"3"`).
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn deserialize_u64_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= u64::MAX as f64
            {
                return Ok(float as u64);
            }
            Err(D::Error::custom("expected non-negative integer id"))
        }
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| D::Error::custom(format!("expected numeric id, got {raw:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}
