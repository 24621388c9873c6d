//! Result DTOs for the search backend boundary.
//!
//! DESIGN
//! ======
//! The backend is an external service; these types accept its JSON leniently
//! (missing fields default, numeric ids may arrive as strings) so one odd row
//! does not blank the whole result page.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Default page size used by the backend.
pub const DEFAULT_PER_PAGE: u32 = 12;

/// One medicine row on the result page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MedicineSummary {
    /// Backend row id, used for the detail link.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub item_name: String,
    #[serde(default)]
    pub entp_name: String,
    /// Pill photo URL, absent for many rows.
    #[serde(default)]
    pub item_image: Option<String>,
    #[serde(default)]
    pub drug_shape: Option<String>,
    #[serde(default)]
    pub color_class1: Option<String>,
    #[serde(default)]
    pub matched_product: bool,
    #[serde(default)]
    pub matched_manufacturer: bool,
    #[serde(default)]
    pub matched_side_effect: bool,
}

impl MedicineSummary {
    /// Detail page path for this row.
    pub fn detail_path(&self) -> String {
        format!("/medicine/{}", urlencoding::encode(&self.id))
    }

    /// Image URL when the row has a usable one.
    pub fn image(&self) -> Option<&str> {
        self.item_image.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// One page of search results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub results: Vec<MedicineSummary>,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default)]
    pub total_pages: u32,
}

impl Default for SearchResults {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            total_count: 0,
            page: default_page(),
            per_page: default_per_page(),
            total_pages: 0,
        }
    }
}

impl SearchResults {
    pub fn has_pagination(&self) -> bool {
        self.total_pages > 1
    }
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => match number.as_u64() {
            Some(id) => Ok(id.to_string()),
            None => Err(D::Error::custom("expected non-negative integer id")),
        },
        serde_json::Value::String(id) if !id.trim().is_empty() => Ok(id.trim().to_owned()),
        _ => Err(D::Error::custom("expected integer or string id")),
    }
}
