//! Value types produced by the default mappers.
//!
//! Field names follow the PascalCase keys of the HIBP v3 JSON responses.
//! Every breach field except `name` is optional: the truncated account lookup
//! returns `{"Name": "..."}` only.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A data class label such as `"Email addresses"`.
pub type DataClassName = String;

/// Metadata about one breach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Breach {
    pub name: String,
    pub title: Option<String>,
    pub domain: Option<String>,
    /// When the breach occurred. Day precision, often approximate.
    pub breach_date: Option<NaiveDate>,
    /// When the breach was loaded into the service.
    pub added_date: Option<DateTime<Utc>>,
    pub modified_date: Option<DateTime<Utc>>,
    pub pwn_count: Option<u64>,
    /// HTML overview of the incident.
    pub description: Option<String>,
    pub logo_path: Option<String>,
    #[serde(default)]
    pub data_classes: Vec<DataClassName>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_fabricated: bool,
    #[serde(default)]
    pub is_sensitive: bool,
    #[serde(default)]
    pub is_retired: bool,
    #[serde(default)]
    pub is_spam_list: bool,
    #[serde(default)]
    pub is_malware: bool,
}

/// A paste in which an account's email address appeared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Paste {
    /// Paste service, e.g. `"Pastebin"`.
    pub source: String,
    /// Identifier at the source; combine with `source` to build a link.
    pub id: String,
    pub title: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub email_count: u64,
}
