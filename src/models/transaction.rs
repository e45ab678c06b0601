//! Feed transaction model
//!
//! A transaction as delivered by the SimpleFIN feed. Only three fields
//! matter to the report: when it posted (ordering), what it was
//! (description), and how much (a numeric-or-opaque amount).

use serde::{Deserialize, Serialize};

use super::amount::Amount;

/// Placeholder shown when the feed omits a description or amount
pub const MISSING_FIELD_PLACEHOLDER: &str = "N/A";

/// A transaction from the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Posted time as a Unix timestamp (seconds); the ordering key
    #[serde(default)]
    pub posted: i64,

    /// Transaction description, absent in some feeds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Transaction amount, absent or opaque in some feeds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
}

impl Transaction {
    /// The description to display, with the placeholder for absent values
    pub fn description_or_placeholder(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or(MISSING_FIELD_PLACEHOLDER)
    }
}
