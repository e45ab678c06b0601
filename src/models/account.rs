//! Feed account model
//!
//! Raw accounts as delivered by the SimpleFIN `/accounts` endpoint, plus the
//! top-level feed container. The feed is decoded from a generic JSON value
//! so that a malformed individual record degrades gracefully instead of
//! rejecting the whole payload; only a wrong top-level shape is an error.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::amount::Amount;
use super::transaction::Transaction;
use crate::error::{BriefError, BriefResult};

/// A raw account record from the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAccount {
    /// Original identifier from the source feed; the key into the
    /// configuration maps
    #[serde(default)]
    pub name: String,

    /// Current balance, numeric or opaque, possibly absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<Amount>,

    /// Transactions in the lookback window (may be empty)
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// The top-level record set returned by the feed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountFeed {
    /// Account records in feed order
    pub accounts: Vec<RawAccount>,
}

impl AccountFeed {
    /// An empty feed, used when the payload is treated as "no data"
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a feed from a decoded JSON payload
    ///
    /// The payload must be an object with an `accounts` array; anything else
    /// is an [`BriefError::InputShape`] error. Individual records that do
    /// not deserialize are skipped, not fatal.
    pub fn from_value(value: serde_json::Value) -> BriefResult<Self> {
        let serde_json::Value::Object(mut top) = value else {
            return Err(BriefError::InputShape("top level is not an object".into()));
        };

        let Some(accounts_value) = top.remove("accounts") else {
            return Err(BriefError::InputShape(
                "missing top-level \"accounts\" field".into(),
            ));
        };

        let serde_json::Value::Array(records) = accounts_value else {
            return Err(BriefError::InputShape(
                "\"accounts\" is not an array".into(),
            ));
        };

        let mut accounts = Vec::with_capacity(records.len());
        for record in records {
            match serde_json::from_value::<RawAccount>(record) {
                Ok(account) => accounts.push(account),
                Err(e) => warn!("Skipping malformed account record: {}", e),
            }
        }

        Ok(Self { accounts })
    }

    /// Check whether the feed carries no account records
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_feed_from_value() {
        let payload = json!({
            "accounts": [
                {
                    "name": "Acme Bank Checking",
                    "balance": "1000.00",
                    "transactions": [
                        {"posted": 1700000000, "description": "Groceries", "amount": "-50.00"}
                    ]
                },
                {"name": "Acme Visa", "balance": 200.0}
            ]
        });

        let feed = AccountFeed::from_value(payload).unwrap();
        assert_eq!(feed.accounts.len(), 2);
        assert_eq!(feed.accounts[0].name, "Acme Bank Checking");
        assert_eq!(feed.accounts[0].transactions.len(), 1);
        assert_eq!(feed.accounts[1].balance, Some(Amount::Number(200.0)));
        assert!(feed.accounts[1].transactions.is_empty());
    }

    #[test]
    fn test_wrong_top_level_shape() {
        let err = AccountFeed::from_value(json!([1, 2, 3])).unwrap_err();
        assert!(err.is_input_shape());

        let err = AccountFeed::from_value(json!({"errors": []})).unwrap_err();
        assert!(err.is_input_shape());

        let err = AccountFeed::from_value(json!({"accounts": "nope"})).unwrap_err();
        assert!(err.is_input_shape());
    }

    #[test]
    fn test_malformed_record_skipped() {
        let payload = json!({
            "accounts": [
                {"name": "Good", "balance": "10.00"},
                {"name": "Bad", "transactions": "not an array"}
            ]
        });

        let feed = AccountFeed::from_value(payload).unwrap();
        assert_eq!(feed.accounts.len(), 1);
        assert_eq!(feed.accounts[0].name, "Good");
    }

    #[test]
    fn test_empty_accounts_array() {
        let feed = AccountFeed::from_value(json!({"accounts": []})).unwrap();
        assert!(feed.is_empty());
    }
}
