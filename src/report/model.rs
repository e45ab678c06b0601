//! The in-memory report model
//!
//! Built fresh for every report invocation and never mutated after
//! rendering. Section order is the canonical group order followed by any
//! configured custom groups in first-appearance order; account order within
//! a section is feed order.

use crate::models::{Amount, Group, Transaction};

/// An account enriched with its derived display fields
#[derive(Debug, Clone)]
pub struct AccountEntry {
    /// Original identifier from the source feed
    pub name: String,
    /// Nickname override, or the original name
    pub display_name: String,
    /// Balance as delivered, numeric or opaque, possibly absent
    pub balance: Option<Amount>,
    /// Transactions sorted most-recent-first
    pub transactions: Vec<Transaction>,
}

/// One group's balances band: accumulated total plus member accounts
#[derive(Debug, Clone)]
pub struct GroupSection {
    /// The group this section covers
    pub group: Group,
    /// Accumulated signed total of numeric member balances
    pub total: f64,
    /// Member accounts in feed order
    pub accounts: Vec<AccountEntry>,
}

impl GroupSection {
    /// Create an empty section with a zero total
    pub fn new(group: Group) -> Self {
        Self {
            group,
            total: 0.0,
            accounts: Vec::new(),
        }
    }
}

/// Recent-transactions activity for one account
#[derive(Debug, Clone)]
pub struct AccountActivity {
    /// The account's display name
    pub display_name: String,
    /// Transactions sorted most-recent-first
    pub transactions: Vec<Transaction>,
}

/// Asset/liability totals and their difference
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NetWorthSummary {
    /// Sum of asset balances
    pub total_assets: f64,
    /// Sum of liability magnitudes (always non-negative)
    pub total_liabilities: f64,
    /// `total_assets - total_liabilities`, by construction
    pub net_worth: f64,
}

/// The fully aggregated, renderer-ready report
#[derive(Debug, Clone)]
pub struct ReportModel {
    /// Balance sections: canonical groups first, then custom groups in
    /// first-appearance order
    pub sections: Vec<GroupSection>,
    /// Per-account activity, ordered by when an account first produced a
    /// transaction entry
    pub activity: Vec<AccountActivity>,
    /// Net worth summary
    pub summary: NetWorthSummary,
}

impl ReportModel {
    /// Check whether any account produced transactions
    pub fn has_transactions(&self) -> bool {
        !self.activity.is_empty()
    }

    /// Total number of transactions across all accounts
    pub fn transaction_count(&self) -> usize {
        self.activity.iter().map(|a| a.transactions.len()).sum()
    }

    /// Iterate over every transaction in activity order
    pub fn all_transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.activity.iter().flat_map(|a| a.transactions.iter())
    }

    /// Check whether any section has member accounts
    pub fn has_balances(&self) -> bool {
        self.sections.iter().any(|s| !s.accounts.is_empty())
    }

    /// Total number of accounts across all sections
    pub fn account_count(&self) -> usize {
        self.sections.iter().map(|s| s.accounts.len()).sum()
    }

    /// Look up a group's accumulated total by label
    pub fn group_total(&self, label: &str) -> Option<f64> {
        self.sections
            .iter()
            .find(|s| s.group.label() == label)
            .map(|s| s.total)
    }
}
