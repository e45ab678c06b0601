//! Account groups
//!
//! Five canonical groups drive the balances section and its banner order;
//! any other configured label is carried as a custom group rather than
//! rejected. The special label `Ignore` excludes an account from the report
//! entirely.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A display group for an account
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    /// Credit card accounts (always counted as liabilities)
    CreditCards,
    /// Checking accounts
    Checking,
    /// Savings accounts
    Savings,
    /// Brokerage and retirement accounts
    Investments,
    /// The fallback bucket for unconfigured accounts
    Other,
    /// A configured label outside the canonical five
    Custom(String),
}

impl Group {
    /// The five canonical groups, in their fixed display order
    pub const CANONICAL: [Group; 5] = [
        Group::CreditCards,
        Group::Checking,
        Group::Savings,
        Group::Investments,
        Group::Other,
    ];

    /// Resolve a configured label to a group
    pub fn from_label(label: &str) -> Self {
        match label {
            "Credit Cards" => Self::CreditCards,
            "Checking Accounts" => Self::Checking,
            "Savings Accounts" => Self::Savings,
            "Investments" => Self::Investments,
            "Other" => Self::Other,
            other => Self::Custom(other.to_string()),
        }
    }

    /// The user-visible label for this group
    pub fn label(&self) -> &str {
        match self {
            Self::CreditCards => "Credit Cards",
            Self::Checking => "Checking Accounts",
            Self::Savings => "Savings Accounts",
            Self::Investments => "Investments",
            Self::Other => "Other",
            Self::Custom(label) => label,
        }
    }

    /// Whether balances in this group are liabilities regardless of sign
    pub fn is_liability(&self) -> bool {
        matches!(self, Self::CreditCards)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The resolved group assignment for an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupAssignment {
    /// Exclude the account from the report entirely
    Ignore,
    /// Include the account under the given group
    Keep(Group),
}

impl GroupAssignment {
    /// Resolve a configured label (or its absence) to an assignment
    ///
    /// `None` means the account is not configured and falls back to `Other`.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("Ignore") => Self::Ignore,
            Some(label) => Self::Keep(Group::from_label(label)),
            None => Self::Keep(Group::Other),
        }
    }
}
