//! Core data models for finbrief
//!
//! This module contains the data structures that represent the SimpleFIN
//! feed domain: accounts, transactions, numeric-or-opaque amounts, and
//! account groups.

pub mod account;
pub mod amount;
pub mod group;
pub mod transaction;

pub use account::{AccountFeed, RawAccount};
pub use amount::Amount;
pub use group::{Group, GroupAssignment};
pub use transaction::Transaction;
