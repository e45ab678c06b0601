//! Report model and aggregation
//!
//! The classifier/aggregator turns the raw account feed into a
//! renderer-ready [`ReportModel`]: grouped balances with accumulated
//! totals, per-account transaction activity, and the net worth summary.

pub mod aggregate;
pub mod model;

pub use aggregate::aggregate;
pub use model::{AccountActivity, AccountEntry, GroupSection, NetWorthSummary, ReportModel};
