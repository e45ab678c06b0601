//! The classifier/aggregator
//!
//! Walks the raw feed once, in input order, and produces the
//! [`ReportModel`]. Pure: no I/O, deterministic for a given feed and
//! configuration, and never fails on a malformed individual record.

use crate::config::ReportConfig;
use crate::models::{AccountFeed, Amount, Group, GroupAssignment};
use crate::report::model::{
    AccountActivity, AccountEntry, GroupSection, NetWorthSummary, ReportModel,
};

/// Aggregate a raw account feed into a report model
///
/// Per account, in feed order: resolve the display name and group from the
/// configuration, drop `Ignore` accounts entirely, fold numeric balances
/// into the group total and the asset/liability split, sort transactions
/// most-recent-first, and file the enriched account under its group
/// section. Accounts with unparseable balances stay visible in their
/// section but contribute to no total.
pub fn aggregate(feed: &AccountFeed, config: &ReportConfig) -> ReportModel {
    // The five canonical sections exist even when empty so their totals are
    // pre-seeded with zero; custom groups get a section on first use.
    let mut sections: Vec<GroupSection> = Group::CANONICAL
        .iter()
        .cloned()
        .map(GroupSection::new)
        .collect();
    let mut activity: Vec<AccountActivity> = Vec::new();

    let mut total_assets = 0.0_f64;
    let mut total_liabilities = 0.0_f64;

    for account in &feed.accounts {
        let display_name = config.display_name(&account.name).to_string();

        let group = match GroupAssignment::from_label(config.group_label(&account.name)) {
            GroupAssignment::Ignore => continue,
            GroupAssignment::Keep(group) => group,
        };

        let section_idx = match sections.iter().position(|s| s.group == group) {
            Some(idx) => idx,
            None => {
                sections.push(GroupSection::new(group.clone()));
                sections.len() - 1
            }
        };

        if let Some(balance) = account.balance.as_ref().and_then(Amount::number) {
            sections[section_idx].total += balance;

            // A credit-card balance is a liability whatever its sign; a
            // negative balance elsewhere is one too. Counted exactly once.
            if group.is_liability() || balance < 0.0 {
                total_liabilities += balance.abs();
            } else {
                total_assets += balance;
            }
        }

        let mut transactions = account.transactions.clone();
        if !transactions.is_empty() {
            // Stable: ties keep their feed order
            transactions.sort_by(|a, b| b.posted.cmp(&a.posted));
            activity.push(AccountActivity {
                display_name: display_name.clone(),
                transactions: transactions.clone(),
            });
        }

        sections[section_idx].accounts.push(AccountEntry {
            name: account.name.clone(),
            display_name,
            balance: account.balance.clone(),
            transactions,
        });
    }

    let summary = NetWorthSummary {
        total_assets,
        total_liabilities,
        net_worth: total_assets - total_liabilities,
    };

    ReportModel {
        sections,
        activity,
        summary,
    }
}
