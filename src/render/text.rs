//! Plain-text renderer
//!
//! The text variant of the report, used as the `text/plain` alternative in
//! the outgoing email. Same three sections and same ordering rules as the
//! HTML renderer, rendered as aligned monospace columns.

use crate::config::ReportConfig;
use crate::models::Amount;
use crate::report::ReportModel;

use super::format::{currency, local_datetime};
use super::style::ReportStyle;

/// Date format for transaction lines
const LINE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Render the plain-text document for a report model
pub fn render_text(model: &ReportModel, _config: &ReportConfig, style: &ReportStyle) -> String {
    let mut output = String::with_capacity(2 * 1024);

    output.push_str(&style.title);
    output.push('\n');
    output.push_str(&"=".repeat(70));
    output.push_str("\n\n");

    push_transactions_section(&mut output, model, style);
    push_balances_section(&mut output, model);
    push_net_worth_section(&mut output, model);

    output
}

fn push_transactions_section(output: &mut String, model: &ReportModel, style: &ReportStyle) {
    output.push_str("Recent Transactions\n");
    output.push_str(&"-".repeat(70));
    output.push('\n');

    if !model.has_transactions() {
        output.push_str(&format!(
            "No new transactions to report in {}.\n\n",
            style.window_label
        ));
        return;
    }

    for activity in &model.activity {
        output.push_str(&format!("{}:\n", activity.display_name));
        for txn in &activity.transactions {
            let amount = match &txn.amount {
                Some(Amount::Number(n)) => currency(*n),
                Some(Amount::Text(raw)) => raw.clone(),
                None => "N/A".to_string(),
            };
            output.push_str(&format!(
                "  {} | {:<30} | {:>12}\n",
                local_datetime(txn.posted, LINE_DATE_FORMAT),
                txn.description_or_placeholder(),
                amount
            ));
        }
        output.push('\n');
    }
}

fn push_balances_section(output: &mut String, model: &ReportModel) {
    output.push_str("Account Balances Overview\n");
    output.push_str(&"-".repeat(70));
    output.push('\n');

    if !model.has_balances() {
        output.push_str("No account balances to report.\n\n");
        return;
    }

    for section in &model.sections {
        if section.accounts.is_empty() {
            continue;
        }

        output.push_str(&format!(
            "{} Total: {:>12}\n",
            section.group.label(),
            currency(section.total)
        ));
        for account in &section.accounts {
            let balance = match account.balance.as_ref() {
                Some(Amount::Number(n)) => currency(*n),
                Some(Amount::Text(raw)) => raw.clone(),
                None => "N/A".to_string(),
            };
            output.push_str(&format!(
                "  {:<40} {:>12}\n",
                account.display_name, balance
            ));
        }
        output.push('\n');
    }
}

fn push_net_worth_section(output: &mut String, model: &ReportModel) {
    let summary = &model.summary;

    output.push_str("Net Worth Summary\n");
    output.push_str(&"-".repeat(70));
    output.push('\n');
    output.push_str(&format!(
        "Total Assets:      {:>15}\n",
        currency(summary.total_assets)
    ));
    output.push_str(&format!(
        "Total Liabilities: {:>15}\n",
        currency(summary.total_liabilities)
    ));
    output.push_str(&"-".repeat(35));
    output.push('\n');
    output.push_str(&format!(
        "Net Worth:         {:>15}\n",
        currency(summary.net_worth)
    ));
}
