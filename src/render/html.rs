//! HTML renderer
//!
//! Produces the email body markup: recent transactions, the grouped
//! balances overview with colored group banners, and the net worth
//! summary. Balance and banner rows use a three-cell layout (label,
//! sign+`$`, magnitude) so signs and digits column-align across rows.

use crate::config::ReportConfig;
use crate::models::{Amount, Transaction};
use crate::report::{GroupSection, ReportModel};

use super::format::{currency, escape_html, local_datetime, signed_parts};
use super::style::ReportStyle;

/// Banner color for groups without a configured color token
const FALLBACK_GROUP_COLOR: &str = "#7f8c8d";

/// Date format for transaction rows
const ROW_DATE_FORMAT: &str = "%m/%d %H:%M";

const DOCUMENT_HEAD: &str = r#"<html>
<head>
    <style>
        body { font-family: Arial, sans-serif; line-height: 1.4; background-color: #ffffff; color: #333; margin: 0; padding: 10px; }
        .container { max-width: 600px; margin: 0 auto; }
        h1 { font-size: 20px; color: #2c3e50; border-bottom: 1px solid #ccc; padding-bottom: 5px; margin-bottom: 15px; }
        .section-header { font-size: 18px; font-weight: bold; color: #16a085; padding: 5px 0; margin-bottom: 10px; border-bottom: 2px solid #16a085; }
        .account-subheader { font-size: 14px; font-weight: bold; color: #333; margin: 10px 0 0 0; padding: 3px 0; }
        .data-table { width: 100%; border-collapse: collapse; margin-bottom: 10px; }
        .data-table th, .data-table td { text-align: left; padding: 6px 8px; border-bottom: 1px solid #eee; font-size: 13px; }
        .data-table th { background-color: #f0f0f0; color: #555; }
        .positive { color: #27ae60; }
        .negative { color: #e74c3c; }
        .net-worth-row { font-size: 16px; font-weight: bold; }
        .net-worth-row td { padding: 8px 10px; }
        .balance-row { background-color: #f9f9f9; }
        .balance-row td { padding: 8px 10px; font-weight: bold; }
        .group-total-text { color: #fff; text-shadow: 1px 1px 0 #000, -1px -1px 0 #000, 1px -1px 0 #000, -1px 1px 0 #000; }
    </style>
</head>
<body>
    <div class="container">
"#;

/// Render the full HTML document for a report model
pub fn render_html(model: &ReportModel, config: &ReportConfig, style: &ReportStyle) -> String {
    let mut html = String::with_capacity(8 * 1024);

    html.push_str(DOCUMENT_HEAD);
    html.push_str(&format!("        <h1>{}</h1>\n", escape_html(&style.title)));

    push_transactions_section(&mut html, model, style);
    push_balances_section(&mut html, model, config);
    push_net_worth_section(&mut html, model);

    html.push_str("    </div>\n</body>\n</html>\n");
    html
}

/// Section 1: recent transactions grouped by account
fn push_transactions_section(html: &mut String, model: &ReportModel, style: &ReportStyle) {
    html.push_str("        <div class=\"section-header\">Recent Transactions</div>\n");

    if !model.has_transactions() {
        html.push_str(&format!(
            "        <p>No new transactions to report in {}.</p>\n",
            escape_html(&style.window_label)
        ));
        return;
    }

    for activity in &model.activity {
        html.push_str(&format!(
            "        <div class=\"account-subheader\">{}</div>\n",
            escape_html(&activity.display_name)
        ));
        html.push_str(
            r#"        <table class="data-table">
            <thead>
                <tr>
                    <th style="width: 20%;">Date</th>
                    <th style="width: 55%;">Description</th>
                    <th style="text-align:right; width: 25%;">Amount</th>
                </tr>
            </thead>
            <tbody>
"#,
        );
        for txn in &activity.transactions {
            push_transaction_row(html, txn);
        }
        html.push_str("            </tbody>\n        </table>\n");
    }
}

fn push_transaction_row(html: &mut String, txn: &Transaction) {
    let (amount_class, amount_text) = match &txn.amount {
        Some(Amount::Number(n)) => {
            let class = if *n >= 0.0 { "positive" } else { "negative" };
            (class, currency(*n))
        }
        Some(Amount::Text(raw)) => ("", escape_html(raw)),
        None => ("", "N/A".to_string()),
    };

    html.push_str(&format!(
        r#"                <tr>
                    <td>{}</td>
                    <td>{}</td>
                    <td><span style="float:right;" class="{}">{}</span></td>
                </tr>
"#,
        local_datetime(txn.posted, ROW_DATE_FORMAT),
        escape_html(txn.description_or_placeholder()),
        amount_class,
        amount_text
    ));
}

/// Section 2: grouped balances with a colored banner per group
fn push_balances_section(html: &mut String, model: &ReportModel, config: &ReportConfig) {
    html.push_str(
        "        <div class=\"section-header\" style=\"margin-top: 25px;\">Account Balances Overview</div>\n",
    );

    if !model.has_balances() {
        html.push_str("        <p>No account balances to report.</p>\n");
        return;
    }

    for section in &model.sections {
        if section.accounts.is_empty() {
            continue;
        }
        push_group_banner(html, section, config);
        push_group_rows(html, section);
    }
}

fn push_group_banner(html: &mut String, section: &GroupSection, config: &ReportConfig) {
    let label = section.group.label();
    let color = config.color(label).unwrap_or(FALLBACK_GROUP_COLOR);
    let (sign, magnitude) = signed_parts(section.total);

    // 3-column banner: 68% label, 7% sign+$, 25% magnitude
    html.push_str(&format!(
        r#"        <table style="width: 100%; background-color: {}; color: #fff; border-collapse: collapse; margin: 10px 0 0 0;">
            <tr>
                <td width="68%" style="font-size: 16px; font-weight: bold; padding: 5px 10px; text-align: left; text-shadow: 1px 1px 0 #000, -1px -1px 0 #000, 1px -1px 0 #000, -1px 1px 0 #000;">
                    {} Total:
                </td>
                <td width="7%" style="font-size: 16px; font-weight: bold; text-align:right; padding: 5px 0 5px 0;">
                    <span class="group-total-text">{}$</span>
                </td>
                <td width="25%" style="font-size: 16px; font-weight: bold; text-align:left; padding: 5px 10px 5px 0;">
                    <span class="group-total-text">{}</span>
                </td>
            </tr>
        </table>
"#,
        color,
        escape_html(label),
        sign,
        magnitude
    ));
}

fn push_group_rows(html: &mut String, section: &GroupSection) {
    html.push_str("        <table class=\"data-table\">\n            <tbody>\n");

    for account in &section.accounts {
        // Numeric balances split sign+$ from the magnitude; opaque values
        // span both cells verbatim.
        let balance_cells = match account.balance.as_ref() {
            Some(Amount::Number(n)) => {
                let (sign, magnitude) = signed_parts(*n);
                format!(
                    r#"<td width="7%" style="text-align:right; padding: 0;"><strong>{}$</strong></td><td width="25%" style="text-align:left; padding-left:0;"><strong>{}</strong></td>"#,
                    sign, magnitude
                )
            }
            Some(Amount::Text(raw)) => format!(
                r#"<td colspan="2" width="32%" style="text-align:right; padding-left:0;"><strong>{}</strong></td>"#,
                escape_html(raw)
            ),
            None => r#"<td colspan="2" width="32%" style="text-align:right; padding-left:0;"><strong>N/A</strong></td>"#.to_string(),
        };

        html.push_str(&format!(
            r#"                <tr class="balance-row">
                    <td width="68%">{}</td>
                    {}
                </tr>
"#,
            escape_html(&account.display_name),
            balance_cells
        ));
    }

    html.push_str("            </tbody>\n        </table>\n");
}

/// Section 3: net worth summary
fn push_net_worth_section(html: &mut String, model: &ReportModel) {
    let summary = &model.summary;
    let net_worth_class = if summary.net_worth >= 0.0 {
        "positive"
    } else {
        "negative"
    };

    html.push_str(&format!(
        r#"        <div class="section-header" style="margin-top: 25px;">Net Worth Summary</div>
        <table class="data-table" style="margin-bottom: 20px;">
            <tbody>
                <tr>
                    <td>Total Assets</td>
                    <td style="text-align:right;"><span class="positive">{}</span></td>
                </tr>
                <tr>
                    <td>Total Liabilities</td>
                    <td style="text-align:right;"><span class="negative">{}</span></td>
                </tr>
                <tr class="net-worth-row" style="background-color: #e6e6e6; border-top: 2px solid #333;">
                    <td>NET WORTH</td>
                    <td style="text-align:right;"><span class="{}">{}</span></td>
                </tr>
            </tbody>
        </table>
"#,
        currency(summary.total_assets),
        currency(summary.total_liabilities),
        net_worth_class,
        currency(summary.net_worth)
    ));
}
