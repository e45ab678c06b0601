//! Report job orchestration
//!
//! One invocation is fetch -> aggregate -> render -> deliver. A fetch
//! failure aborts the build before any aggregation; a wrong-shaped payload
//! downgrades to an empty feed so the report still goes out with explicit
//! "no data" placeholders.

use chrono::{Duration, Local, NaiveDate};
use tracing::warn;

use crate::config::Settings;
use crate::error::BriefResult;
use crate::fetch::SimpleFinClient;
use crate::models::AccountFeed;
use crate::render::{render, ReportFormat, ReportStyle};
use crate::report::aggregate;

/// A fully rendered report, ready for delivery
#[derive(Debug, Clone)]
pub struct BuiltReport {
    /// Subject line embedding the covered date range
    pub subject: String,
    /// Plain-text body
    pub text: String,
    /// HTML body
    pub html: String,
    /// Number of transactions in the report
    pub transaction_count: usize,
    /// Number of accounts in the balances section
    pub account_count: usize,
}

/// Builds and delivers reports for one settings snapshot
pub struct ReportJob<'a> {
    settings: &'a Settings,
}

impl<'a> ReportJob<'a> {
    /// Create a report job over the given settings
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Fetch the feed for the lookback window and build both report bodies
    pub fn build(&self, days: u32) -> BriefResult<BuiltReport> {
        let access_url = self.settings.require_access_url()?;
        let client = SimpleFinClient::new(access_url);

        let now = Local::now();
        let start = now - Duration::days(i64::from(days));

        let feed = match client.accounts_since(start.timestamp()) {
            Ok(feed) => feed,
            Err(e) if e.is_input_shape() => {
                warn!("Feed payload had an unexpected shape, reporting no data: {}", e);
                AccountFeed::empty()
            }
            Err(e) => return Err(e),
        };

        Ok(self.build_from_feed(&feed, days, start.date_naive(), now.date_naive()))
    }

    /// Build both report bodies from an already-fetched feed
    pub fn build_from_feed(
        &self,
        feed: &AccountFeed,
        days: u32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> BuiltReport {
        let model = aggregate(feed, &self.settings.report);
        let style = ReportStyle::for_window(days);

        let html = render(&model, &self.settings.report, &style, ReportFormat::Html);
        let text = render(&model, &self.settings.report, &style, ReportFormat::Text);

        BuiltReport {
            subject: subject_line(&style, start_date, end_date),
            text,
            html,
            transaction_count: model.transaction_count(),
            account_count: model.account_count(),
        }
    }

    /// Deliver a built report over the configured SMTP channel
    pub fn deliver(&self, report: &BuiltReport) -> BriefResult<()> {
        let mailer = crate::mail::Mailer::new(&self.settings.smtp)?;
        mailer.send(&report.subject, report.text.clone(), report.html.clone())
    }
}

/// Subject line for the covered date range
///
/// A one-day window shows a single date; longer windows show the range.
fn subject_line(style: &ReportStyle, start_date: NaiveDate, end_date: NaiveDate) -> String {
    if style.lookback_days == 1 {
        format!("{} ({})", style.title, end_date.format("%Y-%m-%d"))
    } else {
        format!(
            "{} ({} to {})",
            style.title,
            start_date.format("%Y-%m-%d"),
            end_date.format("%Y-%m-%d")
        )
    }
}
