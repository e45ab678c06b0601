//! Report style options
//!
//! One renderer serves every cadence; the differences between a daily and a
//! weekly report (heading, "no data" window wording) are carried in a
//! `ReportStyle` value.

/// Output format of the rendered document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// HTML email body
    #[default]
    Html,
    /// Plain-text variant
    Text,
}

/// Presentation options for one report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStyle {
    /// Top-level heading, e.g. "Daily Financial Report"
    pub title: String,
    /// Human wording for the lookback window, e.g. "the last 24 hours"
    pub window_label: String,
    /// Lookback window length in days
    pub lookback_days: u32,
}

impl ReportStyle {
    /// Style for the one-day report
    pub fn daily() -> Self {
        Self {
            title: "Daily Financial Report".into(),
            window_label: "the last 24 hours".into(),
            lookback_days: 1,
        }
    }

    /// Style for the seven-day report
    pub fn weekly() -> Self {
        Self {
            title: "Weekly Financial Report".into(),
            window_label: "the past week".into(),
            lookback_days: 7,
        }
    }

    /// Pick a style from a lookback window length
    pub fn for_window(days: u32) -> Self {
        match days {
            1 => Self::daily(),
            7 => Self::weekly(),
            days => Self {
                title: "Financial Report".into(),
                window_label: format!("the last {} days", days),
                lookback_days: days,
            },
        }
    }
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self::daily()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_window() {
        assert_eq!(ReportStyle::for_window(1), ReportStyle::daily());
        assert_eq!(ReportStyle::for_window(7), ReportStyle::weekly());

        let monthly = ReportStyle::for_window(30);
        assert_eq!(monthly.title, "Financial Report");
        assert_eq!(monthly.window_label, "the last 30 days");
        assert_eq!(monthly.lookback_days, 30);
    }
}
