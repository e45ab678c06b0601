//! Report command handlers

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::{BriefPaths, Settings};
use crate::error::BriefResult;
use crate::job::ReportJob;
use crate::render::ReportFormat;

/// Output format selector for `preview`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// HTML email body
    #[default]
    Html,
    /// Plain-text variant
    Text,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Html => Self::Html,
            OutputFormat::Text => Self::Text,
        }
    }
}

/// Build a report and email it
pub fn handle_send_command(settings: &Settings, days: u32, dry_run: bool) -> BriefResult<()> {
    let job = ReportJob::new(settings);
    let report = job.build(days)?;

    if dry_run {
        println!("Dry run: not sending \"{}\"", report.subject);
        println!(
            "  {} transaction(s) across {} account(s)",
            report.transaction_count, report.account_count
        );
        return Ok(());
    }

    job.deliver(&report)?;
    println!("Email sent: {}", report.subject);
    Ok(())
}

/// Build a report and print it (or write it to a file) without sending
pub fn handle_preview_command(
    settings: &Settings,
    days: u32,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> BriefResult<()> {
    let job = ReportJob::new(settings);
    let report = job.build(days)?;

    let body = match format {
        OutputFormat::Html => report.html,
        OutputFormat::Text => report.text,
    };

    match output {
        Some(path) => {
            std::fs::write(&path, &body)?;
            println!("Wrote {} preview to {}", report.subject, path.display());
        }
        None => println!("{}", body),
    }

    Ok(())
}

/// Write a default settings file if none exists yet
pub fn handle_init_command(paths: &BriefPaths) -> BriefResult<()> {
    if paths.is_initialized() {
        println!(
            "Settings file already exists: {}",
            paths.settings_file().display()
        );
        return Ok(());
    }

    Settings::default().save(paths)?;
    println!("Wrote default settings to {}", paths.settings_file().display());
    println!();
    println!("Fill in the SimpleFIN access URL and SMTP settings, or export");
    println!("SIMPLEFIN_ACCESS_URL, SMTP_SERVER, SENDER_EMAIL, SENDER_PASSWORD,");
    println!("and RECIPIENT_EMAIL in the environment.");
    Ok(())
}

/// Show the resolved configuration and paths
pub fn handle_config_command(paths: &BriefPaths, settings: &Settings) -> BriefResult<()> {
    println!("finbrief Configuration");
    println!("======================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!();
    println!("Access URL configured: {}", settings.access_url.is_some());
    println!("SMTP server:           {}", value_or_unset(&settings.smtp.server));
    println!("SMTP port:             {}", settings.smtp.port);
    println!("Sender:                {}", value_or_unset(&settings.smtp.sender));
    println!("Recipient:             {}", value_or_unset(&settings.smtp.recipient));
    println!("Password configured:   {}", settings.smtp.password.is_some());
    println!();
    println!(
        "Account groups:    {} configured",
        settings.report.account_groups.len()
    );
    println!(
        "Account nicknames: {} configured",
        settings.report.account_nicknames.len()
    );
    Ok(())
}

fn value_or_unset(value: &str) -> &str {
    if value.is_empty() {
        "(unset)"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(ReportFormat::from(OutputFormat::Html), ReportFormat::Html);
        assert_eq!(ReportFormat::from(OutputFormat::Text), ReportFormat::Text);
    }

    #[test]
    fn test_value_or_unset() {
        assert_eq!(value_or_unset(""), "(unset)");
        assert_eq!(value_or_unset("smtp.example.com"), "smtp.example.com");
    }
}
