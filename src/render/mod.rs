//! Report rendering
//!
//! Turns a [`ReportModel`](crate::report::ReportModel) into a document
//! string. Both output formats share the same section order and formatting
//! rules; cadence differences (daily vs weekly) are carried by
//! [`ReportStyle`].

pub mod format;
pub mod html;
pub mod style;
pub mod text;

pub use style::{ReportFormat, ReportStyle};

use crate::config::ReportConfig;
use crate::report::ReportModel;

/// Render a report model into a document in the requested format
pub fn render(
    model: &ReportModel,
    config: &ReportConfig,
    style: &ReportStyle,
    format: ReportFormat,
) -> String {
    match format {
        ReportFormat::Html => html::render_html(model, config, style),
        ReportFormat::Text => text::render_text(model, config, style),
    }
}
