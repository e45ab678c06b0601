//! Configuration and path management for finbrief
//!
//! Settings live in a single JSON file under the config directory; secrets
//! and per-deployment values can be supplied through environment variables
//! instead (see [`settings::Settings::with_env_overrides`]).

pub mod paths;
pub mod settings;

pub use paths::BriefPaths;
pub use settings::{ReportConfig, Settings, SmtpSettings};
