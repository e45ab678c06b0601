//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the report job layer.

pub mod report;

pub use report::{
    handle_config_command, handle_init_command, handle_preview_command, handle_send_command,
    OutputFormat,
};
