//! finbrief - Emailed financial recaps from a SimpleFIN feed
//!
//! This library provides the core functionality for the finbrief report
//! tool: it classifies raw bank accounts into display groups, accumulates
//! per-group and net-worth totals, renders the result as an HTML or
//! plain-text document, and delivers it by email.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Feed data models (accounts, transactions, amounts, groups)
//! - `report`: The classifier/aggregator and its report model
//! - `render`: HTML and plain-text renderers
//! - `fetch`: SimpleFIN HTTP glue
//! - `mail`: SMTP delivery glue
//! - `job`: fetch -> aggregate -> render -> deliver orchestration
//! - `cli`: Command handlers for the binary
//!
//! The aggregator and renderers are pure: given the same feed snapshot and
//! configuration they produce identical output, and they perform no I/O.

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod job;
pub mod mail;
pub mod models;
pub mod render;
pub mod report;

pub use error::{BriefError, BriefResult};
