//! The PagerTree CLI client library.
//!
//! This crate provides the core functionality for the PagerTree CLI client:
//! a typed client for the PagerTree v4 REST API, normalization of its list
//! responses, rendering of nested response fields, and command execution.
//!
//! # Modules
//!
//! - `actions`: Handlers executing each CLI command
//! - `cli`: Dispatch of parsed commands to handlers
//! - `commands`: CLI command parsing
//! - `configuration`: API key and base URL resolution
//! - `context`: Execution context shared by API-backed commands
//! - `error_utils`: Classification and reporting of failures
//! - `fields`: Field path resolution and value rendering
//! - `format`: Table, JSON and CSV output
//! - `http_utils`: HTTP transport shared by all requests
//! - `model`: Request payloads and list query parameters
//! - `pagertree`: PagerTree API client
//! - `pagination`: Normalized list pages
//! - `resolution_utils`: Alert alias lookups

pub mod actions;
pub mod cli;
pub mod commands;
pub mod configuration;
pub mod context;
pub mod error;
pub mod error_utils;
pub mod exit_codes;
pub mod fields;
pub mod format;
pub mod http_utils;
pub mod model;
pub mod pagertree;
pub mod pagination;
pub mod resolution_utils;
