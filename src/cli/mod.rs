//! CLI module
//!
//! Command-line interface for paging through feeds.
//!
//! # Commands
//!
//! - `check` - Test connection to the feed endpoint
//! - `read` - Page through the feed and print item URLs
//! - `validate` - Validate the feed definition

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::{Runner, TraceObserver};
