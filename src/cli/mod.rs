//! CLI module
//!
//! Command-line interface for inspecting pagination.
//!
//! # Commands
//!
//! - `page` - Pagination state and navigation URLs for a listing response
//! - `params` - Parameters a listing request would be sent with
//! - `flag` - Decode a boolean query flag

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{flag, page, params, Runner};
