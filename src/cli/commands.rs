//! CLI commands and argument parsing

use crate::types::ApiVersion;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// NSoT pagination helper
#[derive(Parser, Debug)]
#[command(name = "nsot-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Paging configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute pagination state and navigation URLs for a listing response
    Page {
        /// Current URL or query string (e.g. "?limit=10&offset=20")
        #[arg(short, long, default_value = "")]
        query: String,

        /// Listing response JSON file ("-" reads stdin)
        #[arg(short, long, default_value = "-")]
        response: PathBuf,

        /// Listing response shape (v1: offset/limit/total, v2: previous/next/count)
        #[arg(long, default_value = "v2")]
        api: ApiVersion,

        /// Key holding the items in a v1 response (e.g. "networks")
        #[arg(long)]
        items_key: Option<String>,
    },

    /// Show the parameters a listing request would be sent with
    Params {
        /// Current URL or query string
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Decode a boolean query flag
    Flag {
        /// Current URL or query string
        #[arg(short, long, default_value = "")]
        query: String,

        /// Parameter name
        #[arg(short, long)]
        key: String,

        /// Value when the parameter is absent
        #[arg(long)]
        default: bool,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one document per line)
    Json,
    /// Human-readable output
    Pretty,
}
