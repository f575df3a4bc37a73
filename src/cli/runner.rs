//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::PagingConfig;
use crate::error::{Result, ResultExt};
use crate::pagination::{items, pager_params_with, Paginator};
use crate::query::QueryParams;
use crate::types::ApiVersion;
use serde_json::{json, Value};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        let output = match &self.cli.command {
            Commands::Page {
                query,
                response,
                api,
                items_key,
            } => {
                let body = read_response(response)?;
                page(&config, query, &body, *api, items_key.as_deref())?
            }
            Commands::Params { query } => params(&config, query),
            Commands::Flag {
                query,
                key,
                default,
            } => flag(query, key, *default),
        };

        self.output_message(&output);
        Ok(())
    }

    /// Load paging config, falling back to defaults
    fn load_config(&self) -> Result<PagingConfig> {
        match &self.cli.config {
            Some(path) => {
                debug!("Loading paging config from {}", path.display());
                PagingConfig::load(path)
            }
            None => Ok(PagingConfig::default()),
        }
    }

    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

/// Read a listing response from a file, or stdin for "-"
fn read_response(path: &Path) -> Result<Value> {
    let content = if path == Path::new("-") {
        io::read_to_string(io::stdin()).context("Failed to read response from stdin")?
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read response {}", path.display()))?
    };
    Ok(serde_json::from_str(&content)?)
}

/// Pagination state, navigation URLs and page-size options for a response
pub fn page(
    config: &PagingConfig,
    query: &str,
    body: &Value,
    api: ApiVersion,
    items_key: Option<&str>,
) -> Result<Value> {
    let current = QueryParams::parse(query);
    let paginator = Paginator::from_response(api, body, &current, config)?;
    let item_count = items(api, body, items_key.unwrap_or("results")).map(Vec::len);

    Ok(json!({
        "type": "PAGE",
        "api": api,
        "items": item_count,
        "pager": paginator.pager.summary(),
        "limiter": {
            "name": paginator.limiter.name(),
            "current": paginator.limiter.current(),
            "options": paginator.limiter.options(),
        }
    }))
}

/// Request parameters for the listing at `query`
pub fn params(config: &PagingConfig, query: &str) -> Value {
    let merged = pager_params_with(config, &QueryParams::parse(query));
    let map: serde_json::Map<String, Value> = merged
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect();

    json!({
        "type": "PARAMS",
        "params": map,
        "query": merged.to_query_string(),
    })
}

/// Boolean value of `key` in `query`
pub fn flag(query: &str, key: &str, default: bool) -> Value {
    let value = QueryParams::parse(query).flag(key, default);
    json!({
        "type": "FLAG",
        "key": key,
        "value": value,
    })
}
