//! Pager and limiter pair for a listing response

use super::limiter::Limiter;
use super::pager::Pager;
use super::types::PageSource;
use crate::config::PagingConfig;
use crate::error::Result;
use crate::query::QueryParams;
use crate::types::ApiVersion;
use serde_json::Value;

/// Everything a listing view binds to: navigation plus page-size selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    pub pager: Pager,
    pub limiter: Limiter,
}

impl Paginator {
    /// Build from a page description; the limiter starts at the pager's limit
    ///
    /// The item count of the page is deliberately not used as the limit: a
    /// short last page would otherwise select a size outside the catalog.
    pub fn new(source: PageSource, query: &QueryParams, config: &PagingConfig) -> Result<Self> {
        let pager = Pager::new(source, query)?;
        let limiter = Limiter::with_config(pager.limit(), query, config);
        Ok(Self { pager, limiter })
    }

    /// Build straight from a listing response body
    pub fn from_response(
        version: ApiVersion,
        body: &Value,
        query: &QueryParams,
        config: &PagingConfig,
    ) -> Result<Self> {
        let source = PageSource::from_response(version, body, config.default_limit)?;
        Self::new(source, query, config)
    }
}

/// Items of a listing response
///
/// V2 responses keep them under `results`; V1 responses under `items_key`
/// inside `data` (e.g. `"networks"`).
pub fn items<'a>(version: ApiVersion, body: &'a Value, items_key: &str) -> Option<&'a Vec<Value>> {
    match version {
        ApiVersion::V1 => body
            .get("data")
            .and_then(|data| data.get(items_key))
            .or_else(|| body.get(items_key))
            .and_then(Value::as_array),
        ApiVersion::V2 => body.get("results").and_then(Value::as_array),
    }
}
