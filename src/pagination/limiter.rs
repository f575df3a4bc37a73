//! Page-size selector

use crate::config::PagingConfig;
use crate::query::QueryParams;
use serde::Serialize;

use super::pager::OFFSET_PARAM;

/// Query parameter rewritten by the page-size URLs
pub const LIMIT_PARAM: &str = "limit";

/// Label shown next to the page-size selector
pub const LIMITER_NAME: &str = "Limit";

/// Page-size selector state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limiter {
    current: u64,
    values: Vec<u64>,
    reset_offset: bool,
    query: QueryParams,
}

impl Limiter {
    /// Create a limiter with the default catalog (10, 25, 50, 100)
    pub fn new(current: u64, query: &QueryParams) -> Self {
        Self::with_config(current, query, &PagingConfig::default())
    }

    /// Create a limiter using the configured catalog and offset policy
    pub fn with_config(current: u64, query: &QueryParams, config: &PagingConfig) -> Self {
        Self {
            current,
            values: config.page_sizes.clone(),
            reset_offset: config.reset_offset_on_limit_change,
            query: query.clone(),
        }
    }

    pub fn name(&self) -> &'static str {
        LIMITER_NAME
    }

    /// Active page size
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Selectable page sizes
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    pub fn is_current(&self, value: u64) -> bool {
        self.current == value
    }

    /// URL switching to page size `value`
    ///
    /// Only `limit` is overwritten; `offset` is carried over as-is unless
    /// offset reset is enabled, in which case it goes back to 0.
    pub fn get_url(&self, value: u64) -> String {
        let mut params = self.query.with(LIMIT_PARAM, value);
        if self.reset_offset {
            params.insert(OFFSET_PARAM, 0);
        }
        params.to_query_string()
    }

    /// All selectable sizes with their URLs
    pub fn options(&self) -> Vec<LimitOption> {
        self.values
            .iter()
            .map(|&value| LimitOption {
                value,
                url: self.get_url(value),
                selected: self.is_current(value),
            })
            .collect()
    }
}

/// One entry of the page-size selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LimitOption {
    pub value: u64,
    pub url: String,
    pub selected: bool,
}
