//! Listing request parameters

use super::limiter::LIMIT_PARAM;
use super::pager::OFFSET_PARAM;
use crate::config::PagingConfig;
use crate::query::QueryParams;

/// Parameters for a listing request: `limit=10&offset=0`, overridden by
/// every parameter of the current URL
pub fn pager_params(query: &QueryParams) -> QueryParams {
    pager_params_with(&PagingConfig::default(), query)
}

/// Same as [`pager_params`] with configured defaults
pub fn pager_params_with(config: &PagingConfig, query: &QueryParams) -> QueryParams {
    let mut params = QueryParams::new();
    params.insert(LIMIT_PARAM, config.default_limit);
    params.insert(OFFSET_PARAM, config.default_offset);
    params.extend(query.iter());
    params
}
