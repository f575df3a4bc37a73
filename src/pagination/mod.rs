//! Pagination module
//!
//! Supports: offset/limit listings (API v1) and previous/next link listings (API v2)
//!
//! # Overview
//!
//! A [`Pager`] is built once per listing response from a [`PageSource`] and
//! the current URL's query parameters. It answers "is there a next page?"
//! and hands out the first/previous/next/last URLs, each being the current
//! query with `offset` replaced. A [`Limiter`] does the same for `limit`.

mod limiter;
mod pager;
mod paginator;
mod params;
mod types;

pub use limiter::{LimitOption, Limiter, LIMITER_NAME, LIMIT_PARAM};
pub use pager::{PageSummary, Pager, OFFSET_PARAM};
pub use paginator::{items, Paginator};
pub use params::{pager_params, pager_params_with};
pub use types::{LinkKind, PageLink, PageSource};

#[cfg(test)]
mod tests;
