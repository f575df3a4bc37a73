//! Page state and navigation URLs

use super::types::{LinkKind, PageLink, PageSource};
use crate::error::{Error, Result};
use crate::query::QueryParams;
use serde::Serialize;
use tracing::{debug, warn};

/// Query parameter rewritten by the navigation URLs
pub const OFFSET_PARAM: &str = "offset";

/// Pagination state for one listing response
///
/// Built fresh for every response and never mutated. `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    offset: u64,
    limit: u64,
    total: u64,
    page: u64,
    num_pages: u64,
    query: QueryParams,
}

impl Pager {
    /// Build a pager from either listing shape
    pub fn new(source: PageSource, query: &QueryParams) -> Result<Self> {
        match source {
            PageSource::OffsetLimit {
                offset,
                limit,
                total,
            } => Self::offset_limit(offset, limit, total, query),
            PageSource::Links {
                previous,
                next,
                count,
                fallback_limit,
            } => Self::from_links(
                previous.as_deref(),
                next.as_deref(),
                count,
                fallback_limit,
                query,
            ),
        }
    }

    /// Build a pager from explicit offset, limit and total
    pub fn offset_limit(offset: u64, limit: u64, total: u64, query: &QueryParams) -> Result<Self> {
        if limit == 0 {
            return Err(Error::ZeroLimit);
        }
        // offset + limit must fit so the navigation queries cannot overflow
        let end = offset.checked_add(limit).ok_or_else(|| {
            Error::invalid_field("offset", format!("{offset} plus limit {limit} overflows"))
        })?;
        if offset % limit != 0 {
            warn!(offset, limit, "Offset is not a multiple of the page size");
        }

        let pager = Self {
            offset,
            limit,
            total,
            page: end / limit,
            num_pages: total.div_ceil(limit),
            query: query.clone(),
        };
        debug!(offset, limit, total, page = pager.page, "Built offset/limit pager");
        Ok(pager)
    }

    /// Build a pager from adjacent-page links and a total count
    ///
    /// Limit and offset are read from `next` when present, else from
    /// `previous`, and the recovered offset is then moved back one page
    /// whichever link it came from. With no links at all the response is
    /// the only page and `fallback_limit` is used as its size.
    pub fn from_links(
        previous: Option<&str>,
        next: Option<&str>,
        count: u64,
        fallback_limit: u64,
        query: &QueryParams,
    ) -> Result<Self> {
        let previous = previous.filter(|url| !url.trim().is_empty());
        let next = next.filter(|url| !url.trim().is_empty());

        let link = next
            .map(|url| (LinkKind::Next, url))
            .or_else(|| previous.map(|url| (LinkKind::Previous, url)));

        let (offset, limit, page) = match link {
            Some((kind, url)) => {
                let link = PageLink::parse(kind, url)?;
                if link.limit == 0 {
                    return Err(Error::ZeroLimit);
                }
                debug!(%kind, offset = link.offset, limit = link.limit, "Recovered page size from link");
                let page = (link.end() / link.limit).saturating_sub(1);
                (link.offset.saturating_sub(link.limit), link.limit, page)
            }
            None => {
                if fallback_limit == 0 {
                    return Err(Error::ZeroLimit);
                }
                debug!(fallback_limit, "No page links, treating response as the only page");
                (0, fallback_limit, 1)
            }
        };

        let pager = Self {
            offset,
            limit,
            total: count,
            page,
            num_pages: count.div_ceil(limit),
            query: query.clone(),
        };
        debug!(offset, limit, count, page, "Built link pager");
        Ok(pager)
    }

    /// Index of the first item on the current page
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Page size
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Total items across all pages
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Current page number, 1-based
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Number of pages
    pub fn num_pages(&self) -> u64 {
        self.num_pages
    }

    /// Query parameters the navigation URLs are built from
    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    pub fn has_first(&self) -> bool {
        self.offset != 0
    }

    pub fn has_previous(&self) -> bool {
        self.offset != 0
    }

    pub fn has_next(&self) -> bool {
        self.offset + self.limit < self.total
    }

    pub fn has_last(&self) -> bool {
        self.offset + self.limit < self.total
    }

    pub fn first_page(&self) -> u64 {
        0
    }

    /// Offset of the previous page; clamps at 0 on the first page
    pub fn previous_page(&self) -> u64 {
        self.offset.saturating_sub(self.limit)
    }

    pub fn next_page(&self) -> u64 {
        self.offset + self.limit
    }

    /// Offset of the last page; 0 for an empty listing
    pub fn last_page(&self) -> u64 {
        self.num_pages.saturating_sub(1) * self.limit
    }

    pub fn first_page_url(&self) -> String {
        self.page_url(self.first_page())
    }

    pub fn previous_page_url(&self) -> String {
        self.page_url(self.previous_page())
    }

    pub fn next_page_url(&self) -> String {
        self.page_url(self.next_page())
    }

    pub fn last_page_url(&self) -> String {
        self.page_url(self.last_page())
    }

    /// Current query with only `offset` replaced
    fn page_url(&self, offset: u64) -> String {
        self.query.with(OFFSET_PARAM, offset).to_query_string()
    }

    /// Snapshot of the state and the URLs that are currently navigable
    pub fn summary(&self) -> PageSummary {
        PageSummary {
            offset: self.offset,
            limit: self.limit,
            total: self.total,
            page: self.page,
            num_pages: self.num_pages,
            first_url: self.has_first().then(|| self.first_page_url()),
            previous_url: self.has_previous().then(|| self.previous_page_url()),
            next_url: self.has_next().then(|| self.next_page_url()),
            last_url: self.has_last().then(|| self.last_page_url()),
        }
    }
}

/// Serializable view of a [`Pager`] for templates and the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub offset: u64,
    pub limit: u64,
    pub total: u64,
    pub page: u64,
    pub num_pages: u64,
    pub first_url: Option<String>,
    pub previous_url: Option<String>,
    pub next_url: Option<String>,
    pub last_url: Option<String>,
}
