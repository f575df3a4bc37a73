//! Pagination types
//!
//! The two listing shapes served by the NSoT API, and the page links used by
//! the cursor-style shape.

use crate::config::DEFAULT_LIMIT;
use crate::error::{Error, Result};
use crate::query::QueryParams;
use crate::types::{ApiVersion, OptionStringExt};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// Describes the page a listing response covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageSource {
    /// Explicit offset/limit/total fields (API v1)
    OffsetLimit {
        /// Index of the first item on this page
        offset: u64,
        /// Page size
        limit: u64,
        /// Total items across all pages
        total: u64,
    },

    /// Links to the adjacent pages plus a total count (API v2)
    Links {
        /// URL of the previous page, if any
        previous: Option<String>,
        /// URL of the next page, if any
        next: Option<String>,
        /// Total items across all pages
        count: u64,
        /// Page size to assume when there are no links at all
        fallback_limit: u64,
    },
}

impl PageSource {
    /// Create an offset/limit source
    pub fn offset_limit(offset: u64, limit: u64, total: u64) -> Self {
        Self::OffsetLimit {
            offset,
            limit,
            total,
        }
    }

    /// Create a link source using the default fallback limit
    pub fn links(previous: Option<String>, next: Option<String>, count: u64) -> Self {
        Self::Links {
            previous: previous.none_if_empty(),
            next: next.none_if_empty(),
            count,
            fallback_limit: DEFAULT_LIMIT,
        }
    }

    /// Override the fallback limit of a link source (no-op for offset/limit)
    #[must_use]
    pub fn with_fallback_limit(mut self, limit: u64) -> Self {
        if let Self::Links { fallback_limit, .. } = &mut self {
            *fallback_limit = limit;
        }
        self
    }

    /// Total items across all pages
    pub fn total(&self) -> u64 {
        match self {
            Self::OffsetLimit { total, .. } => *total,
            Self::Links { count, .. } => *count,
        }
    }

    /// Read the page description out of a listing response
    ///
    /// V1 responses carry the fields under `data` (top level is accepted
    /// too); V2 responses carry `previous`, `next` and `count` at top level.
    pub fn from_response(version: ApiVersion, body: &Value, fallback_limit: u64) -> Result<Self> {
        let source = match version {
            ApiVersion::V1 => {
                let data = body.get("data").filter(|d| d.is_object()).unwrap_or(body);
                Self::offset_limit(
                    read_u64(data, "offset")?,
                    read_u64(data, "limit")?,
                    read_u64(data, "total")?,
                )
            }
            ApiVersion::V2 => Self::links(
                read_link(body, "previous")?,
                read_link(body, "next")?,
                read_u64(body, "count")?,
            )
            .with_fallback_limit(fallback_limit),
        };
        debug!(%version, ?source, "Read page source from listing response");
        Ok(source)
    }
}

/// Read a non-negative integer field; integer strings are accepted
fn read_u64(body: &Value, field: &str) -> Result<u64> {
    match body.get(field) {
        None | Some(Value::Null) => Err(Error::missing_field(field)),
        Some(Value::Number(n)) => n
            .as_u64()
            .ok_or_else(|| Error::invalid_field(field, format!("{n} is not a non-negative integer"))),
        Some(Value::String(s)) => s
            .trim()
            .parse::<u64>()
            .map_err(|e| Error::invalid_field(field, format!("'{s}': {e}"))),
        Some(other) => Err(Error::invalid_field(
            field,
            format!("expected an integer, got {other}"),
        )),
    }
}

/// Read an optional link field; `null` and empty strings mean "no link"
fn read_link(body: &Value, field: &str) -> Result<Option<String>> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(s.clone().none_if_empty()),
        Some(other) => Err(Error::invalid_field(
            field,
            format!("expected a URL string, got {other}"),
        )),
    }
}

/// Which adjacent-page link a page description was recovered from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// Link to the page before the current one
    Previous,
    /// Link to the page after the current one
    Next,
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Previous => write!(f, "previous"),
            Self::Next => write!(f, "next"),
        }
    }
}

/// Limit and offset read from an adjacent-page link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    /// Which link this came from
    pub kind: LinkKind,
    /// `limit` parameter of the link
    pub limit: u64,
    /// `offset` parameter of the link (0 when the link omits it)
    pub offset: u64,
}

impl PageLink {
    /// Parse the `limit` and `offset` parameters out of a link URL
    pub fn parse(kind: LinkKind, url: &str) -> Result<Self> {
        let params = QueryParams::parse(url);
        let invalid = |message: String| Error::page_link(kind.to_string(), url, message);

        let limit = params
            .get_u64("limit")
            .map_err(|e| invalid(e.to_string()))?
            .ok_or_else(|| invalid("link has no limit parameter".to_string()))?;
        let offset = params
            .get_u64("offset")
            .map_err(|e| invalid(e.to_string()))?
            .unwrap_or(0);
        if offset.checked_add(limit).is_none() {
            return Err(invalid(format!("offset {offset} plus limit {limit} overflows")));
        }

        Ok(Self {
            kind,
            limit,
            offset,
        })
    }

    /// Offset just past the page the link points at
    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.limit)
    }
}
