//! # nsot-pager
//!
//! Pagination state for the NSoT (network source-of-truth) web UI.
//!
//! ## Features
//!
//! - **Two listing shapes**: offset/limit/total (API v1) and previous/next links (API v2)
//! - **Navigation URLs**: first/previous/next/last, rewriting only `offset`
//! - **Page-size selector**: catalog of limits with URLs rewriting only `limit`
//! - **Request defaults**: `limit=10&offset=0` merged with the current query
//! - **Flag decoding**: `?include_ips`, `?root_only=no` and friends
//!
//! ## Quick Start
//!
//! ```rust
//! use nsot_pager::pagination::{PageSource, Pager};
//! use nsot_pager::query::QueryParams;
//!
//! let query = QueryParams::parse("?include_ips=true&limit=10&offset=20");
//! let pager = Pager::new(PageSource::offset_limit(20, 10, 45), &query)?;
//!
//! assert_eq!(pager.num_pages(), 5);
//! assert!(pager.has_next());
//! assert_eq!(pager.next_page_url(), "?include_ips=true&limit=10&offset=30");
//! # Ok::<(), nsot_pager::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │           Listing response (JSON)  +  current URL            │
//! └──────────────────────────────┬───────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴──────────┬────────────────────┐
//! │    Query     │        Pagination        │       Config       │
//! ├──────────────┼──────────────────────────┼────────────────────┤
//! │ QueryParams  │ PageSource (v1 | v2)     │ default limit      │
//! │ qp_bool      │ Pager / Limiter          │ page-size catalog  │
//! │              │ pager_params             │ offset reset       │
//! └──────────────┴──────────────────────────┴────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Paging configuration
pub mod config;

/// Query-string parsing, rewriting and flag decoding
pub mod query;

/// Page state, navigation URLs and page-size selection
pub mod pagination;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::PagingConfig;
pub use error::{Error, Result};
pub use pagination::{pager_params, Limiter, PageSource, Pager, Paginator};
pub use query::{qp_bool, QueryParams};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
