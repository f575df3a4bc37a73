//! Query-string module
//!
//! Reading and rewriting the current URL's query parameters, and decoding
//! boolean flags out of them.
//!
//! # Overview
//!
//! Every navigation URL the pager hands out is the current query string with
//! exactly one key overwritten. [`QueryParams`] is the value type those URLs
//! are built from; [`qp_bool`] decodes `?include_ips=yes` style flags.

mod flags;
mod params;

pub use flags::{is_truthy, js_string, lookup_path, qp_bool, TRUTHY};
pub use params::QueryParams;
