//! Tests for pagination module

use super::*;
use crate::config::PagingConfig;
use crate::error::Error;
use crate::query::QueryParams;
use crate::types::ApiVersion;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

fn query(qs: &str) -> QueryParams {
    QueryParams::parse(qs)
}

// ============================================================================
// Offset/Limit Pager Tests
// ============================================================================

#[test]
fn test_offset_limit_scenario() {
    let q = query("?include_ips=true&limit=10&offset=20");
    let pager = Pager::offset_limit(20, 10, 45, &q).unwrap();

    assert_eq!(pager.page(), 3);
    assert_eq!(pager.num_pages(), 5);
    assert!(pager.has_next());
    assert!(pager.has_previous());

    let next = QueryParams::parse(&pager.next_page_url());
    assert_eq!(next.get("offset"), Some("30"));
    assert_eq!(next.get("limit"), Some("10"));
    assert_eq!(next.get("include_ips"), Some("true"));
    assert_eq!(next.len(), 3);
    assert_eq!(pager.next_page_url(), "?include_ips=true&limit=10&offset=30");
}

#[test]
fn test_offset_limit_navigation_offsets() {
    let pager = Pager::offset_limit(20, 10, 45, &QueryParams::new()).unwrap();
    assert_eq!(pager.first_page(), 0);
    assert_eq!(pager.previous_page(), 10);
    assert_eq!(pager.next_page(), 30);
    assert_eq!(pager.last_page(), 40);

    assert_eq!(pager.first_page_url(), "?offset=0");
    assert_eq!(pager.previous_page_url(), "?offset=10");
    assert_eq!(pager.next_page_url(), "?offset=30");
    assert_eq!(pager.last_page_url(), "?offset=40");
}

#[test]
fn test_first_page_has_no_previous() {
    let pager = Pager::offset_limit(0, 10, 45, &QueryParams::new()).unwrap();
    assert_eq!(pager.page(), 1);
    assert!(!pager.has_first());
    assert!(!pager.has_previous());
    assert!(pager.has_next());
    assert!(pager.has_last());
    assert_eq!(pager.previous_page(), 0);
}

#[test]
fn test_last_page_has_no_next() {
    let pager = Pager::offset_limit(40, 10, 45, &QueryParams::new()).unwrap();
    assert_eq!(pager.page(), 5);
    assert_eq!(pager.last_page(), pager.offset());
    assert!(!pager.has_next());
    assert!(!pager.has_last());
    assert!(pager.has_previous());
}

#[test]
fn test_empty_listing() {
    let pager = Pager::offset_limit(0, 10, 0, &QueryParams::new()).unwrap();
    assert_eq!(pager.num_pages(), 0);
    assert_eq!(pager.last_page(), 0);
    assert!(!pager.has_next());
    assert!(!pager.has_previous());
}

#[test]
fn test_offset_overflow_rejected() {
    let err = Pager::offset_limit(u64::MAX - 5, 10, u64::MAX, &QueryParams::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidField { ref field, .. } if field == "offset"));
}

#[test]
fn test_largest_representable_page() {
    let offset = u64::MAX - 10;
    let pager = Pager::offset_limit(offset, 10, u64::MAX, &QueryParams::new()).unwrap();
    assert_eq!(pager.next_page(), u64::MAX);
    assert!(!pager.has_next());
}

#[test]
fn test_zero_limit_rejected() {
    let err = Pager::offset_limit(0, 0, 45, &QueryParams::new()).unwrap_err();
    assert!(matches!(err, Error::ZeroLimit));
}

#[test]
fn test_navigation_properties_hold() {
    for limit in [1_u64, 10, 25] {
        for total in [0_u64, 5, 45, 100] {
            for step in 0..5 {
                let offset = step * limit;
                let pager = Pager::offset_limit(offset, limit, total, &QueryParams::new()).unwrap();

                assert_eq!(pager.has_next(), offset + limit < total);
                assert_eq!(pager.has_last(), pager.has_next());
                assert_eq!(pager.has_previous(), offset != 0);
                assert_eq!(pager.has_first(), pager.has_previous());
                assert_eq!(pager.num_pages(), total.div_ceil(limit));
                if total > 0 {
                    assert_eq!(pager.last_page(), (total.div_ceil(limit) - 1) * limit);
                }

                let next = QueryParams::parse(&pager.next_page_url());
                assert_eq!(next.get_u64("offset").unwrap(), Some(offset + limit));
            }
        }
    }
}

#[test]
fn test_urls_preserve_unrelated_params() {
    let q = query("?include_ips=true&limit=25&offset=50&query=role%3Dbr&state=allocated");
    let pager = Pager::offset_limit(50, 25, 200, &q).unwrap();

    for url in [
        pager.first_page_url(),
        pager.previous_page_url(),
        pager.next_page_url(),
        pager.last_page_url(),
    ] {
        let params = QueryParams::parse(&url);
        assert_eq!(params.len(), q.len());
        for (key, value) in q.iter().filter(|(k, _)| *k != "offset") {
            assert_eq!(params.get(key), Some(value), "{key} changed in {url}");
        }
    }
}

#[test]
fn test_url_adds_offset_when_absent() {
    let pager = Pager::offset_limit(0, 10, 45, &query("?site_id=1")).unwrap();
    assert_eq!(pager.next_page_url(), "?offset=10&site_id=1");
}

#[test]
fn test_summary_first_page() {
    let pager = Pager::offset_limit(0, 10, 45, &query("?limit=10")).unwrap();
    assert_eq!(
        pager.summary(),
        PageSummary {
            offset: 0,
            limit: 10,
            total: 45,
            page: 1,
            num_pages: 5,
            first_url: None,
            previous_url: None,
            next_url: Some("?limit=10&offset=10".to_string()),
            last_url: Some("?limit=10&offset=40".to_string()),
        }
    );
}

// ============================================================================
// Link Pager Tests
// ============================================================================

#[test]
fn test_links_next_only_steps_back_one_page() {
    let pager =
        Pager::from_links(None, Some("?limit=10&offset=20"), 45, 10, &QueryParams::new()).unwrap();
    assert_eq!(pager.offset(), 10);
    assert_eq!(pager.limit(), 10);
    assert_eq!(pager.page(), 2);
    assert_eq!(pager.num_pages(), 5);
    assert!(pager.has_previous());
    assert!(pager.has_next());
    assert_eq!(pager.next_page(), 20);
}

#[test]
fn test_links_absolute_next_url() {
    let pager = Pager::from_links(
        None,
        Some("http://localhost:8990/api/sites/1/networks/?limit=25&offset=25"),
        60,
        10,
        &QueryParams::new(),
    )
    .unwrap();
    assert_eq!(pager.offset(), 0);
    assert_eq!(pager.limit(), 25);
    assert_eq!(pager.page(), 1);
    assert_eq!(pager.num_pages(), 3);
    assert!(!pager.has_previous());
}

#[test]
fn test_links_next_preferred_over_previous() {
    let pager = Pager::from_links(
        Some("?limit=10"),
        Some("?limit=10&offset=20"),
        45,
        10,
        &QueryParams::new(),
    )
    .unwrap();
    assert_eq!(pager.offset(), 10);
    assert_eq!(pager.page(), 2);
}

#[test]
fn test_links_previous_only_steps_back_one_page() {
    let pager = Pager::from_links(
        Some("http://localhost/api/sites/1/networks/?limit=10&offset=20"),
        None,
        40,
        10,
        &QueryParams::new(),
    )
    .unwrap();
    assert_eq!(pager.offset(), 10);
    assert_eq!(pager.page(), 2);
    assert_eq!(pager.num_pages(), 4);
    assert!(pager.has_next());
    assert!(pager.has_previous());
}

#[test]
fn test_links_previous_same_rule_as_next() {
    let q = QueryParams::new();
    let from_previous = Pager::from_links(Some("?limit=10&offset=10"), None, 25, 10, &q).unwrap();
    let from_next = Pager::from_links(None, Some("?limit=10&offset=10"), 25, 10, &q).unwrap();

    assert_eq!(from_previous.offset(), 0);
    assert_eq!(from_previous.page(), 1);
    assert_eq!(from_previous, from_next);
}

#[test]
fn test_links_previous_without_offset_clamps() {
    let pager = Pager::from_links(Some("?limit=10"), None, 15, 10, &QueryParams::new()).unwrap();
    assert_eq!(pager.offset(), 0);
    assert_eq!(pager.page(), 0);
    assert_eq!(pager.previous_page(), 0);
}

#[test]
fn test_links_offset_overflow_rejected() {
    let err = Pager::from_links(
        Some("?limit=10&offset=18446744073709551615"),
        None,
        45,
        10,
        &QueryParams::new(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidPageLink { .. }), "{err}");
}

#[test]
fn test_links_none_uses_fallback() {
    let pager = Pager::from_links(None, None, 7, 25, &QueryParams::new()).unwrap();
    assert_eq!(pager.offset(), 0);
    assert_eq!(pager.limit(), 25);
    assert_eq!(pager.page(), 1);
    assert_eq!(pager.num_pages(), 1);
    assert!(!pager.has_next());
    assert!(!pager.has_previous());
}

#[test]
fn test_links_empty_strings_are_absent() {
    let pager = Pager::from_links(Some(""), Some("  "), 3, 10, &QueryParams::new()).unwrap();
    assert_eq!(pager.limit(), 10);
    assert_eq!(pager.page(), 1);
}

#[test]
fn test_links_zero_fallback_rejected() {
    let err = Pager::from_links(None, None, 7, 0, &QueryParams::new()).unwrap_err();
    assert!(matches!(err, Error::ZeroLimit));
}

#[test]
fn test_links_zero_limit_rejected() {
    let err =
        Pager::from_links(None, Some("?limit=0&offset=0"), 7, 10, &QueryParams::new()).unwrap_err();
    assert!(matches!(err, Error::ZeroLimit));
}

#[test_case("?offset=20" ; "missing limit")]
#[test_case("?limit=ten&offset=20" ; "non numeric limit")]
#[test_case("?limit=10&offset=-10" ; "negative offset")]
fn test_links_invalid(next: &str) {
    let err = Pager::from_links(None, Some(next), 45, 10, &QueryParams::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidPageLink { .. }), "{err}");
}

#[test]
fn test_links_urls_use_current_query() {
    let q = query("?include_ips&limit=10&offset=10");
    let pager = Pager::from_links(None, Some("/api/networks/?limit=10&offset=20"), 45, 10, &q)
        .unwrap();
    assert_eq!(pager.next_page_url(), "?include_ips=&limit=10&offset=20");
    assert_eq!(pager.previous_page_url(), "?include_ips=&limit=10&offset=0");
}

#[test]
fn test_new_dispatches_on_source() {
    let q = QueryParams::new();
    let a = Pager::new(PageSource::offset_limit(10, 10, 45), &q).unwrap();
    let b = Pager::new(
        PageSource::links(None, Some("?limit=10&offset=20".to_string()), 45),
        &q,
    )
    .unwrap();
    assert_eq!(a, b);
}

// ============================================================================
// PageLink / PageSource Tests
// ============================================================================

#[test]
fn test_page_link_parse() {
    let link = PageLink::parse(LinkKind::Next, "?limit=50&offset=100&site_id=1").unwrap();
    assert_eq!(
        link,
        PageLink {
            kind: LinkKind::Next,
            limit: 50,
            offset: 100
        }
    );
}

#[test]
fn test_page_link_error_names_link() {
    let err = PageLink::parse(LinkKind::Previous, "?offset=1").unwrap_err();
    assert!(err.to_string().starts_with("Invalid previous link"));
}

#[test]
fn test_page_source_links_drops_empty() {
    let source = PageSource::links(Some(String::new()), None, 3).with_fallback_limit(50);
    assert_eq!(
        source,
        PageSource::Links {
            previous: None,
            next: None,
            count: 3,
            fallback_limit: 50
        }
    );
    assert_eq!(source.total(), 3);
}

#[test]
fn test_page_source_fallback_ignored_for_offset_limit() {
    let source = PageSource::offset_limit(0, 10, 5).with_fallback_limit(50);
    assert_eq!(source, PageSource::offset_limit(0, 10, 5));
}

#[test]
fn test_page_source_deserialize() {
    let source: PageSource =
        serde_json::from_value(json!({"type": "offset_limit", "offset": 0, "limit": 10, "total": 3}))
            .unwrap();
    assert_eq!(source, PageSource::offset_limit(0, 10, 3));
}

#[test]
fn test_from_response_v1() {
    let body = json!({
        "status": "ok",
        "data": {"offset": 20, "limit": 10, "total": 45, "networks": []}
    });
    let source = PageSource::from_response(ApiVersion::V1, &body, 10).unwrap();
    assert_eq!(source, PageSource::offset_limit(20, 10, 45));
}

#[test]
fn test_from_response_v1_top_level_and_strings() {
    let body = json!({"offset": "0", "limit": "25", "total": 3});
    let source = PageSource::from_response(ApiVersion::V1, &body, 10).unwrap();
    assert_eq!(source, PageSource::offset_limit(0, 25, 3));
}

#[test]
fn test_from_response_v1_missing_total() {
    let body = json!({"data": {"offset": 0, "limit": 10}});
    let err = PageSource::from_response(ApiVersion::V1, &body, 10).unwrap_err();
    assert!(matches!(err, Error::MissingField { ref field } if field == "total"));
}

#[test]
fn test_from_response_v1_negative_limit() {
    let body = json!({"data": {"offset": 0, "limit": -1, "total": 5}});
    let err = PageSource::from_response(ApiVersion::V1, &body, 10).unwrap_err();
    assert!(matches!(err, Error::InvalidField { .. }));
}

#[test]
fn test_from_response_v2() {
    let body = json!({
        "count": 45,
        "next": "http://localhost:8990/api/sites/1/networks/?limit=10&offset=20",
        "previous": null,
        "results": []
    });
    let source = PageSource::from_response(ApiVersion::V2, &body, 25).unwrap();
    assert_eq!(
        source,
        PageSource::Links {
            previous: None,
            next: Some("http://localhost:8990/api/sites/1/networks/?limit=10&offset=20".to_string()),
            count: 45,
            fallback_limit: 25
        }
    );
}

#[test]
fn test_from_response_v2_bad_link_type() {
    let body = json!({"count": 1, "next": 5});
    let err = PageSource::from_response(ApiVersion::V2, &body, 10).unwrap_err();
    assert!(matches!(err, Error::InvalidField { .. }));
}

#[test]
fn test_from_response_v2_missing_count() {
    let body = json!({"next": null, "previous": null, "results": []});
    let err = PageSource::from_response(ApiVersion::V2, &body, 10).unwrap_err();
    assert!(matches!(err, Error::MissingField { .. }));
}

// ============================================================================
// Limiter Tests
// ============================================================================

#[test]
fn test_limiter_defaults() {
    let limiter = Limiter::new(10, &QueryParams::new());
    assert_eq!(limiter.name(), "Limit");
    assert_eq!(limiter.current(), 10);
    assert_eq!(limiter.values(), &[10, 25, 50, 100]);
    assert!(limiter.is_current(10));
    assert!(!limiter.is_current(25));
}

#[test]
fn test_limiter_keeps_offset() {
    let q = query("?include_ips=true&limit=10&offset=20");
    let limiter = Limiter::new(10, &q);
    assert_eq!(
        limiter.get_url(25),
        "?include_ips=true&limit=25&offset=20"
    );
}

#[test]
fn test_limiter_resets_offset_when_configured() {
    let q = query("?include_ips=true&limit=10&offset=20");
    let config = PagingConfig::default().with_offset_reset(true);
    let limiter = Limiter::with_config(10, &q, &config);
    assert_eq!(limiter.get_url(25), "?include_ips=true&limit=25&offset=0");
}

#[test]
fn test_limiter_adds_limit_when_absent() {
    let limiter = Limiter::new(10, &query("?site_id=1"));
    assert_eq!(limiter.get_url(50), "?limit=50&site_id=1");
}

#[test]
fn test_limiter_options() {
    let config = PagingConfig::default().with_page_sizes([25, 50]);
    let limiter = Limiter::with_config(25, &QueryParams::new(), &config);
    assert_eq!(
        limiter.options(),
        vec![
            LimitOption {
                value: 25,
                url: "?limit=25".to_string(),
                selected: true
            },
            LimitOption {
                value: 50,
                url: "?limit=50".to_string(),
                selected: false
            },
        ]
    );
}

// ============================================================================
// Request Parameter Tests
// ============================================================================

#[test]
fn test_pager_params_defaults() {
    let params = pager_params(&QueryParams::new());
    assert_eq!(params.to_query_string(), "?limit=10&offset=0");
}

#[test]
fn test_pager_params_overridden_by_query() {
    let params = pager_params(&query("?limit=50&site_id=1"));
    assert_eq!(params.get("limit"), Some("50"));
    assert_eq!(params.get("offset"), Some("0"));
    assert_eq!(params.get("site_id"), Some("1"));
}

#[test]
fn test_pager_params_no_coercion() {
    let params = pager_params(&query("?offset=abc&include_ips"));
    assert_eq!(params.get("offset"), Some("abc"));
    assert_eq!(params.get("include_ips"), Some(""));
}

#[test]
fn test_pager_params_with_config() {
    let config = PagingConfig::default().with_default_limit(25);
    let params = pager_params_with(&config, &QueryParams::new());
    assert_eq!(params.get("limit"), Some("25"));
}

// ============================================================================
// Paginator Tests
// ============================================================================

#[test]
fn test_paginator_from_v1_response() {
    let body = json!({
        "status": "ok",
        "data": {"offset": 20, "limit": 10, "total": 45, "changes": [{"id": 1}]}
    });
    let q = query("?limit=10&offset=20");
    let paginator =
        Paginator::from_response(ApiVersion::V1, &body, &q, &PagingConfig::default()).unwrap();

    assert_eq!(paginator.pager.page(), 3);
    assert_eq!(paginator.limiter.current(), 10);
    assert_eq!(paginator.limiter.get_url(50), "?limit=50&offset=20");
}

#[test]
fn test_paginator_from_v2_response() {
    let body = json!({
        "count": 45,
        "next": "/api/sites/1/devices/?limit=25&offset=50",
        "previous": "/api/sites/1/devices/?limit=25",
        "results": [{"id": 1}, {"id": 2}]
    });
    let paginator = Paginator::from_response(
        ApiVersion::V2,
        &body,
        &query("?limit=25&offset=25"),
        &PagingConfig::default(),
    )
    .unwrap();

    assert_eq!(paginator.pager.offset(), 25);
    assert_eq!(paginator.pager.page(), 2);
    assert_eq!(paginator.limiter.current(), 25);
}

#[test]
fn test_paginator_v2_single_page_uses_config_limit() {
    let body = json!({"count": 2, "next": null, "previous": null, "results": [{}, {}]});
    let config = PagingConfig::default().with_default_limit(50);
    let paginator =
        Paginator::from_response(ApiVersion::V2, &body, &QueryParams::new(), &config).unwrap();
    assert_eq!(paginator.pager.limit(), 50);
    assert_eq!(paginator.limiter.current(), 50);
    assert!(!paginator.pager.has_next());
}

#[test]
fn test_items() {
    let v1 = json!({"data": {"networks": [{"id": 1}], "total": 1}});
    assert_eq!(items(ApiVersion::V1, &v1, "networks").map(Vec::len), Some(1));
    assert!(items(ApiVersion::V1, &v1, "devices").is_none());

    let v2 = json!({"results": [{"id": 1}, {"id": 2}]});
    assert_eq!(items(ApiVersion::V2, &v2, "ignored").map(Vec::len), Some(2));
}
