//! Boolean query-parameter decoding

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Values (after lower-casing) that decode as `true`.
/// The empty string is included so a bare `?include_ips` is on.
pub const TRUTHY: [&str; 5] = ["true", "yes", "on", "1", ""];

/// One path segment: `name` or `[index]`
static PATH_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^.\[\]]+)|\[(\d+)\]").expect("valid path regex"));

/// Decode a boolean flag stored at `path` inside `object`
///
/// The value is looked up with [`lookup_path`]; when absent, `default` is
/// used instead. Either way it is stringified with [`js_string`] and checked
/// against [`TRUTHY`] case-insensitively.
///
/// ```
/// use nsot_pager::query::qp_bool;
/// use serde_json::json;
///
/// assert!(qp_bool(&json!({"root_only": ""}), "root_only", false));
/// assert!(!qp_bool(&json!({"root_only": "NO"}), "root_only", true));
/// assert!(qp_bool(&json!({}), "include_ips", true));
/// ```
pub fn qp_bool(object: &Value, path: &str, default: impl Into<Value>) -> bool {
    let value = match lookup_path(object, path) {
        Some(value) => js_string(value),
        None => js_string(&default.into()),
    };
    is_truthy(&value)
}

/// Check a raw string against the truthy set
pub fn is_truthy(value: &str) -> bool {
    let value = value.to_lowercase();
    TRUTHY.contains(&value.as_str())
}

/// Resolve a dotted path (`a.b`, `a[0].b`, `a.0.b`) inside a JSON value
///
/// A key that literally equals the whole path wins over path traversal,
/// so `{"a.b": 1}` resolves `"a.b"` to `1`.
pub fn lookup_path<'a>(object: &'a Value, path: &str) -> Option<&'a Value> {
    if let Some(value) = object.as_object().and_then(|map| map.get(path)) {
        return Some(value);
    }

    let mut current = object;
    let mut matched = false;
    for cap in PATH_SEGMENT.captures_iter(path) {
        matched = true;
        let segment = cap.get(1).or_else(|| cap.get(2))?.as_str();
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    matched.then_some(current)
}

/// Stringify a JSON value the way a browser's `toString` would
pub fn js_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                match n.as_f64() {
                    Some(f) if f.is_finite() && f.fract() == 0.0 => format!("{f:.0}"),
                    Some(f) => f.to_string(),
                    None => n.to_string(),
                }
            }
        }
        // Nested nulls render as empty, like Array.prototype.join
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
