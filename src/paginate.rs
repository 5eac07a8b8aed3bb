//! Pagination normalization for list-returning tools.
//!
//! Uniform offset/count semantics across every paged tool: missing values
//! take defaults, out-of-range values are clamped rather than rejected, and
//! the normalized window is forwarded to the JADX plugin as `offset`/`limit`
//! query parameters.

use serde_json::{json, Map, Value};

use crate::validate::ValidationError;

pub const DEFAULT_PAGE_SIZE: u64 = 100;
pub const MAX_PAGE_SIZE: u64 = 10_000;
pub const MAX_OFFSET: u64 = 1_000_000;

/// Response keys the plugin uses for list payloads, probed in order.
const ITEM_KEYS: &[&str] = &[
    "items",
    "classes",
    "methods",
    "fields",
    "strings",
    "files",
    "references",
];

/// A normalized (offset, count) pair.
///
/// Invariants after `from_args`: `offset <= MAX_OFFSET`,
/// `1 <= count <= MAX_PAGE_SIZE`, so `offset + count` cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub count: u64,
}

impl PageWindow {
    /// Read `offset` and `count` out of validated call arguments.
    ///
    /// Absent parameters default to 0 and [`DEFAULT_PAGE_SIZE`]. Values are
    /// clamped into range — `count=0` becomes 1, a negative offset becomes 0,
    /// oversized values drop to the ceiling. Only a non-integer value is an
    /// error.
    pub fn from_args(args: &Map<String, Value>) -> Result<Self, ValidationError> {
        let offset = match args.get("offset") {
            None | Some(Value::Null) => 0,
            Some(v) => clamp_integer(v, "offset", 0, MAX_OFFSET)?,
        };
        let count = match args.get("count") {
            None | Some(Value::Null) => DEFAULT_PAGE_SIZE,
            Some(v) => clamp_integer(v, "count", 1, MAX_PAGE_SIZE)?,
        };
        Ok(Self { offset, count })
    }

    /// Query parameters for the JADX wire.
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("offset", self.offset.to_string()),
            ("limit", self.count.to_string()),
        ]
    }

    /// Short-page convention: a page shorter than requested means the
    /// collection is exhausted. A full page reports `true` even at an exact
    /// boundary; the next call then returns an empty terminal page.
    pub fn has_more(&self, returned: usize) -> bool {
        returned as u64 >= self.count
    }
}

fn clamp_integer(
    value: &Value,
    name: &'static str,
    min: u64,
    max: u64,
) -> Result<u64, ValidationError> {
    let n: i128 = if let Some(i) = value.as_i64() {
        i128::from(i)
    } else if let Some(u) = value.as_u64() {
        i128::from(u)
    } else {
        return Err(ValidationError::WrongType {
            param: name.to_string(),
            expected: "integer",
        });
    };
    if n < 0 {
        return Ok(min);
    }
    Ok((n as u64).clamp(min, max))
}

/// Reshape a paged backend response into the standardized page envelope.
///
/// Items are passed through untouched — fewer than `count` items is a valid
/// terminal page, never padded and never an error.
pub fn page_envelope(window: &PageWindow, backend: &Value) -> Value {
    let items = extract_items(backend);
    let returned = items.len();
    json!({
        "items": items,
        "pagination": {
            "offset": window.offset,
            "limit": window.count,
            "returned": returned,
            "has_more": window.has_more(returned),
        }
    })
}

fn extract_items(backend: &Value) -> Vec<Value> {
    if let Value::Array(items) = backend {
        return items.clone();
    }
    if let Value::Object(map) = backend {
        for key in ITEM_KEYS {
            if let Some(Value::Array(items)) = map.get(*key) {
                return items.clone();
            }
        }
    }
    Vec::new()
}
