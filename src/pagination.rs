//! Pagination envelope for list results.
//!
//! Page numbers are echoed back exactly as requested. Upstream operations do
//! not agree on whether the first page is 0 or 1, so each client method
//! documents its own convention and nothing here converts between them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One page of results.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Paginated<T> {
    /// Total number of results upstream reports for the query.
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub results: Vec<T>,
}

impl<T> Paginated<T> {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Paginated<U> {
        Paginated {
            total: self.total,
            page: self.page,
            limit: self.limit,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}

/// Wrap results in a pagination envelope.
///
/// `total` falls back to the number of results when upstream omitted it or
/// sent something that is not a finite, non-negative number.
pub fn paginate<T>(results: Vec<T>, total: Option<&Value>, page: u32, limit: u32) -> Paginated<T> {
    let total = total
        .and_then(finite_count)
        .unwrap_or(results.len() as u64);

    Paginated {
        total,
        page,
        limit,
        results,
    }
}

fn finite_count(value: &Value) -> Option<u64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    (number.is_finite() && number >= 0.0).then_some(number as u64)
}
