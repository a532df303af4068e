//! Normalization of list responses into one pagination envelope.
//!
//! The upstream service reports list pages as `{data, total_count, has_more}`.
//! [`PagedResult`] hides those names so callers never special-case them, and
//! fills in `[]`, `0` and `false` for anything the server left out. The
//! `has_more` flag is passed through as reported, never computed locally.

use serde::Serialize;
use serde_json::Value;

const ITEMS_KEY: &str = "data";
const TOTAL_KEY: &str = "total_count";
const MORE_KEY: &str = "has_more";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PagedResult {
    pub data: Vec<Value>,
    pub total: u64,
    pub has_more: bool,
    pub limit: u32,
    pub offset: u32,
}

impl PagedResult {
    /// Build the envelope from a raw list response.
    ///
    /// `limit` and `offset` echo the request. A bare JSON array is accepted as
    /// the item list, with the total defaulting to the number of items.
    pub fn from_response(response: Option<Value>, limit: u32, offset: u32) -> PagedResult {
        let (data, total, has_more) = match response {
            Some(Value::Object(mut map)) => {
                let data = match map.remove(ITEMS_KEY) {
                    Some(Value::Array(items)) => items,
                    _ => Vec::new(),
                };
                let total = map.get(TOTAL_KEY).and_then(Value::as_u64).unwrap_or(0);
                let has_more = map.get(MORE_KEY).and_then(Value::as_bool).unwrap_or(false);
                (data, total, has_more)
            }
            Some(Value::Array(items)) => {
                let total = items.len() as u64;
                (items, total, false)
            }
            _ => (Vec::new(), 0, false),
        };

        PagedResult {
            data,
            total,
            has_more,
            limit,
            offset,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Offset of the next page, if the reported total says there is one
    pub fn next_offset(&self) -> Option<u32> {
        let next = u64::from(self.offset) + u64::from(self.limit);
        if next < self.total {
            u32::try_from(next).ok()
        } else {
            None
        }
    }
}
