//! Cursor pagination over creation timestamps.
//!
//! Listings are ordered by `created_at` descending. A page's `nextCursor` is
//! the `createdAt` of its last item and is only emitted when the page is
//! full, so a full final page leads to one extra, empty page.

use serde::Serialize;

use crate::flower::Flower;
use crate::memory::Memory;

/// Page size used when `limit` is absent or not a number.
pub const DEFAULT_PAGE_LIMIT: i64 = 50;

/// Largest page size a client may request.
pub const MAX_PAGE_LIMIT: i64 = 200;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Parse the raw `limit` query value and clamp it to `1..=`[`MAX_PAGE_LIMIT`].
///
/// Only the leading integer is read, so `10.5` is 10 and `20abc` is 20.
/// Values without leading digits fall back to [`DEFAULT_PAGE_LIMIT`].
pub fn parse_limit(raw: Option<&str>) -> i64 {
    let parsed = raw.and_then(leading_integer);
    clamp_limit(parsed, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT)
}

/// Optional sign followed by at least one digit; saturates on overflow.
fn leading_integer(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (negative, rest) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };

    let digits: Vec<i64> = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|digit| i64::from(digit - b'0'))
        .collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .into_iter()
        .fold(0i64, |acc, digit| acc.saturating_mul(10).saturating_add(digit));
    Some(if negative { -magnitude } else { magnitude })
}

/// An empty cursor is the same as no cursor.
pub fn normalize_cursor(raw: Option<String>) -> Option<String> {
    raw.filter(|cursor| !cursor.is_empty())
}

/// Items that can be paged by creation time.
pub trait Cursor {
    /// The value handed back to clients as `nextCursor`.
    fn cursor(&self) -> &str;
}

impl Cursor for Memory {
    fn cursor(&self) -> &str {
        &self.created_at
    }
}

impl Cursor for Flower {
    fn cursor(&self) -> &str {
        &self.created_at
    }
}

/// One page of a listing: `{ items, nextCursor? }`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

impl<T: Cursor> Page<T> {
    /// Wrap a fetched page, emitting a cursor only if it holds exactly `limit` items.
    pub fn from_items(items: Vec<T>, limit: i64) -> Self {
        let full = usize::try_from(limit).is_ok_and(|limit| items.len() == limit);
        let next_cursor = if full {
            items.last().map(|item| item.cursor().to_string())
        } else {
            None
        };
        Page { items, next_cursor }
    }
}
