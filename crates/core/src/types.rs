use chrono::{DateTime, SecondsFormat, Utc};

/// Entity primary keys are random UUID v4 strings.
pub type EntityId = String;

/// Timestamps travel and are stored as ISO-8601 strings in UTC with
/// millisecond precision, e.g. `2024-01-15T18:30:00.000Z`.
///
/// The format is fixed width, so lexicographic order equals chronological
/// order. Pagination cursors rely on this.
pub type IsoTimestamp = String;

/// Generate a fresh entity id.
pub fn new_id() -> EntityId {
    uuid::Uuid::new_v4().to_string()
}

/// Current time in canonical form.
pub fn now_iso() -> IsoTimestamp {
    format_iso(Utc::now())
}

/// Render a UTC instant in canonical form.
pub fn format_iso(instant: DateTime<Utc>) -> IsoTimestamp {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Returns `true` if `value` parses as a timestamp and is already in
/// canonical form (re-formatting it yields the same string).
pub fn is_canonical_iso(value: &str) -> bool {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| format_iso(parsed.with_timezone(&Utc)) == value)
        .unwrap_or(false)
}
