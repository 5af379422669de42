//! Record normalization.
//!
//! [`normalize`] maps an arbitrary loosely-shaped source object into the
//! canonical [`EnrichedCall`] — pure and total. Whatever the upstream agent
//! sent (or failed to send), every field comes out present and correctly
//! typed, resolved per field against the default policy in `types.rs`.

use serde_json::Value;

use crate::types::{Attendee, CallSummary, EnrichedCall};

/// Neutral midpoint used when the agent supplied no confidence score.
const DEFAULT_CONFIDENCE: i64 = 50;

// ---------------------------------------------------------------------------
// Coercion helpers
// ---------------------------------------------------------------------------

/// Coerce a scalar JSON value to a display string. Containers and null are
/// not meaningfully displayable, so they coerce to absence and the caller's
/// default applies.
fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Look up `key` on the top level of `raw` and coerce it to a string.
fn string_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key).and_then(coerce_string)
}

/// String field with a fixed default.
fn string_or(raw: &Value, key: &str, default: &str) -> String {
    string_field(raw, key).unwrap_or_else(|| default.to_string())
}

/// Array field coerced element-wise to strings; non-array sources and
/// non-scalar elements fall away to an empty sequence / skipped entries.
fn string_list(raw: &Value, key: &str) -> Vec<String> {
    match raw.get(key) {
        Some(Value::Array(items)) => items.iter().filter_map(coerce_string).collect(),
        _ => Vec::new(),
    }
}

/// Numeric coercion: accepts numbers and numeric strings, falls back to
/// `default` on anything else (including NaN-ish garbage).
fn coerce_number(value: Option<&Value>, default: i64) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64))
            .unwrap_or(default),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .map(|f| f.round() as i64)
            .unwrap_or(default),
        _ => default,
    }
}

/// Canonicalize a priority label: case-insensitive on input, canonical case
/// on output. Anything unrecognized becomes the missing-value default.
pub fn canonical_priority(raw: Option<&str>) -> String {
    match raw.map(|s| s.trim().to_lowercase()).as_deref() {
        Some("high") => "High",
        Some("low") => "Low",
        _ => "Medium",
    }
    .to_string()
}

/// Fixed-offset slicing of `call_datetime_ist` into a date.
///
/// Display convenience only — first 10 characters of the (nominally
/// `YYYY-MM-DDTHH:MM...`) string. Not a timezone computation.
fn sliced_date(datetime: &str) -> String {
    datetime.chars().take(10).collect()
}

/// Fixed-offset slicing of `call_datetime_ist` into a time label:
/// characters 11..16 plus the literal " IST" suffix.
fn sliced_time(datetime: &str) -> String {
    let hhmm: String = datetime.chars().skip(11).take(5).collect();
    format!("{} IST", hhmm)
}

fn normalize_attendee(raw: &Value) -> Attendee {
    Attendee {
        name: string_or(raw, "name", ""),
        email: string_or(raw, "email", ""),
        role: string_or(raw, "role", ""),
        company: string_field(raw, "company"),
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize one raw record into canonical form.
///
/// `ordinal` is the record's position within the current pass; it seeds the
/// synthetic `call_{ordinal}` id when the source carries no identifier, so
/// ids stay stable and unique within one normalization pass.
pub fn normalize(raw: &Value, ordinal: usize) -> EnrichedCall {
    let datetime = string_or(raw, "call_datetime_ist", "");

    EnrichedCall {
        call_id: string_field(raw, "email_id")
            .or_else(|| string_field(raw, "call_id"))
            .unwrap_or_else(|| format!("call_{}", ordinal)),
        company_name: string_or(raw, "company_name", "Unknown"),
        call_date: string_field(raw, "call_date").unwrap_or_else(|| sliced_date(&datetime)),
        call_time: string_field(raw, "call_time").unwrap_or_else(|| sliced_time(&datetime)),
        original_timezone: string_or(raw, "original_timezone", ""),
        local_time: string_field(raw, "local_time")
            .or_else(|| string_field(raw, "original_timezone"))
            .unwrap_or_default(),
        attendees: match raw.get("attendees") {
            Some(Value::Array(items)) => items.iter().map(normalize_attendee).collect(),
            _ => Vec::new(),
        },
        meeting_platform: string_or(raw, "meeting_platform", ""),
        meeting_link: string_or(raw, "meeting_link", ""),
        ai_notes: string_or(raw, "ai_notes", ""),
        key_topics: string_list(raw, "key_topics"),
        action_items: string_list(raw, "action_items"),
        email_thread_summary: string_field(raw, "email_thread_summary")
            .or_else(|| string_field(raw, "email_subject"))
            .unwrap_or_default(),
        company_size_tier: string_or(raw, "company_size_tier", "Unknown"),
        employee_count: string_or(raw, "employee_count", "Unknown"),
        estimated_revenue: string_or(raw, "estimated_revenue", "Unknown"),
        industry: string_or(raw, "industry", "Unknown"),
        priority: canonical_priority(string_field(raw, "priority").as_deref()),
        headquarters: string_or(raw, "headquarters", "Unknown"),
        company_website: string_or(raw, "company_website", "Unknown"),
        is_new: raw
            .get("is_new")
            .and_then(Value::as_bool)
            .unwrap_or(true),
        enrichment_confidence: coerce_number(raw.get("enrichment_confidence"), DEFAULT_CONFIDENCE)
            .clamp(0, 100),
        call_datetime_ist: datetime,
    }
}

/// Normalize a whole batch, ordinals assigned by position.
pub fn normalize_batch(raw_calls: &[Value]) -> Vec<EnrichedCall> {
    raw_calls
        .iter()
        .enumerate()
        .map(|(idx, raw)| normalize(raw, idx))
        .collect()
}

// ---------------------------------------------------------------------------
// Summary derivation
// ---------------------------------------------------------------------------

/// Derive aggregate counters by counting a call set. Used when the
/// enrichment agent supplied no summary of its own; never merged with an
/// adopted summary.
pub fn derive_summary(calls: &[EnrichedCall], today: &str) -> CallSummary {
    let priority_count = |label: &str| {
        calls
            .iter()
            .filter(|c| c.priority.eq_ignore_ascii_case(label))
            .count() as u64
    };

    CallSummary {
        total_calls: calls.len() as u64,
        new_calls: calls.iter().filter(|c| c.is_new).count() as u64,
        high_priority: priority_count("high"),
        medium_priority: priority_count("medium"),
        low_priority: priority_count("low"),
        todays_calls: calls.iter().filter(|c| c.call_date == today).count() as u64,
        pipeline_status: "Active".to_string(),
    }
}
