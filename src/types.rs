//! Canonical record types shared across the pipeline, digest, and view
//! layers.
//!
//! After normalization every field is present and correctly typed — the
//! display layer never sees a missing or mistyped field, no matter what the
//! upstream agents returned.

use serde::{Deserialize, Serialize};

/// A person on the call. `company` is the only optional field: attendees
/// from the scanner usually belong to the call's company and omit it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attendee {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

/// The canonical demo-call record.
///
/// Scheduling fields are display-only strings — source formats vary too much
/// to parse as structured time, and nothing downstream computes on them.
/// Firmographic strings default to "Unknown"; narrative and meeting strings
/// default to "" so "no data" reads differently from "unknown".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichedCall {
    pub call_id: String,
    pub company_name: String,
    pub call_datetime_ist: String,
    pub call_date: String,
    pub call_time: String,
    pub original_timezone: String,
    pub local_time: String,
    pub attendees: Vec<Attendee>,
    pub meeting_platform: String,
    pub meeting_link: String,
    pub ai_notes: String,
    pub key_topics: Vec<String>,
    pub action_items: Vec<String>,
    pub email_thread_summary: String,
    pub company_size_tier: String,
    pub employee_count: String,
    pub estimated_revenue: String,
    pub industry: String,
    /// One of "High", "Medium", "Low" — canonical case.
    pub priority: String,
    pub headquarters: String,
    pub company_website: String,
    pub is_new: bool,
    /// 0–100.
    pub enrichment_confidence: i64,
}

/// Aggregate counters over a call set.
///
/// Either adopted wholesale from the enrichment agent's reply or derived by
/// counting the canonical set — the two are never merged field by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallSummary {
    #[serde(default)]
    pub total_calls: u64,
    #[serde(default)]
    pub new_calls: u64,
    #[serde(default)]
    pub high_priority: u64,
    #[serde(default)]
    pub medium_priority: u64,
    #[serde(default)]
    pub low_priority: u64,
    #[serde(default)]
    pub todays_calls: u64,
    #[serde(default)]
    pub pipeline_status: String,
}

/// The orchestrator's single explicit machine value. Making this one enum
/// (instead of independent booleans) keeps combinations like "enriching
/// while idle" unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelinePhase {
    #[default]
    Idle,
    Scanning,
    Enriching,
}
