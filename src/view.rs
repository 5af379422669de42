//! Filter and sort derivation over the canonical call set.
//!
//! Pure functions: the display layer re-derives its view on every state
//! change, so nothing here caches or mutates. Ties compare equal — the view
//! is re-sorted within a single render and cross-render stability is not a
//! contract.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::types::EnrichedCall;

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Active filters. Empty members mean "no constraint".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallFilters {
    /// Priority membership, compared case-insensitively.
    pub priorities: Vec<String>,
    /// Case-insensitive substring match on company name.
    pub company_search: String,
    /// Inclusive lower bound on `call_date` (lexicographic; valid because
    /// the date is a fixed-width `YYYY-MM-DD` string).
    pub date_from: String,
    /// Inclusive upper bound on `call_date`.
    pub date_to: String,
}

impl CallFilters {
    fn matches(&self, call: &EnrichedCall) -> bool {
        if !self.priorities.is_empty()
            && !self
                .priorities
                .iter()
                .any(|p| p.eq_ignore_ascii_case(&call.priority))
        {
            return false;
        }
        let query = self.company_search.trim().to_lowercase();
        if !query.is_empty() && !call.company_name.to_lowercase().contains(&query) {
            return false;
        }
        if !self.date_from.is_empty() && call.call_date.as_str() < self.date_from.as_str() {
            return false;
        }
        if !self.date_to.is_empty() && call.call_date.as_str() > self.date_to.as_str() {
            return false;
        }
        true
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Sortable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Priority,
    CompanyName,
    CallDatetime,
    AttendeeCount,
    EmployeeCount,
    EstimatedRevenue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Current sort selection. Selecting the same key again flips direction;
/// selecting a new key starts descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: SortKey::Priority,
            direction: SortDirection::Desc,
        }
    }
}

impl SortConfig {
    pub fn toggle(self, key: SortKey) -> Self {
        let direction = if self.key == key && self.direction == SortDirection::Desc {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        };
        Self { key, direction }
    }
}

/// Numeric weight for priority ordering. Unrecognized labels weigh nothing,
/// since records constructed outside the normalizer can carry anything.
pub fn priority_weight(priority: &str) -> u8 {
    match priority.to_lowercase().as_str() {
        "high" => 3,
        "medium" => 2,
        "low" => 1,
        _ => 0,
    }
}

fn compare_asc(a: &EnrichedCall, b: &EnrichedCall, key: SortKey) -> Ordering {
    match key {
        SortKey::Priority => priority_weight(&a.priority).cmp(&priority_weight(&b.priority)),
        SortKey::CompanyName => a
            .company_name
            .to_lowercase()
            .cmp(&b.company_name.to_lowercase()),
        // Fixed-width datetime strings compare correctly as raw bytes.
        SortKey::CallDatetime => a.call_datetime_ist.cmp(&b.call_datetime_ist),
        SortKey::AttendeeCount => a.attendees.len().cmp(&b.attendees.len()),
        SortKey::EmployeeCount => a.employee_count.cmp(&b.employee_count),
        SortKey::EstimatedRevenue => a.estimated_revenue.cmp(&b.estimated_revenue),
    }
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Derive the displayed ordering: filter, then sort by the selected key.
pub fn apply_view(
    records: &[EnrichedCall],
    filters: &CallFilters,
    sort: SortConfig,
) -> Vec<EnrichedCall> {
    let mut result: Vec<EnrichedCall> = records
        .iter()
        .filter(|c| filters.matches(c))
        .cloned()
        .collect();

    result.sort_by(|a, b| {
        let ordering = compare_asc(a, b, sort.key);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::sample_calls;

    fn names(calls: &[EnrichedCall]) -> Vec<&str> {
        calls.iter().map(|c| c.company_name.as_str()).collect()
    }

    #[test]
    fn test_priority_sort_descending_is_monotone() {
        let view = apply_view(&sample_calls(), &CallFilters::default(), SortConfig::default());
        for pair in view.windows(2) {
            assert!(
                priority_weight(&pair[0].priority) >= priority_weight(&pair[1].priority),
                "descending priority order violated: {} before {}",
                pair[0].priority,
                pair[1].priority
            );
        }
    }

    #[test]
    fn test_toggle_same_key_flips_direction() {
        let config = SortConfig::default();
        assert_eq!(config.direction, SortDirection::Desc);

        let toggled = config.toggle(SortKey::Priority);
        assert_eq!(toggled.direction, SortDirection::Asc);

        let view = apply_view(&sample_calls(), &CallFilters::default(), toggled);
        for pair in view.windows(2) {
            assert!(priority_weight(&pair[0].priority) <= priority_weight(&pair[1].priority));
        }

        // Toggling from Asc goes back to Desc.
        assert_eq!(toggled.toggle(SortKey::Priority).direction, SortDirection::Desc);
    }

    #[test]
    fn test_toggle_new_key_starts_descending() {
        let config = SortConfig::default().toggle(SortKey::Priority); // now Asc
        let switched = config.toggle(SortKey::CompanyName);
        assert_eq!(switched.key, SortKey::CompanyName);
        assert_eq!(switched.direction, SortDirection::Desc);
    }

    #[test]
    fn test_company_name_sort_is_case_folded() {
        let config = SortConfig {
            key: SortKey::CompanyName,
            direction: SortDirection::Asc,
        };
        let view = apply_view(&sample_calls(), &CallFilters::default(), config);
        assert_eq!(
            names(&view),
            vec![
                "EduSpark",
                "FinanceEdge Global",
                "HealthPulse Inc",
                "RetailFlow",
                "TechVision AI"
            ]
        );
    }

    #[test]
    fn test_attendee_count_sort() {
        let config = SortConfig {
            key: SortKey::AttendeeCount,
            direction: SortDirection::Desc,
        };
        let view = apply_view(&sample_calls(), &CallFilters::default(), config);
        assert_eq!(view[0].company_name, "RetailFlow"); // 3 attendees
        assert_eq!(view[0].attendees.len(), 3);
        assert_eq!(view[4].attendees.len(), 1);
    }

    #[test]
    fn test_datetime_sort_ascending() {
        let config = SortConfig {
            key: SortKey::CallDatetime,
            direction: SortDirection::Asc,
        };
        let view = apply_view(&sample_calls(), &CallFilters::default(), config);
        assert_eq!(view[0].company_name, "EduSpark"); // 02-20 09:30
        assert_eq!(view[4].company_name, "RetailFlow"); // 02-22 11:00
    }

    #[test]
    fn test_priority_filter_case_insensitive() {
        let filters = CallFilters {
            priorities: vec!["high".to_string()],
            ..Default::default()
        };
        let view = apply_view(&sample_calls(), &filters, SortConfig::default());
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|c| c.priority == "High"));
    }

    #[test]
    fn test_date_range_filter_is_inclusive() {
        let filters = CallFilters {
            date_from: "2026-02-20".to_string(),
            date_to: "2026-02-21".to_string(),
            ..Default::default()
        };
        let view = apply_view(&sample_calls(), &filters, SortConfig::default());
        assert_eq!(view.len(), 4);
        assert!(view.iter().all(|c| c.call_date != "2026-02-22"));
    }

    #[test]
    fn test_company_search_substring_case_insensitive() {
        let filters = CallFilters {
            company_search: "tech".to_string(),
            ..Default::default()
        };
        let view = apply_view(&sample_calls(), &filters, SortConfig::default());
        assert_eq!(names(&view), vec!["TechVision AI"]);
    }

    #[test]
    fn test_empty_filters_keep_everything() {
        let view = apply_view(&sample_calls(), &CallFilters::default(), SortConfig::default());
        assert_eq!(view.len(), 5);
    }
}
