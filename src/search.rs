//! Deep key search over untyped agent payloads.
//!
//! Agents move fields around between deployments — `demo_calls` might sit at
//! the top level today and three envelopes deep tomorrow. Rather than chase
//! exact paths, extraction looks for the first occurrence of a field name
//! anywhere in the reply tree. This trades path precision for resilience to
//! response-shape drift.

use serde_json::Value;

/// Recursion limit. `serde_json::Value` cannot be cyclic, but agent replies
/// have arrived with absurd envelope nesting; past this depth the value is
/// treated as not found.
const MAX_SEARCH_DEPTH: usize = 64;

/// Find the first value bound to `key` in a depth-first walk of `value`.
///
/// The current object's own entries are checked before recursing, so a
/// shallower match always wins over a deeper one along the same path.
/// Objects and arrays are traversed in their natural order; scalar leaves
/// are never descended into. Returns `None` for non-container input or when
/// the key does not occur anywhere reachable.
pub fn deep_find<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    deep_find_bounded(value, key, MAX_SEARCH_DEPTH)
}

fn deep_find_bounded<'a>(value: &'a Value, key: &str, depth: usize) -> Option<&'a Value> {
    if depth == 0 {
        return None;
    }
    match value {
        Value::Object(map) => {
            if let Some(found) = map.get(key) {
                return Some(found);
            }
            map.values()
                .find_map(|child| deep_find_bounded(child, key, depth - 1))
        }
        Value::Array(items) => items
            .iter()
            .find_map(|child| deep_find_bounded(child, key, depth - 1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_finds_key_at_top_level() {
        let value = json!({"demo_calls": [1, 2], "other": {}});
        assert_eq!(deep_find(&value, "demo_calls"), Some(&json!([1, 2])));
    }

    #[test]
    fn test_finds_key_nested_in_objects_and_arrays() {
        let value = json!({
            "envelope": {
                "batches": [
                    {"meta": {}},
                    {"data": {"demo_calls": ["found"]}}
                ]
            }
        });
        assert_eq!(deep_find(&value, "demo_calls"), Some(&json!(["found"])));
    }

    #[test]
    fn test_shallower_match_wins_over_deeper() {
        let value = json!({
            "count": 1,
            "inner": {"count": 99}
        });
        assert_eq!(deep_find(&value, "count"), Some(&json!(1)));
    }

    #[test]
    fn test_first_match_in_enumeration_order() {
        // serde_json's default map preserves insertion order, so the
        // first sibling branch containing the key wins.
        let value = json!({
            "a": {"target": "first"},
            "b": {"target": "second"}
        });
        assert_eq!(deep_find(&value, "target"), Some(&json!("first")));
    }

    #[test]
    fn test_non_container_input_is_absent() {
        assert_eq!(deep_find(&json!("demo_calls"), "demo_calls"), None);
        assert_eq!(deep_find(&json!(42), "demo_calls"), None);
        assert_eq!(deep_find(&Value::Null, "demo_calls"), None);
    }

    #[test]
    fn test_does_not_descend_into_scalar_leaves() {
        let value = json!({"note": "the demo_calls are elsewhere"});
        assert_eq!(deep_find(&value, "demo_calls"), None);
    }

    #[test]
    fn test_terminates_on_pathological_nesting() {
        let mut value = json!({"leaf": true});
        for _ in 0..500 {
            value = json!({"wrap": value});
        }
        // Past the depth bound the leaf is unreachable, but the walk ends.
        assert_eq!(deep_find(&value, "leaf"), None);
    }

    #[test]
    fn test_nesting_within_bound_is_found() {
        let mut value = json!({"leaf": true});
        for _ in 0..32 {
            value = json!({"wrap": value});
        }
        assert_eq!(deep_find(&value, "leaf"), Some(&json!(true)));
    }
}
