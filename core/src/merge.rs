//! Recursive key-wise merge over JSON values.
//!
//! # Design
//! Only JSON objects are merged structurally. Arrays, scalars and `null` are
//! leaves: an incoming leaf replaces whatever the target held at that key.
//! When the source holds an object and the target holds a leaf (or nothing),
//! the target slot is reset to an empty object before recursing, so the
//! result at that key is a copy of the source object.

use serde_json::{Map, Value};

/// Merge `source` into `target` in place.
///
/// If `source` is not an object it overwrites `target` outright.
pub fn deep_merge(target: &mut Value, source: Value) {
    match source {
        Value::Object(source) => {
            if !target.is_object() {
                *target = Value::Object(Map::new());
            }
            if let Value::Object(target) = target {
                deep_merge_map(target, source);
            }
        }
        leaf => *target = leaf,
    }
}

/// Merge every key of `source` into `target` in place.
pub fn deep_merge_map(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, value) in source {
        match value {
            Value::Object(_) => {
                let slot = target
                    .entry(key)
                    .or_insert_with(|| Value::Object(Map::new()));
                deep_merge(slot, value);
            }
            leaf => {
                target.insert(key, leaf);
            }
        }
    }
}

/// Merge an optional incoming value into an optional slot.
///
/// An absent source leaves the slot untouched.
pub(crate) fn merge_option(target: &mut Option<Value>, source: Option<Value>) {
    if let Some(source) = source {
        match target {
            Some(existing) => deep_merge(existing, source),
            None => {
                let mut fresh = Value::Null;
                deep_merge(&mut fresh, source);
                *target = Some(fresh);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_objects_merge_key_by_key() {
        let mut target = json!({"headers": {"a": 1, "b": 2}, "timeout": 10});
        deep_merge(&mut target, json!({"headers": {"b": 3, "c": 4}}));
        assert_eq!(
            target,
            json!({"headers": {"a": 1, "b": 3, "c": 4}, "timeout": 10})
        );
    }

    #[test]
    fn leaf_source_overwrites_object_target() {
        let mut target = json!({"auth": {"user": "x", "pass": "y"}});
        deep_merge(&mut target, json!({"auth": "token"}));
        assert_eq!(target, json!({"auth": "token"}));
    }

    #[test]
    fn object_source_replaces_leaf_target() {
        let mut target = json!({"auth": "token"});
        deep_merge(&mut target, json!({"auth": {"user": "x"}}));
        assert_eq!(target, json!({"auth": {"user": "x"}}));
    }

    #[test]
    fn arrays_are_replaced_not_concatenated() {
        let mut target = json!({"tags": [1, 2, 3]});
        deep_merge(&mut target, json!({"tags": [4]}));
        assert_eq!(target, json!({"tags": [4]}));
    }

    #[test]
    fn null_is_a_leaf() {
        let mut target = json!({"proxy": {"host": "h"}});
        deep_merge(&mut target, json!({"proxy": null}));
        assert_eq!(target, json!({"proxy": null}));
    }

    #[test]
    fn non_object_source_replaces_whole_target() {
        let mut target = json!({"a": 1});
        deep_merge(&mut target, json!("text"));
        assert_eq!(target, json!("text"));
    }

    #[test]
    fn merging_twice_equals_merging_once() {
        let base = json!({"a": {"b": 1, "c": [1]}, "d": "x"});
        let source = json!({"a": {"c": [2], "e": {"f": true}}, "d": null});

        let mut once = base.clone();
        deep_merge(&mut once, source.clone());
        let mut twice = once.clone();
        deep_merge(&mut twice, source);
        assert_eq!(once, twice);
    }

    #[test]
    fn merge_option_copies_into_empty_slot() {
        let mut slot = None;
        merge_option(&mut slot, Some(json!({"q": "x"})));
        assert_eq!(slot, Some(json!({"q": "x"})));

        merge_option(&mut slot, None);
        assert_eq!(slot, Some(json!({"q": "x"})));

        merge_option(&mut slot, Some(json!({"page": 2})));
        assert_eq!(slot, Some(json!({"q": "x", "page": 2})));
    }
}
