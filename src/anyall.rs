//! Boolean aggregation over slices and map values.
//!
//! Unlike [`Iterator::all`], an empty input never holds: both [`all`] and
//! [`any`] return `false` when there are no conditions.

use std::{collections::HashMap, hash::Hash};

/// Checks if any of the conditions is met. Returns `false` for no conditions.
pub fn any(conditions: &[bool]) -> bool {
    conditions.iter().any(|&c| c)
}

/// Checks if all conditions are met. Returns `false` for no conditions.
pub fn all(conditions: &[bool]) -> bool {
    !conditions.is_empty() && conditions.iter().all(|&c| c)
}

/// Checks if any value of the map is `true`. Returns `false` for an empty map.
pub fn any_in_map<K>(conditions: &HashMap<K, bool>) -> bool {
    conditions.values().any(|&c| c)
}

/// Checks if all values of the map are `true`. Returns `false` for an empty map.
pub fn all_in_map<K>(conditions: &HashMap<K, bool>) -> bool {
    !conditions.is_empty() && conditions.values().all(|&c| c)
}

/// Returns the keys whose value is `true`, and whether there are any.
///
/// Keys come back in the map's iteration order.
pub fn which_in_map<K>(conditions: &HashMap<K, bool>) -> (Vec<K>, bool)
where
    K: Eq + Hash + Clone,
{
    let keys = conditions
        .iter()
        .filter(|&(_, &c)| c)
        .map(|(k, _)| k.clone())
        .collect::<Vec<_>>();
    let found = !keys.is_empty();

    (keys, found)
}
