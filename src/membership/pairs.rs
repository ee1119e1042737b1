use std::{collections::HashMap, hash::Hash};

#[cfg(feature = "tracing")]
use tracing::{instrument, trace};

use crate::{Element, Equivalence};

/// Checks if every key-value pair of `map1` is in `map2`: the key must be
/// present and its values equal. Returns `false` when either map is empty.
pub fn all_key_value_pairs_in<K, V, E>(map1: &HashMap<K, V>, map2: &HashMap<K, V>, eq: E) -> bool
where
    K: Eq + Hash,
    V: Element,
    E: Equivalence<V>,
{
    if map1.is_empty() || map2.is_empty() {
        return false;
    }

    map1
        .iter()
        .all(|(k, v1)| map2.get(k).is_some_and(|v2| eq.equivalent(v1, v2)))
}

/// Checks if any key-value pair of `map1` is in `map2`. Returns `false` when
/// either map is empty.
pub fn any_key_value_pair_in<K, V, E>(map1: &HashMap<K, V>, map2: &HashMap<K, V>, eq: E) -> bool
where
    K: Eq + Hash,
    V: Element,
    E: Equivalence<V>,
{
    map1
        .iter()
        .any(|(k, v1)| map2.get(k).is_some_and(|v2| eq.equivalent(v1, v2)))
}

/// Finds which key-value pairs of `map1` are in `map2`.
///
/// Returns the matching pairs, with values taken from `map1`, and `true` if
/// there is at least one. Returns an empty map and `false` when either map is
/// empty.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "trace", skip_all, fields(len1 = map1.len(), len2 = map2.len()))
)]
pub fn which_key_value_pairs_in<K, V, E>(
    map1: &HashMap<K, V>,
    map2: &HashMap<K, V>,
    eq: E,
) -> (HashMap<K, V>, bool)
where
    K: Eq + Hash + Clone,
    V: Element,
    E: Equivalence<V>,
{
    let pairs = map1
        .iter()
        .filter(|(k, v1)| map2.get(*k).is_some_and(|v2| eq.equivalent(*v1, v2)))
        .map(|(k, v1)| (k.clone(), v1.clone()))
        .collect::<HashMap<_, _>>();

    #[cfg(feature = "tracing")]
    trace!(matched = pairs.len(), "Collected pairs");

    let found = !pairs.is_empty();
    (pairs, found)
}
