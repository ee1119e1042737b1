use std::{collections::HashMap, hash::Hash};

use crate::{Element, Equivalence};

/// Checks if `x` is in `slice`.
pub fn is_value_in<T, E>(x: &T, slice: &[T], eq: E) -> bool
where
    T: Element,
    E: Equivalence<T>,
{
    slice.iter().any(|v| eq.equivalent(x, v))
}

/// Checks if `x` is among the values of `map`.
///
/// Returns every key holding that value, and `true` if there is at least one.
/// All matching keys are collected, not just the first.
pub fn is_value_in_map<K, V, E>(x: &V, map: &HashMap<K, V>, eq: E) -> (Vec<K>, bool)
where
    K: Eq + Hash + Clone,
    V: Element,
    E: Equivalence<V>,
{
    let keys = map
        .iter()
        .filter(|(_, v)| eq.equivalent(x, *v))
        .map(|(k, _)| k.clone())
        .collect::<Vec<_>>();
    let found = !keys.is_empty();

    (keys, found)
}
