use std::{borrow::Cow, collections::HashMap, hash::Hash};

#[cfg(feature = "tracing")]
use tracing::{instrument, trace};

use crate::{is_unique_slice, is_value_in, is_value_in_map, unique_slice, Element, Equivalence};

/// Checks if all values of `slice1` are in `slice2`.
///
/// An empty `slice1` is always contained, so this returns `true`. An empty
/// `slice2` contains nothing, so a non-empty `slice1` gives `false`.
pub fn all_values_in<T, E>(slice1: &[T], slice2: &[T], eq: E) -> bool
where
    T: Element,
    E: Equivalence<T>,
{
    if slice1.is_empty() {
        return true;
    }

    slice1.iter().all(|x| is_value_in(x, slice2, &eq))
}

/// Checks if any value of `slice1` is in `slice2`. Returns `false` when
/// either slice is empty.
pub fn any_value_in<T, E>(slice1: &[T], slice2: &[T], eq: E) -> bool
where
    T: Element,
    E: Equivalence<T>,
{
    slice1.iter().any(|x| is_value_in(x, slice2, &eq))
}

/// Finds which values of `slice1` are in `slice2`, and where.
///
/// The returned map has the values of `slice1` as keys and, for each, the
/// ascending indices in `slice2` holding an equal value. Duplicates in
/// `slice1` are removed first (keeping the first occurrence); `slice2` is
/// never de-duplicated. Returns an empty map and `false` when either slice is
/// empty or nothing matches.
///
/// Float keys are stored as they appear in `slice1`. With a tolerance, two
/// keys that are not equal to each other may still share indices.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "trace", skip_all, fields(len1 = slice1.len(), len2 = slice2.len()))
)]
pub fn which_values_in<T, E>(slice1: &[T], slice2: &[T], eq: E) -> (HashMap<T::Key, Vec<usize>>, bool)
where
    T: Element,
    E: Equivalence<T>,
{
    let mut values: HashMap<T::Key, Vec<usize>> = HashMap::new();
    if slice1.is_empty() || slice2.is_empty() {
        return (values, false);
    }

    let slice1 = if is_unique_slice(slice1, &eq) {
        Cow::Borrowed(slice1)
    } else {
        Cow::Owned(unique_slice(slice1, &eq))
    };

    for x in slice1.iter() {
        let indices = slice2
            .iter()
            .enumerate()
            .filter(|(_, y)| eq.equivalent(x, *y))
            .map(|(i, _)| i)
            .collect::<Vec<_>>();

        if !indices.is_empty() {
            values.entry(x.key()).or_insert(indices);
        }
    }

    #[cfg(feature = "tracing")]
    trace!(matched = values.len(), "Collected indices");

    let found = !values.is_empty();
    (values, found)
}

/// Checks if all values of `slice` are values of `map`. Returns `false` when
/// either is empty.
pub fn all_values_in_map<K, T, E>(slice: &[T], map: &HashMap<K, T>, eq: E) -> bool
where
    K: Eq + Hash + Clone,
    T: Element,
    E: Equivalence<T>,
{
    if slice.is_empty() || map.is_empty() {
        return false;
    }

    slice
        .iter()
        .all(|x| map.values().any(|v| eq.equivalent(x, v)))
}

/// Checks if any value of `slice` is a value of `map`. Returns `false` when
/// either is empty.
pub fn any_value_in_map<K, T, E>(slice: &[T], map: &HashMap<K, T>, eq: E) -> bool
where
    K: Eq + Hash + Clone,
    T: Element,
    E: Equivalence<T>,
{
    slice
        .iter()
        .any(|x| map.values().any(|v| eq.equivalent(x, v)))
}

/// Finds which values of `slice` are values of `map`, and under which keys.
///
/// The returned map has the values of `slice` as keys and, for each, every
/// key of `map` holding an equal value. Returns an empty map and `false` when
/// either input is empty or nothing matches.
///
/// Float keys are not merged: with `Epsilon(0.0001)`, looking up
/// `[0.01002, 0.01, 0.2]` in `{1: 0.01, 2: 0.011}` gives
/// `{0.01: [1], 0.01002: [1]}`. Round floats before using them here if that
/// matters.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "trace", skip_all, fields(len = slice.len(), map_len = map.len()))
)]
pub fn which_values_in_map<K, T, E>(
    slice: &[T],
    map: &HashMap<K, T>,
    eq: E,
) -> (HashMap<T::Key, Vec<K>>, bool)
where
    K: Eq + Hash + Clone,
    T: Element,
    E: Equivalence<T>,
{
    let mut values = HashMap::new();
    if slice.is_empty() || map.is_empty() {
        return (values, false);
    }

    for x in slice {
        if let (keys, true) = is_value_in_map(x, map, &eq) {
            values.insert(x.key(), keys);
        }
    }

    #[cfg(feature = "tracing")]
    trace!(matched = values.len(), "Collected keys");

    let found = !values.is_empty();
    (values, found)
}
