use std::{borrow::Cow, collections::HashMap, hash::Hash};

#[cfg(feature = "tracing")]
use tracing::{instrument, trace};

use crate::{Element, Equivalence};

/// Compares two slices element by element, so order matters.
///
/// Two empty slices are equal. Use [`are_equal_sorted_slices`] to ignore
/// order.
pub fn are_equal_slices<T, E>(slice1: &[T], slice2: &[T], eq: E) -> bool
where
    T: Element,
    E: Equivalence<T>,
{
    slice1.len() == slice2.len()
        && slice1
            .iter()
            .zip(slice2)
            .all(|(a, b)| eq.equivalent(a, b))
}

/// Compares two slices ignoring their order.
///
/// Both slices are sorted before the element-wise comparison. The inputs are
/// left untouched: unsorted slices are copied, already sorted ones are
/// compared in place.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "trace", skip_all, fields(len1 = slice1.len(), len2 = slice2.len()))
)]
pub fn are_equal_sorted_slices<T, E>(slice1: &[T], slice2: &[T], eq: E) -> bool
where
    T: Element,
    E: Equivalence<T>,
{
    if slice1.len() != slice2.len() {
        return false;
    }

    are_equal_slices(&sorted(slice1), &sorted(slice2), eq)
}

fn sorted<T: Element>(slice: &[T]) -> Cow<'_, [T]> {
    if slice.windows(2).all(|w| w[0].total_cmp(&w[1]).is_le()) {
        return Cow::Borrowed(slice);
    }

    #[cfg(feature = "tracing")]
    trace!(len = slice.len(), "Sorting copy");

    let mut owned = slice.to_vec();
    owned.sort_by(Element::total_cmp);
    Cow::Owned(owned)
}

/// Compares two maps: they must have the same keys, with equal values under
/// each key.
pub fn are_equal_maps<K, V, E>(map1: &HashMap<K, V>, map2: &HashMap<K, V>, eq: E) -> bool
where
    K: Eq + Hash,
    V: Element,
    E: Equivalence<V>,
{
    map1.len() == map2.len()
        && map1
            .iter()
            .all(|(k, v1)| map2.get(k).is_some_and(|v2| eq.equivalent(v1, v2)))
}
