use std::{
    any::{type_name, Any},
    collections::HashMap,
};

#[cfg(feature = "tracing")]
use tracing::{instrument, trace, warn};

use crate::{is_value_in, Element, Epsilon, Equivalence, Error, Exact, Result};

/// Checks that no two elements of `slice` are equal. An empty slice is unique.
pub fn is_unique_slice<T, E>(slice: &[T], eq: E) -> bool
where
    T: Element,
    E: Equivalence<T>,
{
    slice
        .iter()
        .enumerate()
        .all(|(i, a)| !slice[i + 1..].iter().any(|b| eq.equivalent(a, b)))
}

/// Checks that no two elements of `slice` are equal, comparing with
/// [`Exact`]. For floats that is a zero tolerance, matching
/// [`is_unique_any`]; use [`is_unique_slice`] with an [`Epsilon`] for a wider
/// one.
pub fn is_unique<T: Element>(slice: &[T]) -> bool {
    is_unique_slice(slice, Exact)
}

/// Checks uniqueness of a vector whose element type is only known at runtime.
///
/// Supported are `Vec`s of `i32`, `i64`, `isize`, `String`, `&'static str`
/// and `f64`. Floats are compared with `Epsilon(0.0)`.
///
/// # Panics
///
/// Panics for any other type. See [`try_is_unique_any`] for a non-panicking
/// version.
pub fn is_unique_any<S: Any>(slice: &S) -> bool {
    match try_is_unique_any(slice) {
        Ok(unique) => unique,
        Err(err) => panic!("{err}"),
    }
}

/// Like [`is_unique_any`], but returns [`Error::UnsupportedType`] instead of
/// panicking.
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, fields(ty = type_name::<S>())))]
pub fn try_is_unique_any<S: Any>(slice: &S) -> Result<bool> {
    let any = slice as &dyn Any;

    macro_rules! dispatch {
        ($($t:ty => $eq:expr),* $(,)?) => {
            $(
                if let Some(slice) = any.downcast_ref::<Vec<$t>>() {
                    return Ok(is_unique_slice(slice, $eq));
                }
            )*
        };
    }

    dispatch!(
        i32 => Exact,
        i64 => Exact,
        isize => Exact,
        String => Exact,
        &'static str => Exact,
        f64 => Epsilon(0.0),
    );

    #[cfg(feature = "tracing")]
    warn!(ty = type_name::<S>(), "Unsupported type");

    Err(Error::UnsupportedType(type_name::<S>()))
}

/// Returns the elements of `slice` without duplicates, in order of first
/// occurrence.
///
/// With a tolerance, an element is dropped when it is equal to any element
/// already kept.
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, fields(len = slice.len())))]
pub fn unique_slice<T, E>(slice: &[T], eq: E) -> Vec<T>
where
    T: Element,
    E: Equivalence<T>,
{
    let mut unique: Vec<T> = Vec::with_capacity(slice.len());
    for x in slice {
        if !is_value_in(x, &unique, &eq) {
            unique.push(x.clone());
        }
    }

    #[cfg(feature = "tracing")]
    trace!(removed = slice.len() - unique.len(), "Removed duplicates");

    unique
}

/// Checks that no two keys of `map` hold equal values. An empty map is
/// unique.
///
/// Keys are unique by construction, so this only looks at values.
pub fn is_unique_map<K, V, E>(map: &HashMap<K, V>, eq: E) -> bool
where
    V: Element,
    E: Equivalence<V>,
{
    let values = map.values().collect::<Vec<_>>();
    values
        .iter()
        .enumerate()
        .all(|(i, a)| !values[i + 1..].iter().any(|b| eq.equivalent(*a, *b)))
}
