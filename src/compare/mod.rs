//! Scalar element types and the equality strategies used to compare them.
//!
//! Every check in this crate is generic over an [`Element`] and takes an
//! [`Equivalence`] deciding when two elements are the same. Integers, strings,
//! booleans and chars are normally compared with [`Exact`], floats with an
//! [`Epsilon`] tolerance.

pub mod epsilon;

pub use self::epsilon::Epsilon;

use std::{cmp::Ordering, hash::Hash};

use ordered_float::OrderedFloat;

mod sealed {
    pub trait Sealed {}
}

/// A scalar that can be stored in the collections checked by this crate.
///
/// The set of implementors is closed: integers, `bool`, `char`, `String`,
/// `&str`, `f32` and `f64`.
pub trait Element: Clone + sealed::Sealed {
    /// Hashable projection of the element, used when it becomes a map key.
    ///
    /// For floats this is [`OrderedFloat`], so near-equal floats produce
    /// distinct keys.
    type Key: Eq + Hash + Clone;

    fn key(&self) -> Self::Key;

    /// Strict equality. Floats compare by subtraction with a zero tolerance,
    /// the same rule as `Epsilon(0.0)`, so infinities never equal each other.
    fn exact_eq(&self, other: &Self) -> bool;

    /// Total order used to sort elements.
    fn total_cmp(&self, other: &Self) -> Ordering;
}

/// Strategy deciding whether two elements are equal.
pub trait Equivalence<T: ?Sized> {
    fn equivalent(&self, a: &T, b: &T) -> bool;
}

/// Strict equality, without any tolerance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exact;

impl<T: Element> Equivalence<T> for Exact {
    fn equivalent(&self, a: &T, b: &T) -> bool {
        a.exact_eq(b)
    }
}

impl<T, E> Equivalence<T> for &E
where
    T: ?Sized,
    E: Equivalence<T> + ?Sized,
{
    fn equivalent(&self, a: &T, b: &T) -> bool {
        (**self).equivalent(a, b)
    }
}

macro_rules! exact_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Element for $t {
                type Key = $t;

                fn key(&self) -> Self::Key {
                    self.clone()
                }

                fn exact_eq(&self, other: &Self) -> bool {
                    self == other
                }

                fn total_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

exact_element!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, String,
);

impl sealed::Sealed for &str {}

impl<'a> Element for &'a str {
    type Key = &'a str;

    fn key(&self) -> Self::Key {
        *self
    }

    fn exact_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

macro_rules! float_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Element for $t {
                type Key = OrderedFloat<$t>;

                fn key(&self) -> Self::Key {
                    OrderedFloat(*self)
                }

                fn exact_eq(&self, other: &Self) -> bool {
                    (self - other).abs() <= 0.0
                }

                fn total_cmp(&self, other: &Self) -> Ordering {
                    <$t>::total_cmp(self, other)
                }
            }
        )*
    };
}

float_element!(f32, f64);
