//! Predicates over slices and maps of scalars.
//!
//! The crate answers three kinds of questions:
//!
//! * boolean aggregation: [`any`], [`all`] and their map counterparts,
//! * membership: is a value, several values or a set of key-value pairs
//!   present in a slice or a map, and where,
//! * equality and uniqueness: [`are_equal_slices`], [`are_equal_sorted_slices`],
//!   [`are_equal_maps`], [`is_unique_slice`], [`unique_slice`].
//!
//! Every check is generic over an [`Element`] and takes an [`Equivalence`]
//! strategy. Use [`Exact`] for integers and strings, and [`Epsilon`] for
//! floats:
//!
//! ```
//! use check::{is_value_in, which_values_in, Epsilon, Exact};
//!
//! assert!(is_value_in(&2, &[1, 2, 3], Exact));
//! assert!(is_value_in(&0.30001, &[0.1, 0.3], Epsilon(0.001)));
//!
//! let (values, found) = which_values_in(&[10, 20], &[10, 10, 50], Exact);
//! assert!(found);
//! assert_eq!(values[&10], vec![0, 1]);
//! ```
//!
//! Empty inputs never satisfy [`all`], [`any`] or the map-based checks. The
//! one exception is [`all_values_in`], where an empty first slice is always
//! contained.
//!
//! With the `tracing` feature, the heavier checks emit `tracing` spans and
//! events.

mod anyall;
mod compare;
mod equal;
mod error;
mod membership;
mod unique;

pub use crate::anyall::*;
pub use crate::compare::*;
pub use crate::equal::*;
pub use crate::error::*;
pub use crate::membership::*;
pub use crate::unique::*;
