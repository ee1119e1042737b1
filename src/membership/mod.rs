//! Membership checks: a single value, several values, or key-value pairs,
//! looked up in a slice or in a map.
//!
//! The `which_*` functions return the located indices or keys together with
//! a flag that is `true` when anything was found.

pub mod pairs;
pub mod value;
pub mod values;

pub use self::pairs::*;
pub use self::value::*;
pub use self::values::*;
