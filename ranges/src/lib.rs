//! Sets of integers represented as sorted, disjoint, half-open ranges.
//!
//! The main entry point is [`RangeCollection`], which supports adding (union) and removing (difference)
//! ranges while always keeping a canonical representation: no stored range is empty and any two
//! stored ranges are separated by a gap.

pub mod bound;
pub mod collection;
pub mod params;
pub mod range;
pub mod script;

pub use bound::Bound;
pub use collection::{InvariantViolation, RangeCollection};
pub use range::{ParseError, Range, RangeError};
