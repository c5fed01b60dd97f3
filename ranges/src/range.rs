use crate::bound::{bound_from_f64, span, Bound, WideBound};
use smallvec::SmallVec;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Error raised when attempting to build a [`Range`] from invalid bounds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// At least one of the bounds is not an integer (NaN, infinite, fractional or non-numeric text).
    #[error("invalid bounds: from ({from}) and to ({to}) should be integers")]
    InvalidBounds { from: String, to: String },
    #[error("inverted bounds: from ({from}) can't be greater than to ({to})")]
    InvertedBounds { from: Bound, to: Bound },
}

impl RangeError {
    pub(crate) fn invalid(from: impl ToString, to: impl ToString) -> Self {
        RangeError::InvalidBounds {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Error raised when parsing the textual representation of a range or of a collection of ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed range: \"{input}\", expected \"[from, to)\"")]
    Malformed { input: String },
    #[error(transparent)]
    Range(#[from] RangeError),
}

/// A half-open integer interval `[from, to)`.
///
/// The interval contains all values `x` such that `from <= x < to`.
/// A range with `from == to` is valid and empty.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Range {
    from: Bound,
    to: Bound,
}

impl Range {
    /// Creates the range `[from, to)`.
    ///
    /// Fails with [`RangeError::InvertedBounds`] if `from > to`.
    pub fn new(from: Bound, to: Bound) -> Result<Range, RangeError> {
        if from > to {
            return Err(RangeError::InvertedBounds { from, to });
        }
        Ok(Range { from, to })
    }

    /// Creates a range from floating point bounds, as typically received from loosely typed sources.
    ///
    /// Fails with [`RangeError::InvalidBounds`] if any bound is not an integer representable as a [`Bound`].
    pub fn try_from_f64(from: f64, to: f64) -> Result<Range, RangeError> {
        match (bound_from_f64(from), bound_from_f64(to)) {
            (Some(lb), Some(ub)) => Range::new(lb, ub),
            _ => Err(RangeError::invalid(from, to)),
        }
    }

    pub fn from(&self) -> Bound {
        self.from
    }

    pub fn to(&self) -> Bound {
        self.to
    }

    /// Number of values in the range.
    pub fn len(&self) -> WideBound {
        span(self.from, self.to)
    }

    /// Returns true if the range contains no value, i.e., `from == to`.
    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }

    /// Returns true if `value` is in `[from, to)`. The upper bound is excluded.
    pub fn contains(&self, value: Bound) -> bool {
        self.from <= value && value < self.to
    }

    /// Returns true if the two ranges overlap or are adjacent.
    ///
    /// Adjacent ranges such as `[1, 5)` and `[5, 8)` are considered touching as their union `[1, 8)` has no gap.
    pub fn intersects_or_touches(&self, other: &Range) -> bool {
        self.contains(other.from)
            || self.contains(other.to)
            || other.contains(self.from)
            || self.from == other.to
            || self.to == other.from
    }

    /// Returns the smallest range covering both `self` and `other` if they intersect or touch.
    /// Otherwise, `self` is returned unchanged.
    pub fn join(&self, other: &Range) -> Range {
        if self.intersects_or_touches(other) {
            Range {
                from: self.from.min(other.from),
                to: self.to.max(other.to),
            }
        } else {
            *self
        }
    }

    /// Returns the parts of `self` that are not covered by `other`, in increasing order.
    ///
    /// The result has no element if `self` ends inside `other` and starts inside or at the start of `other`.
    /// Note that the case where `self` is strictly inside `other` without sharing its start is not handled
    /// and must be excluded by the caller.
    pub fn exclude(&self, other: &Range) -> SmallVec<[Range; 2]> {
        let mut remainders = SmallVec::new();
        if self.contains(other.from) && other.from != self.from {
            remainders.push(Range {
                from: self.from,
                to: other.from,
            });
        }
        if self.contains(other.to) {
            remainders.push(Range {
                from: other.to,
                to: self.to,
            });
        }
        remainders
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.from, self.to)
    }
}

impl FromStr for Range {
    type Err = ParseError;

    /// Parses a range in the format produced by its `Display` implementation: `[from, to)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseError::Malformed { input: s.to_string() };
        let inner = s
            .trim()
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(')'))
            .ok_or_else(malformed)?;
        let (from, to) = inner.split_once(',').ok_or_else(malformed)?;
        let (from, to) = (from.trim(), to.trim());
        match (from.parse::<Bound>(), to.parse::<Bound>()) {
            (Ok(from), Ok(to)) => Ok(Range::new(from, to)?),
            _ => Err(RangeError::invalid(from, to).into()),
        }
    }
}

impl TryFrom<std::ops::Range<Bound>> for Range {
    type Error = RangeError;

    fn try_from(value: std::ops::Range<Bound>) -> Result<Self, Self::Error> {
        Range::new(value.start, value.end)
    }
}

impl From<Range> for std::ops::Range<Bound> {
    fn from(value: Range) -> Self {
        value.from..value.to
    }
}
