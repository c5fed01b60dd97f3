use crate::bound::{Bound, WideBound};
use crate::params::CHECK_INVARIANTS;
use crate::range::{ParseError, Range, RangeError};
use itertools::Itertools;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, trace};

/// Describes the first position at which a [`RangeCollection`] is not in canonical form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("empty range {range} at index {index}")]
    EmptyRange { index: usize, range: Range },
    #[error("ranges {left} and {right} at index {index} overlap, touch or are unordered")]
    NotSeparated { index: usize, left: Range, right: Range },
}

/// A set of integers represented as a sorted sequence of disjoint half-open ranges.
///
/// The stored ranges are always in canonical form:
///  - no stored range is empty,
///  - ranges are sorted in increasing order,
///  - two consecutive ranges are separated by a gap: `r[i].to() < r[i+1].from()`.
///
/// ```
/// use range_collection::RangeCollection;
/// let mut ranges = RangeCollection::new();
/// ranges.add(1, 5).unwrap();
/// ranges.add(10, 20).unwrap();
/// ranges.remove(3, 12).unwrap();
/// assert_eq!(ranges.to_string(), "[1, 3) [12, 20)");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct RangeCollection {
    ranges: Vec<Range>,
}

impl RangeCollection {
    pub fn new() -> RangeCollection {
        RangeCollection { ranges: Vec::new() }
    }

    /// Adds all values of `[from, to)` to the set.
    ///
    /// Adding an empty range has no effect. Fails without modifying the collection if `from > to`.
    pub fn add(&mut self, from: Bound, to: Bound) -> Result<(), RangeError> {
        let range = Range::new(from, to)?;
        self.add_range(range);
        Ok(())
    }

    /// Same as [`RangeCollection::add`] for floating point bounds, which must be integers.
    pub fn add_f64(&mut self, from: f64, to: f64) -> Result<(), RangeError> {
        let range = Range::try_from_f64(from, to)?;
        self.add_range(range);
        Ok(())
    }

    /// Removes all values of `[from, to)` from the set.
    ///
    /// Removing an empty range, or removing from an empty collection, has no effect.
    /// Fails without modifying the collection if `from > to`.
    pub fn remove(&mut self, from: Bound, to: Bound) -> Result<(), RangeError> {
        let range = Range::new(from, to)?;
        self.remove_range(range);
        Ok(())
    }

    /// Same as [`RangeCollection::remove`] for floating point bounds, which must be integers.
    pub fn remove_f64(&mut self, from: f64, to: f64) -> Result<(), RangeError> {
        let range = Range::try_from_f64(from, to)?;
        self.remove_range(range);
        Ok(())
    }

    /// Adds an already validated range to the set.
    pub fn add_range(&mut self, range: Range) {
        if range.is_empty() {
            debug!("ignoring addition of empty range {range}");
            return;
        }
        // first stored range that ends at or after the start of the new one (i.e. may touch it from the left)
        let first = self.after_last_where(|r| r.to() < range.from());
        // last stored range that starts at or before the end of the new one
        match self.last_index_where(|r| r.from() <= range.to()) {
            Some(last) if first <= last => {
                let merged = range.join(&self.ranges[first]).join(&self.ranges[last]);
                trace!("add {range}: merging [{first}, {last}] into {merged}");
                self.ranges.splice(first..=last, [merged]);
            }
            _ => {
                trace!("add {range}: inserting at {first}");
                self.ranges.insert(first, range);
            }
        }
        self.after_mutation();
    }

    /// Removes an already validated range from the set.
    pub fn remove_range(&mut self, range: Range) {
        if self.ranges.is_empty() || range.is_empty() {
            debug!("ignoring removal of {range} (empty range or collection)");
            return;
        }
        // first stored range that extends past the start of the removed one
        let first = self.after_last_where(|r| r.to() <= range.from());
        // last stored range that starts before the end of the removed one
        let last = match self.last_index_where(|r| r.from() < range.to()) {
            Some(last) if first <= last => last,
            _ => {
                debug!("ignoring removal of {range} (no intersection)");
                return;
            }
        };
        // all ranges strictly between first and last are fully covered by the removed range
        let mut remainders = self.ranges[first].exclude(&range);
        if first < last {
            remainders.extend(self.ranges[last].exclude(&range));
        }
        trace!("remove {range}: replacing [{first}, {last}] with {} ranges", remainders.len());
        self.ranges.splice(first..=last, remainders);
        self.after_mutation();
    }

    /// Returns the index of the last stored range for which `pred` holds, or `None` if it holds for none of them.
    ///
    /// The predicate must be monotonic over the stored ranges: true for a (possibly empty) prefix and false afterwards.
    fn last_index_where(&self, pred: impl FnMut(&Range) -> bool) -> Option<usize> {
        self.ranges.partition_point(pred).checked_sub(1)
    }

    /// Index immediately following the last stored range satisfying the monotonic `pred`.
    fn after_last_where(&self, pred: impl FnMut(&Range) -> bool) -> usize {
        self.last_index_where(pred).map_or(0, |i| i + 1)
    }

    fn after_mutation(&self) {
        if cfg!(debug_assertions) || CHECK_INVARIANTS.get() {
            if let Err(violation) = self.check_invariants() {
                panic!("Range collection is not canonical: {violation}\n  {self}");
            }
        }
    }

    /// Verifies that the stored ranges are non-empty, sorted and separated by gaps.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if let Some((index, range)) = self.ranges.iter().find_position(|r| r.is_empty()) {
            return Err(InvariantViolation::EmptyRange { index, range: *range });
        }
        for (index, (left, right)) in self.ranges.iter().tuple_windows().enumerate() {
            if left.to() >= right.from() {
                return Err(InvariantViolation::NotSeparated {
                    index,
                    left: *left,
                    right: *right,
                });
            }
        }
        Ok(())
    }

    /// Returns true if `value` is in one of the stored ranges.
    pub fn contains(&self, value: Bound) -> bool {
        let candidate = self.ranges.partition_point(|r| r.to() <= value);
        self.ranges.get(candidate).is_some_and(|r| r.contains(value))
    }

    /// Number of disjoint ranges in the collection.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Total number of values in the set.
    pub fn covered_len(&self) -> WideBound {
        self.ranges.iter().map(Range::len).fold(0, WideBound::saturating_add)
    }

    pub fn clear(&mut self) {
        self.ranges.clear()
    }

    /// Iterator on the stored ranges, by increasing values.
    pub fn iter(&self) -> std::slice::Iter<'_, Range> {
        self.ranges.iter()
    }

    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }
}

impl<'a> IntoIterator for &'a RangeCollection {
    type Item = &'a Range;
    type IntoIter = std::slice::Iter<'a, Range>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Range> for RangeCollection {
    fn extend<T: IntoIterator<Item = Range>>(&mut self, iter: T) {
        for range in iter {
            self.add_range(range)
        }
    }
}

impl FromIterator<Range> for RangeCollection {
    fn from_iter<T: IntoIterator<Item = Range>>(iter: T) -> Self {
        let mut collection = RangeCollection::new();
        collection.extend(iter);
        collection
    }
}

/// Space-separated list of the stored ranges, e.g. `[1, 5) [10, 20)`. Empty if the collection is empty.
impl Display for RangeCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ranges.iter().format(" "))
    }
}

impl FromStr for RangeCollection {
    type Err = ParseError;

    /// Parses a list of ranges in the format of the `Display` implementation.
    /// The ranges are added one by one so the input does not need to be canonical.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut collection = RangeCollection::new();
        let mut rest = s.trim_start();
        while !rest.is_empty() {
            let end = rest.find(')').ok_or_else(|| ParseError::Malformed { input: rest.to_string() })?;
            let range: Range = rest[..=end].parse()?;
            collection.add_range(range);
            rest = rest[end + 1..].trim_start();
        }
        Ok(collection)
    }
}
