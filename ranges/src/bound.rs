#[cfg(all(not(feature = "i32"), not(feature = "i128")))]
mod types {
    /// Type representing the bound of a range.
    pub type Bound = i64;

    /// Type used to accumulate lengths of ranges without overflow.
    pub type WideBound = i128;

    /// Name of the `Bound` underlying type
    pub const BOUND_TYPE_NAME: &str = "i64";
}

#[cfg(all(feature = "i32", not(feature = "i128")))]
mod types {
    /// Type representing the bound of a range.
    pub type Bound = i32;

    /// Type used to accumulate lengths of ranges without overflow.
    pub type WideBound = i64;

    /// Name of the `Bound` underlying type
    pub const BOUND_TYPE_NAME: &str = "i32";
}

#[cfg(feature = "i128")]
mod types {
    /// Type representing the bound of a range.
    pub type Bound = i128;

    /// Type used to accumulate lengths of ranges.
    /// Lengths close to the full `i128` span may saturate.
    pub type WideBound = i128;

    /// Name of the `Bound` underlying type
    pub const BOUND_TYPE_NAME: &str = "i128";
}

pub use types::*;

/// Converts a floating point value into a [`Bound`].
///
/// Returns `None` if the value is NaN, infinite, has a fractional part or does not fit into a [`Bound`].
pub fn bound_from_f64(value: f64) -> Option<Bound> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    // `as` saturates, so out of range values are detected by comparing back
    let bound = value as Bound;
    if (bound as f64) == value && value >= Bound::MIN as f64 && value < -(Bound::MIN as f64) {
        Some(bound)
    } else {
        None
    }
}

/// Length of the half-open interval `[from, to)`, computed without overflow.
pub(crate) fn span(from: Bound, to: Bound) -> WideBound {
    (to as WideBound).saturating_sub(from as WideBound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_conversion() {
        assert_eq!(bound_from_f64(0.0), Some(0));
        assert_eq!(bound_from_f64(-12.0), Some(-12));
        assert_eq!(bound_from_f64(1.5), None);
        assert_eq!(bound_from_f64(f64::NAN), None);
        assert_eq!(bound_from_f64(f64::INFINITY), None);
        assert_eq!(bound_from_f64(f64::NEG_INFINITY), None);
        assert_eq!(bound_from_f64(1e300), None);
    }

    #[test]
    fn span_does_not_overflow() {
        assert_eq!(span(1, 5), 4);
        assert!(span(Bound::MIN, Bound::MAX) > 0);
    }
}
