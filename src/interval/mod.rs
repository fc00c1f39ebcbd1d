// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Intervals over totally ordered types.
//!
//! An `Interval<T>` is a contiguous range of `T` given by a lower and an
//! upper `Bound<T>`. The element type may be dense (there is no assumption
//! that values have successors), so an exclusive bound at `v` means "up to,
//! but not including, `v`" and two intervals `[a, b)` and `[b, c)` touch
//! without overlapping.
//!
//! Operations that compare values come in two forms. The `_by` form takes an
//! explicit comparer and the plain form uses `Ord::cmp`. The comparer must
//! impose a total order on `T`; if it does not the results are unspecified.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::ops::{self, RangeBounds};

use error::{Error, Result};

pub use self::relation::IntervalRelation;

mod relation;

/// One side of an `Interval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound<T> {
    /// The interval extends without limit on this side.
    Unbounded,
    /// The interval ends at, and includes, the value.
    Inclusive(T),
    /// The interval ends at, but excludes, the value.
    Exclusive(T),
}

impl<T> Bound<T> {
    /// Gets the value of the bound, if there is one.
    pub fn value(&self) -> Option<&T> {
        match *self {
            Bound::Inclusive(ref v) | Bound::Exclusive(ref v) => Some(v),
            Bound::Unbounded => None,
        }
    }
}

impl<T: Clone> Bound<T> {
    // The bound on the other side of a cut at this bound. Cutting at an
    // inclusive bound leaves an exclusive bound on the other piece and
    // the other way around.
    fn flip(&self) -> Bound<T> {
        match *self {
            Bound::Unbounded => Bound::Unbounded,
            Bound::Inclusive(ref v) => Bound::Exclusive(v.clone()),
            Bound::Exclusive(ref v) => Bound::Inclusive(v.clone()),
        }
    }
}

impl<T> From<ops::Bound<T>> for Bound<T> {
    fn from(bound: ops::Bound<T>) -> Self {
        match bound {
            ops::Bound::Unbounded => Bound::Unbounded,
            ops::Bound::Included(v) => Bound::Inclusive(v),
            ops::Bound::Excluded(v) => Bound::Exclusive(v),
        }
    }
}

/// A contiguous range of a totally ordered type.
///
/// Intervals are immutable values. The derived equality and hashing are
/// structural: two intervals are equal when they have the same kinds of
/// bounds with equal values. Use `eq_by` to compare under some other order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    lower: Bound<T>,
    upper: Bound<T>,
}

impl<T> Interval<T> {
    /// Creates the interval that contains every value.
    pub fn full() -> Interval<T> {
        Interval {
            lower: Bound::Unbounded,
            upper: Bound::Unbounded,
        }
    }

    /// The lower bound of the interval.
    pub fn lower(&self) -> &Bound<T> {
        &self.lower
    }

    /// The upper bound of the interval.
    pub fn upper(&self) -> &Bound<T> {
        &self.upper
    }

    // Assembles pieces whose ordering is already known to hold.
    fn from_bounds_unchecked(lower: Bound<T>, upper: Bound<T>) -> Interval<T> {
        Interval { lower, upper }
    }
}

impl<T: Clone> Interval<T> {
    /// Creates the interval `[value, value]` that contains just `value`.
    pub fn singleton(value: T) -> Interval<T> {
        Interval {
            lower: Bound::Inclusive(value.clone()),
            upper: Bound::Inclusive(value),
        }
    }
}

impl<T: Debug> Interval<T> {
    /// Creates an interval from a lower and an upper bound using `compare`.
    ///
    /// Returns `Error::InvalidRange` if both bounds have values and the lower
    /// value is greater than the upper value. Bounds with equal values are
    /// accepted even if that makes the interval empty (e.g. `[x, x)`).
    pub fn new_by<F>(lower: Bound<T>, upper: Bound<T>, mut compare: F) -> Result<Interval<T>>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if let (Some(l), Some(u)) = (lower.value(), upper.value()) {
            if compare(l, u) == Ordering::Greater {
                return Err(Error::invalid_range(&lower, &upper));
            }
        }

        Ok(Interval { lower, upper })
    }
}

impl<T: Ord + Debug> Interval<T> {
    /// Creates an interval from a lower and an upper bound.
    ///
    /// This is `new_by` with the natural order of `T`.
    pub fn new(lower: Bound<T>, upper: Bound<T>) -> Result<Interval<T>> {
        Interval::new_by(lower, upper, Ord::cmp)
    }
}

impl<T: Ord> Interval<T> {
    /// Creates the closed interval `[a, b]`.
    ///
    /// If `b` is less than `a` then they will be reversed.
    pub fn closed(a: T, b: T) -> Interval<T> {
        let (lower, upper) = if b < a { (b, a) } else { (a, b) };

        Interval {
            lower: Bound::Inclusive(lower),
            upper: Bound::Inclusive(upper),
        }
    }
}

impl<T: Ord + Clone + Debug> Interval<T> {
    /// Creates an interval from Rust range syntax.
    ///
    /// `Interval::from_range(1..4)` is `[1, 4)`, `Interval::from_range('a'..='z')`
    /// is `['a', 'z']` and `Interval::from_range(..)` is the full interval.
    pub fn from_range<R: RangeBounds<T>>(range: R) -> Result<Interval<T>> {
        Interval::new(
            range.start_bound().cloned().into(),
            range.end_bound().cloned().into(),
        )
    }
}

impl<T> Interval<T> {
    /// Checks if `value` is in the interval, using `compare`.
    pub fn contains_by<F>(&self, value: &T, mut compare: F) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let above_lower = match self.lower {
            Bound::Unbounded => true,
            Bound::Inclusive(ref l) => compare(value, l) != Ordering::Less,
            Bound::Exclusive(ref l) => compare(value, l) == Ordering::Greater,
        };
        let below_upper = match self.upper {
            Bound::Unbounded => true,
            Bound::Inclusive(ref u) => compare(value, u) != Ordering::Greater,
            Bound::Exclusive(ref u) => compare(value, u) == Ordering::Less,
        };

        above_lower && below_upper
    }

    /// Checks if the interval contains no values, using `compare`.
    ///
    /// The element type is treated as dense, so `(x, y)` with `x < y` is not
    /// empty even if there is nothing between `x` and `y` in a discrete type.
    pub fn is_empty_by<F>(&self, mut compare: F) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match (&self.lower, &self.upper) {
            (&Bound::Inclusive(ref l), &Bound::Inclusive(ref u)) => {
                compare(l, u) == Ordering::Greater
            }
            (&Bound::Inclusive(ref l), &Bound::Exclusive(ref u))
            | (&Bound::Exclusive(ref l), &Bound::Inclusive(ref u))
            | (&Bound::Exclusive(ref l), &Bound::Exclusive(ref u)) => {
                compare(l, u) != Ordering::Less
            }
            _ => false,
        }
    }

    /// Checks if two intervals have the same bounds, comparing values with
    /// `compare`.
    pub fn eq_by<F>(&self, other: &Interval<T>, mut compare: F) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        bound_eq_by(&self.lower, &other.lower, &mut compare)
            && bound_eq_by(&self.upper, &other.upper, &mut compare)
    }
}

impl<T: Ord> Interval<T> {
    /// Checks if `value` is in the interval.
    pub fn contains(&self, value: &T) -> bool {
        self.contains_by(value, Ord::cmp)
    }

    /// Checks if the interval contains no values.
    pub fn is_empty(&self) -> bool {
        self.is_empty_by(Ord::cmp)
    }
}

impl<T: Clone> Interval<T> {
    /// Classifies how this interval relates to `other`, using `compare`.
    ///
    /// The two intervals are put into a canonical order (by lower bound, then
    /// by upper bound) before they are classified, so `a.relation_to_by(b)`
    /// and `b.relation_to_by(a)` give the same relation. Both intervals must
    /// be non-empty.
    pub fn relation_to_by<F>(&self, other: &Interval<T>, compare: F) -> IntervalRelation<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        relation::classify(self, other, compare)
    }
}

impl<T: Ord + Clone> Interval<T> {
    /// Classifies how this interval relates to `other`.
    ///
    /// This is `relation_to_by` with the natural order of `T`.
    pub fn relation_to(&self, other: &Interval<T>) -> IntervalRelation<T> {
        self.relation_to_by(other, Ord::cmp)
    }
}

impl<T: Display> Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.lower {
            Bound::Unbounded => write!(f, "(-inf, ")?,
            Bound::Inclusive(ref v) => write!(f, "[{}, ", v)?,
            Bound::Exclusive(ref v) => write!(f, "({}, ", v)?,
        }
        match self.upper {
            Bound::Unbounded => write!(f, "+inf)"),
            Bound::Inclusive(ref v) => write!(f, "{}]", v),
            Bound::Exclusive(ref v) => write!(f, "{})", v),
        }
    }
}

fn bound_eq_by<T, F>(lhs: &Bound<T>, rhs: &Bound<T>, compare: &mut F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    match (lhs, rhs) {
        (&Bound::Unbounded, &Bound::Unbounded) => true,
        (&Bound::Inclusive(ref l), &Bound::Inclusive(ref r))
        | (&Bound::Exclusive(ref l), &Bound::Exclusive(ref r)) => {
            compare(l, r) == Ordering::Equal
        }
        _ => false,
    }
}

/// Orders two lower bounds by the position where their intervals start.
///
/// An unbounded lower bound starts before everything and an inclusive bound
/// starts before an exclusive bound at the same value.
pub fn cmp_lower_by<T, F>(lhs: &Bound<T>, rhs: &Bound<T>, compare: &mut F) -> Ordering
where
    F: FnMut(&T, &T) -> Ordering,
{
    match (lhs, rhs) {
        (&Bound::Unbounded, &Bound::Unbounded) => Ordering::Equal,
        (&Bound::Unbounded, _) => Ordering::Less,
        (_, &Bound::Unbounded) => Ordering::Greater,
        (&Bound::Inclusive(ref l), &Bound::Exclusive(ref r)) => {
            compare(l, r).then(Ordering::Less)
        }
        (&Bound::Exclusive(ref l), &Bound::Inclusive(ref r)) => {
            compare(l, r).then(Ordering::Greater)
        }
        (&Bound::Inclusive(ref l), &Bound::Inclusive(ref r))
        | (&Bound::Exclusive(ref l), &Bound::Exclusive(ref r)) => compare(l, r),
    }
}

/// Orders two upper bounds by the position where their intervals end.
///
/// An unbounded upper bound ends after everything and an inclusive bound
/// ends after an exclusive bound at the same value.
pub fn cmp_upper_by<T, F>(lhs: &Bound<T>, rhs: &Bound<T>, compare: &mut F) -> Ordering
where
    F: FnMut(&T, &T) -> Ordering,
{
    match (lhs, rhs) {
        (&Bound::Unbounded, &Bound::Unbounded) => Ordering::Equal,
        (&Bound::Unbounded, _) => Ordering::Greater,
        (_, &Bound::Unbounded) => Ordering::Less,
        (&Bound::Inclusive(ref l), &Bound::Exclusive(ref r)) => {
            compare(l, r).then(Ordering::Greater)
        }
        (&Bound::Exclusive(ref l), &Bound::Inclusive(ref r)) => {
            compare(l, r).then(Ordering::Less)
        }
        (&Bound::Inclusive(ref l), &Bound::Inclusive(ref r))
        | (&Bound::Exclusive(ref l), &Bound::Exclusive(ref r)) => compare(l, r),
    }
}

/// Compares a value with a lower bound.
///
/// The result is `Less` if the value is below the start of any interval
/// with that lower bound and `Greater` otherwise. It is never `Equal`, which
/// makes it suitable for finding the partition point of a sequence sorted by
/// lower bound with `search::binary_search`.
pub fn cmp_value_to_lower_by<T, F>(value: &T, lower: &Bound<T>, compare: &mut F) -> Ordering
where
    F: FnMut(&T, &T) -> Ordering,
{
    let admitted = match *lower {
        Bound::Unbounded => true,
        Bound::Inclusive(ref l) => compare(value, l) != Ordering::Less,
        Bound::Exclusive(ref l) => compare(value, l) == Ordering::Greater,
    };

    if admitted {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use testutils::iv;

    #[test]
    fn full_interval_contains_everything() {
        let sut = Interval::<i32>::full();

        assert!(sut.contains(&i32::min_value()));
        assert!(sut.contains(&0));
        assert!(sut.contains(&i32::max_value()));
    }

    #[test]
    fn singleton_interval_contains_only_value() {
        let sut = Interval::singleton('x');

        assert!(sut.contains(&'x'));
        assert!(!sut.contains(&'w'));
        assert!(!sut.contains(&'y'));
    }

    #[test]
    fn new_with_lower_greater_than_upper_is_invalid_range() {
        let result = Interval::new(Bound::Inclusive(5), Bound::Exclusive(2));

        assert_matches!(result, Err(Error::InvalidRange { .. }));
    }

    #[test]
    fn new_with_equal_exclusive_bounds_is_empty_interval() {
        let sut = Interval::new(Bound::Inclusive(3), Bound::Exclusive(3))
            .expect("unexpected invalid range");

        assert!(sut.is_empty());
        assert!(!sut.contains(&3));
    }

    #[test]
    fn new_by_uses_supplied_order() {
        let reversed = |a: &i32, b: &i32| b.cmp(a);

        let result = Interval::new_by(Bound::Inclusive(5), Bound::Inclusive(2), reversed);

        let sut = result.expect("unexpected invalid range");
        assert!(sut.contains_by(&3, reversed));
        assert!(!sut.contains_by(&6, reversed));
    }

    #[test]
    fn new_with_unbounded_side_is_never_invalid() {
        assert!(Interval::new(Bound::Unbounded, Bound::Exclusive(-100)).is_ok());
        assert!(Interval::new(Bound::Exclusive(100), Bound::Unbounded).is_ok());
    }

    #[test]
    fn closed_with_reversed_values_is_reordered() {
        let sut = Interval::closed(9, 2);

        assert_eq!(sut, iv("2..=9"));
    }

    #[test]
    fn from_range_maps_range_syntax_bounds() {
        assert_eq!(iv("1..4"), Interval::from_range(1..4).unwrap());
        assert_eq!(iv("1..=4"), Interval::from_range(1..=4).unwrap());
        assert_eq!(iv("3.."), Interval::from_range(3..).unwrap());
        assert_eq!(iv(".."), Interval::<i32>::from_range(..).unwrap());
    }

    #[test]
    fn from_range_reversed_range_is_invalid_range() {
        let result = Interval::from_range('z'..'a');

        assert_matches!(result, Err(Error::InvalidRange { .. }));
    }

    #[test]
    fn half_open_interval_excludes_upper_value() {
        let sut = iv("1..4");

        assert!(sut.contains(&1));
        assert!(sut.contains(&3));
        assert!(!sut.contains(&4));
        assert!(!sut.contains(&0));
    }

    #[test]
    fn exclusive_bounds_with_gap_is_not_empty() {
        let sut = Interval::new(Bound::Exclusive(1), Bound::Exclusive(2)).unwrap();

        assert!(!sut.is_empty());
    }

    #[test]
    fn eq_by_compares_under_supplied_order() {
        let lhs = Interval::singleton("ABC".to_string());
        let rhs = Interval::singleton("abc".to_string());
        let case_insensitive = |a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase());

        assert!(lhs.eq_by(&rhs, case_insensitive));
        assert_ne!(lhs, rhs);
    }

    #[test]
    fn eq_by_distinguishes_bound_kinds() {
        assert!(!iv("1..4").eq_by(&iv("1..=4"), Ord::cmp));
    }

    #[test]
    fn display_uses_interval_notation() {
        assert_eq!(iv("1..4").to_string(), "[1, 4)");
        assert_eq!(iv("..=3").to_string(), "(-inf, 3]");
        assert_eq!(iv("..").to_string(), "(-inf, +inf)");
    }

    #[test]
    fn cmp_lower_inclusive_starts_before_exclusive() {
        let result = cmp_lower_by(&Bound::Inclusive(2), &Bound::Exclusive(2), &mut Ord::cmp);

        assert_eq!(result, Ordering::Less);
    }

    #[test]
    fn cmp_upper_inclusive_ends_after_exclusive() {
        let result = cmp_upper_by(&Bound::Inclusive(2), &Bound::Exclusive(2), &mut Ord::cmp);

        assert_eq!(result, Ordering::Greater);
    }

    #[test]
    fn cmp_value_to_lower_is_never_equal() {
        let mut cmp = Ord::cmp;

        assert_eq!(cmp_value_to_lower_by(&2, &Bound::Inclusive(2), &mut cmp), Ordering::Greater);
        assert_eq!(cmp_value_to_lower_by(&2, &Bound::Exclusive(2), &mut cmp), Ordering::Less);
        assert_eq!(cmp_value_to_lower_by(&2, &Bound::Unbounded, &mut cmp), Ordering::Greater);
    }
}
