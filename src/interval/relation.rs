// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::cmp::Ordering;

use super::{cmp_lower_by, cmp_upper_by, Bound, Interval};

/// The way in which two non-empty intervals relate to each other.
///
/// "First" and "second" refer to the two intervals after they have been put
/// in order by lower bound (and by upper bound when the lower bounds are
/// equal), not to the receiver and the argument of `relation_to`. The pieces
/// in each variant partition the union of the two intervals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IntervalRelation<T> {
    /// The intervals have a gap between them.
    Disjunct {
        /// The interval that comes first.
        first: Interval<T>,
        /// The interval that comes second.
        second: Interval<T>,
    },

    /// The intervals share no value but have no gap between them
    /// (e.g. `[1, 3)` and `[3, 5)`).
    Touching {
        /// The interval that comes first.
        first: Interval<T>,
        /// The interval that comes second.
        second: Interval<T>,
    },

    /// The intervals share some values but each has values the other lacks.
    Overlapping {
        /// The part of the first interval before the overlap.
        first_disjunct: Interval<T>,
        /// The shared part.
        overlap: Interval<T>,
        /// The part of the second interval after the overlap.
        second_disjunct: Interval<T>,
    },

    /// One interval lies strictly inside the other.
    Containing {
        /// The part of the outer interval before the inner interval.
        first_disjunct: Interval<T>,
        /// The inner interval.
        contained: Interval<T>,
        /// The part of the outer interval after the inner interval.
        second_disjunct: Interval<T>,
    },

    /// The intervals start at the same place but one ends first.
    Starting {
        /// The shorter interval.
        overlap: Interval<T>,
        /// The rest of the longer interval.
        disjunct: Interval<T>,
    },

    /// The intervals end at the same place but one starts later.
    Finishing {
        /// The start of the longer interval.
        disjunct: Interval<T>,
        /// The shorter interval.
        overlap: Interval<T>,
    },

    /// The intervals have the same bounds.
    Equal {
        /// The common interval.
        interval: Interval<T>,
    },
}

// What lies between the end of one interval and the start of the next.
#[derive(Debug, PartialEq)]
enum Junction {
    Gap,
    Touch,
    Overlap,
}

fn junction<T, F>(upper: &Bound<T>, lower: &Bound<T>, compare: &mut F) -> Junction
where
    F: FnMut(&T, &T) -> Ordering,
{
    let values = match (upper.value(), lower.value()) {
        (Some(u), Some(l)) => compare(u, l),
        _ => return Junction::Overlap,
    };

    match values {
        Ordering::Less => Junction::Gap,
        Ordering::Greater => Junction::Overlap,
        Ordering::Equal => match (upper, lower) {
            (&Bound::Inclusive(_), &Bound::Inclusive(_)) => Junction::Overlap,
            (&Bound::Exclusive(_), &Bound::Exclusive(_)) => Junction::Gap,
            _ => Junction::Touch,
        },
    }
}

pub(super) fn classify<T, F>(
    lhs: &Interval<T>,
    rhs: &Interval<T>,
    mut compare: F,
) -> IntervalRelation<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let lower_order = cmp_lower_by(&lhs.lower, &rhs.lower, &mut compare);
    let upper_order = cmp_upper_by(&lhs.upper, &rhs.upper, &mut compare);

    if lower_order == Ordering::Equal && upper_order == Ordering::Equal {
        return IntervalRelation::Equal {
            interval: lhs.clone(),
        };
    }

    let (first, second) = match lower_order.then(upper_order) {
        Ordering::Greater => (rhs, lhs),
        _ => (lhs, rhs),
    };

    match junction(&first.upper, &second.lower, &mut compare) {
        Junction::Gap => {
            return IntervalRelation::Disjunct {
                first: first.clone(),
                second: second.clone(),
            }
        }
        Junction::Touch => {
            return IntervalRelation::Touching {
                first: first.clone(),
                second: second.clone(),
            }
        }
        Junction::Overlap => {}
    }

    let piece = |lower: Bound<T>, upper: Bound<T>| Interval::from_bounds_unchecked(lower, upper);

    if lower_order == Ordering::Equal {
        IntervalRelation::Starting {
            overlap: first.clone(),
            disjunct: piece(first.upper.flip(), second.upper.clone()),
        }
    } else if upper_order == Ordering::Equal {
        IntervalRelation::Finishing {
            disjunct: piece(first.lower.clone(), second.lower.flip()),
            overlap: second.clone(),
        }
    } else if cmp_upper_by(&first.upper, &second.upper, &mut compare) == Ordering::Greater {
        IntervalRelation::Containing {
            first_disjunct: piece(first.lower.clone(), second.lower.flip()),
            contained: second.clone(),
            second_disjunct: piece(second.upper.flip(), first.upper.clone()),
        }
    } else {
        IntervalRelation::Overlapping {
            first_disjunct: piece(first.lower.clone(), second.lower.flip()),
            overlap: piece(second.lower.clone(), first.upper.clone()),
            second_disjunct: piece(first.upper.flip(), second.upper.clone()),
        }
    }
}

impl<T> IntervalRelation<T> {
    /// The pieces of the relation in order from least to greatest.
    pub fn pieces(&self) -> Vec<&Interval<T>> {
        use self::IntervalRelation::*;

        match *self {
            Disjunct {
                ref first,
                ref second,
            }
            | Touching {
                ref first,
                ref second,
            } => vec![first, second],
            Overlapping {
                ref first_disjunct,
                ref overlap,
                ref second_disjunct,
            } => vec![first_disjunct, overlap, second_disjunct],
            Containing {
                ref first_disjunct,
                ref contained,
                ref second_disjunct,
            } => vec![first_disjunct, contained, second_disjunct],
            Starting {
                ref overlap,
                ref disjunct,
            } => vec![overlap, disjunct],
            Finishing {
                ref disjunct,
                ref overlap,
            } => vec![disjunct, overlap],
            Equal { ref interval } => vec![interval],
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use testutils::{iv, ArbInterval};

    #[test]
    fn relation_with_gap_is_disjunct() {
        let sut = iv("1..3").relation_to(&iv("5..8"));

        assert_eq!(
            sut,
            IntervalRelation::Disjunct {
                first: iv("1..3"),
                second: iv("5..8"),
            }
        );
    }

    #[test]
    fn relation_exclusive_exclusive_at_same_value_is_disjunct() {
        let lhs = iv("1..3");
        let rhs = Interval::new(Bound::Exclusive(3), Bound::Inclusive(5)).unwrap();

        let sut = lhs.relation_to(&rhs);

        assert_matches!(sut, IntervalRelation::Disjunct { .. });
    }

    #[test]
    fn relation_exclusive_inclusive_at_same_value_is_touching() {
        let sut = iv("1..3").relation_to(&iv("3..5"));

        assert_eq!(
            sut,
            IntervalRelation::Touching {
                first: iv("1..3"),
                second: iv("3..5"),
            }
        );
    }

    #[test]
    fn relation_inclusive_inclusive_at_same_value_is_overlapping() {
        let sut = iv("4..=6").relation_to(&iv("6..8"));

        assert_eq!(
            sut,
            IntervalRelation::Overlapping {
                first_disjunct: iv("4..6"),
                overlap: iv("6..=6"),
                second_disjunct: Interval::new(Bound::Exclusive(6), Bound::Exclusive(8)).unwrap(),
            }
        );
    }

    #[test]
    fn relation_partial_overlap_is_overlapping() {
        let sut = iv("2..6").relation_to(&iv("4..9"));

        assert_eq!(
            sut,
            IntervalRelation::Overlapping {
                first_disjunct: iv("2..4"),
                overlap: iv("4..6"),
                second_disjunct: iv("6..9"),
            }
        );
    }

    #[test]
    fn relation_strictly_inside_is_containing() {
        let sut = iv("2..10").relation_to(&iv("4..7"));

        assert_eq!(
            sut,
            IntervalRelation::Containing {
                first_disjunct: iv("2..4"),
                contained: iv("4..7"),
                second_disjunct: iv("7..10"),
            }
        );
    }

    #[test]
    fn relation_same_start_is_starting() {
        let sut = iv("4..8").relation_to(&iv("4..6"));

        assert_eq!(
            sut,
            IntervalRelation::Starting {
                overlap: iv("4..6"),
                disjunct: iv("6..8"),
            }
        );
    }

    #[test]
    fn relation_same_end_is_finishing() {
        let sut = iv("6..8").relation_to(&iv("4..8"));

        assert_eq!(
            sut,
            IntervalRelation::Finishing {
                disjunct: iv("4..6"),
                overlap: iv("6..8"),
            }
        );
    }

    #[test]
    fn relation_same_bounds_is_equal() {
        let sut = iv("4..8").relation_to(&iv("4..8"));

        assert_eq!(sut, IntervalRelation::Equal { interval: iv("4..8") });
    }

    #[test]
    fn relation_unbounded_sides_overlap() {
        let sut = iv("..5").relation_to(&iv("3.."));

        assert_eq!(
            sut,
            IntervalRelation::Overlapping {
                first_disjunct: iv("..3"),
                overlap: iv("3..5"),
                second_disjunct: iv("5.."),
            }
        );
    }

    #[test]
    fn relation_full_interval_contains_bounded() {
        let sut = iv("..").relation_to(&iv("3..=5"));

        assert_eq!(
            sut,
            IntervalRelation::Containing {
                first_disjunct: iv("..3"),
                contained: iv("3..=5"),
                second_disjunct: Interval::new(Bound::Exclusive(5), Bound::Unbounded).unwrap(),
            }
        );
    }

    #[test]
    fn relation_by_uses_supplied_order() {
        let lhs = Interval::singleton("ABC".to_string());
        let rhs = Interval::singleton("abc".to_string());
        let case_insensitive = |a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase());

        let sut = lhs.relation_to_by(&rhs, case_insensitive);

        assert_matches!(sut, IntervalRelation::Equal { .. });
    }

    quickcheck! {
        fn prop_relation_is_symmetric(lhs: ArbInterval, rhs: ArbInterval) -> bool {
            lhs.0.relation_to(&rhs.0) == rhs.0.relation_to(&lhs.0)
        }

        fn prop_relation_pieces_are_not_empty(lhs: ArbInterval, rhs: ArbInterval) -> bool {
            lhs.0.relation_to(&rhs.0).pieces().iter().all(|piece| !piece.is_empty())
        }

        fn prop_relation_pieces_cover_both_inputs(lhs: ArbInterval, rhs: ArbInterval, probe: i8) -> bool {
            let relation = lhs.0.relation_to(&rhs.0);
            let in_inputs = lhs.0.contains(&probe) || rhs.0.contains(&probe);
            let hits = relation.pieces().iter().filter(|piece| piece.contains(&probe)).count();

            if in_inputs { hits == 1 } else { hits == 0 }
        }
    }
}
