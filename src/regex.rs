// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Abstract syntax trees for regular expressions.
//!
//! A `Regex` is a plain data type. The primitive variants are the ones that
//! Thompson construction knows how to build. The other variants are
//! conveniences that `desugar` rewrites in terms of the primitives.

use std::fmt::{self, Debug, Display};
use std::rc::Rc;

use itertools::Itertools;

use alphabet::Alphabet;
use automaton::State;
use dense::DenseNfa;
use error::{Error, Result};
use thompson;

/// A regular expression over the alphabet `A`.
///
/// Sub-expressions are shared through `Rc` so cloning a `Regex` is cheap.
/// Equality and hashing are structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Regex<A> {
    /// Matches the empty string.
    Empty,

    /// Matches no string at all.
    Nothing,

    /// Matches a single symbol.
    Literal(A),

    /// Matches any single symbol from the first to the second (inclusive).
    Range(A, A),

    /// Matches the first expression followed by the second.
    Seq(Rc<Regex<A>>, Rc<Regex<A>>),

    /// Matches either expression.
    Alt(Rc<Regex<A>>, Rc<Regex<A>>),

    /// Matches zero or more repetitions of the expression.
    Rep0(Rc<Regex<A>>),

    /// Matches the expression or the empty string.
    Opt(Rc<Regex<A>>),

    /// Matches one or more repetitions of the expression.
    Rep1(Rc<Regex<A>>),

    /// Matches from `min` to `max` repetitions of `inner` (or `min` or more
    /// if there is no `max`).
    Quantified {
        /// The repeated expression.
        inner: Rc<Regex<A>>,
        /// The least number of repetitions.
        min: usize,
        /// The greatest number of repetitions, if there is one.
        max: Option<usize>,
    },

    /// Matches exactly the sequence of symbols.
    Str(Vec<A>),

    /// Matches any single symbol in (or, if negated, not in) the ranges.
    Class {
        /// Whether the class matches the symbols outside the ranges.
        negated: bool,
        /// Inclusive ranges of symbols.
        ranges: Vec<(A, A)>,
    },
}

impl<A: Alphabet> Regex<A> {
    /// Creates an expression that matches the empty string.
    pub fn empty() -> Regex<A> {
        Regex::Empty
    }

    /// Creates an expression that matches nothing.
    pub fn nothing() -> Regex<A> {
        Regex::Nothing
    }

    /// Creates an expression that matches `symbol`.
    pub fn literal(symbol: A) -> Regex<A> {
        Regex::Literal(symbol)
    }

    /// Creates an expression that matches any symbol from `start` to `end`.
    ///
    /// If `end` is less than `start` then they will be reversed.
    pub fn range(start: A, end: A) -> Regex<A> {
        let (start, end) = ordered(start, end);
        Regex::Range(start, end)
    }

    /// Creates an expression that matches `first` followed by `second`.
    pub fn seq(first: Regex<A>, second: Regex<A>) -> Regex<A> {
        Regex::Seq(Rc::new(first), Rc::new(second))
    }

    /// Creates an expression that matches `first` or `second`.
    pub fn alt(first: Regex<A>, second: Regex<A>) -> Regex<A> {
        Regex::Alt(Rc::new(first), Rc::new(second))
    }

    /// Creates an expression that matches zero or more `inner`.
    pub fn rep0(inner: Regex<A>) -> Regex<A> {
        Regex::Rep0(Rc::new(inner))
    }

    /// Creates an expression that matches zero or one `inner`.
    pub fn opt(inner: Regex<A>) -> Regex<A> {
        Regex::Opt(Rc::new(inner))
    }

    /// Creates an expression that matches one or more `inner`.
    pub fn rep1(inner: Regex<A>) -> Regex<A> {
        Regex::Rep1(Rc::new(inner))
    }

    /// Creates an expression that matches from `min` to `max` repetitions of
    /// `inner`, or `min` or more if `max` is `None`.
    ///
    /// Returns `Error::InvalidQuantifier` if `max` is less than `min`.
    pub fn quantified(inner: Regex<A>, min: usize, max: Option<usize>) -> Result<Regex<A>> {
        if let Some(max) = max {
            if max < min {
                return Err(Error::InvalidQuantifier { min, max });
            }
        }

        Ok(Regex::Quantified {
            inner: Rc::new(inner),
            min,
            max,
        })
    }

    /// Creates an expression that matches exactly `symbols`.
    pub fn string<I>(symbols: I) -> Regex<A>
    where
        I: IntoIterator<Item = A>,
    {
        Regex::Str(symbols.into_iter().collect())
    }

    /// Creates an expression that matches any symbol in the ranges.
    ///
    /// Each range is inclusive and is reversed if its end is less than its
    /// start.
    pub fn class<I>(ranges: I) -> Regex<A>
    where
        I: IntoIterator<Item = (A, A)>,
    {
        Regex::Class {
            negated: false,
            ranges: ranges.into_iter().map(|(s, e)| ordered(s, e)).collect(),
        }
    }

    /// Creates an expression that matches any symbol not in the ranges.
    pub fn negated_class<I>(ranges: I) -> Regex<A>
    where
        I: IntoIterator<Item = (A, A)>,
    {
        Regex::Class {
            negated: true,
            ranges: ranges.into_iter().map(|(s, e)| ordered(s, e)).collect(),
        }
    }

    /// Checks if the expression is built from primitive variants alone.
    pub fn is_primitive(&self) -> bool {
        use self::Regex::*;

        match *self {
            Empty | Nothing | Literal(_) | Range(_, _) => true,
            Seq(ref first, ref second) | Alt(ref first, ref second) => {
                first.is_primitive() && second.is_primitive()
            }
            Rep0(ref inner) => inner.is_primitive(),
            Opt(_) | Rep1(_) | Quantified { .. } | Str(_) | Class { .. } => false,
        }
    }

    /// Rewrites the expression in terms of the primitive variants.
    ///
    /// Sequences and alternations that come from a single sugared variant
    /// are joined as balanced trees, so the depth of the result grows with
    /// the logarithm of the length of a string or the count of a quantifier.
    /// Repeated copies of a quantified expression share their nodes.
    pub fn desugar(&self) -> Regex<A> {
        use self::Regex::*;

        match *self {
            Empty => Empty,
            Nothing => Nothing,
            Literal(ref a) => Literal(a.clone()),
            Range(ref a, ref b) => Range(a.clone(), b.clone()),
            Seq(ref first, ref second) => Regex::seq(first.desugar(), second.desugar()),
            Alt(ref first, ref second) => Regex::alt(first.desugar(), second.desugar()),
            Rep0(ref inner) => Regex::rep0(inner.desugar()),
            Opt(ref inner) => Regex::alt(inner.desugar(), Empty),
            Rep1(ref inner) => {
                let inner = Rc::new(inner.desugar());
                Seq(inner.clone(), Rc::new(Rep0(inner)))
            }
            Quantified {
                ref inner,
                min,
                max,
            } => {
                let inner = Rc::new(inner.desugar());
                let required = repeat(&inner, min);
                let optional = match max {
                    Some(max) => {
                        let item = Rc::new(Alt(inner.clone(), Rc::new(Empty)));
                        repeat(&item, max.saturating_sub(min))
                    }
                    None => Some(Rc::new(Rep0(inner.clone()))),
                };

                match (required, optional) {
                    (Some(required), Some(optional)) => Seq(required, optional),
                    (Some(only), None) | (None, Some(only)) => unshare(only),
                    (None, None) => Empty,
                }
            }
            Str(ref symbols) => {
                let literals: Vec<_> = symbols
                    .iter()
                    .map(|a| Rc::new(Literal(a.clone())))
                    .collect();
                balance(&literals, &Seq).map_or(Empty, unshare)
            }
            Class {
                negated,
                ref ranges,
            } => {
                let ranges: Vec<_> = class_ranges(negated, ranges)
                    .into_iter()
                    .map(|(start, end)| Rc::new(range_or_literal(start, end)))
                    .collect();
                balance(&ranges, &Alt).map_or(Nothing, unshare)
            }
        }
    }

    /// The number of states that Thompson construction allocates for the
    /// expression.
    ///
    /// This is computed without desugaring. Returns `None` if the count
    /// would overflow `usize`.
    pub fn thompson_state_count(&self) -> Option<usize> {
        use self::Regex::*;

        match *self {
            Empty | Nothing | Literal(_) | Range(_, _) => Some(2),
            Seq(ref first, ref second) => first
                .thompson_state_count()?
                .checked_add(second.thompson_state_count()?),
            Alt(ref first, ref second) => first
                .thompson_state_count()?
                .checked_add(second.thompson_state_count()?)?
                .checked_add(2),
            Rep0(ref inner) => inner.thompson_state_count()?.checked_add(2),
            Opt(ref inner) => inner.thompson_state_count()?.checked_add(4),
            Rep1(ref inner) => inner
                .thompson_state_count()?
                .checked_mul(2)?
                .checked_add(2),
            Quantified {
                ref inner,
                min,
                max,
            } => {
                if min == 0 && max == Some(0) {
                    return Some(2);
                }

                let count = inner.thompson_state_count()?;
                let required = count.checked_mul(min)?;
                let optional = match max {
                    Some(max) => count.checked_add(4)?.checked_mul(max.saturating_sub(min))?,
                    None => count.checked_add(2)?,
                };
                required.checked_add(optional)
            }
            Str(ref symbols) if symbols.is_empty() => Some(2),
            Str(ref symbols) => symbols.len().checked_mul(2),
            Class {
                negated,
                ref ranges,
            } => {
                let ranges = class_ranges(negated, ranges).len();
                if ranges == 0 {
                    Some(2)
                } else {
                    // Two states for each range and two for each alternation
                    // that joins them.
                    ranges.checked_mul(4)?.checked_sub(2)
                }
            }
        }
    }

    /// Builds the expression into `nfa` by Thompson construction.
    ///
    /// Returns the start and end states of the new fragment. No transitions
    /// leave the end state. This has no state limit of its own; use a
    /// `thompson::Compiler` to construct with one.
    ///
    /// Returns `Error::StateLimitExceeded` if the number of states would
    /// overflow `usize`. In that case `nfa` is unchanged.
    pub fn thompson_construct(&self, nfa: &mut DenseNfa<A>) -> Result<(State, State)> {
        thompson::Compiler::new().construct(self, nfa)
    }
}

fn ordered<A: Ord>(start: A, end: A) -> (A, A) {
    if end < start {
        (end, start)
    } else {
        (start, end)
    }
}

fn range_or_literal<A: Alphabet>(start: A, end: A) -> Regex<A> {
    if start == end {
        Regex::Literal(start)
    } else {
        Regex::Range(start, end)
    }
}

// Joins the items with `combine` into a balanced tree. Returns `None` if
// there are no items.
fn balance<A, F>(items: &[Rc<Regex<A>>], combine: &F) -> Option<Rc<Regex<A>>>
where
    F: Fn(Rc<Regex<A>>, Rc<Regex<A>>) -> Regex<A>,
{
    match items.len() {
        0 => None,
        1 => Some(items[0].clone()),
        len => {
            let (front, back) = items.split_at(len / 2);
            let front = balance(front, combine)?;
            let back = balance(back, combine)?;
            Some(Rc::new(combine(front, back)))
        }
    }
}

// `count` copies of `item` in sequence. Both halves of an even count are the
// same `Rc`, so the number of distinct nodes is logarithmic in `count`.
fn repeat<A>(item: &Rc<Regex<A>>, count: usize) -> Option<Rc<Regex<A>>> {
    match count {
        0 => None,
        1 => Some(item.clone()),
        _ => {
            let half = repeat(item, count / 2)?;
            let doubled = Rc::new(Regex::Seq(half.clone(), half));
            if count % 2 == 0 {
                Some(doubled)
            } else {
                Some(Rc::new(Regex::Seq(item.clone(), doubled)))
            }
        }
    }
}

fn unshare<A: Clone>(regex: Rc<Regex<A>>) -> Regex<A> {
    Rc::try_unwrap(regex).unwrap_or_else(|shared| (*shared).clone())
}

// The sorted, disjoint, non-adjacent ranges of symbols that a class matches.
fn class_ranges<A: Alphabet>(negated: bool, ranges: &[(A, A)]) -> Vec<(A, A)> {
    let mut sorted = ranges.to_vec();
    sorted.sort();
    let merged: Vec<_> = sorted.into_iter().coalesce(coalesce_ranges).collect();

    if negated {
        complement(&merged)
    } else {
        merged
    }
}

// Merges two ranges that overlap or are adjacent. The ranges must be in
// order by their start.
fn coalesce_ranges<A: Alphabet>(
    lhs: (A, A),
    rhs: (A, A),
) -> ::std::result::Result<(A, A), ((A, A), (A, A))> {
    let joins = rhs.0.decrement().map_or(true, |before| before <= lhs.1);

    if joins {
        let end = if rhs.1 > lhs.1 { rhs.1 } else { lhs.1 };
        Ok((lhs.0, end))
    } else {
        Err((lhs, rhs))
    }
}

// The gaps between sorted, disjoint, non-adjacent ranges over the whole
// alphabet.
fn complement<A: Alphabet>(ranges: &[(A, A)]) -> Vec<(A, A)> {
    let mut gaps = Vec::new();
    let mut next = Some(A::min_value());

    for &(ref start, ref end) in ranges {
        if let (Some(from), Some(to)) = (next, start.decrement()) {
            if from <= to {
                gaps.push((from, to));
            }
        }
        next = end.increment();
    }

    if let Some(from) = next {
        gaps.push((from, A::max_value()));
    }

    gaps
}

impl<A: Debug> Regex<A> {
    fn fmt_operand(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Regex::Seq(..) | Regex::Alt(..) => write!(f, "({})", self),
            _ => write!(f, "{}", self),
        }
    }
}

impl<A: Debug> Display for Regex<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::Regex::*;

        match *self {
            Empty => write!(f, "()"),
            Nothing => write!(f, "[]"),
            Literal(ref a) => write!(f, "{:?}", a),
            Range(ref a, ref b) => write!(f, "[{:?}-{:?}]", a, b),
            Seq(ref first, ref second) => {
                match **first {
                    Alt(..) => write!(f, "({})", first)?,
                    _ => write!(f, "{}", first)?,
                }
                match **second {
                    Alt(..) => write!(f, "({})", second),
                    _ => write!(f, "{}", second),
                }
            }
            Alt(ref first, ref second) => write!(f, "{}|{}", first, second),
            Rep0(ref inner) => {
                inner.fmt_operand(f)?;
                write!(f, "*")
            }
            Opt(ref inner) => {
                inner.fmt_operand(f)?;
                write!(f, "?")
            }
            Rep1(ref inner) => {
                inner.fmt_operand(f)?;
                write!(f, "+")
            }
            Quantified {
                ref inner,
                min,
                max,
            } => {
                inner.fmt_operand(f)?;
                match max {
                    Some(max) => write!(f, "{{{},{}}}", min, max),
                    None => write!(f, "{{{},}}", min),
                }
            }
            Str(ref symbols) => {
                for symbol in symbols {
                    write!(f, "{:?}", symbol)?;
                }
                Ok(())
            }
            Class {
                negated,
                ref ranges,
            } => {
                write!(f, "[")?;
                if negated {
                    write!(f, "^")?;
                }
                for &(ref start, ref end) in ranges {
                    write!(f, "{:?}-{:?}", start, end)?;
                }
                write!(f, "]")
            }
        }
    }
}
