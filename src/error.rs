// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::result;

/// The error type for building intervals, regular expressions and automata.
///
/// Mutating an automaton never produces an error. The operations that add or
/// remove states and transitions report whether they had an effect through
/// their `bool` return value instead.
#[derive(Debug, Fail)]
pub enum Error {
    /// An interval was constructed with a lower bound that is greater than
    /// its upper bound.
    ///
    /// The bounds are captured in their `Debug` rendering so that the error
    /// does not need to be generic over the element type of the interval.
    #[fail(
        display = "The interval lower bound {} is greater than its upper bound {}.",
        lower, upper
    )]
    InvalidRange {
        /// The offending lower bound.
        lower: String,
        /// The offending upper bound.
        upper: String,
    },

    /// A bounded repetition was constructed with a maximum that is less than
    /// its minimum.
    #[fail(
        display = "The repetition minimum {} is greater than its maximum {}.",
        min, max
    )]
    InvalidQuantifier {
        /// The minimum number of repetitions.
        min: usize,
        /// The maximum number of repetitions.
        max: usize,
    },

    /// Thompson construction would allocate more states than the configured
    /// limit allows.
    #[fail(
        display = "The automaton for the regular expression would exceed the limit of {} states.",
        limit
    )]
    StateLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
}

impl Error {
    pub(crate) fn invalid_range<T: ::std::fmt::Debug>(lower: &T, upper: &T) -> Error {
        Error::InvalidRange {
            lower: format!("{:?}", lower),
            upper: format!("{:?}", upper),
        }
    }
}

/// A specialized Result type for `luther-nfa` operations.
pub type Result<T> = result::Result<T, Error>;
