// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! A library for building nondeterministic finite automata with interval
//! labeled transitions from regular expressions.
//!
//! This is the front half of a lexer generator. A `Regex` over some
//! `Alphabet` is built by Thompson construction into a `DenseNfa`, whose
//! transitions are labeled with `Interval`s of symbols rather than single
//! symbols. The later stages (determinization and minimization) work
//! against the `Automaton` trait.
//!
//! ```
//! extern crate luther_nfa;
//!
//! use luther_nfa::regex::Regex;
//! use luther_nfa::thompson::Compiler;
//!
//! # fn main() {
//! let ident = Regex::seq(
//!     Regex::class(vec![('a', 'z'), ('_', '_')]),
//!     Regex::rep0(Regex::class(vec![('a', 'z'), ('0', '9'), ('_', '_')])),
//! );
//! let nfa = Compiler::new().compile(&ident).unwrap();
//!
//! assert!(nfa.accepts("foo_42".chars()));
//! assert!(!nfa.accepts("42foo".chars()));
//! # }
//! ```

#![deny(missing_docs)]

#[macro_use]
extern crate failure;
extern crate itertools;
#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

pub mod alphabet;
pub mod automaton;
pub mod dense;
pub mod interval;
pub mod regex;
pub mod search;
pub mod thompson;

mod error;

#[cfg(test)]
mod testutils;

pub use alphabet::Alphabet;
pub use automaton::{Automaton, Label, State, Transition};
pub use dense::DenseNfa;
pub use error::{Error, Result};
pub use interval::{Bound, Interval, IntervalRelation};
pub use regex::Regex;
