// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Thompson construction of nondeterministic finite automata from regular
//! expressions.
//!
//! Each node of a `Regex` is built into a fragment of the automaton with a
//! fresh start state and end state. The fragments of the children of a node
//! are joined to the fragment of the node by epsilon transitions. Sugared
//! nodes are desugared before they are built.

use alphabet::Alphabet;
use automaton::{Automaton, Label, State};
use dense::DenseNfa;
use error::{Error, Result};
use interval::Interval;
use regex::Regex;

/// The configuration of a `Compiler`.
#[derive(Debug, Clone, Default)]
pub struct Config {
    state_limit: Option<usize>,
}

impl Config {
    /// Creates the default configuration, which has no state limit.
    pub fn new() -> Config {
        Config::default()
    }

    /// Sets the greatest number of states that one construction may add to
    /// an automaton.
    ///
    /// `None` (the default) means there is no limit.
    pub fn state_limit(mut self, limit: Option<usize>) -> Config {
        self.state_limit = limit;
        self
    }

    /// The configured state limit.
    pub fn get_state_limit(&self) -> Option<usize> {
        self.state_limit
    }
}

/// Builds automata from regular expressions by Thompson construction.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    config: Config,
}

impl Compiler {
    /// Creates a compiler with the default configuration.
    pub fn new() -> Compiler {
        Compiler::default()
    }

    /// Creates a compiler with the given configuration.
    pub fn with_config(config: Config) -> Compiler {
        Compiler { config }
    }

    /// Builds `regex` into `nfa` and returns the start and end states of the
    /// new fragment.
    ///
    /// The fragment is not connected to anything already in `nfa` and the
    /// initial and accepting states of `nfa` are left as they are.
    ///
    /// Returns `Error::StateLimitExceeded` if the construction would add more
    /// states than the configured limit (or more than `usize::MAX`). The
    /// check is made before anything is added, so on error `nfa` is
    /// unchanged.
    pub fn construct<A: Alphabet>(
        &self,
        regex: &Regex<A>,
        nfa: &mut DenseNfa<A>,
    ) -> Result<(State, State)> {
        let limit = self.config.state_limit.unwrap_or(usize::max_value());
        let count = match regex.thompson_state_count() {
            Some(count) if count <= limit => count,
            _ => return Err(Error::StateLimitExceeded { limit }),
        };

        let (start, end) = build(regex, nfa);
        debug!(
            "thompson construction added {} states (start {}, end {})",
            count, start, end
        );

        Ok((start, end))
    }

    /// Builds `regex` into a new automaton whose initial state is the start
    /// of the fragment and whose only accepting state is its end.
    pub fn compile<A: Alphabet>(&self, regex: &Regex<A>) -> Result<DenseNfa<A>> {
        let mut nfa = DenseNfa::new();
        let (start, end) = self.construct(regex, &mut nfa)?;

        nfa.set_initial_state(start);
        nfa.add_accepting(end);

        Ok(nfa)
    }
}

fn build<A: Alphabet>(regex: &Regex<A>, nfa: &mut DenseNfa<A>) -> (State, State) {
    Builder { nfa }.build(regex)
}

struct Builder<'a, A: 'a + Alphabet> {
    nfa: &'a mut DenseNfa<A>,
}

impl<'a, A: Alphabet> Builder<'a, A> {
    fn build(&mut self, regex: &Regex<A>) -> (State, State) {
        use regex::Regex::*;

        match *regex {
            Empty => {
                let (start, end) = self.fragment();
                self.epsilon(start, end);
                (start, end)
            }
            Nothing => self.fragment(),
            Literal(ref c) => self.symbol(Interval::singleton(c.clone())),
            Range(ref a, ref b) => self.symbol(Interval::closed(a.clone(), b.clone())),
            Seq(ref first, ref second) => {
                let (start1, end1) = self.build(first);
                let (start2, end2) = self.build(second);
                self.epsilon(end1, start2);
                (start1, end2)
            }
            Alt(ref first, ref second) => {
                let (start, end) = self.fragment();
                let (start1, end1) = self.build(first);
                let (start2, end2) = self.build(second);
                self.epsilon(start, start1);
                self.epsilon(start, start2);
                self.epsilon(end1, end);
                self.epsilon(end2, end);
                (start, end)
            }
            Rep0(ref inner) => {
                let (start, end) = self.fragment();
                let (inner_start, inner_end) = self.build(inner);
                self.epsilon(start, inner_start);
                self.epsilon(start, end);
                self.epsilon(inner_end, inner_start);
                self.epsilon(inner_end, end);
                (start, end)
            }
            Opt(_) | Rep1(_) | Quantified { .. } | Str(_) | Class { .. } => {
                self.build(&regex.desugar())
            }
        }
    }

    fn fragment(&mut self) -> (State, State) {
        (self.nfa.new_state(), self.nfa.new_state())
    }

    fn epsilon(&mut self, from: State, to: State) {
        self.nfa.add_transition(from, Label::Epsilon, to);
    }

    fn symbol(&mut self, interval: Interval<A>) -> (State, State) {
        let (start, end) = self.fragment();
        self.nfa.add_transition(start, Label::Interval(interval), end);
        (start, end)
    }
}
