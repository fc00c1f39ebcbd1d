// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Abstract interface for mutable finite automata.
//!
//! The `Automaton` trait is the view that the later stages of the lexer
//! generator (determinization and minimization) have of an automaton. It is
//! a mutable graph: states with an optional initial state and a set of
//! accepting states, and labeled transitions between them. Mutations never
//! fail. They report through their `bool` return value whether they changed
//! anything.

use std::collections::{HashSet, VecDeque};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use interval::Interval;

/// A handle to a state of an automaton.
///
/// States are allocated with increasing indices and an index is never reused
/// within one automaton, so a handle to a removed state never refers to a
/// different state later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State(usize);

impl State {
    pub(crate) fn new(index: usize) -> State {
        State(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

impl Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// The label on a transition of an interval-keyed automaton.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label<T> {
    /// A transition taken without consuming a symbol.
    Epsilon,
    /// A transition taken on any symbol in the interval.
    Interval(Interval<T>),
}

impl<T> Label<T> {
    /// Checks if this is an epsilon label.
    pub fn is_epsilon(&self) -> bool {
        match *self {
            Label::Epsilon => true,
            Label::Interval(_) => false,
        }
    }
}

impl<T> From<Interval<T>> for Label<T> {
    fn from(interval: Interval<T>) -> Self {
        Label::Interval(interval)
    }
}

impl<T: Display> Display for Label<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Label::Epsilon => write!(f, "ε"),
            Label::Interval(ref interval) => write!(f, "{}", interval),
        }
    }
}

/// A labeled edge between two states.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transition<S, L> {
    /// The state the transition leaves.
    pub from: S,
    /// The label of the transition.
    pub label: L,
    /// The state the transition enters.
    pub to: S,
}

impl<S, L> Transition<S, L> {
    /// Creates a transition.
    pub fn new(from: S, label: L, to: S) -> Transition<S, L> {
        Transition { from, label, to }
    }
}

/// A mutable finite automaton.
pub trait Automaton {
    /// The handle type for the states.
    type State: Copy + Eq + Hash + Debug;

    /// The type of the transition labels.
    type Label: Clone + PartialEq + Debug;

    /// The initial state, if one has been set.
    fn initial_state(&self) -> Option<Self::State>;

    /// Makes `state` the initial state, adding it to the automaton if it is
    /// not already there.
    fn set_initial_state(&mut self, state: Self::State);

    /// All of the states of the automaton.
    fn states(&self) -> Vec<Self::State>;

    /// Checks if `state` is a state of the automaton.
    fn contains_state(&self, state: Self::State) -> bool;

    /// All of the accepting states of the automaton.
    fn accepting_states(&self) -> Vec<Self::State>;

    /// Checks if `state` is an accepting state.
    fn is_accepting(&self, state: Self::State) -> bool;

    /// Makes `state` an accepting state, adding it to the automaton if it is
    /// not already there.
    ///
    /// Returns `false` if `state` was already accepting.
    fn add_accepting(&mut self, state: Self::State) -> bool;

    /// Makes `state` a non-accepting state.
    ///
    /// Returns `false` if `state` was not accepting. The state itself stays
    /// in the automaton.
    fn remove_accepting(&mut self, state: Self::State) -> bool;

    /// The transitions that leave `state`.
    ///
    /// A state that is not in the automaton has no transitions.
    fn transitions_from(&self, state: Self::State) -> Vec<Transition<Self::State, Self::Label>>;

    /// Adds a transition from `from` to `to` on `on`, adding either state to
    /// the automaton if it is not already there.
    ///
    /// Returns `false` if the automaton already had exactly this transition.
    fn add_transition(&mut self, from: Self::State, on: Self::Label, to: Self::State) -> bool;

    /// Removes the transition from `from` to `to` on `on`.
    ///
    /// Returns `false` if there was no such transition. The states stay in
    /// the automaton even if this leaves them with no transitions.
    fn remove_transition(&mut self, from: Self::State, on: &Self::Label, to: Self::State)
        -> bool;

    /// Removes `states` from the automaton along with every transition that
    /// enters or leaves them.
    ///
    /// A removed initial state leaves the automaton with no initial state and
    /// removed accepting states leave the accepting set.
    fn remove_states(&mut self, states: &HashSet<Self::State>);

    /// All of the transitions of the automaton.
    fn transitions(&self) -> Vec<Transition<Self::State, Self::Label>> {
        self.states()
            .into_iter()
            .flat_map(|state| self.transitions_from(state))
            .collect()
    }

    /// The states that can be reached from `seed` (including `seed`) in
    /// breadth first order.
    ///
    /// Nothing is reachable from a state that is not in the automaton.
    fn reachable_from(&self, seed: Self::State) -> Vec<Self::State> {
        if !self.contains_state(seed) {
            return Vec::new();
        }

        let mut visited = HashSet::new();
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        visited.insert(seed);
        queue.push_back(seed);

        while let Some(state) = queue.pop_front() {
            order.push(state);
            for transition in self.transitions_from(state) {
                if visited.insert(transition.to) {
                    queue.push_back(transition.to);
                }
            }
        }

        order
    }

    /// Removes every state that cannot be reached from `seed` along with
    /// their transitions.
    ///
    /// Returns `false` if every state was reachable (and so nothing changed).
    fn remove_unreachable_from(&mut self, seed: Self::State) -> bool {
        let reachable: HashSet<_> = self.reachable_from(seed).into_iter().collect();
        let unreachable: HashSet<_> = self.states()
            .into_iter()
            .filter(|state| !reachable.contains(state))
            .collect();

        if unreachable.is_empty() {
            return false;
        }

        trace!(
            "removing {} states unreachable from {:?}",
            unreachable.len(),
            seed
        );
        self.remove_states(&unreachable);
        true
    }

    /// Removes every state that cannot be reached from the initial state.
    ///
    /// Returns `false` without changing anything if there is no initial
    /// state.
    fn remove_unreachable(&mut self) -> bool {
        match self.initial_state() {
            Some(initial) => self.remove_unreachable_from(initial),
            None => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use dense::DenseNfa;
    use testutils::iv;

    fn sample() -> (DenseNfa<i32>, Vec<State>) {
        let mut nfa = DenseNfa::new();
        let states: Vec<_> = (0..5).map(|_| nfa.new_state()).collect();

        // q0 -> q1 -> q2 and q3 -> q4, with q0 initial.
        nfa.set_initial_state(states[0]);
        nfa.add_transition(states[0], Label::from(iv("1..4")), states[1]);
        nfa.add_transition(states[1], Label::Epsilon, states[2]);
        nfa.add_transition(states[3], Label::from(iv("5..=5")), states[4]);
        nfa.add_accepting(states[2]);
        nfa.add_accepting(states[4]);

        (nfa, states)
    }

    #[test]
    fn add_transition_twice_is_true_then_false() {
        let mut sut = DenseNfa::new();
        let q0 = sut.new_state();
        let q1 = sut.new_state();

        let first = sut.add_transition(q0, Label::from(iv("1..4")), q1);
        let before = sut.transitions();
        let second = sut.add_transition(q0, Label::from(iv("1..4")), q1);

        assert!(first);
        assert!(!second);
        assert_eq!(sut.transitions(), before);
    }

    #[test]
    fn add_then_remove_transitions_leaves_no_transitions() {
        let mut sut = DenseNfa::new();
        let q0 = sut.new_state();
        let q1 = sut.new_state();
        let labels = vec![Label::from(iv("1..4")), Label::Epsilon, Label::from(iv("2..9"))];

        for label in labels.iter() {
            sut.add_transition(q0, label.clone(), q1);
            sut.add_transition(q1, label.clone(), q0);
        }
        for label in labels.iter() {
            assert!(sut.remove_transition(q0, label, q1));
            assert!(sut.remove_transition(q1, label, q0));
        }

        assert!(sut.transitions().is_empty());
        assert_eq!(sut.states(), vec![q0, q1]);
    }

    #[test]
    fn remove_missing_transition_is_false() {
        let (mut sut, states) = sample();

        assert!(!sut.remove_transition(states[0], &Label::Epsilon, states[1]));
    }

    #[test]
    fn transitions_from_unknown_state_is_empty() {
        let (sut, _) = sample();

        assert!(sut.transitions_from(State::new(42)).is_empty());
    }

    #[test]
    fn reachable_from_initial_is_breadth_first() {
        let (sut, states) = sample();

        let result = sut.reachable_from(states[0]);

        assert_eq!(result, vec![states[0], states[1], states[2]]);
    }

    #[test]
    fn reachable_from_unknown_state_is_empty() {
        let (sut, _) = sample();

        assert!(sut.reachable_from(State::new(42)).is_empty());
    }

    #[test]
    fn reachable_from_visits_cycle_once() {
        let mut sut = DenseNfa::<i32>::new();
        let q0 = sut.new_state();
        let q1 = sut.new_state();
        sut.add_transition(q0, Label::Epsilon, q1);
        sut.add_transition(q1, Label::Epsilon, q0);
        sut.add_transition(q1, Label::from(iv("0..1")), q1);

        let result = sut.reachable_from(q0);

        assert_eq!(result, vec![q0, q1]);
    }

    #[test]
    fn remove_unreachable_with_all_reachable_is_false_and_unchanged() {
        let (mut sut, states) = sample();
        sut.add_transition(states[2], Label::Epsilon, states[3]);
        let before = sut.transitions();

        let result = sut.remove_unreachable();

        assert!(!result);
        assert_eq!(sut.transitions(), before);
        assert_eq!(sut.states(), states);
    }

    #[test]
    fn remove_unreachable_removes_exactly_unreachable() {
        let (mut sut, states) = sample();

        let result = sut.remove_unreachable();

        assert!(result);
        assert_eq!(sut.states(), states[..3].to_vec());
        assert_eq!(sut.accepting_states(), vec![states[2]]);
        assert_eq!(sut.transitions().len(), 2);
        assert!(sut.transitions()
            .iter()
            .all(|t| t.from != states[3] && t.to != states[4]));
    }

    #[test]
    fn remove_unreachable_without_initial_is_false() {
        let mut sut = DenseNfa::<i32>::new();
        let q0 = sut.new_state();
        sut.new_state();

        let result = sut.remove_unreachable();

        assert!(!result);
        assert!(sut.contains_state(q0));
        assert_eq!(sut.len(), 2);
    }

    #[test]
    fn remove_unreachable_from_other_seed_clears_initial() {
        let (mut sut, states) = sample();

        let result = sut.remove_unreachable_from(states[3]);

        assert!(result);
        assert_eq!(sut.initial_state(), None);
        assert_eq!(sut.states(), vec![states[3], states[4]]);
        assert_eq!(sut.accepting_states(), vec![states[4]]);
    }

    #[test]
    fn remove_accepting_keeps_state() {
        let (mut sut, states) = sample();

        assert!(sut.remove_accepting(states[2]));
        assert!(!sut.remove_accepting(states[2]));
        assert!(sut.contains_state(states[2]));
        assert!(!sut.is_accepting(states[2]));
    }

    #[test]
    fn display_state_and_label() {
        assert_eq!(State::new(3).to_string(), "q3");
        assert_eq!(Label::from(iv("1..4")).to_string(), "[1, 4)");
        assert_eq!(Label::<i32>::Epsilon.to_string(), "ε");
    }
}
