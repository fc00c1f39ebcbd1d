// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! A nondeterministic finite automaton with interval labeled transitions.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};
use std::fmt::Debug;

use automaton::{Automaton, Label, State, Transition};
use interval::{cmp_lower_by, cmp_value_to_lower_by, Interval};
use search::binary_search;

/// A nondeterministic finite automaton whose transitions are labeled with
/// intervals of symbols (or epsilon).
///
/// The states are kept in an arena indexed by `State`. Each state keeps its
/// symbol transitions sorted by the lower bound of their interval so that
/// the transitions on a given symbol can be found by binary search.
///
/// Transitions with overlapping, but distinct, intervals may leave the same
/// state. They are kept as they are and are not merged or split.
#[derive(Debug, Clone)]
pub struct DenseNfa<T> {
    states: Vec<Option<StateTransitions<T>>>,
    live: usize,
    initial: Option<State>,
    accepting: HashSet<State>,
}

#[derive(Debug, Clone)]
struct StateTransitions<T> {
    symbols: Vec<(Interval<T>, State)>,
    epsilons: Vec<State>,
}

impl<T> StateTransitions<T> {
    fn new() -> StateTransitions<T> {
        StateTransitions {
            symbols: Vec::new(),
            epsilons: Vec::new(),
        }
    }
}

impl<T: Ord + Clone + Debug> Default for DenseNfa<T> {
    fn default() -> Self {
        DenseNfa::new()
    }
}

impl<T: Ord + Clone + Debug> DenseNfa<T> {
    /// Creates an automaton with no states.
    pub fn new() -> DenseNfa<T> {
        DenseNfa {
            states: Vec::new(),
            live: 0,
            initial: None,
            accepting: HashSet::new(),
        }
    }

    /// Adds a fresh state with no transitions.
    pub fn new_state(&mut self) -> State {
        let state = State::new(self.states.len());
        self.states.push(Some(StateTransitions::new()));
        self.live += 1;
        state
    }

    /// The number of states in the automaton.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Checks if the automaton has no states.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// The symbol transitions that leave `state`, sorted by the lower bound
    /// of their interval.
    pub fn symbol_transitions(&self, state: State) -> &[(Interval<T>, State)] {
        self.record(state)
            .map(|record| &record.symbols[..])
            .unwrap_or(&[])
    }

    /// The targets of the epsilon transitions that leave `state`.
    pub fn epsilon_transitions(&self, state: State) -> &[State] {
        self.record(state)
            .map(|record| &record.epsilons[..])
            .unwrap_or(&[])
    }

    /// The targets of the symbol transitions that leave `state` on `symbol`.
    ///
    /// The targets are sorted and each appears once even if more than one
    /// transition to it admits `symbol`.
    pub fn transitions_on(&self, state: State, symbol: &T) -> Vec<State> {
        let symbols = self.symbol_transitions(state);

        // Every transition before the partition point has a lower bound that
        // admits the symbol.
        let (end, _) = binary_search(
            symbols,
            symbol,
            |&(ref interval, _)| interval.lower(),
            |value, lower| cmp_value_to_lower_by(value, *lower, &mut Ord::cmp),
        );

        let mut targets: Vec<_> = symbols[..end]
            .iter()
            .filter(|&&(ref interval, _)| interval.contains(symbol))
            .map(|&(_, target)| target)
            .collect();
        targets.sort();
        targets.dedup();
        targets
    }

    /// The states reachable from `states` by epsilon transitions alone
    /// (including `states` themselves).
    pub fn epsilon_closure<I>(&self, states: I) -> BTreeSet<State>
    where
        I: IntoIterator<Item = State>,
    {
        let mut closure = BTreeSet::new();
        let mut stack: Vec<_> = states.into_iter().collect();

        while let Some(state) = stack.pop() {
            if closure.insert(state) {
                stack.extend(self.epsilon_transitions(state).iter().cloned());
            }
        }

        closure
    }

    /// The epsilon closure of the states reached from `states` on `symbol`.
    pub fn step(&self, states: &BTreeSet<State>, symbol: &T) -> BTreeSet<State> {
        let targets: Vec<_> = states
            .iter()
            .flat_map(|&state| self.transitions_on(state, symbol))
            .collect();

        self.epsilon_closure(targets)
    }

    /// Simulates the automaton on `input` from the initial state.
    ///
    /// An automaton without an initial state accepts nothing.
    pub fn accepts<I>(&self, input: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let mut current = match self.initial {
            Some(initial) => self.epsilon_closure(Some(initial)),
            None => return false,
        };

        for symbol in input {
            current = self.step(&current, &symbol);
            if current.is_empty() {
                return false;
            }
        }

        current.iter().any(|state| self.accepting.contains(state))
    }

    fn record(&self, state: State) -> Option<&StateTransitions<T>> {
        self.states
            .get(state.index())
            .and_then(|slot| slot.as_ref())
    }

    fn record_mut(&mut self, state: State) -> Option<&mut StateTransitions<T>> {
        self.states
            .get_mut(state.index())
            .and_then(|slot| slot.as_mut())
    }

    // Gets the record for `state`, adding the state first if it is unknown.
    fn ensure_state(&mut self, state: State) -> &mut StateTransitions<T> {
        let index = state.index();
        while self.states.len() <= index {
            self.states.push(None);
        }

        let slot = &mut self.states[index];
        if slot.is_none() {
            self.live += 1;
        }
        slot.get_or_insert_with(StateTransitions::new)
    }
}

// Finds the position of the exact `(interval, target)` pair among the
// symbol transitions, or the position at which it would be inserted.
fn locate<T: Ord>(
    symbols: &[(Interval<T>, State)],
    interval: &Interval<T>,
    target: State,
) -> Result<usize, usize> {
    let (index, exact) = binary_search(
        symbols,
        interval.lower(),
        |&(ref candidate, _)| candidate.lower(),
        |lower, other| cmp_lower_by(lower, *other, &mut Ord::cmp),
    );
    if !exact {
        return Err(index);
    }

    // The search lands on one of possibly many transitions with the same
    // lower bound, so widen to all of them.
    let same_lower = |i: usize| {
        cmp_lower_by(symbols[i].0.lower(), interval.lower(), &mut Ord::cmp) == Ordering::Equal
    };
    let mut start = index;
    while start > 0 && same_lower(start - 1) {
        start -= 1;
    }
    let mut end = index;
    while end < symbols.len() && same_lower(end) {
        end += 1;
    }

    symbols[start..end]
        .iter()
        .position(|&(ref other, other_target)| other_target == target && other == interval)
        .map(|offset| start + offset)
        .ok_or(end)
}

impl<T: Ord + Clone + Debug> Automaton for DenseNfa<T> {
    type State = State;
    type Label = Label<T>;

    fn initial_state(&self) -> Option<State> {
        self.initial
    }

    fn set_initial_state(&mut self, state: State) {
        self.ensure_state(state);
        self.initial = Some(state);
    }

    fn states(&self) -> Vec<State> {
        self.states
            .iter()
            .enumerate()
            .filter(|&(_, slot)| slot.is_some())
            .map(|(index, _)| State::new(index))
            .collect()
    }

    fn contains_state(&self, state: State) -> bool {
        self.record(state).is_some()
    }

    fn accepting_states(&self) -> Vec<State> {
        let mut accepting: Vec<_> = self.accepting.iter().cloned().collect();
        accepting.sort();
        accepting
    }

    fn is_accepting(&self, state: State) -> bool {
        self.accepting.contains(&state)
    }

    fn add_accepting(&mut self, state: State) -> bool {
        self.ensure_state(state);
        self.accepting.insert(state)
    }

    fn remove_accepting(&mut self, state: State) -> bool {
        self.accepting.remove(&state)
    }

    fn transitions_from(&self, state: State) -> Vec<Transition<State, Label<T>>> {
        let record = match self.record(state) {
            Some(record) => record,
            None => return Vec::new(),
        };

        let symbols = record
            .symbols
            .iter()
            .map(|&(ref interval, to)| Transition::new(state, Label::Interval(interval.clone()), to));
        let epsilons = record
            .epsilons
            .iter()
            .map(|&to| Transition::new(state, Label::Epsilon, to));

        symbols.chain(epsilons).collect()
    }

    fn add_transition(&mut self, from: State, on: Label<T>, to: State) -> bool {
        trace!("adding transition {} --{:?}--> {}", from, on, to);

        self.ensure_state(to);
        let record = self.ensure_state(from);

        match on {
            Label::Epsilon => {
                if record.epsilons.contains(&to) {
                    false
                } else {
                    record.epsilons.push(to);
                    true
                }
            }
            Label::Interval(interval) => match locate(&record.symbols, &interval, to) {
                Ok(_) => false,
                Err(index) => {
                    record.symbols.insert(index, (interval, to));
                    true
                }
            },
        }
    }

    fn remove_transition(&mut self, from: State, on: &Label<T>, to: State) -> bool {
        let record = match self.record_mut(from) {
            Some(record) => record,
            None => return false,
        };

        let removed = match *on {
            Label::Epsilon => match record.epsilons.iter().position(|&target| target == to) {
                Some(index) => {
                    record.epsilons.remove(index);
                    true
                }
                None => false,
            },
            Label::Interval(ref interval) => match locate(&record.symbols, interval, to) {
                Ok(index) => {
                    record.symbols.remove(index);
                    true
                }
                Err(_) => false,
            },
        };

        if removed {
            trace!("removed transition {} --{:?}--> {}", from, on, to);
        }
        removed
    }

    fn remove_states(&mut self, states: &HashSet<State>) {
        for &state in states {
            if let Some(slot) = self.states.get_mut(state.index()) {
                if slot.take().is_some() {
                    self.live -= 1;
                }
            }
        }

        for record in self.states.iter_mut().filter_map(|slot| slot.as_mut()) {
            record.symbols.retain(|&(_, to)| !states.contains(&to));
            record.epsilons.retain(|to| !states.contains(to));
        }

        if self.initial.map_or(false, |initial| states.contains(&initial)) {
            self.initial = None;
        }
        self.accepting.retain(|state| !states.contains(state));
    }
}
