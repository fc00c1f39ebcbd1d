// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Trait to define the symbol universe of regular expressions.

use std::fmt::Debug;
use std::hash::Hash;

/// Required functionality for the symbols that a `Regex` matches.
///
/// An alphabet is a finite universe with a total order, a least and a
/// greatest element, and a successor and predecessor for each element. The
/// bounds and the stepping are what allow a negated character class to be
/// turned into the explicit ranges that it covers.
pub trait Alphabet: Ord + Clone + Hash + Debug {
    /// The least symbol of the alphabet.
    fn min_value() -> Self;

    /// The greatest symbol of the alphabet.
    fn max_value() -> Self;

    /// The symbol that follows this one (None for `max_value()`).
    fn increment(&self) -> Option<Self>;

    /// The symbol that precedes this one (None for `min_value()`).
    fn decrement(&self) -> Option<Self>;
}

macro_rules! integer_alphabet {
    ($($t:ty),*) => {
        $(
            impl Alphabet for $t {
                fn min_value() -> Self {
                    <$t>::MIN
                }

                fn max_value() -> Self {
                    <$t>::MAX
                }

                fn increment(&self) -> Option<Self> {
                    self.checked_add(1)
                }

                fn decrement(&self) -> Option<Self> {
                    self.checked_sub(1)
                }
            }
        )*
    };
}

integer_alphabet!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

// The surrogate code points are not valid chars, so stepping across them
// jumps the gap.
const LAST_BEFORE_SURROGATE: char = '\u{D7FF}';
const FIRST_AFTER_SURROGATE: char = '\u{E000}';

impl Alphabet for char {
    fn min_value() -> Self {
        '\u{0}'
    }

    fn max_value() -> Self {
        char::MAX
    }

    fn increment(&self) -> Option<Self> {
        match *self {
            char::MAX => None,
            LAST_BEFORE_SURROGATE => Some(FIRST_AFTER_SURROGATE),
            c => char::from_u32(c as u32 + 1),
        }
    }

    fn decrement(&self) -> Option<Self> {
        match *self {
            '\u{0}' => None,
            FIRST_AFTER_SURROGATE => Some(LAST_BEFORE_SURROGATE),
            c => char::from_u32(c as u32 - 1),
        }
    }
}
