// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

// The utility types in this module are used to support tests in more than
// one other module.

use quickcheck::{Arbitrary, Gen};

use alphabet::Alphabet;
use interval::{Bound, Interval};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum TestAlpha {
    A,
    B,
    C,
    D,
    E,
}

impl Alphabet for TestAlpha {
    fn min_value() -> Self {
        TestAlpha::A
    }

    fn max_value() -> Self {
        TestAlpha::E
    }

    fn increment(&self) -> Option<Self> {
        use self::TestAlpha::*;

        match *self {
            A => Some(B),
            B => Some(C),
            C => Some(D),
            D => Some(E),
            E => None,
        }
    }

    fn decrement(&self) -> Option<Self> {
        use self::TestAlpha::*;

        match *self {
            A => None,
            B => Some(A),
            C => Some(B),
            D => Some(C),
            E => Some(D),
        }
    }
}

impl Arbitrary for TestAlpha {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        use self::TestAlpha::*;

        match u8::arbitrary(g) % 5 {
            0 => A,
            1 => B,
            2 => C,
            3 => D,
            _ => E,
        }
    }
}

/// Parses an interval written in Rust range syntax ("1..4", "..=3", "5..").
pub fn iv(text: &str) -> Interval<i32> {
    let split = text.find("..").expect("interval text without \"..\"");
    let (lower, upper) = (&text[..split], &text[split + 2..]);

    let lower = match lower {
        "" => Bound::Unbounded,
        v => Bound::Inclusive(parse(v)),
    };
    let upper = if upper.is_empty() {
        Bound::Unbounded
    } else if upper.starts_with('=') {
        Bound::Inclusive(parse(&upper[1..]))
    } else {
        Bound::Exclusive(parse(upper))
    };

    Interval::new(lower, upper).expect("interval text with reversed bounds")
}

fn parse(text: &str) -> i32 {
    text.parse().expect("interval text with a non-integer bound")
}

/// A non-empty interval of small integers for property tests.
#[derive(Clone, Debug)]
pub struct ArbInterval(pub Interval<i8>);

impl Arbitrary for ArbInterval {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let a = i8::arbitrary(g);
        let b = i8::arbitrary(g);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

        // Exclusive bounds only when the values differ so that the
        // interval is never empty.
        let distinct = lo < hi;
        let lower = arbitrary_bound(g, lo, distinct);
        let upper = arbitrary_bound(g, hi, distinct);

        ArbInterval(Interval::new(lower, upper).expect("ordered bounds"))
    }
}

fn arbitrary_bound<G: Gen>(g: &mut G, value: i8, allow_exclusive: bool) -> Bound<i8> {
    match u8::arbitrary(g) % 4 {
        0 => Bound::Unbounded,
        1 if allow_exclusive => Bound::Exclusive(value),
        _ => Bound::Inclusive(value),
    }
}
