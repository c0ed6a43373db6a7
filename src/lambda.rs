//! The two closures the demo applies over a sequence.
//!
//! The printer borrows an output stream and writes one line per value. The
//! accumulator borrows an [`Accumulator`] cell mutably, so the only state it can
//! touch is the running sum owned by the caller.

use std::io::{self, Write};
use tracing::trace;

/// Write a single `Value: <n>` line
pub fn print_value<W: Write + ?Sized>(out: &mut W, value: i32) -> io::Result<()> {
    writeln!(out, "Value: {}", value)
}

/// Closure form of [`print_value`] bound to `out`
pub fn printer<W: Write + ?Sized>(out: &mut W) -> impl FnMut(i32) -> io::Result<()> + '_ {
    move |value| print_value(&mut *out, value)
}

/// Running sum mutated by the accumulator closure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accumulator {
    sum: i32,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: i32) {
        self.sum += value;
        trace!(value, sum = self.sum, "accumulated");
    }

    pub fn sum(&self) -> i32 {
        self.sum
    }
}

/// Closure that adds each value it receives to `acc`
pub fn accumulate_into(acc: &mut Accumulator) -> impl FnMut(i32) + '_ {
    move |value| acc.add(value)
}
