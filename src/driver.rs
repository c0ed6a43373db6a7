//! Iteration utility and the run orchestration.
//!
//! A run walks a fixed, linear set of phases:
//!
//! ```text
//! Init -> Print -> Accumulate -> Report -> Terminate
//! ```
//!
//! The print phase only writes to the output stream and the accumulate phase only
//! touches the [`Accumulator`], so the effects of the two are fully separate. Both
//! phases go through the same generic [`for_each`] / [`try_for_each`] helpers.

use anyhow::{Context, Result};
use std::fmt;
use std::io::{self, Write};
use tracing::{debug, info};

use crate::lambda::{accumulate_into, printer, Accumulator};
use crate::sequence::Sequence;

/// First line written by the print phase
pub const HEADER: &str = "Using Lambda to Print Values:";

/// Apply `f` to every element of `items`, first to last, exactly once each
pub fn for_each<T, F>(items: &[T], mut f: F)
where
    T: Copy,
    F: FnMut(T),
{
    for &item in items {
        f(item);
    }
}

/// Fallible variant of [`for_each`]; stops at the first error and returns it
pub fn try_for_each<T, E, F>(items: &[T], mut f: F) -> std::result::Result<(), E>
where
    T: Copy,
    F: FnMut(T) -> std::result::Result<(), E>,
{
    for &item in items {
        f(item)?;
    }
    Ok(())
}

/// States of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    Print,
    Accumulate,
    Report,
    Terminate,
}

impl Phase {
    /// The phase that follows this one, or `None` once terminated
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Init => Some(Phase::Print),
            Phase::Print => Some(Phase::Accumulate),
            Phase::Accumulate => Some(Phase::Report),
            Phase::Report => Some(Phase::Terminate),
            Phase::Terminate => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Init => "init",
            Phase::Print => "print",
            Phase::Accumulate => "accumulate",
            Phase::Report => "report",
            Phase::Terminate => "terminate",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub values_printed: usize,
    pub sum: i32,
}

/// Write the header followed by one `Value:` line per element
pub fn print_phase<W: Write + ?Sized>(sequence: &Sequence, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", HEADER)?;
    try_for_each(sequence.as_slice(), printer(out))
}

/// Fold every element of `sequence` into `acc`
pub fn accumulate_phase(sequence: &Sequence, acc: &mut Accumulator) {
    for_each(sequence.as_slice(), accumulate_into(acc));
}

/// Write the final `Sum:` line
pub fn report_phase<W: Write + ?Sized>(acc: &Accumulator, out: &mut W) -> io::Result<()> {
    writeln!(out, "Sum: {}", acc.sum())
}

fn advance(phase: Phase) -> Phase {
    // Terminate is only reached by the last call in `run`
    let next = phase.next().unwrap_or(Phase::Terminate);
    debug!(from = %phase, to = %next, "phase transition");
    next
}

/// Run the whole demo over `sequence`, writing to `out`
pub fn run<W: Write + ?Sized>(sequence: &Sequence, out: &mut W) -> Result<RunReport> {
    let mut phase = Phase::Init;
    debug!(%sequence, "starting run");

    phase = advance(phase);
    print_phase(sequence, out).context("Failed to write values")?;

    phase = advance(phase);
    let mut acc = Accumulator::new();
    accumulate_phase(sequence, &mut acc);

    phase = advance(phase);
    report_phase(&acc, out).context("Failed to write sum")?;
    out.flush().context("Failed to flush output")?;

    phase = advance(phase);
    info!(phase = %phase, values = sequence.len(), sum = acc.sum(), "run complete");

    Ok(RunReport {
        values_printed: sequence.len(),
        sum: acc.sum(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn sum_of(values: Vec<i32>) -> i32 {
        let mut acc = Accumulator::new();
        accumulate_phase(&Sequence::new(values), &mut acc);
        acc.sum()
    }

    #[test]
    fn test_for_each_visits_in_order() {
        let mut seen = Vec::new();
        for_each(&[3, 1, 2], |v: i32| seen.push(v));
        assert_eq!(seen, vec![3, 1, 2]);
    }

    #[test]
    fn test_try_for_each_stops_at_first_error() {
        let mut seen = Vec::new();
        let result = try_for_each(&[1, 2, 3, 4], |v: i32| {
            seen.push(v);
            if v == 2 {
                Err("stop")
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err("stop"));
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn test_run_output() {
        let mut out = Vec::new();
        let report = run(&Sequence::default(), &mut out).unwrap();

        let expected = "Using Lambda to Print Values:\n\
                        Value: 1\n\
                        Value: 2\n\
                        Value: 3\n\
                        Value: 4\n\
                        Value: 5\n\
                        Sum: 15\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
        assert_eq!(report, RunReport { values_printed: 5, sum: 15 });
    }

    #[test]
    fn test_sums() {
        assert_eq!(sum_of(vec![]), 0);
        assert_eq!(sum_of(vec![-3, 3]), 0);
        assert_eq!(sum_of(vec![100, 200, 300]), 600);
        assert_eq!(sum_of(vec![1, 2, 3, 4, 5]), 15);
    }

    #[test]
    fn test_phases_are_isolated() {
        let seq = Sequence::default();
        let mut acc = Accumulator::new();
        let mut out = Vec::new();

        print_phase(&seq, &mut out).unwrap();
        assert_eq!(acc.sum(), 0);
        let printed = out.len();

        accumulate_phase(&seq, &mut acc);
        assert_eq!(out.len(), printed);
        assert_eq!(acc.sum(), 15);

        report_phase(&acc, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let value_lines = text.lines().filter(|l| l.starts_with("Value: ")).count();
        assert_eq!(value_lines, 5);
        assert_eq!(text.lines().last(), Some("Sum: 15"));
    }

    #[test]
    fn test_run_is_repeatable() {
        let seq = Sequence::default();
        let mut first = Vec::new();
        let mut second = Vec::new();
        run(&seq, &mut first).unwrap();
        run(&seq, &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_write_failure_propagates() {
        let err = run(&Sequence::default(), &mut BrokenPipe).unwrap_err();
        assert!(err.to_string().contains("Failed to write values"));
        let io_err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_phase_sequence() {
        let mut phases = vec![Phase::Init];
        while let Some(next) = phases.last().and_then(|p| p.next()) {
            phases.push(next);
        }
        assert_eq!(
            phases,
            vec![
                Phase::Init,
                Phase::Print,
                Phase::Accumulate,
                Phase::Report,
                Phase::Terminate,
            ]
        );
    }
}
