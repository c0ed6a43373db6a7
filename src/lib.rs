//! Closure demonstration over a fixed integer sequence.
//!
//! Two closures are applied through a generic iteration helper: a printer that
//! writes `Value: <n>` for each element, and an accumulator that adds each element
//! to a sum owned by the caller. See [`driver::run`] for the full run.

pub mod config;
pub mod driver;
pub mod lambda;
pub mod logging;
pub mod sequence;

// Re-export the main types for easy access
pub use config::{Config, LoggingConfig};
pub use driver::{for_each, run, try_for_each, Phase, RunReport};
pub use lambda::{accumulate_into, print_value, printer, Accumulator};
pub use logging::init_logging;
pub use sequence::Sequence;
