/// ohmtrace
///
/// Reads a compact notation for series-parallel resistor networks, computes
/// the equivalent resistance of the known part and solves for a single
/// unknown resistor from a measured total.
pub mod circuit;
pub mod cli;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod logging;
pub mod ohms_law;
pub mod output;
pub mod parser;
pub mod session;
pub mod solver;

pub use circuit::{Component, ComponentKind, Sequence};
pub use error::{Error, ErrorKind, Result};
pub use evaluator::Evaluator;
pub use session::{Session, Solution};
pub use solver::{ParallelStructure, SolveMode, UnknownCount};
