mod config;
mod electrical;
mod evaluator;
mod parser;
mod solver;

pub use config::ConfigError;
pub use electrical::ElectricalError;
pub use evaluator::EvaluatorError;
pub use parser::ParserError;
pub use solver::SolverError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parser(#[from] ParserError),

    #[error(transparent)]
    Evaluator(#[from] EvaluatorError),

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error(transparent)]
    Electrical(#[from] ElectricalError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Coarse failure categories a caller can report on or branch over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A numeric token could not be read as a decimal.
    Parse,
    /// The circuit is missing its leading `+` or trailing `-`.
    Format,
    UnsupportedTopology,
    PhysicallyInvalid,
    Capacity,
    Config,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parser(e) if e.is_format_error() => ErrorKind::Format,
            Error::Parser(_) => ErrorKind::Parse,
            Error::Evaluator(_) => ErrorKind::Capacity,
            Error::Solver(e) => solver_kind(e),
            Error::Electrical(_) => ErrorKind::PhysicallyInvalid,
            Error::Config(_) => ErrorKind::Config,
        }
    }
}

fn solver_kind(err: &SolverError) -> ErrorKind {
    match err {
        SolverError::UnsupportedTopology { .. } => ErrorKind::UnsupportedTopology,
        SolverError::RetriesExhausted { last, .. } => solver_kind(last),
        _ => ErrorKind::PhysicallyInvalid,
    }
}

pub type Result<T> = std::result::Result<T, Error>;
