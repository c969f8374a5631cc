pub mod extract;
pub mod symbolic;

pub use extract::{extract, ParallelStructure};
pub use symbolic::{solve_parallel, solve_series, validate_measurement};

use serde::Serialize;
use tracing::{debug, warn};

use crate::circuit::Sequence;
use crate::error::SolverError;

/// How many unknown resistors a circuit carries, and so what must happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownCount {
    Zero,
    One,
    Many(usize),
}

impl UnknownCount {
    pub fn of(sequence: &Sequence) -> Self {
        match sequence.unknown_count() {
            0 => Self::Zero,
            1 => Self::One,
            n => Self::Many(n),
        }
    }

    pub fn count(&self) -> usize {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Many(n) => *n,
        }
    }
}

/// The equation used to recover the single unknown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SolveMode {
    /// The unknown sits in series with everything known.
    Series { req_known: f64 },
    /// The unknown sits in one branch of a two-branch parallel group.
    Parallel(ParallelStructure),
}

impl SolveMode {
    /// Picks parallel mode when the supported group shape matches, series otherwise.
    pub fn select(sequence: &Sequence, req_known: f64) -> Self {
        match extract(sequence) {
            Some(structure) => {
                debug!(?structure, "unknown resistor in parallel group");
                Self::Parallel(structure)
            }
            None => {
                debug!(req_known, "unknown resistor treated as series");
                Self::Series { req_known }
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Series { .. } => "series",
            Self::Parallel(_) => "parallel",
        }
    }

    /// Solves for `Rx`. Holds no state, so it may be retried with new measurements.
    pub fn solve(&self, req_measured: f64) -> Result<f64, SolverError> {
        match self {
            Self::Series { req_known } => solve_series(*req_known, req_measured),
            Self::Parallel(structure) => solve_parallel(structure, req_measured),
        }
    }
}

/// Decides whether and how the circuit can be solved.
///
/// Returns `Ok(None)` when there is nothing unknown.
pub fn plan(sequence: &Sequence, req_known: f64) -> Result<Option<SolveMode>, SolverError> {
    match UnknownCount::of(sequence) {
        UnknownCount::Zero => Ok(None),
        UnknownCount::One => Ok(Some(SolveMode::select(sequence, req_known))),
        UnknownCount::Many(n) => {
            warn!(unknowns = n, "more than one unknown resistor");
            Err(SolverError::unsupported_topology(n))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate;
    use crate::parser::parse;

    fn plan_for(input: &str) -> Result<Option<SolveMode>, SolverError> {
        let seq = parse(input).unwrap();
        let req_known = evaluate(&seq).unwrap();
        plan(&seq, req_known)
    }

    #[test]
    fn test_unknown_count() {
        assert_eq!(UnknownCount::of(&parse("+10_20-").unwrap()), UnknownCount::Zero);
        assert_eq!(UnknownCount::of(&parse("+10_x-").unwrap()), UnknownCount::One);
        assert_eq!(
            UnknownCount::of(&parse("+x_x_x-").unwrap()),
            UnknownCount::Many(3)
        );
        assert_eq!(UnknownCount::Many(3).count(), 3);
    }

    #[test]
    fn test_plan_no_unknown() {
        assert_eq!(plan_for("+10_20-").unwrap(), None);
    }

    #[test]
    fn test_plan_series_fallback() {
        assert_eq!(
            plan_for("+10_x-").unwrap(),
            Some(SolveMode::Series { req_known: 10.0 })
        );
    }

    #[test]
    fn test_plan_parallel() {
        let mode = plan_for("+5*x||20=*_5-").unwrap().unwrap();
        assert_eq!(mode.name(), "parallel");
        assert_eq!(
            mode,
            SolveMode::Parallel(ParallelStructure {
                s0: 5.0,
                s3: 5.0,
                su: 0.0,
                sk: 20.0,
            })
        );
    }

    #[test]
    fn test_plan_rejects_two_unknowns() {
        assert_eq!(
            plan_for("+x*x||20=*-").unwrap_err(),
            SolverError::unsupported_topology(2)
        );
    }

    #[test]
    fn test_solve_is_stateless() {
        let mode = plan_for("+10_x-").unwrap().unwrap();
        assert!(mode.solve(5.0).is_err());
        assert_eq!(mode.solve(35.0).unwrap(), 25.0);
        assert!(mode.solve(-1.0).is_err());
        assert_eq!(mode.solve(35.0).unwrap(), 25.0);
    }

    #[test]
    fn test_mode_serializes_with_tag() {
        let json = serde_json::to_value(SolveMode::Series { req_known: 10.0 }).unwrap();
        assert_eq!(json, serde_json::json!({ "mode": "series", "req_known": 10.0 }));
    }
}
