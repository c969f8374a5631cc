use serde::Serialize;
use tracing::{debug, info, warn};

use crate::circuit::Sequence;
use crate::error::{Result, SolverError};
use crate::evaluator::Evaluator;
use crate::parser;
use crate::solver::{self, SolveMode, UnknownCount};

pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

/// A solved unknown resistor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Solution {
    #[serde(flatten)]
    pub mode: SolveMode,
    pub rx: f64,
    pub req_measured: f64,
    /// Measurements consumed, including the accepted one.
    pub attempts: usize,
}

/// One circuit, parsed and evaluated once.
#[derive(Debug, Clone)]
pub struct Session {
    circuit: String,
    sequence: Sequence,
    req_known: f64,
    unknowns: UnknownCount,
}

impl Session {
    pub fn open(circuit: &str) -> Result<Self> {
        Self::open_with(circuit, &Evaluator::new())
    }

    pub fn open_with(circuit: &str, evaluator: &Evaluator) -> Result<Self> {
        let sequence = parser::parse(circuit)?;
        let req_known = evaluator.evaluate(&sequence)?;
        let unknowns = UnknownCount::of(&sequence);
        info!(
            circuit,
            components = sequence.len(),
            req_known,
            unknowns = unknowns.count(),
            "opened circuit"
        );

        Ok(Self {
            circuit: circuit.to_string(),
            sequence,
            req_known,
            unknowns,
        })
    }

    pub fn circuit(&self) -> &str {
        &self.circuit
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn req_known(&self) -> f64 {
        self.req_known
    }

    pub fn unknowns(&self) -> UnknownCount {
        self.unknowns
    }

    /// The solve mode, `None` when no resistor is unknown.
    pub fn plan(&self) -> std::result::Result<Option<SolveMode>, SolverError> {
        solver::plan(&self.sequence, self.req_known)
    }

    /// Solves the unknown from a single measurement.
    pub fn solve(&self, req_measured: f64) -> std::result::Result<Option<Solution>, SolverError> {
        self.solve_with_retry(std::iter::once(req_measured), 1)
    }

    /// Tries candidate measurements in order until one yields a valid `Rx`,
    /// consuming at most `max_attempts` of them.
    ///
    /// Returns `Ok(None)` without touching `candidates` when nothing is unknown.
    pub fn solve_with_retry<I>(
        &self,
        candidates: I,
        max_attempts: usize,
    ) -> std::result::Result<Option<Solution>, SolverError>
    where
        I: IntoIterator<Item = f64>,
    {
        let Some(mode) = self.plan()? else {
            return Ok(None);
        };
        debug!(mode = mode.name(), max_attempts, "solving unknown resistor");

        let mut attempts = 0;
        let mut last = None;
        for req_measured in candidates.into_iter().take(max_attempts) {
            attempts += 1;
            match mode.solve(req_measured) {
                Ok(rx) => {
                    info!(rx, req_measured, attempts, "solved unknown resistor");
                    return Ok(Some(Solution {
                        mode,
                        rx,
                        req_measured,
                        attempts,
                    }));
                }
                Err(err) => {
                    warn!(attempt = attempts, %err, "measurement rejected");
                    last = Some(err);
                }
            }
        }

        match last {
            Some(err) if max_attempts == 1 => Err(err),
            Some(err) => Err(SolverError::retries_exhausted(attempts, err)),
            None => Err(SolverError::NoMeasurement),
        }
    }

    /// Resistance seen by the source: the measured total when an unknown
    /// was solved, `Req_known` otherwise.
    pub fn equivalent_resistance(&self, solution: Option<&Solution>) -> f64 {
        solution.map_or(self.req_known, |s| s.req_measured)
    }
}
