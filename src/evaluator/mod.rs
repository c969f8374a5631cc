//! Equivalent resistance of the known part of a network.
//!
//! `evaluate_series` and `evaluate_parallel_group` recurse into each other
//! over a shared cursor. The parser never nests a group inside a branch (the
//! `*` toggle closes the open group instead), so recursion depth is at most
//! two frames of each.

use tracing::{debug, trace};

use crate::circuit::{Component, ComponentKind, Sequence};
use crate::error::EvaluatorError;

pub const DEFAULT_MAX_BRANCHES: usize = 10;

pub struct Evaluator {
    max_branches: usize,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            max_branches: DEFAULT_MAX_BRANCHES,
        }
    }

    pub fn with_max_branches(mut self, max_branches: usize) -> Self {
        self.max_branches = max_branches;
        self
    }

    pub fn max_branches(&self) -> usize {
        self.max_branches
    }

    /// Evaluates `Req_known`. Unknown resistors contribute nothing.
    pub fn evaluate(&self, sequence: &Sequence) -> Result<f64, EvaluatorError> {
        let mut cursor = Cursor::new(sequence);
        let total = self.evaluate_series(&mut cursor)?;
        debug!(req_known = total, stopped_at = cursor.position, "evaluated circuit");
        Ok(total)
    }

    fn evaluate_series(&self, cursor: &mut Cursor<'_>) -> Result<f64, EvaluatorError> {
        let mut total = 0.0;

        while let Some(component) = cursor.peek() {
            match component.kind {
                ComponentKind::ParallelGroupStart => {
                    cursor.advance();
                    total += self.evaluate_parallel_group(cursor)?;
                }
                ComponentKind::ParallelGroupEnd
                | ComponentKind::ParallelBranchStart
                | ComponentKind::ParallelBranchEnd => break,
                _ => {
                    if let Some(value) = component.known_value() {
                        total += value;
                    }
                    cursor.advance();
                }
            }
        }

        Ok(total)
    }

    fn evaluate_parallel_group(&self, cursor: &mut Cursor<'_>) -> Result<f64, EvaluatorError> {
        let group_position = cursor.position.saturating_sub(1);
        let mut branches = vec![self.evaluate_series(cursor)?];

        while cursor.next_if(ComponentKind::ParallelBranchStart) {
            if branches.len() >= self.max_branches {
                return Err(EvaluatorError::capacity_exceeded(
                    self.max_branches,
                    group_position,
                ));
            }
            branches.push(self.evaluate_series(cursor)?);
            // A branch without its closing `=` ends branch collection.
            if !cursor.next_if(ComponentKind::ParallelBranchEnd) {
                break;
            }
        }
        cursor.next_if(ComponentKind::ParallelGroupEnd);

        let combined = combine_parallel(&branches);
        trace!(?branches, combined, "parallel group");
        Ok(combined)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Combines branch resistances with the parallel law.
///
/// Zero-ohm branches (for instance a branch holding only the unknown) are
/// left out of the harmonic sum. Returns 0 when no branch contributes.
pub fn combine_parallel(branches: &[f64]) -> f64 {
    let inverse_sum: f64 = branches
        .iter()
        .filter(|&&b| b > 0.0)
        .map(|b| 1.0 / b)
        .sum();

    if inverse_sum > 0.0 {
        1.0 / inverse_sum
    } else {
        0.0
    }
}

/// Evaluates with the default branch capacity.
pub fn evaluate(sequence: &Sequence) -> Result<f64, EvaluatorError> {
    Evaluator::new().evaluate(sequence)
}

struct Cursor<'a> {
    sequence: &'a Sequence,
    position: usize,
}

impl<'a> Cursor<'a> {
    fn new(sequence: &'a Sequence) -> Self {
        Self {
            sequence,
            position: 0,
        }
    }

    fn peek(&self) -> Option<&'a Component> {
        self.sequence.get(self.position)
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn next_if(&mut self, kind: ComponentKind) -> bool {
        match self.peek() {
            Some(component) if component.kind == kind => {
                self.advance();
                true
            }
            _ => false,
        }
    }
}
