use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluatorError {
    #[error("parallel group at component {position} has more than {limit} branches")]
    CapacityExceeded { limit: usize, position: usize },
}

impl EvaluatorError {
    pub fn capacity_exceeded(limit: usize, position: usize) -> Self {
        Self::CapacityExceeded { limit, position }
    }
}
