use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("circuit contains {unknowns} unknown resistors; only one can be solved")]
    UnsupportedTopology { unknowns: usize },

    #[error("measured resistance must be positive, got {measured}")]
    InvalidMeasurement { measured: f64 },

    #[error("parallel group resistance must be positive (R_par={r_par})")]
    NonPositiveParallel { r_par: f64 },

    #[error("known branch must exceed the parallel group resistance (S_k={sk}, R_par={r_par})")]
    KnownBranchTooSmall { sk: f64, r_par: f64 },

    #[error("solved unknown resistance is zero or negative ({rx} Ohm)")]
    NonPositiveResult { rx: f64 },

    #[error("no measured resistance was supplied")]
    NoMeasurement,

    #[error("no valid measurement after {attempts} attempts: {last}")]
    RetriesExhausted {
        attempts: usize,
        last: Box<SolverError>,
    },
}

impl SolverError {
    pub fn unsupported_topology(unknowns: usize) -> Self {
        Self::UnsupportedTopology { unknowns }
    }

    pub fn invalid_measurement(measured: f64) -> Self {
        Self::InvalidMeasurement { measured }
    }

    pub fn retries_exhausted(attempts: usize, last: SolverError) -> Self {
        Self::RetriesExhausted {
            attempts,
            last: Box::new(last),
        }
    }
}
