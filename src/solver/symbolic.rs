use tracing::debug;

use super::ParallelStructure;
use crate::error::SolverError;

/// Rejects measurements that cannot be a real total resistance.
pub fn validate_measurement(req_measured: f64) -> Result<(), SolverError> {
    if req_measured > 0.0 && req_measured.is_finite() {
        Ok(())
    } else {
        Err(SolverError::invalid_measurement(req_measured))
    }
}

/// `Rx = Req_measured - Req_known`.
pub fn solve_series(req_known: f64, req_measured: f64) -> Result<f64, SolverError> {
    validate_measurement(req_measured)?;

    let rx = req_measured - req_known;
    debug!(req_known, req_measured, rx, "series solve");
    ensure_positive(rx)
}

/// Inverts `1/R_par = 1/(Su + Rx) + 1/Sk` with `R_par = Req_measured - (S0 + S3)`.
pub fn solve_parallel(
    structure: &ParallelStructure,
    req_measured: f64,
) -> Result<f64, SolverError> {
    validate_measurement(req_measured)?;

    let r_par = req_measured - (structure.s0 + structure.s3);
    if r_par <= 0.0 {
        return Err(SolverError::NonPositiveParallel { r_par });
    }
    // A second branch can only pull the group below the known branch.
    if structure.sk <= r_par {
        return Err(SolverError::KnownBranchTooSmall {
            sk: structure.sk,
            r_par,
        });
    }

    let rx = (r_par * structure.sk) / (structure.sk - r_par) - structure.su;
    debug!(?structure, req_measured, r_par, rx, "parallel solve");
    ensure_positive(rx)
}

fn ensure_positive(rx: f64) -> Result<f64, SolverError> {
    if rx > 0.0 {
        Ok(rx)
    } else {
        Err(SolverError::NonPositiveResult { rx })
    }
}
