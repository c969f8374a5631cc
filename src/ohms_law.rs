use serde::Serialize;
use tracing::debug;

use crate::error::ElectricalError;

/// Voltage and current across the whole network.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Electrical {
    pub resistance: f64,
    pub voltage: Option<f64>,
    pub current: Option<f64>,
    /// Both voltage and current are known.
    pub complete: bool,
}

/// Fills in whichever of voltage or current is missing.
///
/// Non-positive inputs count as absent. When both are given they are
/// reported as-is.
pub fn complete(
    resistance: f64,
    current: Option<f64>,
    voltage: Option<f64>,
) -> Result<Electrical, ElectricalError> {
    if resistance <= 0.0 || !resistance.is_finite() {
        return Err(ElectricalError::NonPositiveResistance { resistance });
    }

    let current = current.filter(|&i| i > 0.0);
    let voltage = voltage.filter(|&v| v > 0.0);

    let (voltage, current) = match (voltage, current) {
        (None, Some(i)) => (Some(i * resistance), Some(i)),
        (Some(v), None) => (Some(v), Some(v / resistance)),
        other => other,
    };
    debug!(resistance, ?voltage, ?current, "ohm's law");

    Ok(Electrical {
        resistance,
        voltage,
        current,
        complete: voltage.is_some() && current.is_some(),
    })
}
