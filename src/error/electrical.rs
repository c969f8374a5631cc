use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ElectricalError {
    #[error("resistance for current/voltage calculation must be positive, got {resistance}")]
    NonPositiveResistance { resistance: f64 },
}
