//! Error types for the skid telemetry crate

/// Errors raised when a unit reading fails validation
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("Tank level out of range for '{unit}': {value} (expected 0-100)")]
    TankLevelOutOfRange { unit: String, value: f64 },

    #[error("Negative {field} for '{unit}': {value}")]
    NegativeRate {
        unit: String,
        field: &'static str,
        value: f64,
    },

    #[error("Non-finite {field} for '{unit}'")]
    NonFinite { unit: String, field: &'static str },
}

/// Result type alias for telemetry operations
pub type Result<T> = std::result::Result<T, TelemetryError>;
