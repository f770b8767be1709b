use thiserror::Error;

/// Configuration problems.  The simulation itself has no failure modes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },

    #[error("cell size must be non-zero")]
    ZeroCellSize,

    #[error("field size {field_px}px is not a positive multiple of the {cell_px}px cell size")]
    FieldNotDivisible { field_px: u32, cell_px: u32 },

    #[error("{0} period must be non-zero")]
    ZeroPeriod(&'static str),

    #[error("pointer sample rate must be non-zero")]
    ZeroSampleRate,
}
