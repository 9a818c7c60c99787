use thiserror::Error;

/// Validation failures surfaced by [`count_conflicts`](crate::count_conflicts)
/// before any counting happens. Good input always completes; there is no
/// partial-result path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// The conflict radius must be a positive, finite number of meters.
    #[error("conflict radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    /// The airspace side length must be a positive, finite number of meters.
    #[error("airspace size must be positive and finite, got {0}")]
    InvalidAirspaceSize(f64),

    /// The padding multiplier controls the sector width and cannot be zero.
    #[error("pad_mult must be at least 1")]
    InvalidPadMult,

    /// A benchmark prefix limit larger than the input itself.
    #[error("limit {limit} exceeds the {available} drones available")]
    LimitOutOfRange { limit: usize, available: usize },

    /// A drone coordinate outside `[0, airspace_size]`, or not a number at all.
    #[error("drone {id} at ({x}, {y}) is outside the airspace [0, {airspace_size}]")]
    OutOfBounds {
        id: usize,
        x: f64,
        y: f64,
        airspace_size: f64,
    },
}
