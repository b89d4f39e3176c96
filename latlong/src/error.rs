//! Error type used by the crate.

use thiserror::Error;

/// Result type with [`GeoError`] as the error.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// Latitude is outside of `[-90, 90]` degrees (or is not a number).
    #[error("invalid latitude {0}")]
    InvalidLatitude(f64),
    /// Longitude is outside of `[-180, 180]` degrees (or is not a number).
    #[error("invalid longitude {0}")]
    InvalidLongitude(f64),
    /// Elevation is not a finite length.
    #[error("invalid elevation {0}m")]
    InvalidElevation(f64),
    /// Minutes component is outside of `[0, 60)`.
    #[error("invalid minutes {0}")]
    InvalidMinutes(f64),
    /// Seconds component is outside of `[0, 60)`.
    #[error("invalid seconds {0}")]
    InvalidSeconds(f64),
    /// Bearing is outside of `[0, 360)` degrees.
    #[error("invalid bearing {0}º")]
    InvalidBearing(f64),
    /// URI scheme is not `geo`.
    #[error("unexpected scheme '{scheme}' in '{uri}'")]
    Scheme {
        /// Scheme found in the URI, empty if there was none.
        scheme: String,
        /// The whole input.
        uri: String,
    },
    /// Wrong number of coordinate fields, or a field that is not a number.
    #[error("malformed coordinate: {0}")]
    MalformedCoordinate(String),
    /// Elevation-aware operation between a 2D and a 3D location.
    #[error("cannot compute distance between 2D and 3D location")]
    DimensionalMismatch,
    /// Route operation on a route without points.
    #[error("an empty route is not valid")]
    EmptyRoute,
}

impl GeoError {
    /// Returns true if the error reports a value outside of its valid bounds.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidLatitude(_)
                | Self::InvalidLongitude(_)
                | Self::InvalidElevation(_)
                | Self::InvalidMinutes(_)
                | Self::InvalidSeconds(_)
                | Self::InvalidBearing(_)
        )
    }
}
