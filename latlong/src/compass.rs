//! Names of the points of a 16-wind compass rose.

use uom::si::angle::degree;
use uom::si::f64::Angle;

use crate::error::{GeoError, Result};

const POINTS: [&str; 16] = [
    "N",
    "NNE",
    "NE",
    "ENE",
    "E",
    "ESE",
    "SE",
    "SSE",
    "S",
    "SSW",
    "SW",
    "WSW",
    "W",
    "WNW",
    "NW",
    "NNW",
];

const SECTOR: f64 = 360.0 / POINTS.len() as f64;

/// Describes a bearing with the closest point of a 16-wind compass rose, e.g. `"E"` or `"WNW"`.
///
/// The bearing must be in `[0, 360)` degrees, otherwise [`GeoError::InvalidBearing`] is returned.
pub fn direction_name(bearing: Angle) -> Result<&'static str> {
    let degrees = bearing.get::<degree>();
    if !(0.0..360.0).contains(&degrees) {
        return Err(GeoError::InvalidBearing(degrees));
    }

    let index = ((degrees + SECTOR / 2.0) / SECTOR) as usize % POINTS.len();
    Ok(POINTS[index])
}
