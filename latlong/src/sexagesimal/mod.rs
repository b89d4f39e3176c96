//! Sexagesimal representations of a [`Coordinate`](crate::Coordinate): degrees with decimal minutes
//! ([`DegreesDecimalMinutes`]) and degrees, minutes and decimal seconds ([`DegreesMinutesSeconds`]).
//!
//! Degrees are truncated towards zero and carry the sign of the angle, minutes and seconds are never negative.
//! Because an angle between -1° and 0° has `0` degrees, each axis also stores its hemisphere, and the hemisphere (not
//! the sign of the degrees) decides the sign of the reconstructed angle.

mod ddm;
mod dms;

pub use ddm::DegreesDecimalMinutes;
pub use dms::DegreesMinutesSeconds;

use crate::error::{GeoError, Result};

/// North or south of the equator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LatitudeHemisphere {
    /// Non-negative latitudes.
    North,
    /// Negative latitudes.
    South,
}

impl LatitudeHemisphere {
    /// Hemisphere of the given latitude in degrees. Negative zero is in the southern hemisphere.
    pub fn of(latitude: f64) -> Self {
        if latitude.is_sign_negative() {
            Self::South
        } else {
            Self::North
        }
    }

    /// Letter used in the cardinal notation.
    pub fn letter(&self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
        }
    }

    fn is_negative(&self) -> bool {
        *self == Self::South
    }

    fn from_degrees(degrees: i32) -> Self {
        if degrees < 0 {
            Self::South
        } else {
            Self::North
        }
    }
}

/// East or west of the prime meridian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LongitudeHemisphere {
    /// Non-negative longitudes.
    East,
    /// Negative longitudes.
    West,
}

impl LongitudeHemisphere {
    /// Hemisphere of the given longitude in degrees. Negative zero is in the western hemisphere.
    pub fn of(longitude: f64) -> Self {
        if longitude.is_sign_negative() {
            Self::West
        } else {
            Self::East
        }
    }

    /// Letter used in the cardinal notation.
    pub fn letter(&self) -> char {
        match self {
            Self::East => 'E',
            Self::West => 'W',
        }
    }

    fn is_negative(&self) -> bool {
        *self == Self::West
    }

    fn from_degrees(degrees: i32) -> Self {
        if degrees < 0 {
            Self::West
        } else {
            Self::East
        }
    }
}

/// Splits an angle into whole degrees (truncated towards zero) and the remaining minutes.
fn split_degrees(value: f64) -> (i32, f64) {
    let degrees = value.trunc();
    (degrees as i32, (value.abs() - degrees.abs()) * 60.0)
}

/// Splits a minutes value into whole minutes and the remaining seconds.
fn split_minutes(minutes: f64) -> (u32, f64) {
    let whole = minutes.trunc();
    (whole as u32, (minutes - whole) * 60.0)
}

fn check_latitude_degrees(degrees: i32) -> Result<i32> {
    if (-90..=90).contains(&degrees) {
        Ok(degrees)
    } else {
        Err(GeoError::InvalidLatitude(degrees as f64))
    }
}

fn check_longitude_degrees(degrees: i32) -> Result<i32> {
    if (-180..=180).contains(&degrees) {
        Ok(degrees)
    } else {
        Err(GeoError::InvalidLongitude(degrees as f64))
    }
}

fn check_minutes(minutes: f64) -> Result<f64> {
    if (0.0..60.0).contains(&minutes) {
        Ok(minutes)
    } else {
        Err(GeoError::InvalidMinutes(minutes))
    }
}

fn check_seconds(seconds: f64) -> Result<f64> {
    if (0.0..60.0).contains(&seconds) {
        Ok(seconds)
    } else {
        Err(GeoError::InvalidSeconds(seconds))
    }
}

/// Degrees with the sign of the hemisphere.
///
/// Degrees are in `[-180, 180]` after validation, so the magnitude always fits.
fn with_sign(degrees: i32, negative: bool) -> i32 {
    let magnitude = degrees.unsigned_abs() as i32;
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn signed_angle(magnitude: f64, negative: bool) -> f64 {
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Signed degrees for display; keeps the minus sign of southern and western angles with zero whole degrees.
fn format_degrees(degrees: i32, negative: bool) -> String {
    if negative && degrees == 0 {
        "-0".to_string()
    } else {
        degrees.to_string()
    }
}
