use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use uom::si::f64::{Area, Length};
use uom::si::length::meter;

use crate::error::{GeoError, Result};
use crate::geo::coordinate::Coordinate;
use crate::geo::great_circle;
use crate::geo::point::GeoPoint;

/// A location on Earth with an elevation above (or below) sea level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawElevationCoordinate", into = "RawElevationCoordinate")]
pub struct ElevationCoordinate {
    coordinate: Coordinate,
    elevation: Length,
}

#[derive(Serialize, Deserialize)]
struct RawElevationCoordinate {
    latitude: f64,
    longitude: f64,
    elevation: f64,
}

impl TryFrom<RawElevationCoordinate> for ElevationCoordinate {
    type Error = GeoError;

    fn try_from(raw: RawElevationCoordinate) -> Result<Self> {
        Self::from_degrees(raw.latitude, raw.longitude, Length::new::<meter>(raw.elevation))
    }
}

impl From<ElevationCoordinate> for RawElevationCoordinate {
    fn from(value: ElevationCoordinate) -> Self {
        Self {
            latitude: value.coordinate.latitude(),
            longitude: value.coordinate.longitude(),
            elevation: value.elevation_meters(),
        }
    }
}

impl ElevationCoordinate {
    /// Creates a new location from a 2D `coordinate` and an `elevation`.
    pub fn new(coordinate: Coordinate, elevation: Length) -> Result<Self> {
        let meters = elevation.get::<meter>();
        if !meters.is_finite() {
            return Err(GeoError::InvalidElevation(meters));
        }

        Ok(Self {
            coordinate,
            elevation,
        })
    }

    /// Creates a new location from latitude and longitude in degrees and an `elevation`.
    pub fn from_degrees(latitude: f64, longitude: f64, elevation: Length) -> Result<Self> {
        Self::new(Coordinate::new(latitude, longitude)?, elevation)
    }

    /// The 2D part of the location.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Elevation above sea level.
    pub fn elevation(&self) -> Length {
        self.elevation
    }

    fn elevation_meters(&self) -> f64 {
        self.elevation.get::<meter>()
    }

    /// Squared distance to the `other` location.
    ///
    /// The squared elevation difference is added to the squared great-circle distance, which treats the surface as
    /// flat for the vertical component.
    pub fn distance_squared(&self, other: &ElevationCoordinate) -> Area {
        let elevation_delta = other.elevation - self.elevation;
        great_circle::distance_squared(&self.coordinate, &other.coordinate)
            + elevation_delta * elevation_delta
    }

    /// Distance to the `other` location, taking the elevation difference into account.
    pub fn distance(&self, other: &ElevationCoordinate) -> Length {
        great_circle::area_to_length(self.distance_squared(other))
    }
}

impl GeoPoint for ElevationCoordinate {
    fn lat(&self) -> f64 {
        self.coordinate.latitude()
    }

    fn lon(&self) -> f64 {
        self.coordinate.longitude()
    }
}

impl PartialEq for ElevationCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.coordinate == other.coordinate
            && self.elevation_meters().to_bits() == other.elevation_meters().to_bits()
    }
}

impl Eq for ElevationCoordinate {}

impl Hash for ElevationCoordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coordinate.hash(state);
        self.elevation_meters().to_bits().hash(state);
    }
}

impl Display for ElevationCoordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}m", self.coordinate, self.elevation_meters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use std::collections::HashSet;

    fn m(meters: f64) -> Length {
        Length::new::<meter>(meters)
    }

    #[test]
    fn vertical_distance() {
        let l1 = ElevationCoordinate::from_degrees(50.0, 20.0, m(0.0)).unwrap();
        let l2 = ElevationCoordinate::new(Coordinate::new(50.0, 20.0).unwrap(), m(100.0)).unwrap();
        assert_eq!(l1.distance(&l2).get::<meter>(), 100.0);
        assert_eq!(l2.distance(&l1).get::<meter>(), 100.0);
    }

    #[test]
    fn combined_distance() {
        let l1 = ElevationCoordinate::from_degrees(0.0, 0.0, m(0.0)).unwrap();
        let l2 = ElevationCoordinate::from_degrees(0.0, 1.0 / 60.0, m(1000.0)).unwrap();
        let surface = l1.coordinate().distance(&l2.coordinate()).get::<meter>();
        assert_abs_diff_eq!(
            l1.distance(&l2).get::<meter>(),
            (surface * surface + 1000.0 * 1000.0).sqrt(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn invalid_elevation() {
        assert_matches!(
            ElevationCoordinate::from_degrees(0.0, 0.0, m(f64::NAN)),
            Err(GeoError::InvalidElevation(_))
        );
        assert_matches!(
            ElevationCoordinate::from_degrees(95.0, 0.0, m(1.0)),
            Err(GeoError::InvalidLatitude(_))
        );
    }

    #[test]
    fn equality() {
        let l1 = ElevationCoordinate::from_degrees(50.0, 20.0, m(0.0)).unwrap();
        let l2 = ElevationCoordinate::new(Coordinate::new(50.0, 20.0).unwrap(), m(0.0)).unwrap();
        let l3 = ElevationCoordinate::from_degrees(50.0, 30.0, m(0.0)).unwrap();
        let l4 = ElevationCoordinate::from_degrees(50.0, 20.0, m(1.0)).unwrap();
        assert_eq!(l1, l1);
        assert_eq!(l1, l2);
        assert_ne!(l1, l3);
        assert_ne!(l1, l4);

        let set: HashSet<_> = [l1, l2, l3, l4].into_iter().collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn display() {
        let l1 = ElevationCoordinate::from_degrees(50.0, 20.0, m(0.0)).unwrap();
        assert_eq!(l1.to_string(), "50º, 20º, 0m");
        let l2 = ElevationCoordinate::from_degrees(25.25, -80.125, m(-3.5)).unwrap();
        assert_eq!(l2.to_string(), "25.25º, -80.125º, -3.5m");
    }

    #[test]
    fn serde() {
        let l1 = ElevationCoordinate::from_degrees(25.25, -80.125, m(50.0)).unwrap();
        let json = serde_json::to_string(&l1).unwrap();
        assert_eq!(json, r#"{"latitude":25.25,"longitude":-80.125,"elevation":50.0}"#);
        assert_eq!(serde_json::from_str::<ElevationCoordinate>(&json).unwrap(), l1);
        assert!(serde_json::from_str::<ElevationCoordinate>(
            r#"{"latitude":25.25,"longitude":-181,"elevation":50.0}"#
        )
        .is_err());
    }
}
