use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};
use uom::si::f64::{Angle, Area, Length};

use crate::error::{GeoError, Result};
use crate::geo::great_circle;
use crate::geo::point::GeoPoint;
use crate::route;

/// A location on Earth expressed as a latitude and longitude in degrees.
///
/// The only way to get a coordinate is through a validating constructor, so every value satisfies
/// `-90 <= latitude <= 90` and `-180 <= longitude <= 180`.
///
/// Equality is exact: two coordinates are equal only if both fields have the same bits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = GeoError;

    fn try_from(raw: RawCoordinate) -> Result<Self> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude in degrees.
    ///
    /// Fails with [`GeoError::InvalidLatitude`] or [`GeoError::InvalidLongitude`] if a value is out of range or
    /// is not a number.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::InvalidLongitude(longitude));
        }

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::InvalidLatitude(latitude));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to the `other` coordinate.
    pub fn distance(&self, other: &Coordinate) -> Length {
        great_circle::distance(self, other)
    }

    /// Square of [`Coordinate::distance`].
    pub fn distance_squared(&self, other: &Coordinate) -> Area {
        great_circle::distance_squared(self, other)
    }

    /// Initial bearing from this coordinate towards the `other`.
    pub fn bearing(&self, other: &Coordinate) -> Angle {
        great_circle::bearing(self, other)
    }

    /// The coordinate reached by travelling `distance` from this one with the initial `bearing`.
    pub fn destination(&self, bearing: Angle, distance: Length) -> Result<Coordinate> {
        great_circle::destination(self, bearing, distance)
    }

    /// The part of the `route` still ahead of this coordinate, starting with this coordinate.
    ///
    /// See [`route::remaining_route`].
    pub fn remaining_route(&self, route: &[Coordinate]) -> Result<Vec<Coordinate>> {
        route::remaining_route(self, route)
    }
}

impl GeoPoint for Coordinate {
    fn lat(&self) -> f64 {
        self.latitude
    }

    fn lon(&self) -> f64 {
        self.longitude
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.latitude.to_bits() == other.latitude.to_bits()
            && self.longitude.to_bits() == other.longitude.to_bits()
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}º, {}º", self.latitude, self.longitude)
    }
}

impl AbsDiffEq for Coordinate {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.latitude.abs_diff_eq(&other.latitude, epsilon)
            && self.longitude.abs_diff_eq(&other.longitude, epsilon)
    }
}

impl RelativeEq for Coordinate {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.latitude.relative_eq(&other.latitude, epsilon, max_relative)
            && self.longitude.relative_eq(&other.longitude, epsilon, max_relative)
    }
}
