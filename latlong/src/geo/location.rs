use std::fmt::{Display, Formatter};

use uom::si::f64::{Area, Length};
use uom::si::length::meter;

use crate::error::{GeoError, Result};
use crate::geo::coordinate::Coordinate;
use crate::geo::elevation::ElevationCoordinate;
use crate::geo::point::GeoPoint;

/// Either a 2D or a 3D location.
///
/// Distance between locations is only defined when both have the same dimensionality. Mixing them results in
/// [`GeoError::DimensionalMismatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// Point on the surface.
    Surface(Coordinate),
    /// Point with an elevation.
    Elevated(ElevationCoordinate),
}

impl Location {
    /// The 2D part of the location.
    pub fn coordinate(&self) -> Coordinate {
        match self {
            Location::Surface(c) => *c,
            Location::Elevated(c) => c.coordinate(),
        }
    }

    /// Elevation of the location, if it has one.
    pub fn elevation(&self) -> Option<Length> {
        match self {
            Location::Surface(_) => None,
            Location::Elevated(c) => Some(c.elevation()),
        }
    }

    /// Squared distance to the `other` location of the same kind.
    pub fn distance_squared(&self, other: &Location) -> Result<Area> {
        match (self, other) {
            (Location::Surface(a), Location::Surface(b)) => Ok(a.distance_squared(b)),
            (Location::Elevated(a), Location::Elevated(b)) => Ok(a.distance_squared(b)),
            _ => Err(GeoError::DimensionalMismatch),
        }
    }

    /// Distance to the `other` location of the same kind.
    pub fn distance(&self, other: &Location) -> Result<Length> {
        match (self, other) {
            (Location::Surface(a), Location::Surface(b)) => Ok(a.distance(b)),
            (Location::Elevated(a), Location::Elevated(b)) => Ok(a.distance(b)),
            _ => Err(GeoError::DimensionalMismatch),
        }
    }

    /// Total length of the path through all the points of the `route`.
    ///
    /// All the points must be of the same kind.
    pub fn route_distance(route: &[Location]) -> Result<Length> {
        route
            .windows(2)
            .try_fold(Length::new::<meter>(0.0), |sum, pair| {
                Ok(sum + pair[1].distance(&pair[0])?)
            })
    }
}

impl From<Coordinate> for Location {
    fn from(value: Coordinate) -> Self {
        Self::Surface(value)
    }
}

impl From<ElevationCoordinate> for Location {
    fn from(value: ElevationCoordinate) -> Self {
        Self::Elevated(value)
    }
}

impl GeoPoint for Location {
    fn lat(&self) -> f64 {
        self.coordinate().latitude()
    }

    fn lon(&self) -> f64 {
        self.coordinate().longitude()
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Surface(c) => c.fmt(f),
            Location::Elevated(c) => c.fmt(f),
        }
    }
}
