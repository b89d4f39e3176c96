//! Great-circle computations on a spherical Earth.
//!
//! The Earth is modelled as a sphere with the radius of [`Datum::WGS84`]. This is an approximation: the results can
//! differ from the ellipsoidal (geodesic) values by up to about 0.5%.
//!
//! None of the functions here try to handle paths crossing the antimeridian or the poles in any special way.

use log::debug;
use uom::si::angle::radian;
use uom::si::area::square_meter;
use uom::si::f64::{Angle, Area, Length};
use uom::si::length::meter;

use crate::error::Result;
use crate::geo::coordinate::Coordinate;
use crate::geo::datum::Datum;
use crate::geo::point::GeoPoint;

/// Great-circle distance between two points, computed with the haversine formula.
pub fn distance(a: &impl GeoPoint, b: &impl GeoPoint) -> Length {
    a.haversine_distance(b, &Datum::WGS84)
}

/// Square of the great-circle [`distance`].
///
/// Useful when only relative order of distances matters.
pub fn distance_squared(a: &impl GeoPoint, b: &impl GeoPoint) -> Area {
    let d = distance(a, b);
    d * d
}

/// Initial bearing from `a` towards `b`, in `[0, 360)` degrees.
pub fn bearing(a: &impl GeoPoint, b: &impl GeoPoint) -> Angle {
    a.initial_bearing(b)
}

/// Solves the direct problem: the point reached from `origin` after travelling `distance` along the great circle
/// with the initial `bearing`.
///
/// The longitude of the result is not wrapped, so a projection across the antimeridian fails with
/// [`GeoError::InvalidLongitude`](crate::GeoError::InvalidLongitude).
pub fn destination(origin: &impl GeoPoint, bearing: Angle, distance: Length) -> Result<Coordinate> {
    destination_on(origin, bearing, distance, &Datum::WGS84)
}

/// Same as [`destination`], but on the sphere of the given `datum`.
pub fn destination_on(
    origin: &impl GeoPoint,
    bearing: Angle,
    distance: Length,
    datum: &Datum,
) -> Result<Coordinate> {
    let bearing = bearing.get::<radian>();
    let lat = origin.lat_rad();
    let lon = origin.lon_rad();
    let delta = distance.get::<meter>() / datum.semimajor();

    let new_lat = (lat.sin() * delta.cos() + lat.cos() * delta.sin() * bearing.cos()).asin();
    let new_lon = lon
        + (bearing.sin() * delta.sin() * lat.cos()).atan2(delta.cos() - lat.sin() * new_lat.sin());

    Coordinate::new(new_lat.to_degrees(), new_lon.to_degrees()).inspect_err(|err| {
        debug!("Projection from ({}, {}) left the valid range: {err}", origin.lat(), origin.lon());
    })
}

/// Total length of the path through all the points of the `route`.
///
/// Zero for routes with fewer than two points.
pub fn route_distance(route: &[Coordinate]) -> Length {
    route
        .windows(2)
        .map(|pair| distance(&pair[1], &pair[0]))
        .fold(Length::new::<meter>(0.0), |sum, d| sum + d)
}

pub(crate) fn area_to_length(area: Area) -> Length {
    Length::new::<meter>(area.get::<square_meter>().sqrt())
}
