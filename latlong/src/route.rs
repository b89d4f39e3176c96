//! Progress of a moving location along a route.
//!
//! A route is an ordered sequence of coordinates, the order being the direction of travel. Given the current
//! position (which does not have to lie exactly on the route), [`remaining_route`] returns the part of the route that
//! is still ahead.
//!
//! # Limitations
//!
//! The direction check treats latitude and longitude degrees as planar `(y, x)` coordinates. This is fine for short
//! segments away from the poles, but gives wrong answers for routes crossing the antimeridian or passing near a pole.

use log::{debug, trace};
use nalgebra::Vector2;
use uom::si::length::meter;

use crate::error::{GeoError, Result};
use crate::geo::Coordinate;

/// Index of the route vertex closest to `locator`, or `None` for an empty route.
///
/// If several vertices are at the same distance, the first of them is returned.
pub fn closest_vertex(locator: &Coordinate, route: &[Coordinate]) -> Option<usize> {
    let mut closest: Option<(usize, f64)> = None;
    for (index, vertex) in route.iter().enumerate() {
        let distance = locator.distance(vertex).get::<meter>();
        trace!("Route vertex {index} ({vertex}) is {distance}m away");

        let is_closer = match closest {
            Some((_, closest_distance)) => distance < closest_distance,
            None => true,
        };
        if is_closer {
            closest = Some((index, distance));
        }
    }

    closest.map(|(index, _)| index)
}

/// Returns the part of the `route` still ahead of `locator`.
///
/// The result starts with the `locator` itself, followed by the remaining route vertices:
///
/// * if the closest vertex is the last one, the result is the `locator` and the last vertex;
/// * if the `locator` is behind the closest vertex (looking along the next segment), the closest vertex is kept;
/// * otherwise the closest vertex has already been passed and the result continues from the next one.
///
/// Fails with [`GeoError::EmptyRoute`] if the route has no points.
pub fn remaining_route(locator: &Coordinate, route: &[Coordinate]) -> Result<Vec<Coordinate>> {
    let closest_index = closest_vertex(locator, route).ok_or(GeoError::EmptyRoute)?;
    let last_index = route.len() - 1;

    if closest_index == last_index {
        debug!("{locator} is closest to the final route vertex");
        return Ok(vec![*locator, route[last_index]]);
    }

    let closest = &route[closest_index];
    let along_route = planar_vector(closest, &route[closest_index + 1]);
    let to_locator = planar_vector(closest, locator);

    // A negative projection on the next segment means the closest vertex is still ahead.
    let best_index = if along_route.dot(&to_locator) < 0.0 {
        closest_index
    } else {
        closest_index + 1
    };
    debug!(
        "{locator} is closest to route vertex {closest_index}, continuing from vertex {best_index}"
    );

    let mut remaining = Vec::with_capacity(route.len() - best_index + 1);
    remaining.push(*locator);
    remaining.extend_from_slice(&route[best_index..]);
    Ok(remaining)
}

/// Vector from `from` to `to` with longitude as `x` and latitude as `y`, in degrees.
fn planar_vector(from: &Coordinate, to: &Coordinate) -> Vector2<f64> {
    Vector2::new(
        to.longitude() - from.longitude(),
        to.latitude() - from.latitude(),
    )
}
