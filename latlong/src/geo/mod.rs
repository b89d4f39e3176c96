//! Locations in geographic coordinates (latitude and longitude) (see [`Coordinate`], [`ElevationCoordinate`] and
//! [`Location`]) and great-circle computations between them (see [`great_circle`]).

mod coordinate;
mod datum;
mod elevation;
pub mod great_circle;
mod location;
mod point;

pub use coordinate::Coordinate;
pub use datum::Datum;
pub use elevation::ElevationCoordinate;
pub use location::Location;
pub use point::GeoPoint;
