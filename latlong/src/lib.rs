//! Geographic coordinates on a spherical Earth.
//!
//! * [`Coordinate`] is a validated latitude/longitude pair; [`ElevationCoordinate`] adds an elevation, and
//!   [`Location`] holds either of them.
//! * [`geo::great_circle`] computes distances, bearings and destination points with spherical formulas.
//! * [`route`] finds the part of a route still ahead of a moving location.
//! * [`sexagesimal`] converts coordinates to and from degrees/minutes/seconds notations.
//! * [`geo_uri`] reads and writes `geo:` URIs.
//! * [`compass`] names bearings with compass rose points.
//!
//! Angles and lengths are passed as [`uom`] quantities.
//!
//! ```
//! use latlong::Coordinate;
//! use uom::si::angle::degree;
//! use uom::si::f64::{Angle, Length};
//! use uom::si::length::{meter, nautical_mile};
//!
//! let origin = Coordinate::new(0.0, 0.0).unwrap();
//! let target = origin
//!     .destination(Angle::new::<degree>(90.0), Length::new::<nautical_mile>(1.0))
//!     .unwrap();
//! assert!((origin.distance(&target).get::<meter>() - 1852.0).abs() < 1e-6);
//! ```

pub mod compass;
pub mod error;
pub mod geo;
pub mod geo_uri;
pub mod route;
pub mod sexagesimal;

pub use error::{GeoError, Result};
pub use geo::{Coordinate, Datum, ElevationCoordinate, GeoPoint, Location};
pub use sexagesimal::{DegreesDecimalMinutes, DegreesMinutesSeconds};
