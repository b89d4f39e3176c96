use crate::geo::datum::Datum;
use uom::si::angle::degree;
use uom::si::f64::{Angle, Length};
use uom::si::length::meter;

/// A point on the surface of a sphere given by latitude and longitude in degrees.
///
/// The provided methods implement the spherical formulas once for every point type in the crate.
pub trait GeoPoint {
    /// Latitude in degrees.
    fn lat(&self) -> f64;
    /// Longitude in degrees.
    fn lon(&self) -> f64;

    /// Latitude in radians.
    fn lat_rad(&self) -> f64 {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> f64 {
        self.lon().to_radians()
    }

    /// Angle between the two points as seen from the center of the sphere, in radians.
    ///
    /// Uses the haversine formula.
    fn central_angle(&self, other: &impl GeoPoint) -> f64 {
        let d_lat = (other.lat() - self.lat()).to_radians();
        let d_lon = (other.lon() - self.lon()).to_radians();
        let h = (d_lat / 2.0).sin().powi(2)
            + self.lat_rad().cos() * other.lat_rad().cos() * (d_lon / 2.0).sin().powi(2);
        // Rounding can push `h` past 1 for antipodal points.
        let h = h.clamp(0.0, 1.0);
        2.0 * h.sqrt().atan2((1.0 - h).sqrt())
    }

    /// Great-circle distance to the `other` point on the sphere of the given `datum`.
    fn haversine_distance(&self, other: &impl GeoPoint, datum: &Datum) -> Length {
        Length::new::<meter>(datum.semimajor() * self.central_angle(other))
    }

    /// Initial bearing from this point towards the `other`, in `[0, 360)` degrees clockwise from north.
    fn initial_bearing(&self, other: &impl GeoPoint) -> Angle {
        let d_lon = (other.lon() - self.lon()).to_radians();
        let lat1 = self.lat_rad();
        let lat2 = other.lat_rad();
        let theta = (d_lon.sin() * lat2.cos())
            .atan2(lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos())
            .to_degrees();

        let theta = if theta < 0.0 { theta + 360.0 } else { theta };
        // Tiny negative angles round up to exactly 360 after the shift.
        Angle::new::<degree>(if theta >= 360.0 { 0.0 } else { theta })
    }
}
