use uom::si::f64::Length;
use uom::si::length::meter;

/// Reference body used by the great-circle computations.
///
/// The body is modelled as a sphere with the radius equal to the semimajor axis of the datum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    semimajor: f64,
}

impl Datum {
    /// WGS-84 equatorial radius (<https://apps.dtic.mil/sti/pdfs/ADA280358.pdf>).
    pub const WGS84: Self = Datum {
        semimajor: 6_378_137.0,
    };

    /// Sphere with the given radius.
    pub fn sphere(radius: Length) -> Self {
        Self {
            semimajor: radius.get::<meter>(),
        }
    }

    /// Radius of the sphere in meters.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// Radius of the sphere.
    pub fn radius(&self) -> Length {
        Length::new::<meter>(self.semimajor)
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}
