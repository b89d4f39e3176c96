use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use super::{
    check_latitude_degrees, check_longitude_degrees, check_minutes, format_degrees, signed_angle,
    split_degrees, with_sign, LatitudeHemisphere, LongitudeHemisphere,
};
use crate::error::Result;
use crate::geo::Coordinate;

/// A location as degrees with decimal minutes, e.g. `27º 30', -82º 45'`.
#[derive(Debug, Clone, Copy)]
pub struct DegreesDecimalMinutes {
    latitude_degrees: i32,
    latitude_decimal_minutes: f64,
    latitude_hemisphere: LatitudeHemisphere,
    longitude_degrees: i32,
    longitude_decimal_minutes: f64,
    longitude_hemisphere: LongitudeHemisphere,
}

impl DegreesDecimalMinutes {
    /// Creates a new location from its components.
    ///
    /// The hemispheres are taken from the signs of the degrees, with `0` meaning north or east. Use
    /// [`DegreesDecimalMinutes::with_hemispheres`] to express southern or western angles smaller than one degree.
    ///
    /// Fails with [`GeoError::InvalidMinutes`](crate::GeoError::InvalidMinutes) if minutes are outside of `[0, 60)`,
    /// and with [`GeoError::InvalidLatitude`](crate::GeoError::InvalidLatitude) or
    /// [`GeoError::InvalidLongitude`](crate::GeoError::InvalidLongitude) if the degrees are outside of `[-90, 90]` or
    /// `[-180, 180]`.
    pub fn new(
        latitude_degrees: i32,
        latitude_decimal_minutes: f64,
        longitude_degrees: i32,
        longitude_decimal_minutes: f64,
    ) -> Result<Self> {
        Ok(Self {
            latitude_degrees: check_latitude_degrees(latitude_degrees)?,
            latitude_decimal_minutes: check_minutes(latitude_decimal_minutes)?,
            latitude_hemisphere: LatitudeHemisphere::from_degrees(latitude_degrees),
            longitude_degrees: check_longitude_degrees(longitude_degrees)?,
            longitude_decimal_minutes: check_minutes(longitude_decimal_minutes)?,
            longitude_hemisphere: LongitudeHemisphere::from_degrees(longitude_degrees),
        })
    }

    /// Returns the same location moved to the given hemispheres. The sign of the degrees follows the hemisphere.
    pub fn with_hemispheres(
        self,
        latitude: LatitudeHemisphere,
        longitude: LongitudeHemisphere,
    ) -> Self {
        Self {
            latitude_degrees: with_sign(self.latitude_degrees, latitude.is_negative()),
            latitude_hemisphere: latitude,
            longitude_degrees: with_sign(self.longitude_degrees, longitude.is_negative()),
            longitude_hemisphere: longitude,
            ..self
        }
    }

    /// Whole degrees of the latitude, truncated towards zero.
    pub fn latitude_degrees(&self) -> i32 {
        self.latitude_degrees
    }

    /// Minutes of the latitude.
    pub fn latitude_decimal_minutes(&self) -> f64 {
        self.latitude_decimal_minutes
    }

    /// Hemisphere of the latitude.
    pub fn latitude_hemisphere(&self) -> LatitudeHemisphere {
        self.latitude_hemisphere
    }

    /// Whole degrees of the longitude, truncated towards zero.
    pub fn longitude_degrees(&self) -> i32 {
        self.longitude_degrees
    }

    /// Minutes of the longitude.
    pub fn longitude_decimal_minutes(&self) -> f64 {
        self.longitude_decimal_minutes
    }

    /// Hemisphere of the longitude.
    pub fn longitude_hemisphere(&self) -> LongitudeHemisphere {
        self.longitude_hemisphere
    }

    /// Converts back to decimal degrees.
    pub fn to_coordinate(&self) -> Result<Coordinate> {
        let latitude = signed_angle(
            self.latitude_degrees.unsigned_abs() as f64 + self.latitude_decimal_minutes / 60.0,
            self.latitude_hemisphere.is_negative(),
        );
        let longitude = signed_angle(
            self.longitude_degrees.unsigned_abs() as f64 + self.longitude_decimal_minutes / 60.0,
            self.longitude_hemisphere.is_negative(),
        );
        Coordinate::new(latitude, longitude)
    }

    /// Representation with cardinal directions instead of signs, e.g. `27º 30' N, 82º 45' W`.
    pub fn cardinal(&self) -> String {
        format!(
            "{}º {}' {}, {}º {}' {}",
            self.latitude_degrees.unsigned_abs(),
            self.latitude_decimal_minutes,
            self.latitude_hemisphere.letter(),
            self.longitude_degrees.unsigned_abs(),
            self.longitude_decimal_minutes,
            self.longitude_hemisphere.letter(),
        )
    }
}

impl From<Coordinate> for DegreesDecimalMinutes {
    fn from(c: Coordinate) -> Self {
        let (latitude_degrees, latitude_decimal_minutes) = split_degrees(c.latitude());
        let (longitude_degrees, longitude_decimal_minutes) = split_degrees(c.longitude());
        Self {
            latitude_degrees,
            latitude_decimal_minutes,
            latitude_hemisphere: LatitudeHemisphere::of(c.latitude()),
            longitude_degrees,
            longitude_decimal_minutes,
            longitude_hemisphere: LongitudeHemisphere::of(c.longitude()),
        }
    }
}

impl PartialEq for DegreesDecimalMinutes {
    fn eq(&self, other: &Self) -> bool {
        self.latitude_degrees == other.latitude_degrees
            && self.latitude_decimal_minutes.to_bits() == other.latitude_decimal_minutes.to_bits()
            && self.latitude_hemisphere == other.latitude_hemisphere
            && self.longitude_degrees == other.longitude_degrees
            && self.longitude_decimal_minutes.to_bits() == other.longitude_decimal_minutes.to_bits()
            && self.longitude_hemisphere == other.longitude_hemisphere
    }
}

impl Eq for DegreesDecimalMinutes {}

impl Hash for DegreesDecimalMinutes {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude_degrees.hash(state);
        self.latitude_decimal_minutes.to_bits().hash(state);
        self.latitude_hemisphere.hash(state);
        self.longitude_degrees.hash(state);
        self.longitude_decimal_minutes.to_bits().hash(state);
        self.longitude_hemisphere.hash(state);
    }
}

impl Display for DegreesDecimalMinutes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}º {}', {}º {}'",
            format_degrees(self.latitude_degrees, self.latitude_hemisphere.is_negative()),
            self.latitude_decimal_minutes,
            format_degrees(self.longitude_degrees, self.longitude_hemisphere.is_negative()),
            self.longitude_decimal_minutes,
        )
    }
}
