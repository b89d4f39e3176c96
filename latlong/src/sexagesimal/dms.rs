use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use super::{
    check_latitude_degrees, check_longitude_degrees, check_minutes, check_seconds, format_degrees,
    signed_angle, split_degrees, split_minutes, with_sign, LatitudeHemisphere, LongitudeHemisphere,
};
use crate::error::Result;
use crate::geo::Coordinate;

/// A location as degrees, minutes and decimal seconds, e.g. `27º 37' 30", -82º 52' 30"`.
#[derive(Debug, Clone, Copy)]
pub struct DegreesMinutesSeconds {
    latitude_degrees: i32,
    latitude_minutes: u32,
    latitude_seconds: f64,
    latitude_hemisphere: LatitudeHemisphere,
    longitude_degrees: i32,
    longitude_minutes: u32,
    longitude_seconds: f64,
    longitude_hemisphere: LongitudeHemisphere,
}

impl DegreesMinutesSeconds {
    /// Creates a new location from its components.
    ///
    /// The hemispheres are taken from the signs of the degrees, with `0` meaning north or east. Use
    /// [`DegreesMinutesSeconds::with_hemispheres`] to express southern or western angles smaller than one degree.
    ///
    /// Degrees must be in `[-90, 90]` for the latitude and `[-180, 180]` for the longitude, minutes and seconds in
    /// `[0, 60)`.
    pub fn new(
        latitude_degrees: i32,
        latitude_minutes: u32,
        latitude_seconds: f64,
        longitude_degrees: i32,
        longitude_minutes: u32,
        longitude_seconds: f64,
    ) -> Result<Self> {
        check_minutes(latitude_minutes as f64)?;
        check_minutes(longitude_minutes as f64)?;

        Ok(Self {
            latitude_degrees: check_latitude_degrees(latitude_degrees)?,
            latitude_minutes,
            latitude_seconds: check_seconds(latitude_seconds)?,
            latitude_hemisphere: LatitudeHemisphere::from_degrees(latitude_degrees),
            longitude_degrees: check_longitude_degrees(longitude_degrees)?,
            longitude_minutes,
            longitude_seconds: check_seconds(longitude_seconds)?,
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

    /// Whole minutes of the latitude.
    pub fn latitude_minutes(&self) -> u32 {
        self.latitude_minutes
    }

    /// Seconds of the latitude.
    pub fn latitude_seconds(&self) -> f64 {
        self.latitude_seconds
    }

    /// Hemisphere of the latitude.
    pub fn latitude_hemisphere(&self) -> LatitudeHemisphere {
        self.latitude_hemisphere
    }

    /// Whole degrees of the longitude, truncated towards zero.
    pub fn longitude_degrees(&self) -> i32 {
        self.longitude_degrees
    }

    /// Whole minutes of the longitude.
    pub fn longitude_minutes(&self) -> u32 {
        self.longitude_minutes
    }

    /// Seconds of the longitude.
    pub fn longitude_seconds(&self) -> f64 {
        self.longitude_seconds
    }

    /// Hemisphere of the longitude.
    pub fn longitude_hemisphere(&self) -> LongitudeHemisphere {
        self.longitude_hemisphere
    }

    /// Converts back to decimal degrees.
    pub fn to_coordinate(&self) -> Result<Coordinate> {
        let latitude = signed_angle(
            self.latitude_degrees.unsigned_abs() as f64
                + self.latitude_minutes as f64 / 60.0
                + self.latitude_seconds / 3600.0,
            self.latitude_hemisphere.is_negative(),
        );
        let longitude = signed_angle(
            self.longitude_degrees.unsigned_abs() as f64
                + self.longitude_minutes as f64 / 60.0
                + self.longitude_seconds / 3600.0,
            self.longitude_hemisphere.is_negative(),
        );
        Coordinate::new(latitude, longitude)
    }

    /// Representation with cardinal directions instead of signs, e.g. `27º 30' 0" N, 82º 45' 0" W`.
    pub fn cardinal(&self) -> String {
        format!(
            "{}º {}' {}\" {}, {}º {}' {}\" {}",
            self.latitude_degrees.unsigned_abs(),
            self.latitude_minutes,
            self.latitude_seconds,
            self.latitude_hemisphere.letter(),
            self.longitude_degrees.unsigned_abs(),
            self.longitude_minutes,
            self.longitude_seconds,
            self.longitude_hemisphere.letter(),
        )
    }
}

impl From<Coordinate> for DegreesMinutesSeconds {
    fn from(c: Coordinate) -> Self {
        let (latitude_degrees, latitude_minutes) = split_degrees(c.latitude());
        let (latitude_minutes, latitude_seconds) = split_minutes(latitude_minutes);
        let (longitude_degrees, longitude_minutes) = split_degrees(c.longitude());
        let (longitude_minutes, longitude_seconds) = split_minutes(longitude_minutes);
        Self {
            latitude_degrees,
            latitude_minutes,
            latitude_seconds,
            latitude_hemisphere: LatitudeHemisphere::of(c.latitude()),
            longitude_degrees,
            longitude_minutes,
            longitude_seconds,
            longitude_hemisphere: LongitudeHemisphere::of(c.longitude()),
        }
    }
}

impl PartialEq for DegreesMinutesSeconds {
    fn eq(&self, other: &Self) -> bool {
        self.latitude_degrees == other.latitude_degrees
            && self.latitude_minutes == other.latitude_minutes
            && self.latitude_seconds.to_bits() == other.latitude_seconds.to_bits()
            && self.latitude_hemisphere == other.latitude_hemisphere
            && self.longitude_degrees == other.longitude_degrees
            && self.longitude_minutes == other.longitude_minutes
            && self.longitude_seconds.to_bits() == other.longitude_seconds.to_bits()
            && self.longitude_hemisphere == other.longitude_hemisphere
    }
}

impl Eq for DegreesMinutesSeconds {}

impl Hash for DegreesMinutesSeconds {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude_degrees.hash(state);
        self.latitude_minutes.hash(state);
        self.latitude_seconds.to_bits().hash(state);
        self.latitude_hemisphere.hash(state);
        self.longitude_degrees.hash(state);
        self.longitude_minutes.hash(state);
        self.longitude_seconds.to_bits().hash(state);
        self.longitude_hemisphere.hash(state);
    }
}

impl Display for DegreesMinutesSeconds {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}º {}' {}\", {}º {}' {}\"",
            format_degrees(self.latitude_degrees, self.latitude_hemisphere.is_negative()),
            self.latitude_minutes,
            self.latitude_seconds,
            format_degrees(self.longitude_degrees, self.longitude_hemisphere.is_negative()),
            self.longitude_minutes,
            self.longitude_seconds,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeoError;
    use assert_matches::assert_matches;
    use std::collections::HashSet;

    fn c(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn whole_minutes() {
        let l1 = c(27.50, -82.75);
        let dms = DegreesMinutesSeconds::from(l1);
        assert_eq!(dms.latitude_degrees(), 27);
        assert_eq!(dms.longitude_degrees(), -82);
        assert_eq!(dms.latitude_minutes(), 30);
        assert_eq!(dms.longitude_minutes(), 45);
        assert_eq!(dms.latitude_seconds(), 0.0);
        assert_eq!(dms.longitude_seconds(), 0.0);
        assert_eq!(dms.to_string(), "27º 30' 0\", -82º 45' 0\"");
        assert_eq!(dms.cardinal(), "27º 30' 0\" N, 82º 45' 0\" W");
        assert_eq!(dms.to_coordinate().unwrap(), l1);
        assert_eq!(dms, DegreesMinutesSeconds::new(27, 30, 0.0, -82, 45, 0.0).unwrap());
    }

    #[test]
    fn with_seconds() {
        let l2 = c(27.625, -82.875);
        let dms = DegreesMinutesSeconds::from(l2);
        assert_eq!(dms.latitude_minutes(), 37);
        assert_eq!(dms.longitude_minutes(), 52);
        assert_eq!(dms.latitude_seconds(), 30.0);
        assert_eq!(dms.longitude_seconds(), 30.0);
        assert_eq!(dms.cardinal(), "27º 37' 30\" N, 82º 52' 30\" W");
        assert_eq!(dms.to_coordinate().unwrap(), l2);
    }

    #[test]
    fn south_east() {
        let l1 = c(-27.50, 82.75);
        let dms = DegreesMinutesSeconds::from(l1);
        assert_eq!(dms.latitude_degrees(), -27);
        assert_eq!(dms.longitude_degrees(), 82);
        assert_eq!(dms.latitude_minutes(), 30);
        assert_eq!(dms.longitude_minutes(), 45);
        assert_eq!(dms.cardinal(), "27º 30' 0\" S, 82º 45' 0\" E");
        assert_eq!(dms.to_coordinate().unwrap(), l1);
    }

    #[test]
    fn less_than_one_degree_south() {
        let l1 = c(-0.5, 10.0);
        let dms = DegreesMinutesSeconds::from(l1);
        assert_eq!(dms.to_string(), "-0º 30' 0\", 10º 0' 0\"");
        assert_eq!(dms.to_coordinate().unwrap(), l1);

        let built = DegreesMinutesSeconds::new(0, 30, 0.0, 10, 0, 0.0)
            .unwrap()
            .with_hemispheres(LatitudeHemisphere::South, LongitudeHemisphere::East);
        assert_eq!(built, dms);
    }

    #[test]
    fn invalid_components() {
        assert_matches!(
            DegreesMinutesSeconds::new(27, 60, 0.0, -82, 45, 0.0),
            Err(GeoError::InvalidMinutes(m)) if m == 60.0
        );
        assert_matches!(
            DegreesMinutesSeconds::new(27, 30, 0.0, -82, 45, 60.0),
            Err(GeoError::InvalidSeconds(s)) if s == 60.0
        );
        assert_matches!(
            DegreesMinutesSeconds::new(27, 30, f64::NAN, -82, 45, 0.0),
            Err(GeoError::InvalidSeconds(_))
        );
        assert_matches!(
            DegreesMinutesSeconds::new(-91, 0, 0.0, 0, 0, 0.0),
            Err(GeoError::InvalidLatitude(d)) if d == -91.0
        );
        assert_matches!(
            DegreesMinutesSeconds::new(0, 0, 0.0, i32::MIN, 0, 0.0),
            Err(GeoError::InvalidLongitude(_))
        );
    }

    #[test]
    fn hemispheres_at_the_bounds() {
        let dms = DegreesMinutesSeconds::new(-90, 0, 0.0, -180, 0, 0.0)
            .unwrap()
            .with_hemispheres(LatitudeHemisphere::North, LongitudeHemisphere::East);
        assert_eq!(dms.latitude_degrees(), 90);
        assert_eq!(dms.longitude_degrees(), 180);
        assert_eq!(dms.to_coordinate().unwrap(), Coordinate::new(90.0, 180.0).unwrap());
    }

    #[test]
    fn equality_and_hash() {
        let dms1 = DegreesMinutesSeconds::from(c(27.50, -82.75));
        let dms2 = DegreesMinutesSeconds::new(27, 30, 0.0, -82, 45, 0.0).unwrap();
        assert_eq!(dms1, dms2);

        let others = [
            DegreesMinutesSeconds::new(27, 30, 30.0, -82, 45, 0.0).unwrap(),
            DegreesMinutesSeconds::new(27, 30, 0.0, -82, 45, 30.0).unwrap(),
            DegreesMinutesSeconds::new(27, 0, 30.0, -82, 45, 0.0).unwrap(),
            DegreesMinutesSeconds::new(27, 2, 30.0, -82, 45, 0.0).unwrap(),
            DegreesMinutesSeconds::new(27, 30, 30.0, -82, 15, 0.0).unwrap(),
            DegreesMinutesSeconds::new(15, 30, 0.0, -82, 45, 0.0).unwrap(),
            DegreesMinutesSeconds::new(27, 30, 30.0, -81, 45, 0.0).unwrap(),
        ];
        for other in &others {
            assert_ne!(&dms2, other);
        }

        let set: HashSet<_> = others.iter().chain([&dms1, &dms2]).collect();
        assert_eq!(set.len(), 8);
    }
}
