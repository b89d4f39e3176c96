//! Encoding and decoding of locations as geo URIs ([RFC 5870](https://datatracker.ietf.org/doc/html/rfc5870)).
//!
//! Only the coordinates part of the URI is supported: `geo:<lat>,<lon>` or `geo:<lat>,<lon>,<elevation>`, with the
//! elevation in meters. URI parameters (everything after the first `;`) are accepted and ignored when parsing, and
//! never written when encoding.
//!
//! ```
//! use latlong::{Coordinate, Location};
//!
//! let location = latlong::geo_uri::parse("geo:25.25,-80.125;u=10").unwrap();
//! assert_eq!(location, Location::Surface(Coordinate::new(25.25, -80.125).unwrap()));
//! assert_eq!(location.to_geo_uri(), "geo:25.25,-80.125");
//! ```

use std::str::FromStr;

use uom::si::f64::Length;
use uom::si::length::meter;

use crate::error::{GeoError, Result};
use crate::geo::{Coordinate, ElevationCoordinate, Location};

/// URI scheme of geo URIs.
pub const SCHEME: &str = "geo";

/// Parses a geo URI.
///
/// Two coordinate values give a [`Location::Surface`], three give a [`Location::Elevated`].
///
/// Fails with:
/// * [`GeoError::Scheme`] if the scheme is not `geo` (compared case-insensitively);
/// * [`GeoError::MalformedCoordinate`] if there are not 2 or 3 values or a value is not a number;
/// * a range error if a value is out of its valid bounds.
pub fn parse(uri: &str) -> Result<Location> {
    let Some((scheme, rest)) = uri.split_once(':') else {
        return Err(GeoError::Scheme {
            scheme: String::new(),
            uri: uri.to_string(),
        });
    };

    if !scheme.eq_ignore_ascii_case(SCHEME) {
        return Err(GeoError::Scheme {
            scheme: scheme.to_string(),
            uri: uri.to_string(),
        });
    }

    let coordinates = match rest.split_once(';') {
        Some((coordinates, _parameters)) => coordinates,
        None => rest,
    };

    let values = coordinates
        .split(',')
        .map(|value| parse_value(value, uri))
        .collect::<Result<Vec<f64>>>()?;

    match values[..] {
        [latitude, longitude] => Ok(Location::Surface(Coordinate::new(latitude, longitude)?)),
        [latitude, longitude, elevation] => Ok(Location::Elevated(ElevationCoordinate::from_degrees(
            latitude,
            longitude,
            Length::new::<meter>(elevation),
        )?)),
        _ => Err(GeoError::MalformedCoordinate(format!(
            "expected 2 or 3 comma-separated values in '{uri}', found {}",
            values.len()
        ))),
    }
}

fn parse_value(value: &str, uri: &str) -> Result<f64> {
    value
        .parse()
        .map_err(|_| GeoError::MalformedCoordinate(format!("'{value}' is not a number in '{uri}'")))
}

impl Coordinate {
    /// Encodes the coordinate as a geo URI, e.g. `geo:25.25,-80.125`.
    pub fn to_geo_uri(&self) -> String {
        format!("{SCHEME}:{},{}", self.latitude(), self.longitude())
    }
}

impl ElevationCoordinate {
    /// Encodes the location as a geo URI, e.g. `geo:25.25,-80.125,50`.
    pub fn to_geo_uri(&self) -> String {
        format!(
            "{},{}",
            self.coordinate().to_geo_uri(),
            self.elevation().get::<meter>()
        )
    }
}

impl Location {
    /// Encodes the location as a geo URI.
    pub fn to_geo_uri(&self) -> String {
        match self {
            Location::Surface(c) => c.to_geo_uri(),
            Location::Elevated(c) => c.to_geo_uri(),
        }
    }
}

impl FromStr for Location {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl FromStr for Coordinate {
    type Err = GeoError;

    /// Parses a geo URI without elevation.
    fn from_str(s: &str) -> Result<Self> {
        match parse(s)? {
            Location::Surface(c) => Ok(c),
            Location::Elevated(_) => Err(GeoError::MalformedCoordinate(format!(
                "expected 2 comma-separated values in '{s}', found 3"
            ))),
        }
    }
}

impl FromStr for ElevationCoordinate {
    type Err = GeoError;

    /// Parses a geo URI with elevation.
    fn from_str(s: &str) -> Result<Self> {
        match parse(s)? {
            Location::Elevated(c) => Ok(c),
            Location::Surface(_) => Err(GeoError::MalformedCoordinate(format!(
                "expected 3 comma-separated values in '{s}', found 2"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn round_trip() {
        let a = Coordinate::new(25.25, -80.125).unwrap();
        assert_eq!(parse("geo:25.25,-80.125").unwrap(), Location::Surface(a));
        assert_eq!(a.to_geo_uri(), "geo:25.25,-80.125");
        assert_eq!("geo:25.25,-80.125".parse::<Coordinate>().unwrap(), a);

        let b = Coordinate::new(25.0, -80.0).unwrap();
        assert_eq!("geo:25,-80".parse::<Coordinate>().unwrap(), b);
        assert_eq!(b.to_geo_uri(), "geo:25,-80");
    }

    #[test]
    fn elevation() {
        let l1 =
            ElevationCoordinate::from_degrees(25.25, -80.125, Length::new::<meter>(50.0)).unwrap();
        assert_eq!(l1.to_geo_uri(), "geo:25.25,-80.125,50");
        assert_eq!(parse("geo:25.25,-80.125,50").unwrap(), Location::Elevated(l1));
        assert_eq!("geo:25.25,-80.125,50".parse::<ElevationCoordinate>().unwrap(), l1);
        assert_eq!(Location::Elevated(l1).to_geo_uri(), "geo:25.25,-80.125,50");
    }

    #[test]
    fn parameters_are_ignored() {
        let a = Coordinate::new(48.2010, 16.3695).unwrap();
        assert_eq!(
            "geo:48.2010,16.3695;crs=wgs84;u=40".parse::<Coordinate>().unwrap(),
            a
        );
        assert_eq!(a.to_geo_uri(), "geo:48.201,16.3695");
    }

    #[test]
    fn scheme() {
        assert_matches!(
            parse("geography:25.250,-80.125"),
            Err(GeoError::Scheme { scheme, .. }) if scheme == "geography"
        );
        assert_matches!(
            parse("25.250,-80.125"),
            Err(GeoError::Scheme { scheme, .. }) if scheme.is_empty()
        );
        assert!(parse("GEO:25.250,-80.125").is_ok());
    }

    #[test]
    fn out_of_range() {
        assert_matches!(parse("geo:91,0"), Err(GeoError::InvalidLatitude(_)));
        assert_matches!(parse("geo:-91,0"), Err(GeoError::InvalidLatitude(_)));
        assert_matches!(parse("geo:0,181"), Err(GeoError::InvalidLongitude(_)));
        assert_matches!(parse("geo:0,-181"), Err(GeoError::InvalidLongitude(_)));
        assert_matches!(parse("geo:0,0,NaN"), Err(GeoError::InvalidElevation(_)));
    }

    #[test]
    fn malformed() {
        assert_matches!(parse("geo:25.25"), Err(GeoError::MalformedCoordinate(_)));
        assert_matches!(parse("geo:1,2,3,4"), Err(GeoError::MalformedCoordinate(_)));
        assert_matches!(parse("geo:"), Err(GeoError::MalformedCoordinate(_)));
        assert_matches!(parse("geo:north,-80"), Err(GeoError::MalformedCoordinate(_)));
        assert_matches!(
            "geo:25.25,-80.125,50".parse::<Coordinate>(),
            Err(GeoError::MalformedCoordinate(_))
        );
        assert_matches!(
            "geo:25.25,-80.125".parse::<ElevationCoordinate>(),
            Err(GeoError::MalformedCoordinate(_))
        );
    }
}
