//! Canonical geometry types for map-drawn selections.
//!
//! Coordinates are stored in (latitude, longitude) order, the order the
//! drawing surface reports them in. Conversions to GeoJSON and to the `geo`
//! crate (both x = longitude, y = latitude) live in `pvscope-geo`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PvError, Result};

/// A WGS84 position in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

/// Closed polygon boundary as drawn on the map.
///
/// The last position may repeat the first; consumers close the ring
/// implicitly either way. Self-intersection is not checked here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ring {
    coordinates: Vec<Coordinate>,
}

impl Ring {
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Whether the last position repeats the first
    pub fn is_closed(&self) -> bool {
        match (self.coordinates.first(), self.coordinates.last()) {
            (Some(first), Some(last)) => self.coordinates.len() > 1 && first == last,
            _ => false,
        }
    }

    /// Positions without the duplicated closing position
    pub fn open_coordinates(&self) -> &[Coordinate] {
        if self.is_closed() {
            &self.coordinates[..self.coordinates.len() - 1]
        } else {
            &self.coordinates
        }
    }

    /// Bounding box of the ring, or `None` when empty
    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.coordinates.first()?;
        let init = Bounds {
            min_lat: first.lat,
            min_lon: first.lon,
            max_lat: first.lat,
            max_lon: first.lon,
        };
        Some(self.coordinates.iter().skip(1).fold(init, |b, c| Bounds {
            min_lat: b.min_lat.min(c.lat),
            min_lon: b.min_lon.min(c.lon),
            max_lat: b.max_lat.max(c.lat),
            max_lon: b.max_lon.max(c.lon),
        }))
    }
}

impl From<Vec<Coordinate>> for Ring {
    fn from(coordinates: Vec<Coordinate>) -> Self {
        Self::new(coordinates)
    }
}

impl FromIterator<Coordinate> for Ring {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Latitude/longitude bounding box in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl Bounds {
    pub fn center(&self) -> Coordinate {
        Coordinate::new((self.min_lat + self.max_lat) / 2.0, (self.min_lon + self.max_lon) / 2.0)
    }
}

/// Algorithm used to measure the surface area of a ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AreaMethod {
    /// Karney's geodesic area on the WGS84 ellipsoid
    #[default]
    Geodesic,
    /// Chamberlain-Duquette spherical approximation (radius 6378137 m)
    Spherical,
}

impl AreaMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AreaMethod::Geodesic => "geodesic",
            AreaMethod::Spherical => "spherical",
        }
    }
}

impl fmt::Display for AreaMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AreaMethod {
    type Err = PvError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "geodesic" | "ellipsoidal" => Ok(AreaMethod::Geodesic),
            "spherical" | "sphere" => Ok(AreaMethod::Spherical),
            _ => Err(PvError::invalid_input(
                "area_method",
                format!("Invalid area method: {}. Use geodesic or spherical", s),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Coordinate> {
        vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 1.0),
            Coordinate::new(1.0, 1.0),
            Coordinate::new(1.0, 0.0),
        ]
    }

    #[test]
    fn test_open_ring_is_not_closed() {
        let ring = Ring::new(square());
        assert!(!ring.is_closed());
        assert_eq!(ring.open_coordinates().len(), 4);
    }

    #[test]
    fn test_closed_ring_drops_closing_position() {
        let mut coords = square();
        coords.push(coords[0]);
        let ring = Ring::new(coords);

        assert!(ring.is_closed());
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.open_coordinates().len(), 4);
    }

    #[test]
    fn test_single_point_is_not_closed() {
        let ring = Ring::new(vec![Coordinate::new(1.0, 2.0)]);
        assert!(!ring.is_closed());
    }

    #[test]
    fn test_bounds() {
        let ring = Ring::new(vec![
            Coordinate::new(40.70, -73.95),
            Coordinate::new(40.72, -73.93),
            Coordinate::new(40.71, -73.96),
        ]);
        let bounds = ring.bounds().unwrap();

        assert_eq!(bounds.min_lat, 40.70);
        assert_eq!(bounds.max_lat, 40.72);
        assert_eq!(bounds.min_lon, -73.96);
        assert_eq!(bounds.max_lon, -73.93);
        assert!((bounds.center().lat - 40.71).abs() < 1e-12);
    }

    #[test]
    fn test_empty_ring_has_no_bounds() {
        assert!(Ring::default().bounds().is_none());
    }

    #[test]
    fn test_ring_serializes_as_array() {
        let ring = Ring::new(vec![Coordinate::new(1.0, 2.0)]);
        let json = serde_json::to_string(&ring).unwrap();
        assert_eq!(json, r#"[{"lat":1.0,"lon":2.0}]"#);
    }

    #[test]
    fn test_parse_area_method() {
        assert_eq!("geodesic".parse::<AreaMethod>().unwrap(), AreaMethod::Geodesic);
        assert_eq!("SPHERICAL".parse::<AreaMethod>().unwrap(), AreaMethod::Spherical);
        assert!("planar".parse::<AreaMethod>().is_err());
    }
}
