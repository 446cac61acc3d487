//! Conversions between drawn rings and `geo` crate types.
//!
//! Rings hold (lat, lon); `geo` and GeoJSON use x = longitude, y = latitude.

use geo::{Coord, LineString, Polygon};

pub use pvscope_core::models::{AreaMethod, Bounds, Coordinate, Ring};

/// Convert a coordinate to a geo::Coord
pub fn to_geo_coord(coordinate: &Coordinate) -> Coord {
    Coord { x: coordinate.lon, y: coordinate.lat }
}

/// Convert a geo::Coord to a coordinate
pub fn from_geo_coord(coord: &Coord) -> Coordinate {
    Coordinate::new(coord.y, coord.x)
}

/// Convert a ring to a hole-free geo::Polygon.
///
/// `Polygon::new` closes the exterior, so an open ring is closed implicitly
/// and a closed one is left as is.
pub fn to_geo_polygon(ring: &Ring) -> Polygon {
    let coords: Vec<Coord> = ring.coordinates().iter().map(to_geo_coord).collect();
    Polygon::new(LineString::new(coords), vec![])
}

/// Extension trait for Ring with geo-crate operations
pub trait RingExt {
    /// Convert to geo::Polygon
    fn to_geo(&self) -> Polygon;

    /// Get the centroid as a coordinate
    fn centroid(&self) -> Option<Coordinate>;
}

impl RingExt for Ring {
    fn to_geo(&self) -> Polygon {
        to_geo_polygon(self)
    }

    fn centroid(&self) -> Option<Coordinate> {
        use geo::algorithm::centroid::Centroid;
        self.to_geo().centroid().map(|p| from_geo_coord(&p.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Ring {
        Ring::new(vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 2.0),
            Coordinate::new(2.0, 2.0),
            Coordinate::new(2.0, 0.0),
        ])
    }

    #[test]
    fn test_axis_order() {
        let coord = to_geo_coord(&Coordinate::new(40.7, -73.9));
        assert_eq!(coord.x, -73.9);
        assert_eq!(coord.y, 40.7);
        assert_eq!(from_geo_coord(&coord), Coordinate::new(40.7, -73.9));
    }

    #[test]
    fn test_open_ring_is_closed_by_conversion() {
        let polygon = square().to_geo();
        let exterior = polygon.exterior();
        assert_eq!(exterior.0.len(), 5);
        assert_eq!(exterior.0.first(), exterior.0.last());
    }

    #[test]
    fn test_closed_ring_is_not_closed_twice() {
        let mut coords = square().coordinates().to_vec();
        coords.push(coords[0]);
        let polygon = to_geo_polygon(&Ring::new(coords));
        assert_eq!(polygon.exterior().0.len(), 5);
    }

    #[test]
    fn test_centroid() {
        let centroid = square().centroid().unwrap();
        assert!((centroid.lat - 1.0).abs() < 1e-10);
        assert!((centroid.lon - 1.0).abs() < 1e-10);
    }
}
