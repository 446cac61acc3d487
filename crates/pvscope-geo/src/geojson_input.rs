//! GeoJSON input for drawn shapes
//!
//! Drawing layers export finished shapes as GeoJSON. Only the exterior ring of
//! a polygon is used; drawn rectangles and polygons never carry holes.

use geojson::{GeoJson, Geometry, Value};
use pvscope_core::error::{PvError, Result};

use crate::models::{Coordinate, Ring};

/// Parse GeoJSON text into a ring
pub fn parse_ring(content: &str) -> Result<Ring> {
    let geojson: GeoJson = content
        .parse()
        .map_err(|e| PvError::Serialization(format!("Failed to parse GeoJSON: {}", e)))?;
    ring_from_geojson(&geojson)
}

/// Extract a ring from an already-decoded JSON value
pub fn ring_from_value(value: serde_json::Value) -> Result<Ring> {
    let geojson = GeoJson::from_json_value(value)
        .map_err(|e| PvError::Serialization(format!("Failed to parse GeoJSON: {}", e)))?;
    ring_from_geojson(&geojson)
}

/// Extract the ring of a polygon geometry, feature, or the first polygonal
/// feature of a collection
pub fn ring_from_geojson(geojson: &GeoJson) -> Result<Ring> {
    match geojson {
        GeoJson::Geometry(geometry) => ring_from_geometry(geometry),
        GeoJson::Feature(feature) => match &feature.geometry {
            Some(geometry) => ring_from_geometry(geometry),
            None => Err(PvError::invalid_geometry("Feature has no geometry")),
        },
        GeoJson::FeatureCollection(collection) => collection
            .features
            .iter()
            .filter_map(|feature| feature.geometry.as_ref())
            .find(|geometry| matches!(geometry.value, Value::Polygon(_)))
            .map(ring_from_geometry)
            .unwrap_or_else(|| {
                Err(PvError::invalid_geometry("FeatureCollection contains no Polygon feature"))
            }),
    }
}

fn ring_from_geometry(geometry: &Geometry) -> Result<Ring> {
    match &geometry.value {
        Value::Polygon(rings) => {
            let exterior = rings
                .first()
                .ok_or_else(|| PvError::invalid_geometry("Polygon has no exterior ring"))?;
            if rings.len() > 1 {
                tracing::warn!(holes = rings.len() - 1, "Ignoring polygon interior rings");
            }
            exterior
                .iter()
                .enumerate()
                .map(|(i, position)| position_to_coordinate(i, position))
                .collect::<Result<Vec<_>>>()
                .map(Ring::new)
        }
        other => Err(PvError::invalid_geometry(format!(
            "Expected a Polygon geometry, found {}",
            value_type(other)
        ))),
    }
}

fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

/// GeoJSON positions are [lon, lat, (alt)]
fn position_to_coordinate(index: usize, position: &[f64]) -> Result<Coordinate> {
    match position {
        [lon, lat, ..] => Ok(Coordinate::new(*lat, *lon)),
        _ => Err(PvError::invalid_geometry(format!(
            "Position {} has {} values, expected at least 2",
            index,
            position.len()
        ))),
    }
}
