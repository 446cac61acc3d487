//! PVScope Geo - Ring measurement and drawn-shape input
//!
//! This crate implements the area measurement port on top of the `geo`
//! crate and reads drawn shapes from GeoJSON.

pub mod area;
pub mod geojson_input;
pub mod models;
pub mod validation;

pub use area::{measure_area, PolygonAreaMeasurer};
pub use geojson_input::{parse_ring, ring_from_value};
