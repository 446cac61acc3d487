//! PVScope Core - Domain models, estimation, and configuration
//!
//! This crate contains the PV estimation model, its formatters, the area
//! selection state, and the port the geometry adapter implements.

pub mod config;
pub mod error;
pub mod estimator;
pub mod export;
pub mod format;
pub mod models;
pub mod ports;
pub mod selection;

pub use error::{PvError, Result};
pub use estimator::{estimate, PvEstimator};
pub use models::{AreaMethod, Bounds, Coordinate, Potential, PvCoefficients, PvEstimation, Ring};
