pub mod estimation;
pub mod geometry;

pub use estimation::{Potential, PvCoefficients, PvEstimation};
pub use geometry::{AreaMethod, Bounds, Coordinate, Ring};
