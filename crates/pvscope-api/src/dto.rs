pub mod request;
pub mod response;

pub use request::EstimateRequest;
pub use response::{EstimateResponse, HealthResponse, MeasureResponse};
