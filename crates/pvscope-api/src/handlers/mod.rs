mod estimate;
mod health;
mod measure;

pub use estimate::{handle_estimate, handle_export};
pub use health::health_check;
pub use measure::handle_measure;
