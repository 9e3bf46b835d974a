//! Forecast domain types and feature assembly

pub mod features;
pub mod inputs;
pub mod season;
pub mod tier;

pub use features::assemble;
pub use inputs::ForecastInputs;
pub use season::Season;
pub use tier::DemandTier;
