//! Domain models for the Crop Advisory platform

mod advisory;
mod disease;
mod prediction;
mod risk;
mod weather;

pub use advisory::*;
pub use disease::*;
pub use prediction::*;
pub use risk::*;
pub use weather::*;
