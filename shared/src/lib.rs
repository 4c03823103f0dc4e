//! Decision core for the Crop Advisory platform
//!
//! Pure, synchronous evaluation shared between the backend server and the
//! browser (via WASM):
//! - ranking of ML crop recommendations
//! - weather alert synthesis
//! - crop-specific advisory resolution
//!
//! Every entry point reads the process-wide [`RuleCatalog`] and never
//! performs I/O.

pub mod advisory;
pub mod alerts;
pub mod catalog;
pub mod error;
pub mod models;
pub mod ranking;
pub mod types;
pub mod validation;

pub use advisory::*;
pub use alerts::*;
pub use catalog::*;
pub use error::*;
pub use models::*;
pub use ranking::*;
pub use types::*;
pub use validation::*;
