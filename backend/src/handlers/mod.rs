//! HTTP handlers for the Crop Advisory server

pub mod disease;
pub mod health;
pub mod recommendation;
pub mod risk;
pub mod weather;

pub use disease::*;
pub use health::*;
pub use recommendation::*;
pub use risk::*;
pub use weather::*;
