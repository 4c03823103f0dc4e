//! Business logic services for the Crop Advisory server

pub mod disease;
pub mod recommendation;
pub mod risk;
pub mod weather;

pub use disease::DiseaseService;
pub use recommendation::RecommendationService;
pub use risk::RiskService;
pub use weather::WeatherAdvisoryService;
