//! WebAssembly module for the Crop Advisory platform
//!
//! Runs the decision core in the browser so the dashboard can work offline:
//! - Recommendation ranking
//! - Weather alerts and crop advisories
//! - Disease result gating
//!
//! Every function takes and returns JSON strings.

use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

use shared::RuleCatalog;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    let catalog = RuleCatalog::global();
    web_sys::console::log_1(
        &format!("crop advisory catalog {} loaded", catalog.version()).into(),
    );
}

/// Rank a recommendation service response
#[wasm_bindgen]
pub fn rank_recommendations(result_json: &str) -> Result<String, JsValue> {
    to_js(present(result_json))
}

/// Weather alerts for a snapshot
#[wasm_bindgen]
pub fn synthesize_weather_alerts(weather_json: &str) -> Result<String, JsValue> {
    to_js(alerts(weather_json))
}

/// Advisory bundle for one crop under the given weather
#[wasm_bindgen]
pub fn resolve_crop_advisory(crop: &str, weather_json: &str) -> Result<String, JsValue> {
    to_js(advisory(crop, weather_json))
}

/// Alerts plus an optional crop advisory
#[wasm_bindgen]
pub fn evaluate_weather_json(crop: Option<String>, weather_json: &str) -> Result<String, JsValue> {
    to_js(evaluate(crop.as_deref(), weather_json))
}

/// Gate a disease detection response
#[wasm_bindgen]
pub fn assess_disease_json(result_json: &str) -> Result<String, JsValue> {
    to_js(assess(result_json))
}

/// Crop names with a dedicated advisory
#[wasm_bindgen]
pub fn supported_crops() -> Vec<String> {
    RuleCatalog::global().crop_names().map(str::to_string).collect()
}

fn to_js(result: Result<String, String>) -> Result<String, JsValue> {
    result.map_err(|message| js_sys::Error::new(&message).into())
}

fn parse<T: DeserializeOwned>(json: &str, what: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {} JSON: {}", what, e))
}

fn render<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}

fn present(result_json: &str) -> Result<String, String> {
    let result: CropRecommendationResult = parse(result_json, "recommendation")?;
    let set = shared::present_recommendations(&result).map_err(|e| e.to_string())?;
    render(&set)
}

fn alerts(weather_json: &str) -> Result<String, String> {
    let weather: WeatherSnapshot = parse(weather_json, "weather")?;
    let alerts = shared::synthesize_alerts(&weather).map_err(|e| e.to_string())?;
    render(&alerts)
}

fn advisory(crop: &str, weather_json: &str) -> Result<String, String> {
    let weather: WeatherSnapshot = parse(weather_json, "weather")?;
    let bundle = shared::resolve(crop, &weather).map_err(|e| e.to_string())?;
    render(&bundle)
}

fn evaluate(crop: Option<&str>, weather_json: &str) -> Result<String, String> {
    let weather: WeatherSnapshot = parse(weather_json, "weather")?;
    let crop = crop.map(str::trim).filter(|c| !c.is_empty());
    let evaluation = shared::evaluate_weather(crop, &weather).map_err(|e| e.to_string())?;
    render(&evaluation)
}

fn assess(result_json: &str) -> Result<String, String> {
    let result: DiseaseDetectionResult = parse(result_json, "disease")?;
    render(&result.assess())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const STORMY: &str =
        r#"{"temperatureC":36.0,"rainfallMm":70.0,"humidityPct":90.0,"windKmh":20.0}"#;
    const CALM: &str =
        r#"{"temperatureC":20.0,"rainfallMm":10.0,"humidityPct":50.0,"windKmh":5.0}"#;

    fn json(raw: String) -> Value {
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_alerts() {
        let value = json(alerts(STORMY).unwrap());
        assert_eq!(value.as_array().unwrap().len(), 4);
        assert_eq!(value[0]["title"], "Heavy Rain Warning");

        let value = json(alerts(CALM).unwrap());
        assert_eq!(value[0]["title"], "Favorable Conditions");
    }

    #[test]
    fn test_alerts_reject_bad_input() {
        assert!(alerts("not json").unwrap_err().starts_with("Invalid weather JSON"));

        let err = alerts(r#"{"temperatureC":20.0,"rainfallMm":10.0,"humidityPct":120.0,"windKmh":5.0}"#)
            .unwrap_err();
        assert!(err.contains("Humidity"));
    }

    #[test]
    fn test_advisory() {
        // Banana tiers on wind > 20, so exactly 20 km/h stays Low
        let value = json(advisory("Banana", STORMY).unwrap());
        assert_eq!(value["riskLevel"], "Low");
        assert_eq!(value["generic"], false);

        let gusty = r#"{"temperatureC":36.0,"rainfallMm":70.0,"humidityPct":90.0,"windKmh":21.0}"#;
        let value = json(advisory("Banana", gusty).unwrap());
        assert_eq!(value["riskLevel"], "High");

        let value = json(advisory("Unicorn-Fruit", CALM).unwrap());
        assert_eq!(value["generic"], true);
    }

    #[test]
    fn test_evaluate_blank_crop() {
        let value = json(evaluate(Some(" "), CALM).unwrap());
        assert!(value["advisory"].is_null());

        let value = json(evaluate(Some("Rice"), CALM).unwrap());
        assert_eq!(value["advisory"]["crop"], "Rice");
    }

    #[test]
    fn test_present() {
        let value = json(
            present(r#"{"recommended_crop":"rice","confidence":0.8,"alternative_crops":["jute","maize","cotton"]}"#)
                .unwrap(),
        );
        let recommendations = value["recommendations"].as_array().unwrap();
        assert_eq!(recommendations.len(), 3);
        assert_eq!(recommendations[2]["label"], "maize");

        assert!(present(r#"{"alternative_crops":[]}"#).is_err());
    }

    #[test]
    fn test_assess() {
        let value = json(assess(r#"{"disease":"Invalid","confidence":"3.10%"}"#).unwrap());
        assert_eq!(value["status"], "not_a_plant");

        let value = json(assess(r#"{"disease":"Potato_healthy","confidence":"99.10%"}"#).unwrap());
        assert_eq!(value["status"], "diagnosed");
        assert_eq!(value["healthy"], true);
    }
}
