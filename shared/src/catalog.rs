//! Rule catalog
//!
//! The versioned table of alert thresholds and per-crop advisory rules that
//! feeds alert synthesis and advisory resolution. Rules are plain data: each
//! one names the weather field it reads, a threshold, and what it yields when
//! the reading is strictly above that threshold.
//!
//! A catalog is installed once per process (see [`RuleCatalog::install`]) and
//! is read-only afterwards. Without an explicit install the built-in table is
//! used.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{AdvisoryError, AdvisoryResult};
use crate::models::{Alert, WeatherSnapshot};
use crate::types::{RiskLevel, SeverityColor, WeatherField};

/// Version tag of the built-in table
pub const BUILTIN_CATALOG_VERSION: &str = "2024.1";

static CATALOG: OnceLock<RuleCatalog> = OnceLock::new();

// ============================================================================
// Rule Types
// ============================================================================

/// Global weather alert rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRule {
    pub id: String,
    pub field: WeatherField,
    pub threshold: f64,
    pub title: String,
    pub description: String,
    pub severity_color: SeverityColor,
}

impl AlertRule {
    pub fn fires(&self, weather: &WeatherSnapshot) -> bool {
        weather.reading(self.field) > self.threshold
    }

    pub fn to_alert(&self) -> Alert {
        Alert {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            severity_color: self.severity_color,
        }
    }
}

/// Single-dimension risk rule for one crop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskRule {
    pub field: WeatherField,
    pub threshold: f64,
    /// Tier when the reading is strictly above the threshold
    pub above: RiskLevel,
    pub otherwise: RiskLevel,
}

impl RiskRule {
    pub fn evaluate(&self, weather: &WeatherSnapshot) -> RiskLevel {
        if weather.reading(self.field) > self.threshold {
            self.above
        } else {
            self.otherwise
        }
    }
}

/// Advisory rule for a named crop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropAdvisoryRule {
    pub crop_name: String,
    pub advisory: String,
    pub irrigation: String,
    pub sowing: String,
    pub spraying: String,
    pub harvesting: String,
    pub risk: RiskRule,
}

/// Fallback rule for crops missing from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultAdvisoryRule {
    pub advisory: String,
    pub irrigation: String,
    pub sowing: String,
    pub spraying: String,
    pub harvesting: String,
    pub risk_level: RiskLevel,
}

/// Action lists selected by the binary high/other risk split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedActions {
    pub high_risk: Vec<String>,
    pub standard: Vec<String>,
}

/// Serialized form of a catalog, used for overrides loaded at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub version: String,
    pub alert_rules: Vec<AlertRule>,
    pub fallback_alert: Alert,
    pub crops: Vec<CropAdvisoryRule>,
    pub default_rule: DefaultAdvisoryRule,
    pub actions: RecommendedActions,
}

// ============================================================================
// Catalog
// ============================================================================

/// Immutable, validated rule table
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    document: CatalogDocument,
    index: HashMap<String, usize>,
}

impl RuleCatalog {
    /// Build a catalog from a document, checking it is internally consistent
    pub fn from_document(document: CatalogDocument) -> AdvisoryResult<Self> {
        if document.version.trim().is_empty() {
            return Err(AdvisoryError::Catalog("version is empty".to_string()));
        }
        if document.actions.high_risk.is_empty() || document.actions.standard.is_empty() {
            return Err(AdvisoryError::Catalog(
                "recommended action lists must not be empty".to_string(),
            ));
        }
        for rule in &document.alert_rules {
            if !rule.threshold.is_finite() {
                return Err(AdvisoryError::Catalog(format!(
                    "alert rule '{}' has a non-finite threshold",
                    rule.id
                )));
            }
        }

        let mut index = HashMap::with_capacity(document.crops.len());
        for (position, crop) in document.crops.iter().enumerate() {
            if !crop.risk.threshold.is_finite() {
                return Err(AdvisoryError::Catalog(format!(
                    "crop '{}' has a non-finite risk threshold",
                    crop.crop_name
                )));
            }
            if index.insert(crop.crop_name.clone(), position).is_some() {
                return Err(AdvisoryError::Catalog(format!(
                    "duplicate crop '{}'",
                    crop.crop_name
                )));
            }
        }

        Ok(Self { document, index })
    }

    /// Parse and validate a JSON catalog document
    pub fn from_json(json: &str) -> AdvisoryResult<Self> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|e| AdvisoryError::Catalog(e.to_string()))?;
        Self::from_document(document)
    }

    /// The built-in rule table
    pub fn builtin() -> Self {
        let crops = CROP_TABLE.iter().map(CropEntry::to_rule).collect::<Vec<_>>();
        let index = crops
            .iter()
            .enumerate()
            .map(|(position, crop)| (crop.crop_name.clone(), position))
            .collect();

        let document = CatalogDocument {
            version: BUILTIN_CATALOG_VERSION.to_string(),
            alert_rules: ALERT_TABLE.iter().map(AlertEntry::to_rule).collect(),
            fallback_alert: Alert {
                id: "favorable".to_string(),
                title: "Favorable Conditions".to_string(),
                description: "Current weather conditions are suitable for farming operations."
                    .to_string(),
                severity_color: SeverityColor::Green,
            },
            crops,
            default_rule: DefaultAdvisoryRule {
                advisory: "Monitor weather conditions and follow standard agronomic practices for your crop.".to_string(),
                irrigation: "Follow local agricultural guidelines for irrigation.".to_string(),
                sowing: "Follow recommended sowing schedule for your region.".to_string(),
                spraying: "Always follow pesticide label instructions.".to_string(),
                harvesting: "Harvest at optimal maturity stage for quality.".to_string(),
                risk_level: RiskLevel::Medium,
            },
            actions: RecommendedActions {
                high_risk: to_strings(&HIGH_RISK_ACTIONS),
                standard: to_strings(&STANDARD_ACTIONS),
            },
        };

        Self { document, index }
    }

    /// Install the process-wide catalog. Only the first call succeeds, and
    /// only if nothing has read the global catalog yet.
    pub fn install(catalog: RuleCatalog) -> AdvisoryResult<&'static RuleCatalog> {
        CATALOG
            .set(catalog)
            .map_err(|_| AdvisoryError::CatalogAlreadyInstalled)?;
        Ok(Self::global())
    }

    /// The process-wide catalog, falling back to the built-in table
    pub fn global() -> &'static RuleCatalog {
        CATALOG.get_or_init(RuleCatalog::builtin)
    }

    pub fn version(&self) -> &str {
        &self.document.version
    }

    /// Alert rules in emission order
    pub fn alert_rules(&self) -> &[AlertRule] {
        &self.document.alert_rules
    }

    pub fn fallback_alert(&self) -> &Alert {
        &self.document.fallback_alert
    }

    /// Exact, case-sensitive lookup
    pub fn crop_rule(&self, crop_name: &str) -> Option<&CropAdvisoryRule> {
        self.index
            .get(crop_name)
            .map(|&position| &self.document.crops[position])
    }

    /// Known crop names in catalog order
    pub fn crop_names(&self) -> impl Iterator<Item = &str> {
        self.document.crops.iter().map(|crop| crop.crop_name.as_str())
    }

    pub fn default_rule(&self) -> &DefaultAdvisoryRule {
        &self.document.default_rule
    }

    pub fn actions_for(&self, risk: RiskLevel) -> &[String] {
        if risk.is_high() {
            &self.document.actions.high_risk
        } else {
            &self.document.actions.standard
        }
    }

    pub fn document(&self) -> &CatalogDocument {
        &self.document
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

// ============================================================================
// Built-in Table
// ============================================================================

struct AlertEntry {
    id: &'static str,
    field: WeatherField,
    threshold: f64,
    title: &'static str,
    description: &'static str,
    severity_color: SeverityColor,
}

impl AlertEntry {
    fn to_rule(&self) -> AlertRule {
        AlertRule {
            id: self.id.to_string(),
            field: self.field,
            threshold: self.threshold,
            title: self.title.to_string(),
            description: self.description.to_string(),
            severity_color: self.severity_color,
        }
    }
}

const ALERT_TABLE: [AlertEntry; 4] = [
    AlertEntry {
        id: "heavy_rain",
        field: WeatherField::Rainfall,
        threshold: 60.0,
        title: "Heavy Rain Warning",
        description: "Delay pesticide spraying and ensure proper drainage. Risk of waterlogging.",
        severity_color: SeverityColor::Red,
    },
    AlertEntry {
        id: "heat_stress",
        field: WeatherField::Temperature,
        threshold: 35.0,
        title: "Heat Stress Alert",
        description: "High temperature detected. Increase irrigation frequency and provide shade if needed.",
        severity_color: SeverityColor::Orange,
    },
    AlertEntry {
        id: "high_humidity",
        field: WeatherField::Humidity,
        threshold: 85.0,
        title: "High Humidity Alert",
        description: "Ideal conditions for fungal diseases. Apply preventive fungicide treatment.",
        severity_color: SeverityColor::Yellow,
    },
    AlertEntry {
        id: "strong_wind",
        field: WeatherField::Wind,
        threshold: 15.0,
        title: "Strong Wind Alert",
        description: "Do not conduct any spraying operations. Avoid mechanical operations.",
        severity_color: SeverityColor::Blue,
    },
];

const HIGH_RISK_ACTIONS: [&str; 3] = [
    "Monitor field conditions closely due to unfavorable weather",
    "Postpone any planned pesticide spraying",
    "Check drainage systems and clear if necessary",
];

const STANDARD_ACTIONS: [&str; 3] = [
    "Weather conditions are favorable for operations",
    "Ideal time for irrigation or pesticide application",
    "Continue regular monitoring for pest and disease",
];

struct CropEntry {
    name: &'static str,
    advisory: &'static str,
    irrigation: &'static str,
    sowing: &'static str,
    spraying: &'static str,
    harvesting: &'static str,
    risk: RiskRule,
}

impl CropEntry {
    fn to_rule(&self) -> CropAdvisoryRule {
        CropAdvisoryRule {
            crop_name: self.name.to_string(),
            advisory: self.advisory.to_string(),
            irrigation: self.irrigation.to_string(),
            sowing: self.sowing.to_string(),
            spraying: self.spraying.to_string(),
            harvesting: self.harvesting.to_string(),
            risk: self.risk,
        }
    }
}

const fn risk(field: WeatherField, threshold: f64, above: RiskLevel, otherwise: RiskLevel) -> RiskRule {
    RiskRule {
        field,
        threshold,
        above,
        otherwise,
    }
}

const CROP_TABLE: [CropEntry; 10] = [
    CropEntry {
        name: "Rice",
        advisory: "Ensure proper drainage during heavy rainfall. Avoid fertilizer application on rainy days. Monitor water level in paddies.",
        irrigation: "Daily monitoring needed. Reduce irrigation during rainfall.",
        sowing: "Best during monsoon. Avoid if temperature drops below 20°C.",
        spraying: "Do not spray pesticides during heavy rain. Wait 2 days after rain.",
        harvesting: "Harvest when grain moisture is 20-25%. Avoid during high humidity.",
        risk: risk(WeatherField::Rainfall, 60.0, RiskLevel::High, RiskLevel::Medium),
    },
    CropEntry {
        name: "Wheat",
        advisory: "Monitor humidity closely to prevent fungal diseases. Maintain soil moisture levels. Avoid waterlogging.",
        irrigation: "3-4 irrigations needed. First irrigation at crown root stage.",
        sowing: "Optimal: October-November. Temperature should be 15-25°C.",
        spraying: "Spray fungicides if humidity > 85%. Avoid during winds > 15 km/h.",
        harvesting: "Harvest at 12-13% moisture. Typically April-May.",
        risk: risk(WeatherField::Humidity, 80.0, RiskLevel::High, RiskLevel::Low),
    },
    CropEntry {
        name: "Cotton",
        advisory: "Avoid pesticide spraying during high wind and rainfall. Ensure good drainage. Monitor for pest infestations.",
        irrigation: "6-8 irrigations needed depending on rainfall. Critical at flowering stage.",
        sowing: "May-June. Soil temperature should be > 20°C.",
        spraying: "Do not spray if wind speed > 20 km/h. Spray early morning or late evening.",
        harvesting: "First pick at 60% boll opening. September-October.",
        risk: risk(WeatherField::Wind, 15.0, RiskLevel::High, RiskLevel::Medium),
    },
    CropEntry {
        name: "Maize",
        advisory: "Ensure good drainage to prevent root diseases. Monitor for pests in high humidity. Provide support during storms.",
        irrigation: "5-6 irrigations needed. Critical at tasseling stage.",
        sowing: "March-April or June-July depending on season. Soil temp > 15°C.",
        spraying: "Spray in early morning. Avoid within 48 hours of rainfall.",
        harvesting: "Harvest when grain reaches 20-25% moisture. August-September.",
        risk: risk(WeatherField::Humidity, 75.0, RiskLevel::Medium, RiskLevel::Low),
    },
    CropEntry {
        name: "Sugarcane",
        advisory: "Maintain consistent irrigation. Heavy rainfall may cause root rot. Monitor for pests.",
        irrigation: "Year-round irrigation needed. 18-24 months crop cycle.",
        sowing: "February-March or September-October. Temp 20-30°C ideal.",
        spraying: "Spray insecticides every 15 days during growing season.",
        harvesting: "Harvest after 12 months. Best during November-March.",
        risk: risk(WeatherField::Humidity, 85.0, RiskLevel::High, RiskLevel::Low),
    },
    CropEntry {
        name: "Potato",
        advisory: "Ensure proper drainage to prevent late blight. Monitor humidity for fungal diseases. Avoid frost.",
        irrigation: "4-5 irrigations needed. Regular monitoring required.",
        sowing: "September-October. Temperature 15-20°C optimal.",
        spraying: "Spray fungicide weekly if rainfall > 2mm. Early blight control crucial.",
        harvesting: "Harvest 3-4 months after planting. March-April.",
        risk: risk(WeatherField::Humidity, 90.0, RiskLevel::High, RiskLevel::Low),
    },
    CropEntry {
        name: "Tomato",
        advisory: "Avoid overhead watering to prevent fungal diseases. Ensure good air circulation. Monitor for pests.",
        irrigation: "Drip irrigation recommended. 20-25 days interval.",
        sowing: "Year-round possible. Temperature 20-25°C optimal.",
        spraying: "Do not spray during extreme heat. Early morning best.",
        harvesting: "Harvest at pink stage. 60-80 days after flowering.",
        risk: risk(WeatherField::Temperature, 35.0, RiskLevel::High, RiskLevel::Low),
    },
    CropEntry {
        name: "Onion",
        advisory: "Good drainage essential. Avoid waterlogging. Monitor for pink rot in high humidity.",
        irrigation: "8-10 irrigations needed. Reduce in last month.",
        sowing: "October-November. Temperature 13-24°C optimal.",
        spraying: "Spray fungicide if humidity > 85%. Avoid in last 2 weeks before harvest.",
        harvesting: "When 50% foliage turns yellow. March-April.",
        risk: risk(WeatherField::Rainfall, 50.0, RiskLevel::Medium, RiskLevel::Low),
    },
    CropEntry {
        name: "Chilli",
        advisory: "Avoid excess moisture. Ensure good air circulation. Monitor for pest infestations.",
        irrigation: "Summer: 7-10 days, Winter: 15-20 days.",
        sowing: "May-June. Temperature 20-30°C optimal.",
        spraying: "Spray weekly for pest management. Avoid after irrigation.",
        harvesting: "Continuous picking from 150 days. August-September.",
        risk: risk(WeatherField::Humidity, 80.0, RiskLevel::Medium, RiskLevel::Low),
    },
    CropEntry {
        name: "Banana",
        advisory: "Ensure continuous irrigation. Protect from strong winds. Mulch heavily.",
        irrigation: "Regular throughout year. 200-250mm monthly needed.",
        sowing: "June-July best. Temperature 20-30°C optimal.",
        spraying: "Monthly spray for disease management. Avoid during heavy rain.",
        harvesting: "9-12 months after planting. Year-round harvesting possible.",
        risk: risk(WeatherField::Wind, 20.0, RiskLevel::High, RiskLevel::Low),
    },
];
