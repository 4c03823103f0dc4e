//! Rule catalog installation tests
//!
//! The catalog is installed once per process, so this binary walks the whole
//! startup lifecycle in a single ordered test.

use std::path::PathBuf;

use crop_advisory_backend::{config::CatalogConfig, install_catalog, AppError, Config};
use shared::{synthesize_alerts, AdvisoryError, RuleCatalog, WeatherSnapshot};

const OVERRIDE_VERSION: &str = "2025.2-field-trial";

fn config_with_catalog(path: &PathBuf) -> Config {
    Config {
        catalog: CatalogConfig {
            path: Some(path.to_string_lossy().into_owned()),
        },
        ..Config::default()
    }
}

fn scratch_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("advisory-{}-{}", std::process::id(), name))
}

/// Built-in table with a new version and a raised heavy-rain threshold
fn override_json() -> String {
    let mut document = RuleCatalog::builtin().document().clone();
    document.version = OVERRIDE_VERSION.to_string();
    for rule in &mut document.alert_rules {
        if rule.id == "heavy_rain" {
            rule.threshold = 100.0;
        }
    }
    serde_json::to_string(&document).unwrap()
}

#[test]
fn test_catalog_install_lifecycle() {
    // Unreadable path is a configuration error and installs nothing
    let missing = scratch_file("missing.json");
    let err = install_catalog(&config_with_catalog(&missing)).unwrap_err();
    assert!(matches!(err, AppError::Configuration(ref msg) if msg.contains("missing.json")));

    // Malformed document is a catalog error and installs nothing
    let malformed = scratch_file("malformed.json");
    std::fs::write(&malformed, r#"{ "version": "x", "alert_rules": 3 }"#).unwrap();
    let err = install_catalog(&config_with_catalog(&malformed)).unwrap_err();
    assert!(matches!(err, AppError::Catalog(_)));

    // Valid override becomes the process-wide catalog
    let valid = scratch_file("override.json");
    std::fs::write(&valid, override_json()).unwrap();
    let installed = install_catalog(&config_with_catalog(&valid)).unwrap();
    assert_eq!(installed.version(), OVERRIDE_VERSION);
    assert!(std::ptr::eq(installed, RuleCatalog::global()));
    assert_eq!(RuleCatalog::global().version(), OVERRIDE_VERSION);

    // Evaluation reads the installed rules: 70 mm no longer crosses 100 mm
    let alerts = synthesize_alerts(&WeatherSnapshot::new(20.0, 70.0, 50.0, 5.0)).unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].id, "favorable");

    // A second install is refused and the first catalog stays in place
    let err = install_catalog(&Config::default()).unwrap_err();
    assert!(matches!(err, AppError::Catalog(_)));
    assert_eq!(
        RuleCatalog::install(RuleCatalog::builtin()).unwrap_err(),
        AdvisoryError::CatalogAlreadyInstalled
    );
    assert_eq!(RuleCatalog::global().version(), OVERRIDE_VERSION);

    for path in [malformed, valid] {
        let _ = std::fs::remove_file(path);
    }
}
