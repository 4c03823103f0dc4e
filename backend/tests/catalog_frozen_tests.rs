//! Reading the global catalog before install freezes the built-in table

use crop_advisory_backend::{install_catalog, AppError, Config};
use shared::{AdvisoryError, RuleCatalog, BUILTIN_CATALOG_VERSION};

#[test]
fn test_install_after_global_read_is_refused() {
    assert_eq!(RuleCatalog::global().version(), BUILTIN_CATALOG_VERSION);

    assert_eq!(
        RuleCatalog::install(RuleCatalog::builtin()).unwrap_err(),
        AdvisoryError::CatalogAlreadyInstalled
    );

    let err = install_catalog(&Config::default()).unwrap_err();
    assert!(matches!(err, AppError::Catalog(ref msg) if msg.contains("already been installed")));

    assert_eq!(RuleCatalog::global().version(), BUILTIN_CATALOG_VERSION);
}
