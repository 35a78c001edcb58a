//! Data validation utilities.

use std::path::Path;

use muster_core::error::{MusterError, Result};

/// Load a catalog file and check its referential integrity.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or any reference
/// is dangling.
pub fn check_catalog(path: &Path) -> Result<()> {
    let catalog = crate::load::load_catalog(path)?;
    let errors = catalog.validate();
    if !errors.is_empty() {
        for error in &errors {
            tracing::warn!("{error}");
        }
        return Err(MusterError::CatalogValidation { errors });
    }
    Ok(())
}
