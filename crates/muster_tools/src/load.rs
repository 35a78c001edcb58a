//! Reading catalogs and rosters from RON files.

use std::path::Path;

use muster_core::catalog::Catalog;
use muster_core::error::{MusterError, Result};
use muster_core::roster::Roster;

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| MusterError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load and index a catalog RON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid RON, or
/// repeats an id.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let source = read(path)?;
    Catalog::from_ron_str(&source, &path.display().to_string())
}

/// Load a roster RON file and clamp it into the ranges `catalog` allows.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid roster.
pub fn load_roster(path: &Path, catalog: &Catalog) -> Result<Roster> {
    let source = read(path)?;
    let mut roster: Roster = ron::from_str(&source).map_err(|e| MusterError::DataParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    roster.normalize(catalog);

    tracing::info!(
        "Loaded roster '{}' with {} units and {} ships",
        roster.company_name,
        roster.units.len(),
        roster.ships.len()
    );
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_catalog(Path::new("does/not/exist.ron")).unwrap_err();
        assert!(matches!(err, MusterError::Io { .. }));
    }

    #[test]
    fn test_load_roster_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"Roster(
                force_point_limit: 150,
                faction_id: Some("france"),
                characters: ["musician"],
            )"#
        )
        .unwrap();

        let roster = load_roster(file.path(), &Catalog::default()).unwrap();
        assert_eq!(roster.force_point_limit, 150);
        assert_eq!(roster.faction_id.as_deref(), Some("france"));
        assert!(roster.characters.contains("musician"));
        assert_eq!(roster.retinue_size, 3);
    }

    #[test]
    fn test_loaded_roster_is_clamped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"Roster(
                leader_type_id: Some("noble"),
                retinue_size: 40,
                units: [UnitEntry(id: 1, unit_profile_id: "footmen", quantity: 1000000000)],
            )"#
        )
        .unwrap();

        let catalog = muster_test_utils::fixtures::test_catalog();
        let roster = load_roster(file.path(), &catalog).unwrap();
        assert_eq!(roster.retinue_size, 6);
        assert_eq!(roster.units[0].quantity, 12);
        assert_eq!(muster_core::cost::retinue_base_cost(&roster, &catalog), 9 * 6);
    }

    #[test]
    fn test_malformed_roster_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Roster(force_point_limit: \"lots\")").unwrap();

        let err = load_roster(file.path(), &Catalog::default()).unwrap_err();
        assert!(matches!(err, MusterError::DataParseError { .. }));
    }
}
