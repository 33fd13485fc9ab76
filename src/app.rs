//! Application context
//!
//! Owns both workflows and the operating picture for the lifetime of the
//! process. Schemas are created once, here, when the context is opened.

use tracing::info;

use crate::config_file::AppConfig;
use crate::records::{PersonnelRecord, SupplyRecord};
use crate::sites::OperatingPicture;
use crate::store::RecordStore;
use crate::workflow::WorkflowController;

pub struct App {
    pub personnel: WorkflowController<PersonnelRecord>,
    pub supply: WorkflowController<SupplyRecord>,
    pub picture: OperatingPicture,
}

impl App {
    /// Open both stores. A schema failure on one entity leaves the other
    /// fully usable.
    pub fn open(config: &AppConfig) -> Self {
        let personnel = WorkflowController::open(RecordStore::new(config.personnel_db_path()));
        let supply = WorkflowController::open(RecordStore::new(config.supply_db_path()));
        info!(
            personnel = personnel.is_available(),
            supply = supply.is_available(),
            "record stores opened"
        );
        Self {
            personnel,
            supply,
            picture: OperatingPicture::sample(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::RawFields;
    use crate::records::{personnel, supply};
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_both_databases() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            data_dir: dir.path().join("data"),
            ..Default::default()
        };
        let app = App::open(&config);
        assert!(app.personnel.is_available());
        assert!(app.supply.is_available());
        assert!(config.personnel_db_path().exists());
        assert!(config.supply_db_path().exists());
        assert_eq!(app.picture.sites.len(), 5);
    }

    #[test]
    fn test_entities_are_independent() {
        let dir = TempDir::new().unwrap();
        // Only the personnel database sits under a regular file.
        std::fs::write(dir.path().join("blocker"), b"").unwrap();
        let config = AppConfig {
            data_dir: dir.path().to_path_buf(),
            personnel_db: "blocker/personnel.db".to_string(),
            ..Default::default()
        };

        let mut app = App::open(&config);
        let supply_fields = RawFields::new()
            .with(supply::field::ID, "S1")
            .with(supply::field::NAME, "Water")
            .with(supply::field::QUANTITY, 100);
        assert!(app.supply.submit(&supply_fields).ok);

        let personnel_fields = RawFields::new()
            .with(personnel::field::ID, "P1")
            .with(personnel::field::FIRST_NAME, "Jane")
            .with(personnel::field::LAST_NAME, "Doe");
        let result = app.personnel.submit(&personnel_fields);
        assert!(!result.ok);
        assert_eq!(app.supply.list_all().len(), 1);
    }
}
