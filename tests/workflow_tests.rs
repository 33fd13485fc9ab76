//! Integration tests for the submission workflows
//!
//! These tests verify, against on-disk SQLite databases:
//! - Rejected submissions never touch the store
//! - Accepted submissions are readable back with identical fields
//! - Re-submitting an identifier replaces the row
//! - Listings are ordered by most recent update

use logcop::records::{personnel, supply};
use logcop::{
    FailureKind, PersonnelClass, PersonnelRecord, RawFields, RecordStore, SubmissionState,
    SupplyRecord, WorkflowController,
};
use tempfile::TempDir;

fn personnel_workflow(dir: &TempDir) -> WorkflowController<PersonnelRecord> {
    WorkflowController::open(RecordStore::new(dir.path().join("personnel.db")))
}

fn supply_workflow(dir: &TempDir) -> WorkflowController<SupplyRecord> {
    WorkflowController::open(RecordStore::new(dir.path().join("supply.db")))
}

fn jane_doe() -> RawFields {
    RawFields::new()
        .with(personnel::field::ID, "P1")
        .with(personnel::field::FIRST_NAME, "Jane")
        .with(personnel::field::LAST_NAME, "Doe")
        .with(personnel::field::CLASS, "Officer")
}

fn supply_item(id: &str, name: &str, quantity: i64) -> RawFields {
    RawFields::new()
        .with(supply::field::ID, id)
        .with(supply::field::NAME, name)
        .with(supply::field::QUANTITY, quantity)
}

// =============================================================================
// Personnel Scenarios
// =============================================================================

#[test]
fn test_personnel_submit_then_reject_update() {
    let dir = TempDir::new().unwrap();
    let mut wf = personnel_workflow(&dir);

    let result = wf.submit(&jane_doe());
    assert!(result.ok);
    assert!(result.errors.is_empty());

    let records = wf.list_all();
    assert!(records.iter().any(|r| r.record.personnel_id == "P1"));
    let before = wf.store().get("P1").unwrap().unwrap();

    let result = wf.submit(&jane_doe().with(personnel::field::FIRST_NAME, ""));
    assert!(!result.ok);
    assert_eq!(result.errors, vec!["First Name is required"]);
    assert_eq!(wf.state(), SubmissionState::Rejected);

    let after = wf.store().get("P1").unwrap().unwrap();
    assert_eq!(after, before);
}

#[test]
fn test_personnel_missing_required_fields() {
    let dir = TempDir::new().unwrap();
    let mut wf = personnel_workflow(&dir);

    let result = wf.submit(&RawFields::new());
    assert!(!result.ok);
    assert_eq!(
        result.errors,
        vec![
            "Personnel ID is required",
            "First Name is required",
            "Last Name is required"
        ]
    );
    assert_eq!(result.failure, Some(FailureKind::Validation));
    assert_eq!(wf.store().count().unwrap(), 0);
}

#[test]
fn test_personnel_fields_read_back_unchanged() {
    let dir = TempDir::new().unwrap();
    let mut wf = personnel_workflow(&dir);
    let fields = jane_doe()
        .with(personnel::field::CLASS, "Contractor")
        .with(personnel::field::RANK, "GS-12")
        .with(personnel::field::UNIT, "Support Cell")
        .with(personnel::field::CLEARANCE, "Top Secret")
        .with(personnel::field::STATUS, "Reserve")
        .with(personnel::field::NOTES, "Linguist");
    assert!(wf.submit(&fields).ok);

    let records = wf.list_all();
    let matching: Vec<_> = records
        .iter()
        .filter(|r| r.record.personnel_id == "P1")
        .collect();
    assert_eq!(matching.len(), 1);
    let stored = &matching[0].record;
    assert_eq!(
        stored,
        &PersonnelRecord {
            personnel_id: "P1".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            personnel_class: PersonnelClass::Contractor,
            rank: Some("GS-12".to_string()),
            unit: Some("Support Cell".to_string()),
            clearance_level: logcop::Clearance::TopSecret,
            status: logcop::PersonnelStatus::Reserve,
            notes: Some("Linguist".to_string()),
        }
    );
}

#[test]
fn test_personnel_resubmission_replaces_row() {
    let dir = TempDir::new().unwrap();
    let mut wf = personnel_workflow(&dir);
    assert!(wf.submit(&jane_doe()).ok);
    let first = wf.store().get("P1").unwrap().unwrap();

    assert!(wf.submit(&jane_doe()).ok);
    let second = wf.store().get("P1").unwrap().unwrap();

    assert_eq!(wf.store().count().unwrap(), 1);
    assert_eq!(second.created_at, first.created_at);
    assert!(second.updated_at > first.updated_at);
}

#[test]
fn test_personnel_update_clears_optional_fields() {
    let dir = TempDir::new().unwrap();
    let mut wf = personnel_workflow(&dir);
    assert!(wf.submit(&jane_doe().with(personnel::field::NOTES, "temporary")).ok);
    assert!(wf.submit(&jane_doe()).ok);

    let stored = wf.store().get("P1").unwrap().unwrap();
    assert!(stored.record.notes.is_none());
}

// =============================================================================
// Supply Scenarios
// =============================================================================

#[test]
fn test_supply_negative_quantity_rejected() {
    let dir = TempDir::new().unwrap();
    let mut wf = supply_workflow(&dir);

    let result = wf.submit(&supply_item("S1", "Bandages", -5));
    assert!(!result.ok);
    assert!(result.errors.contains(&"Quantity must be non-negative".to_string()));
    assert_eq!(wf.store().count().unwrap(), 0);
}

#[test]
fn test_supply_quantity_boundary() {
    let dir = TempDir::new().unwrap();
    let mut wf = supply_workflow(&dir);

    assert!(wf.submit(&supply_item("S0", "Empty Crate", 0)).ok);
    let result = wf.submit(&supply_item("S-1", "Debt", -1));
    assert!(!result.ok);
    assert_eq!(result.errors, vec!["Quantity must be non-negative"]);

    let stored = wf.store().get("S0").unwrap().unwrap();
    assert_eq!(stored.record.quantity, 0);
    assert!(wf.store().get("S-1").unwrap().is_none());
}

#[test]
fn test_supply_rule_and_label_errors_reported_together() {
    let dir = TempDir::new().unwrap();
    let mut wf = supply_workflow(&dir);
    let fields = supply_item("S1", "", -1).with(supply::field::PRIORITY, "Urgent");

    let result = wf.submit(&fields);
    assert!(!result.ok);
    assert_eq!(result.failure, Some(FailureKind::Validation));
    assert_eq!(result.errors.len(), 3);
    assert_eq!(result.errors[0], "Supply Name is required");
    assert_eq!(result.errors[1], "Quantity must be non-negative");
    assert!(result.errors[2].starts_with("Invalid Priority: 'Urgent'"));
    assert_eq!(wf.store().count().unwrap(), 0);
}

#[test]
fn test_personnel_label_error_reported_with_missing_name() {
    let dir = TempDir::new().unwrap();
    let mut wf = personnel_workflow(&dir);
    let fields = RawFields::new()
        .with(personnel::field::ID, "P1")
        .with(personnel::field::LAST_NAME, "Doe")
        .with(personnel::field::CLEARANCE, "Cosmic");

    let result = wf.submit(&fields);
    assert!(!result.ok);
    assert_eq!(result.errors.len(), 2);
    assert_eq!(result.errors[0], "First Name is required");
    assert!(result.errors[1].starts_with("Invalid Clearance Level: 'Cosmic'"));
}

#[test]
fn test_supply_missing_id_and_name() {
    let dir = TempDir::new().unwrap();
    let mut wf = supply_workflow(&dir);
    let result = wf.submit(&supply_item("", " ", 10));
    assert!(!result.ok);
    assert_eq!(
        result.errors,
        vec!["Supply ID is required", "Supply Name is required"]
    );
}

#[test]
fn test_supply_all_fields_stored() {
    let dir = TempDir::new().unwrap();
    let mut wf = supply_workflow(&dir);
    let fields = supply_item("S7", "JP-8", 5000)
        .with(supply::field::CLASS, "Fuel")
        .with(supply::field::TYPE, "Hazardous")
        .with(supply::field::UNIT, "Gallons")
        .with(supply::field::STATUS, "Reserved")
        .with(supply::field::PRIORITY, "High")
        .with(supply::field::LOCATION, "Fuel Point Bravo")
        .with(supply::field::SUPPLIER, "DLA Energy");
    assert!(wf.submit(&fields).ok);

    let expected = SupplyRecord {
        supply_id: "S7".to_string(),
        supply_name: "JP-8".to_string(),
        supply_class: logcop::SupplyClass::Fuel,
        supply_type: logcop::SupplyType::Hazardous,
        quantity: 5000,
        unit_of_measure: logcop::UnitOfMeasure::Gallons,
        status: logcop::SupplyStatus::Reserved,
        priority: logcop::Priority::High,
        location: Some("Fuel Point Bravo".to_string()),
        supplier: Some("DLA Energy".to_string()),
        notes: None,
    };
    let listed = wf.list_all();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].record, expected);
}

#[test]
fn test_supply_list_order_follows_updates() {
    let dir = TempDir::new().unwrap();
    let mut wf = supply_workflow(&dir);
    for (id, name) in [("S1", "Bandages"), ("S2", "Water"), ("S3", "Rations")] {
        assert!(wf.submit(&supply_item(id, name, 10)).ok);
    }
    let ids = |wf: &WorkflowController<SupplyRecord>| -> Vec<String> {
        wf.list_all().into_iter().map(|r| r.record.supply_id).collect()
    };
    assert_eq!(ids(&wf), vec!["S3", "S2", "S1"]);

    assert!(wf.submit(&supply_item("S1", "Bandages", 8)).ok);
    assert_eq!(ids(&wf), vec!["S1", "S3", "S2"]);

    let listed = wf.list_all();
    assert!(listed.windows(2).all(|w| w[0].updated_at > w[1].updated_at));
}

// =============================================================================
// Store Independence
// =============================================================================

#[test]
fn test_entity_tables_are_independent() {
    let dir = TempDir::new().unwrap();
    let mut people = personnel_workflow(&dir);
    let mut supplies = supply_workflow(&dir);

    assert!(people.submit(&jane_doe()).ok);
    assert!(supplies.submit(&supply_item("P1", "Same ID, other table", 1)).ok);

    assert_eq!(people.list_all().len(), 1);
    assert_eq!(supplies.list_all().len(), 1);
}

#[test]
fn test_reopening_keeps_records() {
    let dir = TempDir::new().unwrap();
    {
        let mut wf = supply_workflow(&dir);
        assert!(wf.submit(&supply_item("S1", "Bandages", 3)).ok);
    }
    let wf = supply_workflow(&dir);
    assert_eq!(wf.list_all().len(), 1);
    assert_eq!(wf.state(), SubmissionState::Pending);
}
