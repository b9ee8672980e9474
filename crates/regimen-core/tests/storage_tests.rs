use regimen_core::{
    models::{ProgramDraft, ProgramType, WeekDraft},
    storage::{DraftBridge, DraftStore, SqliteDraftStore, DRAFT_SLOT},
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary slot store for testing
fn create_test_store() -> (NamedTempFile, SqliteDraftStore) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let store = SqliteDraftStore::new(temp_file.path()).expect("Failed to create test store");
    (temp_file, store)
}

fn sample_draft() -> ProgramDraft {
    let mut week = WeekDraft::generated(1);
    week.workouts.push(Default::default());
    ProgramDraft {
        name: "Hypertrophy Block".to_string(),
        description: Some("Eight weeks of volume".to_string()),
        program_type: Some(ProgramType::Hypertrophy),
        duration_weeks: 1,
        weeks: vec![week],
        current_step: 3,
        is_valid: true,
        is_dirty: true,
        ..Default::default()
    }
}

#[test]
fn test_store_initialization() {
    let (temp_file, store) = create_test_store();

    assert!(temp_file.path().exists());
    assert!(store.read(DRAFT_SLOT).expect("Failed to read slot").is_none());
}

#[test]
fn test_payload_survives_reopen() {
    let (temp_file, mut store) = create_test_store();
    store
        .write(DRAFT_SLOT, r#"{"name":"Persisted"}"#)
        .expect("Failed to write slot");
    drop(store);

    let reopened = SqliteDraftStore::new(temp_file.path()).expect("Failed to reopen store");
    let stored = reopened
        .read(DRAFT_SLOT)
        .expect("Failed to read slot")
        .expect("Slot should exist");
    assert_eq!(stored.payload, r#"{"name":"Persisted"}"#);
}

#[test]
fn test_bridge_round_trip_through_sqlite() {
    let (_temp_file, store) = create_test_store();
    let mut bridge = DraftBridge::new(Box::new(store));
    let draft = sample_draft();

    bridge.try_save(&draft).expect("Failed to save draft");
    let restored = bridge
        .load()
        .expect("Draft should load")
        .merge_into(ProgramDraft::default());

    assert_eq!(restored, draft);
}

#[test]
fn test_bridge_loads_partial_payload() {
    let (_temp_file, mut store) = create_test_store();
    store
        .write(
            DRAFT_SLOT,
            r#"{"name":"Old build","currentStep":2,"somethingNew":true}"#,
        )
        .expect("Failed to write slot");
    let bridge = DraftBridge::new(Box::new(store));

    let restored = bridge
        .load()
        .expect("Draft should load")
        .merge_into(ProgramDraft::default());

    assert_eq!(restored.name, "Old build");
    assert_eq!(restored.current_step, 2);
    assert_eq!(restored.duration_weeks, 4);
    assert!(restored.weeks.is_empty());
}

#[test]
fn test_bridge_clear_removes_payload() {
    let (_temp_file, store) = create_test_store();
    let mut bridge = DraftBridge::new(Box::new(store));

    bridge.save(&sample_draft());
    assert!(bridge.has_saved());

    bridge.clear();
    assert!(!bridge.has_saved());
    assert!(bridge.saved_at().is_none());
}
