use regimen_core::{
    models::{DifficultyLevel, ProgramType},
    params::BasicInfo,
    Wizard, WizardBuilder,
};
use tempfile::TempDir;

/// Helper function to open a wizard backed by a temporary database
pub fn create_test_wizard() -> (TempDir, Wizard) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let wizard = open_wizard(&temp_dir);
    (temp_dir, wizard)
}

/// Opens a wizard on the database inside `temp_dir`, restoring any saved draft
pub fn open_wizard(temp_dir: &TempDir) -> Wizard {
    let db_path = temp_dir.path().join("drafts").join("test.db");
    WizardBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to open wizard")
}

/// Step 1 fields that make the program info step valid
pub fn complete_basic_info() -> BasicInfo {
    BasicInfo {
        name: Some("Test".to_string()),
        program_type: Some(Some(ProgramType::Strength)),
        difficulty_level: Some(Some(DifficultyLevel::Beginner)),
        ..Default::default()
    }
}
