//! Core library for the Regimen training program builder.
//!
//! This crate holds the multi-step program builder: a hierarchical draft
//! (program → weeks → workouts → exercises) accumulated across a five-step
//! wizard, the reducer that applies tagged actions to it, the per-step
//! validators, draft persistence, and the conversion of a finished draft into
//! the program API payload.
//!
//! # Display Architecture
//!
//! - **Draft Models** ([`models`]): Implement [`std::fmt::Display`] as
//!   markdown
//! - **Display Wrappers** ([`display`]): Session overview, readiness report and
//!   statistics
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use regimen_core::{
//!     models::{DifficultyLevel, ExerciseAssignmentDraft, ProgramType},
//!     params::BasicInfo,
//!     storage::MemoryDraftStore,
//!     Action, WizardBuilder,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut wizard = WizardBuilder::new()
//!     .with_store(MemoryDraftStore::new())
//!     .build()?;
//!
//! wizard.dispatch_all([
//!     Action::SetBasicInfo(BasicInfo {
//!         name: Some("Strength Block".to_string()),
//!         program_type: Some(Some(ProgramType::Strength)),
//!         difficulty_level: Some(Some(DifficultyLevel::Intermediate)),
//!         duration_weeks: Some(1),
//!         ..Default::default()
//!     }),
//!     Action::AddWorkout { week_index: 0, workout: None },
//!     Action::AddExercises(vec![ExerciseAssignmentDraft::new("back-squat")]),
//!     Action::CommitExercises,
//! ]);
//!
//! let submission = wizard.finalize()?;
//! assert_eq!(submission.duration_weeks, 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod storage;
pub mod submission;
pub mod wizard;

mod serde_ext;

// Re-export commonly used types
pub use display::{LocalDateTime, OperationStatus, ProgramStats, ReadinessReport, WizardOverview};
pub use error::{BuilderError, Result};
pub use models::{
    DifficultyLevel, DraftSnapshot, ExerciseAssignmentDraft, ExerciseConfiguration, ProgramDraft,
    ProgramType, SetType, WeekDraft, WorkoutDraft, WorkoutType,
};
pub use params::BasicInfo;
pub use storage::{DraftBridge, DraftStore, MemoryDraftStore, SqliteDraftStore};
pub use submission::{to_submission, ProgramSubmission};
pub use wizard::{reduce, Action, Wizard, WizardBuilder, WizardStep};
