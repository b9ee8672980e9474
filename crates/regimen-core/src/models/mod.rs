//! Data models for program drafts.
//!
//! This module contains the typed shape of a program in progress:
//!
//! ```text
//! ProgramDraft
//!  └── WeekDraft (weekNumber 1..N)
//!       └── WorkoutDraft (dayNumber 1..7)
//!            └── ExerciseAssignmentDraft (orderIndex 0..N-1)
//!                 └── ExerciseConfiguration (one per set)
//! ```
//!
//! All models serialize as camelCase JSON, which is both the storage format
//! of the draft slot and the wire format of the submission payload. Display
//! implementations live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use regimen_core::models::{ProgramDraft, WeekDraft};
//!
//! let mut draft = ProgramDraft::default();
//! assert_eq!(draft.duration_weeks, 4);
//! assert!(draft.weeks.is_empty());
//!
//! draft.weeks.push(WeekDraft::generated(1));
//! assert_eq!(draft.weeks[0].name, "Week 1");
//! ```

pub mod enums;
pub mod exercise;
pub mod program;
pub mod snapshot;
pub mod week;
pub mod workout;


pub use enums::{DifficultyLevel, ProgramType, SetType, WorkoutType};
pub use exercise::{ExerciseAssignmentDraft, ExerciseConfiguration};
pub use program::{ProgramDraft, DEFAULT_DURATION_WEEKS};
pub use snapshot::DraftSnapshot;
pub use week::WeekDraft;
pub use workout::WorkoutDraft;
