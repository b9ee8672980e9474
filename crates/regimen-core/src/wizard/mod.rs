//! The program builder state machine.
//!
//! Hosts drive the wizard by dispatching [`Action`]s. Each action flows
//! through [`reduce`], which applies a structural edit or a navigation rule
//! and then re-runs the validator of the current step:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Action      │    │     reduce      │    │   Structural    │
//! │ (tagged, JSON)  │───▶│ (navigation,    │───▶│   operations    │
//! │                 │    │  bookkeeping)   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                                 │
//!                                 ▼
//!                        ┌─────────────────┐
//!                        │   Validators    │
//!                        │ (is_valid, field│
//!                        │  errors, ready) │
//!                        └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`step`]: The five wizard steps and their names
//! - [`action`]: The closed action type and its JSON form
//! - [`structure`]: Edits of the week/workout/exercise hierarchy
//! - [`validation`]: Step predicates, field errors and submission readiness
//! - [`reducer`]: The `reduce` entry point
//! - [`session`]: [`Wizard`] sessions with persistence
//!
//! # Examples
//!
//! ```rust
//! use regimen_core::{
//!     models::{DifficultyLevel, ProgramType},
//!     params::BasicInfo,
//!     storage::MemoryDraftStore,
//!     wizard::{Action, WizardBuilder},
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut wizard = WizardBuilder::new()
//!     .with_store(MemoryDraftStore::new())
//!     .build()?;
//!
//! let draft = wizard.dispatch(Action::SetBasicInfo(BasicInfo {
//!     name: Some("Test".to_string()),
//!     program_type: Some(Some(ProgramType::Strength)),
//!     difficulty_level: Some(Some(DifficultyLevel::Beginner)),
//!     ..Default::default()
//! }));
//! assert!(draft.is_valid);
//! assert!(wizard.has_saved_draft());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod action;
pub mod reducer;
pub mod session;
pub mod step;
pub mod structure;
pub mod validation;


pub use action::Action;
pub use reducer::{reduce, reduce_checked};
pub use session::{Wizard, WizardBuilder};
pub use step::{step_name, WizardStep};
pub use structure::{OutOfRange, Violation, MAX_DURATION_WEEKS};
pub use validation::{
    field_errors, is_ready, readiness_issues, validate_current_step, validate_step,
    ReadinessIssue,
};
