//! Program draft: the root of the wizard state.

use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{DifficultyLevel, ExerciseAssignmentDraft, ProgramType, WeekDraft, WorkoutDraft};
use crate::wizard::WizardStep;

/// Duration given to a fresh draft before the trainer picks one.
pub const DEFAULT_DURATION_WEEKS: u32 = 4;

/// The program being authored, together with the wizard's ambient state.
///
/// A draft is only ever changed through [`crate::wizard::reduce`]; every
/// nested week, workout and exercise is owned by the draft that contains it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProgramDraft {
    // Step 1: program info
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub program_type: Option<ProgramType>,
    pub difficulty_level: Option<DifficultyLevel>,
    /// Equals `weeks.len()` whenever `weeks` is non-empty
    pub duration_weeks: u32,
    pub goals: BTreeSet<String>,
    pub equipment_needed: BTreeSet<String>,

    // Step 2: week structure
    pub weeks: Vec<WeekDraft>,

    // Step 3: workouts
    pub current_week_index: usize,
    pub current_workout_index: usize,

    // Step 4: exercise selection working set
    pub selected_exercises: Vec<ExerciseAssignmentDraft>,

    // Navigation
    pub current_step: u8,
    pub is_valid: bool,
    pub is_dirty: bool,

    /// Transient host flag, never persisted
    #[serde(skip)]
    pub is_loading: bool,
    pub errors: BTreeMap<String, String>,
}

impl Default for ProgramDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            program_type: None,
            difficulty_level: None,
            duration_weeks: DEFAULT_DURATION_WEEKS,
            goals: BTreeSet::new(),
            equipment_needed: BTreeSet::new(),
            weeks: Vec::new(),
            current_week_index: 0,
            current_workout_index: 0,
            selected_exercises: Vec::new(),
            current_step: WizardStep::ProgramInfo.number(),
            is_valid: false,
            is_dirty: false,
            is_loading: false,
            errors: BTreeMap::new(),
        }
    }
}

impl ProgramDraft {
    /// The wizard step the draft is currently on.
    pub fn step(&self) -> WizardStep {
        WizardStep::clamped(i64::from(self.current_step))
    }

    /// The week selected for workout editing, if the index is in range.
    pub fn current_week(&self) -> Option<&WeekDraft> {
        self.weeks.get(self.current_week_index)
    }

    /// The workout selected for exercise editing, if both indices are in range.
    pub fn current_workout(&self) -> Option<&WorkoutDraft> {
        self.current_week()
            .and_then(|week| week.workouts.get(self.current_workout_index))
    }

    /// All workouts across all weeks, in program order.
    pub fn workouts(&self) -> impl Iterator<Item = &WorkoutDraft> {
        self.weeks.iter().flat_map(|week| week.workouts.iter())
    }
}
