//! Draft-shaped partial used when rehydrating from storage.

use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{DifficultyLevel, ExerciseAssignmentDraft, ProgramDraft, ProgramType, WeekDraft};

/// A stored draft read back with every field optional.
///
/// Missing fields keep the value of the draft the snapshot is merged onto and
/// unknown fields are ignored, so payloads written by older or newer builds
/// still load. Nullable fields distinguish "absent" (`None`) from "stored as
/// null" (`Some(None)`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct DraftSnapshot {
    pub name: Option<String>,
    #[serde(
        deserialize_with = "crate::serde_ext::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub description: Option<Option<String>>,
    #[serde(
        deserialize_with = "crate::serde_ext::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "schema", schemars(with = "Option<ProgramType>"))]
    pub program_type: Option<Option<ProgramType>>,
    #[serde(
        deserialize_with = "crate::serde_ext::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "schema", schemars(with = "Option<DifficultyLevel>"))]
    pub difficulty_level: Option<Option<DifficultyLevel>>,
    pub duration_weeks: Option<u32>,
    pub goals: Option<BTreeSet<String>>,
    pub equipment_needed: Option<BTreeSet<String>>,
    pub weeks: Option<Vec<WeekDraft>>,
    pub current_week_index: Option<usize>,
    pub current_workout_index: Option<usize>,
    pub selected_exercises: Option<Vec<ExerciseAssignmentDraft>>,
    pub current_step: Option<u8>,
    pub is_valid: Option<bool>,
    pub is_dirty: Option<bool>,
    pub errors: Option<BTreeMap<String, String>>,
}

impl DraftSnapshot {
    /// Overlays the snapshot onto `draft`. The loading flag is always cleared.
    pub fn merge_into(self, mut draft: ProgramDraft) -> ProgramDraft {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(program_type) = self.program_type {
            draft.program_type = program_type;
        }
        if let Some(difficulty_level) = self.difficulty_level {
            draft.difficulty_level = difficulty_level;
        }
        if let Some(duration_weeks) = self.duration_weeks {
            draft.duration_weeks = duration_weeks;
        }
        if let Some(goals) = self.goals {
            draft.goals = goals;
        }
        if let Some(equipment_needed) = self.equipment_needed {
            draft.equipment_needed = equipment_needed;
        }
        if let Some(weeks) = self.weeks {
            draft.weeks = weeks;
        }
        if let Some(index) = self.current_week_index {
            draft.current_week_index = index;
        }
        if let Some(index) = self.current_workout_index {
            draft.current_workout_index = index;
        }
        if let Some(selected) = self.selected_exercises {
            draft.selected_exercises = selected;
        }
        if let Some(step) = self.current_step {
            draft.current_step = step;
        }
        if let Some(is_valid) = self.is_valid {
            draft.is_valid = is_valid;
        }
        if let Some(is_dirty) = self.is_dirty {
            draft.is_dirty = is_dirty;
        }
        if let Some(errors) = self.errors {
            draft.errors = errors;
        }
        draft.is_loading = false;
        draft
    }
}

impl From<ProgramDraft> for DraftSnapshot {
    fn from(draft: ProgramDraft) -> Self {
        Self {
            name: Some(draft.name),
            description: Some(draft.description),
            program_type: Some(draft.program_type),
            difficulty_level: Some(draft.difficulty_level),
            duration_weeks: Some(draft.duration_weeks),
            goals: Some(draft.goals),
            equipment_needed: Some(draft.equipment_needed),
            weeks: Some(draft.weeks),
            current_week_index: Some(draft.current_week_index),
            current_workout_index: Some(draft.current_workout_index),
            selected_exercises: Some(draft.selected_exercises),
            current_step: Some(draft.current_step),
            is_valid: Some(draft.is_valid),
            is_dirty: Some(draft.is_dirty),
            errors: Some(draft.errors),
        }
    }
}
