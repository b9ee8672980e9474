//! Workout model definition.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ExerciseAssignmentDraft, WorkoutType};

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// A workout slot within a week.
///
/// Several workouts may share a `day_number`; the builder does not enforce
/// uniqueness within a week.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDraft {
    /// Weekday slot, 1 (Monday) through 7 (Sunday)
    pub day_number: u8,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_type: Option<WorkoutType>,

    /// Estimated duration in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<u32>,

    #[serde(default)]
    pub is_rest_day: bool,

    #[serde(default)]
    pub exercises: Vec<ExerciseAssignmentDraft>,
}

impl Default for WorkoutDraft {
    /// The workout added when the host does not supply one.
    fn default() -> Self {
        Self {
            day_number: 1,
            name: "New Workout".to_string(),
            description: None,
            workout_type: Some(WorkoutType::Strength),
            estimated_duration: Some(60),
            is_rest_day: false,
            exercises: Vec::new(),
        }
    }
}

impl WorkoutDraft {
    /// Weekday name for the slot, or "Day N" outside 1..=7.
    pub fn day_name(&self) -> String {
        match self.day_number {
            1..=7 => DAY_NAMES[usize::from(self.day_number) - 1].to_string(),
            n => format!("Day {n}"),
        }
    }

    /// Number of configured sets across all exercises.
    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.configurations.len()).sum()
    }
}
