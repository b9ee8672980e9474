//! Week model definition.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::WorkoutDraft;

/// One week of a program.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct WeekDraft {
    /// 1-based week number; always equals the week's position + 1
    pub week_number: u32,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub is_deload: bool,

    #[serde(default)]
    pub workouts: Vec<WorkoutDraft>,
}

impl WeekDraft {
    /// Creates an empty week carrying the generated default name.
    pub fn generated(week_number: u32) -> Self {
        Self {
            week_number,
            name: Self::default_name(week_number),
            description: None,
            is_deload: false,
            workouts: Vec::new(),
        }
    }

    /// The name the builder gives a week it generates.
    pub fn default_name(week_number: u32) -> String {
        format!("Week {week_number}")
    }

    /// Whether the name is still the generated default for its number.
    pub fn has_default_name(&self) -> bool {
        self.name == Self::default_name(self.week_number)
    }
}
