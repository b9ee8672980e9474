//! Exercise assignment and set configuration models.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::SetType;

/// Set-level prescription for one exercise assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ExerciseConfiguration {
    /// 1-based position of the set within the exercise
    pub set_number: u32,

    #[serde(default)]
    pub set_type: SetType,

    /// Free-form repetition target such as "8-10", "AMRAP" or "30s"
    pub reps: String,

    /// Load guidance such as "70% 1RM" or "Bodyweight"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_guidance: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u32>,

    /// Tempo notation such as "3-1-2-0"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo: Option<String>,

    /// Rate of perceived exertion (1-10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpe: Option<f32>,

    /// Reps in reserve
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rir: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ExerciseConfiguration {
    /// Creates a working set with the given number and repetition target.
    pub fn working(set_number: u32, reps: impl Into<String>) -> Self {
        Self {
            set_number,
            set_type: SetType::Working,
            reps: reps.into(),
            ..Default::default()
        }
    }
}

/// An exercise placed in a workout (or in the selection working set).
///
/// `exercise_id` is an opaque catalog identifier; the builder never checks
/// catalog membership.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ExerciseAssignmentDraft {
    pub exercise_id: String,

    /// Position within the owning sequence (0-indexed, dense)
    #[serde(default)]
    pub order_index: u32,

    /// Superset label (A, B, C) grouping exercises performed back to back
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superset_group: Option<String>,

    /// Opaque set scheme summary owned by the exercise editor
    #[serde(default)]
    pub sets_config: serde_json::Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default)]
    pub configurations: Vec<ExerciseConfiguration>,
}

impl ExerciseAssignmentDraft {
    /// Creates an assignment for a catalog exercise with no sets configured.
    pub fn new(exercise_id: impl Into<String>) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            ..Default::default()
        }
    }

    /// Appends a set configuration.
    pub fn with_configuration(mut self, configuration: ExerciseConfiguration) -> Self {
        self.configurations.push(configuration);
        self
    }
}
