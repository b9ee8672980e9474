//! The closed set of actions the wizard accepts.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::{
    models::{DraftSnapshot, ExerciseAssignmentDraft, WeekDraft, WorkoutDraft},
    params::BasicInfo,
};

/// A tagged wizard action.
///
/// The JSON form is `{"type": "ADD_WEEK", "payload": ...}`. Actions without
/// data omit the payload; actions with an optional payload take `null`.
/// Tags this build does not know deserialize to [`Action::Unrecognized`]
/// whatever payload they carry, and the reducer ignores them.
///
/// # Examples
///
/// ```rust
/// use regimen_core::wizard::Action;
///
/// let action: Action = serde_json::from_str(r#"{"type": "REMOVE_WEEK", "payload": 1}"#)?;
/// assert_eq!(action, Action::RemoveWeek(1));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema), schemars(rename = "Action"))]
#[serde(
    remote = "Self",
    tag = "type",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE"
)]
pub enum Action {
    /// Partial update of the program info fields
    SetBasicInfo(BasicInfo),
    /// Replace the whole week sequence
    UpdateWeeks(Vec<WeekDraft>),
    /// Append a week; `None` appends a generated one
    AddWeek(Option<WeekDraft>),
    RemoveWeek(usize),
    #[serde(rename_all = "camelCase")]
    UpdateWeek { index: usize, week: WeekDraft },
    DuplicateWeek(usize),
    #[serde(rename_all = "camelCase")]
    AddWorkout {
        week_index: usize,
        #[serde(default)]
        workout: Option<WorkoutDraft>,
    },
    #[serde(rename_all = "camelCase")]
    RemoveWorkout {
        week_index: usize,
        workout_index: usize,
    },
    #[serde(rename_all = "camelCase")]
    UpdateWorkout {
        week_index: usize,
        workout_index: usize,
        workout: WorkoutDraft,
    },
    SetCurrentWeek(usize),
    SetCurrentWorkout(usize),
    /// Append to the exercise selection working set
    AddExercises(Vec<ExerciseAssignmentDraft>),
    RemoveExercise(usize),
    #[serde(rename_all = "camelCase")]
    UpdateExercise {
        index: usize,
        exercise: ExerciseAssignmentDraft,
    },
    #[serde(rename_all = "camelCase")]
    ReorderExercises { from: usize, to: usize },
    /// Move the working set into the current workout
    CommitExercises,
    SetStep(i64),
    NextStep,
    PrevStep,
    SetLoading(bool),
    #[serde(rename_all = "camelCase")]
    SetError { field: String, message: String },
    ClearError(String),
    ClearAllErrors,
    ResetState,
    LoadFromStorage(Box<DraftSnapshot>),
    ValidateCurrentStep,
    #[serde(other)]
    Unrecognized,
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Action::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if let Some(tag) = value.get("type").and_then(Value::as_str) {
            if !Action::TAGS.contains(&tag) {
                return Ok(Action::Unrecognized);
            }
        }
        Action::deserialize(value).map_err(D::Error::custom)
    }
}

impl Action {
    /// Every wire tag this build understands.
    pub const TAGS: [&'static str; 26] = [
        "SET_BASIC_INFO",
        "UPDATE_WEEKS",
        "ADD_WEEK",
        "REMOVE_WEEK",
        "UPDATE_WEEK",
        "DUPLICATE_WEEK",
        "ADD_WORKOUT",
        "REMOVE_WORKOUT",
        "UPDATE_WORKOUT",
        "SET_CURRENT_WEEK",
        "SET_CURRENT_WORKOUT",
        "ADD_EXERCISES",
        "REMOVE_EXERCISE",
        "UPDATE_EXERCISE",
        "REORDER_EXERCISES",
        "COMMIT_EXERCISES",
        "SET_STEP",
        "NEXT_STEP",
        "PREV_STEP",
        "SET_LOADING",
        "SET_ERROR",
        "CLEAR_ERROR",
        "CLEAR_ALL_ERRORS",
        "RESET_STATE",
        "LOAD_FROM_STORAGE",
        "VALIDATE_CURRENT_STEP",
    ];

    /// Whether applying the action marks the draft dirty.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Action::SetBasicInfo(_)
                | Action::UpdateWeeks(_)
                | Action::AddWeek(_)
                | Action::RemoveWeek(_)
                | Action::UpdateWeek { .. }
                | Action::DuplicateWeek(_)
                | Action::AddWorkout { .. }
                | Action::RemoveWorkout { .. }
                | Action::UpdateWorkout { .. }
                | Action::AddExercises(_)
                | Action::RemoveExercise(_)
                | Action::UpdateExercise { .. }
                | Action::ReorderExercises { .. }
                | Action::CommitExercises
        )
    }

    /// The wire tag of the action, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetBasicInfo(_) => "SET_BASIC_INFO",
            Action::UpdateWeeks(_) => "UPDATE_WEEKS",
            Action::AddWeek(_) => "ADD_WEEK",
            Action::RemoveWeek(_) => "REMOVE_WEEK",
            Action::UpdateWeek { .. } => "UPDATE_WEEK",
            Action::DuplicateWeek(_) => "DUPLICATE_WEEK",
            Action::AddWorkout { .. } => "ADD_WORKOUT",
            Action::RemoveWorkout { .. } => "REMOVE_WORKOUT",
            Action::UpdateWorkout { .. } => "UPDATE_WORKOUT",
            Action::SetCurrentWeek(_) => "SET_CURRENT_WEEK",
            Action::SetCurrentWorkout(_) => "SET_CURRENT_WORKOUT",
            Action::AddExercises(_) => "ADD_EXERCISES",
            Action::RemoveExercise(_) => "REMOVE_EXERCISE",
            Action::UpdateExercise { .. } => "UPDATE_EXERCISE",
            Action::ReorderExercises { .. } => "REORDER_EXERCISES",
            Action::CommitExercises => "COMMIT_EXERCISES",
            Action::SetStep(_) => "SET_STEP",
            Action::NextStep => "NEXT_STEP",
            Action::PrevStep => "PREV_STEP",
            Action::SetLoading(_) => "SET_LOADING",
            Action::SetError { .. } => "SET_ERROR",
            Action::ClearError(_) => "CLEAR_ERROR",
            Action::ClearAllErrors => "CLEAR_ALL_ERRORS",
            Action::ResetState => "RESET_STATE",
            Action::LoadFromStorage(_) => "LOAD_FROM_STORAGE",
            Action::ValidateCurrentStep => "VALIDATE_CURRENT_STEP",
            Action::Unrecognized => "UNRECOGNIZED",
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::ProgramType;

    #[test]
    fn test_unit_action_without_payload() {
        let action: Action = serde_json::from_value(json!({"type": "NEXT_STEP"})).unwrap();
        assert_eq!(action, Action::NextStep);
    }

    #[test]
    fn test_struct_action_uses_camel_case() {
        let action: Action = serde_json::from_value(json!({
            "type": "REMOVE_WORKOUT",
            "payload": {"weekIndex": 0, "workoutIndex": 2}
        }))
        .unwrap();
        assert_eq!(
            action,
            Action::RemoveWorkout {
                week_index: 0,
                workout_index: 2
            }
        );
    }

    #[test]
    fn test_add_week_with_null_payload() {
        let action: Action =
            serde_json::from_value(json!({"type": "ADD_WEEK", "payload": null})).unwrap();
        assert_eq!(action, Action::AddWeek(None));
    }

    #[test]
    fn test_add_workout_without_workout() {
        let action: Action = serde_json::from_value(json!({
            "type": "ADD_WORKOUT",
            "payload": {"weekIndex": 1}
        }))
        .unwrap();
        assert_eq!(
            action,
            Action::AddWorkout {
                week_index: 1,
                workout: None
            }
        );
    }

    #[test]
    fn test_set_basic_info_payload() {
        let action: Action = serde_json::from_value(json!({
            "type": "SET_BASIC_INFO",
            "payload": {"name": "Test", "programType": "strength"}
        }))
        .unwrap();
        match action {
            Action::SetBasicInfo(info) => {
                assert_eq!(info.name.as_deref(), Some("Test"));
                assert_eq!(info.program_type, Some(Some(ProgramType::Strength)));
            }
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn test_unknown_tag_is_unrecognized() {
        let action: Action =
            serde_json::from_value(json!({"type": "TELEPORT"})).unwrap();
        assert_eq!(action, Action::Unrecognized);
        assert!(!action.is_mutation());
    }

    #[test]
    fn test_unknown_tag_with_payload_is_unrecognized() {
        for payload in [json!({"x": 1}), json!(3), json!([1, 2]), json!(null)] {
            let action: Action =
                serde_json::from_value(json!({"type": "TELEPORT", "payload": payload})).unwrap();
            assert_eq!(action, Action::Unrecognized);
        }
    }

    #[test]
    fn test_known_tag_with_bad_payload_fails() {
        let result: Result<Action, _> =
            serde_json::from_value(json!({"type": "REMOVE_WEEK", "payload": "first"}));
        assert!(result.is_err());

        let result: Result<Action, _> = serde_json::from_value(json!({"payload": 1}));
        assert!(result.is_err());
    }

    #[test]
    fn test_tags_round_trip_through_json() {
        let actions = [
            Action::SetBasicInfo(BasicInfo::default()),
            Action::AddWeek(None),
            Action::RemoveWeek(0),
            Action::ReorderExercises { from: 0, to: 1 },
            Action::CommitExercises,
            Action::SetStep(2),
            Action::ClearError("name".to_string()),
            Action::ResetState,
            Action::ValidateCurrentStep,
        ];
        for action in actions {
            assert!(Action::TAGS.contains(&action.kind()));
            let json = serde_json::to_string(&action).unwrap();
            let parsed: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, action);
        }
    }

    #[test]
    fn test_serialized_tag_matches_kind() {
        let actions = [
            Action::RemoveWeek(0),
            Action::ReorderExercises { from: 0, to: 1 },
            Action::ClearError("name".to_string()),
            Action::ResetState,
        ];
        for action in actions {
            let value = serde_json::to_value(&action).unwrap();
            assert_eq!(value["type"], action.kind());
        }
    }

    #[test]
    fn test_mutation_classification() {
        assert!(Action::AddWeek(None).is_mutation());
        assert!(Action::CommitExercises.is_mutation());
        assert!(!Action::NextStep.is_mutation());
        assert!(!Action::SetCurrentWeek(0).is_mutation());
        assert!(!Action::SetError {
            field: "name".to_string(),
            message: "required".to_string()
        }
        .is_mutation());
        assert!(!Action::ResetState.is_mutation());
    }
}
