//! Step validators and the submission readiness check.
//!
//! Each step predicate looks only at the slice of the draft its step edits.
//! Failures are data, never errors: the reducer stores the current step's
//! verdict in `is_valid`, hosts can ask for per-field messages, and the
//! readiness check returns an ordered list of issues.

use std::{collections::BTreeMap, fmt};

use super::WizardStep;
use crate::models::ProgramDraft;

/// Name, type, difficulty and a positive duration are all present.
pub fn program_info_complete(draft: &ProgramDraft) -> bool {
    !draft.name.trim().is_empty()
        && draft.program_type.is_some()
        && draft.difficulty_level.is_some()
        && draft.duration_weeks > 0
}

pub fn has_weeks(draft: &ProgramDraft) -> bool {
    !draft.weeks.is_empty()
}

pub fn has_workouts(draft: &ProgramDraft) -> bool {
    draft.weeks.iter().any(|week| !week.workouts.is_empty())
}

pub fn has_exercises(draft: &ProgramDraft) -> bool {
    draft.workouts().any(|workout| !workout.exercises.is_empty())
}

/// Runs the validator of `step` against the draft.
pub fn validate_step(draft: &ProgramDraft, step: WizardStep) -> bool {
    match step {
        WizardStep::ProgramInfo => program_info_complete(draft),
        WizardStep::WeekStructure => has_weeks(draft),
        WizardStep::Workouts => has_workouts(draft),
        WizardStep::Exercises => has_exercises(draft),
        WizardStep::Preview => true,
    }
}

/// Runs the validator of the step the draft is on.
pub fn validate_current_step(draft: &ProgramDraft) -> bool {
    validate_step(draft, draft.step())
}

/// Per-field messages explaining why `step` is invalid, keyed by field name.
///
/// The keys match the draft's camelCase field names so hosts can feed them
/// straight into `SET_ERROR`.
pub fn field_errors(draft: &ProgramDraft, step: WizardStep) -> BTreeMap<String, String> {
    let issues: &[ReadinessIssue] = match step {
        WizardStep::ProgramInfo => &[
            ReadinessIssue::MissingName,
            ReadinessIssue::MissingProgramType,
            ReadinessIssue::MissingDifficultyLevel,
            ReadinessIssue::ZeroDuration,
        ],
        WizardStep::WeekStructure => &[ReadinessIssue::NoWeeks],
        WizardStep::Workouts => &[ReadinessIssue::NoWorkouts],
        WizardStep::Exercises => &[ReadinessIssue::NoExercises],
        WizardStep::Preview => &[],
    };

    issues
        .iter()
        .filter(|issue| issue.applies_to(draft))
        .map(|issue| (issue.field().to_string(), issue.to_string()))
        .collect()
}

/// One reason a draft cannot be submitted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReadinessIssue {
    MissingName,
    MissingProgramType,
    MissingDifficultyLevel,
    ZeroDuration,
    NoWeeks,
    NoWorkouts,
    NoExercises,
}

impl ReadinessIssue {
    /// Every issue in reporting order.
    pub const ALL: [ReadinessIssue; 7] = [
        ReadinessIssue::MissingName,
        ReadinessIssue::MissingProgramType,
        ReadinessIssue::MissingDifficultyLevel,
        ReadinessIssue::ZeroDuration,
        ReadinessIssue::NoWeeks,
        ReadinessIssue::NoWorkouts,
        ReadinessIssue::NoExercises,
    ];

    /// Draft field the issue is reported against.
    pub fn field(self) -> &'static str {
        match self {
            ReadinessIssue::MissingName => "name",
            ReadinessIssue::MissingProgramType => "programType",
            ReadinessIssue::MissingDifficultyLevel => "difficultyLevel",
            ReadinessIssue::ZeroDuration => "durationWeeks",
            ReadinessIssue::NoWeeks => "weeks",
            ReadinessIssue::NoWorkouts => "workouts",
            ReadinessIssue::NoExercises => "exercises",
        }
    }

    /// Whether the draft currently has this issue.
    pub fn applies_to(self, draft: &ProgramDraft) -> bool {
        match self {
            ReadinessIssue::MissingName => draft.name.trim().is_empty(),
            ReadinessIssue::MissingProgramType => draft.program_type.is_none(),
            ReadinessIssue::MissingDifficultyLevel => draft.difficulty_level.is_none(),
            ReadinessIssue::ZeroDuration => draft.duration_weeks == 0,
            ReadinessIssue::NoWeeks => !has_weeks(draft),
            ReadinessIssue::NoWorkouts => !has_workouts(draft),
            ReadinessIssue::NoExercises => !has_exercises(draft),
        }
    }
}

impl fmt::Display for ReadinessIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ReadinessIssue::MissingName => "program name is required",
            ReadinessIssue::MissingProgramType => "program type must be selected",
            ReadinessIssue::MissingDifficultyLevel => "difficulty level must be selected",
            ReadinessIssue::ZeroDuration => "duration must be at least one week",
            ReadinessIssue::NoWeeks => "at least one week is required",
            ReadinessIssue::NoWorkouts => "at least one workout is required",
            ReadinessIssue::NoExercises => "at least one exercise is required",
        };
        f.write_str(message)
    }
}

/// Every issue blocking submission, in a fixed order. Empty means ready.
pub fn readiness_issues(draft: &ProgramDraft) -> Vec<ReadinessIssue> {
    ReadinessIssue::ALL
        .into_iter()
        .filter(|issue| issue.applies_to(draft))
        .collect()
}

pub fn is_ready(draft: &ProgramDraft) -> bool {
    readiness_issues(draft).is_empty()
}
