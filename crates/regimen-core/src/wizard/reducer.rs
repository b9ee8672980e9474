//! The single entry point that turns an action into a new draft.

use log::{debug, warn};

use super::{structure, validation, Action, Violation, WizardStep};
use crate::{models::ProgramDraft, params::BasicInfo};

/// Applies `action` to `draft` and returns the resulting draft.
///
/// The reducer is total: every action yields a draft. Structural edits with
/// an index that does not exist leave the draft untouched (and not dirty) and
/// log a warning. Navigation clamps into the step range instead of refusing;
/// gating the next step on `is_valid` is up to the host. After every action
/// `is_valid` reflects the validator of the step the draft ends up on.
///
/// # Examples
///
/// ```rust
/// use regimen_core::{models::ProgramDraft, wizard::{reduce, Action}};
///
/// let draft = reduce(ProgramDraft::default(), Action::AddWeek(None));
/// assert_eq!(draft.weeks.len(), 1);
/// assert_eq!(draft.duration_weeks, 1);
/// assert!(draft.is_dirty);
/// ```
pub fn reduce(draft: ProgramDraft, action: Action) -> ProgramDraft {
    reduce_checked(draft, action).0
}

/// Like [`reduce`], but also reports whether a structural precondition was
/// violated. The returned draft is the same either way.
pub fn reduce_checked(
    mut draft: ProgramDraft,
    action: Action,
) -> (ProgramDraft, Result<(), Violation>) {
    debug!("Reducing {} on step {}", action.kind(), draft.current_step);

    let mutation = action.is_mutation();
    let kind = action.kind();
    let outcome: Result<(), Violation> = match action {
        Action::SetBasicInfo(info) => apply_basic_info(&mut draft, info),
        Action::UpdateWeeks(weeks) => structure::replace_weeks(&mut draft, weeks),
        Action::AddWeek(week) => structure::add_week(&mut draft, week),
        Action::RemoveWeek(index) => structure::remove_week(&mut draft, index).map_err(Violation::from),
        Action::UpdateWeek { index, week } => structure::update_week(&mut draft, index, week).map_err(Violation::from),
        Action::DuplicateWeek(index) => structure::duplicate_week(&mut draft, index),
        Action::AddWorkout {
            week_index,
            workout,
        } => structure::add_workout(&mut draft, week_index, workout).map_err(Violation::from),
        Action::RemoveWorkout {
            week_index,
            workout_index,
        } => structure::remove_workout(&mut draft, week_index, workout_index).map_err(Violation::from),
        Action::UpdateWorkout {
            week_index,
            workout_index,
            workout,
        } => structure::update_workout(
            &mut draft,
            week_index,
            workout_index,
            workout,
        ).map_err(Violation::from),
        Action::SetCurrentWeek(index) => structure::select_week(&mut draft, index).map_err(Violation::from),
        Action::SetCurrentWorkout(index) => structure::select_workout(&mut draft, index).map_err(Violation::from),
        Action::AddExercises(exercises) => {
            structure::add_exercises(&mut draft, exercises);
            Ok(())
        }
        Action::RemoveExercise(index) => structure::remove_exercise(&mut draft, index).map_err(Violation::from),
        Action::UpdateExercise { index, exercise } => {
            structure::update_exercise(&mut draft, index, exercise).map_err(Violation::from)
        }
        Action::ReorderExercises { from, to } => {
            structure::reorder_exercises(&mut draft, from, to).map_err(Violation::from)
        }
        Action::CommitExercises => structure::commit_exercises(&mut draft).map_err(Violation::from),
        Action::SetStep(step) => {
            draft.current_step = WizardStep::clamped(step).number();
            Ok(())
        }
        Action::NextStep => {
            draft.current_step = draft.step().next().number();
            Ok(())
        }
        Action::PrevStep => {
            draft.current_step = draft.step().prev().number();
            Ok(())
        }
        Action::SetLoading(loading) => {
            draft.is_loading = loading;
            Ok(())
        }
        Action::SetError { field, message } => {
            draft.errors.insert(field, message);
            Ok(())
        }
        Action::ClearError(field) => {
            draft.errors.remove(&field);
            Ok(())
        }
        Action::ClearAllErrors => {
            draft.errors.clear();
            Ok(())
        }
        Action::ResetState => {
            draft = ProgramDraft::default();
            Ok(())
        }
        Action::LoadFromStorage(snapshot) => {
            draft = snapshot.merge_into(draft);
            structure::restore_invariants(&mut draft);
            Ok(())
        }
        Action::ValidateCurrentStep => Ok(()),
        Action::Unrecognized => {
            debug!("Ignoring unrecognized action");
            Ok(())
        }
    };

    match &outcome {
        Ok(()) => {
            if mutation {
                draft.is_dirty = true;
            }
        }
        Err(violation) => warn!("Ignoring {kind}: {violation}"),
    }

    draft.is_valid = validation::validate_current_step(&draft);
    (draft, outcome)
}

/// Overlays the supplied program info fields onto the draft.
///
/// An unacceptable duration rejects the whole update.
fn apply_basic_info(draft: &mut ProgramDraft, info: BasicInfo) -> Result<(), Violation> {
    if let Some(duration) = info.duration_weeks {
        structure::check_duration(duration)?;
    }

    if let Some(name) = info.name {
        draft.name = name;
    }
    if let Some(description) = info.description {
        draft.description = description;
    }
    if let Some(program_type) = info.program_type {
        draft.program_type = program_type;
    }
    if let Some(difficulty_level) = info.difficulty_level {
        draft.difficulty_level = difficulty_level;
    }
    if let Some(goals) = info.goals {
        draft.goals = goals;
    }
    if let Some(equipment_needed) = info.equipment_needed {
        draft.equipment_needed = equipment_needed;
    }
    match info.duration_weeks {
        Some(duration) => structure::set_duration(draft, duration),
        None => Ok(()),
    }
}
