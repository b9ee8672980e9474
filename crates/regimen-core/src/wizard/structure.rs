//! Structural edits of the draft hierarchy.
//!
//! Every operation leaves the draft with its numbering invariants restored:
//! week numbers are contiguous from 1, `duration_weeks` tracks a non-empty
//! week list, and exercise order indices are dense from 0. Operations that
//! take an index check it before touching anything, so an `Err` means the
//! draft is exactly as it was.

use thiserror::Error;

use super::WizardStep;
use crate::models::{ExerciseAssignmentDraft, ProgramDraft, WeekDraft, WorkoutDraft};

/// Longest program the builder accepts, in weeks.
pub const MAX_DURATION_WEEKS: u32 = 52;

/// An index did not address an existing element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{target} index {index} is out of range (length {len})")]
pub struct OutOfRange {
    /// What the index was meant to address
    pub target: &'static str,
    pub index: usize,
    pub len: usize,
}

impl OutOfRange {
    fn check(target: &'static str, index: usize, len: usize) -> Result<(), OutOfRange> {
        if index < len {
            Ok(())
        } else {
            Err(OutOfRange { target, index, len })
        }
    }
}

/// A structural edit whose precondition did not hold. The draft is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),
    #[error("duration of {weeks} weeks exceeds the maximum of {}", MAX_DURATION_WEEKS)]
    DurationTooLong { weeks: u32 },
}

type Outcome = Result<(), OutOfRange>;

/// Rejects durations the builder will not generate weeks for.
pub fn check_duration(duration: u32) -> Result<(), Violation> {
    if duration > MAX_DURATION_WEEKS {
        Err(Violation::DurationTooLong { weeks: duration })
    } else {
        Ok(())
    }
}

fn check_week_count(count: usize) -> Result<(), Violation> {
    check_duration(u32::try_from(count).unwrap_or(u32::MAX))
}

/// Resizes the week list to `duration` weeks.
///
/// Weeks inside both lengths are kept, missing weeks are generated and weeks
/// past the new length are dropped with their content. A duration of 0 is
/// stored but leaves the weeks alone. Durations past [`MAX_DURATION_WEEKS`]
/// are rejected without touching the draft.
pub fn set_duration(draft: &mut ProgramDraft, duration: u32) -> Result<(), Violation> {
    check_duration(duration)?;
    draft.duration_weeks = duration;
    if duration == 0 {
        return Ok(());
    }

    let target = duration as usize;
    if draft.weeks.len() > target {
        draft.weeks.truncate(target);
    }
    let next = draft.weeks.len() as u32 + 1;
    draft
        .weeks
        .extend((next..=duration).map(WeekDraft::generated));
    clamp_selection(draft);
    Ok(())
}

/// Replaces the week list, renumbering it and syncing the duration.
pub fn replace_weeks(draft: &mut ProgramDraft, weeks: Vec<WeekDraft>) -> Result<(), Violation> {
    check_week_count(weeks.len())?;
    install_weeks(draft, weeks);
    Ok(())
}

fn install_weeks(draft: &mut ProgramDraft, weeks: Vec<WeekDraft>) {
    draft.weeks = weeks;
    renumber_weeks(&mut draft.weeks);
    sync_duration(draft);
    clamp_selection(draft);
}

/// Brings a draft restored from storage back in line with the structural
/// invariants: contiguous week numbers, a synced duration, dense exercise
/// order, an in-range selection and a step within 1..=5. Weeks past
/// [`MAX_DURATION_WEEKS`] are dropped.
pub fn restore_invariants(draft: &mut ProgramDraft) {
    let mut weeks = std::mem::take(&mut draft.weeks);
    weeks.truncate(MAX_DURATION_WEEKS as usize);
    draft.duration_weeks = draft.duration_weeks.min(MAX_DURATION_WEEKS);
    install_weeks(draft, weeks);
    for workout in draft.weeks.iter_mut().flat_map(|week| week.workouts.iter_mut()) {
        reindex_exercises(&mut workout.exercises);
    }
    reindex_exercises(&mut draft.selected_exercises);
    draft.current_step = WizardStep::clamped(i64::from(draft.current_step)).number();
}

/// Appends a week at the next slot. A supplied week is renumbered to it.
pub fn add_week(draft: &mut ProgramDraft, week: Option<WeekDraft>) -> Result<(), Violation> {
    check_week_count(draft.weeks.len() + 1)?;
    let number = draft.weeks.len() as u32 + 1;
    let mut week = week.unwrap_or_else(|| WeekDraft::generated(number));
    week.week_number = number;
    draft.weeks.push(week);
    draft.duration_weeks = draft.weeks.len() as u32;
    Ok(())
}

/// Removes the week at `index` and renumbers the rest.
///
/// A week still carrying the generated name of its old number gets the name
/// of its new number; custom names are preserved.
pub fn remove_week(draft: &mut ProgramDraft, index: usize) -> Outcome {
    OutOfRange::check("week", index, draft.weeks.len())?;

    draft.weeks.remove(index);
    for (position, week) in draft.weeks.iter_mut().enumerate() {
        let renamed = week.has_default_name();
        week.week_number = position as u32 + 1;
        if renamed {
            week.name = WeekDraft::default_name(week.week_number);
        }
    }
    draft.duration_weeks = draft.weeks.len() as u32;
    clamp_selection(draft);
    Ok(())
}

/// Replaces the week at `index`, keeping its number bound to the position.
pub fn update_week(draft: &mut ProgramDraft, index: usize, mut week: WeekDraft) -> Outcome {
    OutOfRange::check("week", index, draft.weeks.len())?;

    week.week_number = index as u32 + 1;
    draft.weeks[index] = week;
    clamp_selection(draft);
    Ok(())
}

/// Appends a deep copy of the week at `index` with a " (Copy)" suffix.
pub fn duplicate_week(draft: &mut ProgramDraft, index: usize) -> Result<(), Violation> {
    OutOfRange::check("week", index, draft.weeks.len())?;
    check_week_count(draft.weeks.len() + 1)?;

    let mut copy = draft.weeks[index].clone();
    copy.week_number = draft.weeks.len() as u32 + 1;
    copy.name = format!("{} (Copy)", copy.name);
    draft.weeks.push(copy);
    draft.duration_weeks = draft.weeks.len() as u32;
    Ok(())
}

/// Appends a workout to a week; `None` appends the default workout.
pub fn add_workout(
    draft: &mut ProgramDraft,
    week_index: usize,
    workout: Option<WorkoutDraft>,
) -> Outcome {
    let week = week_mut(draft, week_index)?;
    week.workouts.push(workout.unwrap_or_default());
    Ok(())
}

pub fn remove_workout(draft: &mut ProgramDraft, week_index: usize, workout_index: usize) -> Outcome {
    let week = week_mut(draft, week_index)?;
    OutOfRange::check("workout", workout_index, week.workouts.len())?;

    week.workouts.remove(workout_index);
    clamp_selection(draft);
    Ok(())
}

pub fn update_workout(
    draft: &mut ProgramDraft,
    week_index: usize,
    workout_index: usize,
    workout: WorkoutDraft,
) -> Outcome {
    let week = week_mut(draft, week_index)?;
    OutOfRange::check("workout", workout_index, week.workouts.len())?;

    week.workouts[workout_index] = workout;
    Ok(())
}

/// Selects the week whose workouts are being edited.
pub fn select_week(draft: &mut ProgramDraft, index: usize) -> Outcome {
    OutOfRange::check("week", index, draft.weeks.len())?;

    draft.current_week_index = index;
    let workouts = draft.weeks[index].workouts.len();
    if draft.current_workout_index >= workouts {
        draft.current_workout_index = 0;
    }
    Ok(())
}

/// Selects the workout (within the current week) receiving exercises.
pub fn select_workout(draft: &mut ProgramDraft, index: usize) -> Outcome {
    let len = draft.current_week().map_or(0, |week| week.workouts.len());
    OutOfRange::check("workout", index, len)?;

    draft.current_workout_index = index;
    Ok(())
}

/// Appends exercises to the selection working set.
pub fn add_exercises(draft: &mut ProgramDraft, exercises: Vec<ExerciseAssignmentDraft>) {
    draft.selected_exercises.extend(exercises);
    reindex_exercises(&mut draft.selected_exercises);
}

pub fn remove_exercise(draft: &mut ProgramDraft, index: usize) -> Outcome {
    OutOfRange::check("exercise", index, draft.selected_exercises.len())?;

    draft.selected_exercises.remove(index);
    reindex_exercises(&mut draft.selected_exercises);
    Ok(())
}

pub fn update_exercise(
    draft: &mut ProgramDraft,
    index: usize,
    exercise: ExerciseAssignmentDraft,
) -> Outcome {
    OutOfRange::check("exercise", index, draft.selected_exercises.len())?;

    draft.selected_exercises[index] = exercise;
    reindex_exercises(&mut draft.selected_exercises);
    Ok(())
}

/// Moves the exercise at `from` so that it ends up at `to`.
///
/// This is a remove and reinsert: everything between the two positions
/// shifts by one.
pub fn reorder_exercises(draft: &mut ProgramDraft, from: usize, to: usize) -> Outcome {
    let len = draft.selected_exercises.len();
    OutOfRange::check("exercise", from, len)?;
    OutOfRange::check("exercise", to, len)?;

    let moved = draft.selected_exercises.remove(from);
    draft.selected_exercises.insert(to, moved);
    reindex_exercises(&mut draft.selected_exercises);
    Ok(())
}

/// Moves the selection working set into the current workout.
///
/// An empty working set commits nothing.
pub fn commit_exercises(draft: &mut ProgramDraft) -> Outcome {
    if draft.selected_exercises.is_empty() {
        return Ok(());
    }

    let (week_index, workout_index) = (draft.current_week_index, draft.current_workout_index);
    let week = week_mut(draft, week_index)?;
    OutOfRange::check("workout", workout_index, week.workouts.len())?;

    let selected = std::mem::take(&mut draft.selected_exercises);
    let workout = &mut draft.weeks[week_index].workouts[workout_index];
    workout.exercises.extend(selected);
    reindex_exercises(&mut workout.exercises);
    Ok(())
}

fn week_mut(draft: &mut ProgramDraft, index: usize) -> Result<&mut WeekDraft, OutOfRange> {
    let len = draft.weeks.len();
    draft
        .weeks
        .get_mut(index)
        .ok_or(OutOfRange {
            target: "week",
            index,
            len,
        })
}

fn renumber_weeks(weeks: &mut [WeekDraft]) {
    for (position, week) in weeks.iter_mut().enumerate() {
        week.week_number = position as u32 + 1;
    }
}

fn reindex_exercises(exercises: &mut [ExerciseAssignmentDraft]) {
    for (position, exercise) in exercises.iter_mut().enumerate() {
        exercise.order_index = position as u32;
    }
}

fn sync_duration(draft: &mut ProgramDraft) {
    if !draft.weeks.is_empty() {
        draft.duration_weeks = draft.weeks.len() as u32;
    }
}

/// Pulls the week and workout selection back inside the current structure.
fn clamp_selection(draft: &mut ProgramDraft) {
    let weeks = draft.weeks.len();
    if draft.current_week_index >= weeks {
        draft.current_week_index = weeks.saturating_sub(1);
    }
    let workouts = draft.current_week().map_or(0, |week| week.workouts.len());
    if draft.current_workout_index >= workouts {
        draft.current_workout_index = workouts.saturating_sub(1);
    }
}
