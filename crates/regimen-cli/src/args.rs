//! Command-line interface definitions using clap
//!
//! The CLI drives a single persisted program draft. Every command that edits
//! the draft is translated into one or more wizard actions:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Actions → Reducer → Saved Draft
//! ```
//!
//! Core types stay free of clap derives; the `From` conversions and the
//! `into_*` helpers below are the only place where the two meet.
//!
//! Positions on the command line are 1-based (`week remove 2` removes the
//! second week) and are converted to the 0-based indices the actions carry.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use regimen_core::{
    models::{
        DifficultyLevel, ExerciseAssignmentDraft, ExerciseConfiguration, ProgramType, WeekDraft,
        WorkoutDraft, WorkoutType,
    },
    params::BasicInfo,
    wizard::MAX_DURATION_WEEKS,
};

/// Build multi-week training programs step by step
///
/// Regimen keeps one draft program on disk and walks it through five steps:
/// program info, week structure, workouts, exercises and preview. Every
/// command edits or inspects that draft; `submit` turns a complete draft into
/// the program payload.
#[derive(Parser)]
#[command(version, about, name = "regimen")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/regimen/regimen.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Regimen CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Set program name, type, difficulty, duration, goals or equipment
    #[command(alias = "i")]
    Info(InfoArgs),
    /// Manage the weeks of the program
    #[command(alias = "w")]
    Week {
        #[command(subcommand)]
        command: WeekCommands,
    },
    /// Manage the workouts of a week
    #[command(alias = "wo")]
    Workout {
        #[command(subcommand)]
        command: WorkoutCommands,
    },
    /// Select exercises and commit them to the current workout
    #[command(alias = "e")]
    Exercise {
        #[command(subcommand)]
        command: ExerciseCommands,
    },
    /// Move between wizard steps
    #[command(alias = "s")]
    Step {
        #[command(subcommand)]
        command: StepCommands,
    },
    /// Apply a raw JSON action such as '{"type":"ADD_WEEK","payload":null}'
    Dispatch(DispatchArgs),
    /// Show the full program preview
    #[command(alias = "p")]
    Preview,
    /// Print the submission payload of a complete draft and clear it
    Submit,
    /// Throw away the saved draft
    Discard,
    /// Print the JSON schema of the action format
    Schema,
}

/// Parses a 1-based position into a 0-based index.
pub fn parse_position(value: &str) -> Result<usize, String> {
    let position: usize = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a valid position"))?;
    position
        .checked_sub(1)
        .ok_or_else(|| "positions start at 1".to_string())
}

// ============================================================================
// Program info
// ============================================================================

/// Update the program info fields
///
/// Only the flags that are given change; everything else is kept. A positive
/// `--weeks` value also resizes the week list, keeping the overlapping weeks.
#[derive(ClapArgs, Default)]
pub struct InfoArgs {
    #[arg(short, long, help = "Program name")]
    pub name: Option<String>,
    #[arg(
        short,
        long,
        conflicts_with = "clear_description",
        help = "Free-form program description"
    )]
    pub description: Option<String>,
    #[arg(long, help = "Remove the program description")]
    pub clear_description: bool,
    #[arg(
        short = 't',
        long = "type",
        help = "Program type (strength, hypertrophy, powerlifting, general_fitness, ...)"
    )]
    pub program_type: Option<ProgramType>,
    #[arg(
        short = 'l',
        long = "difficulty",
        help = "Difficulty level (beginner, intermediate, advanced)"
    )]
    pub difficulty_level: Option<DifficultyLevel>,
    #[arg(
        short = 'w',
        long = "weeks",
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_DURATION_WEEKS)),
        help = "Program duration in weeks (at most 52); resizes the week list"
    )]
    pub duration_weeks: Option<u32>,
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Training goals as comma-separated list; replaces the current goals"
    )]
    pub goals: Option<Vec<String>>,
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Required equipment as comma-separated list; replaces the current list"
    )]
    pub equipment: Option<Vec<String>>,
}

impl From<InfoArgs> for BasicInfo {
    fn from(val: InfoArgs) -> Self {
        let description = if val.clear_description {
            Some(None)
        } else {
            val.description.map(Some)
        };

        BasicInfo {
            name: val.name,
            description,
            program_type: val.program_type.map(Some),
            difficulty_level: val.difficulty_level.map(Some),
            duration_weeks: val.duration_weeks,
            goals: val.goals.map(|goals| goals.into_iter().collect()),
            equipment_needed: val.equipment.map(|items| items.into_iter().collect()),
        }
    }
}

// ============================================================================
// Weeks
// ============================================================================

#[derive(Subcommand)]
pub enum WeekCommands {
    /// Append a week
    #[command(alias = "a")]
    Add(AddWeekArgs),
    /// Remove a week and renumber the rest
    #[command(aliases = ["rm", "r"])]
    Remove(WeekArgs),
    /// Change a week's name, description or deload flag
    #[command(alias = "u")]
    Update(UpdateWeekArgs),
    /// Append a copy of a week
    #[command(alias = "d")]
    Duplicate(WeekArgs),
    /// Make a week the current one
    #[command(alias = "s")]
    Select(WeekArgs),
}

/// Identifies a week by its 1-based position
#[derive(ClapArgs)]
pub struct WeekArgs {
    #[arg(value_parser = parse_position, help = "Week position (1 = first week)")]
    pub week: usize,
}

#[derive(ClapArgs, Default)]
pub struct AddWeekArgs {
    #[arg(short, long, help = "Week name (defaults to 'Week N')")]
    pub name: Option<String>,
    #[arg(short, long, help = "Week description")]
    pub description: Option<String>,
    #[arg(long, help = "Mark the week as a deload week")]
    pub deload: bool,
}

impl AddWeekArgs {
    /// The week to append, or `None` for a plain generated week.
    pub fn into_week(self, week_number: u32) -> Option<WeekDraft> {
        if self.name.is_none() && self.description.is_none() && !self.deload {
            return None;
        }

        let mut week = WeekDraft::generated(week_number);
        if let Some(name) = self.name {
            week.name = name;
        }
        week.description = self.description;
        week.is_deload = self.deload;
        Some(week)
    }
}

#[derive(ClapArgs)]
pub struct UpdateWeekArgs {
    #[arg(value_parser = parse_position, help = "Week position (1 = first week)")]
    pub week: usize,
    #[arg(short, long, help = "New week name")]
    pub name: Option<String>,
    #[arg(short, long, help = "New week description")]
    pub description: Option<String>,
    #[arg(long, help = "Set (true) or clear (false) the deload flag")]
    pub deload: Option<bool>,
}

impl UpdateWeekArgs {
    /// Applies the given flags to a copy of the existing week.
    pub fn apply_to(self, mut week: WeekDraft) -> WeekDraft {
        if let Some(name) = self.name {
            week.name = name;
        }
        if let Some(description) = self.description {
            week.description = Some(description);
        }
        if let Some(deload) = self.deload {
            week.is_deload = deload;
        }
        week
    }
}

// ============================================================================
// Workouts
// ============================================================================

#[derive(Subcommand)]
pub enum WorkoutCommands {
    /// Append a workout to a week
    #[command(alias = "a")]
    Add(AddWorkoutArgs),
    /// Remove a workout from a week
    #[command(aliases = ["rm", "r"])]
    Remove(WorkoutArgs),
    /// Change a workout's details
    #[command(alias = "u")]
    Update(UpdateWorkoutArgs),
    /// Make a workout the current one for exercise selection
    #[command(alias = "s")]
    Select(WorkoutArgs),
}

/// Identifies a workout by week and workout position
#[derive(ClapArgs)]
pub struct WorkoutArgs {
    #[arg(value_parser = parse_position, help = "Week position (1 = first week)")]
    pub week: usize,
    #[arg(value_parser = parse_position, help = "Workout position within the week")]
    pub workout: usize,
}

/// Workout fields shared by `add` and `update`
#[derive(ClapArgs, Default)]
pub struct WorkoutFields {
    #[arg(short, long, help = "Workout name")]
    pub name: Option<String>,
    #[arg(long, help = "Workout description")]
    pub description: Option<String>,
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u8).range(1..=7),
        help = "Day of the week (1 = Monday, 7 = Sunday)"
    )]
    pub day: Option<u8>,
    #[arg(
        short = 't',
        long = "type",
        help = "Workout type (strength, cardio, hiit, flexibility, mixed, recovery)"
    )]
    pub workout_type: Option<WorkoutType>,
    #[arg(long, help = "Estimated duration in minutes")]
    pub duration: Option<u32>,
    #[arg(long, help = "Mark (true) or unmark (false) the workout as a rest day")]
    pub rest_day: Option<bool>,
}

impl WorkoutFields {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.day.is_none()
            && self.workout_type.is_none()
            && self.duration.is_none()
            && self.rest_day.is_none()
    }

    /// Applies the given flags to a workout.
    pub fn apply_to(self, mut workout: WorkoutDraft) -> WorkoutDraft {
        if let Some(name) = self.name {
            workout.name = name;
        }
        if let Some(description) = self.description {
            workout.description = Some(description);
        }
        if let Some(day) = self.day {
            workout.day_number = day;
        }
        if let Some(workout_type) = self.workout_type {
            workout.workout_type = Some(workout_type);
        }
        if let Some(duration) = self.duration {
            workout.estimated_duration = Some(duration);
        }
        if let Some(rest_day) = self.rest_day {
            workout.is_rest_day = rest_day;
        }
        workout
    }
}

#[derive(ClapArgs)]
pub struct AddWorkoutArgs {
    #[arg(value_parser = parse_position, help = "Week position (1 = first week)")]
    pub week: usize,
    #[command(flatten)]
    pub fields: WorkoutFields,
}

impl AddWorkoutArgs {
    /// The workout to append, or `None` for the default new workout.
    pub fn into_workout(self) -> Option<WorkoutDraft> {
        if self.fields.is_empty() {
            None
        } else {
            Some(self.fields.apply_to(WorkoutDraft::default()))
        }
    }
}

#[derive(ClapArgs)]
pub struct UpdateWorkoutArgs {
    #[arg(value_parser = parse_position, help = "Week position (1 = first week)")]
    pub week: usize,
    #[arg(value_parser = parse_position, help = "Workout position within the week")]
    pub workout: usize,
    #[command(flatten)]
    pub fields: WorkoutFields,
}

// ============================================================================
// Exercises
// ============================================================================

#[derive(Subcommand)]
pub enum ExerciseCommands {
    /// Add exercises to the selection
    #[command(alias = "a")]
    Add(AddExercisesArgs),
    /// Remove an exercise from the selection
    #[command(aliases = ["rm", "r"])]
    Remove(ExerciseArgs),
    /// Change an exercise in the selection
    #[command(alias = "u")]
    Update(UpdateExerciseArgs),
    /// Move an exercise to another position in the selection
    #[command(alias = "mv")]
    Move(MoveExerciseArgs),
    /// Append the selection to the current workout and clear it
    #[command(alias = "c")]
    Commit,
    /// Show the selection and the current workout
    #[command(aliases = ["l", "ls"])]
    List,
}

#[derive(ClapArgs)]
pub struct ExerciseArgs {
    #[arg(value_parser = parse_position, help = "Position in the selection (1 = first)")]
    pub position: usize,
}

/// Add catalog exercises to the selection
///
/// Each id becomes one assignment. With `--sets`, every exercise gets that
/// many working sets of `--reps` repetitions.
#[derive(ClapArgs)]
pub struct AddExercisesArgs {
    #[arg(required = true, num_args = 1.., help = "Catalog exercise ids")]
    pub ids: Vec<String>,
    #[arg(long, help = "Number of working sets per exercise")]
    pub sets: Option<u32>,
    #[arg(long, default_value = "10", help = "Repetition target per set, e.g. 8-12")]
    pub reps: String,
    #[arg(long, help = "Rest between sets in seconds")]
    pub rest: Option<u32>,
    #[arg(long, help = "Superset group label (A, B, C)")]
    pub superset: Option<String>,
    #[arg(long, help = "Coaching notes")]
    pub notes: Option<String>,
}

impl From<AddExercisesArgs> for Vec<ExerciseAssignmentDraft> {
    fn from(val: AddExercisesArgs) -> Self {
        val.ids
            .iter()
            .map(|id| {
                let mut exercise = ExerciseAssignmentDraft::new(id.as_str());
                exercise.superset_group = val.superset.clone();
                exercise.notes = val.notes.clone();
                if let Some(sets) = val.sets {
                    exercise.sets_config = serde_json::json!({
                        "sets": sets,
                        "reps": val.reps,
                    });
                    exercise.configurations = (1..=sets)
                        .map(|set_number| ExerciseConfiguration {
                            rest_seconds: val.rest,
                            ..ExerciseConfiguration::working(set_number, val.reps.as_str())
                        })
                        .collect();
                }
                exercise
            })
            .collect()
    }
}

#[derive(ClapArgs)]
pub struct UpdateExerciseArgs {
    #[arg(value_parser = parse_position, help = "Position in the selection (1 = first)")]
    pub position: usize,
    #[arg(long, conflicts_with = "no_superset", help = "Superset group label")]
    pub superset: Option<String>,
    #[arg(long, help = "Remove the exercise from its superset")]
    pub no_superset: bool,
    #[arg(long, help = "Coaching notes")]
    pub notes: Option<String>,
}

impl UpdateExerciseArgs {
    pub fn apply_to(self, mut exercise: ExerciseAssignmentDraft) -> ExerciseAssignmentDraft {
        if self.no_superset {
            exercise.superset_group = None;
        } else if let Some(superset) = self.superset {
            exercise.superset_group = Some(superset);
        }
        if let Some(notes) = self.notes {
            exercise.notes = Some(notes);
        }
        exercise
    }
}

#[derive(ClapArgs)]
pub struct MoveExerciseArgs {
    #[arg(value_parser = parse_position, help = "Current position (1 = first)")]
    pub from: usize,
    #[arg(value_parser = parse_position, help = "Target position (1 = first)")]
    pub to: usize,
}

// ============================================================================
// Steps and raw actions
// ============================================================================

#[derive(Subcommand)]
pub enum StepCommands {
    /// Advance to the next step if the current one is complete
    #[command(alias = "n")]
    Next {
        #[arg(long, help = "Advance even if the current step is incomplete")]
        force: bool,
    },
    /// Go back one step
    #[command(alias = "p")]
    Prev,
    /// Jump to a step (1-5); out of range values are clamped
    Set {
        #[arg(allow_negative_numbers = true, help = "Step number (1-5)")]
        step: i64,
    },
    /// Show the current step and the completion of every step
    #[command(alias = "s")]
    Show,
}

#[derive(ClapArgs)]
pub struct DispatchArgs {
    #[arg(help = "Action as JSON, e.g. '{\"type\":\"NEXT_STEP\"}'")]
    pub json: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("1"), Ok(0));
        assert_eq!(parse_position(" 3 "), Ok(2));
        assert!(parse_position("0").is_err());
        assert!(parse_position("-1").is_err());
        assert!(parse_position("two").is_err());
    }

    #[test]
    fn test_info_args_into_basic_info() {
        let args = Args::try_parse_from([
            "regimen",
            "info",
            "--name",
            "Block",
            "--type",
            "general-fitness",
            "--difficulty",
            "Beginner",
            "--weeks",
            "4",
            "--goals",
            "strength,size",
        ])
        .expect("arguments should parse");

        let Some(Commands::Info(info)) = args.command else {
            panic!("expected info command");
        };
        let info = BasicInfo::from(info);
        assert_eq!(info.name.as_deref(), Some("Block"));
        assert_eq!(info.program_type, Some(Some(ProgramType::GeneralFitness)));
        assert_eq!(info.difficulty_level, Some(Some(DifficultyLevel::Beginner)));
        assert_eq!(info.duration_weeks, Some(4));
        assert_eq!(info.goals.map(|g| g.len()), Some(2));
        assert_eq!(info.description, None);
        assert_eq!(info.equipment_needed, None);
    }

    #[test]
    fn test_clear_description() {
        let info = BasicInfo::from(InfoArgs {
            clear_description: true,
            ..Default::default()
        });
        assert_eq!(info.description, Some(None));
    }

    #[test]
    fn test_plain_add_week_is_generated() {
        assert_eq!(AddWeekArgs::default().into_week(3), None);

        let week = AddWeekArgs {
            deload: true,
            ..Default::default()
        }
        .into_week(3)
        .expect("deload week");
        assert_eq!(week.name, "Week 3");
        assert!(week.is_deload);
    }

    #[test]
    fn test_add_exercises_with_sets() {
        let args = AddExercisesArgs {
            ids: vec!["squat".to_string(), "lunge".to_string()],
            sets: Some(3),
            reps: "8-10".to_string(),
            rest: Some(90),
            superset: Some("A".to_string()),
            notes: None,
        };

        let exercises: Vec<ExerciseAssignmentDraft> = args.into();
        assert_eq!(exercises.len(), 2);
        assert_eq!(exercises[1].exercise_id, "lunge");
        assert_eq!(exercises[0].configurations.len(), 3);
        assert_eq!(exercises[0].configurations[2].set_number, 3);
        assert_eq!(exercises[0].configurations[0].reps, "8-10");
        assert_eq!(exercises[0].configurations[0].rest_seconds, Some(90));
        assert_eq!(exercises[0].sets_config["sets"], 3);
        assert_eq!(exercises[1].superset_group.as_deref(), Some("A"));
    }

    #[test]
    fn test_weeks_range() {
        assert!(Args::try_parse_from(["regimen", "info", "--weeks", "53"]).is_err());
        assert!(Args::try_parse_from(["regimen", "info", "--weeks", "4000000000"]).is_err());
        assert!(Args::try_parse_from(["regimen", "info", "--weeks", "52"]).is_ok());
    }

    #[test]
    fn test_workout_day_range() {
        assert!(Args::try_parse_from(["regimen", "workout", "add", "1", "--day", "8"]).is_err());
        assert!(Args::try_parse_from(["regimen", "workout", "add", "1", "--day", "7"]).is_ok());
    }
}
