//! Command handlers for the Regimen CLI.
//!
//! Each handler turns parsed arguments into wizard actions, dispatches them
//! against the persisted draft and renders the outcome as markdown.

use anyhow::{anyhow, bail, Context, Result};
use log::debug;
use regimen_core::{
    display::{OperationStatus, ReadinessReport, WizardOverview},
    models::ProgramDraft,
    params::BasicInfo,
    wizard::field_errors,
    Action, BuilderError, Wizard,
};

use crate::{
    args::{
        DispatchArgs, ExerciseCommands, InfoArgs, StepCommands, WeekCommands, WorkoutCommands,
    },
    renderer::TerminalRenderer,
};

pub struct Cli {
    wizard: Wizard,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(wizard: Wizard, renderer: TerminalRenderer) -> Self {
        Self { wizard, renderer }
    }

    /// Dispatches an action, reporting positions that do not exist in the
    /// 1-based numbering the command line uses.
    fn apply(&mut self, action: Action) -> Result<&ProgramDraft> {
        debug!("Dispatching {}", action.kind());
        self.wizard.try_dispatch(action).map_err(|e| match e {
            BuilderError::OutOfRange(e) => match e.len {
                0 => anyhow!("There is no {} {}; none exist yet", e.target, e.index + 1),
                len => anyhow!(
                    "There is no {} {}; valid positions are 1 to {len}",
                    e.target,
                    e.index + 1
                ),
            },
            other => other.into(),
        })
    }

    fn render_status(&self, status: OperationStatus) -> Result<()> {
        self.renderer.render(&status.to_string())
    }

    pub fn show_overview(&self) -> Result<()> {
        let overview = WizardOverview::new(self.wizard.state(), self.wizard.saved_at());
        self.renderer.render(&overview.to_string())
    }

    pub fn handle_info(&mut self, args: InfoArgs) -> Result<()> {
        let info = BasicInfo::from(args);
        if info.is_empty() {
            bail!("Nothing to update. See 'regimen info --help' for the available fields");
        }

        self.apply(Action::SetBasicInfo(info))?;
        self.render_status(OperationStatus::success("Program info updated"))?;
        self.show_overview()
    }

    pub fn handle_week_command(&mut self, command: WeekCommands) -> Result<()> {
        match command {
            WeekCommands::Add(args) => {
                let week_number = self.wizard.state().weeks.len() as u32 + 1;
                let draft = self.apply(Action::AddWeek(args.into_week(week_number)))?;
                let output = match draft.weeks.last() {
                    Some(week) => format!(
                        "{}\n{week}",
                        OperationStatus::success(format!("Added week {}", week.week_number))
                    ),
                    None => OperationStatus::failure("No week was added").to_string(),
                };
                self.renderer.render(&output)
            }
            WeekCommands::Remove(args) => {
                let draft = self.apply(Action::RemoveWeek(args.week))?;
                let message = format!(
                    "Removed week {}; the program now has {} week(s)",
                    args.week + 1,
                    draft.weeks.len()
                );
                self.render_status(OperationStatus::success(message))
            }
            WeekCommands::Update(args) => {
                let index = args.week;
                let current = self
                    .wizard
                    .state()
                    .weeks
                    .get(index)
                    .cloned()
                    .with_context(|| format!("There is no week {}", index + 1))?;
                let week = args.apply_to(current);
                let draft = self.apply(Action::UpdateWeek { index, week })?;
                let output = format!(
                    "{}\n{}",
                    OperationStatus::success(format!("Updated week {}", index + 1)),
                    draft.weeks[index]
                );
                self.renderer.render(&output)
            }
            WeekCommands::Duplicate(args) => {
                let draft = self.apply(Action::DuplicateWeek(args.week))?;
                let message = format!(
                    "Duplicated week {} as week {}",
                    args.week + 1,
                    draft.weeks.len()
                );
                self.render_status(OperationStatus::success(message))
            }
            WeekCommands::Select(args) => {
                self.apply(Action::SetCurrentWeek(args.week))?;
                self.render_status(OperationStatus::success(format!(
                    "Week {} is now current",
                    args.week + 1
                )))
            }
        }
    }

    pub fn handle_workout_command(&mut self, command: WorkoutCommands) -> Result<()> {
        match command {
            WorkoutCommands::Add(args) => {
                let week_index = args.week;
                let draft = self.apply(Action::AddWorkout {
                    week_index,
                    workout: args.into_workout(),
                })?;
                let workouts = &draft.weeks[week_index].workouts;
                let output = match workouts.last() {
                    Some(workout) => format!(
                        "{}\n{workout}",
                        OperationStatus::success(format!(
                            "Added workout {} to week {}",
                            workouts.len(),
                            week_index + 1
                        ))
                    ),
                    None => OperationStatus::failure("No workout was added").to_string(),
                };
                self.renderer.render(&output)
            }
            WorkoutCommands::Remove(args) => {
                self.apply(Action::RemoveWorkout {
                    week_index: args.week,
                    workout_index: args.workout,
                })?;
                self.render_status(OperationStatus::success(format!(
                    "Removed workout {} from week {}",
                    args.workout + 1,
                    args.week + 1
                )))
            }
            WorkoutCommands::Update(args) => {
                let (week_index, workout_index) = (args.week, args.workout);
                let current = self
                    .wizard
                    .state()
                    .weeks
                    .get(week_index)
                    .and_then(|week| week.workouts.get(workout_index))
                    .cloned()
                    .with_context(|| {
                        format!(
                            "There is no workout {} in week {}",
                            workout_index + 1,
                            week_index + 1
                        )
                    })?;
                let workout = args.fields.apply_to(current);
                let draft = self.apply(Action::UpdateWorkout {
                    week_index,
                    workout_index,
                    workout,
                })?;
                let output = format!(
                    "{}\n{}",
                    OperationStatus::success("Workout updated"),
                    draft.weeks[week_index].workouts[workout_index]
                );
                self.renderer.render(&output)
            }
            WorkoutCommands::Select(args) => {
                self.apply(Action::SetCurrentWeek(args.week))?;
                self.apply(Action::SetCurrentWorkout(args.workout))?;
                self.render_status(OperationStatus::success(format!(
                    "Workout {} of week {} is now current",
                    args.workout + 1,
                    args.week + 1
                )))
            }
        }
    }

    pub fn handle_exercise_command(&mut self, command: ExerciseCommands) -> Result<()> {
        match command {
            ExerciseCommands::Add(args) => {
                self.apply(Action::AddExercises(args.into()))?;
                self.list_selection()
            }
            ExerciseCommands::Remove(args) => {
                self.apply(Action::RemoveExercise(args.position))?;
                self.list_selection()
            }
            ExerciseCommands::Update(args) => {
                let index = args.position;
                let current = self
                    .wizard
                    .state()
                    .selected_exercises
                    .get(index)
                    .cloned()
                    .with_context(|| format!("There is no exercise {} selected", index + 1))?;
                let exercise = args.apply_to(current);
                self.apply(Action::UpdateExercise { index, exercise })?;
                self.list_selection()
            }
            ExerciseCommands::Move(args) => {
                self.apply(Action::ReorderExercises {
                    from: args.from,
                    to: args.to,
                })?;
                self.list_selection()
            }
            ExerciseCommands::Commit => self.commit_selection(),
            ExerciseCommands::List => self.list_selection(),
        }
    }

    fn commit_selection(&mut self) -> Result<()> {
        let count = self.wizard.state().selected_exercises.len();
        if count == 0 {
            return self.render_status(OperationStatus::failure("No exercises selected"));
        }

        let draft = self.apply(Action::CommitExercises)?;
        let output = match draft.current_workout() {
            Some(workout) => format!(
                "{}\n{workout}",
                OperationStatus::success(format!(
                    "Committed {count} exercise(s) to week {}",
                    draft.current_week_index + 1
                ))
            ),
            None => OperationStatus::success(format!("Committed {count} exercise(s)")).to_string(),
        };
        self.renderer.render(&output)
    }

    fn list_selection(&self) -> Result<()> {
        let draft = self.wizard.state();
        let mut output = String::from("## Selected exercises\n\n");
        if draft.selected_exercises.is_empty() {
            output.push_str("No exercises selected.\n");
        }
        for exercise in &draft.selected_exercises {
            output.push_str(&exercise.to_string());
        }

        output.push('\n');
        match draft.current_workout() {
            Some(workout) => output.push_str(&format!(
                "Current workout (week {}):\n\n{workout}",
                draft.current_week_index + 1
            )),
            None => output.push_str("No current workout. Add one with 'regimen workout add'.\n"),
        }
        self.renderer.render(&output)
    }

    pub fn handle_step_command(&mut self, command: StepCommands) -> Result<()> {
        match command {
            StepCommands::Next { force } => self.next_step(force),
            StepCommands::Prev => {
                self.apply(Action::PrevStep)?;
                self.show_overview()
            }
            StepCommands::Set { step } => {
                self.apply(Action::SetStep(step))?;
                self.show_overview()
            }
            StepCommands::Show => {
                self.apply(Action::ValidateCurrentStep)?;
                self.show_overview()
            }
        }
    }

    /// Advances one step, refusing (and recording field errors) while the
    /// current step is incomplete unless forced.
    fn next_step(&mut self, force: bool) -> Result<()> {
        let draft = self.apply(Action::ValidateCurrentStep)?;
        let step = draft.step();
        if !draft.is_valid && !force {
            let errors = field_errors(draft, step);
            let mut output = format!("## {} is incomplete\n\n", step.name());
            for (field, message) in &errors {
                output.push_str(&format!("- {field}: {message}\n"));
            }
            for (field, message) in errors {
                self.apply(Action::SetError { field, message })?;
            }
            self.wizard
                .save()
                .context("Failed to save the recorded field errors")?;
            self.renderer.render(&output)?;
            bail!("Complete step {} first or pass --force", step.number());
        }

        self.apply(Action::ClearAllErrors)?;
        self.apply(Action::NextStep)?;
        self.show_overview()
    }

    pub fn handle_dispatch(&mut self, args: DispatchArgs) -> Result<()> {
        let action: Action =
            serde_json::from_str(&args.json).context("Failed to parse action JSON")?;
        if action == Action::Unrecognized {
            self.render_status(OperationStatus::failure("Unrecognized action ignored"))?;
        }
        self.apply(action)?;
        self.show_overview()
    }

    pub fn preview(&self) -> Result<()> {
        self.renderer.render(&self.wizard.state().to_string())
    }

    /// Prints the submission payload as JSON on stdout.
    pub fn submit(&mut self) -> Result<()> {
        match self.wizard.finalize() {
            Ok(submission) => {
                let json = serde_json::to_string_pretty(&submission)
                    .context("Failed to serialize submission")?;
                println!("{json}");
                Ok(())
            }
            Err(BuilderError::NotReady { issues }) => {
                self.renderer
                    .render(&ReadinessReport(self.wizard.state()).to_string())?;
                bail!("Draft is not ready ({} issue(s))", issues.len())
            }
            Err(e) => Err(e).context("Failed to finalize program"),
        }
    }

    pub fn discard(&mut self) -> Result<()> {
        let had_draft = self.wizard.has_saved_draft();
        self.wizard.discard();
        let status = if had_draft {
            OperationStatus::success("Draft discarded")
        } else {
            OperationStatus::success("No saved draft; starting fresh")
        };
        self.render_status(status)
    }

    pub fn print_schema(&self) -> Result<()> {
        let schema = schemars::schema_for!(Action);
        let json = serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?;
        println!("{json}");
        Ok(())
    }
}
