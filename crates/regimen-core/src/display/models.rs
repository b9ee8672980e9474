//! Display implementations for the draft models.
//!
//! The output is markdown: the draft renders as a document, weeks and
//! workouts as sections, and exercises as numbered list items with their set
//! prescriptions nested underneath.

use std::{collections::BTreeSet, fmt};

use super::stats::ProgramStats;
use crate::{
    models::{
        DifficultyLevel, ExerciseAssignmentDraft, ExerciseConfiguration, ProgramDraft,
        ProgramType, SetType, WeekDraft, WorkoutDraft, WorkoutType,
    },
    wizard::WizardStep,
};

impl fmt::Display for ProgramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for SetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.name())
    }
}

fn join(set: &BTreeSet<String>) -> String {
    set.iter().cloned().collect::<Vec<_>>().join(", ")
}

impl fmt::Display for ProgramDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.trim();
        if name.is_empty() {
            writeln!(f, "# Untitled program")?;
        } else {
            writeln!(f, "# {name}")?;
        }
        writeln!(f)?;

        match &self.program_type {
            Some(program_type) => writeln!(f, "- Type: {program_type}")?,
            None => writeln!(f, "- Type: not selected")?,
        }
        match &self.difficulty_level {
            Some(level) => writeln!(f, "- Difficulty: {level}")?,
            None => writeln!(f, "- Difficulty: not selected")?,
        }
        writeln!(
            f,
            "- Duration: {} week{}",
            self.duration_weeks,
            if self.duration_weeks == 1 { "" } else { "s" }
        )?;
        if !self.goals.is_empty() {
            writeln!(f, "- Goals: {}", join(&self.goals))?;
        }
        if !self.equipment_needed.is_empty() {
            writeln!(f, "- Equipment: {}", join(&self.equipment_needed))?;
        }
        writeln!(f, "- Step: {}", self.step())?;

        if let Some(description) = self.description.as_deref().map(str::trim) {
            if !description.is_empty() {
                writeln!(f)?;
                writeln!(f, "{description}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", ProgramStats::from(self))?;

        if self.weeks.is_empty() {
            writeln!(f, "\nNo weeks in this program.")?;
            return Ok(());
        }

        for week in &self.weeks {
            writeln!(f)?;
            write!(f, "{week}")?;
        }
        Ok(())
    }
}

impl fmt::Display for WeekDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_default_name() {
            write!(f, "## Week {}", self.week_number)?;
        } else {
            write!(f, "## Week {}: {}", self.week_number, self.name)?;
        }
        if self.is_deload {
            write!(f, " (Deload)")?;
        }
        writeln!(f)?;

        if let Some(description) = &self.description {
            writeln!(f)?;
            writeln!(f, "{description}")?;
        }

        if self.workouts.is_empty() {
            writeln!(f)?;
            writeln!(f, "No workouts scheduled.")?;
        }
        for workout in &self.workouts {
            writeln!(f)?;
            write!(f, "{workout}")?;
        }
        Ok(())
    }
}

impl fmt::Display for WorkoutDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}: {}", self.day_name(), self.name)?;
        writeln!(f)?;

        if self.is_rest_day {
            writeln!(f, "- Rest day")?;
        }
        if let Some(workout_type) = &self.workout_type {
            writeln!(f, "- Type: {workout_type}")?;
        }
        if let Some(minutes) = self.estimated_duration {
            writeln!(f, "- Duration: {minutes} min")?;
        }
        if let Some(description) = &self.description {
            writeln!(f)?;
            writeln!(f, "{description}")?;
        }

        if !self.exercises.is_empty() {
            writeln!(f)?;
            for exercise in &self.exercises {
                write!(f, "{exercise}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ExerciseAssignmentDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.order_index + 1, self.exercise_id)?;
        if let Some(group) = &self.superset_group {
            write!(f, " (superset {group})")?;
        }
        match self.configurations.len() {
            0 => {}
            1 => write!(f, " - 1 set")?,
            n => write!(f, " - {n} sets")?,
        }
        writeln!(f)?;

        if let Some(notes) = &self.notes {
            writeln!(f, "   > {notes}")?;
        }
        for configuration in &self.configurations {
            writeln!(f, "   - {configuration}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ExerciseConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Set {} ({}): {}", self.set_number, self.set_type, self.reps)?;
        if let Some(weight) = &self.weight_guidance {
            write!(f, " @ {weight}")?;
        }
        if let Some(rest) = self.rest_seconds {
            write!(f, ", rest {rest}s")?;
        }
        if let Some(tempo) = &self.tempo {
            write!(f, ", tempo {tempo}")?;
        }
        if let Some(rpe) = self.rpe {
            write!(f, ", RPE {rpe}")?;
        }
        if let Some(rir) = self.rir {
            write!(f, ", RIR {rir}")?;
        }
        if let Some(notes) = &self.notes {
            write!(f, " ({notes})")?;
        }
        Ok(())
    }
}
