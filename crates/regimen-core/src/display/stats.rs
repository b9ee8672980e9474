//! Aggregate counts shown on the preview step.

use std::fmt;

use serde::Serialize;

use crate::models::ProgramDraft;

/// Totals across the whole program structure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramStats {
    pub total_weeks: usize,
    pub total_workouts: usize,
    pub total_exercises: usize,
    /// Configured sets across all exercises
    pub total_sets: usize,
    /// Workouts that are not rest days
    pub training_days: usize,
    pub deload_weeks: usize,
}

impl From<&ProgramDraft> for ProgramStats {
    fn from(draft: &ProgramDraft) -> Self {
        let mut stats = ProgramStats {
            total_weeks: draft.weeks.len(),
            deload_weeks: draft.weeks.iter().filter(|week| week.is_deload).count(),
            ..Default::default()
        };
        for workout in draft.workouts() {
            stats.total_workouts += 1;
            stats.total_exercises += workout.exercises.len();
            stats.total_sets += workout.total_sets();
            if !workout.is_rest_day {
                stats.training_days += 1;
            }
        }
        stats
    }
}

impl fmt::Display for ProgramStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Summary")?;
        writeln!(f)?;
        writeln!(f, "- Weeks: {}", self.total_weeks)?;
        if self.deload_weeks > 0 {
            writeln!(f, "- Deload weeks: {}", self.deload_weeks)?;
        }
        writeln!(f, "- Workouts: {}", self.total_workouts)?;
        writeln!(f, "- Training days: {}", self.training_days)?;
        writeln!(f, "- Exercises: {}", self.total_exercises)?;
        writeln!(f, "- Sets: {}", self.total_sets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ExerciseAssignmentDraft, ExerciseConfiguration, WeekDraft, WorkoutDraft,
    };

    #[test]
    fn test_stats_count_structure() {
        let mut week = WeekDraft::generated(1);
        week.workouts.push(WorkoutDraft {
            exercises: vec![
                ExerciseAssignmentDraft::new("squat")
                    .with_configuration(ExerciseConfiguration::working(1, "5"))
                    .with_configuration(ExerciseConfiguration::working(2, "5")),
                ExerciseAssignmentDraft::new("bench"),
            ],
            ..Default::default()
        });
        week.workouts.push(WorkoutDraft {
            is_rest_day: true,
            ..Default::default()
        });
        let mut deload = WeekDraft::generated(2);
        deload.is_deload = true;

        let draft = ProgramDraft {
            weeks: vec![week, deload],
            ..Default::default()
        };
        let stats = ProgramStats::from(&draft);

        assert_eq!(
            stats,
            ProgramStats {
                total_weeks: 2,
                total_workouts: 2,
                total_exercises: 2,
                total_sets: 2,
                training_days: 1,
                deload_weeks: 1,
            }
        );
        assert!(stats.to_string().contains("- Deload weeks: 1"));
    }
}
