//! Wrapper types for the wizard overview and the readiness report.

use std::fmt;

use jiff::Timestamp;

use super::datetime::LocalDateTime;
use crate::{
    models::ProgramDraft,
    wizard::{readiness_issues, validate_step, WizardStep},
};

/// Progress of a wizard session: the step checklist, save state and any
/// recorded field errors.
///
/// # Examples
///
/// ```rust
/// use regimen_core::{display::WizardOverview, models::ProgramDraft};
///
/// let draft = ProgramDraft::default();
/// let output = WizardOverview::new(&draft, None).to_string();
/// assert!(output.contains("- [ ] 1. Program Info (current)"));
/// ```
pub struct WizardOverview<'a> {
    pub draft: &'a ProgramDraft,
    pub saved_at: Option<Timestamp>,
}

impl<'a> WizardOverview<'a> {
    pub fn new(draft: &'a ProgramDraft, saved_at: Option<Timestamp>) -> Self {
        Self { draft, saved_at }
    }
}

impl fmt::Display for WizardOverview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.draft.name.trim();
        writeln!(
            f,
            "# {}",
            if name.is_empty() { "Untitled program" } else { name }
        )?;
        writeln!(f)?;

        let current = self.draft.step();
        writeln!(
            f,
            "- Step: {current} ({})",
            if self.draft.is_valid { "complete" } else { "incomplete" }
        )?;
        match &self.saved_at {
            Some(saved_at) => writeln!(f, "- Saved: {}", LocalDateTime(saved_at))?,
            None => writeln!(f, "- Saved: never")?,
        }
        writeln!(f)?;

        writeln!(f, "## Steps")?;
        writeln!(f)?;
        for step in WizardStep::ALL {
            let mark = if validate_step(self.draft, step) { "x" } else { " " };
            write!(f, "- [{mark}] {step}")?;
            if step == current {
                write!(f, " (current)")?;
            }
            writeln!(f)?;
        }

        if !self.draft.errors.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Errors")?;
            writeln!(f)?;
            for (field, message) in &self.draft.errors {
                writeln!(f, "- {field}: {message}")?;
            }
        }
        Ok(())
    }
}

/// Lists what still blocks submission of a draft.
pub struct ReadinessReport<'a>(pub &'a ProgramDraft);

impl fmt::Display for ReadinessReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let issues = readiness_issues(self.0);
        if issues.is_empty() {
            return writeln!(f, "Ready for submission.");
        }

        writeln!(f, "## Not ready for submission")?;
        writeln!(f)?;
        for issue in issues {
            writeln!(f, "- {issue}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DifficultyLevel, ProgramType, WeekDraft};

    #[test]
    fn test_overview_marks_current_step_and_errors() {
        let mut draft = ProgramDraft {
            name: "Block".to_string(),
            current_step: 2,
            weeks: vec![WeekDraft::generated(1)],
            ..Default::default()
        };
        draft
            .errors
            .insert("programType".to_string(), "program type must be selected".to_string());

        let output = WizardOverview::new(&draft, None).to_string();

        assert!(output.starts_with("# Block"));
        assert!(output.contains("- Saved: never"));
        assert!(output.contains("- [ ] 1. Program Info\n"));
        assert!(output.contains("- [x] 2. Week Structure (current)"));
        assert!(output.contains("- [x] 5. Preview"));
        assert!(output.contains("- programType: program type must be selected"));
    }

    #[test]
    fn test_readiness_report() {
        let mut draft = ProgramDraft {
            name: "Block".to_string(),
            program_type: Some(ProgramType::Strength),
            difficulty_level: Some(DifficultyLevel::Advanced),
            weeks: vec![WeekDraft::generated(1)],
            ..Default::default()
        };
        let output = ReadinessReport(&draft).to_string();
        assert!(output.contains("## Not ready for submission"));
        assert!(output.contains("- at least one workout is required"));
        assert!(!output.contains("program name"));

        draft.weeks[0].workouts.push(Default::default());
        draft.weeks[0].workouts[0]
            .exercises
            .push(crate::models::ExerciseAssignmentDraft::new("squat"));
        assert_eq!(ReadinessReport(&draft).to_string(), "Ready for submission.\n");
    }
}
