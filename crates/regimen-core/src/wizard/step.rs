//! Wizard step definitions.
//!
//! The wizard follows a linear progression:
//! program info → week structure → workouts → exercises → preview

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One stage of the program builder wizard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    ProgramInfo,
    WeekStructure,
    Workouts,
    Exercises,
    /// Terminal step; submission happens here
    Preview,
}

impl WizardStep {
    /// The canonical ordering of steps.
    pub const ALL: [WizardStep; 5] = [
        WizardStep::ProgramInfo,
        WizardStep::WeekStructure,
        WizardStep::Workouts,
        WizardStep::Exercises,
        WizardStep::Preview,
    ];

    pub const FIRST: WizardStep = WizardStep::ProgramInfo;
    pub const LAST: WizardStep = WizardStep::Preview;

    /// 1-based step number.
    pub fn number(self) -> u8 {
        match self {
            WizardStep::ProgramInfo => 1,
            WizardStep::WeekStructure => 2,
            WizardStep::Workouts => 3,
            WizardStep::Exercises => 4,
            WizardStep::Preview => 5,
        }
    }

    /// Display name of the step.
    pub fn name(self) -> &'static str {
        match self {
            WizardStep::ProgramInfo => "Program Info",
            WizardStep::WeekStructure => "Week Structure",
            WizardStep::Workouts => "Workouts",
            WizardStep::Exercises => "Exercises",
            WizardStep::Preview => "Preview",
        }
    }

    /// Looks up a step by its exact number.
    pub fn from_number(number: i64) -> Option<WizardStep> {
        WizardStep::ALL
            .into_iter()
            .find(|step| i64::from(step.number()) == number)
    }

    /// Clamps any integer into the closed step range `[1, 5]`.
    pub fn clamped(number: i64) -> WizardStep {
        let first = i64::from(Self::FIRST.number());
        let last = i64::from(Self::LAST.number());
        Self::from_number(number.clamp(first, last)).unwrap_or(Self::FIRST)
    }

    /// The following step, saturating at the preview.
    pub fn next(self) -> WizardStep {
        Self::clamped(i64::from(self.number()) + 1)
    }

    /// The preceding step, saturating at program info.
    pub fn prev(self) -> WizardStep {
        Self::clamped(i64::from(self.number()) - 1)
    }

    /// Whether this is the terminal preview step.
    pub fn is_terminal(self) -> bool {
        self == Self::LAST
    }
}

/// Display name for an arbitrary step number; "Unknown" outside the range.
pub fn step_name(number: i64) -> &'static str {
    WizardStep::from_number(number).map_or("Unknown", WizardStep::name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_order() {
        let numbers: Vec<u8> = WizardStep::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_clamped() {
        assert_eq!(WizardStep::clamped(-10), WizardStep::ProgramInfo);
        assert_eq!(WizardStep::clamped(0), WizardStep::ProgramInfo);
        assert_eq!(WizardStep::clamped(3), WizardStep::Workouts);
        assert_eq!(WizardStep::clamped(99), WizardStep::Preview);
        assert_eq!(WizardStep::clamped(i64::MAX), WizardStep::Preview);
    }

    #[test]
    fn test_next_and_prev_saturate() {
        assert_eq!(WizardStep::Preview.next(), WizardStep::Preview);
        assert_eq!(WizardStep::ProgramInfo.prev(), WizardStep::ProgramInfo);
        assert_eq!(WizardStep::Workouts.next(), WizardStep::Exercises);
        assert_eq!(WizardStep::Workouts.prev(), WizardStep::WeekStructure);
    }

    #[test]
    fn test_step_name() {
        assert_eq!(step_name(1), "Program Info");
        assert_eq!(step_name(2), "Week Structure");
        assert_eq!(step_name(5), "Preview");
        assert_eq!(step_name(6), "Unknown");
        assert_eq!(step_name(0), "Unknown");
    }

    #[test]
    fn test_is_terminal() {
        assert!(WizardStep::Preview.is_terminal());
        assert!(!WizardStep::Exercises.is_terminal());
    }
}
