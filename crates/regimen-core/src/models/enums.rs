//! Enumerations for program, workout and set classification.
//!
//! Wire strings are snake_case and match what the program API accepts.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Training focus of a whole program.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum ProgramType {
    Strength,
    Hypertrophy,
    Endurance,
    Powerlifting,
    OlympicWeightlifting,
    Crossfit,
    Calisthenics,
    Cardio,
    Flexibility,
    Rehabilitation,
    #[serde(rename = "sports_specific")]
    SportSpecific,
    GeneralFitness,
    WeightLoss,
    MuscleGain,
    Hybrid,
}

impl ProgramType {
    /// Every program type, in catalog order.
    pub const ALL: [ProgramType; 15] = [
        ProgramType::Strength,
        ProgramType::Hypertrophy,
        ProgramType::Endurance,
        ProgramType::Powerlifting,
        ProgramType::OlympicWeightlifting,
        ProgramType::Crossfit,
        ProgramType::Calisthenics,
        ProgramType::Cardio,
        ProgramType::Flexibility,
        ProgramType::Rehabilitation,
        ProgramType::SportSpecific,
        ProgramType::GeneralFitness,
        ProgramType::WeightLoss,
        ProgramType::MuscleGain,
        ProgramType::Hybrid,
    ];

    /// Wire representation of the program type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgramType::Strength => "strength",
            ProgramType::Hypertrophy => "hypertrophy",
            ProgramType::Endurance => "endurance",
            ProgramType::Powerlifting => "powerlifting",
            ProgramType::OlympicWeightlifting => "olympic_weightlifting",
            ProgramType::Crossfit => "crossfit",
            ProgramType::Calisthenics => "calisthenics",
            ProgramType::Cardio => "cardio",
            ProgramType::Flexibility => "flexibility",
            ProgramType::Rehabilitation => "rehabilitation",
            ProgramType::SportSpecific => "sports_specific",
            ProgramType::GeneralFitness => "general_fitness",
            ProgramType::WeightLoss => "weight_loss",
            ProgramType::MuscleGain => "muscle_gain",
            ProgramType::Hybrid => "hybrid",
        }
    }
}

impl FromStr for ProgramType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(&['-', ' '][..], "_");
        ProgramType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| format!("Invalid program type: {s}"))
    }
}

/// Intended experience level of the trainee.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    /// Wire representation of the difficulty level.
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyLevel::Beginner => "beginner",
            DifficultyLevel::Intermediate => "intermediate",
            DifficultyLevel::Advanced => "advanced",
        }
    }
}

impl FromStr for DifficultyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(DifficultyLevel::Beginner),
            "intermediate" => Ok(DifficultyLevel::Intermediate),
            "advanced" => Ok(DifficultyLevel::Advanced),
            _ => Err(format!("Invalid difficulty level: {s}")),
        }
    }
}

/// Kind of session a workout slot represents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    #[default]
    Strength,
    Cardio,
    Hiit,
    Flexibility,
    Mixed,
    Recovery,
}

impl WorkoutType {
    /// Wire representation of the workout type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Strength => "strength",
            WorkoutType::Cardio => "cardio",
            WorkoutType::Hiit => "hiit",
            WorkoutType::Flexibility => "flexibility",
            WorkoutType::Mixed => "mixed",
            WorkoutType::Recovery => "recovery",
        }
    }

    /// Human-readable label used on the preview.
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::Strength => "Strength Training",
            WorkoutType::Cardio => "Cardiovascular",
            WorkoutType::Hiit => "High Intensity Interval Training",
            WorkoutType::Flexibility => "Flexibility & Mobility",
            WorkoutType::Mixed => "Mixed Training",
            WorkoutType::Recovery => "Active Recovery",
        }
    }
}

impl FromStr for WorkoutType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strength" => Ok(WorkoutType::Strength),
            "cardio" => Ok(WorkoutType::Cardio),
            "hiit" => Ok(WorkoutType::Hiit),
            "flexibility" => Ok(WorkoutType::Flexibility),
            "mixed" => Ok(WorkoutType::Mixed),
            "recovery" => Ok(WorkoutType::Recovery),
            _ => Err(format!("Invalid workout type: {s}")),
        }
    }
}

/// Role of a single set within an exercise prescription.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum SetType {
    Warmup,
    #[default]
    Working,
    Drop,
    Pyramid,
    Amrap,
    Cluster,
    RestPause,
}

impl SetType {
    /// Wire representation of the set type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SetType::Warmup => "warmup",
            SetType::Working => "working",
            SetType::Drop => "drop",
            SetType::Pyramid => "pyramid",
            SetType::Amrap => "amrap",
            SetType::Cluster => "cluster",
            SetType::RestPause => "rest_pause",
        }
    }

    /// Human-readable label used on the preview.
    pub fn label(&self) -> &'static str {
        match self {
            SetType::Warmup => "Warm-up",
            SetType::Working => "Working",
            SetType::Drop => "Drop",
            SetType::Pyramid => "Pyramid",
            SetType::Amrap => "AMRAP",
            SetType::Cluster => "Cluster",
            SetType::RestPause => "Rest-Pause",
        }
    }
}

impl FromStr for SetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "warmup" | "warm_up" => Ok(SetType::Warmup),
            "working" => Ok(SetType::Working),
            "drop" => Ok(SetType::Drop),
            "pyramid" => Ok(SetType::Pyramid),
            "amrap" => Ok(SetType::Amrap),
            "cluster" => Ok(SetType::Cluster),
            "rest_pause" | "restpause" => Ok(SetType::RestPause),
            _ => Err(format!("Invalid set type: {s}")),
        }
    }
}
