//! Conversion of a finished draft into the program API payload.

use std::collections::BTreeSet;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{BuilderError, Result},
    models::{DifficultyLevel, ProgramDraft, ProgramType, WeekDraft},
};

/// The payload accepted by the program creation API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProgramSubmission {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub program_type: ProgramType,
    pub difficulty_level: DifficultyLevel,
    pub duration_weeks: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_needed: Option<BTreeSet<String>>,
    pub weeks: Vec<WeekDraft>,
}

/// Builds the submission payload for `draft`.
///
/// Name and description are trimmed and a blank description is dropped, as
/// are empty goal and equipment sets. Readiness is not checked here; only a
/// missing program type or difficulty level is refused, since the payload
/// cannot carry them.
pub fn to_submission(draft: &ProgramDraft) -> Result<ProgramSubmission> {
    let program_type = draft.program_type.ok_or_else(|| {
        BuilderError::invalid_input("programType").with_reason("program type must be selected")
    })?;
    let difficulty_level = draft.difficulty_level.ok_or_else(|| {
        BuilderError::invalid_input("difficultyLevel")
            .with_reason("difficulty level must be selected")
    })?;

    Ok(ProgramSubmission {
        name: draft.name.trim().to_string(),
        description: draft
            .description
            .as_deref()
            .map(str::trim)
            .filter(|description| !description.is_empty())
            .map(String::from),
        program_type,
        difficulty_level,
        duration_weeks: draft.duration_weeks,
        goals: non_empty(&draft.goals),
        equipment_needed: non_empty(&draft.equipment_needed),
        weeks: draft.weeks.clone(),
    })
}

fn non_empty(set: &BTreeSet<String>) -> Option<BTreeSet<String>> {
    (!set.is_empty()).then(|| set.clone())
}

impl TryFrom<&ProgramDraft> for ProgramSubmission {
    type Error = BuilderError;

    fn try_from(draft: &ProgramDraft) -> Result<Self> {
        to_submission(draft)
    }
}
