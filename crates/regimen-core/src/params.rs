//! Parameter structures carried by wizard actions.
//!
//! These structures are shared by every host (the CLI, JSON dispatch, tests)
//! without framework-specific derives. Interface layers convert their own
//! argument types into these with `From` implementations, keeping clap and
//! friends out of the core:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   JSON payload  │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use std::collections::BTreeSet;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{DifficultyLevel, ProgramType};

/// Partial update of the step 1 program fields.
///
/// Absent fields leave the draft untouched. The nullable fields take
/// `Some(None)` (JSON `null`) to clear a previously set value.
///
/// # Examples
///
/// ```rust
/// use regimen_core::{models::ProgramType, params::BasicInfo};
///
/// let info = BasicInfo {
///     name: Some("Test".to_string()),
///     program_type: Some(Some(ProgramType::Strength)),
///     ..Default::default()
/// };
/// assert!(info.duration_weeks.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct BasicInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(
        deserialize_with = "crate::serde_ext::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub description: Option<Option<String>>,

    #[serde(
        deserialize_with = "crate::serde_ext::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "schema", schemars(with = "Option<ProgramType>"))]
    pub program_type: Option<Option<ProgramType>>,

    #[serde(
        deserialize_with = "crate::serde_ext::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "schema", schemars(with = "Option<DifficultyLevel>"))]
    pub difficulty_level: Option<Option<DifficultyLevel>>,

    /// A changed duration resizes the week structure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_weeks: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<BTreeSet<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_needed: Option<BTreeSet<String>>,
}

impl BasicInfo {
    /// Whether the update carries no field at all.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
