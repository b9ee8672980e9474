//! Display formatting for drafts and wizard feedback.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! wrapper types cover output that needs context beyond a single model, such
//! as the session overview or the readiness report. Everything renders as
//! markdown so the CLI can hand it to its terminal renderer unchanged.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Draft Models   │    │ Wrapper Types & │    │   Formatted     │
//! │ (Program, Week) │───▶│  Statistics     │───▶│    Output       │
//! │                 │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for the draft models
//! - [`stats`]: Aggregate program statistics (ProgramStats)
//! - [`results`]: Session overview and readiness report wrappers
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//!
//! # Examples
//!
//! ```rust
//! use regimen_core::display::OperationStatus;
//!
//! let success = OperationStatus::success("Week added");
//! assert_eq!(success.to_string(), "Success: Week added\n");
//! ```

pub mod datetime;
pub mod models;
pub mod results;
pub mod stats;
pub mod status;

pub use datetime::LocalDateTime;
pub use results::{ReadinessReport, WizardOverview};
pub use stats::ProgramStats;
pub use status::OperationStatus;
