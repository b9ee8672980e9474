//! A wizard session: the draft plus the bridge that persists it.

use std::path::{Path, PathBuf};

use jiff::Timestamp;
use log::{debug, info};

use super::{reduce, reduce_checked, validation, Action, Violation};
use crate::{
    error::{BuilderError, Result},
    models::ProgramDraft,
    storage::{DraftBridge, DraftStore, SqliteDraftStore},
    submission::{to_submission, ProgramSubmission},
};

/// An open program builder session.
///
/// The session rehydrates the stored draft once when it is built and saves
/// the draft after every dispatch that leaves it dirty.
pub struct Wizard {
    draft: ProgramDraft,
    bridge: DraftBridge,
}

impl Wizard {
    /// The current draft.
    pub fn state(&self) -> &ProgramDraft {
        &self.draft
    }

    /// Applies an action and persists the result if it is dirty.
    pub fn dispatch(&mut self, action: Action) -> &ProgramDraft {
        // Violations are already logged by the reducer.
        let _ = self.apply(action);
        &self.draft
    }

    /// Like [`Wizard::dispatch`], but fails when the action addressed a week,
    /// workout or exercise that does not exist or asked for too long a
    /// program. The draft is unchanged then.
    pub fn try_dispatch(&mut self, action: Action) -> Result<&ProgramDraft> {
        self.apply(action)?;
        Ok(&self.draft)
    }

    fn apply(&mut self, action: Action) -> std::result::Result<(), Violation> {
        let (draft, outcome) = reduce_checked(std::mem::take(&mut self.draft), action);
        self.draft = draft;
        if self.draft.is_dirty {
            self.bridge.save(&self.draft);
        }
        outcome
    }

    /// Applies several actions in order.
    pub fn dispatch_all<I>(&mut self, actions: I) -> &ProgramDraft
    where
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            self.dispatch(action);
        }
        &self.draft
    }

    pub fn has_saved_draft(&self) -> bool {
        self.bridge.has_saved()
    }

    /// When the stored draft was last written.
    pub fn saved_at(&self) -> Option<Timestamp> {
        self.bridge.saved_at()
    }

    /// Writes the draft to storage whether or not it is dirty.
    ///
    /// Dispatch only saves dirty drafts, so hosts call this to keep
    /// navigation or recorded field errors on an otherwise clean draft.
    pub fn save(&mut self) -> Result<()> {
        self.bridge.try_save(&self.draft)
    }

    /// Drops the stored draft and starts over with an empty one.
    pub fn discard(&mut self) {
        self.bridge.clear();
        self.draft = reduce(std::mem::take(&mut self.draft), Action::ResetState);
        info!("Discarded program draft");
    }

    /// Turns a ready draft into its submission payload and clears the slot.
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::NotReady` listing every readiness issue when the
    /// draft is incomplete. The draft and the stored slot are left as they
    /// were.
    pub fn finalize(&mut self) -> Result<ProgramSubmission> {
        let issues = validation::readiness_issues(&self.draft);
        if !issues.is_empty() {
            return Err(BuilderError::NotReady {
                issues: issues.iter().map(ToString::to_string).collect(),
            });
        }

        let submission = to_submission(&self.draft)?;
        self.bridge.clear();
        self.draft = ProgramDraft::default();
        info!("Finalized program '{}'", submission.name);
        Ok(submission)
    }

    fn open(bridge: DraftBridge) -> Self {
        let mut wizard = Self {
            draft: ProgramDraft::default(),
            bridge,
        };
        wizard.rehydrate();
        wizard
    }

    fn rehydrate(&mut self) {
        self.draft = reduce(std::mem::take(&mut self.draft), Action::SetLoading(true));
        match self.bridge.load() {
            Some(snapshot) => {
                debug!("Restoring saved draft");
                self.draft = reduce(
                    std::mem::take(&mut self.draft),
                    Action::LoadFromStorage(Box::new(snapshot)),
                );
            }
            None => {
                self.draft = reduce(std::mem::take(&mut self.draft), Action::SetLoading(false));
            }
        }
    }
}

/// Builder for opening [`Wizard`] sessions.
#[derive(Default)]
pub struct WizardBuilder {
    database_path: Option<PathBuf>,
    store: Option<Box<dyn DraftStore>>,
}

impl WizardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/regimen/regimen.db` or `~/.local/share/regimen/regimen.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses the given store instead of the SQLite database.
    pub fn with_store(mut self, store: impl DraftStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Opens the session, restoring any saved draft.
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::XdgDirectory` if no default path can be resolved
    /// Returns `BuilderError::FileSystem` if the database directory cannot be created
    /// Returns `BuilderError::Storage` if the database cannot be opened
    pub fn build(self) -> Result<Wizard> {
        let store: Box<dyn DraftStore> = match self.store {
            Some(store) => store,
            None => {
                let db_path = match self.database_path {
                    Some(path) => path,
                    None => Self::default_database_path()?,
                };

                if let Some(parent) = db_path.parent() {
                    std::fs::create_dir_all(parent).map_err(|e| BuilderError::FileSystem {
                        path: parent.to_path_buf(),
                        source: e,
                    })?;
                }

                debug!("Opening draft database at {}", db_path.display());
                Box::new(SqliteDraftStore::new(&db_path)?)
            }
        };

        Ok(Wizard::open(DraftBridge::new(store)))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("regimen")
            .place_data_file("regimen.db")
            .map_err(|e| BuilderError::XdgDirectory(e.to_string()))
    }
}
