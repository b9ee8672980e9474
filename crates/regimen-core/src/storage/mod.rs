//! Draft persistence: slot stores and the bridge the wizard talks to.
//!
//! A [`DraftStore`] keeps opaque JSON payloads in named slots. The
//! [`DraftBridge`] layers the draft semantics on top: it serializes the draft
//! without its transient fields, reads payloads back as a [`DraftSnapshot`],
//! and swallows (but logs) every storage failure so the in-memory draft is
//! never affected by persistence trouble.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Wizard      │    │   DraftBridge   │    │   DraftStore    │
//! │ (dispatch loop) │───▶│ (save / load /  │───▶│ (sqlite, or     │
//! │                 │    │  clear / has)   │    │  in-memory)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use jiff::Timestamp;
use log::{debug, error, warn};

use crate::{
    error::Result,
    models::{DraftSnapshot, ProgramDraft},
};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryDraftStore;
pub use sqlite::SqliteDraftStore;

/// The slot holding the single active draft.
pub const DRAFT_SLOT: &str = "programBuilderDraft";

/// A payload read back from a slot.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredPayload {
    pub payload: String,
    pub saved_at: Timestamp,
}

/// Durable key-value storage for serialized drafts.
pub trait DraftStore {
    /// Stores `payload` under `slot`, replacing any previous payload.
    fn write(&mut self, slot: &str, payload: &str) -> Result<()>;

    /// Reads the payload stored under `slot`, if any.
    fn read(&self, slot: &str) -> Result<Option<StoredPayload>>;

    /// Removes the payload stored under `slot`. Removing an empty slot is not
    /// an error.
    fn remove(&mut self, slot: &str) -> Result<()>;
}

/// Saves and restores the active draft through a [`DraftStore`].
pub struct DraftBridge {
    store: Box<dyn DraftStore>,
    slot: String,
}

impl DraftBridge {
    /// Creates a bridge over `store` using the default draft slot.
    pub fn new(store: Box<dyn DraftStore>) -> Self {
        Self::with_slot(store, DRAFT_SLOT)
    }

    pub fn with_slot(store: Box<dyn DraftStore>, slot: impl Into<String>) -> Self {
        Self {
            store,
            slot: slot.into(),
        }
    }

    /// Persists the draft. Failures are logged and otherwise ignored.
    pub fn save(&mut self, draft: &ProgramDraft) {
        if let Err(e) = self.try_save(draft) {
            error!("Failed to save draft to slot '{}': {e}", self.slot);
        }
    }

    /// Persists the draft, reporting failures to the caller.
    pub fn try_save(&mut self, draft: &ProgramDraft) -> Result<()> {
        let payload = serde_json::to_string(draft)?;
        self.store.write(&self.slot, &payload)?;
        debug!("Saved draft to slot '{}' ({} bytes)", self.slot, payload.len());
        Ok(())
    }

    /// Reads the stored draft as a partial.
    ///
    /// A missing slot, an unreadable store and an unparsable payload all
    /// yield `None`; the latter two are logged.
    pub fn load(&self) -> Option<DraftSnapshot> {
        let stored = match self.store.read(&self.slot) {
            Ok(stored) => stored?,
            Err(e) => {
                error!("Failed to read draft slot '{}': {e}", self.slot);
                return None;
            }
        };

        match serde_json::from_str(&stored.payload) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!("Discarding unreadable draft in slot '{}': {e}", self.slot);
                None
            }
        }
    }

    /// Removes the stored draft. Failures are logged and otherwise ignored.
    pub fn clear(&mut self) {
        if let Err(e) = self.store.remove(&self.slot) {
            error!("Failed to clear draft slot '{}': {e}", self.slot);
        }
    }

    /// Whether a draft payload is stored.
    pub fn has_saved(&self) -> bool {
        self.saved_at().is_some()
    }

    /// When the stored draft was last written.
    pub fn saved_at(&self) -> Option<Timestamp> {
        match self.store.read(&self.slot) {
            Ok(stored) => stored.map(|stored| stored.saved_at),
            Err(e) => {
                error!("Failed to read draft slot '{}': {e}", self.slot);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProgramType;

    fn draft_named(name: &str) -> ProgramDraft {
        ProgramDraft {
            name: name.to_string(),
            program_type: Some(ProgramType::Hypertrophy),
            is_dirty: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_save_then_load_reproduces_draft() {
        let mut bridge = DraftBridge::new(Box::new(MemoryDraftStore::new()));
        let draft = draft_named("Block A");

        bridge.save(&draft);
        let restored = bridge.load().unwrap().merge_into(ProgramDraft::default());

        assert_eq!(restored, draft);
    }

    #[test]
    fn test_is_loading_is_not_persisted() {
        let store = MemoryDraftStore::new();
        let mut bridge = DraftBridge::new(Box::new(store.clone()));
        let draft = ProgramDraft {
            is_loading: true,
            ..draft_named("Block A")
        };

        bridge.save(&draft);

        let payload = store.payload(DRAFT_SLOT).unwrap();
        assert!(!payload.contains("isLoading"));
        let restored = bridge.load().unwrap().merge_into(ProgramDraft::default());
        assert!(!restored.is_loading);
    }

    #[test]
    fn test_clear_and_has_saved() {
        let mut bridge = DraftBridge::new(Box::new(MemoryDraftStore::new()));
        assert!(!bridge.has_saved());

        bridge.save(&draft_named("Block A"));
        assert!(bridge.has_saved());
        assert!(bridge.saved_at().is_some());

        bridge.clear();
        assert!(!bridge.has_saved());
        assert!(bridge.load().is_none());
    }

    #[test]
    fn test_unparsable_payload_loads_as_absent() {
        let mut store = MemoryDraftStore::new();
        store.write(DRAFT_SLOT, "{not json").unwrap();
        let bridge = DraftBridge::new(Box::new(store));

        assert!(bridge.has_saved());
        assert!(bridge.load().is_none());
    }

    #[test]
    fn test_read_only_store_does_not_panic() {
        let store = MemoryDraftStore::read_only();
        let mut bridge = DraftBridge::new(Box::new(store));

        bridge.save(&draft_named("Block A"));
        assert!(bridge.try_save(&draft_named("Block A")).is_err());
        assert!(!bridge.has_saved());
    }

    #[test]
    fn test_slots_are_independent() {
        let store = MemoryDraftStore::new();
        let mut first = DraftBridge::with_slot(Box::new(store.clone()), "first");
        let second = DraftBridge::with_slot(Box::new(store), "second");

        first.save(&draft_named("Block A"));

        assert!(first.has_saved());
        assert!(!second.has_saved());
    }
}
