//! In-memory slot store.

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use jiff::Timestamp;

use super::{DraftStore, StoredPayload};
use crate::error::{BuilderError, Result};

/// A [`DraftStore`] backed by a shared map.
///
/// Clones share the same slots, so a test can hand one clone to a wizard and
/// inspect the payloads through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryDraftStore {
    slots: Rc<RefCell<BTreeMap<String, StoredPayload>>>,
    read_only: bool,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every write and removal.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// The raw payload stored under `slot`.
    pub fn payload(&self, slot: &str) -> Option<String> {
        self.slots
            .borrow()
            .get(slot)
            .map(|stored| stored.payload.clone())
    }

    fn ensure_writable(&self) -> Result<()> {
        if self.read_only {
            return Err(BuilderError::Configuration {
                message: "Draft store is read-only".to_string(),
            });
        }
        Ok(())
    }
}

impl DraftStore for MemoryDraftStore {
    fn write(&mut self, slot: &str, payload: &str) -> Result<()> {
        self.ensure_writable()?;
        self.slots.borrow_mut().insert(
            slot.to_string(),
            StoredPayload {
                payload: payload.to_string(),
                saved_at: Timestamp::now(),
            },
        );
        Ok(())
    }

    fn read(&self, slot: &str) -> Result<Option<StoredPayload>> {
        Ok(self.slots.borrow().get(slot).cloned())
    }

    fn remove(&mut self, slot: &str) -> Result<()> {
        self.ensure_writable()?;
        self.slots.borrow_mut().remove(slot);
        Ok(())
    }
}
