//! Dashboard hospital list with optimistic feature toggles.
//!
//! DESIGN
//! ======
//! Records are held as `Arc<Hospital>` and never mutated in place. A toggle
//! swaps in a fresh record for the one tenant it touches, so every other entry
//! keeps its identity and a snapshot is just a cheap copy of the pointer list.
//!
//! Each toggle takes a generation number. A failed toggle restores the whole
//! snapshot only if no newer toggle or reload happened since it began;
//! otherwise it reverts its own flag so newer optimistic changes survive.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use std::sync::Arc;

use crate::features::FeatureKey;
use crate::hospital::Hospital;

/// Ordered list of tenants shown on the dashboard.
#[derive(Clone, Debug, Default)]
pub struct HospitalRoster {
    records: Vec<Arc<Hospital>>,
    generation: u64,
}

/// A toggle that has been applied locally and awaits the backend.
#[derive(Clone, Debug)]
pub struct PendingToggle {
    pub hospital_id: String,
    pub key: FeatureKey,
    pub enabled: bool,
    previous: bool,
    snapshot: Vec<Arc<Hospital>>,
    generation: u64,
}

/// What [`HospitalRoster::rollback`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rollback {
    /// The full pre-toggle list was restored.
    Restored,
    /// Newer changes exist; only the failed flag was reverted.
    Reverted,
    /// The tenant is no longer listed; nothing changed.
    Skipped,
}

impl HospitalRoster {
    #[must_use]
    pub fn new(hospitals: Vec<Hospital>) -> Self {
        Self {
            records: hospitals.into_iter().map(Arc::new).collect(),
            generation: 0,
        }
    }

    /// Replace the whole list, e.g. after a fresh fetch. Pending toggles
    /// started before this call will no longer restore their snapshots.
    pub fn replace_all(&mut self, hospitals: Vec<Hospital>) {
        self.records = hospitals.into_iter().map(Arc::new).collect();
        self.generation += 1;
    }

    pub fn clear(&mut self) {
        self.replace_all(Vec::new());
    }

    #[must_use]
    pub fn records(&self) -> &[Arc<Hospital>] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, hospital_id: &str) -> Option<&Arc<Hospital>> {
        self.records.iter().find(|h| h.id == hospital_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Apply a toggle locally before the backend confirms it.
    ///
    /// Returns `None` when `hospital_id` is not listed.
    pub fn begin_toggle(
        &mut self,
        hospital_id: &str,
        key: FeatureKey,
        enabled: bool,
    ) -> Option<PendingToggle> {
        let index = self.records.iter().position(|h| h.id == hospital_id)?;
        let snapshot = self.records.clone();
        let previous = self.records[index].feature(key);
        self.records[index] = Arc::new(self.records[index].with_feature(key, enabled));
        self.generation += 1;
        Some(PendingToggle {
            hospital_id: hospital_id.to_owned(),
            key,
            enabled,
            previous,
            snapshot,
            generation: self.generation,
        })
    }

    /// Replace the matching record with the backend's representation.
    ///
    /// Returns `false` if the record is no longer listed.
    pub fn commit(&mut self, updated: Hospital) -> bool {
        let Some(slot) = self.records.iter_mut().find(|h| h.id == updated.id) else {
            return false;
        };
        *slot = Arc::new(updated);
        true
    }

    /// Undo a failed toggle.
    pub fn rollback(&mut self, pending: PendingToggle) -> Rollback {
        if pending.generation == self.generation {
            self.records = pending.snapshot;
            return Rollback::Restored;
        }
        let Some(slot) = self
            .records
            .iter_mut()
            .find(|h| h.id == pending.hospital_id)
        else {
            return Rollback::Skipped;
        };
        *slot = Arc::new(slot.with_feature(pending.key, pending.previous));
        Rollback::Reverted
    }
}

#[cfg(test)]
impl PendingToggle {
    /// The list as it was immediately before this toggle.
    #[must_use]
    pub fn snapshot(&self) -> &[Arc<Hospital>] {
        &self.snapshot
    }
}
