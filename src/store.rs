//! In-memory plan sequence paired with the backend that persists it.

use crate::persistence::{PersistenceResult, PlanStorage};
use crate::PlanEntry;
use tracing::{debug, warn};

/// Ordered plan entries plus their storage backend.
///
/// Entries only ever grow by appending; position is the only identity an
/// entry has.
pub struct PlanStore<S> {
    storage: S,
    plans: Vec<PlanEntry>,
}

impl<S: PlanStorage> PlanStore<S> {
    /// Creates an empty store without touching the backend.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            plans: Vec::new(),
        }
    }

    /// Creates a store and loads it right away, returning the load result
    /// alongside so the caller can report a fallback to an empty store.
    pub fn open(storage: S) -> (Self, PersistenceResult<usize>) {
        let mut store = Self::new(storage);
        let loaded = store.load();
        (store, loaded)
    }

    /// Replaces the in-memory sequence with the backend contents. Any
    /// failure leaves the store empty and is returned to the caller.
    pub fn load(&mut self) -> PersistenceResult<usize> {
        match self.storage.load_plans() {
            Ok(plans) => {
                self.plans = plans;
                Ok(self.plans.len())
            }
            Err(err) if err.is_not_found() => {
                debug!(error = %err, "no plan file yet, starting empty");
                self.plans.clear();
                Err(err)
            }
            Err(err) => {
                warn!(error = %err, "falling back to an empty plan list");
                self.plans.clear();
                Err(err)
            }
        }
    }

    /// Rewrites the whole backend from the in-memory sequence.
    pub fn save(&self) -> PersistenceResult<()> {
        self.storage.save_plans(&self.plans).inspect_err(|err| {
            warn!(error = %err, count = self.plans.len(), "failed to save plans");
        })
    }

    pub fn append<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = PlanEntry>,
    {
        self.plans.extend(entries);
    }

    pub fn plans(&self) -> &[PlanEntry] {
        &self.plans
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Case-insensitive substring search, keeping store order. An empty
    /// term matches every entry.
    pub fn search(&self, term: &str) -> Vec<&PlanEntry> {
        let needle = term.to_lowercase();
        self.plans
            .iter()
            .filter(|plan| plan.search_haystack().contains(&needle))
            .collect()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
