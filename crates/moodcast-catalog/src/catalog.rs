use moodcast_core::StateEntry;
use rand::Rng;

use crate::error::{CatalogError, Result};

/// Immutable table of weighted mood states.
///
/// The total weight is computed once at construction; [`StateCatalog::new`]
/// rejects empty tables and zero-weight entries, so every entry a catalog
/// holds is selectable.
#[derive(Debug, Clone)]
pub struct StateCatalog {
    entries: Vec<StateEntry>,
    total_weight: u64,
}

impl StateCatalog {
    /// Validate the configured entries and build a catalog from them.
    pub fn new(entries: &[StateEntry]) -> Result<Self> {
        if entries.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        for entry in entries {
            if entry.weight == 0 {
                return Err(CatalogError::ZeroWeight {
                    key: entry.key.clone(),
                });
            }
        }
        let total_weight = entries.iter().map(|e| u64::from(e.weight)).sum();

        Ok(Self {
            entries: entries.to_vec(),
            total_weight,
        })
    }

    /// Draw one state with probability proportional to its weight.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> &StateEntry {
        let draw = rng.gen_range(0..self.total_weight);

        let mut cumulative = 0u64;
        for entry in &self.entries {
            cumulative += u64::from(entry.weight);
            if draw < cumulative {
                return entry;
            }
        }

        // Unreachable: draw < total_weight and the weights sum to exactly
        // total_weight. Kept as a guard rather than a panic.
        &self.entries[0]
    }

    /// The first configured entry, used as the neutral state clients are
    /// settled into on shutdown.
    pub fn baseline(&self) -> &StateEntry {
        &self.entries[0]
    }

    pub fn entries(&self) -> &[StateEntry] {
        &self.entries
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
