//! Translation-unit id registry.
//!
//! Hands out unit ids so that no id repeats within what the registry has
//! seen: the first sighting of a block id keeps it, later sightings get a
//! `-N` suffix where N counts the earlier sightings.

use std::collections::{HashMap, HashSet};

/// Outcome of registering one block id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimedId {
    /// Id to put on the `<trans-unit>`
    pub id: String,
    /// Number of earlier sightings of the block id, 0 for the first one
    pub occurrence: usize,
}

impl ClaimedId {
    pub fn is_duplicate(&self) -> bool {
        self.occurrence > 0
    }
}

#[derive(Debug, Clone, Default)]
pub struct UnitIdRegistry {
    seen: HashMap<String, usize>,
    emitted: HashSet<String>,
}

impl UnitIdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&mut self, block_id: &str) -> ClaimedId {
        let earlier = self.seen.get(block_id).copied().unwrap_or(0);
        if earlier == 0 && self.emitted.insert(block_id.to_string()) {
            self.seen.insert(block_id.to_string(), 1);
            return ClaimedId {
                id: block_id.to_string(),
                occurrence: 0,
            };
        }

        // A suffixed id may clash with a real block id seen earlier; skip ahead.
        let mut occurrence = earlier.max(1);
        let id = loop {
            let candidate = format!("{}-{}", block_id, occurrence);
            if self.emitted.insert(candidate.clone()) {
                break candidate;
            }
            occurrence += 1;
        };
        self.seen.insert(block_id.to_string(), occurrence + 1);
        ClaimedId { id, occurrence }
    }

    /// Counter stored for `block_id`, equal to its sightings unless a suffix had to skip ahead
    pub fn count(&self, block_id: &str) -> usize {
        self.seen.get(block_id).copied().unwrap_or(0)
    }

    /// Number of distinct block ids seen
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn clear(&mut self) {
        self.seen.clear();
        self.emitted.clear();
    }
}
