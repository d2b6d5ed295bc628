//! Health tracker
//!
//! Keeps one baseline per entity identity. The first sighting of an identity
//! only seeds its baseline; later sightings compare against it. Identities
//! missing from a snapshot are dropped immediately, so a returning entity
//! starts over with a fresh baseline.

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use serde::{Deserialize, Serialize};

/// Stable identity assigned by the entity provider.
pub type EntityId = u64;

/// One entity as reported by the provider for the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservedEntity {
    pub id: EntityId,
    /// Combined health (life plus any shield pool).
    pub health: i64,
    /// Invalid entities are treated as absent from the snapshot.
    #[serde(default = "default_valid")]
    pub valid: bool,
}

fn default_valid() -> bool {
    true
}

impl ObservedEntity {
    pub fn new(id: EntityId, health: i64) -> Self {
        Self {
            id,
            health,
            valid: true,
        }
    }

    pub fn invalid(id: EntityId, health: i64) -> Self {
        Self {
            id,
            health,
            valid: false,
        }
    }
}

/// Last observed state of a tracked entity. Health is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedEntity {
    pub id: EntityId,
    pub last_health: i64,
}

#[derive(Debug, Default)]
pub struct HealthTracker {
    entities: HashMap<EntityId, TrackedEntity>,
    /// Scratch buffer for the current snapshot, reused across ticks.
    current: HashMap<EntityId, i64>,
}

impl HealthTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one snapshot and return the summed health decrease across all
    /// entities that were already being tracked.
    ///
    /// Duplicate identities within a snapshot resolve to the last occurrence.
    /// Health increases rebase the stored value without producing damage.
    pub fn observe(&mut self, snapshot: &[ObservedEntity]) -> u64 {
        self.current.clear();
        for entity in snapshot.iter().filter(|e| e.valid) {
            self.current.insert(entity.id, entity.health.max(0));
        }

        let mut raw_damage: u64 = 0;
        for (&id, &health) in &self.current {
            match self.entities.entry(id) {
                Entry::Occupied(mut slot) => {
                    let tracked = slot.get_mut();
                    let delta = tracked.last_health - health;
                    if delta > 0 {
                        raw_damage = raw_damage.saturating_add(delta as u64);
                    }
                    tracked.last_health = health;
                }
                Entry::Vacant(slot) => {
                    slot.insert(TrackedEntity {
                        id,
                        last_health: health,
                    });
                }
            }
        }

        self.prune_missing();
        raw_damage
    }

    /// Drop every tracked identity not present in the latest snapshot.
    fn prune_missing(&mut self) {
        let before = self.entities.len();
        let current = &self.current;
        self.entities.retain(|id, _| current.contains_key(id));

        let pruned = before - self.entities.len();
        if pruned > 0 {
            tracing::debug!(pruned, remaining = self.entities.len(), "Pruned vanished entities");
        }
    }

    pub fn get(&self, id: EntityId) -> Option<&TrackedEntity> {
        self.entities.get(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
        self.current.clear();
    }
}
