use crate::entity::{Entity, EntityKind};
use crate::error::EntityError;
use crate::pool::ObjectPool;
use common::shapes::{Aabb, Circle};
use common::vec2::Vec2;
use fxhash::FxHashMap;
use quadtree::Quadtree;
use tracing::{debug, trace};

/// Owns the full lifecycle of one entity category (enemies, projectiles):
/// an arena of entity slots, one recycling pool per kind, and the
/// category's spatial index.
///
/// Slots are addressed by stable `usize` handles into the arena; the pool
/// and the active list pass those handles around, never the entities
/// themselves. An entity is either pooled or on the active list, never
/// both.
pub struct EntityManager<K: EntityKind> {
    slots: Vec<Entity<K>>,
    active: Vec<usize>,
    pools: FxHashMap<K, ObjectPool<usize>>,
    created: FxHashMap<K, usize>,
    tree: Quadtree<usize>,
    next_id: u32,
    limit: usize,
}

impl<K: EntityKind> EntityManager<K> {
    /// `bounds` is the play field spanned by the spatial index,
    /// `tree_capacity` the per-node entry capacity, `limit` the per-kind
    /// pool capacity.
    pub fn new(bounds: Aabb, tree_capacity: usize, limit: usize) -> Result<Self, EntityError> {
        if limit == 0 {
            return Err(EntityError::InvalidLimit);
        }
        let tree = Quadtree::new(bounds, tree_capacity)?;
        Ok(Self {
            slots: Vec::new(),
            active: Vec::new(),
            pools: FxHashMap::default(),
            created: FxHashMap::default(),
            tree,
            next_id: 0,
            limit,
        })
    }

    /// Synthesizes a brand-new entity with the next monotonic identity and
    /// parks it in its kind's pool. No-op once the kind has already created
    /// its full limit of handles; the limit bounds handles in existence,
    /// pooled or active, so the pool's discard branch stays unreachable.
    fn create_pooled(&mut self, kind: K) {
        let created = self.created.entry(kind).or_insert(0);
        if *created >= self.limit {
            return;
        }
        *created += 1;
        let slot = self.slots.len();
        self.slots.push(Entity::new(self.next_id, kind));
        trace!(id = self.next_id, ?kind, slot, "created pooled entity");
        self.next_id += 1;
        let limit = self.limit;
        self.pools
            .entry(kind)
            .or_insert_with(|| ObjectPool::new(limit))
            .pool_object(slot);
    }

    /// Bulk pre-creation of pooled entities, so steady-state play never
    /// allocates. Stops at the kind's pool capacity.
    pub fn prewarm(&mut self, kind: K, count: usize) {
        for _ in 0..count {
            self.create_pooled(kind);
        }
    }

    /// Activates one entity of `kind` at the given pose. Draws from the
    /// kind's pool, creating on demand when it is empty. A kind that has
    /// exhausted its handle limit with every handle active spawns nothing.
    pub fn spawn(&mut self, kind: K, orientation: f32, direction: Vec2, position: Vec2) {
        let pool_empty = self.pools.get(&kind).map_or(true, |pool| pool.is_empty());
        if pool_empty {
            self.create_pooled(kind);
        }
        let Some(slot) = self
            .pools
            .get_mut(&kind)
            .and_then(|pool| pool.spawn_object())
        else {
            return;
        };
        self.slots[slot].activate(orientation, direction, position);
        trace!(id = self.slots[slot].id(), ?kind, "spawned entity");
        self.active.push(slot);
    }

    /// Deactivates the active entity with the given identity and returns
    /// its slot to the pool. The slot is always pooled under its own kind,
    /// so a mismatched `kind` argument cannot file it in the wrong pool.
    ///
    /// With two or more active entities the list is sorted by identity and
    /// binary-searched; an identity that is not present is a no-op. With
    /// exactly one active entity the sole entry is popped without checking
    /// the identity at all — a quirk kept for behavioral compatibility and
    /// pinned by a test.
    pub fn remove(&mut self, kind: K, id: u32) {
        if self.active.is_empty() {
            return;
        }
        if self.active.len() == 1 {
            if let Some(slot) = self.active.pop() {
                self.release(slot);
            }
            return;
        }

        let slots = &self.slots;
        self.active.sort_unstable_by_key(|&slot| slots[slot].id());
        let found = self
            .active
            .binary_search_by_key(&id, |&slot| slots[slot].id());
        let Ok(index) = found else {
            return;
        };
        let slot = self.active[index];
        trace!(id, ?kind, "removed entity");
        let last = self.active.len() - 1;
        self.active.swap(index, last);
        self.active.pop();
        self.release(slot);
    }

    /// Drains the entire active list, deactivating and pooling everything.
    pub fn remove_all(&mut self) {
        while let Some(slot) = self.active.pop() {
            self.release(slot);
        }
    }

    // Deactivates a slot and pools it under its own kind.
    fn release(&mut self, slot: usize) {
        self.slots[slot].deactivate();
        let kind = self.slots[slot].kind();
        let limit = self.limit;
        self.pools
            .entry(kind)
            .or_insert_with(|| ObjectPool::new(limit))
            .pool_object(slot);
        trace!(id = self.slots[slot].id(), ?kind, "released entity");
    }

    /// Clears the spatial index and re-inserts every active entity keyed by
    /// its current collider. Entities outside the root boundary fail the
    /// containment check and are simply absent from the index this tick;
    /// they stay on the active list.
    pub fn rebuild_index(&mut self) {
        self.tree.clear();
        for &slot in &self.active {
            self.tree.insert(slot, self.slots[slot].collider);
        }
        debug!(
            active = self.active.len(),
            indexed = self.tree.len(),
            "rebuilt spatial index"
        );
    }

    /// Appends the slot handles of active entities whose stored collider
    /// intersects `range`. Each active entity is indexed exactly once after
    /// a rebuild, so no deduplication is needed.
    pub fn query(&self, range: Circle, out: &mut Vec<usize>) {
        self.tree.query(range, out);
    }

    pub fn query_vec(&self, range: Circle) -> Vec<usize> {
        self.tree.query_vec(range)
    }

    /// Applies damage to the entity at an active-list position. Returns
    /// true when the entity died and was removed.
    pub fn take_damage(&mut self, active_index: usize, amount: u32) -> bool {
        let Some(&slot) = self.active.get(active_index) else {
            return false;
        };
        self.damage_slot(slot, amount)
    }

    /// Damage addressed by slot handle, for callers holding query results.
    /// Handles from an earlier rebuild may point at entities removed within
    /// the same tick; those are ignored.
    pub fn damage_slot(&mut self, slot: usize, amount: u32) -> bool {
        let entity = &mut self.slots[slot];
        if !entity.is_active() {
            return false;
        }
        entity.health -= amount as i32;
        if entity.health > 0 {
            return false;
        }
        let (kind, id) = (entity.kind(), entity.id());
        self.remove(kind, id);
        true
    }

    pub fn entity(&self, slot: usize) -> &Entity<K> {
        &self.slots[slot]
    }

    pub fn entity_mut(&mut self, slot: usize) -> &mut Entity<K> {
        &mut self.slots[slot]
    }

    pub fn active_slots(&self) -> &[usize] {
        &self.active
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn pooled_count(&self, kind: K) -> usize {
        self.pools.get(&kind).map_or(0, |pool| pool.len())
    }

    /// Total entities ever created for this category, across all kinds.
    pub fn total_created(&self) -> usize {
        self.slots.len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn bounds(&self) -> Aabb {
        self.tree.bounds()
    }
}
