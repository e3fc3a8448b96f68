use common::shapes::Circle;
use common::vec2::Vec2;
use std::fmt::Debug;
use std::hash::Hash;

/// Parking position for pooled entities, far outside any play field so
/// index rebuilds drop them via the root containment check.
pub const OFF_FIELD: Vec2 = Vec2 {
    x: -10_000.0,
    y: -10_000.0,
};

/// Per-kind stats shared by every entity of that kind. Subtypes within a
/// category share the pool and the spatial index but differ in these.
pub trait EntityKind: Copy + Eq + Hash + Debug {
    fn collider_radius(self) -> f32;
    fn max_health(self) -> i32;
}

/// One arena slot. The slot itself is recycled through the pool; the `id`
/// is assigned once at creation and never reused.
#[derive(Debug, Clone)]
pub struct Entity<K> {
    id: u32,
    kind: K,
    active: bool,
    pub position: Vec2,
    pub orientation: f32,
    pub direction: Vec2,
    pub collider: Circle,
    pub health: i32,
}

impl<K: EntityKind> Entity<K> {
    pub(crate) fn new(id: u32, kind: K) -> Self {
        Self {
            id,
            kind,
            active: false,
            position: OFF_FIELD,
            orientation: 0.0,
            direction: Vec2::ZERO,
            collider: Circle::new(OFF_FIELD.x, OFF_FIELD.y, kind.collider_radius()),
            health: kind.max_health(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn kind(&self) -> K {
        self.kind
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn activate(&mut self, orientation: f32, direction: Vec2, position: Vec2) {
        self.active = true;
        self.orientation = orientation;
        self.direction = direction;
        self.position = position;
        self.collider.move_to(position);
    }

    /// Parks the slot off-field and restores it to pristine stats, so a
    /// later activation never inherits damage from a previous life.
    pub(crate) fn deactivate(&mut self) {
        self.active = false;
        self.orientation = 0.0;
        self.direction = Vec2::ZERO;
        self.position = OFF_FIELD;
        self.collider.move_to(OFF_FIELD);
        self.health = self.kind.max_health();
    }

    /// Moves the entity, keeping the collider centered on it.
    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
        self.collider.move_to(position);
    }
}
