use crate::enemy::EnemyKind;
use crate::error::EntityError;
use crate::manager::EntityManager;
use crate::projectile::ProjectileKind;
use crate::spawner::{spawn_wave, WAVE_SIZE};
use common::shapes::{circles_intersect, Aabb, Circle};
use common::vec2::Vec2;
use rand::Rng;

/// Radius of the player's collision circle.
const PLAYER_COLLIDER_RADIUS: f32 = 16.0;

/// Opaque per-entity velocity contribution, supplied by the steering
/// component. `neighbors` holds the slot handles the entity's own index
/// query turned up this tick, for separation-style behaviors.
pub trait Steering {
    fn velocity(&self, id: u32, position: Vec2, target: Vec2, neighbors: &[usize]) -> Vec2;
}

/// Opaque "has elapsed" answers from the timer component.
pub trait CooldownSource {
    /// True when the named entity's attack timer has elapsed this tick.
    fn attack_ready(&self, id: u32) -> bool;
    /// True when the enemy wave timer has elapsed this tick.
    fn wave_ready(&self) -> bool;
}

/// Per-tick inputs consumed from external collaborators.
pub struct TickInput<'a> {
    pub dt: f32,
    pub player_position: Vec2,
    pub steering: &'a dyn Steering,
    pub cooldowns: &'a dyn CooldownSource,
}

/// Side effects of one tick that belong to collaborators outside the core.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub player_damage: u32,
    pub enemies_killed: u32,
    pub projectiles_culled: u32,
}

/// Explicit context object owning every manager; entity updates reach each
/// other through it instead of through ambient globals.
pub struct World {
    pub enemies: EntityManager<EnemyKind>,
    pub projectiles: EntityManager<ProjectileKind>,
}

impl World {
    pub fn new(
        bounds: Aabb,
        tree_capacity: usize,
        enemy_limit: usize,
        projectile_limit: usize,
    ) -> Result<Self, EntityError> {
        Ok(Self {
            enemies: EntityManager::new(bounds, tree_capacity, enemy_limit)?,
            projectiles: EntityManager::new(bounds, tree_capacity, projectile_limit)?,
        })
    }

    /// Runs one simulation tick in strict order: rebuild both indices from
    /// the current active lists, then update enemies, then projectiles.
    /// Removals triggered during the updates mutate the active lists
    /// immediately; the already-built indices keep this tick's snapshot, so
    /// freshly removed entities may still show up in queries until the next
    /// rebuild (tolerated one-frame staleness).
    pub fn tick<R: Rng>(&mut self, input: &TickInput, rng: &mut R) -> TickReport {
        self.enemies.rebuild_index();
        self.projectiles.rebuild_index();

        if input.cooldowns.wave_ready() && self.enemies.active_count() < self.enemies.limit() {
            spawn_wave(&mut self.enemies, WAVE_SIZE, rng);
        }

        let mut report = TickReport::default();
        self.update_enemies(input, &mut report);
        self.update_projectiles(input, &mut report);
        report
    }

    fn update_enemies(&mut self, input: &TickInput, report: &mut TickReport) {
        // Snapshot: attack decisions spawn projectiles, which must not
        // shift this loop.
        let active: Vec<usize> = self.enemies.active_slots().to_vec();
        for slot in active {
            let entity = self.enemies.entity(slot);
            let (id, kind, collider) = (entity.id(), entity.kind(), entity.collider);
            let target = input.player_position;

            let neighbors = self.enemies.query_vec(collider);
            let velocity = input
                .steering
                .velocity(id, collider.center(), target, &neighbors);

            let entity = self.enemies.entity_mut(slot);
            let position = entity.position + velocity * input.dt;
            entity.move_to(position);
            entity.direction = (target - position).normalized();
            entity.orientation = entity.direction.orientation();

            if position.distance_to(target) <= kind.attack_range() + PLAYER_COLLIDER_RADIUS
                && input.cooldowns.attack_ready(id)
            {
                match kind {
                    EnemyKind::Boar => report.player_damage += kind.attack_damage(),
                    EnemyKind::Warlock => {
                        let direction = (target - position).normalized();
                        self.projectiles.spawn(
                            ProjectileKind::Enemy,
                            direction.orientation(),
                            direction,
                            position,
                        );
                    }
                }
            }
        }
    }

    fn update_projectiles(&mut self, input: &TickInput, report: &mut TickReport) {
        let bounds = self.projectiles.bounds();
        let player_collider = Circle::new(
            input.player_position.x,
            input.player_position.y,
            PLAYER_COLLIDER_RADIUS,
        );

        let active: Vec<usize> = self.projectiles.active_slots().to_vec();
        for slot in active {
            let entity = self.projectiles.entity_mut(slot);
            if !entity.is_active() {
                continue;
            }
            let kind = entity.kind();
            let position = entity.position + entity.direction * (kind.speed() * input.dt);
            entity.move_to(position);
            let (id, collider) = (entity.id(), entity.collider);

            match kind {
                ProjectileKind::Player => {
                    let hits = self.enemies.query_vec(collider);
                    if !hits.is_empty() {
                        for enemy_slot in hits {
                            if self.enemies.damage_slot(enemy_slot, kind.damage()) {
                                report.enemies_killed += 1;
                            }
                        }
                        self.projectiles.remove(kind, id);
                        continue;
                    }
                }
                ProjectileKind::Enemy => {
                    if circles_intersect(&collider, &player_collider) {
                        report.player_damage += kind.damage();
                        self.projectiles.remove(kind, id);
                        continue;
                    }
                }
            }

            if !bounds.contains_point(position.x, position.y) {
                self.projectiles.remove(kind, id);
                report.projectiles_culled += 1;
            }
        }
    }
}
