use crate::enemy::EnemyKind;
use crate::manager::EntityManager;
use common::vec2::Vec2;
use rand::Rng;
use tracing::debug;

/// Enemies spawned per wave.
pub const WAVE_SIZE: usize = 25;

/// Spawns one wave of enemies on the field borders: the first half of the
/// wave on the left/right borders, the rest on the top/bottom borders.
/// Every third enemy is a boar, the rest are warlocks.
pub fn spawn_wave<R: Rng>(enemies: &mut EntityManager<EnemyKind>, count: usize, rng: &mut R) {
    let bounds = enemies.bounds();
    for i in 0..count {
        let vertical_borders = i < count / 2;
        let position = bounds.random_border_point(vertical_borders, rng);
        let kind = if i % 3 == 0 {
            EnemyKind::Boar
        } else {
            EnemyKind::Warlock
        };
        enemies.spawn(kind, 0.0, Vec2::ZERO, position);
    }
    debug!(count, "spawned enemy wave");
}
