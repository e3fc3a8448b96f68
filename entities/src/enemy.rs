use crate::entity::EntityKind;

/// Enemy subtypes. Boars charge into melee range; warlocks hang back and
/// fire projectiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Boar,
    Warlock,
}

impl EnemyKind {
    pub fn movement_speed(self) -> f32 {
        match self {
            EnemyKind::Boar => 100.0,
            EnemyKind::Warlock => 75.0,
        }
    }

    pub fn attack_damage(self) -> u32 {
        match self {
            EnemyKind::Boar => 1,
            EnemyKind::Warlock => 1,
        }
    }

    pub fn attack_range(self) -> f32 {
        match self {
            EnemyKind::Boar => 15.0,
            EnemyKind::Warlock => 250.0,
        }
    }
}

impl EntityKind for EnemyKind {
    fn collider_radius(self) -> f32 {
        match self {
            EnemyKind::Boar => 16.0,
            EnemyKind::Warlock => 12.0,
        }
    }

    fn max_health(self) -> i32 {
        match self {
            EnemyKind::Boar => 20,
            EnemyKind::Warlock => 15,
        }
    }
}
