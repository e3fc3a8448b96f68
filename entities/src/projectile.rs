use crate::entity::EntityKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectileKind {
    Player,
    Enemy,
}

impl ProjectileKind {
    pub fn damage(self) -> u32 {
        match self {
            ProjectileKind::Player => 30,
            ProjectileKind::Enemy => 1,
        }
    }

    pub fn speed(self) -> f32 {
        200.0
    }
}

impl EntityKind for ProjectileKind {
    fn collider_radius(self) -> f32 {
        8.0
    }

    // Projectiles die on first contact.
    fn max_health(self) -> i32 {
        1
    }
}
