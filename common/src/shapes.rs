use crate::vec2::Vec2;
use rand::Rng;

/// Per-entity collision shape: center position plus radius.
///
/// A radius of zero is a legal degenerate point. Negative or non-finite
/// radii would make every predicate meaningless, so they are rejected up
/// front.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Circle {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        assert!(
            radius.is_finite() && radius >= 0.0,
            "circle radius must be finite and non-negative (radius: {})",
            radius
        );
        Self { x, y, radius }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn move_to(&mut self, position: Vec2) {
        self.x = position.x;
        self.y = position.y;
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            radius: 0.0,
        }
    }
}

/// Axis-aligned bounding box, stored as center plus full extents.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn top(&self) -> f32 {
        self.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }

    /// True iff the circle lies entirely within this box. Tangency to an
    /// edge counts as contained.
    pub fn contains_circle(&self, circle: &Circle) -> bool {
        circle.x - circle.radius >= self.left()
            && circle.x + circle.radius <= self.right()
            && circle.y - circle.radius >= self.top()
            && circle.y + circle.radius <= self.bottom()
    }

    /// True iff the circle and this box overlap at all. Tangency counts as
    /// intersecting so collisions on a boundary edge are never dropped.
    pub fn intersects_circle(&self, circle: &Circle) -> bool {
        let dx = (circle.x - self.x).abs();
        let dy = (circle.y - self.y).abs();
        let half_width = self.width / 2.0;
        let half_height = self.height / 2.0;
        if dx > half_width + circle.radius || dy > half_height + circle.radius {
            return false;
        }
        if dx <= half_width || dy <= half_height {
            return true;
        }
        let corner_distance_sq = (dx - half_width).powi(2) + (dy - half_height).powi(2);
        corner_distance_sq <= circle.radius.powi(2)
    }

    /// Uniform random point on one of the four borders. Callers pick the
    /// vertical or horizontal pair so waves can be split between them.
    pub fn random_border_point<R: Rng>(&self, vertical_borders: bool, rng: &mut R) -> Vec2 {
        let flip = rng.gen_range(0..2) == 0;
        if vertical_borders {
            let x = if flip { self.left() } else { self.right() };
            Vec2::new(x, self.rand_range_inclusive(rng, self.top(), self.bottom()))
        } else {
            let y = if flip { self.top() } else { self.bottom() };
            Vec2::new(self.rand_range_inclusive(rng, self.left(), self.right()), y)
        }
    }

    fn rand_range_inclusive<R: Rng>(&self, rng: &mut R, min: f32, max: f32) -> f32 {
        if min > max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }
}

/// True iff the distance between centers is at most the sum of the radii.
/// Tangent circles intersect.
pub fn circles_intersect(a: &Circle, b: &Circle) -> bool {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let r = a.radius + b.radius;
    dx * dx + dy * dy <= r * r
}
