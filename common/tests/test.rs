use common::shapes::*;
use common::vec2::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_new_and_getters() {
    let bounds = Aabb::new(2.0, 3.0, 4.0, 6.0);
    assert_eq!(bounds.left(), 0.0);
    assert_eq!(bounds.right(), 4.0);
    assert_eq!(bounds.top(), 0.0);
    assert_eq!(bounds.bottom(), 6.0);
    assert_eq!(bounds.center(), Vec2::new(2.0, 3.0));
}

#[test]
fn test_contains_point() {
    let bounds = Aabb::new(2.0, 3.0, 4.0, 6.0);
    assert!(bounds.contains_point(2.0, 3.0));
    assert!(bounds.contains_point(0.0, 0.0));
    assert!(!bounds.contains_point(6.0, 3.0));
    assert!(!bounds.contains_point(2.0, 8.0));
}

#[test]
fn test_contains_circle_requires_full_containment() {
    let bounds = Aabb::new(0.0, 0.0, 100.0, 100.0);
    assert!(bounds.contains_circle(&Circle::new(0.0, 0.0, 10.0)));
    // Overlapping the edge is not containment.
    assert!(!bounds.contains_circle(&Circle::new(45.0, 0.0, 10.0)));
    assert!(!bounds.contains_circle(&Circle::new(200.0, 200.0, 10.0)));
}

#[test]
fn test_contains_circle_tangent_edge() {
    let bounds = Aabb::new(0.0, 0.0, 100.0, 100.0);
    // Exactly touching the right edge from inside still counts.
    assert!(bounds.contains_circle(&Circle::new(40.0, 0.0, 10.0)));
}

#[test]
fn test_intersects_circle() {
    let bounds = Aabb::new(0.0, 0.0, 100.0, 100.0);
    assert!(bounds.intersects_circle(&Circle::new(0.0, 0.0, 10.0)));
    assert!(bounds.intersects_circle(&Circle::new(55.0, 0.0, 10.0)));
    assert!(!bounds.intersects_circle(&Circle::new(100.0, 100.0, 10.0)));
}

#[test]
fn test_intersects_circle_tangent_counts() {
    let bounds = Aabb::new(0.0, 0.0, 100.0, 100.0);
    // Circle touching the right edge from outside.
    assert!(bounds.intersects_circle(&Circle::new(60.0, 0.0, 10.0)));
    // Corner tangency, 3-4-5 triangle against the corner at (50, 50).
    assert!(bounds.intersects_circle(&Circle::new(53.0, 54.0, 5.0)));
    assert!(!bounds.intersects_circle(&Circle::new(53.0, 54.0, 4.9)));
}

#[test]
fn test_circles_intersect() {
    let a = Circle::new(0.0, 0.0, 10.0);
    assert!(circles_intersect(&a, &Circle::new(5.0, 0.0, 1.0)));
    assert!(!circles_intersect(&a, &Circle::new(20.0, 0.0, 5.0)));
    // Tangent circles intersect.
    assert!(circles_intersect(&a, &Circle::new(15.0, 0.0, 5.0)));
}

#[test]
fn test_degenerate_point_circle() {
    let bounds = Aabb::new(0.0, 0.0, 100.0, 100.0);
    let point = Circle::new(50.0, 0.0, 0.0);
    assert!(bounds.contains_circle(&point));
    assert!(bounds.intersects_circle(&point));
    assert!(circles_intersect(&point, &Circle::new(50.0, 0.0, 0.0)));
}

#[test]
#[should_panic]
fn test_negative_radius_rejected() {
    let _ = Circle::new(0.0, 0.0, -1.0);
}

#[test]
fn test_random_border_point() {
    let bounds = Aabb::new(50.0, 50.0, 100.0, 100.0);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let p = bounds.random_border_point(true, &mut rng);
        assert!(p.x == bounds.left() || p.x == bounds.right());
        assert!(p.y >= bounds.top() && p.y <= bounds.bottom());

        let p = bounds.random_border_point(false, &mut rng);
        assert!(p.y == bounds.top() || p.y == bounds.bottom());
        assert!(p.x >= bounds.left() && p.x <= bounds.right());
    }
}

#[test]
fn test_vec2_normalized() {
    assert!((Vec2::new(3.0, 4.0).normalized().length() - 1.0).abs() < 1e-6);
    assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
}

#[test]
fn test_vec2_orientation_round_trip() {
    let dir = Vec2::new(0.0, 1.0);
    let orientation = dir.orientation();
    let back = Vec2::from_orientation(orientation);
    assert!((back.x - dir.x).abs() < 1e-6);
    assert!((back.y - dir.y).abs() < 1e-6);
}
