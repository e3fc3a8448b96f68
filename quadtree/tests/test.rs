use common::shapes::{Aabb, Circle};
use quadtree::{Quadtree, QuadtreeError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

fn field() -> Aabb {
    Aabb::new(500.0, 500.0, 1000.0, 1000.0)
}

#[test]
fn test_single_query() {
    let mut qt = Quadtree::new(field(), 25).unwrap();
    assert!(qt.insert(0u32, Circle::new(100.0, 100.0, 16.0)));
    let found = qt.query_vec(Circle::new(110.0, 100.0, 16.0));
    assert_eq!(found, vec![0]);
}

#[test]
fn test_insert_outside_bounds_refused() {
    let mut qt = Quadtree::new(field(), 25).unwrap();
    // Off-field parking spot used for pooled entities.
    assert!(!qt.insert(0u32, Circle::new(-10000.0, -10000.0, 16.0)));
    // Partially outside is refused too: containment, not intersection.
    assert!(!qt.insert(1u32, Circle::new(0.0, 500.0, 16.0)));
    assert_eq!(qt.len(), 0);
    assert!(qt.query_vec(Circle::new(0.0, 500.0, 50.0)).is_empty());
}

#[test]
fn test_capacity_triggers_single_subdivision() {
    let capacity = 4;
    let mut qt = Quadtree::new(field(), capacity).unwrap();
    // capacity + 1 small, non-overlapping circles inside the NW quadrant.
    for i in 0..=capacity {
        let x = 100.0 + 50.0 * i as f32;
        assert!(qt.insert(i as u32, Circle::new(x, 100.0, 5.0)));
    }
    // Exactly one subdivision: root + 4 children.
    assert_eq!(qt.node_count(), 5);
    assert_eq!(qt.len(), capacity + 1);

    let mut bounds = Vec::new();
    qt.all_node_bounds(&mut bounds);
    assert_eq!(bounds[0], field());
    for child in &bounds[1..] {
        assert_eq!(child.width, 500.0);
        assert_eq!(child.height, 500.0);
    }
    // NW, NE, SW, SE.
    assert_eq!((bounds[1].x, bounds[1].y), (250.0, 250.0));
    assert_eq!((bounds[2].x, bounds[2].y), (750.0, 250.0));
    assert_eq!((bounds[3].x, bounds[3].y), (250.0, 750.0));
    assert_eq!((bounds[4].x, bounds[4].y), (750.0, 750.0));
}

#[test]
fn test_parent_entries_stay_visible_after_subdivision() {
    // The node keeps whatever it stored before it became divided; queries
    // must see the parent's own list plus all descendants.
    let capacity = 2;
    let mut qt = Quadtree::new(field(), capacity).unwrap();
    qt.insert(0u32, Circle::new(100.0, 100.0, 10.0));
    qt.insert(1u32, Circle::new(200.0, 100.0, 10.0));
    // Forces subdivision; lands in a child.
    qt.insert(2u32, Circle::new(300.0, 100.0, 10.0));
    assert_eq!(qt.node_count(), 5);

    let found: HashSet<u32> = qt.query_vec(Circle::new(200.0, 100.0, 150.0)).into_iter().collect();
    assert_eq!(found, HashSet::from([0, 1, 2]));
}

#[test]
fn test_straddling_insert_stays_in_full_parent() {
    let capacity = 1;
    let mut qt = Quadtree::new(field(), capacity).unwrap();
    qt.insert(0u32, Circle::new(100.0, 100.0, 10.0));
    // Root is full and this circle straddles the center split lines, so no
    // child can fully contain it. It must still be stored and queryable.
    assert!(qt.insert(1u32, Circle::new(500.0, 500.0, 50.0)));
    let found = qt.query_vec(Circle::new(500.0, 500.0, 50.0));
    assert_eq!(found, vec![1]);
}

#[test]
fn test_query_prunes_disjoint_subtrees() {
    let mut qt = Quadtree::new(field(), 1).unwrap();
    for i in 0..20u32 {
        let x = 50.0 + 20.0 * i as f32;
        qt.insert(i, Circle::new(x, 100.0, 5.0));
    }
    // Range entirely inside the SE quadrant, far away from every entry.
    assert!(qt.query_vec(Circle::new(900.0, 900.0, 40.0)).is_empty());
}

#[test]
fn test_tangent_circles_are_found() {
    let mut qt = Quadtree::new(field(), 25).unwrap();
    qt.insert(0u32, Circle::new(100.0, 100.0, 10.0));
    // Query circle exactly tangent to the stored one.
    let found = qt.query_vec(Circle::new(130.0, 100.0, 20.0));
    assert_eq!(found, vec![0]);
}

#[test]
fn test_clear_resets_to_undivided_leaf() {
    let mut qt = Quadtree::new(field(), 2).unwrap();
    for i in 0..10u32 {
        qt.insert(i, Circle::new(50.0 + 30.0 * i as f32, 100.0, 5.0));
    }
    assert!(qt.node_count() > 1);
    qt.clear();
    assert_eq!(qt.node_count(), 1);
    assert_eq!(qt.len(), 0);
    assert!(qt.query_vec(Circle::new(100.0, 100.0, 500.0)).is_empty());
    // Reusable after the reset.
    assert!(qt.insert(99u32, Circle::new(100.0, 100.0, 5.0)));
    assert_eq!(qt.query_vec(Circle::new(100.0, 100.0, 5.0)), vec![99]);
}

#[test]
fn test_every_inserted_entry_is_reflexively_queryable() {
    let mut qt = Quadtree::new(field(), 4).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let mut circles = Vec::new();
    for i in 0..500u32 {
        let circle = Circle::new(
            rng.gen_range(20.0..980.0),
            rng.gen_range(20.0..980.0),
            rng.gen_range(0.0..20.0),
        );
        assert!(qt.insert(i, circle));
        circles.push(circle);
    }
    for (i, circle) in circles.iter().enumerate() {
        let found = qt.query_vec(*circle);
        assert!(found.contains(&(i as u32)), "entry {} missing from its own query", i);
    }
}

#[test]
fn test_invalid_construction() {
    assert!(matches!(
        Quadtree::<u32>::new(field(), 0),
        Err(QuadtreeError::InvalidCapacity)
    ));
    let degenerate = Aabb::new(0.0, 0.0, 0.0, 100.0);
    assert!(matches!(
        Quadtree::<u32>::new(degenerate, 4),
        Err(QuadtreeError::InvalidBounds { .. })
    ));
}
