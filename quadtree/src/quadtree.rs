use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::{circles_intersect, Aabb, Circle};
use smallvec::SmallVec;

// Child order is fixed: NW, NE, SW, SE. Inserts try them in this order and
// stop at the first child whose boundary contains the collider.
const NW: usize = 0;
const NE: usize = 1;
const SW: usize = 2;
const SE: usize = 3;

struct Node<T> {
    bounds: Aabb,
    entries: Vec<(T, Circle)>,
    children: Option<[usize; 4]>,
}

impl<T> Node<T> {
    fn new(bounds: Aabb) -> Self {
        Self {
            bounds,
            entries: Vec::new(),
            children: None,
        }
    }
}

/// Recursive 4-way spatial partition over values keyed by a bounding circle.
///
/// Nodes live in a flat arena and refer to their children by index, so
/// `clear` is a truncate instead of a deep free. The tree is rebuilt from
/// scratch every tick: `clear`, then one `insert` per active entity.
///
/// A node accepts entries only while it is under its capacity; the insert
/// that would exceed it subdivides the node into four equal quadrants and
/// delegates to them. Entries already stored in the node stay where they
/// are, so queries always check a node's own list as well as its children.
pub struct Quadtree<T> {
    nodes: Vec<Node<T>>,
    capacity: usize,
}

impl<T: Copy> Quadtree<T> {
    /// Creates an empty tree over `bounds`. Every node in the tree,
    /// including children created by subdivision, uses the same `capacity`.
    pub fn new(bounds: Aabb, capacity: usize) -> QuadtreeResult<Self> {
        if capacity == 0 {
            return Err(QuadtreeError::InvalidCapacity);
        }
        if !(bounds.width.is_finite() && bounds.height.is_finite())
            || bounds.width <= 0.0
            || bounds.height <= 0.0
        {
            return Err(QuadtreeError::InvalidBounds {
                width: bounds.width,
                height: bounds.height,
            });
        }
        Ok(Self {
            nodes: vec![Node::new(bounds)],
            capacity,
        })
    }

    pub fn bounds(&self) -> Aabb {
        self.nodes[0].bounds
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts `value` keyed by `collider`. Returns `false` iff the root
    /// boundary does not fully contain the collider, in which case the
    /// value is simply absent from the index until the next rebuild.
    pub fn insert(&mut self, value: T, collider: Circle) -> bool {
        self.insert_into(0, value, collider)
    }

    fn insert_into(&mut self, node: usize, value: T, collider: Circle) -> bool {
        if !self.nodes[node].bounds.contains_circle(&collider) {
            return false;
        }
        if self.nodes[node].entries.len() < self.capacity {
            self.nodes[node].entries.push((value, collider));
            return true;
        }
        let children = match self.nodes[node].children {
            Some(children) => children,
            None => self.subdivide(node),
        };
        for child in children {
            if self.insert_into(child, value, collider) {
                return true;
            }
        }
        // The collider straddles the split lines, so no child contains it.
        // It stays in this node even though the node is past capacity.
        self.nodes[node].entries.push((value, collider));
        true
    }

    fn subdivide(&mut self, node: usize) -> [usize; 4] {
        let bounds = self.nodes[node].bounds;
        let half_width = bounds.width * 0.5;
        let half_height = bounds.height * 0.5;
        let offset_x = bounds.width * 0.25;
        let offset_y = bounds.height * 0.25;

        let mut children = [0; 4];
        children[NW] =
            self.push_node(bounds.x - offset_x, bounds.y - offset_y, half_width, half_height);
        children[NE] =
            self.push_node(bounds.x + offset_x, bounds.y - offset_y, half_width, half_height);
        children[SW] =
            self.push_node(bounds.x - offset_x, bounds.y + offset_y, half_width, half_height);
        children[SE] =
            self.push_node(bounds.x + offset_x, bounds.y + offset_y, half_width, half_height);
        self.nodes[node].children = Some(children);
        children
    }

    fn push_node(&mut self, x: f32, y: f32, width: f32, height: f32) -> usize {
        self.nodes.push(Node::new(Aabb::new(x, y, width, height)));
        self.nodes.len() - 1
    }

    /// Appends every stored value whose collider intersects `range` to
    /// `out`. Subtrees whose boundary does not overlap the range are
    /// skipped wholesale.
    pub fn query(&self, range: Circle, out: &mut Vec<T>) {
        let mut stack: SmallVec<[usize; 32]> = SmallVec::new();
        stack.push(0);
        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];
            if !node.bounds.intersects_circle(&range) {
                continue;
            }
            for (value, collider) in &node.entries {
                if circles_intersect(&range, collider) {
                    out.push(*value);
                }
            }
            if let Some(children) = node.children {
                stack.extend_from_slice(&children);
            }
        }
    }

    pub fn query_vec(&self, range: Circle) -> Vec<T> {
        let mut out = Vec::new();
        self.query(range, &mut out);
        out
    }

    /// Drops every entry and every child node, resetting the tree to a
    /// single undivided leaf. Called before each per-tick rebuild.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[0].entries.clear();
        self.nodes[0].children = None;
    }

    /// Total number of stored entries across all nodes.
    pub fn len(&self) -> usize {
        self.nodes.iter().map(|node| node.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.iter().all(|node| node.entries.is_empty())
    }

    /// Number of nodes currently in the arena (1 for an undivided tree,
    /// growing by 4 per subdivision).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // Retrieve all node boundaries, for debug drawing and structure tests.
    pub fn all_node_bounds(&self, out: &mut Vec<Aabb>) {
        for node in &self.nodes {
            out.push(node.bounds);
        }
    }
}
