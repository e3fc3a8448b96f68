/// Bounded store of reusable objects.
///
/// The pool never allocates on the spawn path: `spawn_object` pops an
/// existing object and `pool_object` pushes one back. Callers must not rely
/// on any ordering of returned objects.
pub struct ObjectPool<T> {
    pool: Vec<T>,
    max_size: usize,
}

impl<T> ObjectPool<T> {
    /// Creates a pool holding at most `max_size` objects. A zero-sized pool
    /// could never satisfy its own invariants, so it is a hard precondition
    /// failure.
    pub fn new(max_size: usize) -> Self {
        assert!(max_size > 0, "pool max_size must be at least 1");
        ObjectPool {
            pool: Vec::new(),
            max_size,
        }
    }

    /// Returns an object to the available set. Silently discards the object
    /// if the pool is already at capacity; with callers upholding the
    /// active-xor-pooled invariant this branch is a logic-error guard.
    pub fn pool_object(&mut self, obj: T) {
        if self.pool.len() < self.max_size {
            self.pool.push(obj);
        }
    }

    /// Removes and returns one object, or `None` if the pool is empty.
    pub fn spawn_object(&mut self) -> Option<T> {
        self.pool.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }
}
