//! Atomic id source for shapes.

use super::ShapeId;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

/// Monotonic id source. The first id handed out is 1.
///
/// `next_id` is a single `fetch_add`, so concurrent constructions never share an id.
#[derive(Debug)]
pub struct IdGen {
    next: AtomicU64,
}

impl IdGen {
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// The process-wide generator used by `Shape::oval` and friends.
    pub fn shared() -> Arc<IdGen> {
        static SHARED: OnceLock<Arc<IdGen>> = OnceLock::new();
        SHARED.get_or_init(|| Arc::new(IdGen::new())).clone()
    }

    #[inline]
    pub fn next_id(&self) -> ShapeId {
        ShapeId(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// Id the next construction will receive.
    #[inline]
    pub fn peek(&self) -> ShapeId {
        ShapeId(self.next.load(Ordering::Relaxed))
    }
}

impl Default for IdGen {
    fn default() -> Self {
        Self::new()
    }
}
