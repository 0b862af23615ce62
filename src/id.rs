use crate::model::ActorId;

/// Monotonic actor ID generator.
/// Never reuses an ID, so an actor keeps its identity across conversion
/// while newly spawned actors always get a fresh one.
#[derive(Debug)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn starting_from(start: u64) -> Self {
        Self { next: start }
    }

    pub fn next_id(&mut self) -> ActorId {
        let id = self.next;
        self.next += 1;
        ActorId(id)
    }

    /// Make sure IDs handed out later never collide with `seen`.
    /// Used when restoring actors whose IDs came from a snapshot.
    pub fn observe(&mut self, seen: ActorId) {
        if seen.0 >= self.next {
            self.next = seen.0 + 1;
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
