//! Tracks which request is the latest, so responses to superseded ones can be dropped.

use std::cell::Cell;
use std::rc::Rc;

/// Issues tickets; only the most recent one stays current.
#[derive(Debug, Clone, Default)]
pub struct LatestRequest {
    generation: Rc<Cell<u64>>,
}

/// Handle carried by an in-flight request.
#[derive(Debug)]
pub struct RequestTicket {
    id: u64,
    generation: Rc<Cell<u64>>,
}

impl LatestRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request. Every earlier ticket becomes stale.
    pub fn start(&self) -> RequestTicket {
        let id = self.bump();
        RequestTicket {
            id,
            generation: Rc::clone(&self.generation),
        }
    }

    /// Make every outstanding ticket stale without starting a request.
    pub fn cancel(&self) {
        self.bump();
    }

    fn bump(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }
}

impl RequestTicket {
    pub fn is_current(&self) -> bool {
        self.generation.get() == self.id
    }
}
