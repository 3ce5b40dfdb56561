use std::cell::Cell;
use std::rc::Rc;

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Lets only the most recently started request publish its result.
///
/// Each new request takes a ticket. When an older request resolves after a
/// newer one started, its ticket is no longer current and the caller drops
/// the response. Clones share the counter.
#[derive(Debug, Clone, Default)]
pub struct LatestRequest {
    current: Rc<Cell<u64>>,
}

impl LatestRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        let next = self.current.get() + 1;
        self.current.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current.get() == ticket.0
    }

    /// Invalidates every outstanding ticket without starting a request.
    pub fn cancel(&self) {
        self.issue();
    }
}
