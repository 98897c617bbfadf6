//! Latest-request gate.
//!
//! Rapid typing issues one request per keystroke with no cancellation, so
//! responses can arrive out of order. Each request takes a ticket from a
//! monotonically increasing sequence; a response is applied only if its
//! ticket is still the newest one issued.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic sequence gate for discarding stale responses.
#[derive(Debug, Default)]
pub struct LatestOnly {
    seq: AtomicU64,
}

impl LatestOnly {
    pub const fn new() -> Self {
        Self { seq: AtomicU64::new(0) }
    }

    /// Register a new request and return its ticket. Issuing a ticket
    /// invalidates all earlier ones.
    pub fn begin(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether the given ticket is still the newest issued.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.seq.load(Ordering::SeqCst) == ticket
    }

    /// Invalidate all outstanding tickets without registering a new
    /// request. Used when the user dismisses results: responses already in
    /// flight must not resurface them.
    pub fn invalidate(&self) {
        self.seq.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_ticket_is_current() {
        let gate = LatestOnly::new();
        let t = gate.begin();
        assert!(gate.is_current(t));
    }

    #[test]
    fn newer_ticket_invalidates_older() {
        let gate = LatestOnly::new();
        let first = gate.begin();
        let second = gate.begin();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    #[test]
    fn invalidate_drops_outstanding_tickets() {
        let gate = LatestOnly::new();
        let in_flight = gate.begin();
        // User dismisses the results while the request is in flight.
        gate.invalidate();
        assert!(!gate.is_current(in_flight));
    }

    #[test]
    fn begin_after_invalidate_is_current() {
        let gate = LatestOnly::new();
        gate.begin();
        gate.invalidate();
        let fresh = gate.begin();
        assert!(gate.is_current(fresh));
    }

    #[test]
    fn gates_are_independent() {
        let searches = LatestOnly::new();
        let display = LatestOnly::new();
        let display_ticket = display.begin();
        // Activity on one gate must not invalidate the other.
        searches.begin();
        searches.invalidate();
        assert!(display.is_current(display_ticket));
    }

    #[test]
    fn out_of_order_completion_keeps_newest() {
        let gate = LatestOnly::new();
        let t1 = gate.begin();
        let t2 = gate.begin();
        let t3 = gate.begin();
        // t2 completes after t3 — must be dropped
        assert!(gate.is_current(t3));
        assert!(!gate.is_current(t2));
        assert!(!gate.is_current(t1));
    }
}
