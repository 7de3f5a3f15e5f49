//! Ordering of overlapping listing refreshes.
//!
//! A refresh does not cancel the one already in flight. When both complete,
//! [`RefreshOrdering`] decides which response ends up on screen.

use std::collections::BTreeSet;

/// Which of several completed refreshes wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RefreshOrdering {
    /// Apply every response as it completes; the last to complete wins.
    #[default]
    LatestCompleted,
    /// Drop responses older than the newest one already applied.
    LatestIssued,
}

/// Sequence number handed to a refresh when it is issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// Issues tickets and decides whether a completed refresh may be applied.
#[derive(Clone, Debug, Default)]
pub struct RefreshGate {
    ordering: RefreshOrdering,
    issued: u64,
    applied: Option<u64>,
    outstanding: BTreeSet<u64>,
}

impl RefreshGate {
    pub fn new(ordering: RefreshOrdering) -> Self {
        Self {
            ordering,
            ..Self::default()
        }
    }

    /// Ticket for a new request. Tickets strictly increase.
    pub fn issue(&mut self) -> RefreshTicket {
        self.issued += 1;
        self.outstanding.insert(self.issued);
        RefreshTicket(self.issued)
    }

    /// Record that the request for `ticket` completed and decide whether its
    /// response should be applied. Must be called once per completion,
    /// successful or not.
    pub fn admit(&mut self, ticket: RefreshTicket) -> bool {
        self.outstanding.remove(&ticket.0);

        let admitted = match self.ordering {
            RefreshOrdering::LatestCompleted => true,
            RefreshOrdering::LatestIssued => self.applied.is_none_or(|seq| ticket.0 > seq),
        };
        if admitted {
            self.applied = Some(self.applied.map_or(ticket.0, |seq| seq.max(ticket.0)));
        }
        admitted
    }

    /// Whether an in-flight request may still replace what is on screen.
    ///
    /// Under `LatestCompleted` that is any outstanding request; under
    /// `LatestIssued` only those newer than the last applied one.
    pub fn is_pending(&self) -> bool {
        match self.ordering {
            RefreshOrdering::LatestCompleted => !self.outstanding.is_empty(),
            RefreshOrdering::LatestIssued => self
                .outstanding
                .last()
                .is_some_and(|&newest| self.applied.is_none_or(|seq| newest > seq)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_increase() {
        let mut gate = RefreshGate::default();
        let a = gate.issue();
        let b = gate.issue();
        assert!(b > a);
        assert_eq!(b.seq(), 2);
    }

    #[test]
    fn test_latest_completed_applies_everything() {
        let mut gate = RefreshGate::new(RefreshOrdering::LatestCompleted);
        let first = gate.issue();
        let second = gate.issue();
        assert!(gate.admit(second));
        assert!(gate.admit(first));
    }

    #[test]
    fn test_latest_issued_drops_stale() {
        let mut gate = RefreshGate::new(RefreshOrdering::LatestIssued);
        let first = gate.issue();
        let second = gate.issue();
        assert!(gate.admit(second));
        assert!(!gate.admit(first));
    }

    #[test]
    fn test_latest_issued_applies_in_order() {
        let mut gate = RefreshGate::new(RefreshOrdering::LatestIssued);
        let first = gate.issue();
        let second = gate.issue();
        assert!(gate.admit(first));
        assert!(gate.is_pending());
        assert!(gate.admit(second));
        assert!(!gate.is_pending());
    }

    #[test]
    fn test_latest_completed_pending_until_all_complete() {
        let mut gate = RefreshGate::new(RefreshOrdering::LatestCompleted);
        let first = gate.issue();
        let second = gate.issue();
        assert!(gate.admit(second));
        // The older response can still land and replace the tree
        assert!(gate.is_pending());
        assert!(gate.admit(first));
        assert!(!gate.is_pending());
    }

    #[test]
    fn test_latest_issued_not_pending_on_stale_only() {
        let mut gate = RefreshGate::new(RefreshOrdering::LatestIssued);
        let first = gate.issue();
        let second = gate.issue();
        assert!(gate.admit(second));
        assert!(!gate.is_pending());
        assert!(!gate.admit(first));
        assert!(!gate.is_pending());
    }

    #[test]
    fn test_nothing_pending_initially() {
        assert!(!RefreshGate::default().is_pending());
    }
}
