// src/breach/status.rs
use crate::models::BreachStatus;

/// Identifies one in-flight breach check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckTicket(u64);

impl CheckTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Status owned by one session. A newer check supersedes older ones, and a
/// result arriving for a superseded ticket is dropped.
///
/// The interactive menu awaits each check before taking more input, so it
/// never produces a stale ticket itself. The guard matters for callers that
/// run checks as spawned tasks and complete them in arrival order.
#[derive(Debug, Default)]
pub struct StatusBoard {
    latest: u64,
    current: Option<BreachStatus>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> CheckTicket {
        self.latest += 1;
        self.current = Some(BreachStatus::Loading);
        CheckTicket(self.latest)
    }

    /// Returns false when the ticket is stale and the status was discarded.
    pub fn complete(&mut self, ticket: CheckTicket, status: BreachStatus) -> bool {
        if ticket.id() != self.latest {
            log::debug!("Discarding stale breach result for check #{}", ticket.id());
            return false;
        }
        self.current = Some(status);
        true
    }

    pub fn current(&self) -> Option<&BreachStatus> {
        self.current.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_sets_loading() {
        let mut board = StatusBoard::new();
        assert!(board.current().is_none());
        board.begin();
        assert_eq!(board.current(), Some(&BreachStatus::Loading));
    }

    #[test]
    fn ticket_ids_are_monotonic() {
        let mut board = StatusBoard::new();
        let first = board.begin();
        let second = board.begin();
        assert!(second.id() > first.id());
    }

    #[test]
    fn stale_result_is_discarded() {
        let mut board = StatusBoard::new();
        let stale = board.begin();
        let fresh = board.begin();

        assert!(board.complete(fresh, BreachStatus::Safe));
        assert!(!board.complete(stale, BreachStatus::Danger { occurrences: 1 }));
        assert_eq!(board.current(), Some(&BreachStatus::Safe));
    }

    #[tokio::test]
    async fn spawned_checks_finishing_out_of_order() {
        use crate::breach::testing::MockRangeSource;
        use crate::breach::BreachChecker;
        use std::sync::Arc;

        let checker = BreachChecker::new(Arc::new(MockRangeSource::containing("Abc12345", 5)));
        let mut board = StatusBoard::new();

        let old_ticket = board.begin();
        let old_check = tokio::spawn({
            let checker = checker.clone();
            async move { checker.check("Abc12345").await }
        });
        let new_ticket = board.begin();
        let new_check = tokio::spawn({
            let checker = checker.clone();
            async move { checker.check("unrelated-passphrase").await }
        });

        assert!(board.complete(new_ticket, new_check.await.unwrap()));
        assert!(!board.complete(old_ticket, old_check.await.unwrap()));
        assert_eq!(board.current(), Some(&BreachStatus::Safe));
    }

    #[test]
    fn stale_result_does_not_replace_loading() {
        let mut board = StatusBoard::new();
        let stale = board.begin();
        let _fresh = board.begin();

        assert!(!board.complete(stale, BreachStatus::Safe));
        assert_eq!(board.current(), Some(&BreachStatus::Loading));
    }
}
