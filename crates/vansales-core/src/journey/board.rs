//! State container for the journey list with ordered refreshes.

use log::debug;

use super::{JourneySnapshot, JourneyView, VisitClassifier};
use crate::models::{CalendarDay, VisitTab};

/// Generation number handed out when a refresh starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Holds the last committed journey snapshot.
///
/// Refreshes may overlap (a refocus can start a new load while an older
/// one is in flight). Every load takes a ticket from
/// [`JourneyBoard::begin_refresh`] and hands it back with its result; a
/// result older than the one already committed is dropped.
#[derive(Debug, Default)]
pub struct JourneyBoard {
    issued: u64,
    committed: u64,
    snapshot: Option<JourneySnapshot>,
    classifier: VisitClassifier,
}

impl JourneyBoard {
    pub fn new(classifier: VisitClassifier) -> Self {
        Self {
            classifier,
            ..Self::default()
        }
    }

    /// Starts a refresh and returns its ticket.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.issued += 1;
        RefreshTicket(self.issued)
    }

    /// Stores the result of a refresh. Returns `false` and keeps the current
    /// snapshot when a newer refresh has already been committed.
    pub fn commit(&mut self, ticket: RefreshTicket, snapshot: JourneySnapshot) -> bool {
        if ticket.0 <= self.committed {
            debug!(
                "Discarding stale journey refresh {} (committed {})",
                ticket.0, self.committed
            );
            return false;
        }
        self.committed = ticket.0;
        self.snapshot = Some(snapshot);
        true
    }

    /// Whether `ticket` belongs to the most recently started refresh.
    pub fn is_latest(&self, ticket: RefreshTicket) -> bool {
        ticket.0 == self.issued
    }

    pub fn snapshot(&self) -> Option<&JourneySnapshot> {
        self.snapshot.as_ref()
    }

    /// Classified view of the committed snapshot, `None` before the first
    /// successful refresh.
    pub fn view(&self, today: &CalendarDay, tab: &VisitTab, query: &str) -> Option<JourneyView> {
        self.snapshot
            .as_ref()
            .map(|snapshot| snapshot.view(&self.classifier, today, tab, query))
    }

    /// Drops the snapshot, e.g. on sign-out. Tickets issued before the
    /// clear can no longer commit.
    pub fn clear(&mut self) {
        self.committed = self.issued;
        self.snapshot = None;
    }
}
