use std::collections::BTreeSet;

use crate::shared::action::ActionKind;
use crate::shared::error::ApiError;

/// Outcome of starting a row action.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionStart<Req> {
    /// Marked busy; the request is ready to send
    Started(Req),
    /// The row's values did not pass the local check; nothing was sent
    Rejected(ApiError),
    /// The same action is still in flight for this row
    AlreadyRunning,
    RowMissing,
}

/// In-flight row actions, keyed by `(row key, action kind)`.
///
/// One pair being busy never blocks another row or another action on the same row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BusyMap {
    in_flight: BTreeSet<(String, ActionKind)>,
}

impl BusyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the pair busy. Returns false when it already is (dispatch refused).
    pub fn begin(&mut self, key: &str, kind: ActionKind) -> bool {
        self.in_flight.insert((key.to_string(), kind))
    }

    pub fn finish(&mut self, key: &str, kind: ActionKind) {
        self.in_flight.remove(&(key.to_string(), kind));
    }

    pub fn is_busy(&self, key: &str, kind: ActionKind) -> bool {
        self.in_flight.contains(&(key.to_string(), kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_resolve_independently() {
        let mut busy = BusyMap::new();
        assert!(busy.begin("A", ActionKind::SendCredentials));
        assert!(busy.begin("B", ActionKind::SendCredentials));

        busy.finish("A", ActionKind::SendCredentials);
        assert!(!busy.is_busy("A", ActionKind::SendCredentials));
        assert!(busy.is_busy("B", ActionKind::SendCredentials));
    }

    #[test]
    fn test_duplicate_dispatch_refused() {
        let mut busy = BusyMap::new();
        assert!(busy.begin("uid-1", ActionKind::GenerateCertificate));
        assert!(!busy.begin("uid-1", ActionKind::GenerateCertificate));
        // other action on the same row is allowed
        assert!(busy.begin("uid-1", ActionKind::SendCertificate));

        busy.finish("uid-1", ActionKind::GenerateCertificate);
        busy.finish("uid-1", ActionKind::SendCertificate);
        assert_eq!(busy, BusyMap::new());
    }
}
