use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new() -> StatsAtomics
    {
        let stats = StatsAtomics::default();
        stats.started.store(chrono::Utc::now().timestamp(), Ordering::SeqCst);
        stats
    }

    pub fn counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::Users => &self.users,
            StatsEvent::UsersConnected => &self.users_connected,
            StatsEvent::Files => &self.files,
            StatsEvent::ConnectionsHandled => &self.connections_handled,
            StatsEvent::ConnectionsRejected => &self.connections_rejected,
            StatsEvent::RequestsOk => &self.requests_ok,
            StatsEvent::RequestsFailed => &self.requests_failed,
            StatsEvent::FramingErrors => &self.framing_errors,
            StatsEvent::UnknownOperations => &self.unknown_operations,
        }
    }

    pub fn snapshot(&self) -> Stats
    {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            users: self.users.load(Ordering::SeqCst),
            users_connected: self.users_connected.load(Ordering::SeqCst),
            files: self.files.load(Ordering::SeqCst),
            connections_handled: self.connections_handled.load(Ordering::SeqCst),
            connections_rejected: self.connections_rejected.load(Ordering::SeqCst),
            requests_ok: self.requests_ok.load(Ordering::SeqCst),
            requests_failed: self.requests_failed.load(Ordering::SeqCst),
            framing_errors: self.framing_errors.load(Ordering::SeqCst),
            unknown_operations: self.unknown_operations.load(Ordering::SeqCst),
        }
    }
}
