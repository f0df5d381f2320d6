use std::sync::atomic::Ordering;
use crate::registry::structs::registry::Registry;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;

impl Registry {
    pub fn get_stats(&self) -> Stats
    {
        self.stats.snapshot()
    }

    /// Adds `value` (which may be negative) to the selected counter.
    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        if value != 0 {
            self.stats.counter(event).fetch_add(value, Ordering::SeqCst);
        }
    }
}
