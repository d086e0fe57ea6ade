use crate::entry::ProgressEntry;
use crate::sink::{ProgressSink, TimeSource};

/// Append-only progress log with fan-out to injected sinks.
pub struct ProgressLog {
    clock: Box<dyn TimeSource>,
    sinks: Vec<Box<dyn ProgressSink>>,
    entries: Vec<ProgressEntry>,
}

impl ProgressLog {
    pub fn new(clock: Box<dyn TimeSource>) -> Self {
        Self {
            clock,
            sinks: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// Register a sink. Sinks receive entries logged after registration;
    /// no replay of history.
    pub fn add_sink(&mut self, sink: Box<dyn ProgressSink>) {
        self.sinks.push(sink);
    }

    /// Record one event and fan it out. Never fails; sink delivery is
    /// fire-and-forget.
    pub fn log_progress(&mut self, level: u8, action: &str) {
        let entry = ProgressEntry {
            timestamp: self.clock.now_iso(),
            level,
            action: action.to_string(),
            verified: true,
        };
        for sink in &self.sinks {
            sink.track(&entry);
        }
        self.entries.push(entry);
    }

    /// Read-only view of everything logged so far, oldest first.
    pub fn entries(&self) -> &[ProgressEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FixedClock;

    impl TimeSource for FixedClock {
        fn now_iso(&self) -> String {
            "2026-08-29T00:00:00.000Z".into()
        }
    }

    struct CapturingSink(Rc<RefCell<Vec<ProgressEntry>>>);

    impl ProgressSink for CapturingSink {
        fn track(&self, entry: &ProgressEntry) {
            self.0.borrow_mut().push(entry.clone());
        }
    }

    #[test]
    fn test_log_progress_appends_verified_entry() {
        let mut log = ProgressLog::new(Box::new(FixedClock));
        log.log_progress(7, "selected");
        assert_eq!(log.entries().len(), 1);
        let entry = &log.entries()[0];
        assert_eq!(entry.level, 7);
        assert_eq!(entry.action, "selected");
        assert!(entry.verified);
        assert_eq!(entry.timestamp, "2026-08-29T00:00:00.000Z");
    }

    #[test]
    fn test_entries_kept_in_order() {
        let mut log = ProgressLog::new(Box::new(FixedClock));
        log.log_progress(0, "selected");
        log.log_progress(3, "selected");
        log.log_progress(1, "hovered");
        let levels: Vec<u8> = log.entries().iter().map(|e| e.level).collect();
        assert_eq!(levels, vec![0, 3, 1]);
    }

    #[test]
    fn test_sinks_receive_fan_out() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut log = ProgressLog::new(Box::new(FixedClock));
        log.add_sink(Box::new(CapturingSink(seen.clone())));
        log.log_progress(5, "selected");
        log.log_progress(6, "selected");
        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].level, 5);
        assert_eq!(seen[1].level, 6);
    }

    #[test]
    fn test_sink_added_late_misses_history() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut log = ProgressLog::new(Box::new(FixedClock));
        log.log_progress(2, "selected");
        log.add_sink(Box::new(CapturingSink(seen.clone())));
        log.log_progress(3, "selected");
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(log.entries().len(), 2);
    }
}
