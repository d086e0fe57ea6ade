use crate::entry::ProgressEntry;

/// Destination for tracked entries, injected by the host. Replaces any
/// ambient global registry: a log only talks to sinks it was given.
pub trait ProgressSink {
    /// Receive one entry. Best-effort; implementations swallow their own
    /// failures and must not panic.
    fn track(&self, entry: &ProgressEntry);
}

/// Source of ISO-8601 timestamps. The browser host wraps `js_sys::Date`;
/// tests use a fixed clock.
pub trait TimeSource {
    fn now_iso(&self) -> String;
}

/// Sink that forwards entries to the `log` crate.
pub struct LogSink;

impl ProgressSink for LogSink {
    fn track(&self, entry: &ProgressEntry) {
        log::info!("Level {} {} - progress tracked", entry.level, entry.action);
    }
}
