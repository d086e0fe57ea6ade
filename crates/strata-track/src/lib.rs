//! Progress tracking for level selections.
//!
//! Every selection appends a timestamped, verified entry to an in-memory
//! log and fans it out to injected sinks. Delivery is fire-and-forget:
//! a sink that fails loses the entry, the log keeps it.

mod entry;
mod recorder;
mod sink;

pub use entry::ProgressEntry;
pub use recorder::ProgressLog;
pub use sink::{LogSink, ProgressSink, TimeSource};
