//! Where the debug hooks' output goes.
//!
//! Every lifecycle event becomes a `DebugLogEntry` which is sent to the component's `DebugSink`.
//! By default that's `LogSink`, which forwards to the `log` crate; `MemorySink` collects entries
//! (useful in tests), and `JsonFileSink` records them to a JSON-lines file.

pub mod common;
pub mod entry;
#[cfg(feature = "logging")]
pub mod file_sink;
pub mod sink;
