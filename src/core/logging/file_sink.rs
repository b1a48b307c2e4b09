//! Records debug entries to a JSON-lines file, one file per `JsonFileSink`.
//! Each line is `{"time": <time since the sink was created>, "data": <entry>}`.

use std::cell::RefCell;
use std::fs::File;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use chrono::{DateTime, Utc};
use crate::core::logging::common::{LogEntry, LogResult};
use crate::core::logging::entry::DebugLogEntry;
use crate::core::logging::sink::DebugSink;

/// Distinguishes sinks created in the same directory at the same instant by one process
static NEXT_LOG_INDEX: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
pub struct JsonFileSink {
    monotonic_start_time: Instant,
    path: PathBuf,
    file: RefCell<File>
}

impl JsonFileSink {
    /// Creates `<dir>/<start time>-<process id>-<index>-debug.json`. Fails if it already exists.
    pub fn new(dir: &Path) -> io::Result<Self> {
        let user_time: DateTime<Utc> = Utc::now();
        let index = NEXT_LOG_INDEX.fetch_add(1, Ordering::Relaxed);
        let path = Self::log_path(dir, &user_time, index, "debug");
        let file = File::options().write(true).create_new(true).open(&path)?;
        Ok(JsonFileSink {
            monotonic_start_time: Instant::now(),
            path,
            file: RefCell::new(file)
        })
    }

    /// No colons, so the name is valid on Windows
    fn log_path(dir: &Path, user_time: &DateTime<Utc>, index: usize, name: &str) -> PathBuf {
        dir.join(format!("{}-{}-{}-{}.json", user_time.format("%FT%H-%M-%S%.3f"), process::id(), index, name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn do_log(&self, data: &DebugLogEntry) -> LogResult {
        let entry = LogEntry {
            time: self.monotonic_start_time.elapsed(),
            data
        };
        let serial = serde_json::to_vec(&entry)?;

        let mut file = self.file.borrow_mut();
        file.write_all(&serial)?;
        file.write_all(b"\n")?;
        Ok(())
    }
}

impl DebugSink for JsonFileSink {
    fn log(&self, entry: DebugLogEntry) {
        let result = self.do_log(&entry);
        if let Err(err) = result {
            eprintln!("Error logging: data={:?}, error={:?}", entry, err);
        }
    }
}
