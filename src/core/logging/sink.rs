use std::cell::RefCell;
use std::rc::Rc;
use log::Level;
use crate::core::logging::entry::{DebugCategory, DebugLogEntry};

pub const LOG_TARGET: &str = "devolve_ui_debug";

/// Receives the debug hooks' entries. Shared between components, so it only gets `&self`.
pub trait DebugSink {
    fn log(&self, entry: DebugLogEntry);
}

/// Forwards entries to the `log` crate, under the `devolve_ui_debug` target
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

/// Stores entries in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink(Rc<RefCell<Vec<DebugLogEntry>>>);

impl LogSink {
    /// The lines `log` writes for this entry, with their level.
    /// Why-update entries are a group: a header, then one line per changed prop.
    pub fn lines(entry: &DebugLogEntry) -> Vec<(Level, String)> {
        let level = entry.level();
        match entry.category {
            DebugCategory::WhyUpdate => {
                let mut lines = vec![(level, format!("[{}] {}", entry.category, entry.title))];
                if let Some(changed_props) = entry.get("changedProps").and_then(|changed_props| changed_props.as_object()) {
                    for (name, change) in changed_props {
                        lines.push((level, format!("    {}: {}", name, change)));
                    }
                }
                lines
            }
            _ => vec![(level, entry.to_string())]
        }
    }
}

impl DebugSink for LogSink {
    fn log(&self, entry: DebugLogEntry) {
        for (level, line) in Self::lines(&entry) {
            log::log!(target: LOG_TARGET, level, "{}", line);
        }
    }
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<DebugLogEntry> {
        self.0.borrow().clone()
    }

    /// Returns and clears the stored entries
    pub fn take(&self) -> Vec<DebugLogEntry> {
        self.0.borrow_mut().drain(..).collect()
    }

    pub fn categories(&self) -> Vec<DebugCategory> {
        self.0.borrow().iter().map(|entry| entry.category).collect()
    }

    pub fn of_category(&self, category: DebugCategory) -> Vec<DebugLogEntry> {
        self.0.borrow().iter().filter(|entry| entry.category == category).cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

impl DebugSink for MemorySink {
    fn log(&self, entry: DebugLogEntry) {
        self.0.borrow_mut().push(entry);
    }
}
