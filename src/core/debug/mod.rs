//! Hooks for debugging components:
//!
//! - `use_lifecycle_logger` logs every mount, render, update and unmount
//! - `use_why_did_you_update` logs which props changed whenever the component updates
//!
//! Entries go to the component's `DebugSink` and are skipped when `VMode::is_logged` is false
//! for their category.

use std::rc::Rc;
use chrono::{DateTime, Local};
use serde_json::{Map, Value};
use crate::core::component::mode::VMode;
use crate::core::logging::entry::{DebugCategory, DebugLogEntry};
use crate::core::logging::sink::DebugSink;

pub mod lifecycle_logger;
pub mod props;
pub mod why_did_you_update;

/// Like `toLocaleTimeString`
pub(crate) fn format_time(time: &DateTime<Local>) -> String {
    time.format("%H:%M:%S").to_string()
}

/// Builds an entry's payload from `(field, value)` pairs
pub(crate) fn payload<const N: usize>(fields: [(&str, Value); N]) -> Map<String, Value> {
    fields.into_iter().map(|(name, value)| (name.to_string(), value)).collect()
}

pub(crate) fn emit(
    sink: &Rc<dyn DebugSink>,
    category: DebugCategory,
    component: &str,
    title: String,
    time: DateTime<Local>,
    payload: Map<String, Value>
) {
    if !VMode::is_logged(category) {
        return
    }
    sink.log(DebugLogEntry {
        category,
        component: component.to_string(),
        title,
        time,
        payload
    });
}
