use std::fmt;
use bitflags::bitflags;
use chrono::{DateTime, Local};
use derive_more::Display;
use log::Level;
use serde::Serialize;
use serde_json::{Map, Value};

/// What happened to the component
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DebugCategory {
    #[display(fmt = "MOUNT")]
    #[serde(rename = "MOUNT")]
    Mount,
    #[display(fmt = "UPDATE")]
    #[serde(rename = "UPDATE")]
    Update,
    #[display(fmt = "UNMOUNT")]
    #[serde(rename = "UNMOUNT")]
    Unmount,
    #[display(fmt = "RENDER")]
    #[serde(rename = "RENDER")]
    Render,
    #[display(fmt = "WHY UPDATE")]
    #[serde(rename = "WHY UPDATE")]
    WhyUpdate
}

bitflags! {
    /// Set of `DebugCategory`, see `VMode::set_debug_categories`
    pub struct DebugCategories: u8 {
        const MOUNT = 0b00001;
        const UPDATE = 0b00010;
        const UNMOUNT = 0b00100;
        const RENDER = 0b01000;
        const WHY_UPDATE = 0b10000;
    }
}

impl DebugCategory {
    pub fn flag(self) -> DebugCategories {
        match self {
            DebugCategory::Mount => DebugCategories::MOUNT,
            DebugCategory::Update => DebugCategories::UPDATE,
            DebugCategory::Unmount => DebugCategories::UNMOUNT,
            DebugCategory::Render => DebugCategories::RENDER,
            DebugCategory::WhyUpdate => DebugCategories::WHY_UPDATE
        }
    }

    /// Renders are noisy, so they're logged below the lifecycle transitions
    pub fn level(self) -> Level {
        match self {
            DebugCategory::Mount | DebugCategory::Update | DebugCategory::Unmount => Level::Info,
            DebugCategory::Render | DebugCategory::WhyUpdate => Level::Debug
        }
    }

    /// Cosmetic hint for sinks which can show color
    pub fn color(self) -> &'static str {
        match self {
            DebugCategory::Mount => "#4CAF50",
            DebugCategory::Update => "#FF9800",
            DebugCategory::Unmount => "#F44336",
            DebugCategory::Render => "#2196F3",
            DebugCategory::WhyUpdate => "#9C27B0"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebugLogEntry {
    pub category: DebugCategory,
    /// Name passed to the debug hook
    pub component: String,
    /// e.g. "Counter - Render #3"
    pub title: String,
    pub time: DateTime<Local>,
    /// Field name to value
    pub payload: Map<String, Value>
}

impl DebugLogEntry {
    pub fn level(&self) -> Level {
        self.category.level()
    }

    pub fn color(&self) -> &'static str {
        self.category.color()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.payload.get(field)
    }
}

impl fmt::Display for DebugLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let payload = serde_json::to_string(&self.payload).map_err(|_| fmt::Error)?;
        write!(f, "[{}] {} {}", self.category, self.title, payload)
    }
}
