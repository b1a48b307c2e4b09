//! Shared helpers: components whose debug output goes to a `MemorySink`.

#![allow(dead_code)]

use std::rc::Rc;
use serde_json::Value;
use devolve_ui_debug::core::component::component::VComponent;
use devolve_ui_debug::core::component::mode::VMode;
use devolve_ui_debug::core::component::update_details::UpdateDetails;
use devolve_ui_debug::core::debug::lifecycle_logger::{LifecycleInfo, use_lifecycle_logger};
use devolve_ui_debug::core::debug::props::PropsSnapshot;
use devolve_ui_debug::core::debug::why_did_you_update::use_why_did_you_update;
use devolve_ui_debug::core::logging::entry::DebugCategories;
use devolve_ui_debug::core::logging::sink::MemorySink;

pub fn snapshot(props: &Value) -> PropsSnapshot {
    PropsSnapshot::try_from(props.clone()).expect("test props must be an object")
}

/// Restores the default `VMode` when dropped, even if the test panics first
pub struct ResetMode;

impl Drop for ResetMode {
    fn drop(&mut self) {
        VMode::set_is_debug(true);
        VMode::set_debug_categories(DebugCategories::all());
    }
}

pub fn rerender() -> UpdateDetails {
    UpdateDetails::Custom { message: "rerender".into() }
}

/// Component named "Logged" which only calls `use_lifecycle_logger`
pub fn logged_component(sink: &MemorySink, props: Value) -> VComponent<Value, LifecycleInfo> {
    VComponent::new_with_sink("logged", props, Rc::new(sink.clone()), |c, props: &Value| {
        use_lifecycle_logger(c, "Logged", snapshot(props))
    })
}

/// Component named "Why" which only calls `use_why_did_you_update`
pub fn why_component(sink: &MemorySink, props: Value) -> VComponent<Value> {
    VComponent::new_with_sink("why", props, Rc::new(sink.clone()), |c, props: &Value| {
        use_why_did_you_update(c, "Why", snapshot(props))
    })
}
