//! Tests `use_lifecycle_logger`: render counting, changed props, and the order and content of
//! MOUNT / RENDER / UPDATE / UNMOUNT entries.

mod test_output;

use std::rc::Rc;
use serde_json::json;
use devolve_ui_debug::core::component::component::VComponent;
use devolve_ui_debug::core::component::context::VEffectContext;
use devolve_ui_debug::core::component::mode::VMode;
use devolve_ui_debug::core::debug::lifecycle_logger::use_lifecycle_logger;
use devolve_ui_debug::core::debug::props::PropsSnapshot;
use devolve_ui_debug::core::debug::why_did_you_update::use_why_did_you_update;
use devolve_ui_debug::core::hooks::effect::{no_destructor, use_effect, UseEffectRerun};
use devolve_ui_debug::core::hooks::state::use_state;
use devolve_ui_debug::core::logging::entry::{DebugCategories, DebugCategory};
use devolve_ui_debug::core::logging::sink::MemorySink;
use test_output::{logged_component, rerender, snapshot, ResetMode};

#[test]
fn test_render_count_equals_evaluations() {
    let sink = MemorySink::new();
    let mut component = logged_component(&sink, json!({ "a": 1 }));
    assert_eq!(component.output().unwrap().render_count, 1);
    for _ in 0..4 {
        component.update(rerender());
    }
    assert_eq!(component.output().unwrap().render_count, 5);
    assert_eq!(sink.of_category(DebugCategory::Render).len(), 5);
}

#[test]
fn test_first_render_has_no_changes() {
    let sink = MemorySink::new();
    let component = logged_component(&sink, json!({ "a": 1, "b": "two" }));
    assert!(component.output().unwrap().changed_props.is_empty());

    let render = &sink.of_category(DebugCategory::Render)[0];
    assert_eq!(render.component, "Logged");
    assert_eq!(render.title, "Logged #1");
    assert_eq!(render.get("changedProps"), Some(&json!("none")));
}

#[test]
fn test_changed_props() {
    let sink = MemorySink::new();
    let mut component = logged_component(&sink, json!({ "a": 1, "b": 2 }));
    component.set_props(json!({ "a": 1, "b": 3 }));

    let info = component.output().unwrap();
    assert_eq!(info.render_count, 2);
    assert_eq!(info.changed_props, vec!["b".to_string()]);

    let render = sink.of_category(DebugCategory::Render).pop().unwrap();
    assert_eq!(render.title, "Logged #2");
    assert_eq!(render.get("changedProps"), Some(&json!(["b"])));

    let updates = sink.of_category(DebugCategory::Update);
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].title, "Logged - Render #2");
    assert_eq!(updates[0].get("changedProps"), Some(&json!({ "b": { "from": 2, "to": 3 } })));
    assert_eq!(updates[0].get("allProps"), Some(&json!({ "a": 1, "b": 3 })));
}

#[test]
fn test_changes_are_relative_to_last_commit() {
    let sink = MemorySink::new();
    let mut component = logged_component(&sink, json!({ "a": 1 }));
    component.set_props(json!({ "a": 2 }));
    component.set_props(json!({ "a": 2 }));
    assert!(component.output().unwrap().changed_props.is_empty());
    component.set_props(json!({ "a": 1 }));
    assert_eq!(component.output().unwrap().changed_props, vec!["a".to_string()]);
}

#[test]
fn test_update_without_changed_props() {
    let sink = MemorySink::new();
    let mut component = logged_component(&sink, json!({ "a": 1 }));
    component.update(rerender());

    let updates = sink.of_category(DebugCategory::Update);
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].get("changedProps"), Some(&json!("No props changed")));
}

#[test]
fn test_lifecycle_order() {
    let sink = MemorySink::new();
    let mut component = logged_component(&sink, json!({ "a": 1 }));
    component.set_props(json!({ "a": 2 }));
    component.update(rerender());
    component.destroy();

    assert_eq!(sink.categories(), vec![
        DebugCategory::Render,
        DebugCategory::Mount,
        DebugCategory::Render,
        DebugCategory::Update,
        DebugCategory::Render,
        DebugCategory::Update,
        DebugCategory::Unmount
    ]);
    let mount = &sink.of_category(DebugCategory::Mount)[0];
    assert_eq!(mount.title, "Logged");
    assert_eq!(mount.get("props"), Some(&json!({ "a": 1 })));
}

#[test]
fn test_unmount_lifetime() {
    let sink = MemorySink::new();
    let mut component = logged_component(&sink, json!({}));
    component.update(rerender());
    component.update(rerender());
    component.destroy();

    let mount = &sink.of_category(DebugCategory::Mount)[0];
    let unmount = &sink.of_category(DebugCategory::Unmount)[0];
    let lifetime_ms = unmount.get("lifetimeMs").and_then(|lifetime| lifetime.as_i64()).unwrap();
    assert!(lifetime_ms >= 0);
    assert_eq!(lifetime_ms, (unmount.time - mount.time).num_milliseconds());
    assert_eq!(unmount.get("lifetime"), Some(&json!(format!("{}ms", lifetime_ms))));
    assert_eq!(unmount.get("totalRenders"), Some(&json!(3)));
}

#[test]
fn test_empty_props() {
    let sink = MemorySink::new();
    let mut component = logged_component(&sink, json!({}));
    for _ in 0..3 {
        component.set_props(json!({}));
    }
    let info = component.output().unwrap();
    assert_eq!(info.render_count, 4);
    assert!(info.changed_props.is_empty());
}

#[test]
fn test_state_updates_are_logged() {
    let sink = MemorySink::new();
    let component = VComponent::new_with_sink("counting", (), Rc::new(sink.clone()), |c, _: &()| {
        let count = use_state(c, || 0);
        let info = use_lifecycle_logger(c, "Counting", PropsSnapshot::new());
        use_effect(c, UseEffectRerun::OnUpdate, move |c: &mut VEffectContext<'_>| {
            if *count.get(c) < 2 {
                *count.get_mut(c) += 1;
            }
            no_destructor()
        });
        info
    });

    assert_eq!(component.output().unwrap().render_count, 3);
    assert_eq!(sink.categories(), vec![
        DebugCategory::Render,
        DebugCategory::Mount,
        DebugCategory::Render,
        DebugCategory::Update,
        DebugCategory::Render,
        DebugCategory::Update
    ]);
}

#[test]
fn test_debug_mode_off() {
    let _reset = ResetMode;
    VMode::set_is_debug(false);
    let sink = MemorySink::new();
    let mut component = logged_component(&sink, json!({ "a": 1 }));
    component.set_props(json!({ "a": 2 }));
    assert_eq!(component.output().unwrap().render_count, 2);
    component.destroy();
    assert!(sink.is_empty());
}

#[test]
fn test_debug_categories() {
    let _reset = ResetMode;
    VMode::set_debug_categories(DebugCategories::MOUNT | DebugCategories::UNMOUNT);
    let sink = MemorySink::new();
    let mut component = logged_component(&sink, json!({ "a": 1 }));
    component.set_props(json!({ "a": 2 }));
    component.destroy();
    assert_eq!(sink.categories(), vec![DebugCategory::Mount, DebugCategory::Unmount]);
}

#[test]
fn test_mode_reset_after_failed_assertion() {
    let result = std::panic::catch_unwind(|| {
        let _reset = ResetMode;
        VMode::set_is_debug(false);
        VMode::set_debug_categories(DebugCategories::RENDER);
        panic!("assertion failed while debug mode was off");
    });
    assert!(result.is_err());
    assert!(VMode::is_debug());
    assert_eq!(VMode::debug_categories(), DebugCategories::all());

    let sink = MemorySink::new();
    logged_component(&sink, json!({ "a": 1 })).destroy();
    assert_eq!(sink.categories(), vec![DebugCategory::Render, DebugCategory::Mount, DebugCategory::Unmount]);
}

#[test]
fn test_instances_are_independent() {
    let sink = MemorySink::new();
    let mut first = logged_component(&sink, json!({ "a": 1 }));
    let second = logged_component(&sink, json!({ "a": 1 }));
    first.update(rerender());
    first.update(rerender());
    assert_eq!(first.output().unwrap().render_count, 3);
    assert_eq!(second.output().unwrap().render_count, 1);
    assert_ne!(first.head().id(), second.head().id());
}

#[test_log::test]
fn test_log_sink() {
    let mut component = VComponent::new("log-sink", json!({ "a": 1 }), |c, props| {
        use_why_did_you_update(c, "LogSink", snapshot(props));
        use_lifecycle_logger(c, "LogSink", snapshot(props))
    });
    component.set_props(json!({ "a": 2, "b": null }));
    assert_eq!(component.destroy().map(|info| info.render_count), Some(2));
}
