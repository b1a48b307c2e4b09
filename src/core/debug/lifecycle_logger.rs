//! Logs a component's whole lifecycle:
//!
//! - `RENDER` every time the body runs, with the names of the props which changed
//! - `MOUNT` once after the first commit, with the initial props
//! - `UPDATE` after every later commit, with the changed props (old and new values) and all props
//! - `UNMOUNT` when the component is destroyed, with how long it lived and how many times it rendered

use chrono::{DateTime, Duration, Local};
use serde_json::Value;
use crate::core::component::context::{VComponentContext, VContext, VDestructorContext, VEffectContext};
use crate::core::debug::{emit, format_time, payload};
use crate::core::debug::props::PropsSnapshot;
use crate::core::hooks::effect::{no_destructor, use_effect, UseEffectRerun};
use crate::core::hooks::state_internal::use_non_updating_state;
use crate::core::logging::entry::DebugCategory;

/// Returned from `use_lifecycle_logger`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleInfo {
    /// Includes this render, so 1 on the first render
    pub render_count: usize,
    /// Props whose value differs from the last committed update, sorted
    pub changed_props: Vec<String>
}

pub fn use_lifecycle_logger(c: &mut VComponentContext<'_>, component_name: &str, props: PropsSnapshot) -> LifecycleInfo {
    let render_count = use_non_updating_state(c, || 0usize);
    // Starts as the first render's props, so the first render has no changes
    let previous_props = use_non_updating_state(c, || props.clone());
    let mount_time = use_non_updating_state(c, || None::<DateTime<Local>>);

    *render_count.get_mut(c) += 1;
    let current_render_count = *render_count.get(c);
    let changed_props = props.changed_since(previous_props.get(c));
    let sink = c.component().debug_sink().clone();

    use_effect(c, UseEffectRerun::OnCreate, {
        let component_name = component_name.to_string();
        let props = props.clone();
        let sink = sink.clone();
        move |c: &mut VEffectContext<'_>| {
            let now = Local::now();
            *mount_time.get_mut(c) = Some(now);
            emit(&sink, DebugCategory::Mount, &component_name, component_name.clone(), now, payload([
                ("time", Value::from(format_time(&now))),
                ("props", props.to_value())
            ]));

            move |c: &mut VDestructorContext<'_>| {
                let now = Local::now();
                let lifetime = match *mount_time.get(c) {
                    None => Duration::zero(),
                    Some(mount_time) => (now - mount_time).max(Duration::zero())
                };
                let lifetime_ms = lifetime.num_milliseconds();
                emit(&sink, DebugCategory::Unmount, &component_name, component_name.clone(), now, payload([
                    ("time", Value::from(format_time(&now))),
                    ("lifetime", Value::from(format!("{}ms", lifetime_ms))),
                    ("lifetimeMs", Value::from(lifetime_ms)),
                    ("totalRenders", Value::from(*render_count.get(c)))
                ]));
            }
        }
    });

    use_effect(c, UseEffectRerun::OnUpdate, {
        let component_name = component_name.to_string();
        let changed_props = changed_props.clone();
        let sink = sink.clone();
        move |c: &mut VEffectContext<'_>| {
            let render_count = *render_count.get(c);
            if render_count > 1 {
                let now = Local::now();
                let changed_props = if changed_props.is_empty() {
                    Value::from("No props changed")
                } else {
                    changed_props.to_value()
                };
                emit(&sink, DebugCategory::Update, &component_name, format!("{} - Render #{}", component_name, render_count), now, payload([
                    ("time", Value::from(format_time(&now))),
                    ("changedProps", changed_props),
                    ("allProps", props.to_value())
                ]));
            }
            *previous_props.get_mut(c) = props;
            no_destructor()
        }
    });

    let changed_prop_names = changed_props.names();
    let changed_props_summary = if changed_prop_names.is_empty() {
        Value::from("none")
    } else {
        Value::from(changed_prop_names.clone())
    };
    let now = Local::now();
    emit(&sink, DebugCategory::Render, component_name, format!("{} #{}", component_name, current_render_count), now, payload([
        ("time", Value::from(format_time(&now))),
        ("changedProps", changed_props_summary)
    ]));

    LifecycleInfo {
        render_count: current_render_count,
        changed_props: changed_prop_names
    }
}
