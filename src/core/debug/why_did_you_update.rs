//! Logs why a component updated: after every commit except the first, the props which differ from
//! the previous commit, including props which were added or removed.
//! Nothing is logged if no props changed (e.g. the update came from state).

use chrono::Local;
use serde_json::Value;
use crate::core::component::context::{VComponentContext, VContext, VEffectContext};
use crate::core::debug::{emit, format_time, payload};
use crate::core::debug::props::PropsSnapshot;
use crate::core::hooks::effect::{no_destructor, use_effect, UseEffectRerun};
use crate::core::hooks::state_internal::use_non_updating_state;
use crate::core::logging::entry::DebugCategory;

pub fn use_why_did_you_update(c: &mut VComponentContext<'_>, component_name: &str, props: PropsSnapshot) {
    let previous_props = use_non_updating_state(c, || None::<PropsSnapshot>);
    // Only used to label entries
    let commit_count = use_non_updating_state(c, || 0usize);
    let sink = c.component().debug_sink().clone();
    let component_name = component_name.to_string();

    use_effect(c, UseEffectRerun::OnUpdate, move |c: &mut VEffectContext<'_>| {
        let changed_props = previous_props.get(c)
            .as_ref()
            .map(|previous_props| PropsSnapshot::changed_between(previous_props, &props));
        if let Some(changed_props) = changed_props.filter(|changed_props| !changed_props.is_empty()) {
            let now = Local::now();
            emit(&sink, DebugCategory::WhyUpdate, &component_name, format!("{} - Render #{}", component_name, *commit_count.get(c)), now, payload([
                ("time", Value::from(format_time(&now))),
                ("changedProps", changed_props.to_value())
            ]));
        }

        *previous_props.get_mut(c) = Some(props);
        *commit_count.get_mut(c) += 1;
        no_destructor()
    });
}
