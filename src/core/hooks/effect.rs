use serde_json::Value;
use crate::core::component::context::{VComponentContext, VContext, VDestructorContext, VEffectContext};
use crate::core::hooks::state_internal::use_non_updating_state;

/// Determines when an effect closure is run. The destructor is run every time before the closure
/// is rerun, and before the component is destroyed.
#[derive(Debug, Clone, PartialEq)]
pub enum UseEffectRerun {
    /// Called only once when the component is created.
    /// The destructor is called only when the component is destroyed
    OnCreate,
    /// Called when the component is created, then every time it updates.
    /// The destructor is called every time the component updates until it is destroyed
    OnUpdate,
    /// Called when the component is created, then
    /// called when any of the dependencies change (pass a vec with one element for one dependency).
    /// The number of dependencies must stay the same (pass null if you have dependencies which come/go).
    /// The destructor is called before the next change, and when the component is destroyed
    OnChange(Vec<Value>)
}

/// Runs a closure according to `rerun`, after the component's output is committed.
/// The closure should contain an effect,
/// while the component's body should otherwise be a "pure" function based on its
/// props and state hooks like `use_state`.
pub fn use_effect<Destructor: FnOnce(&mut VDestructorContext<'_>) + 'static>(
    c: &mut VComponentContext<'_>,
    rerun: UseEffectRerun,
    effect: impl FnOnce(&mut VEffectContext<'_>) -> Destructor + 'static
) {
    match rerun {
        UseEffectRerun::OnCreate => {
            if c.component().is_being_created() {
                c.push_effect(Box::new(move |c: &mut VEffectContext<'_>| {
                    let destructor = effect(c);
                    c.push_permanent_destructor(Box::new(destructor));
                }))
            }
        },
        UseEffectRerun::OnUpdate => {
            c.push_effect(Box::new(move |c: &mut VEffectContext<'_>| {
                let destructor = effect(c);
                c.push_update_destructor(Box::new(destructor));
            }))
        },
        UseEffectRerun::OnChange(dependencies) => {
            let memo = use_non_updating_state(c, || None::<Vec<Value>>);
            let destructor_index = use_non_updating_state(c, || None::<usize>);

            let dependencies_changed = match memo.get(c) {
                None => true,
                Some(old_dependencies) => {
                    assert_eq!(old_dependencies.len(), dependencies.len(), "number of dependencies changed in between component update; you can't do that, only change the dependencies themselves, instead replace with nulls");
                    old_dependencies != &dependencies
                }
            };
            *memo.get_mut(c) = Some(dependencies);

            if dependencies_changed {
                c.push_effect(Box::new(move |c: &mut VEffectContext<'_>| {
                    if let Some(old_index) = *destructor_index.get(c) {
                        if let Some(old_destructor) = c.take_permanent_destructor(old_index) {
                            old_destructor(&mut c.destructor_context());
                        }
                    }
                    let new_destructor = effect(c);
                    let new_index = c.push_permanent_destructor(Box::new(new_destructor));
                    *destructor_index.get_mut(c) = Some(new_index);
                }))
            }
        }
    }
}

/// For effects which don't need cleanup
pub fn no_destructor() -> impl FnOnce(&mut VDestructorContext<'_>) + 'static {
    |_: &mut VDestructorContext<'_>| ()
}
