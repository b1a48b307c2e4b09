//! State which persists across updates but doesn't trigger an update when modified.
//! Equivalent to `useRef` in React. The debug hooks keep their counters and snapshots here,
//! since logging must never cause another render.

use std::any::Any;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use crate::core::component::context::{VComponentContext, VContext};

/// Index into the component's state. `Copy`, so it can be moved into effects and destructors,
/// which access the state through their own context.
pub struct NonUpdatingState<T: Any> {
    pub(super) index: usize,
    phantom: PhantomData<fn() -> T>
}

pub fn use_non_updating_state<T: Any>(c: &mut VComponentContext<'_>, initial_state: impl FnOnce() -> T) -> NonUpdatingState<T> {
    let component = c.component();
    let index = component.next_state_index;
    component.next_state_index += 1;
    if component.is_being_created() {
        if component.state.len() != index {
            panic!("unaligned hooks: state length ({}) != state index ({})", component.state.len(), index);
        }
        component.state.push(Box::new(initial_state()));
    }

    NonUpdatingState {
        index,
        phantom: PhantomData
    }
}

impl <T: Any> NonUpdatingState<T> {
    pub fn get<'b>(&self, c: &'b mut impl VContext) -> &'b T {
        c.component_imm().state
            .get(self.index).expect("unaligned hooks: state index out of bounds")
            .downcast_ref::<T>().expect("unaligned hooks: state type mismatch")
    }

    pub fn get_mut<'b>(&self, c: &'b mut impl VContext) -> &'b mut T {
        c.component().state
            .get_mut(self.index).expect("unaligned hooks: state index out of bounds")
            .downcast_mut::<T>().expect("unaligned hooks: state type mismatch")
    }
}

impl <T: Any> Debug for NonUpdatingState<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NonUpdatingState").field("index", &self.index).finish()
    }
}

impl <T: Any> Clone for NonUpdatingState<T> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            phantom: PhantomData
        }
    }
}

impl <T: Any> Copy for NonUpdatingState<T> {}
