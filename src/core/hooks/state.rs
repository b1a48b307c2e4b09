//! Persistent state which a component retains from when it's created to when it's destroyed.
//!
//! You access a reference to the state with `State::get`, and a mutable reference with `State::get_mut`.
//! The latter will trigger an update when dropped, so only use it when you intend to actually modify the state
//! or else you will get into an update loop.
//!
//! This type implements `Copy` so it can be passed between effect closures.
//! The underlying type is just an index into the component, which stores the real state,
//! so it will not de-sync with the component like a captured value would.

use std::any::Any;
use std::ops::{Deref, DerefMut};
use crate::core::component::component::VComponentHead;
use crate::core::component::context::{VComponentContext, VContext};
use crate::core::component::update_details::UpdateDetails;
use crate::core::hooks::state_internal::{NonUpdatingState, use_non_updating_state};

#[derive(Debug)]
pub struct State<T: Any>(NonUpdatingState<T>);

/// Smart pointer which allows access to the state, and schedules an update when it gets dropped.
pub struct StateDeref<'a, T: Any> {
    component: &'a mut VComponentHead,
    state: NonUpdatingState<T>
}

pub fn use_state<T: Any>(c: &mut VComponentContext<'_>, initial_state: impl FnOnce() -> T) -> State<T> {
    State(use_non_updating_state(c, initial_state))
}

impl <T: Any> State<T> {
    pub fn get<'b>(&self, c: &'b mut impl VContext) -> &'b T {
        self.0.get(c)
    }

    pub fn get_mut<'b>(&self, c: &'b mut impl VContext) -> StateDeref<'b, T> {
        StateDeref {
            component: c.component(),
            state: self.0
        }
    }
}

impl <'a, T: Any> StateDeref<'a, T> {
    fn slot(&self) -> &dyn Any {
        &**self.component.state
            .get(self.state.index).expect("unaligned hooks: state index out of bounds")
    }
}

impl <'a, T: Any> Deref for StateDeref<'a, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.slot().downcast_ref::<T>().expect("unaligned hooks: state type mismatch")
    }
}

impl <'a, T: Any> DerefMut for StateDeref<'a, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.component.state
            .get_mut(self.state.index).expect("unaligned hooks: state index out of bounds")
            .downcast_mut::<T>().expect("unaligned hooks: state type mismatch")
    }
}

impl <'a, T: Any> Drop for StateDeref<'a, T> {
    fn drop(&mut self) {
        self.component.update(UpdateDetails::SetState {
            index: self.state.index
        });
    }
}

impl <T: Any> Clone for State<T> {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}

impl <T: Any> Copy for State<T> {}
