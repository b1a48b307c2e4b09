//! `VContext` is passed to component bodies, effects, and destructors. It gives access to the
//! component's state, and the context passed to bodies also lets you register hooks.
//! Contexts contain references so they can't outlive the scope they are passed to:
//! an effect gets a fresh `VEffectContext` instead of capturing the body's context.

use crate::core::component::component::{Destructor, Effect, VComponentDestructors, VComponentEffects, VComponentHead};

/// Passed to the component body
pub struct VComponentContext<'a> {
    pub(crate) component: &'a mut VComponentHead,
    pub(crate) effects: &'a mut VComponentEffects
}

/// Passed to effects, after the component's output is committed
pub struct VEffectContext<'a> {
    pub(crate) component: &'a mut VComponentHead,
    pub(crate) destructors: &'a mut VComponentDestructors
}

/// Passed to destructors
pub struct VDestructorContext<'a> {
    pub(crate) component: &'a mut VComponentHead
}

pub trait VContext {
    fn component(&mut self) -> &mut VComponentHead;

    fn component_imm(&self) -> &VComponentHead;
}

impl <'a> VContext for VComponentContext<'a> {
    fn component(&mut self) -> &mut VComponentHead {
        self.component
    }

    fn component_imm(&self) -> &VComponentHead {
        &*self.component
    }
}

impl <'a> VComponentContext<'a> {
    pub(crate) fn push_effect(&mut self, effect: Effect) {
        self.effects.0.push(effect);
    }
}

impl <'a> VContext for VEffectContext<'a> {
    fn component(&mut self) -> &mut VComponentHead {
        self.component
    }

    fn component_imm(&self) -> &VComponentHead {
        &*self.component
    }
}

impl <'a> VEffectContext<'a> {
    /// Context for running a destructor early, e.g. when an `OnChange` effect reruns.
    pub fn destructor_context(&mut self) -> VDestructorContext<'_> {
        VDestructorContext {
            component: &mut *self.component
        }
    }

    pub(crate) fn push_update_destructor(&mut self, destructor: Destructor) {
        self.destructors.update.push(destructor);
    }

    /// Returns the index to pass to `take_permanent_destructor`
    pub(crate) fn push_permanent_destructor(&mut self, destructor: Destructor) -> usize {
        self.destructors.permanent.push(Some(destructor));
        self.destructors.permanent.len() - 1
    }

    /// The slot is left empty so other indices stay valid
    pub(crate) fn take_permanent_destructor(&mut self, index: usize) -> Option<Destructor> {
        self.destructors.permanent.get_mut(index).and_then(Option::take)
    }
}

impl <'a> VContext for VDestructorContext<'a> {
    fn component(&mut self) -> &mut VComponentHead {
        self.component
    }

    fn component_imm(&self) -> &VComponentHead {
        &*self.component
    }
}
