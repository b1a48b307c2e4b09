//! A `VComponent` is one instance of a component: its props, its body, the state its hooks
//! store, and the effects and destructors its hooks registered.
//!
//! Lifecycle:
//! - `new` creates the component and does the first update
//! - `update` (and `set_props`) runs the update destructors, re-runs the body, commits the output,
//!   and then runs the effects the body registered, in registration order.
//!   If state was modified during the body or effects, it updates again.
//! - `destroy` runs the update destructors and then the permanent destructors. It consumes the
//!   component, so it happens exactly once.

use std::any::Any;
use std::borrow::Cow;
use std::mem;
use std::rc::Rc;
use derivative::Derivative;
use crate::core::component::context::{VComponentContext, VDestructorContext, VEffectContext};
use crate::core::component::mode::VMode;
use crate::core::component::node::NodeId;
use crate::core::component::update_details::UpdateDetails;
use crate::core::logging::sink::{DebugSink, LogSink};

pub type VComponentKey = Cow<'static, str>;

pub(crate) type Effect = Box<dyn FnOnce(&mut VEffectContext<'_>)>;
pub(crate) type Destructor = Box<dyn FnOnce(&mut VDestructorContext<'_>)>;

/// Everything in the component which hooks access: identity, state slots, and pending updates.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct VComponentHead {
    /*readonly*/ id: NodeId,
    /*readonly*/ key: VComponentKey,
    #[derivative(Debug = "ignore")]
    pub(crate) state: Vec<Box<dyn Any>>,
    pub(crate) next_state_index: usize,
    is_being_created: bool,
    pending_updates: Vec<UpdateDetails>,
    #[derivative(Debug = "ignore")]
    debug_sink: Rc<dyn DebugSink>
}

#[derive(Default)]
pub(crate) struct VComponentEffects(pub(crate) Vec<Effect>);

#[derive(Default)]
pub(crate) struct VComponentDestructors {
    pub(crate) update: Vec<Destructor>,
    /// `None` = already run (`OnChange` destructors are run and replaced before the component is destroyed)
    pub(crate) permanent: Vec<Option<Destructor>>
}

#[derive(Derivative)]
#[derivative(Debug)]
pub struct VComponent<Props, Output = ()> {
    head: VComponentHead,
    props: Props,
    #[derivative(Debug = "ignore")]
    body: Box<dyn Fn(&mut VComponentContext<'_>, &Props) -> Output>,
    output: Option<Output>,
    #[derivative(Debug = "ignore")]
    effects: VComponentEffects,
    #[derivative(Debug = "ignore")]
    destructors: VComponentDestructors
}

impl VComponentHead {
    fn new(key: VComponentKey, debug_sink: Rc<dyn DebugSink>) -> Self {
        VComponentHead {
            id: NodeId::next(),
            key,
            state: Vec::new(),
            next_state_index: 0,
            is_being_created: true,
            pending_updates: Vec::new(),
            debug_sink
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn key(&self) -> &VComponentKey {
        &self.key
    }

    /// True during the component's first update, before its output is committed.
    pub fn is_being_created(&self) -> bool {
        self.is_being_created
    }

    /// Where the debug hooks send their entries.
    pub fn debug_sink(&self) -> &Rc<dyn DebugSink> {
        &self.debug_sink
    }

    /// Schedule another update once the current one finishes.
    pub fn update(&mut self, details: UpdateDetails) {
        self.pending_updates.push(details);
    }
}

impl <Props: 'static, Output: 'static> VComponent<Props, Output> {
    /// Creates and renders the component. Debug hooks will log through the `log` crate.
    pub fn new(
        key: impl Into<VComponentKey>,
        props: Props,
        body: impl Fn(&mut VComponentContext<'_>, &Props) -> Output + 'static
    ) -> Self {
        Self::new_with_sink(key, props, Rc::new(LogSink), body)
    }

    /// Creates and renders the component. Debug hooks will log to `debug_sink`.
    pub fn new_with_sink(
        key: impl Into<VComponentKey>,
        props: Props,
        debug_sink: Rc<dyn DebugSink>,
        body: impl Fn(&mut VComponentContext<'_>, &Props) -> Output + 'static
    ) -> Self {
        let key = key.into();
        let mut component = VComponent {
            head: VComponentHead::new(key.clone(), debug_sink),
            props,
            body: Box::new(body),
            output: None,
            effects: VComponentEffects::default(),
            destructors: VComponentDestructors::default()
        };
        component.update(UpdateDetails::CreateNew { key });
        component
    }

    pub fn head(&self) -> &VComponentHead {
        &self.head
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    /// The output of the last committed update
    pub fn output(&self) -> Option<&Output> {
        self.output.as_ref()
    }

    pub fn set_props(&mut self, props: Props) {
        self.props = props;
        self.update(UpdateDetails::SetProps);
    }

    /// Re-runs the body and effects. Keeps updating while state changes,
    /// panics if this happens more than `VMode::max_recursive_updates_before_loop_detected` times.
    pub fn update(&mut self, details: UpdateDetails) {
        let mut update_trace = Vec::new();
        let mut details = vec![details];
        loop {
            for details in details.iter() {
                log::trace!("update {} ({}): {}", self.head.key, self.head.id, details);
            }
            update_trace.append(&mut details);

            self.do_update();

            details = mem::take(&mut self.head.pending_updates);
            if details.is_empty() {
                break
            }
            let max_updates = VMode::max_recursive_updates_before_loop_detected();
            assert!(update_trace.len() < max_updates, "update loop detected:\n{}", update_trace.iter().map(|details| details.to_string()).collect::<Vec<_>>().join("\n"));
        }
    }

    fn do_update(&mut self) {
        let is_being_created = self.output.is_none();
        if !is_being_created {
            self.run_update_destructors();
        }
        self.head.is_being_created = is_being_created;
        self.head.next_state_index = 0;

        let output = {
            let mut c = VComponentContext {
                component: &mut self.head,
                effects: &mut self.effects
            };
            (self.body)(&mut c, &self.props)
        };
        if !is_being_created && self.head.next_state_index != self.head.state.len() {
            panic!("unaligned hooks: state length ({}) != state index ({})", self.head.state.len(), self.head.next_state_index);
        }

        // Commit
        self.output = Some(output);
        self.head.is_being_created = false;

        self.run_effects();
    }

    fn run_effects(&mut self) {
        for effect in mem::take(&mut self.effects.0) {
            effect(&mut VEffectContext {
                component: &mut self.head,
                destructors: &mut self.destructors
            });
        }
    }

    fn run_update_destructors(&mut self) {
        while let Some(update_destructor) = self.destructors.update.pop() {
            update_destructor(&mut VDestructorContext {
                component: &mut self.head
            })
        }
    }

    fn run_permanent_destructors(&mut self) {
        while let Some(permanent_destructor) = self.destructors.permanent.pop() {
            if let Some(permanent_destructor) = permanent_destructor {
                permanent_destructor(&mut VDestructorContext {
                    component: &mut self.head
                })
            }
        }
    }

    /// Runs the remaining destructors. Returns the last committed output.
    pub fn destroy(mut self) -> Option<Output> {
        log::trace!("destroy {} ({})", self.head.key, self.head.id);
        self.run_update_destructors();
        self.run_permanent_destructors();
        if !self.head.pending_updates.is_empty() {
            log::warn!("component {} ({}) was destroyed with pending updates", self.head.key, self.head.id);
        }
        self.output.take()
    }
}
