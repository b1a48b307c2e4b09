//! Debug hooks for hook-based components: log when a component mounts, renders, updates and
//! unmounts, and which props changed between updates.
//!
//! The crate carries the small component host the hooks run in (`core::component` and
//! `core::hooks`), modeled after devolve-ui: a `VComponent` owns its state slots, runs its body
//! on every update, commits the output, and then runs the effects registered by the body.
//!
//! ```rust
//! use std::rc::Rc;
//! use serde_json::json;
//! use devolve_ui_debug::core::component::component::VComponent;
//! use devolve_ui_debug::core::debug::lifecycle_logger::use_lifecycle_logger;
//! use devolve_ui_debug::core::debug::props::PropsSnapshot;
//! use devolve_ui_debug::core::logging::sink::MemorySink;
//!
//! let sink = MemorySink::new();
//! let mut counter = VComponent::new_with_sink("counter", json!({ "count": 0 }), Rc::new(sink.clone()), |c, props| {
//!     let props = PropsSnapshot::try_from(props.clone()).unwrap_or_default();
//!     use_lifecycle_logger(c, "Counter", props)
//! });
//! counter.set_props(json!({ "count": 1 }));
//! assert_eq!(counter.output().map(|info| info.render_count), Some(2));
//! counter.destroy();
//! assert_eq!(sink.entries().len(), 5);
//! ```

pub mod core;
