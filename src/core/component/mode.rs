//! Settings you can set for all components on the current thread.
//! Currently debug mode, which debug categories are logged,
//! and the maximum recursive updates before we detect a loop and panic.

use std::cell::RefCell;
use crate::core::logging::entry::{DebugCategories, DebugCategory};

pub struct VMode {
    is_debug: bool,
    max_recursive_updates_before_loop_detected: usize,
    debug_categories: DebugCategories
}

impl VMode {
    /// If false, the debug hooks still track renders but don't log anything.
    pub fn is_debug() -> bool {
        MODE.with(|mode: &RefCell<VMode>| mode.borrow().is_debug)
    }

    pub fn set_is_debug(is_debug: bool) {
        MODE.with(|mode| mode.borrow_mut().is_debug = is_debug)
    }

    pub fn max_recursive_updates_before_loop_detected() -> usize {
        MODE.with(|mode| mode.borrow().max_recursive_updates_before_loop_detected)
    }

    pub fn set_max_recursive_updates_before_loop_detected(max_recursive_updates_before_loop_detected: usize) {
        MODE.with(|mode| mode.borrow_mut().max_recursive_updates_before_loop_detected = max_recursive_updates_before_loop_detected)
    }

    pub fn debug_categories() -> DebugCategories {
        MODE.with(|mode| mode.borrow().debug_categories)
    }

    pub fn set_debug_categories(debug_categories: DebugCategories) {
        MODE.with(|mode| mode.borrow_mut().debug_categories = debug_categories)
    }

    /// Whether an entry of this category would be sent to the debug sink.
    pub fn is_logged(category: DebugCategory) -> bool {
        MODE.with(|mode| {
            let mode = mode.borrow();
            mode.is_debug && mode.debug_categories.contains(category.flag())
        })
    }
}

thread_local! {
    static MODE: RefCell<VMode> = RefCell::new(VMode {
        is_debug: true,
        max_recursive_updates_before_loop_detected: 100,
        debug_categories: DebugCategories::all()
    });
}
