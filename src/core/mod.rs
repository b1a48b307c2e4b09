//! The component host, its hooks, the debug log output, and the debug hooks built on top.

pub mod component;
pub mod debug;
pub mod hooks;
pub mod logging;
