//! `use_...` hooks which provide state and effects in components.
//! See [hooks in React](https://reactjs.org/docs/hooks-intro.html) for more information.
//!
//! Hooks must be called in the same order on every update, since each one is identified by its
//! position. Calling them conditionally panics with "unaligned hooks".

pub mod effect;
pub mod state;
pub mod state_internal;
