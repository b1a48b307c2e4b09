//! Components: instances with their own state, effects and destructors.

pub mod component;
pub mod context;
pub mod mode;
pub mod node;
pub mod update_details;
