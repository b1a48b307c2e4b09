//! Why a component updated. Traced on every update and shown when an update loop is detected.

use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use crate::core::component::component::VComponentKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateDetails {
    /// The component was just created
    CreateNew { key: VComponentKey },
    /// The component's props were replaced
    SetProps,
    /// A `State` was modified
    SetState { index: usize },
    Custom { message: Cow<'static, str> }
}

impl Display for UpdateDetails {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateDetails::CreateNew { key } => {
                write!(f, "create-new:{}", key)
            },
            UpdateDetails::SetProps => {
                write!(f, "set:props")
            },
            UpdateDetails::SetState { index } => {
                write!(f, "set:state:{}", index)
            },
            UpdateDetails::Custom { message } => {
                write!(f, "custom {}", message)
            }
        }
    }
}
