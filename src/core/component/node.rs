use std::sync::atomic::{AtomicUsize, Ordering};
use derive_more::Display;

/// Unique identifier of a component instance. A recreated component gets a new id.
#[derive(Debug, Display, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(usize);

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

impl NodeId {
    pub fn next() -> NodeId {
        NodeId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}
