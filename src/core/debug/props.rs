//! Snapshots of a component's props, and shallow diffs between them.
//!
//! Props are compared field by field with `Value`'s equality. An absent field is `None`, which is
//! never equal to a present field (not even `null`).

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field name -> value, for every prop passed to the component in one update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropsSnapshot(Map<String, Value>);

/// How one prop changed. `None` = the prop wasn't passed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Value>
}

/// Every changed prop, by name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ChangedProps(BTreeMap<String, PropChange>);

#[derive(Debug)]
pub enum SnapshotError {
    Serde(serde_json::Error),
    /// Props must serialize to an object (struct or map)
    NotAnObject(Value)
}

impl PropsSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a props struct (or map) via its `Serialize` impl
    pub fn try_from_props<Props: Serialize + ?Sized>(props: &Props) -> Result<Self, SnapshotError> {
        Self::try_from(serde_json::to_value(props)?)
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item=&String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    /// Props in `self` which differ from `previous`. Props only in `previous` are ignored.
    pub fn changed_since(&self, previous: &PropsSnapshot) -> ChangedProps {
        Self::diff(previous, self, self.names())
    }

    /// Props which differ between `previous` and `current`, including props only in one of them.
    pub fn changed_between(previous: &PropsSnapshot, current: &PropsSnapshot) -> ChangedProps {
        Self::diff(previous, current, previous.names().chain(current.names()))
    }

    fn diff<'a>(previous: &PropsSnapshot, current: &PropsSnapshot, names: impl Iterator<Item=&'a String>) -> ChangedProps {
        let mut changed_props = BTreeMap::new();
        for name in names {
            let from = previous.get(name);
            let to = current.get(name);
            if from != to {
                changed_props.insert(name.clone(), PropChange {
                    from: from.cloned(),
                    to: to.cloned()
                });
            }
        }
        ChangedProps(changed_props)
    }
}

impl ChangedProps {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, name: &str) -> Option<&PropChange> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Sorted
    pub fn names(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item=(&String, &PropChange)> {
        self.0.iter()
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl From<Map<String, Value>> for PropsSnapshot {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for PropsSnapshot {
    type Error = SnapshotError;

    fn try_from(value: Value) -> Result<Self, SnapshotError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            value => Err(SnapshotError::NotAnObject(value))
        }
    }
}

impl <Name: Into<String>, V: Into<Value>> FromIterator<(Name, V)> for PropsSnapshot {
    fn from_iter<T: IntoIterator<Item=(Name, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(name, value)| (name.into(), value.into())).collect())
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err)
    }
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::Serde(err) => write!(f, "props couldn't be serialized: {}", err),
            SnapshotError::NotAnObject(value) => write!(f, "props must serialize to an object, got {}", value)
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SnapshotError::Serde(err) => Some(err),
            SnapshotError::NotAnObject(_) => None
        }
    }
}
