use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::time::Duration;
use serde::Serialize;

/// One line in a log file: time since the log started, then the data
#[derive(Debug, Serialize)]
#[cfg_attr(not(feature = "logging"), allow(dead_code))]
pub(super) struct LogEntry<T> {
    pub time: Duration,
    pub data: T
}

#[derive(Debug)]
pub enum LogError {
    IO(io::Error),
    Serde(serde_json::Error)
}

pub type LogResult = Result<(), LogError>;

impl From<io::Error> for LogError {
    fn from(err: io::Error) -> Self {
        Self::IO(err)
    }
}

impl From<serde_json::Error> for LogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err)
    }
}

impl Display for LogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogError::IO(err) => write!(f, "io error: {}", err),
            LogError::Serde(err) => write!(f, "serialization error: {}", err)
        }
    }
}

impl Error for LogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LogError::IO(err) => Some(err),
            LogError::Serde(err) => Some(err)
        }
    }
}
