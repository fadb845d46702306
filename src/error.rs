//! Tracker Errors
//!
//! Error taxonomy shared by the item store, persistence and coordinator.
//! None of these reach the user: the coordinator turns every one of them
//! into a no-op or an empty collection.

/// Common result type for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Tracker-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// Blank or non-numeric form input
    InvalidInput(String),
    /// Lookup miss or stale selection
    NotFound(String),
    /// Stored value could not be decoded into a list of items
    MalformedPersistedState(String),
    /// Backend read/write failure (storage unavailable, quota exceeded)
    Storage(String),
}

impl std::fmt::Display for TrackerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackerError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            TrackerError::NotFound(msg) => write!(f, "Not found: {}", msg),
            TrackerError::MalformedPersistedState(msg) => write!(f, "Malformed persisted state: {}", msg),
            TrackerError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for TrackerError {}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::MalformedPersistedState(err.to_string())
    }
}
