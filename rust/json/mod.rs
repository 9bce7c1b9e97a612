//! Serialize calendars and their components to JSON, and restore them, with the ``serde`` crate.

use serde::{Deserialize, Serialize};

/// Handles the `to` and `from` JSON conversion of calendar objects.
///
/// Deserialization validates: a [`BusinessCalendar`](crate::calendars::BusinessCalendar) is
/// rebuilt through its configuration and fails on an invalid schedule.
pub trait JSON: Serialize + for<'de> Deserialize<'de> {
    /// Return a JSON string representing the object.
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Create an object from a JSON string representation.
    fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
