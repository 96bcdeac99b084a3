use serde::{Deserialize, Serialize};

// region: Appointment Service Types

/// A booked appointment. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub client_name: String,
    pub date: String,
    pub time: String,
}

// endregion: Appointment Service Types
