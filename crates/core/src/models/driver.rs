use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Response state of a driver for the current planning period.
///
/// Drivers start as `Pending` and move to `Responded` when they submit
/// their availability. Stored as its display string in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriverStatus {
    Pending,
    Responded,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Pending => "Pending",
            DriverStatus::Responded => "Responded",
        }
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    pub id: Uuid,
    pub first_name: String,
    pub email: String,
    pub status: DriverStatus,
    pub created_at: DateTime<Utc>,
}
