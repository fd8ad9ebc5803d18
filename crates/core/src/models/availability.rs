use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Availability {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub period_id: Uuid,
    pub selected_dates: Vec<NaiveDate>,
    pub selected_slots: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Submission payload sent by the driver-facing frontend; its keys are
/// camelCase on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAvailabilityRequest {
    pub driver_id: Uuid,
    pub period_id: Uuid,
    pub selected_dates: Vec<NaiveDate>,
    pub selected_slots: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAvailabilityResponse {
    pub success: bool,
    pub data: Availability,
}
