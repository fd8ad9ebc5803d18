use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Period {
    pub id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub deadline: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePeriodRequest {
    pub name: String,
    pub dates: Vec<NaiveDate>,
    pub deadline: DateTime<Utc>,
}

impl CreatePeriodRequest {
    /// Start and end of the period, taken from the first and last entries of
    /// the submitted date sequence. A single date yields start == end;
    /// an empty sequence yields `None`.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.dates.first(), self.dates.last()) {
            (Some(start), Some(end)) => Some((*start, *end)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePeriodResponse {
    pub success: bool,
    pub period: Period,
    #[serde(rename = "emailsSent")]
    pub emails_sent: usize,
}
