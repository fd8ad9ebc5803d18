/// Availability submission endpoint
pub mod availability;
/// Liveness and health endpoints
pub mod health;
/// Period creation endpoint
pub mod period;
