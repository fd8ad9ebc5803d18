/// Availability submission handler
pub mod availability;
/// Period creation and notification handler
pub mod period;
