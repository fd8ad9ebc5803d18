use axum::{extract::State, Json};
use std::sync::Arc;
use shiftmanager_core::{
    errors::ShiftError,
    models::{
        availability::{Availability, CreateAvailabilityRequest, CreateAvailabilityResponse},
        driver::DriverStatus,
    },
};
use tracing::warn;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn submit_availability(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateAvailabilityRequest>,
) -> Result<Json<CreateAvailabilityResponse>, AppError> {
    // Create availability in database
    let db_availability = shiftmanager_db::repositories::availability::create_availability(
        &state.db_pool,
        payload.driver_id,
        payload.period_id,
        &payload.selected_dates,
        &payload.selected_slots,
    )
    .await
    .map_err(ShiftError::Database)?;

    // Mark the driver as having responded. The insert and this update are
    // two independent writes: a failure here leaves the availability row
    // in place.
    if let Err(err) = shiftmanager_db::repositories::driver::update_driver_status(
        &state.db_pool,
        payload.driver_id,
        DriverStatus::Responded.as_str(),
    )
    .await
    {
        warn!(
            availability_id = %db_availability.id,
            driver_id = %payload.driver_id,
            "driver status update failed after availability insert"
        );
        return Err(AppError(ShiftError::Database(err)));
    }

    let response = CreateAvailabilityResponse {
        success: true,
        data: Availability {
            id: db_availability.id,
            driver_id: db_availability.driver_id,
            period_id: db_availability.period_id,
            selected_dates: db_availability.selected_dates,
            selected_slots: db_availability.selected_slots,
            created_at: db_availability.created_at,
        },
    };

    Ok(Json(response))
}
