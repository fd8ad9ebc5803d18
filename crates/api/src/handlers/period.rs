//! # Period Handlers
//!
//! Creating a planning period is a two-step sequence against external
//! services: insert the period row, then notify every registered driver by
//! email. The two steps are not transactional; an email failure does not
//! roll back the insert. The notification fan-out issues all dispatches
//! concurrently and joins them before responding, collecting a
//! per-recipient outcome so a partial failure names the recipients that
//! were not reached.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use futures_util::future::join_all;
use std::sync::Arc;
use shiftmanager_core::{
    errors::ShiftError,
    models::period::{CreatePeriodRequest, CreatePeriodResponse, Period},
};
use shiftmanager_db::models::DbDriver;
use shiftmanager_mail::{template, Notifier};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Outcome of a single dispatch within the notification fan-out.
#[derive(Debug, Clone)]
pub struct DeliveryOutcome {
    pub driver_id: Uuid,
    pub email: String,
    pub error: Option<String>,
}

impl DeliveryOutcome {
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }
}

#[axum::debug_handler]
pub async fn create_period(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreatePeriodRequest>,
) -> Result<Json<CreatePeriodResponse>, AppError> {
    // Period bounds come from the first and last submitted dates
    let (start_date, end_date) = payload.date_bounds().ok_or_else(|| {
        AppError(ShiftError::Validation(
            "dates must contain at least one entry".to_string(),
        ))
    })?;

    // Create period in database
    let db_period = shiftmanager_db::repositories::period::create_period(
        &state.db_pool,
        &payload.name,
        start_date,
        end_date,
        payload.deadline,
    )
    .await
    .map_err(ShiftError::Database)?;

    // Fetch all drivers to notify
    let drivers = shiftmanager_db::repositories::driver::list_drivers(&state.db_pool)
        .await
        .map_err(ShiftError::Database)?;

    // Send one email per driver, concurrently
    let outcomes = notify_drivers(
        state.mailer.as_ref(),
        &state.app_base_url,
        db_period.id,
        &payload.name,
        payload.deadline,
        &drivers,
    )
    .await;

    let failed: Vec<&DeliveryOutcome> = outcomes.iter().filter(|o| o.failed()).collect();
    if !failed.is_empty() {
        // Emails already accepted by the provider are not recalled; the
        // period row stays in place.
        let recipients = failed
            .iter()
            .map(|o| o.email.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        warn!(
            period_id = %db_period.id,
            failed = failed.len(),
            total = outcomes.len(),
            "notification fan-out failed for some recipients"
        );
        return Err(AppError(ShiftError::Notification(format!(
            "{} of {} notification emails failed (recipients: {})",
            failed.len(),
            outcomes.len(),
            recipients
        ))));
    }

    info!(
        period_id = %db_period.id,
        emails_sent = drivers.len(),
        "period created and drivers notified"
    );

    let response = CreatePeriodResponse {
        success: true,
        period: Period {
            id: db_period.id,
            name: db_period.name,
            start_date: db_period.start_date,
            end_date: db_period.end_date,
            deadline: db_period.deadline,
            created_at: db_period.created_at,
        },
        emails_sent: drivers.len(),
    };

    Ok(Json(response))
}

/// Dispatches one notification email per driver and collects a
/// per-recipient outcome.
///
/// All sends are issued concurrently with no ordering guarantee between
/// recipients; a failed send does not stop the others.
pub async fn notify_drivers(
    mailer: &dyn Notifier,
    app_base_url: &str,
    period_id: Uuid,
    period_name: &str,
    deadline: DateTime<Utc>,
    drivers: &[DbDriver],
) -> Vec<DeliveryOutcome> {
    let sends = drivers.iter().map(|driver| {
        let message = template::period_notification(
            app_base_url,
            &driver.first_name,
            &driver.email,
            period_id,
            driver.id,
            period_name,
            deadline,
        );
        async move {
            let result = mailer.send(&message).await;
            if let Some(err) = result.as_ref().err() {
                warn!(driver_id = %driver.id, email = %driver.email, error = %err, "email dispatch failed");
            }
            DeliveryOutcome {
                driver_id: driver.id,
                email: driver.email.clone(),
                error: result.err().map(|e| e.to_string()),
            }
        }
    });

    join_all(sends).await
}
