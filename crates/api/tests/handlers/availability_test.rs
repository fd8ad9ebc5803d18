use axum::Json;
use chrono::Utc;
use mockall::predicate;
use pretty_assertions::assert_eq;
use shiftmanager_core::{
    errors::ShiftError,
    models::{
        availability::{Availability, CreateAvailabilityRequest, CreateAvailabilityResponse},
        driver::DriverStatus,
    },
};
use shiftmanager_db::models::DbAvailability;
use uuid::Uuid;

use crate::test_utils::{date, TestContext};
use shiftmanager_api::middleware::error_handling::AppError;

// Replays the handler's insert-then-update sequence against the mock
// repositories.
async fn test_submit_availability_wrapper(
    ctx: &mut TestContext,
    request: CreateAvailabilityRequest,
) -> Result<Json<CreateAvailabilityResponse>, AppError> {
    let db_availability = ctx
        .availability_repo
        .create_availability(
            request.driver_id,
            request.period_id,
            request.selected_dates.clone(),
            request.selected_slots.clone(),
        )
        .await
        .map_err(ShiftError::Database)?;

    if let Err(err) = ctx
        .driver_repo
        .update_driver_status(request.driver_id, DriverStatus::Responded.as_str())
        .await
    {
        return Err(AppError(ShiftError::Database(err)));
    }

    Ok(Json(CreateAvailabilityResponse {
        success: true,
        data: Availability {
            id: db_availability.id,
            driver_id: db_availability.driver_id,
            period_id: db_availability.period_id,
            selected_dates: db_availability.selected_dates,
            selected_slots: db_availability.selected_slots,
            created_at: db_availability.created_at,
        },
    }))
}

fn sample_request(driver_id: Uuid, period_id: Uuid) -> CreateAvailabilityRequest {
    CreateAvailabilityRequest {
        driver_id,
        period_id,
        selected_dates: vec![date("2024-01-01"), date("2024-01-02")],
        selected_slots: vec!["morning".to_string(), "evening".to_string()],
    }
}

fn db_availability_from(request: &CreateAvailabilityRequest) -> DbAvailability {
    DbAvailability {
        id: Uuid::new_v4(),
        driver_id: request.driver_id,
        period_id: request.period_id,
        selected_dates: request.selected_dates.clone(),
        selected_slots: request.selected_slots.clone(),
        created_at: Utc::now(),
    }
}

fn responded_driver(id: Uuid) -> shiftmanager_db::models::DbDriver {
    shiftmanager_db::models::DbDriver {
        id,
        first_name: "Karim".to_string(),
        email: "karim@example.com".to_string(),
        status: "Responded".to_string(),
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_submit_availability_success() {
    let mut ctx = TestContext::new();
    let driver_id = Uuid::new_v4();
    let period_id = Uuid::new_v4();
    let request = sample_request(driver_id, period_id);
    let created = db_availability_from(&request);
    let created_clone = created.clone();

    ctx.availability_repo
        .expect_create_availability()
        .with(
            predicate::eq(driver_id),
            predicate::eq(period_id),
            predicate::eq(request.selected_dates.clone()),
            predicate::eq(request.selected_slots.clone()),
        )
        .times(1)
        .returning(move |_, _, _, _| Ok(created_clone.clone()));

    // The status update targets the driver id from the request body
    ctx.driver_repo
        .expect_update_driver_status()
        .with(predicate::eq(driver_id), predicate::eq("Responded"))
        .times(1)
        .returning(move |id, _| Ok(responded_driver(id)));

    let response = test_submit_availability_wrapper(&mut ctx, request)
        .await
        .expect("submission should succeed");

    assert!(response.0.success);
    assert_eq!(response.0.data.id, created.id);
    assert_eq!(response.0.data.driver_id, driver_id);
    assert_eq!(response.0.data.period_id, period_id);
    assert_eq!(response.0.data.selected_slots.len(), 2);
}

#[tokio::test]
async fn test_submit_availability_insert_failure_skips_status_update() {
    let mut ctx = TestContext::new();
    let driver_id = Uuid::new_v4();
    let period_id = Uuid::new_v4();

    ctx.availability_repo
        .expect_create_availability()
        .times(1)
        .returning(|_, _, _, _| Err(eyre::eyre!("insert rejected")));

    ctx.driver_repo.expect_update_driver_status().times(0);

    let result =
        test_submit_availability_wrapper(&mut ctx, sample_request(driver_id, period_id)).await;

    assert!(matches!(result, Err(AppError(ShiftError::Database(_)))));
}

#[tokio::test]
async fn test_submit_availability_status_update_failure_surfaces() {
    let mut ctx = TestContext::new();
    let driver_id = Uuid::new_v4();
    let period_id = Uuid::new_v4();
    let request = sample_request(driver_id, period_id);
    let created = db_availability_from(&request);

    // Insert succeeds, leaving the availability row behind when the
    // status update then fails
    ctx.availability_repo
        .expect_create_availability()
        .times(1)
        .returning(move |_, _, _, _| Ok(created.clone()));

    ctx.driver_repo
        .expect_update_driver_status()
        .with(predicate::eq(driver_id), predicate::eq("Responded"))
        .times(1)
        .returning(|_, _| Err(eyre::eyre!("driver row locked")));

    let result = test_submit_availability_wrapper(&mut ctx, request).await;

    assert!(matches!(result, Err(AppError(ShiftError::Database(_)))));
}

#[tokio::test]
async fn test_resubmission_creates_a_new_record() {
    let mut ctx = TestContext::new();
    let driver_id = Uuid::new_v4();
    let period_id = Uuid::new_v4();

    // No idempotency key: each submission inserts a fresh row
    ctx.availability_repo
        .expect_create_availability()
        .times(2)
        .returning(|driver_id, period_id, selected_dates, selected_slots| {
            Ok(DbAvailability {
                id: Uuid::new_v4(),
                driver_id,
                period_id,
                selected_dates,
                selected_slots,
                created_at: Utc::now(),
            })
        });

    ctx.driver_repo
        .expect_update_driver_status()
        .times(2)
        .returning(move |id, _| Ok(responded_driver(id)));

    let first = test_submit_availability_wrapper(&mut ctx, sample_request(driver_id, period_id))
        .await
        .expect("first submission should succeed");
    let second = test_submit_availability_wrapper(&mut ctx, sample_request(driver_id, period_id))
        .await
        .expect("second submission should succeed");

    assert_ne!(first.0.data.id, second.0.data.id);
}
