use crate::models::DbAvailability;
use chrono::{NaiveDate, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_availability(
    pool: &Pool<Postgres>,
    driver_id: Uuid,
    period_id: Uuid,
    selected_dates: &[NaiveDate],
    selected_slots: &[String],
) -> Result<DbAvailability> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating availability: id={}, driver_id={}, period_id={}",
        id,
        driver_id,
        period_id
    );

    let availability = sqlx::query_as::<_, DbAvailability>(
        r#"
        INSERT INTO availabilities (id, driver_id, period_id, selected_dates, selected_slots, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, driver_id, period_id, selected_dates, selected_slots, created_at
        "#,
    )
    .bind(id)
    .bind(driver_id)
    .bind(period_id)
    .bind(selected_dates)
    .bind(selected_slots)
    .bind(now)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Availability created successfully: id={}", id);
    Ok(availability)
}

pub async fn get_availabilities_by_period_id(
    pool: &Pool<Postgres>,
    period_id: Uuid,
) -> Result<Vec<DbAvailability>> {
    let availabilities = sqlx::query_as::<_, DbAvailability>(
        r#"
        SELECT id, driver_id, period_id, selected_dates, selected_slots, created_at
        FROM availabilities
        WHERE period_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(period_id)
    .fetch_all(pool)
    .await?;

    Ok(availabilities)
}
