use crate::models::DbDriver;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_driver(
    pool: &Pool<Postgres>,
    first_name: &str,
    email: &str,
) -> Result<DbDriver> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let driver = sqlx::query_as::<_, DbDriver>(
        r#"
        INSERT INTO drivers (id, first_name, email, status, created_at)
        VALUES ($1, $2, $3, 'Pending', $4)
        RETURNING id, first_name, email, status, created_at
        "#,
    )
    .bind(id)
    .bind(first_name)
    .bind(email)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(driver)
}

pub async fn list_drivers(pool: &Pool<Postgres>) -> Result<Vec<DbDriver>> {
    tracing::debug!("Listing all drivers");

    let drivers = sqlx::query_as::<_, DbDriver>(
        r#"
        SELECT id, first_name, email, status, created_at
        FROM drivers
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    tracing::debug!("Found {} drivers", drivers.len());
    Ok(drivers)
}

pub async fn get_driver_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbDriver>> {
    let driver = sqlx::query_as::<_, DbDriver>(
        r#"
        SELECT id, first_name, email, status, created_at
        FROM drivers
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(driver)
}

pub async fn update_driver_status(
    pool: &Pool<Postgres>,
    id: Uuid,
    status: &str,
) -> Result<DbDriver> {
    tracing::debug!("Updating driver status: id={}, status={}", id, status);

    let driver = sqlx::query_as::<_, DbDriver>(
        r#"
        UPDATE drivers
        SET status = $2
        WHERE id = $1
        RETURNING id, first_name, email, status, created_at
        "#,
    )
    .bind(id)
    .bind(status)
    .fetch_one(pool)
    .await?;

    Ok(driver)
}
