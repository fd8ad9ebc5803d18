use crate::models::DbPeriod;
use chrono::{DateTime, NaiveDate, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_period(
    pool: &Pool<Postgres>,
    name: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    deadline: DateTime<Utc>,
) -> Result<DbPeriod> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating period: id={}, name={}, start_date={}, end_date={}",
        id,
        name,
        start_date,
        end_date
    );

    let period = sqlx::query_as::<_, DbPeriod>(
        r#"
        INSERT INTO periods (id, name, start_date, end_date, deadline, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, start_date, end_date, deadline, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(start_date)
    .bind(end_date)
    .bind(deadline)
    .bind(now)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Period created successfully: id={}", id);
    Ok(period)
}

pub async fn get_period_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbPeriod>> {
    tracing::debug!("Getting period by id: {}", id);

    let period = sqlx::query_as::<_, DbPeriod>(
        r#"
        SELECT id, name, start_date, end_date, deadline, created_at
        FROM periods
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(period)
}
