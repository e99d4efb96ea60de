use crate::models::DbBlackoutPeriod;
use chrono::{NaiveDate, NaiveTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_blackout_period(
    pool: &Pool<Postgres>,
    professional_id: Option<Uuid>,
    date_start: NaiveDate,
    date_end: NaiveDate,
    hours_start: Option<NaiveTime>,
    hours_end: Option<NaiveTime>,
    title: &str,
) -> Result<DbBlackoutPeriod> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating blackout period: id={}, professional_id={:?}, dates={}..{}, title={}",
        id,
        professional_id,
        date_start,
        date_end,
        title
    );

    let blackout = sqlx::query_as::<_, DbBlackoutPeriod>(
        r#"
        INSERT INTO blackout_periods (id, professional_id, date_start, date_end, hours_start, hours_end, title, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, professional_id, date_start, date_end, hours_start, hours_end, title, created_at
        "#,
    )
    .bind(id)
    .bind(professional_id)
    .bind(date_start)
    .bind(date_end)
    .bind(hours_start)
    .bind(hours_end)
    .bind(title)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(blackout)
}

/// Blackout periods active on `date` for one professional, including
/// organization-wide ones. Command-path query: one professional, one date.
pub async fn get_blackouts_for_professional_on_date(
    pool: &Pool<Postgres>,
    professional_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<DbBlackoutPeriod>> {
    tracing::debug!(
        "Getting blackouts for professional {} on {}",
        professional_id,
        date
    );

    let blackouts = sqlx::query_as::<_, DbBlackoutPeriod>(
        r#"
        SELECT id, professional_id, date_start, date_end, hours_start, hours_end, title, created_at
        FROM blackout_periods
        WHERE (professional_id = $1 OR professional_id IS NULL)
          AND date_start <= $2
          AND date_end >= $2
        ORDER BY date_start ASC
        "#,
    )
    .bind(professional_id)
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(blackouts)
}

/// All blackout periods intersecting the date range, every professional.
/// Query-path aggregate: fetched once, filtered in memory per slot.
pub async fn get_blackouts_in_range(
    pool: &Pool<Postgres>,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Result<Vec<DbBlackoutPeriod>> {
    tracing::debug!("Getting blackouts in range {}..{}", range_start, range_end);

    let blackouts = sqlx::query_as::<_, DbBlackoutPeriod>(
        r#"
        SELECT id, professional_id, date_start, date_end, hours_start, hours_end, title, created_at
        FROM blackout_periods
        WHERE date_start <= $2
          AND date_end >= $1
        ORDER BY date_start ASC
        "#,
    )
    .bind(range_start)
    .bind(range_end)
    .fetch_all(pool)
    .await?;

    Ok(blackouts)
}

pub async fn delete_blackout_period(pool: &Pool<Postgres>, id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM blackout_periods
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}
