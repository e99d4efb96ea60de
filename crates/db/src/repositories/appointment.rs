use agendly_core::models::AppointmentStatus;
use chrono::{NaiveDate, NaiveTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::DbAppointment;

#[allow(clippy::too_many_arguments)]
pub async fn create_appointment(
    pool: &Pool<Postgres>,
    professional_id: Uuid,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    status: AppointmentStatus,
    code: Option<&str>,
    customer_name: Option<&str>,
) -> Result<DbAppointment> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating appointment: id={}, professional_id={}, date={}, time={}..{}",
        id,
        professional_id,
        date,
        start_time,
        end_time
    );

    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        INSERT INTO appointments (id, professional_id, date, start_time, end_time, status, code, customer_name, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, professional_id, date, start_time, end_time, status, code, customer_name, created_at
        "#,
    )
    .bind(id)
    .bind(professional_id)
    .bind(date)
    .bind(start_time)
    .bind(end_time)
    .bind(status.as_str())
    .bind(code)
    .bind(customer_name)
    .fetch_one(pool)
    .await?;

    Ok(appointment)
}

pub async fn get_appointment_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbAppointment>> {
    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, professional_id, date, start_time, end_time, status, code, customer_name, created_at
        FROM appointments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(appointment)
}

/// Blocking-status appointments for one professional on one date.
/// Command-path query; `exclude_id` keeps a reschedule from conflicting
/// with itself.
pub async fn get_conflicting_appointments(
    pool: &Pool<Postgres>,
    professional_id: Uuid,
    date: NaiveDate,
    exclude_id: Option<Uuid>,
) -> Result<Vec<DbAppointment>> {
    tracing::debug!(
        "Getting conflicting appointments for professional {} on {} (excluding {:?})",
        professional_id,
        date,
        exclude_id
    );

    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, professional_id, date, start_time, end_time, status, code, customer_name, created_at
        FROM appointments
        WHERE professional_id = $1
          AND date = $2
          AND status NOT IN ('cancelled', 'no_show')
          AND ($3::uuid IS NULL OR id <> $3)
        ORDER BY start_time ASC
        "#,
    )
    .bind(professional_id)
    .bind(date)
    .bind(exclude_id)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

/// Blocking-status appointments for every professional in the date range.
/// Query-path aggregate: fetched once, filtered in memory per slot.
pub async fn get_appointments_in_range(
    pool: &Pool<Postgres>,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Result<Vec<DbAppointment>> {
    tracing::debug!(
        "Getting appointments in range {}..{}",
        range_start,
        range_end
    );

    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, professional_id, date, start_time, end_time, status, code, customer_name, created_at
        FROM appointments
        WHERE date >= $1
          AND date <= $2
          AND status NOT IN ('cancelled', 'no_show')
        ORDER BY date ASC, start_time ASC
        "#,
    )
    .bind(range_start)
    .bind(range_end)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

pub async fn set_appointment_status(
    pool: &Pool<Postgres>,
    id: Uuid,
    status: AppointmentStatus,
) -> Result<DbAppointment> {
    tracing::debug!("Setting appointment {} status to {}", id, status);

    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        UPDATE appointments
        SET status = $2
        WHERE id = $1
        RETURNING id, professional_id, date, start_time, end_time, status, code, customer_name, created_at
        "#,
    )
    .bind(id)
    .bind(status.as_str())
    .fetch_one(pool)
    .await?;

    Ok(appointment)
}

pub async fn reschedule_appointment(
    pool: &Pool<Postgres>,
    id: Uuid,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
) -> Result<DbAppointment> {
    tracing::debug!(
        "Rescheduling appointment {} to {} {}..{}",
        id,
        date,
        start_time,
        end_time
    );

    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        UPDATE appointments
        SET date = $2, start_time = $3, end_time = $4
        WHERE id = $1
        RETURNING id, professional_id, date, start_time, end_time, status, code, customer_name, created_at
        "#,
    )
    .bind(id)
    .bind(date)
    .bind(start_time)
    .bind(end_time)
    .fetch_one(pool)
    .await?;

    Ok(appointment)
}
