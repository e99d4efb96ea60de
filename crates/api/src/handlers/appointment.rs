//! Booking (command path) handlers.
//!
//! Each mutation re-validates its slot against freshly queried records for
//! the target professional and date, then writes. Validation and insertion
//! are not atomic; the appointments table's exclusion constraint settles
//! the race when two bookings pass validation concurrently, and losing that
//! race is reported as the same 409 a failed validation produces.

use std::sync::Arc;

use agendly_core::{
    availability::check_slot,
    errors::AgendaError,
    models::{
        Appointment, AppointmentResponse, AppointmentStatus, BlackoutPeriod,
        BookAppointmentRequest, CandidateSlot, RescheduleAppointmentRequest, TimeRange,
    },
};
use axum::{
    Json,
    extract::{Path, State},
};
use chrono::NaiveDate;
use uuid::Uuid;

use crate::handlers::validation::parse_slot_fields;
use crate::{ApiState, middleware::error_handling::AppError};

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<BookAppointmentRequest>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let fields = parse_slot_fields(&payload.date, &payload.start_time, &payload.end_time)?;

    // Resolve the professional
    agendly_db::repositories::professional::get_professional_by_id(
        &state.db_pool,
        payload.professional_id,
    )
    .await
    .map_err(AgendaError::Database)?
    .ok_or_else(|| {
        AgendaError::NotFound(format!(
            "Professional with ID {} not found",
            payload.professional_id
        ))
    })?;

    // Fresh reads for this professional and date, then the availability check
    let (blackouts, appointments) =
        load_command_records(&state, payload.professional_id, fields.date, None).await?;

    let slot = CandidateSlot {
        professional_id: payload.professional_id,
        date: fields.date_text.clone(),
        time: TimeRange::new(fields.start_text.clone(), fields.end_text.clone()),
    };
    check_slot(&slot, &blackouts, &appointments)?;

    let row = agendly_db::repositories::appointment::create_appointment(
        &state.db_pool,
        payload.professional_id,
        fields.date,
        fields.start,
        fields.end,
        AppointmentStatus::Pending,
        payload.code.as_deref(),
        payload.customer_name.as_deref(),
    )
    .await
    .map_err(map_write_error)?;

    let appointment = row.into_domain().map_err(AgendaError::Database)?;
    Ok(Json(AppointmentResponse::from(appointment)))
}

#[axum::debug_handler]
pub async fn reschedule_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RescheduleAppointmentRequest>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let fields = parse_slot_fields(&payload.date, &payload.start_time, &payload.end_time)?;

    let existing = agendly_db::repositories::appointment::get_appointment_by_id(&state.db_pool, id)
        .await
        .map_err(AgendaError::Database)?
        .ok_or_else(|| AgendaError::NotFound(format!("Appointment with ID {} not found", id)))?
        .into_domain()
        .map_err(AgendaError::Database)?;

    // The appointment being moved must not conflict with itself
    let (blackouts, appointments) =
        load_command_records(&state, existing.professional_id, fields.date, Some(id)).await?;

    let slot = CandidateSlot {
        professional_id: existing.professional_id,
        date: fields.date_text.clone(),
        time: TimeRange::new(fields.start_text.clone(), fields.end_text.clone()),
    };
    check_slot(&slot, &blackouts, &appointments)?;

    let row = agendly_db::repositories::appointment::reschedule_appointment(
        &state.db_pool,
        id,
        fields.date,
        fields.start,
        fields.end,
    )
    .await
    .map_err(map_write_error)?;

    let appointment = row.into_domain().map_err(AgendaError::Database)?;
    Ok(Json(AppointmentResponse::from(appointment)))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<AppointmentResponse>, AppError> {
    agendly_db::repositories::appointment::get_appointment_by_id(&state.db_pool, id)
        .await
        .map_err(AgendaError::Database)?
        .ok_or_else(|| AgendaError::NotFound(format!("Appointment with ID {} not found", id)))?;

    let row = agendly_db::repositories::appointment::set_appointment_status(
        &state.db_pool,
        id,
        AppointmentStatus::Cancelled,
    )
    .await
    .map_err(AgendaError::Database)?;

    let appointment = row.into_domain().map_err(AgendaError::Database)?;
    Ok(Json(AppointmentResponse::from(appointment)))
}

/// Command-path record sets: blackouts for the professional (or
/// organization-wide) active on the date, and blocking appointments on the
/// date, optionally excluding the appointment being rescheduled.
async fn load_command_records(
    state: &ApiState,
    professional_id: Uuid,
    date: NaiveDate,
    exclude_id: Option<Uuid>,
) -> Result<(Vec<BlackoutPeriod>, Vec<Appointment>), AppError> {
    let blackouts: Vec<BlackoutPeriod> =
        agendly_db::repositories::blackout::get_blackouts_for_professional_on_date(
            &state.db_pool,
            professional_id,
            date,
        )
        .await
        .map_err(AgendaError::Database)?
        .into_iter()
        .map(BlackoutPeriod::from)
        .collect();

    let appointments: Vec<Appointment> =
        agendly_db::repositories::appointment::get_conflicting_appointments(
            &state.db_pool,
            professional_id,
            date,
            exclude_id,
        )
        .await
        .map_err(AgendaError::Database)?
        .into_iter()
        .map(|row| row.into_domain())
        .collect::<eyre::Result<Vec<_>>>()
        .map_err(AgendaError::Database)?;

    Ok((blackouts, appointments))
}

/// Losing the validate-then-insert race trips the appointments exclusion
/// constraint (SQLSTATE 23P01). Surface it as the same conflict a failed
/// validation reports instead of a server fault.
fn map_write_error(err: eyre::Report) -> AppError {
    let is_exclusion_violation = err
        .downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .and_then(|db| db.code())
        .is_some_and(|code| code == "23P01");

    if is_exclusion_violation {
        AppError(AgendaError::SlotUnavailable(
            "Existing appointment".to_string(),
        ))
    } else {
        AppError(AgendaError::Database(err))
    }
}
