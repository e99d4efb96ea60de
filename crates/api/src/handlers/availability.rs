//! # Availability Handlers
//!
//! Read-path (query) handlers for calendar grids and chatbot availability
//! listings. Unavailability is data here, never an error: every candidate
//! slot comes back tagged available or not, with an optional reason at the
//! requested disclosure level.
//!
//! ## Query strategy
//!
//! Checking N slots with the booking path's targeted queries would cost
//! O(N) round-trips. Instead the batch handler:
//!
//! 1. Validates and canonicalizes every candidate slot
//! 2. Computes the overall date range the slots span
//! 3. Fetches all blackout periods and all blocking appointments
//!    intersecting that range, two queries total
//! 4. Resolves each slot against the in-memory sets with the same
//!    resolvers the booking path uses
//!
//! Step 4 sharing the booking path's resolvers is what keeps the two paths
//! in agreement for identical data.

use std::sync::Arc;

use agendly_core::{
    availability::classify_slots,
    errors::AgendaError,
    models::{
        Appointment, AvailabilityRequest, AvailabilityResponse, BlackoutPeriod, CandidateSlot,
        DisclosureLevel, SlotCheckResponse, TimeRange,
    },
};
use axum::{
    Json,
    extract::{Query, State},
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::handlers::validation::parse_slot_fields;
use crate::{ApiState, middleware::error_handling::AppError};

/// Classifies a batch of candidate slots in one pass.
///
/// # Endpoint
///
/// ```text
/// POST /api/availability/batch
/// { "slots": [{ "professional_id": "...", "date": "2025-10-25",
///               "time": { "start": "09:00", "end": "10:00" } }],
///   "disclosure_level": "basic" }
/// ```
#[axum::debug_handler]
pub async fn batch_availability(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<AvailabilityRequest>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    if payload.slots.is_empty() {
        return Ok(Json(AvailabilityResponse { slots: Vec::new() }));
    }

    // Canonicalize every slot and track the overall date range
    let mut slots = Vec::with_capacity(payload.slots.len());
    let mut range_start: Option<NaiveDate> = None;
    let mut range_end: Option<NaiveDate> = None;

    for slot in payload.slots {
        let fields = parse_slot_fields(&slot.date, &slot.time.start, &slot.time.end)?;

        range_start = Some(range_start.map_or(fields.date, |d| d.min(fields.date)));
        range_end = Some(range_end.map_or(fields.date, |d| d.max(fields.date)));

        slots.push(CandidateSlot {
            professional_id: slot.professional_id,
            date: fields.date_text,
            time: TimeRange::new(fields.start_text, fields.end_text),
        });
    }

    // Both bounds are set once the (non-empty) loop has run
    let (range_start, range_end) = match (range_start, range_end) {
        (Some(start), Some(end)) => (start, end),
        _ => return Ok(Json(AvailabilityResponse { slots: Vec::new() })),
    };

    let (blackouts, appointments) = load_query_records(&state, range_start, range_end).await?;

    let classified = classify_slots(slots, &blackouts, &appointments, payload.disclosure_level);

    Ok(Json(AvailabilityResponse { slots: classified }))
}

/// Query parameters for the single-slot availability check
#[derive(Debug, Deserialize)]
pub struct CheckQuery {
    pub professional_id: Uuid,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    pub start: String,
    pub end: String,
    /// Disclosure level for the reason; defaults to `basic`
    pub level: Option<String>,
}

/// Single-slot availability check on the read path.
///
/// # Endpoint
///
/// ```text
/// GET /api/availability/check?professional_id=...&date=2025-10-25&start=09:00&end=10:00&level=full
/// ```
#[axum::debug_handler]
pub async fn check_availability(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<CheckQuery>,
) -> Result<Json<SlotCheckResponse>, AppError> {
    let level = match query.level.as_deref() {
        Some(value) => value.parse::<DisclosureLevel>()?,
        None => DisclosureLevel::Basic,
    };

    let fields = parse_slot_fields(&query.date, &query.start, &query.end)?;

    let slot = CandidateSlot {
        professional_id: query.professional_id,
        date: fields.date_text,
        time: TimeRange::new(fields.start_text, fields.end_text),
    };

    let (blackouts, appointments) = load_query_records(&state, fields.date, fields.date).await?;

    let mut classified = classify_slots(vec![slot], &blackouts, &appointments, level);
    let verdict = classified
        .pop()
        .ok_or_else(|| AgendaError::Internal("empty classification".to_string().into()))?;

    Ok(Json(SlotCheckResponse {
        available: verdict.available,
        reason: verdict.reason,
    }))
}

/// Query-path aggregates: every blackout period and every blocking
/// appointment intersecting the date range, fetched once.
async fn load_query_records(
    state: &ApiState,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Result<(Vec<BlackoutPeriod>, Vec<Appointment>), AppError> {
    let blackouts: Vec<BlackoutPeriod> = agendly_db::repositories::blackout::get_blackouts_in_range(
        &state.db_pool,
        range_start,
        range_end,
    )
    .await
    .map_err(AgendaError::Database)?
    .into_iter()
    .map(BlackoutPeriod::from)
    .collect();

    let appointments: Vec<Appointment> =
        agendly_db::repositories::appointment::get_appointments_in_range(
            &state.db_pool,
            range_start,
            range_end,
        )
        .await
        .map_err(AgendaError::Database)?
        .into_iter()
        .map(|row| row.into_domain())
        .collect::<eyre::Result<Vec<_>>>()
        .map_err(AgendaError::Database)?;

    Ok((blackouts, appointments))
}
