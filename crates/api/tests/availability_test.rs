mod test_utils;

use agendly_api::middleware::error_handling::AppError;
use agendly_core::{
    availability::{classify_slots, is_valid_time_format, normalize_date, normalize_time},
    errors::AgendaError,
    models::{
        AvailabilityRequest, AvailabilityResponse, BlackoutPeriod, CandidateSlot, DisclosureLevel,
        TimeRange,
    },
};
use agendly_db::models::DbBlackoutPeriod;
use chrono::{NaiveDate, Utc};
use mockall::predicate;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::test_utils::TestContext;

fn date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
}

fn candidate(professional_id: Uuid, day: &str, start: &str, end: &str) -> CandidateSlot {
    CandidateSlot {
        professional_id,
        date: day.to_string(),
        time: TimeRange::new(start, end),
    }
}

fn full_day_blackout_row(day: &str, title: &str) -> DbBlackoutPeriod {
    DbBlackoutPeriod {
        id: Uuid::new_v4(),
        professional_id: None,
        date_start: date(day),
        date_end: date(day),
        hours_start: None,
        hours_end: None,
        title: title.to_string(),
        created_at: Utc::now(),
    }
}

// Mirror of the batch availability handler's flow, run against mock
// repositories instead of a live pool.
async fn batch_availability_wrapper(
    ctx: &mut TestContext,
    payload: AvailabilityRequest,
) -> Result<AvailabilityResponse, AppError> {
    if payload.slots.is_empty() {
        return Ok(AvailabilityResponse { slots: Vec::new() });
    }

    let mut slots = Vec::with_capacity(payload.slots.len());
    let mut range_start: Option<NaiveDate> = None;
    let mut range_end: Option<NaiveDate> = None;

    for slot in payload.slots {
        for value in [&slot.time.start, &slot.time.end] {
            if !is_valid_time_format(value) {
                return Err(AppError(AgendaError::Validation(format!(
                    "Invalid time: {}",
                    value
                ))));
            }
        }

        let date_text = normalize_date(&slot.date);
        let day = NaiveDate::parse_from_str(&date_text, "%Y-%m-%d").map_err(|_| {
            AppError(AgendaError::Validation(format!(
                "Invalid date: {}",
                date_text
            )))
        })?;

        range_start = Some(range_start.map_or(day, |d| d.min(day)));
        range_end = Some(range_end.map_or(day, |d| d.max(day)));

        slots.push(CandidateSlot {
            professional_id: slot.professional_id,
            date: date_text,
            time: TimeRange::new(
                normalize_time(&slot.time.start),
                normalize_time(&slot.time.end),
            ),
        });
    }

    let (range_start, range_end) = (range_start.unwrap(), range_end.unwrap());

    let blackouts: Vec<BlackoutPeriod> = ctx
        .blackout_repo
        .get_blackouts_in_range(range_start, range_end)
        .await?
        .into_iter()
        .map(BlackoutPeriod::from)
        .collect();

    let appointments = ctx
        .appointment_repo
        .get_appointments_in_range(range_start, range_end)
        .await?
        .into_iter()
        .map(|row| row.into_domain())
        .collect::<eyre::Result<Vec<_>>>()?;

    let classified = classify_slots(slots, &blackouts, &appointments, payload.disclosure_level);

    Ok(AvailabilityResponse { slots: classified })
}

#[tokio::test]
async fn test_batch_availability_empty_request() {
    let mut ctx = TestContext::new();

    // No repository expectations: an empty batch must not hit storage
    let response = batch_availability_wrapper(
        &mut ctx,
        AvailabilityRequest {
            slots: vec![],
            disclosure_level: DisclosureLevel::Basic,
        },
    )
    .await
    .expect("empty batch must not fail");

    assert!(response.slots.is_empty());
}

#[tokio::test]
async fn test_batch_availability_rejects_invalid_time() {
    let mut ctx = TestContext::new();

    let result = batch_availability_wrapper(
        &mut ctx,
        AvailabilityRequest {
            slots: vec![candidate(Uuid::new_v4(), "2025-10-25", "9:00", "10:00")],
            disclosure_level: DisclosureLevel::Basic,
        },
    )
    .await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        AgendaError::Validation(_) => {} // Expected
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_batch_availability_fetches_overall_range_once() {
    let mut ctx = TestContext::new();
    let professional_id = Uuid::new_v4();

    // Slots span three days; both aggregate queries must be issued exactly
    // once, over the min..max date range
    ctx.blackout_repo
        .expect_get_blackouts_in_range()
        .with(
            predicate::eq(date("2025-10-24")),
            predicate::eq(date("2025-10-26")),
        )
        .times(1)
        .returning(|_, _| Ok(vec![full_day_blackout_row("2025-10-25", "Holiday")]));

    ctx.appointment_repo
        .expect_get_appointments_in_range()
        .with(
            predicate::eq(date("2025-10-24")),
            predicate::eq(date("2025-10-26")),
        )
        .times(1)
        .returning(|_, _| Ok(vec![]));

    let response = batch_availability_wrapper(
        &mut ctx,
        AvailabilityRequest {
            slots: vec![
                candidate(professional_id, "2025-10-26", "09:00", "10:00"),
                candidate(professional_id, "2025-10-25", "09:00", "10:00"),
                candidate(professional_id, "2025-10-24", "09:00", "10:00"),
            ],
            disclosure_level: DisclosureLevel::Basic,
        },
    )
    .await
    .expect("batch must not fail for business reasons");

    assert_eq!(response.slots.len(), 3);
    assert!(response.slots[0].available);
    assert!(!response.slots[1].available);
    assert_eq!(response.slots[1].reason.as_deref(), Some("Not available"));
    assert!(response.slots[2].available);
}

#[tokio::test]
async fn test_batch_availability_full_disclosure_names_blackout() {
    let mut ctx = TestContext::new();

    ctx.blackout_repo
        .expect_get_blackouts_in_range()
        .returning(|_, _| Ok(vec![full_day_blackout_row("2025-10-25", "Holiday")]));

    ctx.appointment_repo
        .expect_get_appointments_in_range()
        .returning(|_, _| Ok(vec![]));

    let response = batch_availability_wrapper(
        &mut ctx,
        AvailabilityRequest {
            slots: vec![candidate(Uuid::new_v4(), "2025-10-25", "09:00", "10:00")],
            disclosure_level: DisclosureLevel::Full,
        },
    )
    .await
    .expect("batch must not fail for business reasons");

    assert_eq!(response.slots[0].reason.as_deref(), Some("Holiday"));
}
