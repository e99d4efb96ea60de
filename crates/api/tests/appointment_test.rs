mod test_utils;

use agendly_api::middleware::error_handling::AppError;
use agendly_core::{
    availability::{check_slot, is_valid_time_format, normalize_date, normalize_time},
    errors::AgendaError,
    models::{AppointmentStatus, BlackoutPeriod, BookAppointmentRequest, CandidateSlot, TimeRange},
};
use agendly_db::models::{DbAppointment, DbBlackoutPeriod, DbProfessional};
use chrono::{NaiveDate, NaiveTime, Utc};
use mockall::predicate;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::test_utils::TestContext;

fn booking_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 25).unwrap()
}

fn professional_row(id: Uuid) -> DbProfessional {
    DbProfessional {
        id,
        name: "Dana Reeves".to_string(),
        created_at: Utc::now(),
    }
}

fn full_day_blackout_row(professional_id: Option<Uuid>, title: &str) -> DbBlackoutPeriod {
    DbBlackoutPeriod {
        id: Uuid::new_v4(),
        professional_id,
        date_start: booking_date(),
        date_end: booking_date(),
        hours_start: None,
        hours_end: None,
        title: title.to_string(),
        created_at: Utc::now(),
    }
}

fn appointment_row(
    professional_id: Uuid,
    start: &str,
    end: &str,
    status: &str,
) -> DbAppointment {
    DbAppointment {
        id: Uuid::new_v4(),
        professional_id,
        date: booking_date(),
        start_time: NaiveTime::parse_from_str(start, "%H:%M:%S").unwrap(),
        end_time: NaiveTime::parse_from_str(end, "%H:%M:%S").unwrap(),
        status: status.to_string(),
        code: Some("APT-42".to_string()),
        customer_name: Some("Alice Johnson".to_string()),
        created_at: Utc::now(),
    }
}

fn booking_request(professional_id: Uuid) -> BookAppointmentRequest {
    BookAppointmentRequest {
        professional_id,
        date: "2025-10-25".to_string(),
        start_time: "09:00".to_string(),
        end_time: "10:00".to_string(),
        code: None,
        customer_name: None,
    }
}

// Mirror of the booking handler's flow, run against mock repositories
// instead of a live pool.
async fn book_appointment_wrapper(
    ctx: &mut TestContext,
    payload: BookAppointmentRequest,
) -> Result<DbAppointment, AppError> {
    for value in [&payload.start_time, &payload.end_time] {
        if !is_valid_time_format(value) {
            return Err(AppError(AgendaError::Validation(format!(
                "Invalid time: {}",
                value
            ))));
        }
    }

    let date_text = normalize_date(&payload.date);
    let date = NaiveDate::parse_from_str(&date_text, "%Y-%m-%d").map_err(|_| {
        AppError(AgendaError::Validation(format!(
            "Invalid date: {}",
            date_text
        )))
    })?;

    ctx.professional_repo
        .get_professional_by_id(payload.professional_id)
        .await?
        .ok_or_else(|| {
            AppError(AgendaError::NotFound(format!(
                "Professional with ID {} not found",
                payload.professional_id
            )))
        })?;

    let blackouts: Vec<BlackoutPeriod> = ctx
        .blackout_repo
        .get_blackouts_for_professional_on_date(payload.professional_id, date)
        .await?
        .into_iter()
        .map(BlackoutPeriod::from)
        .collect();

    let appointments = ctx
        .appointment_repo
        .get_conflicting_appointments(payload.professional_id, date, None)
        .await?
        .into_iter()
        .map(|row| row.into_domain())
        .collect::<eyre::Result<Vec<_>>>()?;

    let slot = CandidateSlot {
        professional_id: payload.professional_id,
        date: date_text,
        time: TimeRange::new(
            normalize_time(&payload.start_time),
            normalize_time(&payload.end_time),
        ),
    };
    check_slot(&slot, &blackouts, &appointments)?;

    let start = NaiveTime::parse_from_str(&normalize_time(&payload.start_time), "%H:%M:%S")
        .expect("validated above");
    let end = NaiveTime::parse_from_str(&normalize_time(&payload.end_time), "%H:%M:%S")
        .expect("validated above");

    let created = ctx
        .appointment_repo
        .create_appointment(
            payload.professional_id,
            date,
            start,
            end,
            AppointmentStatus::Pending,
            None,
            None,
        )
        .await?;

    Ok(created)
}

#[tokio::test]
async fn test_book_appointment_rejects_invalid_time() {
    let mut ctx = TestContext::new();
    let mut request = booking_request(Uuid::new_v4());
    request.start_time = "9:00".to_string();

    let result = book_appointment_wrapper(&mut ctx, request).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        AgendaError::Validation(_) => {} // Expected
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_book_appointment_unknown_professional() {
    let mut ctx = TestContext::new();
    let professional_id = Uuid::new_v4();

    ctx.professional_repo
        .expect_get_professional_by_id()
        .with(predicate::eq(professional_id))
        .returning(|_| Ok(None));

    let result = book_appointment_wrapper(&mut ctx, booking_request(professional_id)).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        AgendaError::NotFound(_) => {} // Expected
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_book_appointment_blocked_by_organizational_blackout() {
    let mut ctx = TestContext::new();
    let professional_id = Uuid::new_v4();

    ctx.professional_repo
        .expect_get_professional_by_id()
        .returning(move |id| Ok(Some(professional_row(id))));

    ctx.blackout_repo
        .expect_get_blackouts_for_professional_on_date()
        .with(predicate::eq(professional_id), predicate::eq(booking_date()))
        .returning(|_, _| Ok(vec![full_day_blackout_row(None, "Holiday")]));

    ctx.appointment_repo
        .expect_get_conflicting_appointments()
        .returning(|_, _, _| Ok(vec![]));

    // No create_appointment expectation: booking must not reach the insert

    let result = book_appointment_wrapper(&mut ctx, booking_request(professional_id)).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        AgendaError::SlotUnavailable(reason) => {
            assert_eq!(reason, "Organizational block: Holiday");
        }
        e => panic!("Expected SlotUnavailable error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_book_appointment_blocked_by_existing_appointment() {
    let mut ctx = TestContext::new();
    let professional_id = Uuid::new_v4();

    ctx.professional_repo
        .expect_get_professional_by_id()
        .returning(move |id| Ok(Some(professional_row(id))));

    ctx.blackout_repo
        .expect_get_blackouts_for_professional_on_date()
        .returning(|_, _| Ok(vec![]));

    ctx.appointment_repo
        .expect_get_conflicting_appointments()
        .returning(move |id, _, _| {
            Ok(vec![appointment_row(id, "09:30:00", "10:30:00", "confirmed")])
        });

    let result = book_appointment_wrapper(&mut ctx, booking_request(professional_id)).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        AgendaError::SlotUnavailable(reason) => {
            assert_eq!(reason, "Appointment APT-42 - Alice Johnson");
        }
        e => panic!("Expected SlotUnavailable error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_book_appointment_succeeds_on_free_slot() {
    let mut ctx = TestContext::new();
    let professional_id = Uuid::new_v4();

    ctx.professional_repo
        .expect_get_professional_by_id()
        .returning(move |id| Ok(Some(professional_row(id))));

    ctx.blackout_repo
        .expect_get_blackouts_for_professional_on_date()
        .returning(|_, _| Ok(vec![]));

    // A cancelled appointment in the same slot must not block the booking
    ctx.appointment_repo
        .expect_get_conflicting_appointments()
        .returning(move |id, _, _| {
            Ok(vec![appointment_row(id, "09:00:00", "10:00:00", "cancelled")])
        });

    ctx.appointment_repo
        .expect_create_appointment()
        .times(1)
        .returning(|professional_id, _, _, _, _, _, _| {
            Ok(appointment_row(professional_id, "09:00:00", "10:00:00", "pending"))
        });

    let result = book_appointment_wrapper(&mut ctx, booking_request(professional_id)).await;

    assert!(result.is_ok());
    let created = result.unwrap();
    assert_eq!(created.professional_id, professional_id);
    assert_eq!(created.status, "pending");
}
