//! Request-level canonicalization shared by the booking and availability
//! handlers. Anything that fails here becomes a 400 before the availability
//! engine runs; the engine itself stays permissive per its own contract.

use agendly_core::availability::{is_valid_time_format, normalize_date, normalize_time};
use agendly_core::errors::AgendaError;
use chrono::{NaiveDate, NaiveTime};

use crate::middleware::error_handling::AppError;

/// Validated and canonicalized slot fields.
///
/// Carries both the parsed chrono values (for storage) and the canonical
/// `YYYY-MM-DD` / `HH:MM:SS` strings (for the availability engine).
pub(crate) struct SlotFields {
    pub date: NaiveDate,
    pub date_text: String,
    pub start: NaiveTime,
    pub start_text: String,
    pub end: NaiveTime,
    pub end_text: String,
}

pub(crate) fn parse_slot_fields(
    date: &str,
    start_time: &str,
    end_time: &str,
) -> Result<SlotFields, AppError> {
    let date_text = normalize_date(date);
    let date = NaiveDate::parse_from_str(&date_text, "%Y-%m-%d").map_err(|_| {
        AppError(AgendaError::Validation(format!(
            "Invalid date: {}. Expected YYYY-MM-DD",
            date
        )))
    })?;

    for value in [start_time, end_time] {
        if !is_valid_time_format(value) {
            return Err(AppError(AgendaError::Validation(format!(
                "Invalid time: {}. Expected HH:MM or HH:MM:SS",
                value
            ))));
        }
    }

    let start_text = normalize_time(start_time);
    let end_text = normalize_time(end_time);
    if start_text >= end_text {
        return Err(AppError(AgendaError::Validation(
            "start_time must be earlier than end_time".to_string(),
        )));
    }

    let start = parse_time(&start_text)?;
    let end = parse_time(&end_text)?;

    Ok(SlotFields {
        date,
        date_text,
        start,
        start_text,
        end,
        end_text,
    })
}

fn parse_time(value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .map_err(|_| AppError(AgendaError::Validation(format!("Invalid time: {}", value))))
}
