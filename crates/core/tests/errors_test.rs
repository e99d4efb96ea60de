use std::error::Error;

use agendly_core::errors::{AgendaError, AgendaResult};

#[test]
fn test_agenda_error_display() {
    let unavailable = AgendaError::SlotUnavailable("Organizational block: Holiday".to_string());
    let not_found = AgendaError::NotFound("Professional not found".to_string());
    let validation = AgendaError::Validation("Invalid time: 9:00".to_string());
    let database = AgendaError::Database(eyre::eyre!("Database connection failed"));
    let internal = AgendaError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(
        unavailable.to_string(),
        "Slot unavailable: Organizational block: Holiday"
    );
    assert_eq!(
        not_found.to_string(),
        "Resource not found: Professional not found"
    );
    assert_eq!(validation.to_string(), "Validation error: Invalid time: 9:00");
    assert!(database.to_string().contains("Database error:"));
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_unavailability_reason_accessor() {
    let unavailable = AgendaError::SlotUnavailable("Busy".to_string());
    assert_eq!(unavailable.unavailability_reason(), Some("Busy"));

    let other = AgendaError::Validation("bad input".to_string());
    assert_eq!(other.unavailability_reason(), None);
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let agenda_error = AgendaError::Internal(Box::new(io_error));

    assert!(agenda_error.source().is_some());
}

#[test]
fn test_agenda_result() {
    let result: AgendaResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: AgendaResult<i32> = Err(AgendaError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_trait_implementation() {
    let eyre_error = eyre::eyre!("Database error");
    let agenda_error = AgendaError::Database(eyre_error);

    assert!(agenda_error.to_string().contains("Database error"));
}

#[test]
fn test_box_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let boxed_error: Box<dyn Error + Send + Sync> = Box::new(io_error);
    let agenda_error = AgendaError::Internal(boxed_error);

    assert!(agenda_error.to_string().contains("IO error"));
}
