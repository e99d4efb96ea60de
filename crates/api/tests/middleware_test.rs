use agendly_api::middleware::error_handling::AppError;
use agendly_core::errors::AgendaError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use rstest::rstest;
use serde_json::Value;

// A rejected booking is a client error, never a server fault
#[rstest]
#[case(
    AgendaError::SlotUnavailable("Organizational block: Holiday".to_string()),
    StatusCode::CONFLICT
)]
#[case(
    AgendaError::NotFound("Professional not found".to_string()),
    StatusCode::NOT_FOUND
)]
#[case(
    AgendaError::Validation("Invalid time: 9:00".to_string()),
    StatusCode::BAD_REQUEST
)]
#[case(
    AgendaError::Database(eyre::eyre!("connection refused")),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn test_error_status_mapping(#[case] error: AgendaError, #[case] expected: StatusCode) {
    let response = AppError(error).into_response();

    assert_eq!(response.status(), expected);
}

#[tokio::test]
async fn test_error_body_is_json_with_message() {
    let response =
        AppError(AgendaError::SlotUnavailable("Existing appointment".to_string())).into_response();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let body: Value = serde_json::from_slice(&bytes).expect("Body is not JSON");

    assert_eq!(body["error"], "Slot unavailable: Existing appointment");
}

#[test]
fn test_eyre_report_converts_to_database_error() {
    let err: AppError = eyre::eyre!("boom").into();

    assert!(matches!(err.0, AgendaError::Database(_)));
}
