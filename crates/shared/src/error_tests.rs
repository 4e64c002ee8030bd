use super::*;

#[test]
fn test_app_error_status_codes() {
    assert_eq!(AppError::NotFound("test".into()).status_code(), 404);
    assert_eq!(AppError::Validation("test".into()).status_code(), 400);
    assert_eq!(AppError::PayloadTooLarge("test".into()).status_code(), 413);
    assert_eq!(AppError::Database("test".into()).status_code(), 500);
    assert_eq!(AppError::Internal("test".into()).status_code(), 500);
}

#[test]
fn test_app_error_error_codes() {
    assert_eq!(AppError::NotFound("test".into()).error_code(), "not_found");
    assert_eq!(
        AppError::Validation("test".into()).error_code(),
        "validation_error"
    );
    assert_eq!(
        AppError::Database("test".into()).error_code(),
        "internal_error"
    );
    assert_eq!(
        AppError::Internal("test".into()).error_code(),
        "internal_error"
    );
}

#[test]
fn test_app_error_display() {
    assert_eq!(
        format!("{}", AppError::NotFound("msg".into())),
        "Not found: msg"
    );
    assert_eq!(
        format!("{}", AppError::Validation("msg".into())),
        "Validation error: msg"
    );
    assert_eq!(
        format!("{}", AppError::Database("msg".into())),
        "Database error: msg"
    );
    assert_eq!(
        format!("{}", AppError::Internal("msg".into())),
        "Internal error: msg"
    );
}

#[test]
fn test_public_message_hides_storage_details() {
    let err = AppError::Database("connection refused on 10.0.0.3".into());
    assert_eq!(err.public_message(), "An error occurred");

    let err = AppError::Validation("name must not be empty".into());
    assert_eq!(err.public_message(), "name must not be empty");
}
