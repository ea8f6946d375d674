use pocket_client::error::{AppError, ErrorCode, PocketError};
use reqwest::StatusCode;
use std::error::Error;

#[test]
fn test_pocket_error_display() {
    let error = PocketError::new("Missing consumer key.", "138", StatusCode::BAD_REQUEST);
    assert_eq!(
        error.to_string(),
        "pocket error 138 (http 400): Missing consumer key."
    );
}

#[test]
fn test_app_error_display_api() {
    let error = AppError::from(PocketError::new(
        "Consumer key / Access token invalid.",
        "107",
        StatusCode::UNAUTHORIZED,
    ));
    assert!(error.to_string().contains("107"));
    assert!(error.to_string().contains("401"));
    assert!(error.source().is_some());
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("url is required".to_string());
    assert_eq!(error.to_string(), "invalid input: url is required");
    assert!(error.source().is_none());
    assert!(error.as_pocket().is_none());
}

#[test]
fn test_app_error_from_json() {
    let json_error = serde_json::from_str::<serde_json::Value>("{invalid}").unwrap_err();
    let error: AppError = json_error.into();
    assert!(matches!(error, AppError::Json(_)));
    assert!(error.to_string().starts_with("json error:"));
}

#[test]
fn test_app_error_from_url() {
    let url_error = url::Url::parse("not a url").unwrap_err();
    let error: AppError = url_error.into();
    assert!(matches!(error, AppError::Url(_)));
    assert!(error.to_string().starts_with("invalid url:"));
}

#[test]
fn test_error_code_mapping() {
    let cases = [
        ("107", ErrorCode::InvalidCredentials, StatusCode::UNAUTHORIZED),
        ("138", ErrorCode::MissingConsumerKey, StatusCode::BAD_REQUEST),
        ("140", ErrorCode::MissingRedirectUri, StatusCode::BAD_REQUEST),
        ("152", ErrorCode::InvalidConsumerKey, StatusCode::FORBIDDEN),
        ("158", ErrorCode::RejectedCode, StatusCode::FORBIDDEN),
        ("159", ErrorCode::CodeAlreadyUsed, StatusCode::FORBIDDEN),
        ("181", ErrorCode::InvalidRedirectUri, StatusCode::BAD_REQUEST),
        ("182", ErrorCode::MissingCode, StatusCode::BAD_REQUEST),
        ("185", ErrorCode::CodeNotFound, StatusCode::BAD_REQUEST),
        ("199", ErrorCode::ServerIssue, StatusCode::INTERNAL_SERVER_ERROR),
    ];

    for (raw, code, status) in cases {
        let error = PocketError::new("", raw, status);
        assert_eq!(error.kind(), Some(code));
        assert_eq!(code.as_u16().to_string(), raw);
    }
}

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::CodeAlreadyUsed.to_string(), "already used code");
    assert_eq!(ErrorCode::ServerIssue.to_string(), "pocket server issue");
}

#[test]
fn test_unknown_error_code_is_kept_raw() {
    let error = PocketError::new("Rate limited", " 999 ", StatusCode::FORBIDDEN);
    assert_eq!(error.kind(), None);
    assert_eq!(error.code, " 999 ");
    assert_eq!(ErrorCode::from_header(""), None);
}
