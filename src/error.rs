/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error types for the Pocket client
//!
//! Every failure reported by the Pocket API itself becomes an
//! [`AppError::Api`] carrying a [`PocketError`]: the message from the
//! `X-Error` header, the code from `X-Error-Code` and the HTTP status.
//! Transport and (de)serialization failures keep their source error.

use reqwest::StatusCode;
use std::fmt;

/// Result alias used across the crate
pub type PocketResult<T> = Result<T, AppError>;

/// Documented `X-Error-Code` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// 107: consumer key or access token rejected
    InvalidCredentials,
    /// 138: consumer key missing from the request
    MissingConsumerKey,
    /// 140: redirect url missing from the request
    MissingRedirectUri,
    /// 152: consumer key not recognised
    InvalidConsumerKey,
    /// 158: the user rejected the request token
    RejectedCode,
    /// 159: the request token was already exchanged
    CodeAlreadyUsed,
    /// 181: redirect uri not valid
    InvalidRedirectUri,
    /// 182: request token missing from the request
    MissingCode,
    /// 185: request token unknown
    CodeNotFound,
    /// 199: internal server problem
    ServerIssue,
}

impl ErrorCode {
    /// Parses the raw header value into a known code
    #[must_use]
    pub fn from_header(raw: &str) -> Option<Self> {
        match raw.trim() {
            "107" => Some(ErrorCode::InvalidCredentials),
            "138" => Some(ErrorCode::MissingConsumerKey),
            "140" => Some(ErrorCode::MissingRedirectUri),
            "152" => Some(ErrorCode::InvalidConsumerKey),
            "158" => Some(ErrorCode::RejectedCode),
            "159" => Some(ErrorCode::CodeAlreadyUsed),
            "181" => Some(ErrorCode::InvalidRedirectUri),
            "182" => Some(ErrorCode::MissingCode),
            "185" => Some(ErrorCode::CodeNotFound),
            "199" => Some(ErrorCode::ServerIssue),
            _ => None,
        }
    }

    /// Numeric code as sent by the API
    #[must_use]
    pub fn as_u16(&self) -> u16 {
        match self {
            ErrorCode::InvalidCredentials => 107,
            ErrorCode::MissingConsumerKey => 138,
            ErrorCode::MissingRedirectUri => 140,
            ErrorCode::InvalidConsumerKey => 152,
            ErrorCode::RejectedCode => 158,
            ErrorCode::CodeAlreadyUsed => 159,
            ErrorCode::InvalidRedirectUri => 181,
            ErrorCode::MissingCode => 182,
            ErrorCode::CodeNotFound => 185,
            ErrorCode::ServerIssue => 199,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ErrorCode::InvalidCredentials => "invalid consumer key or access token",
            ErrorCode::MissingConsumerKey => "missing consumer key",
            ErrorCode::MissingRedirectUri => "missing redirect uri",
            ErrorCode::InvalidConsumerKey => "invalid consumer key",
            ErrorCode::RejectedCode => "user rejected code",
            ErrorCode::CodeAlreadyUsed => "already used code",
            ErrorCode::InvalidRedirectUri => "invalid redirect uri",
            ErrorCode::MissingCode => "missing code",
            ErrorCode::CodeNotFound => "code not found",
            ErrorCode::ServerIssue => "pocket server issue",
        };
        write!(f, "{text}")
    }
}

/// Error reported by the Pocket API through response headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PocketError {
    /// Value of the `X-Error` header, empty when absent
    pub message: String,
    /// Value of the `X-Error-Code` header, empty when absent
    pub code: String,
    /// HTTP status of the response
    pub status: StatusCode,
}

impl PocketError {
    /// Creates a new API error
    pub fn new(message: impl Into<String>, code: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            status,
        }
    }

    /// Maps the raw code to a documented [`ErrorCode`], if known
    #[must_use]
    pub fn kind(&self) -> Option<ErrorCode> {
        ErrorCode::from_header(&self.code)
    }
}

impl fmt::Display for PocketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pocket error {} (http {}): {}",
            self.code,
            self.status.as_u16(),
            self.message
        )
    }
}

impl std::error::Error for PocketError {}

/// Main error type of the library
#[derive(Debug)]
pub enum AppError {
    /// The Pocket API answered with a non-200 status
    Api(PocketError),
    /// The request could not be sent or the body could not be read
    Network(reqwest::Error),
    /// A body could not be encoded or decoded
    Json(serde_json::Error),
    /// The configured base URL is not a valid URL
    Url(url::ParseError),
    /// A request was rejected before being sent
    InvalidInput(String),
}

impl AppError {
    /// Returns the API error if this is one
    #[must_use]
    pub fn as_pocket(&self) -> Option<&PocketError> {
        match self {
            AppError::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Api(e) => write!(f, "{e}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Url(e) => write!(f, "invalid url: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Api(e) => Some(e),
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Url(e) => Some(e),
            AppError::InvalidInput(_) => None,
        }
    }
}

impl From<PocketError> for AppError {
    fn from(e: PocketError) -> Self {
        AppError::Api(e)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<url::ParseError> for AppError {
    fn from(e: url::ParseError) -> Self {
        AppError::Url(e)
    }
}
