/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{ACCEPT_HEADER, ERROR_CODE_HEADER, ERROR_HEADER, JSON_CONTENT_TYPE};
use crate::error::{AppError, PocketError, PocketResult};
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

/// Sends a JSON `POST` to the Pocket API
///
/// Only `200 OK` counts as success. Any other status is turned into an
/// [`AppError::Api`] built from the `X-Error` and `X-Error-Code` headers;
/// the body of a failed response is not read.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `url` - Full endpoint URL
/// * `body` - Request body, serialized to JSON
/// * `timeout` - Deadline for the whole request, `None` to wait indefinitely
///
/// # Example
///
/// ```ignore
/// let body = RequestTokenRequest { consumer_key: "key", redirect_uri: "app://done" };
/// let url = Url::parse("https://getpocket.com/v3/oauth/request")?;
/// let response = make_http_request(&client, url, &body, Some(Duration::from_secs(5))).await?;
/// let token: RequestTokenResponse = parse_response(response).await?;
/// ```
pub async fn make_http_request<B: Serialize + Sync + ?Sized>(
    client: &Client,
    url: Url,
    body: &B,
    timeout: Option<Duration>,
) -> PocketResult<Response> {
    let payload = serde_json::to_vec(body)?;

    debug!("POST {} (timeout: {:?})", url, timeout);

    let mut request = client
        .post(url)
        .header(ACCEPT_HEADER, "application/json")
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        .body(payload);
    if let Some(timeout) = timeout {
        request = request.timeout(timeout);
    }
    let response = request.send().await?;

    let status = response.status();
    debug!("Response status: {}", status);

    if status != StatusCode::OK {
        let err = error_from_headers(response.headers(), status);
        error!(
            "Request failed with status {}: [{}] {}",
            status, err.code, err.message
        );
        return Err(AppError::Api(err));
    }

    Ok(response)
}

/// Turns a configured timeout into a deadline; zero means none
#[must_use]
pub fn deadline(timeout: Duration) -> Option<Duration> {
    (!timeout.is_zero()).then_some(timeout)
}

/// Builds the API error carried by the headers of a failed response
#[must_use]
pub fn error_from_headers(headers: &HeaderMap, status: StatusCode) -> PocketError {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };
    PocketError::new(header(ERROR_HEADER), header(ERROR_CODE_HEADER), status)
}

/// Decodes a successful response body
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> PocketResult<T> {
    let bytes = response.bytes().await?;
    debug!("Decoding {} byte response body", bytes.len());
    Ok(serde_json::from_slice(&bytes)?)
}
