/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Request builder, transport and response decoder
//!
//! The three steps every endpoint method goes through:
//!
//! 1. [`build_url`] attaches the token and the query parameters to an endpoint
//! 2. [`make_http_request`] issues the GET and returns the body text
//! 3. [`decode_response`] turns the body into the target model

use crate::constants::{TOKEN_PARAM, USER_AGENT};
use crate::error::AppError;
use crate::model::endpoint::Endpoint;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};

/// Builds the underlying reqwest client with the socket timeout applied
///
/// The timeout bounds both connection setup and the whole request. A zero
/// timeout is rejected with `AppError::InvalidInput`.
pub fn build_http_client(timeout_seconds: u64) -> Result<Client, AppError> {
    if timeout_seconds == 0 {
        return Err(AppError::InvalidInput(
            "timeout must be at least one second".to_string(),
        ));
    }
    let timeout = Duration::from_secs(timeout_seconds);
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(timeout)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

/// Builds the fully-qualified URL of a request
///
/// The token is always the first query parameter, followed by `params` in
/// order. Values are percent-encoded.
///
/// # Arguments
/// * `base_url` - API base URL, e.g. `https://finnhub.io/api/v1`
/// * `endpoint` - Endpoint to call
/// * `token` - API token
/// * `params` - Remaining query parameters
///
/// # Returns
/// * `Ok(Url)` - URL ready to be requested
/// * `Err(AppError::InvalidInput)` - If the base URL cannot be parsed
pub fn build_url(
    base_url: &str,
    endpoint: Endpoint,
    token: &str,
    params: &[(&str, &str)],
) -> Result<Url, AppError> {
    let query = std::iter::once((TOKEN_PARAM, token)).chain(params.iter().copied());
    Url::parse_with_params(&endpoint.url(base_url), query)
        .map_err(|e| AppError::InvalidInput(format!("invalid base url '{base_url}': {e}")))
}

/// Renders query parameters for logging, token excluded
#[must_use]
pub fn describe_params(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Executes a GET request and returns the response body
///
/// No retries are attempted. A non-success status is reported as a
/// transport error: 401 as [`AppError::Unauthorized`], 429 as
/// [`AppError::RateLimitExceeded`] and anything else as
/// [`AppError::Unexpected`].
pub async fn make_http_request(client: &Client, url: Url) -> Result<String, AppError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response.text().await?);
    }

    let body = response.text().await.unwrap_or_default();
    match status {
        StatusCode::UNAUTHORIZED => {
            error!("Unauthorized: {}", body);
            Err(AppError::Unauthorized)
        }
        StatusCode::TOO_MANY_REQUESTS => {
            error!("Rate limit exceeded: {}", body);
            Err(AppError::RateLimitExceeded)
        }
        _ => {
            error!("Request failed with status {}: {}", status, body);
            Err(AppError::Unexpected(status))
        }
    }
}

/// Decodes a JSON body into the target type
///
/// Unknown fields are ignored; a body that is not JSON or that does not
/// match the model yields [`AppError::Json`].
pub fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    Ok(serde_json::from_str(body)?)
}
