//! Redirect interception for todo service responses.
//!
//! The service answers `302 Found` when the session is not signed in and points
//! `Location` at its sign-in flow. The HTTP client is built with redirects
//! disabled so those responses surface here; they are turned into
//! [`ServiceError::Redirect`] carrying an absolute location for the front end
//! to show, and the error still propagates to the caller.

use super::ServiceError;
use reqwest::{header::LOCATION, Response, StatusCode, Url};
use tracing::{error, info};

/// Passes every response through except `302 Found`.
pub fn intercept(response: Response) -> Result<Response, ServiceError> {
    if response.status() != StatusCode::FOUND {
        return Ok(response);
    }

    let url = response.url().clone();
    match response.headers().get(LOCATION).and_then(|value| value.to_str().ok()) {
        Some(location) => {
            let location = resolve(&url, location);
            info!(from = %url, to = %location, "todo service requested navigation");
            Err(ServiceError::Redirect { location })
        }
        None => {
            error!(url = %url, "Location header not found in the redirect response");
            Err(ServiceError::RedirectWithoutLocation { url: url.to_string() })
        }
    }
}

/// Resolves a possibly relative `Location` against the request URL.
pub fn resolve(request_url: &Url, location: &str) -> String {
    request_url
        .join(location)
        .map(|url| url.to_string())
        .unwrap_or_else(|_| location.to_string())
}
