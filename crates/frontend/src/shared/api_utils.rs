//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and bounding
//! request time.

use futures::future::{select, Either};
use std::future::Future;

/// Backend port, overridable at build time with `API_PORT`
const DEFAULT_API_PORT: &str = "3000";

fn api_port() -> &'static str {
    option_env!("API_PORT").unwrap_or(DEFAULT_API_PORT)
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using the backend port. The backend also serves the bundle, so in
/// production this is the page's own origin.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available (relative URLs are used)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, api_port())
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/contact");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Races `request` against `timeout`; whichever finishes first wins.
/// A timeout becomes `Err("Request timed out")`, the request future is dropped.
pub async fn with_timeout<R, T, V, E>(request: R, timeout: T) -> Result<V, E>
where
    R: Future<Output = Result<V, E>>,
    T: Future<Output = ()>,
    E: From<String>,
{
    futures::pin_mut!(request, timeout);
    match select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(E::from("Request timed out".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{pending, ready};

    #[test]
    fn test_request_first_wins() {
        let result = block_on(with_timeout(ready(Ok::<_, String>(7)), pending::<()>()));
        assert_eq!(result, Ok(7));
    }

    #[test]
    fn test_request_error_passes_through() {
        let result = block_on(with_timeout(
            ready(Err::<u8, _>("Server error: 500".to_string())),
            pending::<()>(),
        ));
        assert_eq!(result, Err("Server error: 500".to_string()));
    }

    #[test]
    fn test_timeout_first_is_error() {
        let result = block_on(with_timeout(pending::<Result<u8, String>>(), ready(())));
        assert_eq!(result, Err("Request timed out".to_string()));
    }

    #[test]
    fn test_api_port_default() {
        if option_env!("API_PORT").is_none() {
            assert_eq!(api_port(), "3000");
        }
    }
}
