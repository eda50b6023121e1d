//! Blocking HTTP GET via libcurl.
//!
//! One request per call, full body accumulated in memory (registry payloads
//! and license texts are small). Bounded timeouts guard against a hung
//! registry; the original tool had none.

use std::time::Duration;

use crate::error::LicenseError;

/// Raw GET result: status code plus the full response body.
#[derive(Debug)]
pub(crate) struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Performs a GET and returns status + body. Follows redirects.
///
/// A non-2xx status is not an error here; callers decide what a 404 means
/// (the registry encodes failures in the body, the text mirror in the status).
pub(crate) fn get(url: &str) -> Result<HttpResponse, LicenseError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(Duration::from_secs(30))?;

    let mut body: Vec<u8> = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    tracing::debug!("GET {} -> HTTP {} ({} bytes)", url, status, body.len());
    Ok(HttpResponse { status, body })
}

/// True for any 2xx status.
pub(crate) fn is_success(status: u32) -> bool {
    (200..300).contains(&status)
}
