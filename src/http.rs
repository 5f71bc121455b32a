//! Blocking HTTP fetch of a remote file.

use crate::error::{Error, Result};

/// Fetch `url` with a plain HTTP GET and return the body as text.
///
/// The status code is not inspected: a 404 body is still a body. Only
/// transport failures and an empty body are errors. No retries, no
/// timeout beyond the transport default.
pub fn fetch_url(url: &str) -> Result<String> {
    let response = reqwest::blocking::get(url)
        .map_err(|e| Error::Http(format!("GET {} failed: {}", url, e)))?;

    let body = response
        .text()
        .map_err(|e| Error::Http(format!("GET {} failed: {}", url, e)))?;

    if body.is_empty() {
        return Err(Error::Http(format!("GET {} returned an empty body", url)));
    }

    Ok(body)
}
