//! URL parameter encoding and scheme fixup.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use url::Url;

use crate::error::{Error, Result};

/// Base64 with the RFC 4648 §5 URL-safe alphabet, padding stripped.
pub fn base64url_encode(data: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

/// Inverse of [`base64url_encode`]. Padded input is tolerated.
pub fn base64url_decode(text: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(text.trim_end_matches('='))
        .map_err(|e| Error::Decode(format!("Invalid base64url text: {}", e)))
}

/// Prefix `http://` when `url` parses without a scheme.
///
/// Anything that parses with a scheme, or fails to parse for another
/// reason, passes through unchanged.
pub fn ensure_url_scheme(url: &str) -> String {
    match Url::parse(url) {
        Ok(_) => url.to_string(),
        Err(url::ParseError::RelativeUrlWithoutBase) => format!("http://{}", url),
        Err(_) => url.to_string(),
    }
}
