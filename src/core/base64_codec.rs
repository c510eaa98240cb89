//! Base64 encoding and decoding.
//!
//! Standard padded Base64 is used for free-standing blobs. JWT segments
//! use the URL-safe alphabet without padding; the two variants are not
//! interchangeable.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};

use crate::error::JwtLensError;

/// Encode bytes as standard padded Base64.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode standard padded Base64 text.
///
/// # Errors
///
/// Returns [`JwtLensError::Encoding`] if the text contains characters
/// outside the standard alphabet or has invalid padding.
pub fn decode(text: &str) -> Result<Vec<u8>, JwtLensError> {
    STANDARD.decode(text).map_err(|_| JwtLensError::Encoding {
        what: "base64 input".to_string(),
    })
}

/// Encode bytes as URL-safe Base64 without padding.
pub fn encode_url(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode URL-safe unpadded Base64, naming `what` in the error.
pub fn decode_url(text: &str, what: &str) -> Result<Vec<u8>, JwtLensError> {
    URL_SAFE_NO_PAD
        .decode(text)
        .map_err(|_| JwtLensError::Encoding {
            what: what.to_string(),
        })
}
