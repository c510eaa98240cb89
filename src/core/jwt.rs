//! JWT decoding and HS256 encoding.
//!
//! Decoding splits a raw token on `.`, base64url-decodes a segment, and
//! parses it as a JSON object. Signatures are never checked here: the
//! tool inspects tokens, it does not trust them.
//!
//! Encoding always emits an `{"alg":"HS256","typ":"JWT"}` header and
//! signs `base64url(header) + "." + base64url(payload)` with
//! HMAC-SHA256.

use hmac::{Hmac, Mac};
use serde_json::{Map, Value, json};
use sha2::Sha256;
use tracing::debug;

use crate::core::base64_codec;
use crate::error::JwtLensError;

type HmacSha256 = Hmac<Sha256>;

/// A JSON object, as carried by a JWT header or payload.
pub type Claims = Map<String, Value>;

const HEADER_SEGMENT: usize = 0;
const PAYLOAD_SEGMENT: usize = 1;

/// Decode the payload of a JWT.
///
/// Only the middle segment is inspected; the header and signature may
/// hold anything.
///
/// # Errors
///
/// Returns [`JwtLensError::InvalidTokenFormat`] if the token does not
/// have exactly three segments, [`JwtLensError::Encoding`] if the payload
/// is not valid base64url, and [`JwtLensError::Parse`] if it is not a
/// JSON object.
pub fn decode(token: &str) -> Result<Claims, JwtLensError> {
    decode_segment(token, PAYLOAD_SEGMENT, "payload")
}

/// Decode the header of a JWT.
///
/// # Errors
///
/// Same as [`decode`], applied to the first segment.
pub fn decode_header(token: &str) -> Result<Claims, JwtLensError> {
    decode_segment(token, HEADER_SEGMENT, "header")
}

/// Build an HS256-signed token carrying `payload`.
///
/// # Errors
///
/// Returns [`JwtLensError::Parse`] if the header or payload cannot be
/// serialized and [`JwtLensError::Signing`] if the HMAC cannot be keyed.
pub fn encode(payload: &Claims, secret: &str) -> Result<String, JwtLensError> {
    let header = json!({ "alg": "HS256", "typ": "JWT" });

    let header_json = serde_json::to_vec(&header).map_err(|e| json_error("header", &e))?;
    let payload_json = serde_json::to_vec(payload).map_err(|e| json_error("payload", &e))?;

    let encoded_header = base64_codec::encode_url(&header_json);
    let encoded_payload = base64_codec::encode_url(&payload_json);
    let signing_input = format!("{encoded_header}.{encoded_payload}");

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).map_err(|e| {
        JwtLensError::Signing {
            reason: e.to_string(),
        }
    })?;
    mac.update(signing_input.as_bytes());
    let signature = base64_codec::encode_url(&mac.finalize().into_bytes());

    debug!(claims = payload.len(), "encoded HS256 token");

    Ok(format!("{signing_input}.{signature}"))
}

fn decode_segment(token: &str, index: usize, what: &str) -> Result<Claims, JwtLensError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(JwtLensError::InvalidTokenFormat {
            segments: segments.len(),
        });
    }

    let bytes = base64_codec::decode_url(segments[index], what)?;
    debug!(segment = what, len = bytes.len(), "decoded token segment");

    serde_json::from_slice(&bytes).map_err(|e| json_error(what, &e))
}

fn json_error(what: &str, err: &serde_json::Error) -> JwtLensError {
    JwtLensError::Parse {
        what: what.to_string(),
        reason: err.to_string(),
    }
}
