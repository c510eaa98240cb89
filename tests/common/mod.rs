//! Shared test fixtures and helper utilities.
//!
//! Provides pre-built JWT tokens with known claims and an independent
//! HS256 implementation (`jsonwebtoken`) to cross-check signing.
#![allow(dead_code)]

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// A valid HS256-signed JWT for testing.
///
/// Header: `{"alg":"HS256","typ":"JWT"}`
/// Payload: `{"sub":"1234567890","name":"John Doe","iat":1516239022}`
/// Secret: `"your-256-bit-secret"`
pub const VALID_HS256_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
     eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.\
     SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";

/// Secret that signed [`VALID_HS256_TOKEN`].
pub const VALID_HS256_SECRET: &str = "your-256-bit-secret";

/// A malformed token with only two parts (missing signature).
pub const MALFORMED_TOKEN_TWO_PARTS: &str = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0";

/// A three-part token whose payload segment is not base64url.
pub const INVALID_BASE64_PAYLOAD_TOKEN: &str = "e30.not-valid-base64!!.sig";

/// A 128-bit AES key as hex.
pub const AES_128_KEY_HEX: &str = "000102030405060708090a0b0c0d0e0f";

/// A 256-bit AES key as hex.
pub const AES_256_KEY_HEX: &str =
    "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

/// Create an HS256-signed token with the given claims using `jsonwebtoken`.
pub fn create_hs256_token(secret: &str, claims: &serde_json::Value) -> String {
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());
    jsonwebtoken::encode(&header, claims, &key).unwrap()
}

/// Check an HS256 signature with `jsonwebtoken`, ignoring registered claims.
pub fn hs256_signature_is_valid(token: &str, secret: &str) -> bool {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;
    validation.validate_aud = false;

    jsonwebtoken::decode::<serde_json::Value>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .is_ok()
}

/// Standard test claims used across signing tests.
pub fn standard_claims() -> serde_json::Value {
    serde_json::json!({
        "sub": "1234567890",
        "name": "Test User",
        "iat": 1516239022,
        "roles": ["admin", "dev"]
    })
}
