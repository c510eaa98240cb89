//! Domain error types for jwt-lens.
//!
//! All business-logic errors are defined here using `thiserror`.
//! These errors are converted to user-friendly messages at the CLI boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while decoding, encoding, encrypting or
/// decrypting data.
#[derive(Debug, Error)]
pub enum JwtLensError {
    /// Input was not valid Base64 in the expected alphabet.
    #[error("failed to decode {what}: invalid base64 encoding")]
    Encoding {
        /// What was being decoded (e.g., "payload", "base64 input").
        what: String,
    },

    /// The AES key does not have a supported length.
    #[error("invalid AES key length {length}: must be 16 or 32 bytes")]
    InvalidKey {
        /// Length of the rejected key in bytes.
        length: usize,
    },

    /// The AES key could not be decoded from hex.
    #[error("invalid AES key: not a valid hex string")]
    InvalidKeyHex,

    /// Ciphertext is too short, misaligned, or carries bad padding.
    #[error("invalid encrypted data: {reason}")]
    InvalidInput {
        /// Description of what is wrong with the input.
        reason: String,
    },

    /// The token does not have the expected three-part structure.
    #[error("invalid token format: expected 3 segments, found {segments}")]
    InvalidTokenFormat {
        /// Number of dot-separated segments found.
        segments: usize,
    },

    /// Decoded content could not be parsed as a JSON object.
    #[error("failed to parse {what} as JSON: {reason}")]
    Parse {
        /// What was being parsed (e.g., "payload", "header").
        what: String,
        /// Description of the parsing failure.
        reason: String,
    },

    /// The HMAC signer could not be constructed.
    #[error("failed to sign token: {reason}")]
    Signing {
        /// Description of the signing failure.
        reason: String,
    },

    /// Writing output to a file failed.
    #[error("failed to write '{}': {source}", path.display())]
    Io {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
