//! The single driver behind every jwt-lens invocation.
//!
//! Runs each requested operation in a fixed order (token decode, Base64
//! decode, AES decrypt, sign, encode, encrypt) and writes results to the
//! provided stdout writer. The decoded JWT goes to `--out` instead when a
//! path is configured. The first error stops the invocation.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, info};

use crate::cli::Config;
use crate::core::jwt::Claims;
use crate::core::{aes_cipher, base64_codec, jwt};
use crate::display::json_printer::{bytes_as_text, pretty_json};
use crate::error::JwtLensError;

/// What happened during an invocation.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every requested operation ran.
    Completed,
    /// No operation was requested; the caller should print usage.
    MissingInput,
}

/// Execute every operation requested by `config`.
///
/// # Errors
///
/// Returns the first operation error, with the flag that caused it
/// attached as context.
pub fn execute<W: Write>(config: Config, stdout: &mut W) -> Result<Outcome> {
    if !config.has_operation() {
        return Ok(Outcome::MissingInput);
    }

    debug!(?config, "running requested operations");

    if let Some(token) = &config.token {
        let rendered = render_token(token, config.show_header).context("decoding --token")?;
        match &config.out {
            Some(path) => {
                write_to_file(path, &rendered)?;
                info!(path = %path.display(), "wrote decoded token");
            }
            None => writeln!(stdout, "{rendered}")?,
        }
    }

    if let Some(encoded) = &config.base64 {
        let bytes = base64_codec::decode(encoded).context("decoding --base64")?;
        writeln!(stdout, "{}", bytes_as_text(&bytes))?;

        if let Some(key_hex) = &config.aes_key {
            let key = aes_cipher::key_from_hex(key_hex).context("reading --aes-key")?;
            let plaintext = aes_cipher::decrypt(&bytes, &key).context("decrypting --base64")?;
            let shown = if config.unpad {
                aes_cipher::pkcs7_unpad(&plaintext).context("removing padding")?
            } else {
                plaintext.as_slice()
            };
            writeln!(stdout, "{}", bytes_as_text(shown))?;
        }
    }

    if let (Some(payload), Some(secret)) = (&config.sign, &config.secret) {
        let claims: Claims = serde_json::from_str(payload)
            .map_err(|e| JwtLensError::Parse {
                what: "--sign payload".to_string(),
                reason: e.to_string(),
            })
            .context("signing --sign")?;
        let token = jwt::encode(&claims, secret).context("signing --sign")?;
        writeln!(stdout, "{token}")?;
    }

    if let Some(text) = &config.encode {
        writeln!(stdout, "{}", base64_codec::encode(text.as_bytes()))?;
    }

    if let (Some(text), Some(key_hex)) = (&config.encrypt, &config.aes_key) {
        let key = aes_cipher::key_from_hex(key_hex).context("reading --aes-key")?;
        let encrypted =
            aes_cipher::encrypt(text.as_bytes(), &key).context("encrypting --encrypt")?;
        writeln!(stdout, "{}", base64_codec::encode(&encrypted))?;
    }

    Ok(Outcome::Completed)
}

/// Decode a token into the text shown to the user.
///
/// Without the header the output is the payload as pretty JSON. With it,
/// both parts are shown under section headings.
fn render_token(token: &str, show_header: bool) -> Result<String, JwtLensError> {
    let payload = pretty_json(&Value::Object(jwt::decode(token)?));
    if !show_header {
        return Ok(payload);
    }

    let header = pretty_json(&Value::Object(jwt::decode_header(token)?));
    Ok(format!("--- Header ---\n{header}\n--- Payload ---\n{payload}"))
}

fn write_to_file(path: &Path, contents: &str) -> Result<(), JwtLensError> {
    let io_error = |source| JwtLensError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(io_error)?;
    file.write_all(contents.as_bytes()).map_err(io_error)
}
