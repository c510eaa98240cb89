//! CLI argument definitions for jwt-lens.
//!
//! Uses `clap` derive macros to define the command-line interface. There
//! are no subcommands: each flag requests one operation and a single
//! invocation may combine several of them.
//!
//! # Security
//!
//! Tokens, secrets and keys are held in `Zeroizing` buffers, and both
//! `Cli` and `Config` implement custom `Debug` to redact them so they
//! cannot leak through debug formatting, error chains, or logging.

use std::fmt;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use zeroize::Zeroizing;

/// An offline CLI for decoding JWTs, Base64 blobs, and AES-CBC
/// ciphertexts, and for producing them.
#[derive(Parser)]
#[command(name = "jwt-lens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// JWT token to decode. The payload is pretty-printed as JSON.
    #[arg(long, value_name = "JWT", value_parser = parse_zeroizing_string)]
    pub token: Option<Zeroizing<String>>,

    /// Write the decoded JWT to this file instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Also print the decoded JWT header.
    #[arg(long, requires = "token")]
    pub header: bool,

    /// Standard Base64 text to decode and print.
    ///
    /// Combined with --aes-key, the decoded bytes are also decrypted as
    /// an IV-prefixed AES-CBC ciphertext.
    #[arg(long, value_name = "TEXT")]
    pub base64: Option<String>,

    /// AES key as hex (16 or 32 bytes once decoded).
    #[arg(long, value_name = "HEX", value_parser = parse_zeroizing_string)]
    pub aes_key: Option<Zeroizing<String>>,

    /// Strip PKCS7 padding from decrypted output.
    #[arg(long, requires = "aes_key")]
    pub unpad: bool,

    /// JSON object to sign into an HS256 token.
    #[arg(long, value_name = "JSON", requires = "secret")]
    pub sign: Option<String>,

    /// HMAC secret used with --sign.
    ///
    /// WARNING: Passing secrets via CLI arguments may expose them in shell
    /// history.
    #[arg(long, value_name = "SECRET", value_parser = parse_zeroizing_string)]
    pub secret: Option<Zeroizing<String>>,

    /// Text to encode as standard Base64.
    #[arg(long, value_name = "TEXT")]
    pub encode: Option<String>,

    /// Text to encrypt with --aes-key; prints Base64 of IV || ciphertext.
    #[arg(long, value_name = "TEXT", requires = "aes_key")]
    pub encrypt: Option<String>,

    /// Increase diagnostic logging on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Convert parsed arguments into the driver's configuration.
    ///
    /// Empty operation inputs are treated as absent. An empty `--aes-key`
    /// is kept so it fails key validation instead of skipping the cipher.
    pub fn into_config(self) -> Config {
        Config {
            token: self.token.filter(|t| !t.is_empty()),
            out: self.out.filter(|p| !p.as_os_str().is_empty()),
            show_header: self.header,
            base64: self.base64.filter(|b| !b.is_empty()),
            aes_key: self.aes_key,
            unpad: self.unpad,
            sign: self.sign.filter(|s| !s.is_empty()),
            secret: self.secret,
            encode: self.encode,
            encrypt: self.encrypt,
        }
    }
}

/// Custom `Debug` that redacts the token, key and secret.
impl fmt::Debug for Cli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cli")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("out", &self.out)
            .field("header", &self.header)
            .field("base64", &self.base64)
            .field("aes_key", &self.aes_key.as_ref().map(|_| "[REDACTED]"))
            .field("unpad", &self.unpad)
            .field("sign", &self.sign)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("encode", &self.encode)
            .field("encrypt", &self.encrypt)
            .field("verbose", &self.verbose)
            .finish()
    }
}

/// The operations requested by one invocation.
pub struct Config {
    /// JWT whose payload should be decoded.
    pub token: Option<Zeroizing<String>>,
    /// Destination for the decoded JWT; stdout when `None`.
    pub out: Option<PathBuf>,
    /// Print the JWT header alongside the payload.
    pub show_header: bool,
    /// Standard Base64 input to decode.
    pub base64: Option<String>,
    /// Hex-encoded AES key.
    pub aes_key: Option<Zeroizing<String>>,
    /// Strip PKCS7 padding after decryption.
    pub unpad: bool,
    /// JSON payload to sign.
    pub sign: Option<String>,
    /// HMAC secret for signing.
    pub secret: Option<Zeroizing<String>>,
    /// Text to Base64-encode.
    pub encode: Option<String>,
    /// Text to encrypt.
    pub encrypt: Option<String>,
}

impl Config {
    /// Whether any operation was requested at all.
    pub fn has_operation(&self) -> bool {
        self.token.is_some()
            || self.base64.is_some()
            || self.sign.is_some()
            || self.encode.is_some()
            || self.encrypt.is_some()
    }
}

/// Custom `Debug` that redacts the token, key and secret.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("out", &self.out)
            .field("show_header", &self.show_header)
            .field("base64", &self.base64)
            .field("aes_key", &self.aes_key.as_ref().map(|_| "[REDACTED]"))
            .field("unpad", &self.unpad)
            .field("sign", &self.sign)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("encode", &self.encode)
            .field("encrypt", &self.encrypt)
            .finish()
    }
}

/// Parse a string into a `Zeroizing<String>` for secure CLI arguments.
fn parse_zeroizing_string(s: &str) -> Result<Zeroizing<String>, std::convert::Infallible> {
    Ok(Zeroizing::new(s.to_string()))
}
