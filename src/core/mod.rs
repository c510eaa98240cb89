//! Core encoding and cryptographic operations.
//!
//! This module contains the domain logic separated from CLI concerns.
//! All types and functions here are testable without the CLI layer.

pub mod aes_cipher;
pub mod base64_codec;
pub mod jwt;
