//! AES-CBC encryption and decryption with a prepended IV.
//!
//! Ciphertexts produced here are laid out as `IV || ciphertext`, where
//! the IV is 16 random bytes drawn from the operating system's CSPRNG
//! and the ciphertext is the PKCS7-padded plaintext encrypted in CBC
//! mode. Key length selects AES-128 (16 bytes) or AES-256 (32 bytes).
//!
//! There is no authentication tag. Tampered ciphertexts decrypt to
//! garbage rather than failing.

use aes::{Aes128, Aes256};
use cbc::cipher::block_padding::{NoPadding, Pkcs7};
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::RngCore;
use rand::rngs::OsRng;
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::JwtLensError;

/// AES block size in bytes, which is also the IV length.
pub const BLOCK_SIZE: usize = 16;

/// Decode a hex-encoded AES key and check its length.
///
/// # Errors
///
/// Returns [`JwtLensError::InvalidKeyHex`] if the text is not hex and
/// [`JwtLensError::InvalidKey`] if it does not decode to 16 or 32 bytes.
pub fn key_from_hex(hex_key: &str) -> Result<Zeroizing<Vec<u8>>, JwtLensError> {
    let bytes = hex::decode(hex_key.trim()).map_err(|_| JwtLensError::InvalidKeyHex)?;
    let key = Zeroizing::new(bytes);
    validate_key(&key)?;
    Ok(key)
}

/// Encrypt `plaintext` under `key` with a fresh random IV.
///
/// Returns the IV followed by the PKCS7-padded ciphertext, so the output
/// is always `16 + 16 * (len / 16 + 1)` bytes long.
///
/// # Errors
///
/// Returns [`JwtLensError::InvalidKey`] if `key` is not 16 or 32 bytes.
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>, JwtLensError> {
    validate_key(key)?;

    let mut iv = [0u8; BLOCK_SIZE];
    OsRng.fill_bytes(&mut iv);

    encrypt_with_iv(plaintext, key, &iv)
}

fn encrypt_with_iv(
    plaintext: &[u8],
    key: &[u8],
    iv: &[u8; BLOCK_SIZE],
) -> Result<Vec<u8>, JwtLensError> {
    let ciphertext = match key.len() {
        16 => cbc::Encryptor::<Aes128>::new_from_slices(key, iv)
            .map_err(|_| invalid_key(key))?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        32 => cbc::Encryptor::<Aes256>::new_from_slices(key, iv)
            .map_err(|_| invalid_key(key))?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        _ => return Err(invalid_key(key)),
    };

    debug!(
        key_bits = key.len() * 8,
        plaintext_len = plaintext.len(),
        ciphertext_len = ciphertext.len(),
        "encrypted with AES-CBC"
    );

    let mut output = Vec::with_capacity(BLOCK_SIZE + ciphertext.len());
    output.extend_from_slice(iv);
    output.extend_from_slice(&ciphertext);
    Ok(output)
}

/// Decrypt an `IV || ciphertext` buffer under `key`.
///
/// The trailing PKCS7 padding is left in place; callers that want the
/// original plaintext pass the result through [`pkcs7_unpad`].
///
/// # Errors
///
/// Returns [`JwtLensError::InvalidKey`] if `key` is not 16 or 32 bytes,
/// and [`JwtLensError::InvalidInput`] if the input is shorter than the IV
/// or the ciphertext is not a positive multiple of the block size.
pub fn decrypt(input: &[u8], key: &[u8]) -> Result<Vec<u8>, JwtLensError> {
    validate_key(key)?;

    if input.len() < BLOCK_SIZE {
        return Err(JwtLensError::InvalidInput {
            reason: format!(
                "{} bytes is too short to hold a {BLOCK_SIZE}-byte IV",
                input.len()
            ),
        });
    }

    let (iv, ciphertext) = input.split_at(BLOCK_SIZE);
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(misaligned(ciphertext.len()));
    }

    let plaintext = match key.len() {
        16 => cbc::Decryptor::<Aes128>::new_from_slices(key, iv)
            .map_err(|_| invalid_key(key))?
            .decrypt_padded_vec_mut::<NoPadding>(ciphertext),
        32 => cbc::Decryptor::<Aes256>::new_from_slices(key, iv)
            .map_err(|_| invalid_key(key))?
            .decrypt_padded_vec_mut::<NoPadding>(ciphertext),
        _ => return Err(invalid_key(key)),
    }
    .map_err(|_| misaligned(ciphertext.len()))?;

    debug!(
        key_bits = key.len() * 8,
        ciphertext_len = ciphertext.len(),
        "decrypted with AES-CBC"
    );

    Ok(plaintext)
}

/// Strip PKCS7 padding from a decrypted buffer.
///
/// # Errors
///
/// Returns [`JwtLensError::InvalidInput`] if the buffer is not block
/// aligned or its trailing bytes are not valid PKCS7 padding.
pub fn pkcs7_unpad(data: &[u8]) -> Result<&[u8], JwtLensError> {
    let bad_padding = || JwtLensError::InvalidInput {
        reason: "invalid PKCS7 padding".to_string(),
    };

    if data.is_empty() || data.len() % BLOCK_SIZE != 0 {
        return Err(bad_padding());
    }

    let pad = usize::from(data[data.len() - 1]);
    if pad == 0 || pad > BLOCK_SIZE {
        return Err(bad_padding());
    }

    let (body, padding) = data.split_at(data.len() - pad);
    if padding.iter().any(|&b| usize::from(b) != pad) {
        return Err(bad_padding());
    }

    Ok(body)
}

fn validate_key(key: &[u8]) -> Result<(), JwtLensError> {
    match key.len() {
        16 | 32 => Ok(()),
        _ => Err(invalid_key(key)),
    }
}

fn invalid_key(key: &[u8]) -> JwtLensError {
    JwtLensError::InvalidKey { length: key.len() }
}

fn misaligned(len: usize) -> JwtLensError {
    JwtLensError::InvalidInput {
        reason: format!("ciphertext length {len} is not a positive multiple of {BLOCK_SIZE}"),
    }
}
