// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `{SSHA}` encoded-string codec.
//!
//! Format: `{SSHA}` + base64(digest ‖ salt), standard alphabet with `=`
//! padding. The digest occupies the first 20 decoded bytes; whatever
//! remains (1 to 16 bytes) is the salt.

use alloc::string::String;

use base64::prelude::*;
use palisade_rand::SaltSource;
use palisade_sha1::Sha1State;
use palisade_util::constant_time_eq;
use zeroize::Zeroize;

use crate::error::PasswdError;
use crate::{DEFAULT_SALT_LEN, DIGEST_LEN, MAGIC, MAX_ENCODED_LEN, MAX_SALT_LEN, MIN_SALT_LEN};

/// Encodes a plaintext into the `{SSHA}` text form with the default salt
/// length.
///
/// See [`encode_with_salt_len`].
///
/// # Errors
///
/// Propagates [`encode_with_salt_len`] errors; with the default salt length
/// only a salt-source failure is possible.
pub fn encode<S: SaltSource>(plaintext: &[u8], source: &mut S) -> Result<String, PasswdError> {
    encode_with_salt_len(plaintext, DEFAULT_SALT_LEN, source)
}

/// Encodes a plaintext into the `{SSHA}` text form.
///
/// Draws `salt_len` fresh salt bytes from the source and hashes
/// **plaintext first, then salt**, the conventional order for
/// `{SSHA}`-style credential strings. This is the opposite of the raw
/// record protocol's salt-first order; each form is internally consistent
/// and [`decode_and_check`] uses this one.
///
/// Nothing is produced on failure; there are no partial writes to undo.
///
/// # Errors
///
/// - [`PasswdError::SaltLength`] if `salt_len` is outside `1..=16`
/// - [`PasswdError::EncodedTooLong`] if the output would exceed
///   [`MAX_ENCODED_LEN`]
/// - [`PasswdError::Salt`] if the salt source fails
pub fn encode_with_salt_len<S: SaltSource>(
    plaintext: &[u8],
    salt_len: usize,
    source: &mut S,
) -> Result<String, PasswdError> {
    if !(MIN_SALT_LEN..=MAX_SALT_LEN).contains(&salt_len) {
        return Err(PasswdError::SaltLength);
    }

    // MAX_ENCODED_LEN counts the terminator byte of the external contract,
    // so the text itself must stay strictly below it.
    let encoded_len = MAGIC.len() + (DIGEST_LEN + salt_len).div_ceil(3) * 4;
    if encoded_len > MAX_ENCODED_LEN - 1 {
        return Err(PasswdError::EncodedTooLong);
    }

    let mut salt = [0u8; MAX_SALT_LEN];
    source.fill_salt(&mut salt[..salt_len])?;

    let mut digest = [0u8; DIGEST_LEN];
    let mut state = Sha1State::new();
    state.update(plaintext);
    state.update(&salt[..salt_len]);
    state.finalize(&mut digest);

    let mut packed = [0u8; DIGEST_LEN + MAX_SALT_LEN];
    packed[..DIGEST_LEN].copy_from_slice(&digest);
    packed[DIGEST_LEN..DIGEST_LEN + salt_len].copy_from_slice(&salt[..salt_len]);

    let mut text = String::with_capacity(encoded_len);
    text.push_str(MAGIC);
    BASE64_STANDARD.encode_string(&packed[..DIGEST_LEN + salt_len], &mut text);

    digest.zeroize();
    packed.zeroize();
    salt.zeroize();

    Ok(text)
}

/// Checks a plaintext against a stored `{SSHA}` string.
///
/// The magic prefix is matched case-sensitively before any base64 work.
/// The decoded payload is split at 20 bytes into digest and salt, the
/// digest is recomputed from the candidate plaintext and the extracted salt
/// (plaintext first, matching [`encode_with_salt_len`]), and compared in
/// constant time.
///
/// Every failure (wrong prefix, invalid base64, short or oversized
/// payload, digest mismatch) resolves to `false`. No cause is
/// distinguishable by the caller.
pub fn decode_and_check(encoded: &str, plaintext: &[u8]) -> bool {
    let Some(b64) = encoded.strip_prefix(MAGIC) else {
        return false;
    };

    let Ok(decoded) = BASE64_STANDARD.decode(b64) else {
        return false;
    };

    if decoded.len() < DIGEST_LEN + MIN_SALT_LEN || decoded.len() > DIGEST_LEN + MAX_SALT_LEN {
        return false;
    }

    let (stored_digest, salt) = decoded.split_at(DIGEST_LEN);

    let mut digest = [0u8; DIGEST_LEN];
    let mut state = Sha1State::new();
    state.update(plaintext);
    state.update(salt);
    state.finalize(&mut digest);

    let matched = constant_time_eq(&digest, stored_digest);
    digest.zeroize();
    matched
}
