// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hash/verify protocol over raw password records.

use palisade_rand::{SaltError, SaltSource};
use palisade_sha1::Sha1State;
use palisade_util::constant_time_eq;
use zeroize::Zeroize;

use crate::record::PasswordRecord;
use crate::{DIGEST_LEN, RECORD_SALT_LEN};

/// Hashes a plaintext under the given salt into a record.
///
/// The engine consumes the salt bytes first, then the plaintext: the raw
/// record form is salt-first. The encoded-string codec uses the opposite
/// order; the two forms are independent and not interchangeable.
///
/// Deterministic: the same salt and plaintext always produce the same
/// record.
pub fn hash(salt: &[u8; RECORD_SALT_LEN], plaintext: &[u8]) -> PasswordRecord {
    let mut digest = [0u8; DIGEST_LEN];

    let mut state = Sha1State::new();
    state.update(salt);
    state.update(plaintext);
    state.finalize(&mut digest);

    let record = PasswordRecord::new(*salt, digest);
    digest.zeroize();
    record
}

/// Compares the digest fields of two records in constant time.
///
/// Only the digests are compared. It is the caller's responsibility that
/// both records were built from the same salt; records with different salts
/// compare without error but the result has no defined meaning.
pub fn verify(a: &PasswordRecord, b: &PasswordRecord) -> bool {
    constant_time_eq(a.digest(), b.digest())
}

/// Draws a fresh 8-byte salt for the raw record form.
///
/// Called once per password-set event; at verify time the stored salt is
/// reused exactly, never regenerated.
///
/// # Errors
///
/// Returns [`SaltError::EntropyNotAvailable`] if the source fails.
pub fn generate_record_salt<S: SaltSource>(source: &mut S) -> Result<[u8; RECORD_SALT_LEN], SaltError> {
    let mut salt = [0u8; RECORD_SALT_LEN];
    source.fill_salt(&mut salt)?;
    Ok(salt)
}
