// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt::{self, Debug};

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{DIGEST_LEN, RECORD_LEN, RECORD_SALT_LEN};

/// A salted password digest in the fixed raw-record form.
///
/// Immutable once created. The serialized layout is position-defined by
/// external contract: exactly 8 salt bytes followed by exactly 20 digest
/// bytes, no padding, no length prefix, 28 bytes total.
///
/// Two records are comparable only if they carry the same salt; comparing
/// records built from different salts has no defined meaning and is not
/// checked. See [`verify`](crate::verify).
///
/// # Security
///
/// - Contents are zeroized on drop
/// - `Debug` output redacts the digest
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PasswordRecord {
    salt: [u8; RECORD_SALT_LEN],
    digest: [u8; DIGEST_LEN],
}

impl PasswordRecord {
    /// Creates a record from its parts.
    pub const fn new(salt: [u8; RECORD_SALT_LEN], digest: [u8; DIGEST_LEN]) -> Self {
        Self { salt, digest }
    }

    /// Returns the salt.
    pub const fn salt(&self) -> &[u8; RECORD_SALT_LEN] {
        &self.salt
    }

    /// Returns the digest.
    pub const fn digest(&self) -> &[u8; DIGEST_LEN] {
        &self.digest
    }

    /// Serializes to the fixed 28-byte layout: salt then digest.
    pub fn to_bytes(&self) -> [u8; RECORD_LEN] {
        let mut out = [0u8; RECORD_LEN];
        out[..RECORD_SALT_LEN].copy_from_slice(&self.salt);
        out[RECORD_SALT_LEN..].copy_from_slice(&self.digest);
        out
    }

    /// Deserializes from the fixed 28-byte layout.
    pub fn from_bytes(bytes: &[u8; RECORD_LEN]) -> Self {
        let mut salt = [0u8; RECORD_SALT_LEN];
        let mut digest = [0u8; DIGEST_LEN];
        salt.copy_from_slice(&bytes[..RECORD_SALT_LEN]);
        digest.copy_from_slice(&bytes[RECORD_SALT_LEN..]);
        Self { salt, digest }
    }
}

impl Debug for PasswordRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordRecord")
            .field("salt", &self.salt)
            .field("digest", &"[REDACTED]")
            .finish()
    }
}
