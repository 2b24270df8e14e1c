// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::SaltError;
use crate::traits::{SALT_BAND_BASE, SALT_BAND_SPAN, SaltSource};

/// Salt source backed by the operating system CSPRNG.
///
/// Raw OS entropy is folded into the printable band byte-for-byte. The fold
/// is a plain modulo; the slight bias it introduces is irrelevant for salts,
/// which are stored in the clear next to the digest anyway.
///
/// This is the production source: unpredictable salts, no seed management.
///
/// # Platform Support
///
/// All platforms `getrandom` supports:
/// - Linux/Android: `getrandom()` syscall
/// - macOS/iOS: `getentropy()`
/// - Windows: `BCryptGenRandom`
/// - WASI: `random_get`
pub struct SystemSaltSource {}

impl SaltSource for SystemSaltSource {
    fn fill_salt(&mut self, dest: &mut [u8]) -> Result<(), SaltError> {
        getrandom::fill(dest).map_err(|_| SaltError::EntropyNotAvailable)?;

        for byte in dest.iter_mut() {
            *byte = SALT_BAND_BASE + (*byte % SALT_BAND_SPAN);
        }

        Ok(())
    }
}
