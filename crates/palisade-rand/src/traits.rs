// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::SaltError;

/// First byte of the printable salt band (ASCII space).
pub const SALT_BAND_BASE: u8 = 0x20;

/// Width of the printable salt band: 96 values, `0x20..=0x7F`.
pub const SALT_BAND_SPAN: u8 = 96;

/// Trait for salt byte producers.
///
/// Implementations fill the destination with bytes restricted to the
/// printable band `0x20..=0x7F`. Salt quality varies by implementation and
/// is documented on each type; the trait itself guarantees only the band
/// restriction and that the full destination is written on success.
pub trait SaltSource {
    /// Fills the destination buffer with salt bytes from the band.
    ///
    /// An empty destination succeeds without drawing from the source.
    ///
    /// # Errors
    ///
    /// Returns [`SaltError::EntropyNotAvailable`] if the underlying
    /// randomness source is unavailable. Deterministic sources never fail.
    fn fill_salt(&mut self, dest: &mut [u8]) -> Result<(), SaltError>;
}
