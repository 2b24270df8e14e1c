// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::SaltError;
use crate::traits::{SALT_BAND_BASE, SALT_BAND_SPAN, SaltSource};

/// Deterministic salt source for tests.
///
/// Walks the printable band in order, starting at a configurable offset, so
/// every fill is reproducible and successive fills differ.
pub struct CycleSaltSource {
    next: u8,
}

impl CycleSaltSource {
    /// Creates a source that starts `offset` steps into the band.
    pub fn new(offset: u8) -> Self {
        Self {
            next: offset % SALT_BAND_SPAN,
        }
    }
}

impl SaltSource for CycleSaltSource {
    fn fill_salt(&mut self, dest: &mut [u8]) -> Result<(), SaltError> {
        for byte in dest.iter_mut() {
            *byte = SALT_BAND_BASE + self.next;
            self.next = (self.next + 1) % SALT_BAND_SPAN;
        }

        Ok(())
    }
}
