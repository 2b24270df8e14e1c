// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::SaltError;
use crate::traits::{SALT_BAND_BASE, SALT_BAND_SPAN, SaltSource};

/// Multiplier and increment from Knuth's MMIX generator.
const LCG_MUL: u64 = 6364136223846793005;
const LCG_INC: u64 = 1442695040888963407;

/// Linear-congruential salt source with an explicit seed.
///
/// This is a plain 64-bit LCG. It is **not** cryptographically secure:
/// every salt it will ever produce is determined by the seed, so salts are
/// predictable to anyone who can guess it. That is a documented limitation
/// of this source, kept for callers that need cheap, reproducible salts
/// (fixtures, migrations of legacy records); anything facing an attacker
/// should use [`SystemSaltSource`](crate::SystemSaltSource) instead.
///
/// The seed is supplied by the caller. Nothing here reads the clock or any
/// other ambient state.
///
/// # Example
///
/// ```rust
/// use palisade_rand::{Lcg64SaltSource, SaltSource};
///
/// let mut source = Lcg64SaltSource::new(0x5eed);
/// let mut salt = [0u8; 6];
/// source.fill_salt(&mut salt).unwrap();
///
/// // Same seed, same salt.
/// let mut replay = Lcg64SaltSource::new(0x5eed);
/// let mut again = [0u8; 6];
/// replay.fill_salt(&mut again).unwrap();
/// assert_eq!(salt, again);
/// ```
pub struct Lcg64SaltSource {
    state: u64,
}

impl Lcg64SaltSource {
    /// Creates a new source from the given seed.
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advances the generator and returns one byte from the printable band.
    #[inline]
    fn next_band_byte(&mut self) -> u8 {
        self.state = self.state.wrapping_mul(LCG_MUL).wrapping_add(LCG_INC);

        // High bits have the longest period; the low bits of an LCG cycle
        // quickly.
        let raw = (self.state >> 32) as u32;
        SALT_BAND_BASE + (raw % SALT_BAND_SPAN as u32) as u8
    }
}

impl SaltSource for Lcg64SaltSource {
    fn fill_salt(&mut self, dest: &mut [u8]) -> Result<(), SaltError> {
        for byte in dest.iter_mut() {
            *byte = self.next_band_byte();
        }

        Ok(())
    }
}
