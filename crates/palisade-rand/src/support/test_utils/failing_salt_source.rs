// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::SaltError;
use crate::traits::SaltSource;

/// Salt source that always fails, for exercising entropy error paths.
pub struct FailingSaltSource {}

impl SaltSource for FailingSaltSource {
    fn fill_salt(&mut self, _dest: &mut [u8]) -> Result<(), SaltError> {
        Err(SaltError::EntropyNotAvailable)
    }
}
