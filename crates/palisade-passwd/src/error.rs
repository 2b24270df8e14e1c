// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use palisade_rand::SaltError;
use thiserror::Error;

/// Errors from password hashing and encoding.
///
/// Verification never surfaces here: every failed or malformed check
/// resolves to a plain `false`, so callers cannot distinguish why a
/// credential was rejected.
#[derive(Debug, Error)]
pub enum PasswdError {
    /// Requested salt length is outside the supported range (1..=16).
    #[error("requested salt length outside supported range")]
    SaltLength,

    /// Encoded output would exceed the maximum encoded length.
    #[error("encoded output would exceed maximum length")]
    EncodedTooLong,

    /// Underlying salt source failed.
    #[error("{0}")]
    Salt(#[from] SaltError),
}
