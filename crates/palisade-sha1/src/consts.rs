// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// SHA-1 output size in bytes
pub const DIGEST_LEN: usize = 20;

/// SHA-1 block size in bytes
pub const BLOCK_LEN: usize = 64;
