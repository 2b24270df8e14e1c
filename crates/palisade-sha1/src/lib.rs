// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming SHA-1 implementation per RFC 3174
//!
//! Merkle-Damgard construction over 512-bit blocks producing a 160-bit
//! digest. Zero external dependencies. No heap allocation; every operation
//! is bounded and deterministic. All transient round state is zeroized.
//!
//! SHA-1 is cryptographically broken for collision resistance and must not
//! be used to protect new data. This crate exists to interoperate with
//! credential records whose format is fixed by external contract.
//!
//! References:
//! - RFC 3174: US Secure Hash Algorithm 1 (SHA1)
//!   <https://datatracker.ietf.org/doc/html/rfc3174>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod consts;
mod sha1;
mod zeroize;

pub use consts::{BLOCK_LEN, DIGEST_LEN};
pub use self::sha1::{Sha1State, sha1};
