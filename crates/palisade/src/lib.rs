// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # Palisade
//!
//! Salted SHA-1 password hashing: a from-scratch streaming hash engine, a
//! fixed-width password-record protocol, and the `{SSHA}` encoded-string
//! codec for text-based credential stores.
//!
//! This is a re-export crate that combines the member crates for
//! convenience.
//!
//! ## Quick Start
//!
//! ```rust
//! use palisade::passwd::{decode_and_check, encode};
//! use palisade::rand::SystemSaltSource;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut source = SystemSaltSource {};
//!
//!     // Store this string in the credential file.
//!     let stored = encode(b"hunter2", &mut source)?;
//!     assert!(stored.starts_with("{SSHA}"));
//!
//!     // Check candidates against it on every login attempt.
//!     assert!(decode_and_check(&stored, b"hunter2"));
//!     assert!(!decode_and_check(&stored, b"letmein"));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## What's Included
//!
//! - [`sha1`]: the streaming hash engine ([`sha1::Sha1State`])
//! - [`rand`]: salt sources ([`rand::SystemSaltSource`],
//!   [`rand::Lcg64SaltSource`])
//! - [`passwd`]: records, protocol, and codec
//!   ([`passwd::PasswordRecord`], [`passwd::hash`], [`passwd::verify`],
//!   [`passwd::encode`], [`passwd::decode_and_check`])
//! - [`util`]: constant-time comparison and hex helpers

#![cfg_attr(not(test), no_std)]

pub use palisade_passwd as passwd;
pub use palisade_rand as rand;
pub use palisade_sha1 as sha1;
pub use palisade_util as util;
