// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # palisade_rand
//!
//! Salt generation for the Palisade password crates.
//!
//! Every source produces bytes restricted to a fixed 96-character printable
//! band (`0x20..=0x7F`), so salts remain text-safe wherever credential
//! records end up stored.
//!
//! ## Core Types
//!
//! - [`SystemSaltSource`]: OS-level CSPRNG (via `getrandom`)
//! - [`Lcg64SaltSource`]: explicitly seeded linear-congruential source
//!
//! ## Traits
//!
//! - [`SaltSource`]: interface for salt byte producers
//!
//! There is no process-wide generator state: callers construct a source and
//! pass it to the operations that need one. Tests inject a deterministic
//! source; production injects [`SystemSaltSource`]. The same `&mut` handle
//! discipline that the borrow checker enforces is the only serialization
//! requirement.
//!
//! ## Example
//!
//! ```rust
//! use palisade_rand::{SaltSource, SystemSaltSource};
//!
//! let mut source = SystemSaltSource {};
//! let mut salt = [0u8; 8];
//! source.fill_salt(&mut salt).expect("entropy unavailable");
//! assert!(salt.iter().all(|&b| (0x20..=0x7f).contains(&b)));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod lcg;
mod support;
mod system;
mod traits;

pub use error::SaltError;
pub use lcg::Lcg64SaltSource;
pub use system::SystemSaltSource;
pub use traits::{SALT_BAND_BASE, SALT_BAND_SPAN, SaltSource};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
