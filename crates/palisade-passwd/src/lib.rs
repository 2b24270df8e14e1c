// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # palisade_passwd
//!
//! Salted SHA-1 password records and the `{SSHA}` encoded-string codec.
//!
//! Two independent storage forms are supported:
//!
//! - **Raw records** ([`PasswordRecord`]): a fixed 28-byte pairing of an
//!   8-byte salt and a 20-byte digest, hashed salt-first via [`hash`] and
//!   compared via [`verify`].
//! - **Encoded text** ([`encode`] / [`decode_and_check`]): a
//!   `{SSHA}`-prefixed, base64 serialization of digest‖salt with a variable
//!   salt of 1 to 16 bytes, for text-based credential stores. The codec
//!   hashes plaintext-first; see [`encode`] for the exact ordering.
//!
//! Digest comparisons in both forms run in constant time.
//!
//! ## Example
//!
//! ```rust
//! use palisade_passwd::{decode_and_check, encode, generate_record_salt, hash, verify};
//! use palisade_rand::Lcg64SaltSource;
//!
//! let mut source = Lcg64SaltSource::new(0x5eed);
//!
//! // Raw record flow: persist the record, re-hash with the stored salt.
//! let salt = generate_record_salt(&mut source)?;
//! let stored = hash(&salt, b"hunter2");
//! let candidate = hash(stored.salt(), b"hunter2");
//! assert!(verify(&stored, &candidate));
//!
//! // Encoded text flow: persist the string, check candidates against it.
//! let text = encode(b"hunter2", &mut source)?;
//! assert!(text.starts_with("{SSHA}"));
//! assert!(decode_and_check(&text, b"hunter2"));
//! assert!(!decode_and_check(&text, b"hunter3"));
//! # Ok::<(), palisade_passwd::PasswdError>(())
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod encoded;
mod error;
mod protocol;
mod record;

pub use palisade_sha1::DIGEST_LEN;

pub use encoded::{decode_and_check, encode, encode_with_salt_len};
pub use error::PasswdError;
pub use protocol::{generate_record_salt, hash, verify};
pub use record::PasswordRecord;

/// Salt size of the raw record form in bytes
pub const RECORD_SALT_LEN: usize = 8;

/// Total size of a serialized record: salt then digest, no padding
pub const RECORD_LEN: usize = RECORD_SALT_LEN + DIGEST_LEN;

/// Minimum salt size of the encoded form in bytes
pub const MIN_SALT_LEN: usize = 1;

/// Maximum salt size of the encoded form in bytes
pub const MAX_SALT_LEN: usize = 16;

/// Default salt size of the encoded form in bytes
pub const DEFAULT_SALT_LEN: usize = 6;

/// Magic prefix of the encoded form
pub const MAGIC: &str = "{SSHA}";

/// Maximum total length of the encoded form.
///
/// Prefix plus the base64 expansion of digest‖salt at the maximum salt
/// size. The constant counts one byte of terminator slack, inherited from
/// the C-string contract this format originates from; strings produced by
/// [`encode`] are therefore always strictly shorter than this.
pub const MAX_ENCODED_LEN: usize = MAGIC.len() + ((DIGEST_LEN + MAX_SALT_LEN + 3) / 3) * 4;
