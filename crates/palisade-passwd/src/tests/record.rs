// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::Zeroize;

use crate::record::PasswordRecord;
use crate::{RECORD_LEN, RECORD_SALT_LEN};

const SALT: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];
const DIGEST: [u8; 20] = [
    0xa9, 0x99, 0x3e, 0x36, 0x47, 0x06, 0x81, 0x6a, 0xba, 0x3e, 0x25, 0x71, 0x78, 0x50, 0xc2,
    0x6c, 0x9c, 0xd0, 0xd8, 0x9d,
];

#[test]
fn test_accessors() {
    let record = PasswordRecord::new(SALT, DIGEST);
    assert_eq!(record.salt(), &SALT);
    assert_eq!(record.digest(), &DIGEST);
}

#[test]
fn test_to_bytes_layout_is_salt_then_digest() {
    let record = PasswordRecord::new(SALT, DIGEST);
    let bytes = record.to_bytes();

    assert_eq!(bytes.len(), RECORD_LEN);
    assert_eq!(&bytes[..RECORD_SALT_LEN], &SALT);
    assert_eq!(&bytes[RECORD_SALT_LEN..], &DIGEST);
}

#[test]
fn test_from_bytes_roundtrip() {
    let original = PasswordRecord::new(SALT, DIGEST);
    let restored = PasswordRecord::from_bytes(&original.to_bytes());

    assert_eq!(restored.salt(), original.salt());
    assert_eq!(restored.digest(), original.digest());
}

#[test]
fn test_debug_redacts_digest() {
    let record = PasswordRecord::new(SALT, DIGEST);
    let debug_str = format!("{record:?}");

    assert!(debug_str.contains("[REDACTED]"));
    assert!(!debug_str.contains("a9"));
    assert!(!debug_str.contains("169")); // 0xa9 in decimal
}

#[test]
fn test_zeroize_wipes_both_fields() {
    let mut record = PasswordRecord::new(SALT, DIGEST);
    record.zeroize();

    assert_eq!(record.salt(), &[0u8; 8]);
    assert_eq!(record.digest(), &[0u8; 20]);
}

#[test]
fn test_clone_preserves_contents() {
    let record = PasswordRecord::new(SALT, DIGEST);
    let cloned = record.clone();

    assert_eq!(cloned.salt(), record.salt());
    assert_eq!(cloned.digest(), record.digest());
}
