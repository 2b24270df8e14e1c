// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Interactive salted-password hashing tool.
//
// Prompts twice for a password with terminal echo disabled and hashes both
// entries under a salt drawn fresh for each attempt. On a match it prints
// the salt and digest as lowercase hex octet pairs, separated by a single
// space; on a mismatch it re-prompts from scratch with a new salt.

use std::io::{self, Write};

use palisade_passwd::{generate_record_salt, hash, verify};
use palisade_rand::SystemSaltSource;
use palisade_util::bytes_to_hex;
use rpassword::read_password;
use zeroize::Zeroize;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut source = SystemSaltSource {};

    loop {
        let salt = generate_record_salt(&mut source)?;

        print!("Password: ");
        io::stdout().flush()?;
        let mut first = read_password()?;

        print!("Retype password: ");
        io::stdout().flush()?;
        let mut second = read_password()?;

        let stored = hash(&salt, first.as_bytes());
        let retyped = hash(&salt, second.as_bytes());

        first.zeroize();
        second.zeroize();

        if verify(&stored, &retyped) {
            println!(
                "{} {}",
                bytes_to_hex(stored.salt()),
                bytes_to_hex(stored.digest())
            );
            return Ok(());
        }

        eprintln!("Passwords do not match, try again.");
    }
}
