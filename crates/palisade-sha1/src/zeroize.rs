// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::sync::atomic::{Ordering, compiler_fence};

/// Zeroize 64 bytes (SHA-1 block size)
#[inline(always)]
pub fn zeroize_64(buf: &mut [u8; 64]) {
    unsafe {
        core::ptr::write_volatile(buf, [0u8; 64]);
    }
    compiler_fence(Ordering::SeqCst);
}

/// Zeroize a 16-word message schedule window
#[inline(always)]
pub fn zeroize_schedule(w: &mut [u32; 16]) {
    for word in w.iter_mut() {
        unsafe {
            core::ptr::write_volatile(word, 0);
        }
    }
    compiler_fence(Ordering::SeqCst);
}

/// Zeroize a single 32-bit working register
#[inline(always)]
pub fn zeroize_u32(word: &mut u32) {
    unsafe {
        core::ptr::write_volatile(word, 0);
    }
    compiler_fence(Ordering::SeqCst);
}
