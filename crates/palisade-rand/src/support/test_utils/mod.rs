// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Deterministic and failure-injecting salt sources for tests.

mod cycle_salt_source;
mod failing_salt_source;

pub use cycle_salt_source::CycleSaltSource;
pub use failing_salt_source::FailingSaltSource;
