// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming equivalence: any chunking of the input yields the same digest.

use proptest::prelude::*;

use crate::consts::DIGEST_LEN;
use crate::sha1::{Sha1State, sha1};

proptest! {
    #[test]
    fn fixed_chunk_size_matches_one_shot(
        data in proptest::collection::vec(any::<u8>(), 0..512),
        chunk in 1..96usize
    ) {
        let mut one_shot = [0u8; DIGEST_LEN];
        sha1(&data, &mut one_shot);

        let mut state = Sha1State::new();
        for piece in data.chunks(chunk) {
            state.update(piece);
        }
        let mut streamed = [0u8; DIGEST_LEN];
        state.finalize(&mut streamed);

        prop_assert_eq!(one_shot, streamed);
    }

    #[test]
    fn arbitrary_split_points_match_one_shot(
        data in proptest::collection::vec(any::<u8>(), 0..512),
        splits in proptest::collection::vec(any::<prop::sample::Index>(), 0..8)
    ) {
        let mut one_shot = [0u8; DIGEST_LEN];
        sha1(&data, &mut one_shot);

        let mut cuts: Vec<usize> = splits.iter().map(|ix| ix.index(data.len() + 1)).collect();
        cuts.sort_unstable();

        let mut state = Sha1State::new();
        let mut start = 0usize;
        for cut in cuts {
            state.update(&data[start..cut]);
            start = cut;
        }
        state.update(&data[start..]);

        let mut streamed = [0u8; DIGEST_LEN];
        state.finalize(&mut streamed);

        prop_assert_eq!(one_shot, streamed);
    }

    #[test]
    fn digest_is_always_twenty_bytes(
        data in proptest::collection::vec(any::<u8>(), 0..256)
    ) {
        // The output type fixes the size; this pins the accumulator count.
        let mut out = [0u8; DIGEST_LEN];
        sha1(&data, &mut out);
        prop_assert_eq!(out.len(), 20);
    }
}

#[test]
fn empty_update_calls_are_no_ops() {
    let mut state = Sha1State::new();
    state.update(b"");
    state.update(b"abc");
    state.update(b"");

    let mut streamed = [0u8; DIGEST_LEN];
    state.finalize(&mut streamed);

    let mut one_shot = [0u8; DIGEST_LEN];
    sha1(b"abc", &mut one_shot);

    assert_eq!(streamed, one_shot);
}
