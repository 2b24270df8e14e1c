// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Palisade SHA-1 vs RustCrypto SHA-1 digest benchmark
//!
//! Typical usage: digest a short salted password (under one block) and a
//! 4 KiB message (streaming path).

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use sha1::{Digest, Sha1};

use palisade_sha1::{DIGEST_LEN, sha1 as palisade_sha1_digest};

const SHORT: &[u8] = b"SALTsaltHunter2!";
const LONG: [u8; 4096] = [0x42; 4096];

fn bench_sha1_short(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha1/short_16b");

    group.throughput(Throughput::Bytes(SHORT.len() as u64));

    group.bench_function("palisade_sha1", |b| {
        b.iter(|| {
            let mut out = [0u8; DIGEST_LEN];
            palisade_sha1_digest(black_box(SHORT), &mut out);
            black_box(out)
        });
    });

    group.bench_function("rustcrypto_sha1", |b| {
        b.iter(|| black_box(Sha1::digest(black_box(SHORT))));
    });

    group.finish();
}

fn bench_sha1_long(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha1/long_4096b");

    group.throughput(Throughput::Bytes(LONG.len() as u64));

    group.bench_function("palisade_sha1", |b| {
        b.iter(|| {
            let mut out = [0u8; DIGEST_LEN];
            palisade_sha1_digest(black_box(&LONG), &mut out);
            black_box(out)
        });
    });

    group.bench_function("rustcrypto_sha1", |b| {
        b.iter(|| black_box(Sha1::digest(black_box(&LONG[..]))));
    });

    group.finish();
}

criterion_group!(benches, bench_sha1_short, bench_sha1_long);
criterion_main!(benches);
