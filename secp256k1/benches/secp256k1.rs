// -*- mode: rust; -*-
//
// This file is part of secp256k1.
// Copyright (c) 2022-2025 The secp256k1 Authors.
// See LICENSE for licensing information.

//! Benchmarks for the point operations.

use criterion::{criterion_group, criterion_main, Criterion};

use secp256k1::constants::GENERATOR_BYTES;
use secp256k1::ProjectivePoint;

fn bench_decode(c: &mut Criterion) {
    let compressed = ProjectivePoint::generator().to_bytes_compressed();

    c.bench_function("ProjectivePoint::from_bytes uncompressed", |b| {
        b.iter(|| ProjectivePoint::from_bytes(&GENERATOR_BYTES))
    });
    c.bench_function("ProjectivePoint::from_bytes compressed", |b| {
        b.iter(|| ProjectivePoint::from_bytes(compressed.as_bytes()))
    });
}

fn bench_scalar_mul(c: &mut Criterion) {
    let mut rng = rand::rng();
    let mut scalar = [0u8; 32];
    rand::Rng::fill(&mut rng, &mut scalar[..]);
    let point = ProjectivePoint::mul_base(&scalar).unwrap();

    c.bench_function("ProjectivePoint::scalar_mul", |b| {
        b.iter(|| point.scalar_mul(&scalar))
    });
    c.bench_function("ProjectivePoint::mul_base", |b| {
        b.iter(|| ProjectivePoint::mul_base(&scalar))
    });
}

criterion_group! {
    name = secp256k1_benches;
    config = Criterion::default();
    targets =
        bench_decode,
        bench_scalar_mul,
}
criterion_main! {
    secp256k1_benches,
}
