// -*- mode: rust; -*-
//
// This file is part of secp256k1.
// Copyright (c) 2022-2025 The secp256k1 Authors.
// See LICENSE for licensing information.

//! Various constants: the curve coefficients, the SEC1 encoding of the
//! base point, and the group order.

use once_cell::sync::Lazy;

use crate::backend::serial::u64::field::FieldElement64;
use crate::field::FieldElement;
use crate::weierstrass::ProjectivePoint;

/// The SEC1 uncompressed encoding of the secp256k1 base point.
pub const GENERATOR_BYTES: [u8; 65] = [
    0x04, // uncompressed
    0x79, 0xBE, 0x66, 0x7E, 0xF9, 0xDC, 0xBB, 0xAC, 0x55, 0xA0, 0x62, 0x95, 0xCE, 0x87, 0x0B,
    0x07, 0x02, 0x9B, 0xFC, 0xDB, 0x2D, 0xCE, 0x28, 0xD9, 0x59, 0xF2, 0x81, 0x5B, 0x16, 0xF8,
    0x17, 0x98, // x
    0x48, 0x3A, 0xDA, 0x77, 0x26, 0xA3, 0xC4, 0x65, 0x5D, 0xA4, 0xFB, 0xFC, 0x0E, 0x11, 0x08,
    0xA8, 0xFD, 0x17, 0xB4, 0x48, 0xA6, 0x85, 0x54, 0x19, 0x9C, 0x47, 0xD0, 0x8F, 0xFB, 0x10,
    0xD4, 0xB8, // y
];

/// The order `n` of the secp256k1 group, as 32 big-endian bytes.
pub const CURVE_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFE, 0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36,
    0x41, 0x41,
];

/// The curve coefficient `b = 7`, in Montgomery form.
pub(crate) const B: FieldElement = FieldElement64([0x0000_0007_0000_1AB7, 0, 0, 0]);

/// The addition-formula constant `b3 = 3·b = 21`, in Montgomery form.
pub(crate) const B3: FieldElement = FieldElement64([0x0000_0015_0000_5025, 0, 0, 0]);

/// The base point, decoded once from its SEC1 encoding on first use.
pub(crate) static GENERATOR: Lazy<ProjectivePoint> = Lazy::new(|| {
    ProjectivePoint::from_bytes(&GENERATOR_BYTES)
        .expect("the generator encoding is a valid curve point")
});
