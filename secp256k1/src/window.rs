// -*- mode: rust; -*-
//
// This file is part of secp256k1.
// Copyright (c) 2022-2025 The secp256k1 Authors.
// See LICENSE for licensing information.

//! Fixed-window lookup tables for scalar multiplication.

#![allow(non_snake_case)]

use core::fmt::Debug;

use once_cell::sync::Lazy;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

use crate::weierstrass::ProjectivePoint;

/// A lookup table of precomputed multiples of a point \\(P\\), holding
/// \\([1]P\\) through \\([15]P\\) at offset \\(-1\\); \\([0]P\\) is
/// implicitly the identity.
///
/// Retrieval through `select` is done in constant time by scanning
/// every entry.  `LookupTable` deliberately does not implement
/// `Index`, so the table cannot be used with a secret index by
/// accident.
#[derive(Copy, Clone)]
pub(crate) struct LookupTable([ProjectivePoint; 15]);

impl LookupTable {
    /// Given \\(n \in [0, 15]\\), return \\(nP\\) in constant time.
    ///
    /// Where `P` is the base point that was used to create this
    /// lookup table.  Out-of-range values are a programmer error.
    pub fn select(&self, n: u8) -> ProjectivePoint {
        debug_assert!(n < 16);

        // Set t = 0 * P = identity, then copy `self.0[i-1] == i*P`
        // onto it when `i == n`.
        let mut t = ProjectivePoint::IDENTITY;
        for i in 1..16u8 {
            let c = i.ct_eq(&n);
            t.conditional_assign(&self.0[(i - 1) as usize], c);
        }
        t
    }
}

impl Debug for LookupTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "LookupTable({:?})", &self.0[..])
    }
}

impl<'a> From<&'a ProjectivePoint> for LookupTable {
    /// Build the table `[P, 2P, 3P, ..., 15P]` with seven doublings
    /// and seven additions.
    fn from(P: &'a ProjectivePoint) -> LookupTable {
        let mut points = [*P; 15];
        for i in (1..15).step_by(2) {
            points[i] = points[i / 2].double();
            points[i + 1] = &points[i] + P;
        }
        LookupTable(points)
    }
}

/// The generator tables: table `k` holds the first fifteen multiples
/// of \\(2\^{4k} G\\), so fixed-base multiplication consumes one
/// nibble per table and never doubles.
///
/// The tables are built once, on first use, behind a one-shot
/// initializer; afterwards they are immutable and freely shared
/// between threads.  This is the crate's only long-lived heap
/// allocation.
static BASEPOINT_TABLES: Lazy<Box<[LookupTable; 64]>> = Lazy::new(|| {
    let mut tables = Box::new([LookupTable([ProjectivePoint::IDENTITY; 15]); 64]);
    let mut base = ProjectivePoint::generator();
    for table in tables.iter_mut() {
        *table = LookupTable::from(&base);
        base = base.mul_by_pow_2(4);
    }
    tables
});

/// Access the shared generator tables.
pub(crate) fn basepoint_tables() -> &'static [LookupTable; 64] {
    &BASEPOINT_TABLES
}
