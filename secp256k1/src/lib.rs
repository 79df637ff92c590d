// -*- mode: rust; -*-
//
// This file is part of secp256k1.
// Copyright (c) 2022-2025 The secp256k1 Authors.
// See LICENSE for licensing information.

#![deny(missing_docs)]

//! # secp256k1
//!
//! Constant-time group operations on the secp256k1 curve
//! \\(y\^2 = x\^3 + 7\\) over the prime field
//! \\(\mathbb Z / (2\^{256} - 2\^{32} - 977)\\).
//!
//! The crate provides exactly what a Diffie-Hellman style protocol
//! needs from the curve and nothing more: SEC1 point decoding and
//! encoding, complete (exception-free) point addition, and windowed
//! scalar multiplication against an arbitrary point or the canonical
//! generator.  Signature schemes, key derivation, and randomness are
//! left to higher layers.
//!
//! Every operation that touches secret material is data-oblivious:
//! there are no secret-dependent branches, no secret-indexed table
//! accesses, and no secret-dependent loop bounds.  Field elements live
//! in Montgomery form in four 64-bit limbs; inversion and square roots
//! run fixed addition chains; scalar multiplication scans its window
//! tables with branchless selection from the `subtle` crate.
//!
//! # Example
//!
//! ```
//! use secp256k1::{constants, ProjectivePoint};
//!
//! // Decode the generator from its SEC1 encoding and walk it.
//! let g = ProjectivePoint::from_bytes(&constants::GENERATOR_BYTES).unwrap();
//! let mut scalar = [0u8; 32];
//! scalar[31] = 2;
//! assert_eq!(ProjectivePoint::mul_base(&scalar).unwrap(), g.double());
//! ```

// Internal macros come first so the operator-variant macros are in
// scope everywhere.
#[macro_use]
mod macros;

mod backend;
mod field;
mod window;

pub mod constants;
pub mod traits;
pub mod weierstrass;

mod errors;

pub use crate::errors::Error;
pub use crate::weierstrass::{EncodedPoint, ProjectivePoint};
