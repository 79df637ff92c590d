// -*- mode: rust; -*-
//
// This file is part of secp256k1.
// Copyright (c) 2022-2025 The secp256k1 Authors.
// See LICENSE for licensing information.

#![deny(missing_docs)]

//! # secp256k1-ecdh
//!
//! Diffie-Hellman key exchange over the secp256k1 curve (sometimes
//! written "S-256" in ECDH registries), built on the constant-time
//! group operations of the `secp256k1` crate.
//!
//! Private keys are uniform scalars in \\([1, n)\\), obtained by
//! rejection sampling from caller-supplied randomness.  Public keys
//! travel in the SEC1 uncompressed form only, and are validated to be
//! on the curve when constructed.  The shared secret is the affine
//! x-coordinate of the Diffie-Hellman point, as 32 big-endian bytes;
//! deriving a key from it is the caller's business.

mod ecdh;

pub use crate::ecdh::*;
