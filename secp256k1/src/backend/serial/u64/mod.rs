// -*- mode: rust; -*-
//
// This file is part of secp256k1.
// Copyright (c) 2022-2025 The secp256k1 Authors.
// See LICENSE for licensing information.

//! The `u64` backend: four 64-bit limbs with `u128` products.

pub mod field;
