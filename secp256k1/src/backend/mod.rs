// -*- mode: rust; -*-
//
// This file is part of secp256k1.
// Copyright (c) 2022-2025 The secp256k1 Authors.
// See LICENSE for licensing information.

//! Pluggable implementations for different architectures.
//!
//! Only a serial 64-bit backend exists today; the module structure
//! leaves room for vectorized or 32-bit implementations alongside it.

pub mod serial;
