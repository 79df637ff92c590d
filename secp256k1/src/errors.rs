// -*- mode: rust; -*-
//
// This file is part of secp256k1.
// Copyright (c) 2022-2025 The secp256k1 Authors.
// See LICENSE for licensing information.

//! Errors which may occur when parsing field elements or curve points
//! from wire formats.

use core::fmt;
use core::fmt::Display;

/// Errors raised at the decoding boundaries of the crate.
///
/// Internal arithmetic cannot fail; every variant here reports invalid
/// input, and the output of the failing operation is untouched.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// A field element encoding was not 32 bytes, or encoded a value
    /// greater than or equal to the field prime.
    InvalidElementEncoding,
    /// A point encoding had an unrecognized length/prefix combination.
    InvalidPointEncoding,
    /// Decoded affine coordinates do not satisfy `y² = x³ + 7`.
    NotOnCurve,
    /// A compressed encoding named an x-coordinate with no square root
    /// for `x³ + 7`.
    InvalidCompressedPoint,
    /// The x-coordinate of the point at infinity was requested.
    IsIdentity,
    /// A scalar was not exactly 32 bytes.
    InvalidScalarLength,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InvalidElementEncoding => write!(f, "invalid field element encoding"),
            Error::InvalidPointEncoding => write!(f, "invalid point encoding"),
            Error::NotOnCurve => write!(f, "point not on curve"),
            Error::InvalidCompressedPoint => write!(f, "invalid compressed point encoding"),
            Error::IsIdentity => write!(f, "point is the point at infinity"),
            Error::InvalidScalarLength => write!(f, "invalid scalar length"),
        }
    }
}

impl std::error::Error for Error {}
