// -*- mode: rust; -*-
//
// This file is part of secp256k1.
// Copyright (c) 2022-2025 The secp256k1 Authors.
// See LICENSE for licensing information.

//! secp256k1 Diffie-Hellman key exchange.

use core::fmt;
use core::fmt::Display;

use rand_core::CryptoRng;
use subtle::Choice;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

use secp256k1::constants::CURVE_ORDER;
use secp256k1::ProjectivePoint;

/// Errors which may occur while constructing keys or agreeing on a
/// shared secret.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// A private key was not 32 bytes, was zero, or was not below the
    /// group order.
    InvalidPrivateKey,
    /// A public key was not a valid uncompressed encoding of a curve
    /// point.
    InvalidPublicKey,
    /// The key exchange produced the point at infinity.
    IdentitySharedSecret,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InvalidPrivateKey => write!(f, "invalid secp256k1 private key"),
            Error::InvalidPublicKey => write!(f, "invalid secp256k1 public key"),
            Error::IdentitySharedSecret => {
                write!(f, "key exchange produced the point at infinity")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Constant-time check that a 32-byte buffer is all zeroes.
fn ct_is_zero(bytes: &[u8; 32]) -> Choice {
    let mut acc = 0u8;
    for b in bytes {
        acc |= b;
    }
    acc.ct_eq(&0)
}

/// Constant-time `a < b` for 32-byte big-endian buffers.
///
/// The comparison is a subtract-with-borrow over 64-bit limbs, least
/// significant first; a final borrow means `a < b`.  No limb
/// short-circuits, so secret operands are safe here.
fn ct_less(a: &[u8; 32], b: &[u8; 32]) -> Choice {
    let mut word = [0u8; 8];
    let mut borrow = 0u64;
    for i in (0..4).rev() {
        word.copy_from_slice(&a[8 * i..8 * i + 8]);
        let limb_a = u64::from_be_bytes(word);
        word.copy_from_slice(&b[8 * i..8 * i + 8]);
        let limb_b = u64::from_be_bytes(word);

        let diff = (limb_a as u128).wrapping_sub((limb_b as u128) + (borrow as u128));
        borrow = ((diff >> 64) as u64) & 1;
    }
    Choice::from(borrow as u8)
}

/// A secp256k1 Diffie-Hellman private key: a scalar in \\([1, n)\\).
///
/// The key deliberately has no `Debug` implementation, and wipes its
/// bytes on drop when the `zeroize` feature is enabled.
#[derive(Clone)]
pub struct PrivateKey([u8; 32]);

impl PrivateKey {
    /// Generate a new `PrivateKey` with the supplied RNG.
    ///
    /// Candidate scalars are drawn until one lands in \\([1, n)\\);
    /// each candidate is tested with the same constant-time predicate
    /// used by [`PrivateKey::from_bytes`].
    pub fn random_from_rng<R: CryptoRng + ?Sized>(csprng: &mut R) -> Self {
        let mut bytes = [0u8; 32];
        loop {
            csprng.fill_bytes(&mut bytes);
            if let Ok(key) = PrivateKey::from_bytes(&bytes) {
                return key;
            }
        }
    }

    /// Construct a `PrivateKey` from its byte representation.
    ///
    /// The input must be exactly 32 big-endian bytes encoding a
    /// nonzero scalar below the group order; anything else is
    /// rejected.  The range checks run in constant time.
    pub fn from_bytes(bytes: &[u8]) -> Result<PrivateKey, Error> {
        let bytes: [u8; 32] = bytes.try_into().map_err(|_| Error::InvalidPrivateKey)?;
        let valid = !ct_is_zero(&bytes) & ct_less(&bytes, &CURVE_ORDER);
        if valid.into() {
            Ok(PrivateKey(bytes))
        } else {
            Err(Error::InvalidPrivateKey)
        }
    }

    /// Compute the corresponding public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from(self)
    }

    /// Perform a Diffie-Hellman key agreement between `self` and
    /// `their_public` to produce a [`SharedSecret`].
    pub fn diffie_hellman(&self, their_public: &PublicKey) -> Result<SharedSecret, Error> {
        let remote =
            ProjectivePoint::from_bytes(&their_public.0).map_err(|_| Error::InvalidPublicKey)?;
        let shared = remote.scalar_mul(&self.0);
        // Unreachable with a validated key and an on-curve public
        // point (the cofactor is 1), but surfaced rather than trusted.
        let x = shared
            .to_bytes_x()
            .map_err(|_| Error::IdentitySharedSecret)?;
        Ok(SharedSecret(x))
    }

    /// Extract this key's bytes for serialization.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// View this key as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        #[cfg(feature = "zeroize")]
        self.0.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for PrivateKey {}

/// A secp256k1 Diffie-Hellman public key, held in the SEC1
/// uncompressed encoding `0x04 ‖ X ‖ Y`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PublicKey([u8; 65]);

impl PublicKey {
    /// Construct a `PublicKey` from its SEC1 byte representation.
    ///
    /// Only the 65-byte uncompressed form is accepted; the point at
    /// infinity and compressed encodings are rejected, as is any point
    /// not on the curve.
    pub fn from_bytes(bytes: &[u8]) -> Result<PublicKey, Error> {
        if bytes.len() != 65 || bytes[0] != 0x04 {
            return Err(Error::InvalidPublicKey);
        }
        // Decoding checks that the coordinates are canonical and the
        // point is on the curve.
        ProjectivePoint::from_bytes(bytes).map_err(|_| Error::InvalidPublicKey)?;

        let mut encoded = [0u8; 65];
        encoded.copy_from_slice(bytes);
        Ok(PublicKey(encoded))
    }

    /// Extract this key's bytes for serialization.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 65] {
        self.0
    }

    /// View this key as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 65] {
        &self.0
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<'a> From<&'a PrivateKey> for PublicKey {
    /// Given a secp256k1 [`PrivateKey`], compute its corresponding
    /// [`PublicKey`].
    fn from(secret: &'a PrivateKey) -> PublicKey {
        let point = ProjectivePoint::mul_base(&secret.0)
            .expect("a private key scalar is exactly 32 bytes");
        let encoded = point.to_bytes();
        // Only the zero scalar maps to the identity, and zero is
        // rejected at key construction.
        PublicKey(
            encoded
                .as_bytes()
                .try_into()
                .expect("a valid private key never derives the identity"),
        )
    }
}

/// The result of a Diffie-Hellman key exchange: the affine
/// x-coordinate of the shared point.
///
/// Wipes its bytes on drop when the `zeroize` feature is enabled.
pub struct SharedSecret([u8; 32]);

impl SharedSecret {
    /// Convert this shared secret to a byte array.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// View this shared secret as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        #[cfg(feature = "zeroize")]
        self.0.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for SharedSecret {}
