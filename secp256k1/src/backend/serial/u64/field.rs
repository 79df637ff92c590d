// -*- mode: rust; -*-
//
// This file is part of secp256k1.
// Copyright (c) 2022-2025 The secp256k1 Authors.
// See LICENSE for licensing information.

//! Field arithmetic modulo \\(p = 2\^{256} - 2\^{32} - 977\\), using
//! \\(64\\)-bit limbs with \\(128\\)-bit products.
//!
//! Elements are kept in the Montgomery domain: a residue \\(a\\) is
//! represented by the four little-endian limbs of \\(a \cdot R \bmod p\\)
//! with \\(R = 2\^{256}\\).  Multiplication interleaves a schoolbook
//! product with Montgomery reduction, so no value ever leaves the range
//! \\([0, p)\\) between public operations.

use core::fmt::Debug;
use core::ops::Neg;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::errors::Error;

/// The prime \\(p = 2\^{256} - 2\^{32} - 977\\), as little-endian limbs.
pub(crate) const P: [u64; 4] = [
    0xFFFF_FFFE_FFFF_FC2F,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
];

/// The Montgomery constant \\(-p\^{-1} \bmod 2\^{64}\\).
const P_INV: u64 = 0xD838_091D_D225_3531;

/// A `FieldElement64` represents an element of the field
/// \\( \mathbb Z / (2\^{256} - 2\^{32} - 977)\\).
///
/// The limbs hold the Montgomery form `a·R mod p` and are always fully
/// reduced, so the representation of each residue is unique and the
/// all-zero limb pattern is the zero element.
///
/// The `secp256k1::field` module provides the type alias
/// `secp256k1::field::FieldElement` to this type, together with the
/// inversion and square-root chains built on top of it.
#[derive(Copy, Clone)]
pub struct FieldElement64(pub(crate) [u64; 4]);

impl Debug for FieldElement64 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FieldElement64({:?})", &self.0[..])
    }
}

impl Default for FieldElement64 {
    /// The zero element.
    fn default() -> FieldElement64 {
        FieldElement64::ZERO
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement64 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// Compute `a + b + carry`, returning the sum and the carry-out.
#[inline(always)]
const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute `a - b - borrow`, returning the difference and the
/// borrow-out (`0` or `1`).
#[inline(always)]
const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + (borrow as u128));
    (ret as u64, ((ret >> 64) as u64) & 1)
}

/// Compute `a + b * c + carry`, returning the low limb and the new
/// carry.  The result cannot overflow 128 bits.
#[inline(always)]
const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) * (c as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

impl FieldElement64 {
    /// The zero element.
    pub const ZERO: FieldElement64 = FieldElement64([0, 0, 0, 0]);

    /// The multiplicative identity, `1·R mod p`.
    pub const ONE: FieldElement64 = FieldElement64([0x0000_0001_0000_03D1, 0, 0, 0]);

    /// `R² mod p`, the factor that carries a plain residue into the
    /// Montgomery domain.
    const R2: FieldElement64 = FieldElement64([0x0000_07A2_000E_90A1, 0x0000_0000_0000_0001, 0, 0]);

    /// Reduce a value below \\(2p\\), spread over four limbs plus a
    /// carry bit, to its canonical residue.
    #[inline]
    fn conditional_reduce(limbs: [u64; 4], carry: u64) -> FieldElement64 {
        let (s0, borrow) = sbb(limbs[0], P[0], 0);
        let (s1, borrow) = sbb(limbs[1], P[1], borrow);
        let (s2, borrow) = sbb(limbs[2], P[2], borrow);
        let (s3, borrow) = sbb(limbs[3], P[3], borrow);
        let (_, borrow) = sbb(carry, 0, borrow);

        // A final borrow means the value was already below p; keep the
        // unsubtracted limbs in that case.
        let keep = Choice::from(borrow as u8);
        FieldElement64([
            u64::conditional_select(&s0, &limbs[0], keep),
            u64::conditional_select(&s1, &limbs[1], keep),
            u64::conditional_select(&s2, &limbs[2], keep),
            u64::conditional_select(&s3, &limbs[3], keep),
        ])
    }

    /// Montgomery reduction of a 512-bit product: computes
    /// \\(t \cdot R\^{-1} \bmod p\\).
    #[inline]
    fn montgomery_reduce(t: [u64; 8]) -> FieldElement64 {
        // One round per input limb: fold k·p into the buffer so that the
        // lowest remaining limb becomes zero, then shift down.  After
        // four rounds the result is below 2p.
        let k = t[0].wrapping_mul(P_INV);
        let (_, carry) = mac(t[0], k, P[0], 0);
        let (r1, carry) = mac(t[1], k, P[1], carry);
        let (r2, carry) = mac(t[2], k, P[2], carry);
        let (r3, carry) = mac(t[3], k, P[3], carry);
        let (r4, c4) = adc(t[4], 0, carry);

        let k = r1.wrapping_mul(P_INV);
        let (_, carry) = mac(r1, k, P[0], 0);
        let (r2, carry) = mac(r2, k, P[1], carry);
        let (r3, carry) = mac(r3, k, P[2], carry);
        let (r4, carry) = mac(r4, k, P[3], carry);
        let (r5, c5) = adc(t[5], c4, carry);

        let k = r2.wrapping_mul(P_INV);
        let (_, carry) = mac(r2, k, P[0], 0);
        let (r3, carry) = mac(r3, k, P[1], carry);
        let (r4, carry) = mac(r4, k, P[2], carry);
        let (r5, carry) = mac(r5, k, P[3], carry);
        let (r6, c6) = adc(t[6], c5, carry);

        let k = r3.wrapping_mul(P_INV);
        let (_, carry) = mac(r3, k, P[0], 0);
        let (r4, carry) = mac(r4, k, P[1], carry);
        let (r5, carry) = mac(r5, k, P[2], carry);
        let (r6, carry) = mac(r6, k, P[3], carry);
        let (r7, c7) = adc(t[7], c6, carry);

        FieldElement64::conditional_reduce([r4, r5, r6, r7], c7)
    }

    /// Compute `self * self`.
    pub fn square(&self) -> FieldElement64 {
        self * self
    }

    /// Compute `self^(2^k)` by successive squarings.  `k` must be
    /// nonzero.
    pub fn pow2k(&self, k: u32) -> FieldElement64 {
        debug_assert!(k > 0);
        let mut z = self.square();
        for _ in 1..k {
            z = z.square();
        }
        z
    }

    /// Deserialize a 32-byte big-endian canonical encoding.
    ///
    /// Returns `Error::InvalidElementEncoding` unless the input is
    /// exactly 32 bytes and encodes a value below \\(p\\).  The bound
    /// check runs in constant time, although the encoding itself is
    /// public data.
    pub fn from_bytes(bytes: &[u8]) -> Result<FieldElement64, Error> {
        if bytes.len() != 32 {
            return Err(Error::InvalidElementEncoding);
        }
        let mut word = [0u8; 8];
        let mut limbs = [0u64; 4];
        for i in 0..4 {
            word.copy_from_slice(&bytes[8 * (3 - i)..8 * (4 - i)]);
            limbs[i] = u64::from_be_bytes(word);
        }

        // Non-canonical encodings (p + k, 2p + k, ...) are rejected by
        // subtracting p: no borrow means the value is at least p.
        let (_, borrow) = sbb(limbs[0], P[0], 0);
        let (_, borrow) = sbb(limbs[1], P[1], borrow);
        let (_, borrow) = sbb(limbs[2], P[2], borrow);
        let (_, borrow) = sbb(limbs[3], P[3], borrow);
        if borrow == 0 {
            return Err(Error::InvalidElementEncoding);
        }

        // Carry the plain residue into the Montgomery domain.
        Ok(&FieldElement64(limbs) * &FieldElement64::R2)
    }

    /// Serialize to the 32-byte big-endian canonical encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        // Leaving the Montgomery domain is a reduction of the bare
        // limbs padded with four zero limbs.
        let plain = FieldElement64::montgomery_reduce([
            self.0[0], self.0[1], self.0[2], self.0[3], 0, 0, 0, 0,
        ]);
        let mut bytes = [0u8; 32];
        bytes[0..8].copy_from_slice(&plain.0[3].to_be_bytes());
        bytes[8..16].copy_from_slice(&plain.0[2].to_be_bytes());
        bytes[16..24].copy_from_slice(&plain.0[1].to_be_bytes());
        bytes[24..32].copy_from_slice(&plain.0[0].to_be_bytes());
        bytes
    }
}

impl ConditionallySelectable for FieldElement64 {
    fn conditional_select(a: &FieldElement64, b: &FieldElement64, choice: Choice) -> FieldElement64 {
        FieldElement64([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
        ])
    }
}

impl<'a, 'b> Add<&'b FieldElement64> for &'a FieldElement64 {
    type Output = FieldElement64;
    fn add(self, rhs: &'b FieldElement64) -> FieldElement64 {
        let (r0, carry) = adc(self.0[0], rhs.0[0], 0);
        let (r1, carry) = adc(self.0[1], rhs.0[1], carry);
        let (r2, carry) = adc(self.0[2], rhs.0[2], carry);
        let (r3, carry) = adc(self.0[3], rhs.0[3], carry);
        FieldElement64::conditional_reduce([r0, r1, r2, r3], carry)
    }
}

impl<'b> AddAssign<&'b FieldElement64> for FieldElement64 {
    fn add_assign(&mut self, rhs: &'b FieldElement64) {
        *self = &*self + rhs;
    }
}

impl<'a, 'b> Sub<&'b FieldElement64> for &'a FieldElement64 {
    type Output = FieldElement64;
    fn sub(self, rhs: &'b FieldElement64) -> FieldElement64 {
        let (r0, borrow) = sbb(self.0[0], rhs.0[0], 0);
        let (r1, borrow) = sbb(self.0[1], rhs.0[1], borrow);
        let (r2, borrow) = sbb(self.0[2], rhs.0[2], borrow);
        let (r3, borrow) = sbb(self.0[3], rhs.0[3], borrow);

        // On borrow, add p back in; the mask keeps the addend zero
        // otherwise.
        let mask = borrow.wrapping_neg();
        let (r0, carry) = adc(r0, mask & P[0], 0);
        let (r1, carry) = adc(r1, mask & P[1], carry);
        let (r2, carry) = adc(r2, mask & P[2], carry);
        let (r3, _) = adc(r3, mask & P[3], carry);
        FieldElement64([r0, r1, r2, r3])
    }
}

impl<'b> SubAssign<&'b FieldElement64> for FieldElement64 {
    fn sub_assign(&mut self, rhs: &'b FieldElement64) {
        *self = &*self - rhs;
    }
}

impl<'a, 'b> Mul<&'b FieldElement64> for &'a FieldElement64 {
    type Output = FieldElement64;
    fn mul(self, rhs: &'b FieldElement64) -> FieldElement64 {
        let a = &self.0;
        let b = &rhs.0;

        // Schoolbook 4x4 product into eight limbs.
        let (t0, carry) = mac(0, a[0], b[0], 0);
        let (t1, carry) = mac(0, a[0], b[1], carry);
        let (t2, carry) = mac(0, a[0], b[2], carry);
        let (t3, t4) = mac(0, a[0], b[3], carry);

        let (t1, carry) = mac(t1, a[1], b[0], 0);
        let (t2, carry) = mac(t2, a[1], b[1], carry);
        let (t3, carry) = mac(t3, a[1], b[2], carry);
        let (t4, t5) = mac(t4, a[1], b[3], carry);

        let (t2, carry) = mac(t2, a[2], b[0], 0);
        let (t3, carry) = mac(t3, a[2], b[1], carry);
        let (t4, carry) = mac(t4, a[2], b[2], carry);
        let (t5, t6) = mac(t5, a[2], b[3], carry);

        let (t3, carry) = mac(t3, a[3], b[0], 0);
        let (t4, carry) = mac(t4, a[3], b[1], carry);
        let (t5, carry) = mac(t5, a[3], b[2], carry);
        let (t6, t7) = mac(t6, a[3], b[3], carry);

        FieldElement64::montgomery_reduce([t0, t1, t2, t3, t4, t5, t6, t7])
    }
}

impl<'b> MulAssign<&'b FieldElement64> for FieldElement64 {
    fn mul_assign(&mut self, rhs: &'b FieldElement64) {
        *self = &*self * rhs;
    }
}

impl<'a> Neg for &'a FieldElement64 {
    type Output = FieldElement64;
    fn neg(self) -> FieldElement64 {
        &FieldElement64::ZERO - self
    }
}

impl Neg for FieldElement64 {
    type Output = FieldElement64;
    fn neg(self) -> FieldElement64 {
        -&self
    }
}

define_add_variants!(LHS = FieldElement64, RHS = FieldElement64, Output = FieldElement64);
define_add_assign_variants!(LHS = FieldElement64, RHS = FieldElement64);
define_sub_variants!(LHS = FieldElement64, RHS = FieldElement64, Output = FieldElement64);
define_sub_assign_variants!(LHS = FieldElement64, RHS = FieldElement64);
define_mul_variants!(LHS = FieldElement64, RHS = FieldElement64, Output = FieldElement64);
define_mul_assign_variants!(LHS = FieldElement64, RHS = FieldElement64);
