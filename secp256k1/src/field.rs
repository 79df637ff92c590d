// -*- mode: rust; -*-
//
// This file is part of secp256k1.
// Copyright (c) 2022-2025 The secp256k1 Authors.
// See LICENSE for licensing information.

//! Field arithmetic modulo \\(p = 2\^{256} - 2\^{32} - 977\\).
//!
//! Operations defined in terms of machine words, such as
//! multiplication or squaring, live in the `backend` module.
//! Operations defined in terms of other field operations, such as
//! inversion or square roots, are defined here.

use subtle::Choice;
use subtle::ConstantTimeEq;

use crate::backend;

/// A `FieldElement` represents an element of the field
/// \\( \mathbb Z / (2\^{256} - 2\^{32} - 977)\\).
///
/// The `FieldElement` type is an alias for the serial 64-bit
/// implementation.
pub(crate) type FieldElement = backend::serial::u64::field::FieldElement64;

impl Eq for FieldElement {}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        self.ct_eq(other).into()
    }
}

impl ConstantTimeEq for FieldElement {
    /// Test equality between two `FieldElement`s.  The limbs are fully
    /// reduced, but comparison happens on the canonical wire encoding
    /// so that equality never depends on the internal representation.
    fn ct_eq(&self, other: &FieldElement) -> Choice {
        self.to_bytes().ct_eq(&other.to_bytes())
    }
}

impl FieldElement {
    /// Determine if this `FieldElement` is zero.
    ///
    /// # Return
    ///
    /// If zero, return `Choice(1)`.  Otherwise, return `Choice(0)`.
    pub(crate) fn is_zero(&self) -> Choice {
        let zero = [0u8; 32];
        self.to_bytes().ct_eq(&zero)
    }

    /// Determine if the canonical encoding of this `FieldElement` is
    /// odd, i.e. whether its low bit is set.  This is the parity used
    /// by the SEC1 compressed point format.
    pub(crate) fn is_odd(&self) -> Choice {
        let bytes = self.to_bytes();
        (bytes[31] & 1).into()
    }

    /// Given a nonzero field element, compute its inverse.
    ///
    /// The inverse is computed as self^(p-2), since
    /// x^(p-2)x = x^(p-1) = 1 (mod p).
    ///
    /// This function returns zero on input zero.
    #[rustfmt::skip] // keep alignment of explanatory comments
    pub(crate) fn invert(&self) -> FieldElement {
        // The sequence of 15 multiplications and 255 squarings is
        // derived from the following addition chain for p - 2,
        // generated with github.com/mmcloughlin/addchain v0.4.0:
        //
        //  _10     = 2*1
        //  _100    = 2*_10
        //  _101    = 1 + _100
        //  _111    = _10 + _101
        //  _1110   = 2*_111
        //  _111000 = _1110 << 2
        //  _111111 = _111 + _111000
        //  i13     = _111111 << 4 + _1110
        //  x12     = i13 << 2 + _111
        //  x22     = x12 << 10 + i13 + 1
        //  i29     = 2*x22
        //  i31     = i29 << 2
        //  i54     = i31 << 22 + i31
        //  i122    = (i54 << 20 + i29) << 46 + i54
        //  x223    = i122 << 110 + i122 + _111
        //  i269    = ((x223 << 23 + x22) << 7 + _101) << 3
        //  return    _101 + i269
        let x = self;
        let _10      = x.square();
        let _100     = _10.square();
        let _101     = x * &_100;
        let _111     = &_10 * &_101;
        let _1110    = _111.square();
        let _111000  = _1110.pow2k(2);
        let _111111  = &_111 * &_111000;
        let i13      = &_111111.pow2k(4) * &_1110;
        let x12      = &i13.pow2k(2) * &_111;
        let x22      = &(&x12.pow2k(10) * &i13) * x;
        let i29      = x22.square();
        let i31      = i29.pow2k(2);
        let i54      = &i31.pow2k(22) * &i31;
        let i122     = &(&i54.pow2k(20) * &i29).pow2k(46) * &i54;
        let x223     = &(&i122.pow2k(110) * &i122) * &_111;
        let i269     = (&(&x223.pow2k(23) * &x22).pow2k(7) * &_101).pow2k(3);

        &_101 * &i269
    }

    /// Attempt to compute the square root of this `FieldElement` in
    /// constant time.
    ///
    /// Since \\(p \equiv 3 \pmod 4\\), exponentiation by
    /// \\((p + 1) / 4\\) yields a square-root candidate, which is then
    /// verified by squaring.
    ///
    /// # Return
    ///
    /// - `(Choice(1), sqrt(self))` if `self` is a square;
    /// - `(Choice(0), candidate)` otherwise, where the candidate is
    ///   not a root and must be discarded by the caller.
    ///
    /// Both roots exist when the first component is set; selecting
    /// between them is the caller's business.
    #[rustfmt::skip] // keep alignment of explanatory comments
    pub(crate) fn sqrt(&self) -> (Choice, FieldElement) {
        // The sequence of 13 multiplications and 253 squarings is
        // derived from the following addition chain for (p + 1) / 4,
        // generated with github.com/mmcloughlin/addchain v0.4.0:
        //
        //  _10      = 2*1
        //  _11      = 1 + _10
        //  _1100    = _11 << 2
        //  _1111    = _11 + _1100
        //  _11110   = 2*_1111
        //  _11111   = 1 + _11110
        //  _1111100 = _11111 << 2
        //  _1111111 = _11 + _1111100
        //  x11      = _1111111 << 4 + _1111
        //  x22      = x11 << 11 + x11
        //  x27      = x22 << 5 + _11111
        //  x54      = x27 << 27 + x27
        //  x108     = x54 << 54 + x54
        //  x216     = x108 << 108 + x108
        //  x223     = x216 << 7 + _1111111
        //  return     ((x223 << 23 + x22) << 6 + _11) << 2
        let x = self;
        let _11       = x * &x.square();
        let _1111     = &_11 * &_11.pow2k(2);
        let _11111    = x * &_1111.square();
        let _1111111  = &_11 * &_11111.pow2k(2);
        let x11       = &_1111111.pow2k(4) * &_1111;
        let x22       = &x11.pow2k(11) * &x11;
        let x27       = &x22.pow2k(5) * &_11111;
        let x54       = &x27.pow2k(27) * &x27;
        let x108      = &x54.pow2k(54) * &x54;
        let x216      = &x108.pow2k(108) * &x108;
        let x223      = &x216.pow2k(7) * &_1111111;
        let candidate = (&(&x223.pow2k(23) * &x22).pow2k(6) * &_11).pow2k(2);

        let is_square = candidate.square().ct_eq(x);
        (is_square, candidate)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;

    /// The canonical encoding of p - 1.
    const P_MINUS_ONE_BYTES: [u8; 32] =
        hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2e");

    fn fe(n: u64) -> FieldElement {
        let mut bytes = [0u8; 32];
        bytes[24..32].copy_from_slice(&n.to_be_bytes());
        FieldElement::from_bytes(&bytes).unwrap()
    }

    #[test]
    fn invert_is_multiplicative_inverse() {
        for n in [1u64, 2, 3, 977, 0xFFFF_FFFF_FFFF_FFFF] {
            let a = fe(n);
            assert_eq!(&a * &a.invert(), FieldElement::ONE);
        }
        let p_minus_one = FieldElement::from_bytes(&P_MINUS_ONE_BYTES).unwrap();
        assert_eq!(&p_minus_one * &p_minus_one.invert(), FieldElement::ONE);
    }

    #[test]
    fn invert_zero_is_zero() {
        assert_eq!(FieldElement::ZERO.invert(), FieldElement::ZERO);
    }

    #[test]
    fn invert_round_trips() {
        let a = fe(0x1234_5678_9ABC_DEF0);
        assert_eq!(a.invert().invert(), a);
    }

    #[test]
    fn sqrt_of_squares() {
        for n in [1u64, 2, 3, 4, 9, 977, 0xFFFF_FFFF] {
            let a = fe(n);
            let (is_square, root) = a.square().sqrt();
            assert!(bool::from(is_square));
            // Either root is acceptable.
            assert!(root == a || root == -&a);
        }
    }

    #[test]
    fn sqrt_of_nonresidue_fails() {
        // p - 1 is a non-residue since p = 3 mod 4.
        let p_minus_one = FieldElement::from_bytes(&P_MINUS_ONE_BYTES).unwrap();
        let (is_square, _) = p_minus_one.sqrt();
        assert!(!bool::from(is_square));
    }

    #[test]
    fn sqrt_of_zero() {
        let (is_square, root) = FieldElement::ZERO.sqrt();
        assert!(bool::from(is_square));
        assert_eq!(root, FieldElement::ZERO);
    }

    #[test]
    fn parity() {
        assert!(!bool::from(FieldElement::ZERO.is_odd()));
        assert!(bool::from(FieldElement::ONE.is_odd()));
        assert!(!bool::from(fe(2).is_odd()));
        // p - 1 is even.
        let p_minus_one = FieldElement::from_bytes(&P_MINUS_ONE_BYTES).unwrap();
        assert!(!bool::from(p_minus_one.is_odd()));
    }

    #[test]
    fn equality_is_on_values() {
        let a = fe(5);
        let b = &(&fe(2) + &fe(3)) * &FieldElement::ONE;
        assert_eq!(a, b);
        assert!(bool::from(a.ct_eq(&b)));
        assert_ne!(a, fe(6));
    }

    #[test]
    fn is_zero() {
        assert!(bool::from(FieldElement::ZERO.is_zero()));
        assert!(!bool::from(FieldElement::ONE.is_zero()));
        let a = fe(77);
        assert!(bool::from((&a - &a).is_zero()));
    }
}
