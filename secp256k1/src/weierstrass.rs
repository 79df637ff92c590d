// -*- mode: rust; -*-
//
// This file is part of secp256k1.
// Copyright (c) 2022-2025 The secp256k1 Authors.
// See LICENSE for licensing information.

//! Group operations on the short Weierstrass curve
//! \\(y\^2 = x\^3 + 7\\) in projective coordinates.
//!
//! A point \\((X : Y : Z)\\) with \\(Z \neq 0\\) represents the affine
//! point \\((X/Z, Y/Z)\\); \\(Z = 0\\) is the point at infinity.  The
//! addition law is the complete formula set for \\(a = 0\\) curves from
//! Renes, Costello, and Batina, "Complete addition formulas for prime
//! order elliptic curves" (<https://eprint.iacr.org/2015/1060>, §A.3):
//! it is correct for every input pair, including doublings, inverses
//! and the identity, so no secret-dependent case analysis ever runs.

#![allow(non_snake_case)]

use core::fmt::Debug;
use core::ops::{Add, AddAssign};
use core::ops::{Neg, Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallyNegatable;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::constants;
use crate::errors::Error;
use crate::field::FieldElement;
use crate::traits::{Identity, ValidityCheck};
use crate::window::{basepoint_tables, LookupTable};

/// A point on the secp256k1 curve, in projective coordinates.
#[derive(Copy, Clone)]
pub struct ProjectivePoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
}

/// The SEC1 §2.3 encoding of a curve point: a single `0x00` byte for
/// the point at infinity, 33 bytes for the compressed form, or 65
/// bytes for the uncompressed form.
#[derive(Copy, Clone)]
pub struct EncodedPoint {
    bytes: [u8; 65],
    len: usize,
}

impl EncodedPoint {
    /// The encoding of the point at infinity.
    fn identity() -> EncodedPoint {
        EncodedPoint {
            bytes: [0u8; 65],
            len: 1,
        }
    }

    /// View this encoding as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl AsRef<[u8]> for EncodedPoint {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Debug for EncodedPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "EncodedPoint({:?})", self.as_bytes())
    }
}

impl Eq for EncodedPoint {}

impl PartialEq for EncodedPoint {
    fn eq(&self, other: &EncodedPoint) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

/// Compute the curve polynomial `x³ + b`.
fn polynomial(x: &FieldElement) -> FieldElement {
    &(&x.square() * x) + &constants::B
}

impl Identity for ProjectivePoint {
    fn identity() -> ProjectivePoint {
        ProjectivePoint::IDENTITY
    }
}

impl Default for ProjectivePoint {
    fn default() -> ProjectivePoint {
        ProjectivePoint::IDENTITY
    }
}

impl Debug for ProjectivePoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProjectivePoint")
            .field("X", &self.X)
            .field("Y", &self.Y)
            .field("Z", &self.Z)
            .finish()
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for ProjectivePoint {
    fn zeroize(&mut self) {
        self.X.zeroize();
        self.Y.zeroize();
        self.Z.zeroize();
        *self = ProjectivePoint::IDENTITY;
    }
}

impl ConstantTimeEq for ProjectivePoint {
    /// Projective coordinates are not unique: \\((X : Y : Z)\\) and
    /// \\((\lambda X : \lambda Y : \lambda Z)\\) name the same point.
    /// Equality therefore cross-multiplies: \\(x = x'\\) iff
    /// \\(X Z' = X' Z\\), and likewise for \\(y\\).
    fn ct_eq(&self, other: &ProjectivePoint) -> Choice {
        (&self.X * &other.Z).ct_eq(&(&other.X * &self.Z))
            & (&self.Y * &other.Z).ct_eq(&(&other.Y * &self.Z))
    }
}

impl Eq for ProjectivePoint {}

impl PartialEq for ProjectivePoint {
    fn eq(&self, other: &ProjectivePoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(
        a: &ProjectivePoint,
        b: &ProjectivePoint,
        choice: Choice,
    ) -> ProjectivePoint {
        ProjectivePoint {
            X: FieldElement::conditional_select(&a.X, &b.X, choice),
            Y: FieldElement::conditional_select(&a.Y, &b.Y, choice),
            Z: FieldElement::conditional_select(&a.Z, &b.Z, choice),
        }
    }
}

impl ValidityCheck for ProjectivePoint {
    /// The projective form of the curve equation, `Y²·Z = X³ + 7·Z³`.
    /// The identity satisfies it with both sides zero.
    fn is_valid(&self) -> bool {
        let lhs = &self.Y.square() * &self.Z;
        let z3 = &self.Z.square() * &self.Z;
        let rhs = &(&self.X.square() * &self.X) + &(&constants::B * &z3);
        lhs.ct_eq(&rhs).into()
    }
}

impl ProjectivePoint {
    /// The point at infinity, \\((0 : 1 : 0)\\).
    pub const IDENTITY: ProjectivePoint = ProjectivePoint {
        X: FieldElement::ZERO,
        Y: FieldElement::ONE,
        Z: FieldElement::ZERO,
    };

    /// Return a copy of the canonical generator.
    pub fn generator() -> ProjectivePoint {
        *constants::GENERATOR
    }

    /// Decode a point from its SEC1 §2.3.4 identity, compressed, or
    /// uncompressed encoding.  The hybrid `0x06`/`0x07` forms are not
    /// accepted.
    ///
    /// Decoded coordinates are validated, so every successful decode
    /// yields a point on the curve.
    pub fn from_bytes(bytes: &[u8]) -> Result<ProjectivePoint, Error> {
        match bytes {
            // Point at infinity.
            [0x00] => Ok(ProjectivePoint::IDENTITY),

            // Uncompressed form.
            [0x04, coords @ ..] if coords.len() == 64 => {
                let x = FieldElement::from_bytes(&coords[..32])?;
                let y = FieldElement::from_bytes(&coords[32..])?;
                let on_curve = y.square().ct_eq(&polynomial(&x));
                if (!on_curve).into() {
                    return Err(Error::NotOnCurve);
                }
                Ok(ProjectivePoint {
                    X: x,
                    Y: y,
                    Z: FieldElement::ONE,
                })
            }

            // Compressed form.
            [prefix @ (0x02 | 0x03), x_bytes @ ..] if x_bytes.len() == 32 => {
                let x = FieldElement::from_bytes(x_bytes)?;
                let (is_square, mut y) = polynomial(&x).sqrt();
                if (!is_square).into() {
                    return Err(Error::InvalidCompressedPoint);
                }
                // Pick the root whose parity matches the prefix bit.
                let flip = y.is_odd() ^ Choice::from(prefix & 1);
                y.conditional_negate(flip);
                Ok(ProjectivePoint {
                    X: x,
                    Y: y,
                    Z: FieldElement::ONE,
                })
            }

            _ => Err(Error::InvalidPointEncoding),
        }
    }

    /// Encode this point in the SEC1 uncompressed form, or as the
    /// single byte `0x00` for the point at infinity.
    pub fn to_bytes(&self) -> EncodedPoint {
        if self.Z.is_zero().into() {
            return EncodedPoint::identity();
        }
        let z_inv = self.Z.invert();
        let x = &self.X * &z_inv;
        let y = &self.Y * &z_inv;

        let mut bytes = [0u8; 65];
        bytes[0] = 0x04;
        bytes[1..33].copy_from_slice(&x.to_bytes());
        bytes[33..65].copy_from_slice(&y.to_bytes());
        EncodedPoint { bytes, len: 65 }
    }

    /// Encode this point in the SEC1 compressed form, or as the single
    /// byte `0x00` for the point at infinity.
    pub fn to_bytes_compressed(&self) -> EncodedPoint {
        if self.Z.is_zero().into() {
            return EncodedPoint::identity();
        }
        let z_inv = self.Z.invert();
        let x = &self.X * &z_inv;
        let y = &self.Y * &z_inv;

        let mut bytes = [0u8; 65];
        bytes[0] = 0x02 | u8::conditional_select(&0, &1, y.is_odd());
        bytes[1..33].copy_from_slice(&x.to_bytes());
        EncodedPoint { bytes, len: 33 }
    }

    /// Encode the affine x-coordinate of this point, per SEC1 §2.3.5.
    ///
    /// Returns `Error::IsIdentity` for the point at infinity, which
    /// has no affine coordinates.
    pub fn to_bytes_x(&self) -> Result<[u8; 32], Error> {
        if self.Z.is_zero().into() {
            return Err(Error::IsIdentity);
        }
        let z_inv = self.Z.invert();
        Ok((&self.X * &z_inv).to_bytes())
    }

    /// Compute the doubling of this point.
    pub fn double(&self) -> ProjectivePoint {
        // Doubling formula for a = 0 from RCB 2015/1060, §A.3.
        let t0 = self.Y.square();
        let z3 = &t0 + &t0;
        let z3 = &z3 + &z3;
        let z3 = &z3 + &z3;
        let t1 = &self.Y * &self.Z;
        let t2 = self.Z.square();
        let t2 = &constants::B3 * &t2;
        let x3 = &t2 * &z3;
        let y3 = &t0 + &t2;
        let z3 = &t1 * &z3;
        let t1 = &t2 + &t2;
        let t2 = &t1 + &t2;
        let t0 = &t0 - &t2;
        let y3 = &t0 * &y3;
        let y3 = &x3 + &y3;
        let t1 = &self.X * &self.Y;
        let x3 = &t0 * &t1;
        let x3 = &x3 + &x3;

        ProjectivePoint {
            X: x3,
            Y: y3,
            Z: z3,
        }
    }

    /// Compute \\(2\^k\\) times this point by successive doublings.
    /// `k` must be nonzero.
    pub(crate) fn mul_by_pow_2(&self, k: u32) -> ProjectivePoint {
        debug_assert!(k > 0);
        let mut p = self.double();
        for _ in 1..k {
            p = p.double();
        }
        p
    }

    /// Compute `scalar * self` for a big-endian scalar of any length.
    ///
    /// The scalar is consumed in 4-bit windows against a per-call
    /// table of the first fifteen multiples of `self`; every window
    /// performs the same table scan and the same complete addition, so
    /// execution is independent of the scalar value.  No reduction is
    /// performed: the scalar is used as the integer its bytes encode.
    pub fn scalar_mul(&self, scalar: &[u8]) -> ProjectivePoint {
        let table = LookupTable::from(self);

        let mut p = ProjectivePoint::IDENTITY;
        for (i, byte) in scalar.iter().enumerate() {
            // No need to double on the first iteration, as p is the
            // identity at this point, and doubling the identity is a
            // no-op.  Only the byte position, never its value,
            // controls the skip.
            if i != 0 {
                p = p.mul_by_pow_2(4);
            }
            p += table.select(byte >> 4);

            p = p.mul_by_pow_2(4);
            p += table.select(byte & 0x0F);
        }
        p
    }

    /// Compute `scalar * G` for the canonical generator.
    ///
    /// The scalar must be exactly 32 big-endian bytes; other lengths
    /// return `Error::InvalidScalarLength`.  This walks the
    /// precomputed generator tables: the window added for the `k`-th
    /// nibble is already multiplied by \\(2\^{4k}\\), so the hot loop
    /// contains no doublings at all.
    pub fn mul_base(scalar: &[u8]) -> Result<ProjectivePoint, Error> {
        if scalar.len() != 32 {
            return Err(Error::InvalidScalarLength);
        }
        let tables = basepoint_tables();

        let mut p = ProjectivePoint::IDENTITY;
        for (i, byte) in scalar.iter().enumerate() {
            p += tables[63 - 2 * i].select(byte >> 4);
            p += tables[62 - 2 * i].select(byte & 0x0F);
        }
        Ok(p)
    }
}

impl<'a, 'b> Add<&'b ProjectivePoint> for &'a ProjectivePoint {
    type Output = ProjectivePoint;

    /// Complete point addition: valid for every input pair, including
    /// `self == rhs` and inputs involving the identity.
    fn add(self, rhs: &'b ProjectivePoint) -> ProjectivePoint {
        // Addition formula for a = 0 from RCB 2015/1060, §A.3.
        // Intermediates are staged in fresh elements and the result is
        // only assembled at the end, so operands may alias freely.
        let t0 = &self.X * &rhs.X;
        let t1 = &self.Y * &rhs.Y;
        let t2 = &self.Z * &rhs.Z;
        let t3 = &self.X + &self.Y;
        let t4 = &rhs.X + &rhs.Y;
        let t3 = &t3 * &t4;
        let t4 = &t0 + &t1;
        let t3 = &t3 - &t4;
        let t4 = &self.Y + &self.Z;
        let x3 = &rhs.Y + &rhs.Z;
        let t4 = &t4 * &x3;
        let x3 = &t1 + &t2;
        let t4 = &t4 - &x3;
        let x3 = &self.X + &self.Z;
        let y3 = &rhs.X + &rhs.Z;
        let x3 = &x3 * &y3;
        let y3 = &t0 + &t2;
        let y3 = &x3 - &y3;
        let x3 = &t0 + &t0;
        let t0 = &x3 + &t0;
        let t2 = &constants::B3 * &t2;
        let z3 = &t1 + &t2;
        let t1 = &t1 - &t2;
        let y3 = &constants::B3 * &y3;
        let x3 = &t4 * &y3;
        let t2 = &t3 * &t1;
        let x3 = &t2 - &x3;
        let y3 = &y3 * &t0;
        let t1 = &t1 * &z3;
        let y3 = &t1 + &y3;
        let t0 = &t0 * &t3;
        let z3 = &z3 * &t4;
        let z3 = &z3 + &t0;

        ProjectivePoint {
            X: x3,
            Y: y3,
            Z: z3,
        }
    }
}

impl<'b> AddAssign<&'b ProjectivePoint> for ProjectivePoint {
    fn add_assign(&mut self, rhs: &'b ProjectivePoint) {
        *self = &*self + rhs;
    }
}

impl<'a, 'b> Sub<&'b ProjectivePoint> for &'a ProjectivePoint {
    type Output = ProjectivePoint;

    /// Complete point subtraction: addition of the negated operand.
    fn sub(self, rhs: &'b ProjectivePoint) -> ProjectivePoint {
        self + &(-rhs)
    }
}

impl<'b> SubAssign<&'b ProjectivePoint> for ProjectivePoint {
    fn sub_assign(&mut self, rhs: &'b ProjectivePoint) {
        *self = &*self - rhs;
    }
}

impl<'a> Neg for &'a ProjectivePoint {
    type Output = ProjectivePoint;

    fn neg(self) -> ProjectivePoint {
        ProjectivePoint {
            X: self.X,
            Y: -&self.Y,
            Z: self.Z,
        }
    }
}

impl Neg for ProjectivePoint {
    type Output = ProjectivePoint;

    fn neg(self) -> ProjectivePoint {
        -&self
    }
}

define_add_variants!(
    LHS = ProjectivePoint,
    RHS = ProjectivePoint,
    Output = ProjectivePoint
);
define_add_assign_variants!(LHS = ProjectivePoint, RHS = ProjectivePoint);
define_sub_variants!(
    LHS = ProjectivePoint,
    RHS = ProjectivePoint,
    Output = ProjectivePoint
);
define_sub_assign_variants!(LHS = ProjectivePoint, RHS = ProjectivePoint);

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::{CURVE_ORDER, GENERATOR_BYTES};
    use crate::traits::IsIdentity;
    use hex_literal::hex;

    /// Encode a small integer as a 32-byte big-endian scalar.
    fn scalar(n: u64) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes[24..32].copy_from_slice(&n.to_be_bytes());
        bytes
    }

    #[test]
    fn generator_self_check() {
        let g = ProjectivePoint::from_bytes(&GENERATOR_BYTES).unwrap();
        assert!(g.is_valid());
        assert_eq!(g.to_bytes().as_bytes(), &GENERATOR_BYTES[..]);
        assert_eq!(g, ProjectivePoint::generator());
        assert_eq!(ProjectivePoint::mul_base(&scalar(1)).unwrap(), g);
    }

    #[test]
    fn compressed_generator() {
        let g = ProjectivePoint::generator();
        let compressed = g.to_bytes_compressed();
        // The generator's y-coordinate is even, so the prefix is 0x02.
        assert_eq!(compressed.as_bytes()[0], 0x02);
        assert_eq!(&compressed.as_bytes()[1..], &GENERATOR_BYTES[1..33]);
        let decoded = ProjectivePoint::from_bytes(compressed.as_bytes()).unwrap();
        assert_eq!(decoded, g);
    }

    #[test]
    fn compressed_odd_root() {
        // -G has an odd y-coordinate; its compressed form must carry
        // prefix 0x03 and decode back to -G.
        let minus_g = -ProjectivePoint::generator();
        let compressed = minus_g.to_bytes_compressed();
        assert_eq!(compressed.as_bytes()[0], 0x03);
        let decoded = ProjectivePoint::from_bytes(compressed.as_bytes()).unwrap();
        assert_eq!(decoded, minus_g);
    }

    #[test]
    fn doubling_matches_addition() {
        let g = ProjectivePoint::generator();
        assert_eq!(g.double(), &g + &g);
        let g4 = g.double().double();
        assert_eq!(g4, &(&g + &g) + &(&g + &g));
        assert_eq!(g.mul_by_pow_2(2), g4);
    }

    #[test]
    fn identity_laws() {
        let g = ProjectivePoint::generator();
        let id = ProjectivePoint::IDENTITY;
        assert!(id.is_identity());
        assert!(id.is_valid());
        assert_eq!(&g + &id, g);
        assert_eq!(&id + &g, g);
        assert_eq!(&g + &(-&g), id);
        assert_eq!(&g - &g, id);
        assert_eq!(id.double(), id);
        assert_eq!(id.to_bytes().as_bytes(), &[0x00]);
    }

    #[test]
    fn addition_commutes_and_associates() {
        let g = ProjectivePoint::generator();
        let g2 = g.double();
        let g3 = &g2 + &g;
        assert_eq!(&g + &g2, &g2 + &g);
        assert_eq!(&(&g + &g2) + &g3, &g + &(&g2 + &g3));
    }

    #[test]
    fn subtraction_inverts_addition() {
        let g = ProjectivePoint::generator();
        let g2 = g.double();
        assert_eq!(&(&g2 + &g) - &g, g2);
        assert_eq!(&g2 - &g, g);
    }

    #[test]
    fn scalar_mul_small_values() {
        let g = ProjectivePoint::generator();
        assert!(g.scalar_mul(&scalar(0)).is_identity());
        assert_eq!(g.scalar_mul(&scalar(1)), g);
        assert_eq!(g.scalar_mul(&scalar(2)), g.double());
        assert_eq!(g.scalar_mul(&scalar(3)), &g.double() + &g);
        assert_eq!(g.scalar_mul(&scalar(16)), g.mul_by_pow_2(4));
    }

    #[test]
    fn scalar_mul_accepts_any_length() {
        let g = ProjectivePoint::generator();
        // An empty scalar encodes zero.
        assert!(g.scalar_mul(&[]).is_identity());
        // Leading zero bytes do not change the product.
        assert_eq!(g.scalar_mul(&[0x05]), g.scalar_mul(&scalar(5)));
        assert_eq!(g.scalar_mul(&[0x01, 0x00]), g.scalar_mul(&scalar(256)));
    }

    #[test]
    fn scalar_mul_matches_mul_base() {
        let g = ProjectivePoint::generator();
        for k in [
            scalar(1),
            scalar(2),
            scalar(15),
            scalar(16),
            scalar(0xFFFF_FFFF_FFFF_FFFF),
            [0x01; 32],
            [0x02; 32],
            [0xFF; 32],
            CURVE_ORDER,
        ] {
            assert_eq!(g.scalar_mul(&k), ProjectivePoint::mul_base(&k).unwrap());
        }
    }

    #[test]
    fn mul_base_requires_32_bytes() {
        assert_eq!(
            ProjectivePoint::mul_base(&[0x01; 31]).err(),
            Some(Error::InvalidScalarLength)
        );
        assert_eq!(
            ProjectivePoint::mul_base(&[0x01; 33]).err(),
            Some(Error::InvalidScalarLength)
        );
        assert_eq!(
            ProjectivePoint::mul_base(&[]).err(),
            Some(Error::InvalidScalarLength)
        );
    }

    #[test]
    fn order_relations() {
        // n·G is the identity, and (n-1)·G is -G.
        let n_times_g = ProjectivePoint::mul_base(&CURVE_ORDER).unwrap();
        assert!(n_times_g.is_identity());
        assert_eq!(n_times_g.to_bytes().as_bytes(), &[0x00]);

        let mut n_minus_one = CURVE_ORDER;
        n_minus_one[31] -= 1;
        let p = ProjectivePoint::mul_base(&n_minus_one).unwrap();
        assert_eq!(p, -ProjectivePoint::generator());
    }

    #[test]
    fn encoding_round_trips() {
        let points = [
            ProjectivePoint::generator(),
            ProjectivePoint::generator().double(),
            ProjectivePoint::mul_base(&[0x5A; 32]).unwrap(),
        ];
        for p in points {
            let uncompressed = p.to_bytes();
            assert_eq!(uncompressed.as_bytes().len(), 65);
            assert_eq!(ProjectivePoint::from_bytes(uncompressed.as_bytes()).unwrap(), p);

            let compressed = p.to_bytes_compressed();
            assert_eq!(compressed.as_bytes().len(), 33);
            assert_eq!(ProjectivePoint::from_bytes(compressed.as_bytes()).unwrap(), p);

            // Both encodings agree on the x-coordinate.
            assert_eq!(&uncompressed.as_bytes()[1..33], &p.to_bytes_x().unwrap());
            assert_eq!(&compressed.as_bytes()[1..33], &p.to_bytes_x().unwrap());
        }
    }

    #[test]
    fn bytes_x_of_identity_fails() {
        assert_eq!(
            ProjectivePoint::IDENTITY.to_bytes_x(),
            Err(Error::IsIdentity)
        );
    }

    #[test]
    fn rejects_off_curve_coordinates() {
        // Perturb the generator's y-coordinate.
        let mut bad = GENERATOR_BYTES;
        bad[64] = bad[64].wrapping_add(1);
        assert_eq!(
            ProjectivePoint::from_bytes(&bad),
            Err(Error::NotOnCurve)
        );
    }

    #[test]
    fn rejects_non_residue_compressed() {
        // x = 5 gives x³ + 7 = 132 = 4·33, and 33 is a non-residue
        // mod p, so no y exists.
        let mut bad = [0u8; 33];
        bad[0] = 0x02;
        bad[32] = 0x05;
        assert_eq!(
            ProjectivePoint::from_bytes(&bad),
            Err(Error::InvalidCompressedPoint)
        );
    }

    #[test]
    fn rejects_non_canonical_coordinates() {
        // An x-coordinate equal to p is an invalid element encoding.
        let p_bytes = hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");
        let mut bad = [0u8; 33];
        bad[0] = 0x02;
        bad[1..].copy_from_slice(&p_bytes);
        assert_eq!(
            ProjectivePoint::from_bytes(&bad),
            Err(Error::InvalidElementEncoding)
        );
    }

    #[test]
    fn rejects_malformed_encodings() {
        // Empty, bad prefixes (including the hybrid forms), and bad
        // lengths.
        let cases: &[&[u8]] = &[
            &[],
            &[0x01],
            &[0x05],
            &GENERATOR_BYTES[..33],                // 0x04 with half the payload
            &GENERATOR_BYTES[..64],                // truncated uncompressed
            &[0x00, 0x00],                         // overlong infinity
        ];
        for case in cases {
            assert_eq!(
                ProjectivePoint::from_bytes(case),
                Err(Error::InvalidPointEncoding),
                "expected rejection of {case:02X?}"
            );
        }

        // Hybrid encodings are rejected even with valid coordinates.
        let mut hybrid = GENERATOR_BYTES;
        hybrid[0] = 0x06;
        assert_eq!(
            ProjectivePoint::from_bytes(&hybrid),
            Err(Error::InvalidPointEncoding)
        );
        hybrid[0] = 0x07;
        assert_eq!(
            ProjectivePoint::from_bytes(&hybrid),
            Err(Error::InvalidPointEncoding)
        );
    }

    #[test]
    fn conditional_select() {
        let g = ProjectivePoint::generator();
        let id = ProjectivePoint::IDENTITY;
        let chosen = ProjectivePoint::conditional_select(&g, &id, Choice::from(0));
        assert_eq!(chosen, g);
        let chosen = ProjectivePoint::conditional_select(&g, &id, Choice::from(1));
        assert_eq!(chosen, id);
    }

    #[test]
    fn results_stay_on_curve() {
        let g = ProjectivePoint::generator();
        let mut p = g;
        for _ in 0..16 {
            p = &p + &g;
            assert!(p.is_valid());
        }
        assert!(g.scalar_mul(&[0xAB; 32]).is_valid());
        assert!(ProjectivePoint::mul_base(&[0xCD; 32]).unwrap().is_valid());
    }
}
