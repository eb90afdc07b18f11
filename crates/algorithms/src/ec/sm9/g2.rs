//! G₂ group implementation on the sextic twist `E': y^2 = x^3 + 5u` over `Fp2`.
//!
//! Points are kept in Jacobian coordinates `(X, Y, Z)` with affine value
//! `(X/Z^2, Y/Z^3)`; `Z = 0` is the point at infinity. Arithmetic here runs
//! on public pairing inputs and branches on its operands.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use sm9pair_api::{validate, Error, Result};
use sm9pair_params::sm9::{SM9_B, SM9_FIELD_SIZE};

use super::field::{Fp, Fp2};
use super::params::PairingParameters;
use super::scalar::{self, Scalar};

/// Twist constant b' = 5u
const B2: Fp2 = Fp2::new(Fp::zero(), Fp::from_u64(SM9_B));

/// G₂ affine point representation.
#[derive(Copy, Clone, Debug)]
pub struct G2Affine {
    pub(crate) x: Fp2,
    pub(crate) y: Fp2,
    infinity: Choice,
}

impl Default for G2Affine {
    fn default() -> G2Affine {
        G2Affine::identity()
    }
}

impl zeroize::DefaultIsZeroes for G2Affine {}

impl fmt::Display for G2Affine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl<'a> From<&'a G2Projective> for G2Affine {
    fn from(p: &'a G2Projective) -> G2Affine {
        p.to_affine()
    }
}

impl From<G2Projective> for G2Affine {
    fn from(p: G2Projective) -> G2Affine {
        p.to_affine()
    }
}

impl ConstantTimeEq for G2Affine {
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.infinity & other.infinity)
            | ((!self.infinity)
                & (!other.infinity)
                & self.x.ct_eq(&other.x)
                & self.y.ct_eq(&other.y))
    }
}

impl ConditionallySelectable for G2Affine {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        G2Affine {
            x: Fp2::conditional_select(&a.x, &b.x, choice),
            y: Fp2::conditional_select(&a.y, &b.y, choice),
            infinity: Choice::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl Eq for G2Affine {}
impl PartialEq for G2Affine {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a> Neg for &'a G2Affine {
    type Output = G2Affine;

    #[inline]
    fn neg(self) -> G2Affine {
        G2Affine {
            x: self.x,
            y: Fp2::conditional_select(&-self.y, &Fp2::one(), self.infinity),
            infinity: self.infinity,
        }
    }
}

impl Neg for G2Affine {
    type Output = G2Affine;

    #[inline]
    fn neg(self) -> G2Affine {
        -&self
    }
}

impl G2Affine {
    /// Point at infinity.
    pub fn identity() -> G2Affine {
        G2Affine {
            x: Fp2::zero(),
            y: Fp2::one(),
            infinity: Choice::from(1u8),
        }
    }

    /// The generator `P2` from GB/T 38635.
    pub fn generator() -> G2Affine {
        G2Affine {
            x: Fp2::new(
                Fp::from_raw([
                    0xf9b7_213b_af82_d65b,
                    0xee26_5948_d19c_17ab,
                    0xd2aa_b97f_d34e_c120,
                    0x3722_7552_9213_0b08,
                ]),
                Fp::from_raw([
                    0x5480_6c11_d880_6141,
                    0xf1dd_2c19_0f5e_93c4,
                    0x597b_6027_b441_a01f,
                    0x85ae_f3d0_7864_0c98,
                ]),
            ),
            y: Fp2::new(
                Fp::from_raw([
                    0x6215_bba5_c999_a7c7,
                    0x47ef_ba98_a71a_0811,
                    0x5f31_7015_3d27_8ff2,
                    0xa7cf_28d5_19be_3da6,
                ]),
                Fp::from_raw([
                    0x856d_c76b_84eb_eb96,
                    0x0736_a96f_a347_c8bd,
                    0x66ba_0d26_2cbe_e6ed,
                    0x1750_9b09_2e84_5c12,
                ]),
            ),
            infinity: Choice::from(0u8),
        }
    }

    /// Build a point from affine coordinates.
    ///
    /// Rejects coordinates off the twist and points outside the order-n
    /// subgroup (the twist has a large cofactor).
    pub fn from_coordinates(x: Fp2, y: Fp2) -> Result<G2Affine> {
        let p = G2Affine {
            x,
            y,
            infinity: Choice::from(0u8),
        };
        if !bool::from(p.is_on_curve()) || !bool::from(p.is_torsion_free()) {
            return Err(Error::InvalidPoint {
                context: "G2Affine::from_coordinates",
            });
        }
        Ok(p)
    }

    /// Affine x-coordinate. Meaningless for the identity.
    #[inline]
    pub fn x(&self) -> Fp2 {
        self.x
    }

    /// Affine y-coordinate. Meaningless for the identity.
    #[inline]
    pub fn y(&self) -> Fp2 {
        self.y
    }

    /// Check if point at infinity.
    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.infinity
    }

    /// Twist membership check.
    pub fn is_on_curve(&self) -> Choice {
        (self.y.square() - (self.x.square() * self.x)).ct_eq(&B2) | self.infinity
    }

    /// Subgroup check: `[n]P = O`.
    pub fn is_torsion_free(&self) -> Choice {
        G2Projective::from(self)
            .mul_limbs_vartime(&scalar::MODULUS)
            .is_identity()
    }

    /// Serialize as `x1 || x0 || y1 || y0`, each big-endian. The identity
    /// encodes as all zeros.
    pub fn to_uncompressed(&self) -> [u8; 4 * SM9_FIELD_SIZE] {
        let mut res = [0u8; 4 * SM9_FIELD_SIZE];
        let x = Fp2::conditional_select(&self.x, &Fp2::zero(), self.infinity);
        let y = Fp2::conditional_select(&self.y, &Fp2::zero(), self.infinity);
        for (chunk, limb) in res
            .chunks_exact_mut(SM9_FIELD_SIZE)
            .zip([x.c1, x.c0, y.c1, y.c0])
        {
            chunk.copy_from_slice(&limb.to_bytes());
        }
        res
    }

    /// Parse `x1 || x0 || y1 || y0` with full curve and subgroup validation.
    pub fn from_uncompressed(bytes: &[u8]) -> Result<G2Affine> {
        const CONTEXT: &str = "G2Affine::from_uncompressed";
        validate::length(CONTEXT, bytes.len(), 4 * SM9_FIELD_SIZE)?;

        if bytes.iter().all(|b| *b == 0) {
            return Ok(G2Affine::identity());
        }

        let mut coords = [Fp::zero(); 4];
        for (coord, chunk) in coords.iter_mut().zip(bytes.chunks_exact(SM9_FIELD_SIZE)) {
            let mut buf = [0u8; SM9_FIELD_SIZE];
            buf.copy_from_slice(chunk);
            *coord = Option::from(Fp::from_bytes(&buf))
                .ok_or(Error::InvalidPoint { context: CONTEXT })?;
        }

        let [x1, x0, y1, y0] = coords;
        G2Affine::from_coordinates(Fp2::new(x0, x1), Fp2::new(y0, y1))
            .map_err(|e| e.with_context(CONTEXT))
    }
}

/// G₂ point in Jacobian coordinates.
#[derive(Copy, Clone, Debug)]
pub struct G2Projective {
    pub(crate) x: Fp2,
    pub(crate) y: Fp2,
    pub(crate) z: Fp2,
}

impl Default for G2Projective {
    fn default() -> G2Projective {
        G2Projective::identity()
    }
}

impl zeroize::DefaultIsZeroes for G2Projective {}

impl fmt::Display for G2Projective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl<'a> From<&'a G2Affine> for G2Projective {
    fn from(p: &'a G2Affine) -> G2Projective {
        G2Projective {
            x: p.x,
            y: p.y,
            z: Fp2::conditional_select(&Fp2::one(), &Fp2::zero(), p.infinity),
        }
    }
}

impl From<G2Affine> for G2Projective {
    fn from(p: G2Affine) -> G2Projective {
        G2Projective::from(&p)
    }
}

impl ConstantTimeEq for G2Projective {
    fn ct_eq(&self, other: &Self) -> Choice {
        // X1·Z2^2 = X2·Z1^2 and Y1·Z2^3 = Y2·Z1^3
        let z1_sq = self.z.square();
        let z2_sq = other.z.square();
        let x1 = self.x * z2_sq;
        let x2 = other.x * z1_sq;
        let y1 = self.y * z2_sq * other.z;
        let y2 = other.y * z1_sq * self.z;
        let self_is_zero = self.z.is_zero();
        let other_is_zero = other.z.is_zero();

        (self_is_zero & other_is_zero)
            | ((!self_is_zero) & (!other_is_zero) & x1.ct_eq(&x2) & y1.ct_eq(&y2))
    }
}

impl ConditionallySelectable for G2Projective {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        G2Projective {
            x: Fp2::conditional_select(&a.x, &b.x, choice),
            y: Fp2::conditional_select(&a.y, &b.y, choice),
            z: Fp2::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl Eq for G2Projective {}
impl PartialEq for G2Projective {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a> Neg for &'a G2Projective {
    type Output = G2Projective;

    #[inline]
    fn neg(self) -> G2Projective {
        self.neg()
    }
}

impl Neg for G2Projective {
    type Output = G2Projective;

    #[inline]
    fn neg(self) -> G2Projective {
        -&self
    }
}

impl<'a, 'b> Add<&'b G2Projective> for &'a G2Projective {
    type Output = G2Projective;

    #[inline]
    fn add(self, rhs: &'b G2Projective) -> G2Projective {
        self.add_full(rhs)
    }
}

impl<'a, 'b> Sub<&'b G2Projective> for &'a G2Projective {
    type Output = G2Projective;

    #[inline]
    fn sub(self, rhs: &'b G2Projective) -> G2Projective {
        self.add_full(&rhs.neg())
    }
}

impl<'a, 'b> Add<&'b G2Affine> for &'a G2Projective {
    type Output = G2Projective;

    #[inline]
    fn add(self, rhs: &'b G2Affine) -> G2Projective {
        self.add_mixed(rhs)
    }
}

impl<'a, 'b> Sub<&'b G2Affine> for &'a G2Projective {
    type Output = G2Projective;

    #[inline]
    fn sub(self, rhs: &'b G2Affine) -> G2Projective {
        self.add_mixed(&-rhs)
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a G2Projective {
    type Output = G2Projective;

    fn mul(self, other: &'b Scalar) -> Self::Output {
        self.mul_limbs_vartime(&other.to_canonical())
    }
}

impl<'a, 'b> Mul<&'b G2Projective> for &'a Scalar {
    type Output = G2Projective;

    #[inline]
    fn mul(self, rhs: &'b G2Projective) -> Self::Output {
        rhs * self
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a G2Affine {
    type Output = G2Projective;

    fn mul(self, other: &'b Scalar) -> Self::Output {
        G2Projective::from(self).mul_limbs_vartime(&other.to_canonical())
    }
}

impl<'a, 'b> Mul<&'b G2Affine> for &'a Scalar {
    type Output = G2Projective;

    #[inline]
    fn mul(self, rhs: &'b G2Affine) -> Self::Output {
        rhs * self
    }
}

impl_binops_additive!(G2Projective, G2Projective);
impl_binops_additive_specify_output!(G2Projective, G2Affine, G2Projective);
impl_binops_multiplicative!(G2Projective, Scalar);
impl_binops_multiplicative_mixed!(G2Affine, Scalar, G2Projective);
impl_binops_multiplicative_mixed!(Scalar, G2Affine, G2Projective);
impl_binops_multiplicative_mixed!(Scalar, G2Projective, G2Projective);

impl G2Projective {
    /// Point at infinity.
    pub fn identity() -> G2Projective {
        G2Projective {
            x: Fp2::one(),
            y: Fp2::one(),
            z: Fp2::zero(),
        }
    }

    /// Fixed generator.
    pub fn generator() -> G2Projective {
        G2Projective::from(G2Affine::generator())
    }

    /// Uniformly random element of the order-n subgroup.
    pub fn random(rng: impl RngCore) -> Self {
        G2Projective::generator() * Scalar::random(rng)
    }

    /// Check if point at infinity.
    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Twist membership check: `Y^2 = X^3 + b'·Z^6`.
    pub fn is_on_curve(&self) -> Choice {
        let z6 = self.z.square() * self.z;
        let z6 = z6.square();
        (self.y.square()).ct_eq(&(self.x.square() * self.x + z6 * B2)) | self.z.is_zero()
    }

    /// Convert to affine form.
    pub fn to_affine(&self) -> G2Affine {
        match Option::<Fp2>::from(self.z.invert()) {
            Some(zinv) => {
                let zinv2 = zinv.square();
                G2Affine {
                    x: self.x * zinv2,
                    y: self.y * zinv2 * zinv,
                    infinity: Choice::from(0u8),
                }
            }
            None => G2Affine::identity(),
        }
    }

    /// Negation: `(X, -Y, Z)`.
    #[inline]
    pub fn neg(&self) -> G2Projective {
        G2Projective {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }

    /// Jacobian doubling for `a = 0` (dbl-2009-l).
    pub fn double(&self) -> G2Projective {
        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();
        let d = ((self.x + b).square() - a - c).double();
        let e = a.double() + a;
        let f = e.square();

        let x3 = f - d.double();
        let y3 = e * (d - x3) - c.double().double().double();
        let z3 = self.y.double() * self.z;

        G2Projective { x: x3, y: y3, z: z3 }
    }

    /// General Jacobian addition.
    ///
    /// Coinciding inputs fall through to [`double`](Self::double); a point
    /// plus its inverse yields the identity.
    pub fn add_full(&self, rhs: &G2Projective) -> G2Projective {
        if bool::from(rhs.is_identity()) {
            return *self;
        }
        if bool::from(self.is_identity()) {
            return *rhs;
        }

        let z1_sq = self.z.square();
        let z2_sq = rhs.z.square();

        // u1 = X1·Z2^2, u2 = X2·Z1^2, s1 = Y1·Z2^3, s2 = Y2·Z1^3
        let u1 = self.x * z2_sq;
        let u2 = rhs.x * z1_sq;
        let s1 = self.y * z2_sq * rhs.z;
        let s2 = rhs.y * z1_sq * self.z;

        let h = u2 - u1;
        let r = s2 - s1;

        if bool::from(h.is_zero()) {
            if bool::from(r.is_zero()) {
                return self.double();
            }
            return G2Projective::identity();
        }

        let h2 = h.square();
        let h3 = h2 * h;
        let v = u1 * h2;

        let x3 = r.square() - h3 - v.double();
        let y3 = r * (v - x3) - s1 * h3;
        let z3 = self.z * rhs.z * h;

        G2Projective { x: x3, y: y3, z: z3 }
    }

    /// Addition of an affine point, whose implicit `Z = 1` saves the
    /// `Z2` powers of [`add_full`](Self::add_full).
    pub fn add_mixed(&self, rhs: &G2Affine) -> G2Projective {
        if bool::from(rhs.is_identity()) {
            return *self;
        }
        if bool::from(self.is_identity()) {
            return G2Projective::from(rhs);
        }

        let z1_sq = self.z.square();
        let h = rhs.x * z1_sq - self.x;
        let r = rhs.y * z1_sq * self.z - self.y;

        if bool::from(h.is_zero()) {
            if bool::from(r.is_zero()) {
                return G2Projective::from(rhs).double();
            }
            return G2Projective::identity();
        }

        let h2 = h.square();
        let h3 = h2 * h;
        let v = self.x * h2;

        let x3 = r.square() - h3 - v.double();
        let y3 = r * (v - x3) - self.y * h3;
        let z3 = self.z * h;

        G2Projective { x: x3, y: y3, z: z3 }
    }

    /// `π1(Q)`: the p-power Frobenius on the twist, `(X̄, Ȳ, Z̄·c1)`.
    pub fn pi1(&self, params: &PairingParameters) -> G2Projective {
        G2Projective {
            x: self.x.conjugate(),
            y: self.y.conjugate(),
            z: self.z.conjugate().mul_by_fp(&params.twist_c1),
        }
    }

    /// `π2(Q) = -π_{p^2}(Q)`: `(X, -Y, Z·c2)`.
    pub fn pi2(&self, params: &PairingParameters) -> G2Projective {
        G2Projective {
            x: self.x,
            y: -self.y,
            z: self.z.mul_by_fp(&params.twist_c2),
        }
    }

    /// Variable-time double-and-add by little-endian limbs.
    pub fn mul_limbs_vartime(&self, by: &[u64; 4]) -> G2Projective {
        let mut acc = G2Projective::identity();
        for limb in by.iter().rev() {
            for i in (0..64).rev() {
                acc = acc.double();
                if (*limb >> i) & 1 == 1 {
                    acc = acc.add_full(self);
                }
            }
        }
        acc
    }
}
