//! SM9 scalar field `F_n` where n = 0xb640000002a3a6f1d603ab4ff58ec74449f2934b18ea8beee56ee19cd69ecf25
//!
//! `n` is the prime order of G1, G2 and Gt. Like the base field, it fills all
//! 256 bits of four limbs.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use sm9pair_api::{Error, Result};

use super::util::{adc, bytes_from_hex, limbs_from_be_bytes, mac, sbb};

/// Group order n
pub(crate) const MODULUS: [u64; 4] = [
    0xe56e_e19c_d69e_cf25,
    0x49f2_934b_18ea_8bee,
    0xd603_ab4f_f58e_c744,
    0xb640_0000_02a3_a6f1,
];

/// INV = -(n^{-1} mod 2^64) mod 2^64
const INV: u64 = 0x1d02_6623_5197_4b53;

/// R = 2^256 mod n
const R: Scalar = Scalar([
    0x1a91_1e63_2961_30db,
    0xb60d_6cb4_e715_7411,
    0x29fc_54b0_0a71_38bb,
    0x49bf_ffff_fd5c_590e,
]);

/// R^2 = 2^512 mod n
const R2: Scalar = Scalar([
    0x7598_cd79_cd75_0c35,
    0xe4a0_8110_bb6d_aeab,
    0xbfee_4bae_7d78_a1f9,
    0x8894_f5d1_6369_5d0e,
]);

/// R^3 = 2^768 mod n
const R3: Scalar = Scalar([
    0xa8ea_8521_0ce2_9ef9,
    0x8bd1_1806_993e_3a54,
    0x0db9_35b5_f51a_6da4,
    0x85cb_2b73_f249_e8ec,
]);

/// n - 2
const N_MINUS_2: [u64; 4] = [
    0xe56e_e19c_d69e_cf23,
    0x49f2_934b_18ea_8bee,
    0xd603_ab4f_f58e_c744,
    0xb640_0000_02a3_a6f1,
];

/// Scalar modulo the group order.
/// Internal: four 64-bit limbs in little-endian Montgomery form
#[derive(Clone, Copy)]
pub struct Scalar(pub(crate) [u64; 4]);

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.to_bytes()))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl From<u64> for Scalar {
    fn from(val: u64) -> Scalar {
        Scalar::from_raw([val, 0, 0, 0])
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
    }
}

impl Eq for Scalar {}
impl PartialEq for Scalar {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Scalar([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
        ])
    }
}

impl Default for Scalar {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl zeroize::DefaultIsZeroes for Scalar {}

impl<'a> Neg for &'a Scalar {
    type Output = Scalar;

    #[inline]
    fn neg(self) -> Scalar {
        self.neg()
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    #[inline]
    fn neg(self) -> Scalar {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    #[inline]
    fn sub(self, rhs: &'b Scalar) -> Scalar {
        self.sub(rhs)
    }
}

impl<'a, 'b> Add<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    #[inline]
    fn add(self, rhs: &'b Scalar) -> Scalar {
        self.add(rhs)
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    #[inline]
    fn mul(self, rhs: &'b Scalar) -> Scalar {
        self.mul(rhs)
    }
}

impl_binops_additive!(Scalar, Scalar);
impl_binops_multiplicative!(Scalar, Scalar);

impl Scalar {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Scalar {
        Scalar([0, 0, 0, 0])
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Scalar {
        R
    }

    /// Check if zero
    #[inline]
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Scalar::zero())
    }

    /// Convert canonical little-endian limbs (below n) into Montgomery form
    pub const fn from_raw(val: [u64; 4]) -> Self {
        Scalar::mul(&Scalar(val), &R2)
    }

    /// Decode from big-endian bytes, rejecting values not below n
    pub fn from_bytes(bytes: &[u8; 32]) -> CtOption<Scalar> {
        let tmp = Scalar(limbs_from_be_bytes(bytes));

        let (_, borrow) = sbb(tmp.0[0], MODULUS[0], 0);
        let (_, borrow) = sbb(tmp.0[1], MODULUS[1], borrow);
        let (_, borrow) = sbb(tmp.0[2], MODULUS[2], borrow);
        let (_, borrow) = sbb(tmp.0[3], MODULUS[3], borrow);

        let is_some = (borrow as u8) & 1;

        CtOption::new(tmp * R2, Choice::from(is_some))
    }

    /// Parse a 64-digit big-endian hex string
    pub fn from_hex(context: &'static str, s: &str) -> Result<Scalar> {
        let bytes = bytes_from_hex(context, s)?;
        Option::from(Scalar::from_bytes(&bytes)).ok_or(Error::InvalidParameter {
            context,
            message: "value is not below the group order".into(),
        })
    }

    /// Encode to big-endian bytes
    pub fn to_bytes(&self) -> [u8; 32] {
        let tmp = self.to_canonical();

        let mut res = [0; 32];
        res[0..8].copy_from_slice(&tmp[3].to_be_bytes());
        res[8..16].copy_from_slice(&tmp[2].to_be_bytes());
        res[16..24].copy_from_slice(&tmp[1].to_be_bytes());
        res[24..32].copy_from_slice(&tmp[0].to_be_bytes());

        res
    }

    /// Canonical (non-Montgomery) little-endian limbs
    pub fn to_canonical(&self) -> [u64; 4] {
        Scalar::montgomery_reduce(self.0[0], self.0[1], self.0[2], self.0[3], 0, 0, 0, 0).0
    }

    /// Reduce 64 uniformly random big-endian bytes modulo n
    pub fn from_bytes_wide(bytes: &[u8; 64]) -> Scalar {
        let mut hi = [0u8; 32];
        let mut lo = [0u8; 32];
        hi.copy_from_slice(&bytes[0..32]);
        lo.copy_from_slice(&bytes[32..64]);

        Scalar(limbs_from_be_bytes(&lo)) * R2 + Scalar(limbs_from_be_bytes(&hi)) * R3
    }

    /// Random scalar
    pub fn random(mut rng: impl RngCore) -> Scalar {
        let mut bytes = [0u8; 64];
        rng.fill_bytes(&mut bytes);
        Scalar::from_bytes_wide(&bytes)
    }

    /// Double this scalar
    #[inline]
    pub const fn double(&self) -> Scalar {
        self.add(self)
    }

    /// Square this scalar
    #[inline]
    pub const fn square(&self) -> Scalar {
        self.mul(self)
    }

    /// Variable-time exponentiation
    pub fn pow_vartime(&self, by: &[u64; 4]) -> Self {
        let mut res = Self::one();
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res *= self;
                }
            }
        }
        res
    }

    /// Multiplicative inverse
    pub fn invert(&self) -> CtOption<Self> {
        CtOption::new(self.pow_vartime(&N_MINUS_2), !self.is_zero())
    }

    #[inline(always)]
    #[allow(clippy::too_many_arguments)]
    const fn montgomery_reduce(
        r0: u64, r1: u64, r2: u64, r3: u64,
        r4: u64, r5: u64, r6: u64, r7: u64,
    ) -> Self {
        let k = r0.wrapping_mul(INV);
        let (_, carry) = mac(r0, k, MODULUS[0], 0);
        let (r1, carry) = mac(r1, k, MODULUS[1], carry);
        let (r2, carry) = mac(r2, k, MODULUS[2], carry);
        let (r3, carry) = mac(r3, k, MODULUS[3], carry);
        let (r4, carry2) = adc(r4, 0, carry);

        let k = r1.wrapping_mul(INV);
        let (_, carry) = mac(r1, k, MODULUS[0], 0);
        let (r2, carry) = mac(r2, k, MODULUS[1], carry);
        let (r3, carry) = mac(r3, k, MODULUS[2], carry);
        let (r4, carry) = mac(r4, k, MODULUS[3], carry);
        let (r5, carry2) = adc(r5, carry2, carry);

        let k = r2.wrapping_mul(INV);
        let (_, carry) = mac(r2, k, MODULUS[0], 0);
        let (r3, carry) = mac(r3, k, MODULUS[1], carry);
        let (r4, carry) = mac(r4, k, MODULUS[2], carry);
        let (r5, carry) = mac(r5, k, MODULUS[3], carry);
        let (r6, carry2) = adc(r6, carry2, carry);

        let k = r3.wrapping_mul(INV);
        let (_, carry) = mac(r3, k, MODULUS[0], 0);
        let (r4, carry) = mac(r4, k, MODULUS[1], carry);
        let (r5, carry) = mac(r5, k, MODULUS[2], carry);
        let (r6, carry) = mac(r6, k, MODULUS[3], carry);
        let (r7, carry2) = adc(r7, carry2, carry);

        Scalar::subtract_n([r4, r5, r6, r7], carry2)
    }

    #[inline]
    const fn subtract_n(limbs: [u64; 4], carry: u64) -> Scalar {
        let (r0, borrow) = sbb(limbs[0], MODULUS[0], 0);
        let (r1, borrow) = sbb(limbs[1], MODULUS[1], borrow);
        let (r2, borrow) = sbb(limbs[2], MODULUS[2], borrow);
        let (r3, borrow) = sbb(limbs[3], MODULUS[3], borrow);
        let (_, borrow) = sbb(carry, 0, borrow);

        Scalar([
            (limbs[0] & borrow) | (r0 & !borrow),
            (limbs[1] & borrow) | (r1 & !borrow),
            (limbs[2] & borrow) | (r2 & !borrow),
            (limbs[3] & borrow) | (r3 & !borrow),
        ])
    }

    /// Multiply two scalars
    #[inline]
    pub const fn mul(&self, rhs: &Self) -> Self {
        let (r0, carry) = mac(0, self.0[0], rhs.0[0], 0);
        let (r1, carry) = mac(0, self.0[0], rhs.0[1], carry);
        let (r2, carry) = mac(0, self.0[0], rhs.0[2], carry);
        let (r3, r4) = mac(0, self.0[0], rhs.0[3], carry);

        let (r1, carry) = mac(r1, self.0[1], rhs.0[0], 0);
        let (r2, carry) = mac(r2, self.0[1], rhs.0[1], carry);
        let (r3, carry) = mac(r3, self.0[1], rhs.0[2], carry);
        let (r4, r5) = mac(r4, self.0[1], rhs.0[3], carry);

        let (r2, carry) = mac(r2, self.0[2], rhs.0[0], 0);
        let (r3, carry) = mac(r3, self.0[2], rhs.0[1], carry);
        let (r4, carry) = mac(r4, self.0[2], rhs.0[2], carry);
        let (r5, r6) = mac(r5, self.0[2], rhs.0[3], carry);

        let (r3, carry) = mac(r3, self.0[3], rhs.0[0], 0);
        let (r4, carry) = mac(r4, self.0[3], rhs.0[1], carry);
        let (r5, carry) = mac(r5, self.0[3], rhs.0[2], carry);
        let (r6, r7) = mac(r6, self.0[3], rhs.0[3], carry);

        Scalar::montgomery_reduce(r0, r1, r2, r3, r4, r5, r6, r7)
    }

    /// Subtract two scalars
    #[inline]
    pub const fn sub(&self, rhs: &Self) -> Self {
        let (d0, borrow) = sbb(self.0[0], rhs.0[0], 0);
        let (d1, borrow) = sbb(self.0[1], rhs.0[1], borrow);
        let (d2, borrow) = sbb(self.0[2], rhs.0[2], borrow);
        let (d3, borrow) = sbb(self.0[3], rhs.0[3], borrow);

        let (d0, carry) = adc(d0, MODULUS[0] & borrow, 0);
        let (d1, carry) = adc(d1, MODULUS[1] & borrow, carry);
        let (d2, carry) = adc(d2, MODULUS[2] & borrow, carry);
        let (d3, _) = adc(d3, MODULUS[3] & borrow, carry);

        Scalar([d0, d1, d2, d3])
    }

    /// Add two scalars
    #[inline]
    pub const fn add(&self, rhs: &Self) -> Self {
        let (d0, carry) = adc(self.0[0], rhs.0[0], 0);
        let (d1, carry) = adc(self.0[1], rhs.0[1], carry);
        let (d2, carry) = adc(self.0[2], rhs.0[2], carry);
        let (d3, carry) = adc(self.0[3], rhs.0[3], carry);

        Scalar::subtract_n([d0, d1, d2, d3], carry)
    }

    /// Negate a scalar
    #[inline]
    pub const fn neg(&self) -> Self {
        let (d0, borrow) = sbb(MODULUS[0], self.0[0], 0);
        let (d1, borrow) = sbb(MODULUS[1], self.0[1], borrow);
        let (d2, borrow) = sbb(MODULUS[2], self.0[2], borrow);
        let (d3, _) = sbb(MODULUS[3], self.0[3], borrow);

        let mask = (((self.0[0] | self.0[1] | self.0[2] | self.0[3]) == 0) as u64).wrapping_sub(1);

        Scalar([d0 & mask, d1 & mask, d2 & mask, d3 & mask])
    }
}
