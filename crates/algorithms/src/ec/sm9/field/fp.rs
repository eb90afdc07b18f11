//! SM9 base field `GF(p)` where p = 0xb640000002a3a6f1d603ab4ff58ec74521f2934b1a7aeedbe56f9b27e351457d
//!
//! The modulus occupies all 256 bits of the four limbs, so every addition and
//! reduction below carries the bit that overflows the top limb into its final
//! conditional subtraction.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use sm9pair_api::{Error, Result};

use super::super::util::{adc, bytes_from_hex, limbs_from_be_bytes, mac, sbb};
use super::wide::FpWide;

// ============================================================================
// Field Constants
// ============================================================================

/// Field modulus p
pub(crate) const MODULUS: [u64; 4] = [
    0xe56f_9b27_e351_457d,
    0x21f2_934b_1a7a_eedb,
    0xd603_ab4f_f58e_c745,
    0xb640_0000_02a3_a6f1,
];

/// Montgomery parameter INV = -(p^{-1} mod 2^64) mod 2^64
const INV: u64 = 0x892b_c42c_2f2e_e42b;

/// Montgomery R = 2^256 mod p
const R: Fp = Fp([
    0x1a90_64d8_1cae_ba83,
    0xde0d_6cb4_e585_1124,
    0x29fc_54b0_0a71_38ba,
    0x49bf_ffff_fd5c_590e,
]);

/// Montgomery R^2 = 2^512 mod p
const R2: Fp = Fp([
    0x27de_a312_b417_e2d2,
    0x88f8_105f_ae1a_5d3f,
    0xe479_b522_d670_6e7b,
    0x2ea7_95a6_56f6_2fbd,
]);

/// Montgomery R^3 = 2^768 mod p
const R3: Fp = Fp([
    0x1302_5776_9df5_827e,
    0x3692_0fc0_837e_c76e,
    0xcbec_2451_9c22_a142,
    0x219b_e84a_7c68_7090,
]);

/// p - 2, the Fermat inversion exponent
const P_MINUS_2: [u64; 4] = [
    0xe56f_9b27_e351_457b,
    0x21f2_934b_1a7a_eedb,
    0xd603_ab4f_f58e_c745,
    0xb640_0000_02a3_a6f1,
];

// ============================================================================
// Field Element Type
// ============================================================================

/// Element in Montgomery form: Fp(a) = aR mod p, with R = 2^256
#[derive(Copy, Clone)]
pub struct Fp(pub(crate) [u64; 4]);

impl Fp {
    /// Subtract p once if `carry:limbs` is at least p.
    #[inline]
    const fn subtract_p(limbs: [u64; 4], carry: u64) -> Fp {
        let (r0, borrow) = sbb(limbs[0], MODULUS[0], 0);
        let (r1, borrow) = sbb(limbs[1], MODULUS[1], borrow);
        let (r2, borrow) = sbb(limbs[2], MODULUS[2], borrow);
        let (r3, borrow) = sbb(limbs[3], MODULUS[3], borrow);
        let (_, borrow) = sbb(carry, 0, borrow);

        // borrow is all-ones exactly when the input was below p
        let r0 = (limbs[0] & borrow) | (r0 & !borrow);
        let r1 = (limbs[1] & borrow) | (r1 & !borrow);
        let r2 = (limbs[2] & borrow) | (r2 & !borrow);
        let r3 = (limbs[3] & borrow) | (r3 & !borrow);

        Fp([r0, r1, r2, r3])
    }

    /// Schoolbook product without reduction.
    #[inline]
    const fn multiply_impl(&self, rhs: &Fp) -> [u64; 8] {
        let (t0, carry) = mac(0, self.0[0], rhs.0[0], 0);
        let (t1, carry) = mac(0, self.0[0], rhs.0[1], carry);
        let (t2, carry) = mac(0, self.0[0], rhs.0[2], carry);
        let (t3, t4) = mac(0, self.0[0], rhs.0[3], carry);

        let (t1, carry) = mac(t1, self.0[1], rhs.0[0], 0);
        let (t2, carry) = mac(t2, self.0[1], rhs.0[1], carry);
        let (t3, carry) = mac(t3, self.0[1], rhs.0[2], carry);
        let (t4, t5) = mac(t4, self.0[1], rhs.0[3], carry);

        let (t2, carry) = mac(t2, self.0[2], rhs.0[0], 0);
        let (t3, carry) = mac(t3, self.0[2], rhs.0[1], carry);
        let (t4, carry) = mac(t4, self.0[2], rhs.0[2], carry);
        let (t5, t6) = mac(t5, self.0[2], rhs.0[3], carry);

        let (t3, carry) = mac(t3, self.0[3], rhs.0[0], 0);
        let (t4, carry) = mac(t4, self.0[3], rhs.0[1], carry);
        let (t5, carry) = mac(t5, self.0[3], rhs.0[2], carry);
        let (t6, t7) = mac(t6, self.0[3], rhs.0[3], carry);

        [t0, t1, t2, t3, t4, t5, t6, t7]
    }

    /// Schoolbook square without reduction.
    #[inline]
    const fn square_impl(&self) -> [u64; 8] {
        let (t1, carry) = mac(0, self.0[0], self.0[1], 0);
        let (t2, carry) = mac(0, self.0[0], self.0[2], carry);
        let (t3, t4) = mac(0, self.0[0], self.0[3], carry);

        let (t3, carry) = mac(t3, self.0[1], self.0[2], 0);
        let (t4, t5) = mac(t4, self.0[1], self.0[3], carry);

        let (t5, t6) = mac(t5, self.0[2], self.0[3], 0);

        let t7 = t6 >> 63;
        let t6 = (t6 << 1) | (t5 >> 63);
        let t5 = (t5 << 1) | (t4 >> 63);
        let t4 = (t4 << 1) | (t3 >> 63);
        let t3 = (t3 << 1) | (t2 >> 63);
        let t2 = (t2 << 1) | (t1 >> 63);
        let t1 = t1 << 1;

        let (t0, carry) = mac(0, self.0[0], self.0[0], 0);
        let (t1, carry) = adc(t1, 0, carry);
        let (t2, carry) = mac(t2, self.0[1], self.0[1], carry);
        let (t3, carry) = adc(t3, 0, carry);
        let (t4, carry) = mac(t4, self.0[2], self.0[2], carry);
        let (t5, carry) = adc(t5, 0, carry);
        let (t6, carry) = mac(t6, self.0[3], self.0[3], carry);
        let (t7, _) = adc(t7, 0, carry);

        [t0, t1, t2, t3, t4, t5, t6, t7]
    }
}

// ============================================================================
// Core Field Operations
// ============================================================================

impl Fp {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp {
        Fp([0, 0, 0, 0])
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp {
        R
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Fp::zero())
    }

    /// Create from Montgomery-form limbs without checking canonicity
    pub const fn from_raw_unchecked(v: [u64; 4]) -> Fp {
        Fp(v)
    }

    /// Convert canonical little-endian limbs (below p) into Montgomery form
    pub const fn from_raw(v: [u64; 4]) -> Fp {
        Fp::mul(&Fp(v), &R2)
    }

    /// Small integer constant
    pub const fn from_u64(v: u64) -> Fp {
        Fp::from_raw([v, 0, 0, 0])
    }

    /// Add two field elements
    #[inline]
    pub const fn add(&self, rhs: &Fp) -> Fp {
        let (d0, carry) = adc(self.0[0], rhs.0[0], 0);
        let (d1, carry) = adc(self.0[1], rhs.0[1], carry);
        let (d2, carry) = adc(self.0[2], rhs.0[2], carry);
        let (d3, carry) = adc(self.0[3], rhs.0[3], carry);

        Fp::subtract_p([d0, d1, d2, d3], carry)
    }

    /// Double a field element
    #[inline]
    pub const fn double(&self) -> Fp {
        self.add(self)
    }

    /// Subtract two field elements
    #[inline]
    pub const fn sub(&self, rhs: &Fp) -> Fp {
        let (d0, borrow) = sbb(self.0[0], rhs.0[0], 0);
        let (d1, borrow) = sbb(self.0[1], rhs.0[1], borrow);
        let (d2, borrow) = sbb(self.0[2], rhs.0[2], borrow);
        let (d3, borrow) = sbb(self.0[3], rhs.0[3], borrow);

        // Add p back on underflow
        let (d0, carry) = adc(d0, MODULUS[0] & borrow, 0);
        let (d1, carry) = adc(d1, MODULUS[1] & borrow, carry);
        let (d2, carry) = adc(d2, MODULUS[2] & borrow, carry);
        let (d3, _) = adc(d3, MODULUS[3] & borrow, carry);

        Fp([d0, d1, d2, d3])
    }

    /// Negate a field element
    #[inline]
    pub const fn neg(&self) -> Fp {
        let (d0, borrow) = sbb(MODULUS[0], self.0[0], 0);
        let (d1, borrow) = sbb(MODULUS[1], self.0[1], borrow);
        let (d2, borrow) = sbb(MODULUS[2], self.0[2], borrow);
        let (d3, _) = sbb(MODULUS[3], self.0[3], borrow);

        // Mask if zero
        let mask = (((self.0[0] | self.0[1] | self.0[2] | self.0[3]) == 0) as u64).wrapping_sub(1);

        Fp([d0 & mask, d1 & mask, d2 & mask, d3 & mask])
    }

    /// Divide by two
    #[inline]
    pub const fn halve(&self) -> Fp {
        // Add p when odd so the shift is exact
        let mask = (self.0[0] & 1).wrapping_neg();
        let (d0, carry) = adc(self.0[0], MODULUS[0] & mask, 0);
        let (d1, carry) = adc(self.0[1], MODULUS[1] & mask, carry);
        let (d2, carry) = adc(self.0[2], MODULUS[2] & mask, carry);
        let (d3, carry) = adc(self.0[3], MODULUS[3] & mask, carry);

        Fp([
            (d0 >> 1) | (d1 << 63),
            (d1 >> 1) | (d2 << 63),
            (d2 >> 1) | (d3 << 63),
            (d3 >> 1) | (carry << 63),
        ])
    }

    /// Multiply two field elements
    #[inline]
    pub const fn mul(&self, rhs: &Fp) -> Fp {
        let t = self.multiply_impl(rhs);
        Self::montgomery_reduce(t[0], t[1], t[2], t[3], t[4], t[5], t[6], t[7])
    }

    /// Square this element
    #[inline]
    pub const fn square(&self) -> Fp {
        let t = self.square_impl();
        Self::montgomery_reduce(t[0], t[1], t[2], t[3], t[4], t[5], t[6], t[7])
    }

    /// Unreduced product, for lazy reduction in the extension tower
    #[inline]
    pub(crate) const fn mul_wide(&self, rhs: &Fp) -> FpWide {
        FpWide(self.multiply_impl(rhs))
    }

    /// Unreduced square
    #[inline]
    pub(crate) const fn square_wide(&self) -> FpWide {
        FpWide(self.square_impl())
    }

    /// Montgomery reduction algorithm.
    ///
    /// Accepts any input below `p * 2^256`, which covers every product of
    /// reduced elements and every double-width value kept below `p^2`.
    #[inline(always)]
    #[allow(clippy::too_many_arguments)]
    pub(crate) const fn montgomery_reduce(
        r0: u64, r1: u64, r2: u64, r3: u64,
        r4: u64, r5: u64, r6: u64, r7: u64,
    ) -> Fp {
        // Round 1
        let k = r0.wrapping_mul(INV);
        let (_, carry) = mac(r0, k, MODULUS[0], 0);
        let (r1, carry) = mac(r1, k, MODULUS[1], carry);
        let (r2, carry) = mac(r2, k, MODULUS[2], carry);
        let (r3, carry) = mac(r3, k, MODULUS[3], carry);
        let (r4, carry2) = adc(r4, 0, carry);

        // Round 2
        let k = r1.wrapping_mul(INV);
        let (_, carry) = mac(r1, k, MODULUS[0], 0);
        let (r2, carry) = mac(r2, k, MODULUS[1], carry);
        let (r3, carry) = mac(r3, k, MODULUS[2], carry);
        let (r4, carry) = mac(r4, k, MODULUS[3], carry);
        let (r5, carry2) = adc(r5, carry2, carry);

        // Round 3
        let k = r2.wrapping_mul(INV);
        let (_, carry) = mac(r2, k, MODULUS[0], 0);
        let (r3, carry) = mac(r3, k, MODULUS[1], carry);
        let (r4, carry) = mac(r4, k, MODULUS[2], carry);
        let (r5, carry) = mac(r5, k, MODULUS[3], carry);
        let (r6, carry2) = adc(r6, carry2, carry);

        // Round 4
        let k = r3.wrapping_mul(INV);
        let (_, carry) = mac(r3, k, MODULUS[0], 0);
        let (r4, carry) = mac(r4, k, MODULUS[1], carry);
        let (r5, carry) = mac(r5, k, MODULUS[2], carry);
        let (r6, carry) = mac(r6, k, MODULUS[3], carry);
        let (r7, carry2) = adc(r7, carry2, carry);

        Fp::subtract_p([r4, r5, r6, r7], carry2)
    }
}

// ============================================================================
// Advanced Field Operations
// ============================================================================

impl Fp {
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
    #[inline]
    pub fn invert(&self) -> CtOption<Self> {
        // Fermat's little theorem: a^(p-2)
        let t = self.pow_vartime(&P_MINUS_2);

        CtOption::new(t, !self.is_zero())
    }

    /// Canonical (non-Montgomery) little-endian limbs
    pub(crate) const fn to_canonical(&self) -> [u64; 4] {
        Fp::montgomery_reduce(self.0[0], self.0[1], self.0[2], self.0[3], 0, 0, 0, 0).0
    }
}

// ============================================================================
// Serialization
// ============================================================================

impl Fp {
    /// Decode from big-endian bytes
    pub fn from_bytes(bytes: &[u8; 32]) -> CtOption<Fp> {
        let tmp = Fp(limbs_from_be_bytes(bytes));

        // Check if < modulus
        let (_, borrow) = sbb(tmp.0[0], MODULUS[0], 0);
        let (_, borrow) = sbb(tmp.0[1], MODULUS[1], borrow);
        let (_, borrow) = sbb(tmp.0[2], MODULUS[2], borrow);
        let (_, borrow) = sbb(tmp.0[3], MODULUS[3], borrow);

        let is_some = (borrow as u8) & 1;

        // Convert to Montgomery form
        CtOption::new(tmp * R2, Choice::from(is_some))
    }

    /// Encode to big-endian bytes
    pub fn to_bytes(self) -> [u8; 32] {
        let tmp = self.to_canonical();

        let mut res = [0; 32];
        res[0..8].copy_from_slice(&tmp[3].to_be_bytes());
        res[8..16].copy_from_slice(&tmp[2].to_be_bytes());
        res[16..24].copy_from_slice(&tmp[1].to_be_bytes());
        res[24..32].copy_from_slice(&tmp[0].to_be_bytes());

        res
    }

    /// Parse a 64-digit big-endian hex string, rejecting values not below p
    pub fn from_hex(context: &'static str, s: &str) -> Result<Fp> {
        let bytes = bytes_from_hex(context, s)?;
        Option::from(Fp::from_bytes(&bytes)).ok_or(Error::InvalidParameter {
            context,
            message: "value is not below the field modulus".into(),
        })
    }

    /// Create random field element
    pub fn random(mut rng: impl RngCore) -> Fp {
        let mut bytes = [0u8; 64];
        rng.fill_bytes(&mut bytes);

        let mut hi = [0u8; 32];
        let mut lo = [0u8; 32];
        hi.copy_from_slice(&bytes[0..32]);
        lo.copy_from_slice(&bytes[32..64]);

        Fp::from_u512(limbs_from_be_bytes(&hi), limbs_from_be_bytes(&lo))
    }

    /// Reduce the 512-bit number `hi * 2^256 + lo` modulo p
    fn from_u512(hi: [u64; 4], lo: [u64; 4]) -> Fp {
        // Each half may exceed p; one Montgomery product still lands below 2p
        Fp(lo) * R2 + Fp(hi) * R3
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.to_bytes()))
    }
}

impl Default for Fp {
    fn default() -> Self {
        Fp::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp {}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
    }
}

impl Eq for Fp {}
impl PartialEq for Fp {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
        ])
    }
}

impl<'a> Neg for &'a Fp {
    type Output = Fp;
    #[inline]
    fn neg(self) -> Fp {
        Fp::neg(self)
    }
}

impl Neg for Fp {
    type Output = Fp;
    #[inline]
    fn neg(self) -> Fp {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn sub(self, rhs: &'b Fp) -> Fp {
        Fp::sub(self, rhs)
    }
}

impl<'a, 'b> Add<&'b Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn add(self, rhs: &'b Fp) -> Fp {
        Fp::add(self, rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn mul(self, rhs: &'b Fp) -> Fp {
        Fp::mul(self, rhs)
    }
}

impl_binops_additive!(Fp, Fp);
impl_binops_multiplicative!(Fp, Fp);
