//! Double-width accumulators for lazy reduction.
//!
//! A product of two reduced field elements is a 512-bit value below `p^2`.
//! The tower multiplies below keep such products unreduced, add and subtract
//! them modulo `p^2`, and run a single Montgomery reduction per base field
//! component at the very end. Since `p^2 < p * 2^256`, every value these
//! types can hold is a valid reduction input.

use super::super::util::{adc, sbb};
use super::fp::Fp;
use super::fp2::Fp2;
use super::fp4::Fp4;

/// p^2, little-endian
const MODULUS_SQUARED: [u64; 8] = [
    0x5b27_c51e_b9f6_9f09,
    0xfd03_edf8_f0b5_2a25,
    0x24a1_841e_ab2c_32c3,
    0xd22d_09c8_4fbf_1235,
    0xd03a_1173_374d_f1fe,
    0xbe7d_331f_ec14_4803,
    0x553f_30a5_254e_e814,
    0x81bf_1000_03c2_0333,
];

/// Unreduced base field value in `[0, p^2)`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct FpWide(pub(crate) [u64; 8]);

impl FpWide {
    #[inline]
    pub(crate) const fn zero() -> Self {
        FpWide([0; 8])
    }

    #[inline]
    pub(crate) const fn add(&self, rhs: &Self) -> Self {
        let mut d = [0u64; 8];
        let mut carry = 0;
        let mut i = 0;
        while i < 8 {
            let (v, c) = adc(self.0[i], rhs.0[i], carry);
            d[i] = v;
            carry = c;
            i += 1;
        }

        // Subtract p^2 unless the sum (with its carry bit) is below it
        let mut r = [0u64; 8];
        let mut borrow = 0;
        let mut i = 0;
        while i < 8 {
            let (v, b) = sbb(d[i], MODULUS_SQUARED[i], borrow);
            r[i] = v;
            borrow = b;
            i += 1;
        }
        let (_, borrow) = sbb(carry, 0, borrow);

        let mut i = 0;
        while i < 8 {
            d[i] = (d[i] & borrow) | (r[i] & !borrow);
            i += 1;
        }
        FpWide(d)
    }

    #[inline]
    pub(crate) const fn double(&self) -> Self {
        self.add(self)
    }

    #[inline]
    pub(crate) const fn sub(&self, rhs: &Self) -> Self {
        let mut d = [0u64; 8];
        let mut borrow = 0;
        let mut i = 0;
        while i < 8 {
            let (v, b) = sbb(self.0[i], rhs.0[i], borrow);
            d[i] = v;
            borrow = b;
            i += 1;
        }

        // Add p^2 back on underflow
        let mut carry = 0;
        let mut i = 0;
        while i < 8 {
            let (v, c) = adc(d[i], MODULUS_SQUARED[i] & borrow, carry);
            d[i] = v;
            carry = c;
            i += 1;
        }
        FpWide(d)
    }

    #[inline]
    pub(crate) const fn neg(&self) -> Self {
        FpWide::zero().sub(self)
    }

    /// One Montgomery reduction back to a canonical field element.
    #[inline]
    pub(crate) const fn reduce(&self) -> Fp {
        let t = &self.0;
        Fp::montgomery_reduce(t[0], t[1], t[2], t[3], t[4], t[5], t[6], t[7])
    }
}

/// Unreduced `Fp2` value.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Fp2Wide {
    pub(crate) c0: FpWide,
    pub(crate) c1: FpWide,
}

impl Fp2Wide {
    #[inline]
    pub(crate) fn add(&self, rhs: &Self) -> Self {
        Fp2Wide {
            c0: self.c0.add(&rhs.c0),
            c1: self.c1.add(&rhs.c1),
        }
    }

    #[inline]
    pub(crate) fn sub(&self, rhs: &Self) -> Self {
        Fp2Wide {
            c0: self.c0.sub(&rhs.c0),
            c1: self.c1.sub(&rhs.c1),
        }
    }

    /// Multiply by `u`, using `u^2 = -2`.
    #[inline]
    pub(crate) fn mul_by_u(&self) -> Self {
        Fp2Wide {
            c0: self.c1.double().neg(),
            c1: self.c0,
        }
    }

    #[inline]
    pub(crate) fn reduce(&self) -> Fp2 {
        Fp2 {
            c0: self.c0.reduce(),
            c1: self.c1.reduce(),
        }
    }
}

/// Unreduced `Fp4` value.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Fp4Wide {
    pub(crate) c0: Fp2Wide,
    pub(crate) c1: Fp2Wide,
}

impl Fp4Wide {
    #[inline]
    pub(crate) fn add(&self, rhs: &Self) -> Self {
        Fp4Wide {
            c0: self.c0.add(&rhs.c0),
            c1: self.c1.add(&rhs.c1),
        }
    }

    #[inline]
    pub(crate) fn sub(&self, rhs: &Self) -> Self {
        Fp4Wide {
            c0: self.c0.sub(&rhs.c0),
            c1: self.c1.sub(&rhs.c1),
        }
    }

    /// Multiply by `v`, using `v^2 = u`.
    #[inline]
    pub(crate) fn mul_by_v(&self) -> Self {
        Fp4Wide {
            c0: self.c1.mul_by_u(),
            c1: self.c0,
        }
    }

    #[inline]
    pub(crate) fn reduce(&self) -> Fp4 {
        Fp4 {
            c0: self.c0.reduce(),
            c1: self.c1.reduce(),
        }
    }
}
