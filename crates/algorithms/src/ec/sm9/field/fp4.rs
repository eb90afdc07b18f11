//! Quartic extension `Fp4 = Fp2[v] / (v^2 - u)`

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp::Fp;
use super::fp2::Fp2;
use super::wide::Fp4Wide;

/// Element `c0 + c1·v` of `Fp4`
#[derive(Copy, Clone)]
pub struct Fp4 {
    /// Constant coefficient
    pub c0: Fp2,
    /// Coefficient of `v`
    pub c1: Fp2,
}

impl fmt::Debug for Fp4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:?}) + ({:?})*v", self.c0, self.c1)
    }
}

impl Default for Fp4 {
    fn default() -> Self {
        Fp4::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp4 {}

impl From<Fp2> for Fp4 {
    fn from(f: Fp2) -> Fp4 {
        Fp4 {
            c0: f,
            c1: Fp2::zero(),
        }
    }
}

impl ConstantTimeEq for Fp4 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp4 {}
impl PartialEq for Fp4 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp4 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp4 {
            c0: Fp2::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp2::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl<'a> Neg for &'a Fp4 {
    type Output = Fp4;

    #[inline]
    fn neg(self) -> Fp4 {
        self.neg()
    }
}

impl Neg for Fp4 {
    type Output = Fp4;

    #[inline]
    fn neg(self) -> Fp4 {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Fp4> for &'a Fp4 {
    type Output = Fp4;

    #[inline]
    fn sub(self, rhs: &'b Fp4) -> Fp4 {
        self.sub(rhs)
    }
}

impl<'a, 'b> Add<&'b Fp4> for &'a Fp4 {
    type Output = Fp4;

    #[inline]
    fn add(self, rhs: &'b Fp4) -> Fp4 {
        self.add(rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp4> for &'a Fp4 {
    type Output = Fp4;

    #[inline]
    fn mul(self, rhs: &'b Fp4) -> Fp4 {
        self.mul(rhs)
    }
}

impl_binops_additive!(Fp4, Fp4);
impl_binops_multiplicative!(Fp4, Fp4);

impl Fp4 {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp4 {
        Fp4 {
            c0: Fp2::zero(),
            c1: Fp2::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp4 {
        Fp4 {
            c0: Fp2::one(),
            c1: Fp2::zero(),
        }
    }

    /// Construct from coefficients
    #[inline]
    pub const fn new(c0: Fp2, c1: Fp2) -> Fp4 {
        Fp4 { c0, c1 }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Random element
    pub fn random(mut rng: impl RngCore) -> Fp4 {
        Fp4 {
            c0: Fp2::random(&mut rng),
            c1: Fp2::random(&mut rng),
        }
    }

    /// Conjugation over `Fp2`: `c0 - c1·v`
    #[inline(always)]
    pub fn conjugate(&self) -> Fp4 {
        Fp4 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// Multiply by `v`
    #[inline(always)]
    pub fn mul_by_v(&self) -> Fp4 {
        Fp4 {
            c0: self.c1.mul_by_u(),
            c1: self.c0,
        }
    }

    /// Scale both coefficients by a base field element
    #[inline]
    pub fn mul_by_fp(&self, k: &Fp) -> Fp4 {
        Fp4 {
            c0: self.c0.mul_by_fp(k),
            c1: self.c1.mul_by_fp(k),
        }
    }

    /// Scale both coefficients by an `Fp2` element
    #[inline]
    pub fn mul_by_fp2(&self, k: &Fp2) -> Fp4 {
        self.mul_by_fp2_wide(k).reduce()
    }

    /// Square this element
    #[inline]
    pub fn square(&self) -> Fp4 {
        self.square_wide().reduce()
    }

    /// Multiply two elements
    #[inline]
    pub fn mul(&self, rhs: &Fp4) -> Fp4 {
        self.mul_wide(rhs).reduce()
    }

    /// `(a0 + a1·v)(b0 + b1·v) = (a0·b0 + a1·b1·u) + ((a0 + a1)(b0 + b1) - a0·b0 - a1·b1)·v`
    #[inline]
    pub(crate) fn mul_wide(&self, rhs: &Fp4) -> Fp4Wide {
        let t0 = self.c0.mul_wide(&rhs.c0);
        let t1 = self.c1.mul_wide(&rhs.c1);
        let t2 = (self.c0 + self.c1).mul_wide(&(rhs.c0 + rhs.c1));

        Fp4Wide {
            c0: t0.add(&t1.mul_by_u()),
            c1: t2.sub(&t0).sub(&t1),
        }
    }

    #[inline]
    pub(crate) fn square_wide(&self) -> Fp4Wide {
        let t0 = self.c0.square_wide();
        let t1 = self.c1.square_wide();

        Fp4Wide {
            c0: t0.add(&t1.mul_by_u()),
            c1: self.c0.double().mul_wide(&self.c1),
        }
    }

    #[inline]
    pub(crate) fn mul_by_fp2_wide(&self, k: &Fp2) -> Fp4Wide {
        Fp4Wide {
            c0: self.c0.mul_wide(k),
            c1: self.c1.mul_wide(k),
        }
    }

    /// Add two elements
    #[inline]
    pub fn add(&self, rhs: &Fp4) -> Fp4 {
        Fp4 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
        }
    }

    /// Subtract two elements
    #[inline]
    pub fn sub(&self, rhs: &Fp4) -> Fp4 {
        Fp4 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
        }
    }

    /// Negate this element
    #[inline]
    pub fn neg(&self) -> Fp4 {
        Fp4 {
            c0: -self.c0,
            c1: -self.c1,
        }
    }

    /// Double this element
    #[inline]
    pub fn double(&self) -> Fp4 {
        Fp4 {
            c0: self.c0.double(),
            c1: self.c1.double(),
        }
    }

    /// Multiplicative inverse: `(a0 - a1·v) / (a0^2 - a1^2·u)`
    pub fn invert(&self) -> CtOption<Self> {
        (self.c0.square() - self.c1.square().mul_by_u())
            .invert()
            .map(|t| self.conjugate().mul_by_fp2(&t))
    }
}
