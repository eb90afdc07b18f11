//! Quadratic extension `Fp2 = Fp[u] / (u^2 + 2)`

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use sm9pair_api::Result;

use super::fp::Fp;
use super::wide::Fp2Wide;

/// Element `c0 + c1·u` of `Fp2`
#[derive(Copy, Clone)]
pub struct Fp2 {
    /// Constant coefficient
    pub c0: Fp,
    /// Coefficient of `u`
    pub c1: Fp,
}

impl fmt::Debug for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} + {:?}*u", self.c0, self.c1)
    }
}

impl Default for Fp2 {
    fn default() -> Self {
        Fp2::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp2 {}

impl From<Fp> for Fp2 {
    fn from(f: Fp) -> Fp2 {
        Fp2 {
            c0: f,
            c1: Fp::zero(),
        }
    }
}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp2 {}
impl PartialEq for Fp2 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp2 {
            c0: Fp::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl<'a> Neg for &'a Fp2 {
    type Output = Fp2;

    #[inline]
    fn neg(self) -> Fp2 {
        self.neg()
    }
}

impl Neg for Fp2 {
    type Output = Fp2;

    #[inline]
    fn neg(self) -> Fp2 {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;

    #[inline]
    fn sub(self, rhs: &'b Fp2) -> Fp2 {
        self.sub(rhs)
    }
}

impl<'a, 'b> Add<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;

    #[inline]
    fn add(self, rhs: &'b Fp2) -> Fp2 {
        self.add(rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;

    #[inline]
    fn mul(self, rhs: &'b Fp2) -> Fp2 {
        self.mul(rhs)
    }
}

impl_binops_additive!(Fp2, Fp2);
impl_binops_multiplicative!(Fp2, Fp2);

impl Fp2 {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp2 {
        Fp2 {
            c0: Fp::zero(),
            c1: Fp::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp2 {
        Fp2 {
            c0: Fp::one(),
            c1: Fp::zero(),
        }
    }

    /// Construct from coefficients
    #[inline]
    pub const fn new(c0: Fp, c1: Fp) -> Fp2 {
        Fp2 { c0, c1 }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Parse from two big-endian hex coefficients
    pub fn from_hex(context: &'static str, c0: &str, c1: &str) -> Result<Fp2> {
        Ok(Fp2 {
            c0: Fp::from_hex(context, c0)?,
            c1: Fp::from_hex(context, c1)?,
        })
    }

    /// Random element
    pub fn random(mut rng: impl RngCore) -> Fp2 {
        Fp2 {
            c0: Fp::random(&mut rng),
            c1: Fp::random(&mut rng),
        }
    }

    /// Conjugation `c0 - c1·u`; this is also the p-power Frobenius
    #[inline(always)]
    pub fn conjugate(&self) -> Fp2 {
        Fp2 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// Multiply by `u`
    #[inline(always)]
    pub fn mul_by_u(&self) -> Fp2 {
        Fp2 {
            c0: -self.c1.double(),
            c1: self.c0,
        }
    }

    /// Scale both coefficients by a base field element
    #[inline]
    pub fn mul_by_fp(&self, k: &Fp) -> Fp2 {
        Fp2 {
            c0: self.c0 * k,
            c1: self.c1 * k,
        }
    }

    /// Square this element
    #[inline]
    pub fn square(&self) -> Fp2 {
        self.square_wide().reduce()
    }

    /// Multiply two elements
    #[inline]
    pub fn mul(&self, rhs: &Fp2) -> Fp2 {
        self.mul_wide(rhs).reduce()
    }

    /// `(a0 + a1·u)(b0 + b1·u) = (a0·b0 - 2·a1·b1) + ((a0 + a1)(b0 + b1) - a0·b0 - a1·b1)·u`
    #[inline]
    pub(crate) fn mul_wide(&self, rhs: &Fp2) -> Fp2Wide {
        let t0 = self.c0.mul_wide(&rhs.c0);
        let t1 = self.c1.mul_wide(&rhs.c1);
        let t2 = (self.c0 + self.c1).mul_wide(&(rhs.c0 + rhs.c1));

        Fp2Wide {
            c0: t0.sub(&t1.double()),
            c1: t2.sub(&t0).sub(&t1),
        }
    }

    #[inline]
    pub(crate) fn square_wide(&self) -> Fp2Wide {
        let t0 = self.c0.square_wide();
        let t1 = self.c1.square_wide();

        Fp2Wide {
            c0: t0.sub(&t1.double()),
            c1: self.c0.double().mul_wide(&self.c1),
        }
    }

    /// Add two elements
    #[inline]
    pub fn add(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
        }
    }

    /// Subtract two elements
    #[inline]
    pub fn sub(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
        }
    }

    /// Negate this element
    #[inline]
    pub fn neg(&self) -> Fp2 {
        Fp2 {
            c0: -self.c0,
            c1: -self.c1,
        }
    }

    /// Double this element
    #[inline]
    pub fn double(&self) -> Fp2 {
        Fp2 {
            c0: self.c0.double(),
            c1: self.c1.double(),
        }
    }

    /// Divide this element by two
    #[inline]
    pub fn halve(&self) -> Fp2 {
        Fp2 {
            c0: self.c0.halve(),
            c1: self.c1.halve(),
        }
    }

    /// Multiplicative inverse: `conj(a) / (a0^2 + 2·a1^2)`
    pub fn invert(&self) -> CtOption<Self> {
        (self.c0.square() + self.c1.square().double())
            .invert()
            .map(|t| self.conjugate().mul_by_fp(&t))
    }
}
