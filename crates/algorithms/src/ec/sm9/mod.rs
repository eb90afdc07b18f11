//! SM9 pairing over the BN256 curve of GB/T 38635.
//!
//! The tower is `Fp2 = Fp[u]/(u^2 + 2)`, `Fp4 = Fp2[v]/(v^2 - u)`,
//! `Fp12 = Fp4[w]/(w^3 - v)`. G₁ lives on `E: y^2 = x^3 + 5` over `Fp` and G₂
//! on the twist `E': y^2 = x^3 + 5u` over `Fp2`.

#[macro_use]
mod util;

pub mod field;
pub mod g1;
pub mod g2;
pub mod pairing;
pub mod params;
pub mod scalar;

#[cfg(test)]
mod tests;

pub use field::{Fp, Fp12, Fp2, Fp4};
pub use g1::{G1Affine, G1Projective};
pub use g2::{G2Affine, G2Projective};
pub use pairing::{final_exponentiation, miller_loop, pairing, Gt, Sm9Pairing};
pub use params::{MillerStep, PairingParameters};
pub use scalar::Scalar;
