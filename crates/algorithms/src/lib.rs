//! SM9 bilinear pairing over the BN256 curve
//!
//! This crate implements the field tower, the G₁ and G₂ groups and the R-ate
//! pairing `e: G2 × G1 → Gt` standardized in GB/T 38635. The engine type
//! [`Sm9Pairing`] implements [`sm9pair_api::BilinearPairing`]; the lower
//! level Miller loop and final exponentiation are exposed for protocol code
//! and benchmarks.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Error module and re-exports
pub use sm9pair_api::{validate, Error, Result};

// Elliptic Curve primitives
pub mod ec;
pub use ec::sm9::{
    final_exponentiation, miller_loop, pairing, Fp, Fp12, Fp2, Fp4, G1Affine, G1Projective,
    G2Affine, G2Projective, Gt, MillerStep, PairingParameters, Scalar, Sm9Pairing,
};
