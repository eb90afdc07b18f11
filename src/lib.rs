//! # sm9pair
//!
//! The SM9 (GB/T 38635) bilinear pairing over the BN256 curve.
//!
//! ## Usage
//!
//! ```rust
//! use sm9pair::prelude::*;
//!
//! let engine = Sm9Pairing::initialized()?;
//! let g = engine.pairing(&G2Projective::generator(), &G1Affine::generator())?;
//! assert!(!bool::from(g.is_identity()));
//! # Ok::<(), sm9pair::api::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`sm9pair-api`]: error type, validation helpers and the
//!   `BilinearPairing` trait
//! - [`sm9pair-params`]: the curve constants and the Miller loop chain
//! - [`sm9pair-algorithms`]: the field tower, groups and pairing engine
//!
//! `rand`, `subtle` and `zeroize` are re-exported so callers can use the
//! `RngCore`, `ConstantTimeEq` and `Zeroize` impls without pinning versions.

#![forbid(unsafe_code)]

pub use sm9pair_algorithms as algorithms;
pub use sm9pair_api as api;
pub use sm9pair_params as params;

// Re-export the crates whose traits appear on the public types
pub use rand;
pub use subtle;
pub use zeroize;

/// Common imports for sm9pair users
pub mod prelude {
    pub use crate::api::{BilinearPairing, Error, Result};

    pub use crate::algorithms::{
        G1Affine, G1Projective, G2Affine, G2Projective, Gt, PairingParameters, Scalar,
        Sm9Pairing,
    };
}
