//! Elliptic curve groups and pairings

pub mod sm9;

pub use sm9::{G1Affine, G1Projective, G2Affine, G2Projective, Gt, Scalar, Sm9Pairing};
