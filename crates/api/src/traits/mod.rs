//! Trait definitions shared across sm9pair crates

pub mod pairing;

pub use pairing::BilinearPairing;
