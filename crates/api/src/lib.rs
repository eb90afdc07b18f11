//! Public API traits and types for the sm9pair library
//!
//! This crate provides the surface shared by every sm9pair crate: the
//! [`Error`] type with its [`Result`] alias, validation helpers, and the
//! [`BilinearPairing`] trait that protocol layers program against.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};
pub use traits::BilinearPairing;
