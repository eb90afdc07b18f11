//! Constant values for the sm9pair library
//!
//! Domain parameters are kept as big-endian hex strings exactly as GB/T 38635
//! prints them, so that they can be audited against the standard by eye. The
//! algorithms crate parses them once when a pairing engine is initialized.

#![no_std]

pub mod sm9;
