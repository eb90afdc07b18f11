//! Base field and extension tower: `Fp ⊂ Fp2 ⊂ Fp4 ⊂ Fp12`.

pub mod fp;
pub mod fp12;
pub mod fp2;
pub mod fp4;
pub(crate) mod wide;

pub use fp::Fp;
pub use fp12::Fp12;
pub use fp2::Fp2;
pub use fp4::Fp4;
