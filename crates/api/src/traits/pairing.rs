//! Trait definition for bilinear pairing engines
//!
//! Protocol layers (signature, key encapsulation, encryption) only ever need
//! to evaluate `e(Q, P)` and raise target-group elements to scalars. This
//! trait captures exactly that surface so that they can stay generic over the
//! engine that backs it.

use crate::Result;

/// A bilinear map `e: G2 × G1 → Gt` with an explicit parameter lifecycle.
///
/// # Lifecycle
///
/// An engine starts uninitialized. [`init`](Self::init) derives the
/// domain constants it needs; [`cleanup`](Self::cleanup) releases them.
/// Both take `&mut self`, so neither can overlap with an evaluation that
/// borrows the engine. Evaluating an uninitialized engine returns
/// [`Error::UninitializedParameters`](crate::Error::UninitializedParameters).
pub trait BilinearPairing {
    /// Base group element (the second pairing argument).
    type G1;

    /// Twist group element (the first pairing argument).
    type G2;

    /// Target group element.
    type Gt;

    /// Exponent type for the target group.
    type Scalar;

    /// Returns the pairing algorithm name.
    fn name() -> &'static str;

    /// Derive and install the domain parameters.
    fn init(&mut self) -> Result<()>;

    /// Release the domain parameters. Idempotent.
    fn cleanup(&mut self);

    /// Whether [`init`](Self::init) has run since the last cleanup.
    fn is_initialized(&self) -> bool;

    /// Evaluate `e(q, p)`.
    ///
    /// Inputs are assumed to be valid group members; an identity input
    /// yields the identity of `Gt`.
    fn pairing(&self, q: &Self::G2, p: &Self::G1) -> Result<Self::Gt>;

    /// Evaluate `e(qs[i], ps[i])` for every index on `workers` threads.
    ///
    /// The output has the same length and order as the inputs.
    fn batch_pairing(
        &self,
        qs: &[Self::G2],
        ps: &[Self::G1],
        workers: usize,
    ) -> Result<Vec<Self::Gt>>;

    /// Raise a target group element to a scalar power.
    fn exponentiate(&self, g: &Self::Gt, k: &Self::Scalar) -> Self::Gt;
}
