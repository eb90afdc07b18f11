//! Runtime pairing parameters derived from the SM9 domain constants.

use sm9pair_api::{Error, Result};
use sm9pair_params::sm9::{
    SM9_ALPHA1, SM9_ALPHA2, SM9_ALPHA3, SM9_ALPHA4, SM9_ALPHA5, SM9_BETA, SM9_HARD_EXP_A2,
    SM9_HARD_EXP_A3, SM9_HARD_EXP_NINE, SM9_MILLER_CHAIN,
};
use tracing::debug;

use super::field::{Fp, Fp2};
use super::util::limbs_from_hex;

/// One symbol of the Miller loop addition chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MillerStep {
    /// `0`: double only
    Double,
    /// `1`: double, then add Q
    DoubleAdd,
    /// `2`: double, then add -Q
    DoubleSub,
}

/// Parse a chain over the alphabet `{0, 1, 2}`.
pub(crate) fn parse_chain(context: &'static str, chain: &str) -> Result<Vec<MillerStep>> {
    chain
        .chars()
        .map(|c| match c {
            '0' => Ok(MillerStep::Double),
            '1' => Ok(MillerStep::DoubleAdd),
            '2' => Ok(MillerStep::DoubleSub),
            other => Err(Error::InvalidParameter {
                context,
                message: format!("unexpected chain symbol {:?}", other),
            }),
        })
        .collect()
}

/// Constants consumed by the Frobenius maps, the twist endomorphisms and the
/// final exponentiation, plus the addition chain that drives the Miller loop.
///
/// Immutable once built; share it by reference.
#[derive(Clone, Debug)]
pub struct PairingParameters {
    pub(crate) alpha1: Fp,
    pub(crate) alpha2: Fp,
    pub(crate) alpha3: Fp,
    pub(crate) alpha4: Fp,
    pub(crate) alpha5: Fp,
    pub(crate) beta: Fp2,
    /// Z scale applied by `pi1`
    pub(crate) twist_c1: Fp,
    /// Z scale applied by `pi2`
    pub(crate) twist_c2: Fp,
    pub(crate) hard_a2: [u64; 4],
    pub(crate) hard_a3: [u64; 4],
    pub(crate) hard_nine: [u64; 4],
    pub(crate) chain: Vec<MillerStep>,
}

impl PairingParameters {
    /// Derive the parameters from the GB/T 38635 constants.
    pub fn new() -> Result<Self> {
        Self::with_chain(SM9_MILLER_CHAIN)
    }

    /// Derive the parameters, driving the Miller loop with a different chain.
    pub(crate) fn with_chain(chain: &str) -> Result<Self> {
        let alpha1 = Fp::from_hex("alpha1", SM9_ALPHA1)?;
        let alpha2 = Fp::from_hex("alpha2", SM9_ALPHA2)?;
        let params = PairingParameters {
            alpha1,
            alpha2,
            alpha3: Fp::from_hex("alpha3", SM9_ALPHA3)?,
            alpha4: Fp::from_hex("alpha4", SM9_ALPHA4)?,
            alpha5: Fp::from_hex("alpha5", SM9_ALPHA5)?,
            beta: Fp2::from(Fp::from_hex("beta", SM9_BETA)?),
            twist_c1: alpha1,
            twist_c2: alpha2,
            hard_a2: limbs_from_hex("hard exponent a2", SM9_HARD_EXP_A2)?,
            hard_a3: limbs_from_hex("hard exponent a3", SM9_HARD_EXP_A3)?,
            hard_nine: [SM9_HARD_EXP_NINE, 0, 0, 0],
            chain: parse_chain("miller chain", chain)?,
        };

        debug!(
            chain_len = params.chain.len(),
            additions = params
                .chain
                .iter()
                .filter(|s| **s != MillerStep::Double)
                .count(),
            "derived SM9 pairing parameters"
        );

        Ok(params)
    }

    /// The addition chain driving the Miller loop.
    pub fn chain(&self) -> &[MillerStep] {
        &self.chain
    }
}
