//! [`BilinearPairing`] engine over the SM9 curve.

use rayon::prelude::*;
use tracing::{debug, info, info_span};

use sm9pair_api::{validate, BilinearPairing, Error, Result};

use super::super::g1::G1Affine;
use super::super::g2::G2Projective;
use super::super::params::PairingParameters;
use super::super::Scalar;
use super::{pairing, Gt};

/// SM9 pairing engine.
///
/// Holds the derived [`PairingParameters`] between `init` and `cleanup`.
#[derive(Clone, Debug, Default)]
pub struct Sm9Pairing {
    params: Option<PairingParameters>,
}

impl Sm9Pairing {
    /// An engine that still needs [`init`](BilinearPairing::init).
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine initialized with the standard parameters.
    pub fn initialized() -> Result<Self> {
        let mut engine = Self::new();
        engine.init()?;
        Ok(engine)
    }

    /// An engine using caller-supplied parameters, such as a different
    /// Miller loop chain.
    pub fn with_parameters(params: PairingParameters) -> Self {
        Sm9Pairing {
            params: Some(params),
        }
    }

    /// The installed parameters.
    pub fn parameters(&self, context: &'static str) -> Result<&PairingParameters> {
        self.params
            .as_ref()
            .ok_or(Error::UninitializedParameters { context })
    }

    fn evaluate(q: &G2Projective, p: &G1Affine, params: &PairingParameters) -> Result<Gt> {
        // Mixed additions in the loop need Q at Z = 1
        pairing(&q.to_affine(), p, params)
    }
}

impl BilinearPairing for Sm9Pairing {
    type G1 = G1Affine;
    type G2 = G2Projective;
    type Gt = Gt;
    type Scalar = Scalar;

    fn name() -> &'static str {
        "SM9-R-ate"
    }

    fn init(&mut self) -> Result<()> {
        if self.params.is_some() {
            debug!("SM9 pairing parameters already initialized");
            return Ok(());
        }
        self.params = Some(PairingParameters::new()?);
        info!(engine = Self::name(), "pairing parameters initialized");
        Ok(())
    }

    fn cleanup(&mut self) {
        if self.params.take().is_some() {
            info!(engine = Self::name(), "pairing parameters released");
        }
    }

    fn is_initialized(&self) -> bool {
        self.params.is_some()
    }

    fn pairing(&self, q: &G2Projective, p: &G1Affine) -> Result<Gt> {
        let params = self.parameters("pairing")?;
        Self::evaluate(q, p, params)
    }

    fn batch_pairing(&self, qs: &[G2Projective], ps: &[G1Affine], workers: usize) -> Result<Vec<Gt>> {
        let params = self.parameters("batch_pairing")?;
        validate::length("batch_pairing", ps.len(), qs.len())?;
        validate::parameter(workers > 0, "batch_pairing", "worker count must be non-zero")?;

        let _span = info_span!("batch_pairing", pairs = qs.len(), workers).entered();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .map_err(|e| Error::WorkerPool {
                message: e.to_string(),
            })?;

        pool.install(|| {
            qs.par_iter()
                .zip(ps.par_iter())
                .map(|(q, p)| Self::evaluate(q, p, params))
                .collect()
        })
    }

    fn exponentiate(&self, g: &Gt, k: &Scalar) -> Gt {
        g.pow(k)
    }
}
