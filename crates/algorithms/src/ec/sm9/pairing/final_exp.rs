//! Final exponentiation `f^((p^12 - 1) / n)`.

use sm9pair_api::{Error, Result};

use super::super::field::Fp12;
use super::super::params::PairingParameters;

fn invert(f: &Fp12, stage: &'static str) -> Result<Fp12> {
    Option::from(f.invert()).ok_or_else(|| Error::ArithmeticFailure {
        context: "final_exponentiation",
        message: format!("{} inverted zero", stage),
    })
}

/// Map a Miller loop output into the order-n subgroup of `Fp12*`.
pub fn final_exponentiation(f: &Fp12, params: &PairingParameters) -> Result<Fp12> {
    // (p^6 - 1)(p^2 + 1)
    let t = f.frobenius_map6() * invert(f, "easy part")?;
    let t = t.frobenius_map2(params) * t;

    hard_part(&t, params)
}

/// `(p^4 - p^2 + 1) / n`, decomposed over the BN parameter into the
/// exponents `a2`, `a3` and 9.
fn hard_part(f: &Fp12, params: &PairingParameters) -> Result<Fp12> {
    let t0 = invert(&f.pow_vartime(&params.hard_a3), "hard part")?;
    let t1 = t0.frobenius_map(params) * t0;
    let t0 = t0 * t1;

    let t2 = f.frobenius_map(params);
    let t3 = (t2 * f).pow_vartime(&params.hard_nine);
    let t0 = t0 * t3;

    let t3 = f.square().square();
    let t0 = t0 * t3;

    let t2 = t2.square() * t1;
    let t1 = f.frobenius_map2(params) * t2;

    let t2 = t1.pow_vartime(&params.hard_a2);
    let t0 = t2 * t0;

    Ok(f.frobenius_map3(params) * t0)
}
