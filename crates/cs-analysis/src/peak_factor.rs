//! Transient asymmetry factor K for short-circuit currents.

use cs_core::{CsError, CsResult, ensure_finite};

/// Lower bound of K; the asymmetry factor never drops below this.
pub const K_FLOOR: f64 = 1.8;
/// Upper bound accepted in direct-entry mode.
pub const K_CEIL: f64 = 2.0;

/// Asymmetry factor from the X/R ratio of the short-circuit loop.
///
/// `K = 1 + e^{-(phi + pi/2)/x} * sin(phi)` with `phi = atan(x)`, floored at
/// 1.8. Valid for any finite `x_over_r > 0`.
pub fn peak_factor(x_over_r: f64) -> CsResult<f64> {
    ensure_finite(x_over_r, "X/R ratio")?;
    if x_over_r <= 0.0 {
        return Err(CsError::InvalidArg {
            what: "X/R ratio must be positive",
        });
    }

    let phi = x_over_r.atan();
    let k = 1.0 + (-(phi + std::f64::consts::FRAC_PI_2) / x_over_r).exp() * phi.sin();
    Ok(k.max(K_FLOOR))
}

/// Direct-entry mode: a hand-supplied K, clamped to [1.8, 2.0].
pub fn direct_peak_factor(k: f64) -> CsResult<f64> {
    ensure_finite(k, "asymmetry factor")?;
    Ok(k.clamp(K_FLOOR, K_CEIL))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn k_never_below_floor(x in 1e-3_f64..1e6) {
            let k = peak_factor(x).unwrap();
            prop_assert!(k >= K_FLOOR);
            prop_assert!(k <= K_CEIL);
        }

        #[test]
        fn direct_entry_always_in_band(k in -10.0_f64..10.0) {
            let clamped = direct_peak_factor(k).unwrap();
            prop_assert!((K_FLOOR..=K_CEIL).contains(&clamped));
        }
    }
}
