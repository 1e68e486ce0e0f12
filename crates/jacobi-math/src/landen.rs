// ─────────────────────────────────────────────────────────────────────
// SCPN Jacobi — Landen
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Descending Landen transformation (Abramowitz & Stegun 16.12).
//!
//! For 0 < m < 1 with complementary parameter m1 = 1 - m, each step maps
//!   k'_j     = sqrt(m1_j)
//!   k_{j+1}  = (1 - k'_j) / (1 + k'_j)          (modulus, sqrt(mu))
//!   m1_{j+1} = 4 k'_j / (1 + k'_j)^2            (complement of mu)
//! so the modulus falls quadratically towards zero. In AGM terms
//! k_{j+1} = c_{j+1} / a_{j+1}; the descent stops once the arithmetic and
//! geometric means agree, i.e. k <= tolerance.
//!
//! At the bottom sn = sin(w), cn = cos(w), dn = 1 with
//! w = u / prod(1 + k_j). The ascent applies, innermost level first:
//!   sn <- (1 + k) sn / (1 + k sn^2)
//!   cn <- cn dn / (1 + k sn^2)
//!   dn <- (1 - k sn^2) / (1 + k sn^2)
//! When k sn^2 approaches 1 the numerator of dn is taken as
//! cn^2 + (1 - k) sn^2, with 1 - k = 2 k' / (1 + k') kept from the descent.
//! k rounds to exactly 1 for m1 below ~1e-32 (very negative m).

use jacobi_types::config::LandenConfig;
use jacobi_types::error::{EllipticError, EllipticResult};

/// Recorded moduli of one descent, reusable for any argument.
#[derive(Debug, Clone, PartialEq)]
pub struct DescendingSequence {
    moduli: Vec<f64>,
    complements: Vec<f64>,
    scale: f64,
}

impl DescendingSequence {
    /// Run the descent for the complementary parameter `m1 = 1 - m`.
    ///
    /// Taking the complement directly keeps full precision when m is close
    /// to 1. A NaN input never satisfies the stopping test and therefore
    /// ends in [`EllipticError::ConvergenceFailed`].
    pub fn new(mut m1: f64, config: &LandenConfig) -> EllipticResult<Self> {
        let mut moduli = Vec::new();
        let mut complements = Vec::new();
        let mut scale = 1.0;

        loop {
            let kp = m1.sqrt();
            let k = (1.0 - kp) / (1.0 + kp);
            if k <= config.tolerance {
                break;
            }
            if moduli.len() >= config.max_iterations {
                log::warn!(
                    "Landen descent exceeded {} steps (m1 = {m1}, k = {k})",
                    config.max_iterations
                );
                return Err(EllipticError::ConvergenceFailed);
            }
            log::trace!("Landen step {}: k = {k:e}", moduli.len() + 1);
            moduli.push(k);
            complements.push(2.0 * kp / (1.0 + kp));
            scale *= 1.0 + k;
            m1 = 4.0 * kp / ((1.0 + kp) * (1.0 + kp));
        }

        log::debug!(
            "Landen descent settled after {} steps, scale = {scale}",
            moduli.len()
        );
        Ok(Self {
            moduli,
            complements,
            scale,
        })
    }

    /// Empty sequence: evaluates to sin, cos, 1.
    pub(crate) fn identity() -> Self {
        Self {
            moduli: Vec::new(),
            complements: Vec::new(),
            scale: 1.0,
        }
    }

    /// Moduli k_1..k_n in descending order of size.
    pub fn moduli(&self) -> &[f64] {
        &self.moduli
    }

    /// Complements 1 - k_j, computed without cancellation.
    pub fn complements(&self) -> &[f64] {
        &self.complements
    }

    /// Accumulated argument scale prod(1 + k_j).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn len(&self) -> usize {
        self.moduli.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moduli.is_empty()
    }

    /// Ascend back to the original parameter, returning (sn, cn, dn).
    pub fn evaluate(&self, u: f64) -> (f64, f64, f64) {
        // A single division keeps the reduced argument within one rounding.
        let w = u / self.scale;
        let mut sn = w.sin();
        let mut cn = w.cos();
        let mut dn = 1.0;

        for (&k, &kc) in self.moduli.iter().zip(&self.complements).rev() {
            let sn2 = sn * sn;
            let ksn2 = k * sn2;
            let den = 1.0 + ksn2;
            let dn_num = if ksn2 < 0.5 {
                1.0 - ksn2
            } else {
                cn * cn + kc * sn2
            };
            let next_sn = (1.0 + k) * sn / den;
            cn = cn * dn / den;
            dn = dn_num / den;
            sn = next_sn;
        }

        (sn, cn, dn)
    }
}
