// ─────────────────────────────────────────────────────────────────────
// SCPN Jacobi — Evaluator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Jacobi elliptic functions sn, cn, dn and their nine companions for a
//! real argument u and any real parameter m = k^2.
//!
//! Parameter regimes (Abramowitz & Stegun, chapter 16):
//! - m = 0: circular limit, sn = sin, cn = cos, dn = 1.
//! - m = 1: hyperbolic limit, sn = tanh, cn = dn = sech.
//! - 0 < m < 1: descending Landen transformation, see [`crate::landen`].
//! - m < 0: 16.10, mapped onto mu = -m / (1 - m).
//! - m > 1: 16.11, mapped onto mu = 1 / m.
//!
//! A NaN parameter never satisfies the descent's stopping test and is
//! reported as [`ConvergenceFailed`] at query time. A recovered triple that
//! is not finite is reported the same way, never returned.
//!
//! [`ConvergenceFailed`]: jacobi_types::error::EllipticError::ConvergenceFailed

use crate::copolar::{CopolarC, CopolarD, CopolarN, CopolarS};
use crate::landen::DescendingSequence;
use jacobi_types::config::LandenConfig;
use jacobi_types::error::{EllipticError, EllipticResult};
use ndarray::{Array2, ArrayView1};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Regime {
    Circular,
    Hyperbolic,
    Bounded {
        m1: f64,
    },
    /// sn(u|m) = sqrt(mu1) sd(v|mu), cn = cd(v|mu), dn = nd(v|mu),
    /// v = u sqrt(1 - m).
    Negative {
        mu1: f64,
        root_mu1: f64,
        stretch: f64,
    },
    /// sn(u|m) = sqrt(mu) sn(v|mu), cn = dn(v|mu), dn = cn(v|mu),
    /// v = u sqrt(m).
    Reciprocal {
        mu1: f64,
        root_mu: f64,
        stretch: f64,
    },
}

impl Regime {
    fn classify(m: f64) -> Self {
        if m == 0.0 {
            Regime::Circular
        } else if m == 1.0 {
            Regime::Hyperbolic
        } else if m < 0.0 {
            let d = 1.0 - m;
            let mu1 = 1.0 / d;
            Regime::Negative {
                mu1,
                root_mu1: mu1.sqrt(),
                stretch: d.sqrt(),
            }
        } else if m > 1.0 {
            Regime::Reciprocal {
                mu1: (m - 1.0) / m,
                root_mu: (1.0 / m).sqrt(),
                stretch: m.sqrt(),
            }
        } else {
            // 0 < m < 1, or NaN
            Regime::Bounded { m1: 1.0 - m }
        }
    }
}

/// Evaluator for a fixed parameter m.
///
/// Construction does no work. Each query runs the descent for the stored
/// parameter and returns a fresh trio; there is no cached state, so the
/// same `(u, m)` always yields bit-identical results and a shared
/// evaluator can be queried from several threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JacobiElliptic {
    m: f64,
    regime: Regime,
    config: LandenConfig,
}

impl JacobiElliptic {
    pub fn new(m: f64) -> Self {
        Self {
            m,
            regime: Regime::classify(m),
            config: LandenConfig::default(),
        }
    }

    /// Evaluator with custom termination settings.
    ///
    /// Fails with `ConfigError` when `config` does not validate.
    pub fn with_config(m: f64, config: LandenConfig) -> EllipticResult<Self> {
        config.validate()?;
        Ok(Self {
            m,
            regime: Regime::classify(m),
            config,
        })
    }

    /// The parameter m = k^2.
    pub fn parameter(&self) -> f64 {
        self.m
    }

    pub fn config(&self) -> &LandenConfig {
        &self.config
    }

    /// sn, cn, dn.
    pub fn values_n(&self, u: f64) -> EllipticResult<CopolarN> {
        let seq = self.descend()?;
        self.ascend(&seq, u)
    }

    /// ns, cs, ds.
    pub fn values_s(&self, u: f64) -> EllipticResult<CopolarS> {
        self.values_n(u).map(CopolarS::new)
    }

    /// nc, sc, dc.
    pub fn values_c(&self, u: f64) -> EllipticResult<CopolarC> {
        self.values_n(u).map(CopolarC::new)
    }

    /// nd, sd, cd.
    pub fn values_d(&self, u: f64) -> EllipticResult<CopolarD> {
        self.values_n(u).map(CopolarD::new)
    }

    /// Evaluate sn, cn, dn over a grid of arguments.
    ///
    /// Returns an `[n, 3]` table with columns sn, cn, dn. The descent runs
    /// once for the whole grid; rows match [`Self::values_n`] exactly.
    pub fn sample_n(&self, u: ArrayView1<f64>) -> EllipticResult<Array2<f64>> {
        let seq = self.descend()?;
        let mut table = Array2::zeros((u.len(), 3));
        for (mut row, &ui) in table.outer_iter_mut().zip(u.iter()) {
            let n = self.ascend(&seq, ui)?;
            row[0] = n.sn();
            row[1] = n.cn();
            row[2] = n.dn();
        }
        Ok(table)
    }

    fn descend(&self) -> EllipticResult<DescendingSequence> {
        match self.regime {
            Regime::Circular | Regime::Hyperbolic => Ok(DescendingSequence::identity()),
            Regime::Bounded { m1 } => DescendingSequence::new(m1, &self.config),
            Regime::Negative { mu1, .. } | Regime::Reciprocal { mu1, .. } => {
                DescendingSequence::new(mu1, &self.config)
            }
        }
    }

    fn ascend(&self, seq: &DescendingSequence, u: f64) -> EllipticResult<CopolarN> {
        let (sn, cn, dn) = match self.regime {
            Regime::Circular | Regime::Bounded { .. } => seq.evaluate(u),
            Regime::Hyperbolic => {
                let sech = 1.0 / u.cosh();
                (u.tanh(), sech, sech)
            }
            Regime::Negative {
                root_mu1, stretch, ..
            } => {
                let (sn, cn, dn) = seq.evaluate(u * stretch);
                (root_mu1 * sn / dn, cn / dn, 1.0 / dn)
            }
            Regime::Reciprocal {
                root_mu, stretch, ..
            } => {
                let (sn, cn, dn) = seq.evaluate(u * stretch);
                (root_mu * sn, dn, cn)
            }
        };
        if !(sn.is_finite() && cn.is_finite() && dn.is_finite()) {
            log::warn!("non-finite Jacobi triple at u = {u}, m = {}", self.m);
            return Err(EllipticError::ConvergenceFailed);
        }
        Ok(CopolarN::new(sn, cn, dn))
    }
}

/// sn(u|m), cn(u|m), dn(u|m) for a single evaluation.
///
/// Fails with [`EllipticError::ConvergenceFailed`] for a NaN parameter or a
/// non-finite argument.
pub fn sncndn(u: f64, m: f64) -> EllipticResult<CopolarN> {
    JacobiElliptic::new(m).values_n(u)
}
