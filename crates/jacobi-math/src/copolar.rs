// ─────────────────────────────────────────────────────────────────────
// SCPN Jacobi — Copolar
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Copolar trios of Jacobi elliptic functions.
//!
//! The twelve functions split into four groups sharing a second letter
//! (Glaisher notation, A&S 16.3): N = {sn, cn, dn}, S = {ns, cs, ds},
//! C = {nc, sc, dc}, D = {nd, sd, cd}. Every trio carries the principal
//! values and derives its members on access.

/// Principal trio sn, cn, dn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CopolarN {
    sn: f64,
    cn: f64,
    dn: f64,
}

impl CopolarN {
    pub(crate) fn new(sn: f64, cn: f64, dn: f64) -> Self {
        Self { sn, cn, dn }
    }

    pub fn sn(&self) -> f64 {
        self.sn
    }

    pub fn cn(&self) -> f64 {
        self.cn
    }

    pub fn dn(&self) -> f64 {
        self.dn
    }
}

/// Trio with denominator sn: ns, cs, ds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CopolarS {
    n: CopolarN,
}

impl CopolarS {
    pub(crate) fn new(n: CopolarN) -> Self {
        Self { n }
    }

    /// ns = 1 / sn
    pub fn ns(&self) -> f64 {
        1.0 / self.n.sn
    }

    /// cs = cn / sn
    pub fn cs(&self) -> f64 {
        self.n.cn / self.n.sn
    }

    /// ds = dn / sn
    pub fn ds(&self) -> f64 {
        self.n.dn / self.n.sn
    }
}

/// Trio with denominator cn: nc, sc, dc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CopolarC {
    n: CopolarN,
}

impl CopolarC {
    pub(crate) fn new(n: CopolarN) -> Self {
        Self { n }
    }

    /// nc = 1 / cn
    pub fn nc(&self) -> f64 {
        1.0 / self.n.cn
    }

    /// sc = sn / cn
    pub fn sc(&self) -> f64 {
        self.n.sn / self.n.cn
    }

    /// dc = dn / cn
    pub fn dc(&self) -> f64 {
        self.n.dn / self.n.cn
    }
}

/// Trio with denominator dn: nd, sd, cd.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CopolarD {
    n: CopolarN,
}

impl CopolarD {
    pub(crate) fn new(n: CopolarN) -> Self {
        Self { n }
    }

    /// nd = 1 / dn
    pub fn nd(&self) -> f64 {
        1.0 / self.n.dn
    }

    /// sd = sn / dn
    pub fn sd(&self) -> f64 {
        self.n.sn / self.n.dn
    }

    /// cd = cn / dn
    pub fn cd(&self) -> f64 {
        self.n.cn / self.n.dn
    }
}
