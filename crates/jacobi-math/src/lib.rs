// ─────────────────────────────────────────────────────────────────────
// SCPN Jacobi — Jacobi Math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Jacobi elliptic functions for real argument and real parameter.

pub mod copolar;
pub mod jacobi;
pub mod landen;

pub use copolar::{CopolarC, CopolarD, CopolarN, CopolarS};
pub use jacobi::{sncndn, JacobiElliptic};
