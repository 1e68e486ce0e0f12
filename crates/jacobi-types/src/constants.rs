// ─────────────────────────────────────────────────────────────────────
// SCPN Jacobi — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Upper bound on descending Landen steps.
/// Double precision needs at most 12 steps, even for a subnormal
/// complementary parameter; anything past this bound is a failure.
pub const MAX_LANDEN_ITERATIONS: usize = 64;

/// A Landen modulus at or below this value is treated as zero: the
/// arithmetic and geometric means it was built from agree to the last bit.
pub const LANDEN_TOLERANCE: f64 = f64::EPSILON;
