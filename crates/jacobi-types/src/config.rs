// ─────────────────────────────────────────────────────────────────────
// SCPN Jacobi — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{LANDEN_TOLERANCE, MAX_LANDEN_ITERATIONS};
use crate::error::{EllipticError, EllipticResult};

/// Termination settings for the descending Landen transformation.
///
/// Both fields are optional in JSON; missing fields take the defaults
/// from [`crate::constants`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandenConfig {
    /// Steps allowed before the descent is declared non-convergent.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Modulus below which the descent stops.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_max_iterations() -> usize {
    MAX_LANDEN_ITERATIONS
}
fn default_tolerance() -> f64 {
    LANDEN_TOLERANCE
}

impl Default for LandenConfig {
    fn default() -> Self {
        LandenConfig {
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
        }
    }
}

impl LandenConfig {
    /// Load from JSON file and validate.
    pub fn from_file(path: &str) -> EllipticResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EllipticResult<()> {
        if self.max_iterations == 0 {
            return Err(EllipticError::ConfigError(
                "max_iterations must be >= 1".to_string(),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(EllipticError::ConfigError(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}
