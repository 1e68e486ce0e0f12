// ─────────────────────────────────────────────────────────────────────
// SCPN Jacobi — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EllipticError {
    /// The descending Landen sequence did not settle within the iteration
    /// bound. Also raised for a NaN parameter.
    #[error("Convergence failed")]
    ConvergenceFailed,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type EllipticResult<T> = Result<T, EllipticError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convergence_message() {
        assert_eq!(EllipticError::ConvergenceFailed.to_string(), "Convergence failed");
    }

    #[test]
    fn test_json_error_converts() {
        let err: EllipticError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, EllipticError::Json(_)));
        assert!(err.to_string().starts_with("JSON error"));
    }
}
