use gyrocourse_core::ParameterError;

use super::ConfigError;

/// Errors reported by the lateral engine.
///
/// All of them are detected before the first step; a run that starts always
/// completes or is stopped by its observer.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("invalid parameters: {0}")]
    Parameters(#[from] ParameterError),

    #[error("unknown mode code {0}, expected 1 (automatic) or 0 (manual)")]
    UnknownMode(i32),

    #[error("unknown damper code {0}, expected 1 (enabled) or 0 (failed)")]
    UnknownDamper(i32),

    #[error("unknown integration scheme code {0}, expected 1 (first order) or 2 (second order)")]
    UnknownScheme(i32),
}
