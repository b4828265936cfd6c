//! Simulator error type.
//!
//! Sub-crates define their own error enums where they touch I/O (catalog
//! loading, output writing) and wrap `AmrError` as one variant.  The engine
//! itself only ever returns `AmrError`.

use thiserror::Error;

/// The top-level error type for `amr-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum AmrError {
    /// A species or antibiotic name that is not in the reference catalog, or
    /// a numeric setting outside its documented range.  Caller contract
    /// violation; never recovered internally.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Resistance left [0, 1] or the population exceeded its cap.  Cannot
    /// happen unless the update rule regressed.
    #[error("domain invariant violated: {0}")]
    InvariantViolation(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AmrError {
    /// Shorthand for an unknown-name lookup failure.
    pub fn unknown(kind: &str, name: &str) -> Self {
        AmrError::InvalidConfiguration(format!("unknown {kind} {name:?}"))
    }
}

/// Shorthand result type for all `amr-*` crates.
pub type AmrResult<T> = Result<T, AmrError>;
