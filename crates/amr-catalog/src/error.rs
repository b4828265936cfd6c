use amr_core::AmrError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    Parse(String),

    #[error("duplicate {kind} {name:?}")]
    Duplicate { kind: &'static str, name: String },

    #[error("{from} {name:?} references unknown {kind} {target:?}")]
    DanglingReference {
        from:   &'static str,
        name:   String,
        kind:   &'static str,
        target: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CatalogError> for AmrError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::Io(io) => AmrError::Io(io),
            other => AmrError::Parse(other.to_string()),
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
