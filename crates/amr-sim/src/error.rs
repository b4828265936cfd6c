use amr_core::AmrError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Model(#[from] AmrError),
}

pub type SimResult<T> = Result<T, SimError>;
