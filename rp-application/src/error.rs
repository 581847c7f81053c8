use rp_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use thiserror::Error;

pub use rp_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// The rejection reason of a use case, if any.
    pub fn parameter_error(&self) -> Option<&ParameterError> {
        match self {
            Self::Business(BError::Parameter(err)) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
