use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid credentials")]
    Credentials,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Token invalid")]
    TokenInvalid,
    #[error("Token already used")]
    TokenUsed,
    #[error("Token expired")]
    TokenExpired,
    #[error("Too many reviews")]
    TooManyReviews,
    #[error("Invalid place id")]
    PlaceId,
    #[error("Invalid limit")]
    InvalidLimit,
    #[error("The review does not exist")]
    ReviewNotFound,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
