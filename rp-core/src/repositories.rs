// Low-level database access traits.
// Each repository is responsible for a single entity.
// Related entities are only referenced by their id and
// never modified or loaded by another repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error("The object has already been consumed")]
    AlreadyConsumed,
    #[error("The value is out of range")]
    OutOfRange,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait ReviewTokenRepo {
    // Either all tokens are stored or none.
    fn add_review_tokens(&self, tokens: &[ReviewToken]) -> Result<()>;

    fn get_review_token_by_value(&self, value: &str) -> Result<ReviewToken>;

    // Only succeeds if the token has not been used before,
    // otherwise fails with `AlreadyConsumed`.
    fn mark_review_token_used(&self, id: &Id, used_at: Timestamp) -> Result<()>;

    // Unused tokens, regardless of whether they already expired.
    fn count_unused_review_tokens(&self, place_id: &Id) -> Result<usize>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewFilter {
    pub rating: Option<RatingValue>,
    pub created_since: Option<Timestamp>, // inclusive
    pub created_until: Option<Timestamp>, // exclusive
    pub limit: Option<u64>,
}

pub trait ReviewRepo {
    fn create_review(&self, review: &Review) -> Result<()>;

    // Only reviews that have not been deleted
    fn get_review(&self, id: &Id) -> Result<Review>;
    fn update_review(&self, review: &Review) -> Result<()>;
    fn load_reviews_of_place(&self, place_id: &Id, filter: &ReviewFilter) -> Result<Vec<Review>>;

    // Includes deleted reviews. The interval is half-open: [since, until)
    fn has_review_of_place_created_between(
        &self,
        user_id: &Id,
        place_id: &Id,
        since: Timestamp,
        until: Timestamp,
    ) -> Result<bool>;

    // Excludes deleted reviews. Only reviews created strictly after `since`.
    fn count_reviews_with_rating_since(
        &self,
        user_id: &Id,
        rating: RatingValue,
        since: Timestamp,
    ) -> Result<usize>;
}

pub trait RestrictionRepo {
    fn has_active_restriction(
        &self,
        user_id: &Id,
        restriction_type: RestrictionType,
        now: Timestamp,
    ) -> Result<bool>;

    // Returns `false` without modifying anything if a restriction
    // of the same type is still active for the user at
    // `restriction.created_at`. An expired restriction is replaced.
    fn create_restriction_if_absent(&self, restriction: &UserRestriction) -> Result<bool>;
}

pub trait PointsRepo {
    // Atomically increments the balance and returns the new one.
    // Fails with `OutOfRange` instead of overflowing.
    fn add_points(&self, user_id: &Id, points: Points) -> Result<Points>;

    fn load_points(&self, user_id: &Id) -> Result<Points>;
}
