use super::prelude::*;
use super::{evaluate_points_freeze, points_for_rating, RestrictionPolicy, RestrictionStatus};

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewReview {
    pub user_id  : Id,
    pub place_id : String,
    pub content  : String,
    pub rating   : RatingValue,
    pub token    : String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedReview {
    pub review: Review,
    pub awarded_points: Points,
    pub restriction: RestrictionStatus,
}

/// Redeem a review token.
///
/// The checks are applied in a fixed order and the first failing
/// one aborts the submission before anything is written.
/// All writes are expected to be committed as a single unit of work.
pub fn submit_review<R: Db>(
    repo: &R,
    policy: &RestrictionPolicy,
    new_review: NewReview,
    now: Timestamp,
) -> Result<SubmittedReview> {
    let NewReview {
        user_id,
        place_id,
        content,
        rating,
        token,
    } = new_review;
    if token.is_empty() {
        return Err(Error::Credentials);
    }
    if !rating.is_valid() {
        return Err(Error::RatingValue);
    }
    let token = repo
        .get_review_token_by_value(&token)
        .map_err(|err| match err {
            RepoError::NotFound => Error::TokenInvalid,
            err => err.into(),
        })?;
    let place_id = Id::parse_uuid(&place_id).map_err(|_| Error::PlaceId)?;
    if token.place_id != place_id {
        return Err(Error::TokenInvalid);
    }
    if token.is_used() {
        return Err(Error::TokenUsed);
    }
    if token.is_expired(now) {
        return Err(Error::TokenExpired);
    }
    if repo.has_review_of_place_created_between(
        &user_id,
        &place_id,
        now.start_of_utc_day(),
        now.start_of_next_utc_day(),
    )? {
        return Err(Error::TooManyReviews);
    }

    let restriction = evaluate_points_freeze(repo, policy, &user_id, rating, now)?;

    let review = Review {
        id: Id::new(),
        user_id,
        place_id,
        token_id: token.id,
        content,
        rating,
        created_at: now,
        updated_at: None,
        deleted_at: None,
    };
    // A concurrent submission might have redeemed the same token
    // after it has been loaded.
    repo.create_review(&review).map_err(|err| match err {
        RepoError::AlreadyExists => Error::TokenUsed,
        err => err.into(),
    })?;
    repo.mark_review_token_used(&review.token_id, now)
        .map_err(|err| match err {
            RepoError::AlreadyConsumed => Error::TokenUsed,
            err => err.into(),
        })?;

    let awarded_points = if restriction.is_restricted() {
        Points::ZERO
    } else {
        points_for_rating(rating)
    };
    if !awarded_points.is_zero() {
        let balance = repo.add_points(&review.user_id, awarded_points)?;
        log::debug!(
            "Awarded {awarded_points} points to user {}: {balance}",
            review.user_id
        );
    }
    Ok(SubmittedReview {
        review,
        awarded_points,
        restriction,
    })
}
