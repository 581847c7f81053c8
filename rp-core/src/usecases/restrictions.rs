use time::Duration;

use super::prelude::*;
use super::{RestrictionPolicy, POINTS_FREEZE_REASON};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestrictionStatus {
    Unrestricted,
    /// A restriction was already active.
    Restricted,
    /// A new restriction has just been created.
    Triggered(UserRestriction),
}

impl RestrictionStatus {
    pub fn is_restricted(&self) -> bool {
        !matches!(self, Self::Unrestricted)
    }
}

pub fn has_active_restriction<R: RestrictionRepo>(
    repo: &R,
    user_id: &Id,
    restriction_type: RestrictionType,
    now: Timestamp,
) -> Result<bool> {
    Ok(repo.has_active_restriction(user_id, restriction_type, now)?)
}

/// Number of lowest ratings the user has given within the trailing window.
pub fn count_low_rating_reviews<R: ReviewRepo>(
    repo: &R,
    user_id: &Id,
    window: Duration,
    now: Timestamp,
) -> Result<usize> {
    Ok(repo.count_reviews_with_rating_since(user_id, RatingValue::min(), now - window)?)
}

/// Decide if the user may earn points for a review with the given rating,
/// freezing the points of the user if the rating completes a series
/// of low ratings.
pub fn evaluate_points_freeze<R>(
    repo: &R,
    policy: &RestrictionPolicy,
    user_id: &Id,
    rating: RatingValue,
    now: Timestamp,
) -> Result<RestrictionStatus>
where
    R: RestrictionRepo + ReviewRepo,
{
    if has_active_restriction(repo, user_id, RestrictionType::PointsFreeze, now)? {
        return Ok(RestrictionStatus::Restricted);
    }
    if rating != RatingValue::min() {
        return Ok(RestrictionStatus::Unrestricted);
    }
    let low_ratings = count_low_rating_reviews(repo, user_id, policy.low_rating_window, now)?;
    if low_ratings < policy.low_rating_threshold {
        return Ok(RestrictionStatus::Unrestricted);
    }
    let restriction = UserRestriction {
        id: Id::new(),
        user_id: user_id.clone(),
        restriction_type: RestrictionType::PointsFreeze,
        reason: POINTS_FREEZE_REASON.to_string(),
        created_at: now,
        expires_at: now + policy.freeze_duration,
    };
    if !repo.create_restriction_if_absent(&restriction)? {
        // Created concurrently by another submission
        return Ok(RestrictionStatus::Restricted);
    }
    log::info!(
        "Restricted user {user_id} with {} until {}: {}",
        restriction.restriction_type,
        restriction.expires_at,
        restriction.reason
    );
    Ok(RestrictionStatus::Triggered(restriction))
}
