use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    result,
};

use anyhow::anyhow;

use super::prelude::*;

type RepoResult<T> = result::Result<T, RepoError>;

#[derive(Debug, Default)]
pub struct MockDb {
    pub review_tokens: RefCell<Vec<ReviewToken>>,
    pub reviews: RefCell<Vec<Review>>,
    pub restrictions: RefCell<Vec<UserRestriction>>,
    pub points: RefCell<HashMap<Id, Points>>,
    pub fail_on_add_review_tokens: Cell<bool>,
}

impl ReviewTokenRepo for MockDb {
    fn add_review_tokens(&self, tokens: &[ReviewToken]) -> RepoResult<()> {
        if self.fail_on_add_review_tokens.get() {
            return Err(anyhow!("storage unavailable").into());
        }
        let mut review_tokens = self.review_tokens.borrow_mut();
        for (i, token) in tokens.iter().enumerate() {
            if review_tokens.iter().any(|t| t.value == token.value)
                || tokens[..i].iter().any(|t| t.value == token.value)
            {
                return Err(RepoError::AlreadyExists);
            }
        }
        review_tokens.extend_from_slice(tokens);
        Ok(())
    }

    fn get_review_token_by_value(&self, value: &str) -> RepoResult<ReviewToken> {
        self.review_tokens
            .borrow()
            .iter()
            .find(|t| t.value.as_str() == value)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn mark_review_token_used(&self, id: &Id, used_at: Timestamp) -> RepoResult<()> {
        let mut review_tokens = self.review_tokens.borrow_mut();
        let token = review_tokens
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or(RepoError::NotFound)?;
        if token.is_used() {
            return Err(RepoError::AlreadyConsumed);
        }
        token.used_at = Some(used_at);
        Ok(())
    }

    fn count_unused_review_tokens(&self, place_id: &Id) -> RepoResult<usize> {
        Ok(self
            .review_tokens
            .borrow()
            .iter()
            .filter(|t| &t.place_id == place_id && !t.is_used())
            .count())
    }
}

impl ReviewRepo for MockDb {
    fn create_review(&self, review: &Review) -> RepoResult<()> {
        let mut reviews = self.reviews.borrow_mut();
        if reviews
            .iter()
            .any(|r| r.id == review.id || r.token_id == review.token_id)
        {
            return Err(RepoError::AlreadyExists);
        }
        reviews.push(review.clone());
        Ok(())
    }

    fn get_review(&self, id: &Id) -> RepoResult<Review> {
        self.reviews
            .borrow()
            .iter()
            .find(|r| &r.id == id && !r.is_deleted())
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn update_review(&self, review: &Review) -> RepoResult<()> {
        let mut reviews = self.reviews.borrow_mut();
        let stored = reviews
            .iter_mut()
            .find(|r| r.id == review.id && !r.is_deleted())
            .ok_or(RepoError::NotFound)?;
        *stored = review.clone();
        Ok(())
    }

    fn load_reviews_of_place(
        &self,
        place_id: &Id,
        filter: &ReviewFilter,
    ) -> RepoResult<Vec<Review>> {
        let mut reviews: Vec<_> = self
            .reviews
            .borrow()
            .iter()
            .filter(|r| &r.place_id == place_id && !r.is_deleted())
            .filter(|r| filter.rating.map_or(true, |rating| r.rating == rating))
            .filter(|r| filter.created_since.map_or(true, |ts| r.created_at >= ts))
            .filter(|r| filter.created_until.map_or(true, |ts| r.created_at < ts))
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        if let Some(limit) = filter.limit {
            reviews.truncate(limit as usize);
        }
        Ok(reviews)
    }

    fn has_review_of_place_created_between(
        &self,
        user_id: &Id,
        place_id: &Id,
        since: Timestamp,
        until: Timestamp,
    ) -> RepoResult<bool> {
        Ok(self.reviews.borrow().iter().any(|r| {
            &r.user_id == user_id
                && &r.place_id == place_id
                && r.created_at >= since
                && r.created_at < until
        }))
    }

    fn count_reviews_with_rating_since(
        &self,
        user_id: &Id,
        rating: RatingValue,
        since: Timestamp,
    ) -> RepoResult<usize> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .filter(|r| {
                &r.user_id == user_id
                    && r.rating == rating
                    && r.created_at > since
                    && !r.is_deleted()
            })
            .count())
    }
}

impl RestrictionRepo for MockDb {
    fn has_active_restriction(
        &self,
        user_id: &Id,
        restriction_type: RestrictionType,
        now: Timestamp,
    ) -> RepoResult<bool> {
        Ok(self.restrictions.borrow().iter().any(|r| {
            &r.user_id == user_id && r.restriction_type == restriction_type && r.is_active(now)
        }))
    }

    fn create_restriction_if_absent(&self, restriction: &UserRestriction) -> RepoResult<bool> {
        let mut restrictions = self.restrictions.borrow_mut();
        match restrictions.iter_mut().find(|r| {
            r.user_id == restriction.user_id && r.restriction_type == restriction.restriction_type
        }) {
            Some(existing) if existing.is_active(restriction.created_at) => Ok(false),
            Some(expired) => {
                *expired = restriction.clone();
                Ok(true)
            }
            None => {
                restrictions.push(restriction.clone());
                Ok(true)
            }
        }
    }
}

impl PointsRepo for MockDb {
    fn add_points(&self, user_id: &Id, points: Points) -> RepoResult<Points> {
        let mut balances = self.points.borrow_mut();
        let balance = balances.entry(user_id.clone()).or_default();
        *balance = balance
            .checked_add(points)
            .ok_or(RepoError::OutOfRange)?;
        Ok(*balance)
    }

    fn load_points(&self, user_id: &Id) -> RepoResult<Points> {
        self.points
            .borrow()
            .get(user_id)
            .copied()
            .ok_or(RepoError::NotFound)
    }
}
