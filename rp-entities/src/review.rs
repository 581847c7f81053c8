use crate::{id::*, time::*};

pub type RatingPrimitive = i16;

/// The number of stars of a review.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct RatingValue(RatingPrimitive);

impl RatingValue {
    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<RatingPrimitive> for RatingValue {
    fn from(from: RatingPrimitive) -> Self {
        Self(from)
    }
}

impl From<RatingValue> for RatingPrimitive {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id         : Id,
    pub user_id    : Id,
    pub place_id   : Id,
    pub token_id   : Id,
    pub content    : String,
    pub rating     : RatingValue,
    pub created_at : Timestamp,
    pub updated_at : Option<Timestamp>,
    pub deleted_at : Option<Timestamp>,
}

impl Review {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
