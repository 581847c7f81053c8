use strum::{Display, EnumString, IntoStaticStr};

use crate::{id::*, time::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
pub enum RestrictionType {
    /// No points are awarded for new reviews.
    #[strum(serialize = "review_points_freeze")]
    PointsFreeze,
}

impl RestrictionType {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRestriction {
    pub id               : Id,
    pub user_id          : Id,
    pub restriction_type : RestrictionType,
    pub reason           : String,
    pub created_at       : Timestamp,
    pub expires_at       : Timestamp,
}

impl UserRestriction {
    pub fn is_active(&self, now: Timestamp) -> bool {
        now < self.expires_at
    }
}
