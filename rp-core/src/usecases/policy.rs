use time::Duration;

pub const POINTS_FREEZE_REASON: &str = "Too many negative reviews in 7 days";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPolicy {
    /// Lifetime of newly issued tokens.
    pub expire_in: Duration,
    /// A place gets new tokens as soon as the number of
    /// its unused tokens drops to this value.
    pub refill_threshold: usize,
    pub refill_batch_size: usize,
    pub max_batch_size: usize,
}

impl Default for TokenPolicy {
    fn default() -> Self {
        Self {
            expire_in: Duration::hours(72),
            refill_threshold: 5,
            refill_batch_size: 20,
            max_batch_size: 1_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestrictionPolicy {
    /// Number of lowest ratings within the window
    /// that freezes the points of a user.
    pub low_rating_threshold: usize,
    pub low_rating_window: Duration,
    pub freeze_duration: Duration,
}

impl Default for RestrictionPolicy {
    fn default() -> Self {
        Self {
            low_rating_threshold: 3,
            low_rating_window: Duration::days(7),
            freeze_duration: Duration::days(7),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Policy {
    pub tokens: TokenPolicy,
    pub restrictions: RestrictionPolicy,
}
