use std::{fmt, ops};

use ::time::{format_description::well_known::Rfc3339, Duration, OffsetDateTime};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1_000;

/// A timestamp in UTC with millisecond precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos();
        Self((nanos / 1_000_000) as i64)
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Midnight (00:00 UTC) of the calendar day this timestamp belongs to.
    pub const fn start_of_utc_day(self) -> Self {
        Self(self.0.div_euclid(MILLIS_PER_DAY) * MILLIS_PER_DAY)
    }

    pub const fn start_of_next_utc_day(self) -> Self {
        Self(self.start_of_utc_day().0.saturating_add(MILLIS_PER_DAY))
    }
}

fn duration_as_millis(duration: Duration) -> i64 {
    i64::try_from(duration.whole_milliseconds()).unwrap_or(if duration.is_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

impl ops::Add<Duration> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Self(self.0.saturating_add(duration_as_millis(rhs)))
    }
}

impl ops::Sub<Duration> for Timestamp {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self {
        Self(self.0.saturating_sub(duration_as_millis(rhs)))
    }
}

impl From<Timestamp> for i64 {
    fn from(from: Timestamp) -> Self {
        from.0
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self((from.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let formatted = OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.0) * 1_000_000)
            .ok()
            .and_then(|dt| dt.format(&Rfc3339).ok());
        match formatted {
            Some(s) => f.write_str(&s),
            None => write!(f, "{}ms", self.0),
        }
    }
}
