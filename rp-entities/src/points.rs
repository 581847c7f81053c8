use std::fmt;

use thiserror::Error;

/// Loyalty points balance of a user.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Points(u32);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Points out of range: {0}")]
pub struct PointsOutOfRange(pub i64);

impl Points {
    pub const ZERO: Self = Self(0);

    /// The ledger is stored in signed 32-bit columns.
    pub const MAX: Self = Self(i32::MAX as u32);

    pub const fn new(points: u32) -> Self {
        Self(points)
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .filter(|sum| *sum <= Self::MAX)
    }
}

impl From<Points> for u32 {
    fn from(from: Points) -> Self {
        from.0
    }
}

impl From<Points> for i64 {
    fn from(from: Points) -> Self {
        i64::from(from.0)
    }
}

impl TryFrom<i64> for Points {
    type Error = PointsOutOfRange;

    fn try_from(from: i64) -> Result<Self, Self::Error> {
        u32::try_from(from)
            .ok()
            .map(Self)
            .filter(|points| *points <= Self::MAX)
            .ok_or(PointsOutOfRange(from))
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}
