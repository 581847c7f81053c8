use crate::repositories::*;

pub trait Db: ReviewTokenRepo + ReviewRepo + RestrictionRepo + PointsRepo {}

impl<T> Db for T where T: ReviewTokenRepo + ReviewRepo + RestrictionRepo + PointsRepo {}
