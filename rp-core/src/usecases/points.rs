use super::prelude::*;

pub fn points_for_rating(rating: RatingValue) -> Points {
    match RatingPrimitive::from(rating) {
        5 => Points::new(10),
        4 => Points::new(5),
        _ => Points::ZERO,
    }
}

pub fn user_points<R: PointsRepo>(repo: &R, user_id: &Id) -> Result<Points> {
    match repo.load_points(user_id) {
        Ok(points) => Ok(points),
        Err(RepoError::NotFound) => Ok(Points::ZERO),
        Err(err) => Err(err.into()),
    }
}
