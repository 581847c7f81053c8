use super::prelude::*;

pub const MAX_REVIEWS_LIMIT: u64 = 1_000;

pub fn load_reviews_of_place<R: ReviewRepo>(
    repo: &R,
    place_id: &str,
    filter: &ReviewFilter,
) -> Result<Vec<Review>> {
    let place_id = Id::parse_uuid(place_id).map_err(|_| Error::PlaceId)?;
    if filter.rating.is_some_and(|rating| !rating.is_valid()) {
        return Err(Error::RatingValue);
    }
    if filter
        .limit
        .is_some_and(|limit| limit == 0 || limit > MAX_REVIEWS_LIMIT)
    {
        return Err(Error::InvalidLimit);
    }
    Ok(repo.load_reviews_of_place(&place_id, filter)?)
}
