use super::*;

pub fn update_review(
    connections: &sqlite::Connections,
    review_id: &Id,
    user_id: &Id,
    content: String,
    rating: RatingValue,
    now: Timestamp,
) -> Result<Review> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::update_review(conn, review_id, user_id, content, rating, now).map_err(|err| {
            warn!("Failed to update review {review_id} of user {user_id}: {err}");
            err
        })
    })?)
}

pub fn delete_review(
    connections: &sqlite::Connections,
    review_id: &Id,
    user_id: &Id,
    now: Timestamp,
) -> Result<()> {
    connections.exclusive()?.transaction(|conn| {
        usecases::delete_review(conn, review_id, user_id, now).map_err(|err| {
            warn!("Failed to delete review {review_id} of user {user_id}: {err}");
            err
        })
    })?;
    info!("Deleted review {review_id} of user {user_id}");
    Ok(())
}
