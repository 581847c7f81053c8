use super::*;

pub fn load_reviews_of_place(
    connections: &sqlite::Connections,
    place_id: &str,
    filter: &ReviewFilter,
) -> Result<Vec<Review>> {
    Ok(usecases::load_reviews_of_place(
        &connections.shared()?,
        place_id,
        filter,
    )?)
}

pub fn user_points(connections: &sqlite::Connections, user_id: &Id) -> Result<Points> {
    Ok(usecases::user_points(&connections.shared()?, user_id)?)
}
