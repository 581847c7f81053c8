use rand::{CryptoRng, Rng};

use super::{issue_review_tokens::refill_review_tokens, *};

pub fn submit_review<G>(
    connections: &sqlite::Connections,
    rng: &mut G,
    policy: &usecases::Policy,
    new_review: usecases::NewReview,
    now: Timestamp,
) -> Result<usecases::SubmittedReview>
where
    G: Rng + CryptoRng + ?Sized,
{
    let user_id = new_review.user_id.clone();
    let place_id = new_review.place_id.clone();
    // Validating and redeeming the token, freezing points,
    // storing the review and awarding points is done within
    // a single transaction. Nothing is stored if any of these
    // steps fails.
    let submitted = connections.exclusive()?.transaction(|conn| {
        usecases::submit_review(conn, &policy.restrictions, new_review, now).map_err(|err| {
            warn!("Rejected review of place {place_id} by user {user_id}: {err}");
            err
        })
    })?;
    info!(
        "User {user_id} reviewed place {} with rating {} and earned {} points",
        submitted.review.place_id,
        RatingPrimitive::from(submitted.review.rating),
        submitted.awarded_points
    );

    // Replenish the token pool of the place after the review
    // has been committed. This must never fail the submission.
    let place_id = &submitted.review.place_id;
    if let Err(err) = refill_review_tokens(connections, rng, &policy.tokens, place_id, now) {
        error!("Failed to refill review tokens of place {place_id}: {err}");
    }

    Ok(submitted)
}
