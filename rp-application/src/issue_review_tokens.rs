use rand::{CryptoRng, Rng};

use super::*;

pub fn issue_review_tokens<G>(
    connections: &sqlite::Connections,
    rng: &mut G,
    policy: &usecases::TokenPolicy,
    place_id: &str,
    count: usize,
    now: Timestamp,
) -> Result<Vec<ReviewTokenValue>>
where
    G: Rng + CryptoRng + ?Sized,
{
    let values = connections.exclusive()?.transaction(|conn| {
        usecases::issue_review_tokens(conn, rng, policy, place_id, count, now).map_err(|err| {
            warn!("Failed to issue {count} review tokens for place {place_id}: {err}");
            err
        })
    })?;
    info!("Issued {} review tokens for place {place_id}", values.len());
    Ok(values)
}

/// Issue new tokens if the place is running out of unused ones.
pub fn refill_review_tokens<G>(
    connections: &sqlite::Connections,
    rng: &mut G,
    policy: &usecases::TokenPolicy,
    place_id: &Id,
    now: Timestamp,
) -> Result<Option<Vec<ReviewTokenValue>>>
where
    G: Rng + CryptoRng + ?Sized,
{
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::check_and_refill(conn, rng, policy, place_id, now))?)
}
