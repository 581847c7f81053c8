use rand::{CryptoRng, Rng};

use super::prelude::*;
use super::TokenPolicy;

pub fn issue_review_tokens<R, G>(
    repo: &R,
    rng: &mut G,
    policy: &TokenPolicy,
    place_id: &str,
    count: usize,
    now: Timestamp,
) -> Result<Vec<ReviewTokenValue>>
where
    R: ReviewTokenRepo,
    G: Rng + CryptoRng + ?Sized,
{
    let place_id = Id::parse_uuid(place_id).map_err(|_| Error::PlaceId)?;
    if count == 0 || count > policy.max_batch_size {
        return Err(Error::InvalidLimit);
    }
    let expires_at = now + policy.expire_in;
    let tokens: Vec<_> = (0..count)
        .map(|_| ReviewToken {
            id: Id::new(),
            place_id: place_id.clone(),
            value: ReviewTokenValue::generate(rng),
            expires_at,
            used_at: None,
        })
        .collect();
    repo.add_review_tokens(&tokens)?;
    log::debug!("Issued {count} review tokens for place {place_id}");
    Ok(tokens.into_iter().map(|t| t.value).collect())
}

/// Issue a new batch of tokens if the place is running out of unused ones.
///
/// Returns `None` if the place still has enough tokens.
pub fn check_and_refill<R, G>(
    repo: &R,
    rng: &mut G,
    policy: &TokenPolicy,
    place_id: &Id,
    now: Timestamp,
) -> Result<Option<Vec<ReviewTokenValue>>>
where
    R: ReviewTokenRepo,
    G: Rng + CryptoRng + ?Sized,
{
    let unused = repo.count_unused_review_tokens(place_id)?;
    if unused > policy.refill_threshold {
        return Ok(None);
    }
    let values = issue_review_tokens(
        repo,
        rng,
        policy,
        place_id.as_str(),
        policy.refill_batch_size,
        now,
    )?;
    log::info!(
        "Refilled review tokens of place {place_id}: {unused} unused, {} issued",
        values.len()
    );
    Ok(Some(values))
}
