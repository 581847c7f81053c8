use std::fmt;

use rand::{distributions::Alphanumeric, CryptoRng, Rng};

use crate::{id::*, time::*};

/// The secret, single-use value handed out to reviewers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReviewTokenValue(String);

impl ReviewTokenValue {
    pub const LEN: usize = 16;

    /// Draw a fresh value from a cryptographically secure source.
    pub fn generate<R>(rng: &mut R) -> Self
    where
        R: Rng + CryptoRng + ?Sized,
    {
        let value = (0..Self::LEN)
            .map(|_| char::from(rng.sample(Alphanumeric)))
            .collect();
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ReviewTokenValue {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<ReviewTokenValue> for String {
    fn from(from: ReviewTokenValue) -> Self {
        from.0
    }
}

impl AsRef<str> for ReviewTokenValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReviewTokenValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(&self.0)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewToken {
    pub id         : Id,
    pub place_id   : Id,
    pub value      : ReviewTokenValue,
    pub expires_at : Timestamp,
    pub used_at    : Option<Timestamp>,
}

impl ReviewToken {
    pub fn is_used(&self) -> bool {
        self.used_at.is_some()
    }

    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng as _};

    fn new_token(expires_at: Timestamp) -> ReviewToken {
        ReviewToken {
            id: Id::new(),
            place_id: Id::new(),
            value: "abc".to_string().into(),
            expires_at,
            used_at: None,
        }
    }

    #[test]
    fn generated_values_are_alphanumeric_with_fixed_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let value = ReviewTokenValue::generate(&mut rng);
            assert_eq!(ReviewTokenValue::LEN, value.as_str().len());
            assert!(value.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn should_generate_unique_values() {
        let mut rng = rand::rngs::OsRng;
        let v1 = ReviewTokenValue::generate(&mut rng);
        let v2 = ReviewTokenValue::generate(&mut rng);
        assert_ne!(v1, v2);
    }

    #[test]
    fn seeded_generators_are_reproducible() {
        let v1 = ReviewTokenValue::generate(&mut StdRng::seed_from_u64(42));
        let v2 = ReviewTokenValue::generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(v1, v2);
    }

    #[test]
    fn token_expires_at_its_expiry_time() {
        let now = Timestamp::from_millis(10_000);
        let mut token = new_token(Timestamp::from_millis(10_001));
        assert!(!token.is_expired(now));
        assert!(!token.is_used());

        token.expires_at = now;
        assert!(token.is_expired(now));

        token.used_at = Some(now);
        assert!(token.is_used());
    }
}
