pub mod prelude {
    use rand::{rngs::OsRng, rngs::StdRng, SeedableRng as _};

    pub use rp_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };
    pub use time::Duration;

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{error::AppError, prelude as flows};

    pub const PLACE_A: &str = "6c5ad2bd4a3b4b7e9c0e0f5a1f2e3d4c";
    pub const PLACE_B: &str = "a9e0d3c1b2f14e8d9a7b6c5d4e3f2a1b";
    pub const PLACE_C: &str = "0f1e2d3c4b5a49788796a5b4c3d2e1f0";

    /// Midnight (UTC) of the n-th day of March 2024
    pub fn day(n: i64) -> Timestamp {
        Timestamp::from_millis(1_709_251_200_000) + Duration::days(n)
    }

    pub fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    pub fn new_review(user_id: &str, place_id: &str, rating: i16, token: &str) -> usecases::NewReview {
        usecases::NewReview {
            user_id: user_id.into(),
            place_id: place_id.into(),
            content: format!("Rated with {rating} stars"),
            rating: rating.into(),
            token: token.into(),
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub policy: usecases::Policy,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            rp_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap())
                .unwrap();
            let mut policy = usecases::Policy::default();
            policy.tokens.expire_in = Duration::days(30);
            Self {
                db_connections,
                policy,
            }
        }

        pub fn issue_tokens(
            &self,
            place_id: &str,
            count: usize,
            now: Timestamp,
        ) -> Vec<ReviewTokenValue> {
            flows::issue_review_tokens(
                &self.db_connections,
                &mut OsRng,
                &self.policy.tokens,
                place_id,
                count,
                now,
            )
            .unwrap()
        }

        pub fn submit_review(
            &self,
            user_id: &str,
            place_id: &str,
            rating: i16,
            token: &str,
            now: Timestamp,
        ) -> Result<usecases::SubmittedReview, AppError> {
            flows::submit_review(
                &self.db_connections,
                &mut OsRng,
                &self.policy,
                new_review(user_id, place_id, rating, token),
                now,
            )
        }

        pub fn try_get_token(&self, value: &str) -> Option<ReviewToken> {
            match self
                .db_connections
                .shared()
                .unwrap()
                .get_review_token_by_value(value)
            {
                Ok(token) => Some(token),
                Err(RepoError::NotFound) => None,
                x => x.map(|_| None).unwrap(),
            }
        }

        pub fn count_unused_tokens(&self, place_id: &str) -> usize {
            self.db_connections
                .shared()
                .unwrap()
                .count_unused_review_tokens(&place_id.into())
                .unwrap()
        }

        pub fn reviews_of_place(&self, place_id: &str) -> Vec<Review> {
            flows::load_reviews_of_place(&self.db_connections, place_id, &Default::default())
                .unwrap()
        }

        pub fn user_points(&self, user_id: &str) -> Points {
            flows::user_points(&self.db_connections, &user_id.into()).unwrap()
        }

        pub fn add_points(&self, user_id: &str, points: Points) {
            self.db_connections
                .exclusive()
                .unwrap()
                .add_points(&user_id.into(), points)
                .unwrap();
        }

        pub fn is_restricted(&self, user_id: &str, now: Timestamp) -> bool {
            self.db_connections
                .shared()
                .unwrap()
                .has_active_restriction(&user_id.into(), RestrictionType::PointsFreeze, now)
                .unwrap()
        }
    }
}
