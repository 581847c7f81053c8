pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{review_builder::*, review_token_builder::*};

pub mod review_token_builder {

    use super::*;
    use crate::{id::*, review_token::*, time::*};

    #[derive(Debug)]
    pub struct ReviewTokenBuild {
        token: ReviewToken,
    }

    impl ReviewTokenBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.token.id = id.into();
            self
        }
        pub fn place_id(mut self, id: &str) -> Self {
            self.token.place_id = id.into();
            self
        }
        pub fn value(mut self, value: &str) -> Self {
            self.token.value = value.to_string().into();
            self
        }
        pub fn expires_at(mut self, at: Timestamp) -> Self {
            self.token.expires_at = at;
            self
        }
        pub fn used_at(mut self, at: Option<Timestamp>) -> Self {
            self.token.used_at = at;
            self
        }
        pub fn finish(self) -> ReviewToken {
            self.token
        }
    }

    impl Builder for ReviewToken {
        type Build = ReviewTokenBuild;
        fn build() -> ReviewTokenBuild {
            ReviewTokenBuild {
                token: ReviewToken {
                    id: Id::new(),
                    place_id: Id::new(),
                    value: Id::new().to_string().into(),
                    expires_at: Timestamp::now() + ::time::Duration::days(3),
                    used_at: None,
                },
            }
        }
    }
}

pub mod review_builder {

    use super::*;
    use crate::{id::*, review::*, time::*};

    #[derive(Debug)]
    pub struct ReviewBuild {
        review: Review,
    }

    impl ReviewBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.review.id = id.into();
            self
        }
        pub fn user_id(mut self, id: &str) -> Self {
            self.review.user_id = id.into();
            self
        }
        pub fn place_id(mut self, id: &str) -> Self {
            self.review.place_id = id.into();
            self
        }
        pub fn token_id(mut self, id: &str) -> Self {
            self.review.token_id = id.into();
            self
        }
        pub fn content(mut self, content: &str) -> Self {
            self.review.content = content.into();
            self
        }
        pub fn rating(mut self, rating: i16) -> Self {
            self.review.rating = rating.into();
            self
        }
        pub fn created_at(mut self, at: Timestamp) -> Self {
            self.review.created_at = at;
            self
        }
        pub fn deleted_at(mut self, at: Option<Timestamp>) -> Self {
            self.review.deleted_at = at;
            self
        }
        pub fn finish(self) -> Review {
            self.review
        }
    }

    impl Builder for Review {
        type Build = ReviewBuild;
        fn build() -> ReviewBuild {
            ReviewBuild {
                review: Review {
                    id: Id::new(),
                    user_id: Id::new(),
                    place_id: Id::new(),
                    token_id: Id::new(),
                    content: "".into(),
                    rating: RatingValue::max(),
                    created_at: Timestamp::now(),
                    updated_at: None,
                    deleted_at: None,
                },
            }
        }
    }
}
