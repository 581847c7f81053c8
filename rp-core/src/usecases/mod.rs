mod edit_review;
mod error;
mod load_reviews;
mod points;
mod policy;
mod restrictions;
mod review_tokens;
mod submit_review;

#[cfg(test)]
pub mod tests;

pub use self::{
    edit_review::*, error::Error, load_reviews::*, points::*, policy::*, restrictions::*,
    review_tokens::*, submit_review::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        db::*,
        entities::*,
        repositories::{Error as RepoError, *},
    };
}
