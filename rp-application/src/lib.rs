#[macro_use]
extern crate log;

mod edit_review;
mod issue_review_tokens;
mod load_reviews;
mod submit_review;

pub mod prelude {
    pub use super::{edit_review::*, issue_review_tokens::*, load_reviews::*, submit_review::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use rp_core::{entities::*, repositories::ReviewFilter, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use rp_db_sqlite::Connections;
}
