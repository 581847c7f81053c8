pub mod db;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use rp_entities::{id::*, points::*, restriction::*, review::*, review_token::*, time::*};
    #[cfg(test)]
    pub use rp_entities::builders::*;
}
