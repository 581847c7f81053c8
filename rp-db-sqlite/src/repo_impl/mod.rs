// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use rp_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod points;
mod restriction;
mod review;
mod review_token;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            repo::Error::OutOfRange
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn read_only_violation() -> repo::Error {
    log::error!("Write access with a read-only database connection");
    repo::Error::Other(anyhow!("Read-only database connection"))
}
