use diesel::{
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use dp_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod place;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn parse_rowid(id: &str) -> Result<i64> {
    // Ids that are not row ids can never be found
    Id::from(id).to_rowid().ok_or(repo::Error::NotFound)
}
