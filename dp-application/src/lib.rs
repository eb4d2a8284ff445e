#[macro_use]
extern crate log;

mod account;
mod backend;
mod places;

pub mod prelude {
    pub use super::{account::*, backend::*, places::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use dp_core::{entities::*, repositories::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use dp_db_sqlite::Connections;
}
