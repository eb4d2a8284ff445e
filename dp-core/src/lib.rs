pub mod distance;
pub mod filter;
pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use dp_entities::{
        email::*, geo::*, id::*, password::*, photo::*, place::*, rating::*, session::*,
        time::*, user::*,
    };
}

pub use repositories::Error as RepoError;
