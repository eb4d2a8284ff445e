mod create_place;
mod delete_account;
mod delete_photo;
mod delete_place;
mod error;
mod greeting;
mod load_places;
mod login;
mod register;
mod share_place;
mod update_place;
mod update_profile;


pub use self::{
    create_place::*, delete_account::*, delete_photo::*, delete_place::*, error::Error,
    greeting::*, load_places::*, login::*, register::*, share_place::*, update_place::*,
    update_profile::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
