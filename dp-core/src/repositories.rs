// Low-level storage access traits.
// Both the local database (guest mode) and the document
// store (logged-in mode) implement them. A place repository
// only ever sees the places of a single owner.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait PlaceRepo {
    /// Stores a new place and returns the id under which it
    /// can be found afterwards. Backends that assign their own
    /// ids ignore `place.id`.
    fn create_place(&self, place: &DreamPlace) -> Result<Id>;

    fn get_place(&self, id: &str) -> Result<DreamPlace>;
    fn all_places(&self) -> Result<Vec<DreamPlace>>;
    fn count_places(&self) -> Result<usize>;

    fn update_place(&self, place: &DreamPlace) -> Result<()>;

    fn delete_place(&self, id: &str) -> Result<()>;
    // Fallback for entries that are only known by their name
    fn delete_places_by_name(&self, name: &str) -> Result<usize>;
}

pub trait UserRepo {
    fn create_account(&self, account: &Account) -> Result<()>;
    fn update_account(&self, account: &Account) -> Result<()>;
    fn delete_account(&self, uid: &str) -> Result<()>;

    fn get_account(&self, uid: &str) -> Result<Account>;
    fn try_get_account_by_email(&self, email: &EmailAddress) -> Result<Option<Account>>;

    fn get_profile(&self, uid: &str) -> Result<UserProfile> {
        self.get_account(uid).map(|account| account.profile)
    }
}
