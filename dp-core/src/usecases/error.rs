use crate::{repositories, util::validate::PlaceInvalidation};
use dp_entities::password;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name is required")]
    Name,
    #[error("The city is required")]
    City,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid photo reference")]
    Photo,
    #[error("The first name is required")]
    FirstName,
    #[error("Invalid email address")]
    Email,
    #[error("The user already exists")]
    UserExists,
    #[error("Invalid password: {0}")]
    Password(#[from] password::ParseError),
    #[error("Invalid credentials")]
    Credentials,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<PlaceInvalidation> for Error {
    fn from(err: PlaceInvalidation) -> Self {
        match err {
            PlaceInvalidation::Name => Self::Name,
            PlaceInvalidation::City => Self::City,
            PlaceInvalidation::Rating => Self::RatingValue,
            PlaceInvalidation::Position => Self::InvalidPosition,
        }
    }
}

impl From<dp_entities::email::EmailAddressParseError> for Error {
    fn from(_: dp_entities::email::EmailAddressParseError) -> Self {
        Self::Email
    }
}

impl From<dp_entities::photo::PhotoRefParseError> for Error {
    fn from(_: dp_entities::photo::PhotoRefParseError) -> Self {
        Self::Photo
    }
}
