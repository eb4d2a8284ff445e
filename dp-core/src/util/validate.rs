use crate::entities::*;
use thiserror::Error;

pub use fast_chemail::is_valid_email;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaceInvalidation {
    #[error("The name is required")]
    Name,
    #[error("The city is required")]
    City,
    #[error("Rating value out of range")]
    Rating,
    #[error("Invalid position")]
    Position,
}

impl Validate for DreamPlace {
    type Error = PlaceInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.trim().is_empty() {
            return Err(Self::Error::Name);
        }
        if self.city.trim().is_empty() {
            return Err(Self::Error::City);
        }
        if !self.rating.is_valid() {
            return Err(Self::Error::Rating);
        }
        if self.pos.is_some() && self.valid_pos().is_none() {
            return Err(Self::Error::Position);
        }
        Ok(())
    }
}

impl AutoCorrect for DreamPlace {
    fn auto_correct(mut self) -> Self {
        self.name = self.name.trim().to_owned();
        self.city = self.city.trim().to_owned();
        self.notes = self.notes.trim().to_owned();
        if !self.visited {
            // Only visited places can be rated
            self.rating = StarRating::default();
        }
        self
    }
}
