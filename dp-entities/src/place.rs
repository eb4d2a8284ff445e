use crate::{geo::*, id::*, photo::*, rating::*, time::*};

/// A travel destination on the wishlist.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct DreamPlace {
    pub id         : Id,
    pub name       : String,
    pub city       : String,
    pub notes      : String,
    pub photos     : Vec<PhotoRef>,
    pub visited    : bool,
    pub rating     : StarRating,
    /// `None` if no location has been picked yet.
    pub pos        : Option<MapPoint>,
    pub created_at : Option<Timestamp>,
}

impl DreamPlace {
    /// The position if it denotes a real location.
    pub fn valid_pos(&self) -> Option<MapPoint> {
        self.pos.filter(|pos| pos.is_valid())
    }

    pub fn has_photo(&self, photo: &PhotoRef) -> bool {
        self.photos.iter().any(|p| p == photo)
    }

    /// Removes all occurrences of the given photo and returns
    /// `true` if anything has been removed.
    pub fn remove_photo(&mut self, photo: &PhotoRef) -> bool {
        let count = self.photos.len();
        self.photos.retain(|p| p != photo);
        self.photos.len() != count
    }
}
